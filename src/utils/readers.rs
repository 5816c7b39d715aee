use super::{Result, SpatialError};
use flate2::read::MultiGzDecoder;
use std::fs::File;
use std::io::{BufReader, Read as ioRead};
use std::path::Path;

pub fn open_table_reader(path: &Path) -> Result<BufReader<Box<dyn ioRead>>> {
    fn is_gzipped(path: &Path) -> bool {
        let path_str = path.to_string_lossy().to_lowercase();
        path_str.ends_with(".gz") || path_str.ends_with(".gzip")
    }
    let file = File::open(path).map_err(|e| {
        SpatialError::ConnectionFailure(format!("{}: {}", path.display(), e))
    })?;
    if is_gzipped(path) {
        let gz_decoder = MultiGzDecoder::new(file);
        if gz_decoder.header().is_some() {
            Ok(BufReader::new(Box::new(gz_decoder)))
        } else {
            Err(SpatialError::ConnectionFailure(format!(
                "Invalid gzip header: {}",
                path.to_string_lossy()
            )))
        }
    } else {
        Ok(BufReader::new(Box::new(file)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::{write::GzEncoder, Compression};
    use std::io::{BufRead, Write};

    #[test]
    fn reads_plain_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("table.tsv");
        std::fs::write(&path, "a\tb\n1\t2\n").unwrap();
        let lines: Vec<String> = open_table_reader(&path)
            .unwrap()
            .lines()
            .map(|l| l.unwrap())
            .collect();
        assert_eq!(lines, vec!["a\tb", "1\t2"]);
    }

    #[test]
    fn reads_gzipped_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("table.tsv.gz");
        let mut encoder = GzEncoder::new(File::create(&path).unwrap(), Compression::default());
        encoder.write_all(b"a\tb\n1\t2\n").unwrap();
        encoder.finish().unwrap();
        let lines: Vec<String> = open_table_reader(&path)
            .unwrap()
            .lines()
            .map(|l| l.unwrap())
            .collect();
        assert_eq!(lines, vec!["a\tb", "1\t2"]);
    }

    #[test]
    fn missing_file_is_connection_failure() {
        let result = open_table_reader(Path::new("/nonexistent/table.tsv"));
        assert!(matches!(result, Err(SpatialError::ConnectionFailure(_))));
    }
}
