use crate::plate::PlateGeometry;
use crate::utils::{Result, SpatialError};
use std::{
    collections::HashMap,
    fs,
    io::BufRead,
    path::{Path, PathBuf},
    str::FromStr,
};

pub const CONFIG_FILE_NAME: &str = "config";

/// Flat key/value view of a `key=value` configuration file.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RawConfig {
    entries: HashMap<String, String>,
}

impl RawConfig {
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut entries = HashMap::new();
        for (line_number, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| {
                SpatialError::ConfigInvalid(format!("Error reading line {}: {}", line_number + 1, e))
            })?;
            if line.trim_start().starts_with('#') {
                continue;
            }
            if let Some((key, value)) = line.split_once('=') {
                entries.insert(key.trim().to_string(), value.trim().to_string());
            }
        }
        Ok(Self { entries })
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let file = fs::File::open(path)
            .map_err(|_| SpatialError::ConfigMissing(vec![path.display().to_string()]))?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(|s| s.as_str())
    }

    fn require(&self, key: &str) -> Result<&str> {
        self.get(key)
            .ok_or_else(|| SpatialError::ConfigInvalid(format!("{} key missing", key)))
    }

    fn require_parsed<T: FromStr>(&self, key: &str) -> Result<T> {
        let value = self.require(key)?;
        value.parse::<T>().map_err(|_| {
            SpatialError::ConfigInvalid(format!("{}: cannot parse '{}'", key, value))
        })
    }
}

/// Looks for the configuration file in `dir`, then in its parent.
pub fn locate_config(dir: &Path) -> Result<PathBuf> {
    let candidates = [
        dir.join(CONFIG_FILE_NAME),
        dir.join("..").join(CONFIG_FILE_NAME),
    ];
    for candidate in &candidates {
        if candidate.is_file() {
            return Ok(candidate.clone());
        }
    }
    Err(SpatialError::ConfigMissing(
        candidates.iter().map(|c| c.display().to_string()).collect(),
    ))
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub database: String,
    pub geometry: PlateGeometry,
    pub min_reads: u32,
    pub auth_group: Option<String>,
}

impl Config {
    pub fn from_raw(raw: &RawConfig) -> Result<Self> {
        let database = raw.require("database")?.to_string();
        let (cols, rows) = match raw.get("matrix") {
            Some(encoding) => decode_matrix(encoding)?,
            None => (raw.require_parsed("ncols")?, raw.require_parsed("nrows")?),
        };
        let geometry = PlateGeometry::new(
            cols,
            rows,
            raw.require_parsed("ncols_per_plate")?,
            raw.require_parsed("nrows_per_plate")?,
        )?;
        let min_reads = raw.require_parsed("n_consensus")?;
        let auth_group = raw.get("db_group_auth").map(|s| s.to_string());

        Ok(Self {
            database,
            geometry,
            min_reads,
            auth_group,
        })
    }

    /// Loads the explicit file if given, otherwise searches from the
    /// working directory. Returns the config together with its location.
    pub fn load(explicit: Option<&Path>) -> Result<(Self, PathBuf)> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => locate_config(&std::env::current_dir()?)?,
        };
        log::debug!("Reading configuration from {}", path.display());
        let raw = RawConfig::from_path(&path)?;
        Ok((Self::from_raw(&raw)?, path))
    }
}

fn decode_matrix(encoding: &str) -> Result<(usize, usize)> {
    let error = || SpatialError::ConfigInvalid(format!("matrix: expected <cols>_<rows>, got '{}'", encoding));
    let (cols, rows) = encoding.split_once('_').ok_or_else(error)?;
    let cols = cols.parse().map_err(|_| error())?;
    let rows = rows.parse().map_err(|_| error())?;
    Ok((cols, rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const TCR_CONFIG: &str = "\
# comment line
 # indented comment=ignored
database=tcr_db
matrix=24_16
nrows_per_plate=8
ncols_per_plate=12
n_consensus=10
db_group_auth=mysql_tcr
no assignment here
";

    #[test]
    fn raw_config_skips_comments() {
        let raw = RawConfig::from_reader(Cursor::new(TCR_CONFIG)).unwrap();
        assert_eq!(raw.get("database"), Some("tcr_db"));
        assert_eq!(raw.get("# comment line"), None);
        assert_eq!(raw.get(" # indented comment"), None);
        assert_eq!(raw.get("# indented comment"), None);
    }

    #[test]
    fn raw_config_splits_on_first_equals() {
        let raw = RawConfig::from_reader(Cursor::new("url=a=b\n")).unwrap();
        assert_eq!(raw.get("url"), Some("a=b"));
    }

    #[test]
    fn typed_config_from_matrix_key() {
        let raw = RawConfig::from_reader(Cursor::new(TCR_CONFIG)).unwrap();
        let config = Config::from_raw(&raw).unwrap();
        assert_eq!(config.database, "tcr_db");
        assert_eq!(config.geometry.cols(), 24);
        assert_eq!(config.geometry.rows(), 16);
        assert_eq!(config.geometry.cols_per_plate(), 12);
        assert_eq!(config.geometry.rows_per_plate(), 8);
        assert_eq!(config.min_reads, 10);
        assert_eq!(config.auth_group.as_deref(), Some("mysql_tcr"));
    }

    #[test]
    fn typed_config_from_separate_extent_keys() {
        let data = "database=igdb\nncols=24\nnrows=16\nnrows_per_plate=8\nncols_per_plate=12\nn_consensus=3\n";
        let raw = RawConfig::from_reader(Cursor::new(data)).unwrap();
        let config = Config::from_raw(&raw).unwrap();
        assert_eq!(config.geometry.total_wells(), 384);
        assert_eq!(config.auth_group, None);
    }

    #[test]
    fn missing_key_is_invalid() {
        let raw = RawConfig::from_reader(Cursor::new("database=x\nmatrix=2_2\n")).unwrap();
        let err = Config::from_raw(&raw).unwrap_err();
        assert!(matches!(err, SpatialError::ConfigInvalid(_)));
    }

    #[test]
    fn bad_matrix_encoding_is_invalid() {
        assert!(decode_matrix("24x16").is_err());
        assert!(decode_matrix("24_").is_err());
        assert_eq!(decode_matrix("24_16").unwrap(), (24, 16));
    }

    #[test]
    fn config_found_in_parent_directory() {
        let root = tempfile::tempdir().unwrap();
        let child = root.path().join("scripts");
        fs::create_dir(&child).unwrap();
        fs::write(root.path().join(CONFIG_FILE_NAME), TCR_CONFIG).unwrap();
        let found = locate_config(&child).unwrap();
        assert_eq!(found, child.join("..").join(CONFIG_FILE_NAME));
    }

    #[test]
    fn config_in_current_directory_wins() {
        let root = tempfile::tempdir().unwrap();
        let child = root.path().join("scripts");
        fs::create_dir(&child).unwrap();
        fs::write(root.path().join(CONFIG_FILE_NAME), TCR_CONFIG).unwrap();
        fs::write(child.join(CONFIG_FILE_NAME), TCR_CONFIG).unwrap();
        assert_eq!(locate_config(&child).unwrap(), child.join(CONFIG_FILE_NAME));
    }

    #[test]
    fn no_config_anywhere_is_missing() {
        let root = tempfile::tempdir().unwrap();
        let child = root.path().join("scripts");
        fs::create_dir(&child).unwrap();
        assert!(matches!(
            locate_config(&child),
            Err(SpatialError::ConfigMissing(_))
        ));
    }
}
