use std::fmt;

#[derive(Debug)]
pub enum SpatialError {
    /// No configuration file reachable from the searched locations.
    ConfigMissing(Vec<String>),
    /// A configuration key is absent or its value cannot be used.
    ConfigInvalid(String),
    /// The well record source could not be reached or returned unusable rows.
    ConnectionFailure(String),
    MalformedCoordinate { tag: String, record: String },
    DuplicateWellCoordinate { locus: String, col: usize, row: usize },
    /// A frequency with a zero denominator.
    UndefinedFrequency,
    Render(String),
    Io(std::io::Error),
}

impl std::error::Error for SpatialError {}

impl fmt::Display for SpatialError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SpatialError::ConfigMissing(searched) => {
                write!(f, "No config file found (searched: {})", searched.join(", "))
            }
            SpatialError::ConfigInvalid(msg) => write!(f, "Invalid configuration: {}", msg),
            SpatialError::ConnectionFailure(msg) => {
                write!(f, "Well record source unavailable: {}", msg)
            }
            SpatialError::MalformedCoordinate { tag, record } => {
                write!(f, "Malformed well coordinate '{}' in record {}", tag, record)
            }
            SpatialError::DuplicateWellCoordinate { locus, col, row } => write!(
                f,
                "Duplicate well coordinate for locus {}: column {}, row {}",
                locus, col, row
            ),
            SpatialError::UndefinedFrequency => write!(f, "Frequency undefined (zero denominator)"),
            SpatialError::Render(msg) => write!(f, "Failed to render figure: {}", msg),
            SpatialError::Io(err) => write!(f, "{}", err),
        }
    }
}

impl From<std::io::Error> for SpatialError {
    fn from(err: std::io::Error) -> Self {
        SpatialError::Io(err)
    }
}
