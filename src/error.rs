use std::fmt;

/// Error type shared by the dataset loader and the record generator.
#[derive(Debug)]
pub enum IdforgeError {
    DatasetRead(String),
    DatasetParse(String),
    MissingField { index: usize, field: &'static str },
    EmptyAreaData,
}

impl fmt::Display for IdforgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdforgeError::DatasetRead(e) => write!(f, "Failed to read area dataset: {}", e),
            IdforgeError::DatasetParse(e) => write!(f, "Failed to parse area dataset: {}", e),
            IdforgeError::MissingField { index, field } => {
                write!(
                    f,
                    "Area entry {} is missing required field '{}'",
                    index, field
                )
            }
            IdforgeError::EmptyAreaData => {
                write!(f, "Area index contains no province-level entries")
            }
        }
    }
}

impl std::error::Error for IdforgeError {}
