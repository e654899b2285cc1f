use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReconError {
    #[error("Invalid format: '{filename}' is not a .csv file")]
    InvalidFormat { filename: String },

    #[error("File is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),

    #[error("Required column '{column}' missing from header")]
    Schema { column: String },

    #[error("No usable client codes found in the file")]
    NoCodesFound,

    #[error("No rows match an authorized client code")]
    NoMatchingRows,

    #[error("CSV processing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Registry request failed: {0}")]
    Registry(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfig { field: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl ReconError {
    /// True for errors caused by the uploaded file itself. The transport
    /// collaborator maps these to a rejected request (400) and everything
    /// else to a generic internal failure (500).
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            ReconError::InvalidFormat { .. }
                | ReconError::Encoding(_)
                | ReconError::Schema { .. }
                | ReconError::NoCodesFound
                | ReconError::NoMatchingRows
                | ReconError::Csv(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, ReconError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_errors_are_rejections() {
        assert!(ReconError::InvalidFormat {
            filename: "x.txt".to_string()
        }
        .is_user_error());
        assert!(ReconError::NoCodesFound.is_user_error());
        assert!(ReconError::NoMatchingRows.is_user_error());
        assert!(ReconError::Schema {
            column: "Codice committente".to_string()
        }
        .is_user_error());
    }

    #[test]
    fn internal_errors_are_not_rejections() {
        assert!(!ReconError::Internal {
            message: "boom".to_string()
        }
        .is_user_error());
        assert!(!ReconError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing"
        ))
        .is_user_error());
        assert!(!ReconError::MissingConfig {
            field: "registry_endpoint".to_string()
        }
        .is_user_error());
    }
}
