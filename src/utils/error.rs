use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("file {path} does not exist")]
    MissingFile { path: String },

    #[error("file {path} is not a {expected} file")]
    WrongExtension { path: String, expected: String },

    #[error("no read access to file {path}")]
    Unreadable { path: String },

    #[error("no valid files to process")]
    NoInputFiles,

    #[error("file {path} not found")]
    FileNotFound { path: String },

    #[error("no permission to read file {path}")]
    PermissionDenied { path: String },

    #[error("failed to read file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode file {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: csv::Error,
    },

    #[error("no data could be read from the given files")]
    NoRecords,

    #[error("unknown report type: {name}")]
    UnknownReport { name: String },

    #[error("failed to render report: {message}")]
    RenderError { message: String },

    #[error("CSV output error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl ReportError {
    /// Maps an error raised while opening `path` for ingestion.
    pub fn from_open(path: &str, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => Self::FileNotFound {
                path: path.to_string(),
            },
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied {
                path: path.to_string(),
            },
            _ => Self::Io {
                path: path.to_string(),
                source: err,
            },
        }
    }

    /// Maps a reader failure inside `path`; wrapped I/O errors keep their kind.
    pub fn from_csv(path: &str, err: csv::Error) -> Self {
        if let csv::ErrorKind::Io(io_err) = err.kind() {
            let io_err = std::io::Error::new(io_err.kind(), io_err.to_string());
            return Self::from_open(path, io_err);
        }
        Self::Decode {
            path: path.to_string(),
            source: err,
        }
    }

    /// Every error is fatal and terminates with status 1.
    pub fn exit_code(&self) -> i32 {
        1
    }
}

pub type Result<T> = std::result::Result<T, ReportError>;
