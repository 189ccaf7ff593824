use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("unsupported language \"{code}\" (supported: {supported})")]
    UnsupportedLanguage { code: String, supported: String },

    #[error("file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("style \"{0}\" is not registered")]
    UnknownStyle(String),

    #[error("sheet \"{0}\" not found")]
    SheetNotFound(String),

    #[error("failed to build workbook: {0}")]
    Workbook(String),

    #[error("failed to write {path}: {details}")]
    WriteXlsx { path: PathBuf, details: String },

    #[error("invalid Excel file: {path} ({details})")]
    InvalidExcel { path: PathBuf, details: String },

    #[error("{path} has sheets [{found}], expected [{expected}]")]
    LayoutMismatch {
        path: PathBuf,
        expected: String,
        found: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::UnsupportedLanguage { .. } => 2,
            Error::FileNotFound(_) => 1,
            Error::UnknownStyle(_) => 3,
            Error::SheetNotFound(_) => 3,
            Error::Workbook(_) => 3,
            Error::WriteXlsx { .. } => 4,
            Error::InvalidExcel { .. } => 5,
            Error::LayoutMismatch { .. } => 5,
            Error::Io(_) => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
