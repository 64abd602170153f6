use indicatif::style::TemplateError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum UaError {
    #[error("no device model pool for OS major version {major:?}")]
    LookupError { major: String },
    #[error("OS version {version:?} appears more than once")]
    DuplicateOsVersion { version: String },
    #[error("reference table '{table}' is empty")]
    EmptyReferenceTable { table: &'static str },
    #[error("malformed User-Agent - {message:?}")]
    MalformedUserAgent { message: String },
    #[error("standard I/O error - {e}")]
    StdIoError { e: std::io::Error },
    #[error("CLI argument error - {message:?}")]
    CliArgumentError { message: String },
    #[error("CLI argument error ({e})")]
    ClapError { e: clap::Error },
    #[error("progress bar template error - {e}")]
    ProgressBarError { e: TemplateError },
}

impl From<std::io::Error> for UaError {
    fn from(e: std::io::Error) -> Self {
        UaError::StdIoError { e }
    }
}

impl From<clap::Error> for UaError {
    fn from(e: clap::Error) -> Self {
        UaError::ClapError { e }
    }
}

impl From<TemplateError> for UaError {
    fn from(e: TemplateError) -> Self {
        UaError::ProgressBarError { e }
    }
}
