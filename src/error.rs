#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Body `{0}` not found")]
    UnknownBody(String),

    #[error("Moon host `{0}` is not in the planet table")]
    MissingMoonHost(String),

    #[error("Logger error: `{0}`")]
    Logger(#[from] flexi_logger::FlexiLoggerError),
}

pub type Result<T> = std::result::Result<T, Error>;
