use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown risk level: {0}")]
    UnknownRiskLevel(String),
    #[error("Unknown route type: {0}")]
    UnknownRouteType(String),
    #[error("City not found in the catalog: {0}")]
    CityNotFound(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}
