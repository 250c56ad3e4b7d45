use thiserror::Error;

#[derive(Debug, Error)]
pub enum DeviceError {
    #[error("Request error")]
    Request(#[from] reqwest::Error),

    #[error("Status is not zero: {0}")]
    StatusNotZero(String),

    #[error("Invalid temperature: {0}")]
    InvalidTemperature(String),

    #[error("{0}")]
    Context(String),
}

#[derive(Debug, Error)]
pub enum AccessoryError {
    #[error("URL not supplied")]
    UrlNotSupplied,

    #[error("Invalid characteristic value: {0}")]
    InvalidValue(serde_json::Value),

    #[error("Characteristic {0:?} is read only")]
    ReadOnly(crate::homekit::Characteristic),

    #[error("{0}")]
    Context(String),
}
