use thiserror::Error;

#[derive(Error, Debug)]
pub enum SalaryLookupError {
    #[error("Error de configuración: {0}")]
    Config(String),

    #[error("Error del cliente HTTP: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Error de JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Error de E/S: {0}")]
    Io(#[from] std::io::Error),

    #[error("Error de entrada: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error(transparent)]
    Common(#[from] salary_lookup_common::Error),
}

pub type Result<T> = std::result::Result<T, SalaryLookupError>;
