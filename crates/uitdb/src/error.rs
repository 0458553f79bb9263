#[derive(thiserror::Error, Debug, serde::Deserialize, serde::Serialize)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
