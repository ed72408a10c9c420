// Typed errors raised by the infrastructure adapters
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("Dataset read error ({path}): {source}")]
    DatasetRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Dataset parse error: {0}")]
    DatasetParse(#[from] serde_json::Error),

    #[error("Theme storage error: {0}")]
    ThemeStorage(String),
}

impl From<toml::de::Error> for DashboardError {
    fn from(err: toml::de::Error) -> Self {
        DashboardError::ThemeStorage(err.to_string())
    }
}

impl From<toml::ser::Error> for DashboardError {
    fn from(err: toml::ser::Error) -> Self {
        DashboardError::ThemeStorage(err.to_string())
    }
}
