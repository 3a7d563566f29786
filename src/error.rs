use thiserror::Error;

pub type Result<T> = std::result::Result<T, AnokiError>;

#[derive(Error, Debug)]
pub enum AnokiError {
    #[error("storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("config write error: {0}")]
    ConfigWrite(#[from] toml::ser::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unknown tool: {0}")]
    UnknownTool(String),

    #[error("invalid step transition: step {index} is {from}, cannot become {to}")]
    StepTransition {
        index: usize,
        from: &'static str,
        to: &'static str,
    },

    #[error("{0}")]
    Usage(String),
}
