#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("no book titled {0:?}")]
    NotFound(String),
    #[error("duplicate book title in catalogue: {0:?}")]
    DuplicateTitle(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("failed to read catalogue file: {0}")]
    FileRead(std::io::Error),
    #[error("failed to deserialize YAML: {0}")]
    YamlDeserialization(serde_yaml::Error),
}

impl CatalogError {
    /// Whether this error is the lookup miss that callers turn into a redirect.
    pub fn is_not_found(&self) -> bool {
        matches!(self, CatalogError::NotFound(_))
    }
}

pub type CatalogResult<T> = std::result::Result<T, CatalogError>;
