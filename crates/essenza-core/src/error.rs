use thiserror::Error;

/// Errors from loading or using the product catalog.
///
/// Every variant is a user-facing notice, not a fault: callers surface
/// the message and carry on.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be read from disk.
    #[error("failed to read catalog file {path}: {source}")]
    FileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The catalog file is not valid YAML or does not match the schema.
    #[error("failed to parse catalog file: {0}")]
    FileParse(#[from] serde_yaml::Error),

    /// The catalog parsed but violates a structural invariant.
    #[error("catalog validation failed: {0}")]
    Validation(String),

    /// No product with the given id exists in the catalog.
    #[error("unknown product id: {0}")]
    UnknownProduct(String),

    /// Every size of the product is blocked, so nothing can be added.
    #[error("no available size variations for product '{0}'")]
    NoPurchasableVariation(String),

    /// The requested size does not exist on the product or is blocked.
    #[error("size '{size}' is not available for product '{product_id}'")]
    UnavailableSize { product_id: String, size: String },
}

/// Errors from loading the application configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
