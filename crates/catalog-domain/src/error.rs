//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Boxed error used as the `source` of contextual variants
pub type BoxedSource = Box<dyn std::error::Error + Send + Sync>;

/// Main error type for the product catalog
#[derive(Error, Debug)]
pub enum Error {
    /// Product identifier is empty
    #[error("invalid product ID")]
    InvalidProductId,

    /// Product name is empty
    #[error("invalid product name")]
    InvalidProductName,

    /// Product description is empty
    #[error("invalid product description")]
    InvalidProductDescription,

    /// Product price is not a positive, finite number
    #[error("invalid product price")]
    InvalidProductPrice,

    /// A product with the same identifier is already stored
    #[error("product already exists")]
    AlreadyExists,

    /// No product is stored under the requested identifier
    #[error("product not found")]
    NotFound,

    /// Storage backend failure
    #[error("error in repository: {message}")]
    Repository {
        /// Description of the repository failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedSource>,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedSource>,
    },

    /// Component construction failed during startup
    #[error("Bootstrap error: {message}")]
    Bootstrap {
        /// Description of the failed construction step
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedSource>,
    },

    /// Infrastructure operation error
    #[error("Infrastructure error: {message}")]
    Infrastructure {
        /// Description of the infrastructure error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedSource>,
    },

    /// I/O operation error
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error
        #[from]
        source: std::io::Error,
    },

    /// JSON parsing or serialization error
    #[error("JSON parsing error: {source}")]
    Json {
        /// The underlying JSON error
        #[from]
        source: serde_json::Error,
    },
}

// Product validation helpers
impl Error {
    /// Whether the error was caused by invalid caller input
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidProductId
                | Self::InvalidProductName
                | Self::InvalidProductDescription
                | Self::InvalidProductPrice
        )
    }
}

// Repository error creation methods
impl Error {
    /// Create a repository error
    pub fn repository<S: Into<String>>(message: S) -> Self {
        Self::Repository {
            message: message.into(),
            source: None,
        }
    }

    /// Create a repository error with source
    pub fn repository_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Repository {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Configuration and bootstrap error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a bootstrap error
    pub fn bootstrap<S: Into<String>>(message: S) -> Self {
        Self::Bootstrap {
            message: message.into(),
            source: None,
        }
    }

    /// Create a bootstrap error with source
    pub fn bootstrap_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Bootstrap {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Infrastructure error creation methods
impl Error {
    /// Create an infrastructure error
    pub fn infrastructure<S: Into<String>>(message: S) -> Self {
        Self::Infrastructure {
            message: message.into(),
            source: None,
        }
    }

    /// Create an infrastructure error with source
    pub fn infrastructure_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Infrastructure {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}
