//! Construction layer errors

use thiserror::Error;

/// Error returned by a recipe builder
pub type BuildError = Box<dyn std::error::Error + Send + Sync>;

/// Result alias for registry and factory operations
pub type RegistryResult<T> = std::result::Result<T, RegistryError>;

/// Failure while resolving or building a component
#[derive(Error, Debug)]
pub enum RegistryError {
    /// `create` was called for a name with no registered recipe
    #[error("recipe not found: {name}")]
    RecipeNotFound {
        /// Requested recipe name
        name: String,
    },

    /// A recipe declared a dependency that is not in the registry
    #[error("dependency not found: {key} (required by recipe {recipe})")]
    DependencyNotFound {
        /// Recipe being built
        recipe: String,
        /// Missing registry key
        key: String,
    },

    /// Direct typed resolution of a key that was never registered
    #[error("dependency not found: {key}")]
    NotFound {
        /// Missing registry key
        key: String,
    },

    /// The value under `key` is not of the requested type
    #[error("dependency {key} is not a {expected}")]
    TypeMismatch {
        /// Registry key
        key: String,
        /// Name of the type the caller asked for
        expected: &'static str,
    },

    /// A builder asked for a key its recipe never declared
    #[error("dependency {key} was not declared by the recipe")]
    UndeclaredDependency {
        /// Requested key
        key: String,
    },

    /// The recipe's builder rejected its inputs
    #[error("failed to build {recipe}: {source}")]
    Builder {
        /// Recipe whose builder failed
        recipe: String,
        /// Error reported by the builder
        #[source]
        source: BuildError,
    },
}

impl RegistryError {
    /// True for any "key is absent" condition, including missing recipes
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::RecipeNotFound { .. } | Self::DependencyNotFound { .. } | Self::NotFound { .. }
        )
    }

    /// The registry key or recipe name the error refers to
    pub fn subject(&self) -> &str {
        match self {
            Self::RecipeNotFound { name } => name,
            Self::DependencyNotFound { key, .. }
            | Self::NotFound { key }
            | Self::TypeMismatch { key, .. }
            | Self::UndeclaredDependency { key } => key,
            Self::Builder { recipe, .. } => recipe,
        }
    }
}
