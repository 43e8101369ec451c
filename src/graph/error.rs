use crate::config::ConfigError;
use std::fmt;

/// Error types for graph construction and queries
#[derive(Debug, Clone, PartialEq)]
pub enum GraphError {
    InvalidConfiguration(ConfigError),
    IndexOutOfRange { index: usize, node_count: usize },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphError::InvalidConfiguration(err) => write!(f, "Invalid configuration: {}", err),
            GraphError::IndexOutOfRange { index, node_count } => write!(
                f,
                "Node {} is out of range (graph has {} nodes)",
                index, node_count
            ),
        }
    }
}

impl std::error::Error for GraphError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GraphError::InvalidConfiguration(err) => Some(err),
            GraphError::IndexOutOfRange { .. } => None,
        }
    }
}

impl From<ConfigError> for GraphError {
    fn from(err: ConfigError) -> Self {
        GraphError::InvalidConfiguration(err)
    }
}
