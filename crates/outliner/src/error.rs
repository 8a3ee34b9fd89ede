use thiserror::Error;

use crate::id::NodeId;

#[derive(Error, Debug)]
pub enum OutlineError {
    #[error("Node not found: {0}")]
    NodeNotFound(NodeId),

    #[error("Duplicate node id: {0}")]
    DuplicateId(NodeId),

    #[error("Title cannot be empty")]
    EmptyTitle,

    #[error("Config error: {0}")]
    Config(String),
}

impl From<confique::Error> for OutlineError {
    fn from(err: confique::Error) -> Self {
        OutlineError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, OutlineError>;
