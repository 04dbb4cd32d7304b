pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("duplicate node name {name:?}")]
    DuplicateNode { name: String },

    #[error("rotation at {node:?} references unknown node {neighbor:?}")]
    UnknownNode { node: String, neighbor: String },

    #[error("self-loop at {node:?} is not supported")]
    SelfLoop { node: String },

    #[error("edge {from:?} -> {to:?} appears twice in the rotation system")]
    DuplicateEdge { from: String, to: String },

    #[error("rotation at {to:?} is missing the reverse entry for {from:?}")]
    MissingTwin { from: String, to: String },

    #[error("external face edge {from:?} -> {to:?} does not exist")]
    UnknownExternalEdge { from: String, to: String },
}
