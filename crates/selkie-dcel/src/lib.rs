#![forbid(unsafe_code)]

//! Planar embedding storage used by `selkie`.
//!
//! A planar graph together with a rotation system (the clockwise order of
//! edges around each node) determines a face structure; this crate stores
//! that structure as a doubly connected edge list. Nodes, half-edges and
//! faces live in flat arenas and point at each other through typed index
//! handles, so the whole embedding is `Clone` without any pointer chasing.

mod build;
mod embedding;
mod error;

pub use build::EmbeddingBuilder;
pub use embedding::{EdgeSplit, FaceCycle, PlanarEmbedding};
pub use error::{Error, Result};

/// Handle of a node in a [`PlanarEmbedding`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

/// Handle of a directed half-edge in a [`PlanarEmbedding`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HalfEdgeId(pub u32);

/// Handle of a face in a [`PlanarEmbedding`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FaceId(pub u32);

impl NodeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl HalfEdgeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl FaceId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A node of the embedded graph. Bend nodes are synthetic nodes inserted
/// while materializing an orthogonal representation.
#[derive(Debug, Clone)]
pub struct Node {
    pub name: String,
    pub bend: bool,
}

/// One of the two directed representations of an undirected edge.
///
/// `next` is the successor around the incident face, so following `next`
/// from any half-edge walks that face's whole boundary cycle. The face a
/// half-edge is incident to lies to one fixed side of it; the face on the
/// other side is its twin's.
#[derive(Debug, Clone, Copy)]
pub struct HalfEdge {
    pub origin: NodeId,
    pub twin: HalfEdgeId,
    pub next: HalfEdgeId,
    pub face: FaceId,
}

/// A face of the embedding. `first` is the half-edge its boundary walk
/// starts from; exactly one face per embedding is `external`.
#[derive(Debug, Clone, Copy)]
pub struct Face {
    pub first: HalfEdgeId,
    pub external: bool,
}
