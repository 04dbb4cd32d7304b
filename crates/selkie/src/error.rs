use std::fmt;

use selkie_dcel::FaceId;

pub type Result<T> = std::result::Result<T, Error>;

/// Compaction failures.
///
/// A well-formed orthogonal representation cannot trigger any of these;
/// they all indicate a broken invariant in whatever produced the embedding
/// or the angle assignment, not a recoverable input condition.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("no feasible {axis} segment lengths; the angle assignment violates its face angle sums")]
    Infeasible { axis: Axis },

    #[error("face {face:?} has no resolved neighbor during side propagation; the dual graph is disconnected")]
    UnresolvedFace { face: FaceId },

    #[error("bend node name {name:?} collides with an existing node")]
    BendCollision { name: String },
}

/// Which of the two decoupled length problems failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Axis::Horizontal => "horizontal",
            Axis::Vertical => "vertical",
        })
    }
}
