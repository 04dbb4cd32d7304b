#![forbid(unsafe_code)]

//! Orthogonal graph layout: the compaction stage of topology-shape-metrics.
//!
//! Given a planar embedding and an orthogonal representation (per-half-edge
//! turning angles plus bend counts), [`compact`] materializes bend points as
//! synthetic nodes, assigns every segment a compass side, solves one
//! minimum-cost flow per axis for minimum segment lengths, and integrates
//! the result into integer coordinates.
//!
//! The pipeline is headless, fully sequential and deterministic: identical
//! inputs produce identical drawings. Planarization and orthogonalization
//! are upstream concerns; rendering is downstream.

use std::borrow::Cow;

pub use selkie_dcel as dcel;

mod bends;
mod flow;
mod layout;
mod lengths;
mod sides;

pub mod error;
pub mod model;

pub use error::{Axis, Error, Result};
pub use model::{Drawing, OrthoRep, Point, Side, Turn};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Compact an orthogonal representation into a drawing.
///
/// The input embedding is borrowed untouched when the representation has no
/// bends; otherwise both the embedding and the angle assignment are cloned
/// once, up front, and the clones are rewritten in place.
pub fn compact<'a>(planar: &'a dcel::PlanarEmbedding, ortho: &OrthoRep) -> Result<Drawing<'a>> {
    let mut planar: Cow<'a, dcel::PlanarEmbedding> = Cow::Borrowed(planar);
    let mut ortho: Cow<'_, OrthoRep> = Cow::Borrowed(ortho);

    let cost = ortho.cost();
    if cost > 0 {
        tracing::debug!(cost, "cloning embedding to insert bend points");
        let inserted = bends::run(planar.to_mut(), ortho.to_mut())?;
        debug_assert_eq!(inserted as u32, cost);
    }

    let sides = sides::run(&planar, &ortho)?;
    let lengths = lengths::run(&planar, &sides)?;
    tracing::debug!(
        faces = planar.face_count(),
        half_edges = planar.half_edge_count(),
        "assigned sides and segment lengths"
    );
    let pos = layout::run(&planar, &sides, &lengths);

    Ok(Drawing {
        embedding: planar,
        sides,
        lengths,
        pos,
    })
}
