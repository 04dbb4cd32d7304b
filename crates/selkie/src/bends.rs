//! Materialize bend points as synthetic embedding nodes.
//!
//! Every half-edge carrying a positive bend count is rewritten into a
//! chain of unit segments through fresh bend nodes, and the angle
//! assignment gains the two 90 degree entries each bend contributes (one
//! per incident face). Because `split_edge` keeps surviving half-edge ids
//! stable, the angle entries at the chain's endpoints re-target the bend
//! nodes without being touched.

use selkie_dcel::{HalfEdgeId, PlanarEmbedding};

use crate::error::{Error, Result};
use crate::model::{OrthoRep, Turn};

/// Insert all bend nodes, returning how many were created. Bend names are
/// drawn from one monotonically increasing counter so they are unique
/// across the whole call.
pub(crate) fn run(planar: &mut PlanarEmbedding, ortho: &mut OrthoRep) -> Result<usize> {
    let bent: Vec<(HalfEdgeId, u32)> = planar
        .half_edge_ids()
        .filter_map(|h| match ortho.bends(h) {
            0 => None,
            k => Some((h, k)),
        })
        .collect();

    let mut seq = 0usize;
    for (h, k) in bent {
        // Bends on both directions of one edge are never cost-minimal, so
        // the orthogonalization cannot emit them.
        debug_assert_eq!(ortho.bends(planar.half_edge(h).twin), 0);
        ortho.clear_bends(h);

        let mut tail = h;
        for _ in 0..k {
            let name = format!("_b{seq}");
            let split = match planar.split_edge(tail, name.clone(), true) {
                Ok(split) => split,
                Err(_) => return Err(Error::BendCollision { name }),
            };
            seq += 1;
            // The chain turns toward h's left face: code 3 ahead of the
            // bend on the right face, code 1 behind it on the left face.
            ortho.set_angle(split.forward, Turn::Left);
            ortho.set_angle(split.backward, Turn::Right);
            tail = split.forward;
        }
    }
    Ok(seq)
}
