//! Assign every half-edge a compass side.
//!
//! Phase 1 walks each face boundary independently, starting at an
//! arbitrary side and advancing by the turn at each head. Phase 2 rotates
//! whole faces into agreement: visiting faces in dual DFS order from the
//! external face, each face is aligned against the first neighbor that is
//! already resolved, using the twin invariant
//! `side(twin) == opposite(side)`.

use selkie_dcel::PlanarEmbedding;

use crate::error::{Error, Result};
use crate::model::{OrthoRep, Side};

pub(crate) fn run(planar: &PlanarEmbedding, ortho: &OrthoRep) -> Result<Vec<Side>> {
    let mut sides = vec![Side::Up; planar.half_edge_count()];

    for f in planar.face_ids() {
        let mut side = Side::Up;
        for h in planar.face_cycle(f) {
            sides[h.index()] = side;
            // The turn at h's head is the angle of its face successor.
            let succ = planar.half_edge(h).next;
            side = side.turned(ortho.angle(succ));
        }
    }

    let order = planar.dual_dfs_order();
    let mut resolved = vec![false; planar.face_count()];
    if let Some(&root) = order.first() {
        resolved[root.index()] = true;
    }
    for &f in order.iter().skip(1) {
        let mut offset = None;
        for h in planar.face_cycle(f) {
            let twin = planar.half_edge(h).twin;
            if resolved[planar.half_edge(twin).face.index()] {
                let want = sides[twin.index()].opposite().index();
                offset = Some((want + 4 - sides[h.index()].index()) % 4);
                break;
            }
        }
        let Some(offset) = offset else {
            return Err(Error::UnresolvedFace { face: f });
        };
        for h in planar.face_cycle(f) {
            sides[h.index()] = sides[h.index()].rotated(offset);
        }
        resolved[f.index()] = true;
    }
    if let Some(f) = planar.face_ids().find(|f| !resolved[f.index()]) {
        return Err(Error::UnresolvedFace { face: f });
    }

    debug_assert!(
        planar
            .half_edge_ids()
            .all(|h| sides[planar.half_edge(h).twin.index()] == sides[h.index()].opposite())
    );
    Ok(sides)
}
