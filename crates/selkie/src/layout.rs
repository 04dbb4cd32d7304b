//! Integrate sides and lengths into absolute coordinates.
//!
//! Faces are visited in the same dual DFS order the side propagation
//! used. The very first boundary node is pinned at the origin; every
//! other coordinate follows by walking face boundaries and adding each
//! half-edge's length along its side. Connectivity guarantees each face
//! in the order shares at least one positioned node with an earlier one.

use std::collections::BTreeMap;

use rustc_hash::FxHashMap;
use selkie_dcel::{NodeId, PlanarEmbedding};

use crate::model::{Point, Side};

pub(crate) fn run(
    planar: &PlanarEmbedding,
    sides: &[Side],
    lengths: &[i64],
) -> BTreeMap<String, Point> {
    let mut pos: FxHashMap<NodeId, Point> = FxHashMap::default();

    for f in planar.dual_dfs_order() {
        if pos.is_empty() {
            if let Some(h) = planar.face_cycle(f).next() {
                pos.insert(planar.half_edge(h).origin, Point { x: 0, y: 0 });
            }
        }
        let start = planar
            .face_cycle(f)
            .find(|&h| pos.contains_key(&planar.half_edge(h).origin));
        let Some(start) = start else {
            continue;
        };
        for h in planar.cycle_from(start) {
            let head = planar.target(h);
            if pos.contains_key(&head) {
                continue;
            }
            let tail = pos[&planar.half_edge(h).origin];
            let (dx, dy) = sides[h.index()].delta(lengths[h.index()]);
            pos.insert(
                head,
                Point {
                    x: tail.x + dx,
                    y: tail.y + dy,
                },
            );
        }
    }

    let mut out = BTreeMap::new();
    for (id, node) in planar.nodes() {
        if let Some(&p) = pos.get(&id) {
            out.insert(node.name.clone(), p);
        }
    }
    out
}
