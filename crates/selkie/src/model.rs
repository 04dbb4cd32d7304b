//! Core types of the orthogonal representation and its drawing.

use std::borrow::Cow;
use std::collections::BTreeMap;

use rustc_hash::FxHashMap;
use selkie_dcel::{HalfEdgeId, PlanarEmbedding};
use serde::Serialize;

/// Compass side assigned to a half-edge: the axis direction the segment is
/// drawn along when traversed origin to target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Side {
    Up,
    Right,
    Down,
    Left,
}

impl Side {
    pub fn index(self) -> usize {
        match self {
            Side::Up => 0,
            Side::Right => 1,
            Side::Down => 2,
            Side::Left => 3,
        }
    }

    pub fn from_index(ix: usize) -> Side {
        match ix % 4 {
            0 => Side::Up,
            1 => Side::Right,
            2 => Side::Down,
            _ => Side::Left,
        }
    }

    pub fn rotated(self, quarter_turns: usize) -> Side {
        Side::from_index(self.index() + quarter_turns)
    }

    pub fn opposite(self) -> Side {
        self.rotated(2)
    }

    pub fn turned(self, turn: Turn) -> Side {
        self.rotated(turn.quarter_turns())
    }

    /// Coordinate increment of a segment of the given length on this side.
    pub fn delta(self, length: i64) -> (i64, i64) {
        match self {
            Side::Up => (0, length),
            Side::Right => (length, 0),
            Side::Down => (0, -length),
            Side::Left => (-length, 0),
        }
    }
}

/// Turning behavior at a half-edge's origin within its incident face.
///
/// The integer codes follow the usual flow formulation: 1 turns one
/// rotational sense, 3 the other, 2 is straight, 4 is the 180 degree
/// reversal that only occurs on a degenerate single-edge face boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    Right,
    Straight,
    Left,
    Back,
}

impl Turn {
    pub fn code(self) -> u8 {
        match self {
            Turn::Right => 1,
            Turn::Straight => 2,
            Turn::Left => 3,
            Turn::Back => 4,
        }
    }

    pub(crate) fn quarter_turns(self) -> usize {
        match self {
            Turn::Right => 1,
            Turn::Straight => 0,
            Turn::Left => 3,
            Turn::Back => 2,
        }
    }
}

/// An orthogonal representation: the angle assignment produced by the
/// orthogonalization stage, keyed by half-edge handle.
///
/// `angle(h)` is the turn at `h`'s origin inside `h`'s incident face;
/// straight angles are implicit. `bends(h)` is the number of 90 degree
/// bends the edge carried by `h` makes toward `h`'s left face.
#[derive(Debug, Clone, Default)]
pub struct OrthoRep {
    angles: FxHashMap<HalfEdgeId, Turn>,
    bends: FxHashMap<HalfEdgeId, u32>,
}

impl OrthoRep {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_angle(&mut self, h: HalfEdgeId, turn: Turn) {
        if turn == Turn::Straight {
            self.angles.remove(&h);
        } else {
            self.angles.insert(h, turn);
        }
    }

    pub fn angle(&self, h: HalfEdgeId) -> Turn {
        self.angles.get(&h).copied().unwrap_or(Turn::Straight)
    }

    pub fn set_bends(&mut self, h: HalfEdgeId, count: u32) {
        if count == 0 {
            self.bends.remove(&h);
        } else {
            self.bends.insert(h, count);
        }
    }

    pub fn bends(&self, h: HalfEdgeId) -> u32 {
        self.bends.get(&h).copied().unwrap_or(0)
    }

    pub(crate) fn clear_bends(&mut self, h: HalfEdgeId) {
        self.bends.remove(&h);
    }

    /// Total number of bends across all edges.
    pub fn cost(&self) -> u32 {
        self.bends.values().sum()
    }
}

/// Integer grid coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

/// The compacted drawing: the (possibly cloned, bend-expanded) embedding
/// plus the derived side, length and position maps.
#[derive(Debug, Clone)]
pub struct Drawing<'a> {
    /// Borrowed from the caller when the representation had no bends,
    /// owned otherwise.
    pub embedding: Cow<'a, PlanarEmbedding>,
    /// Compass side per half-edge, indexed by half-edge handle.
    pub sides: Vec<Side>,
    /// Segment length per half-edge, indexed by half-edge handle. Twins
    /// carry the same length.
    pub lengths: Vec<i64>,
    /// Final coordinates by node name.
    pub pos: BTreeMap<String, Point>,
}

impl Drawing<'_> {
    pub fn side(&self, h: HalfEdgeId) -> Side {
        self.sides[h.index()]
    }

    pub fn length(&self, h: HalfEdgeId) -> i64 {
        self.lengths[h.index()]
    }

    /// True when every edge of the drawing is strictly axis-aligned: its
    /// endpoints agree in exactly one coordinate.
    pub fn axis_aligned(&self) -> bool {
        for h in self.embedding.half_edge_ids() {
            let twin = self.embedding.half_edge(h).twin;
            if twin < h {
                continue;
            }
            let u = self.embedding.node(self.embedding.half_edge(h).origin);
            let v = self.embedding.node(self.embedding.target(h));
            let (Some(pu), Some(pv)) = (self.pos.get(&u.name), self.pos.get(&v.name)) else {
                return false;
            };
            if (pu.x == pv.x) == (pu.y == pv.y) {
                return false;
            }
        }
        true
    }

    /// Names of the synthetic bend nodes, in insertion order.
    pub fn bend_nodes(&self) -> Vec<&str> {
        self.embedding
            .nodes()
            .filter(|(_, n)| n.bend)
            .map(|(_, n)| n.name.as_str())
            .collect()
    }

    /// Pairs of distinct nodes that were assigned the same coordinate.
    /// Each offending node is reported once, against the first occupant.
    pub fn overlapping_nodes(&self) -> Vec<(String, String)> {
        let mut first: FxHashMap<Point, &String> = FxHashMap::default();
        let mut out = Vec::new();
        for (name, &p) in &self.pos {
            match first.get(&p) {
                Some(&occupant) => out.push((occupant.clone(), name.clone())),
                None => {
                    first.insert(p, name);
                }
            }
        }
        out
    }

    /// Bounding box of the drawing, or `None` when it has no nodes.
    pub fn bounds(&self) -> Option<(Point, Point)> {
        let mut iter = self.pos.values();
        let &start = iter.next()?;
        let mut min = start;
        let mut max = start;
        for p in iter {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }
        Some((min, max))
    }
}
