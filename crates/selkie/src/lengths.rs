//! Tidy rectangle compaction: minimum segment lengths via two flows.
//!
//! Segments on the up/down sides determine vertical extents, segments on
//! the right/left sides horizontal ones; the two problems decouple. In
//! each network the faces are the nodes and every relevant half-edge an
//! arc from its left face to its right face with unit cost and a lower
//! bound of one, so conservation per face forces opposite sides of every
//! face to add up to the same extent while the objective keeps all
//! segments as short as possible.

use selkie_dcel::{HalfEdgeId, PlanarEmbedding};

use crate::error::{Axis, Error, Result};
use crate::flow::{BIG, FlowNet, FlowNode};
use crate::model::Side;

pub(crate) fn run(planar: &PlanarEmbedding, sides: &[Side]) -> Result<Vec<i64>> {
    let horizontal = solve_axis(planar, sides, Side::Right, Axis::Horizontal)?;
    let vertical = solve_axis(planar, sides, Side::Up, Axis::Vertical)?;

    let mut lengths = vec![0i64; planar.half_edge_count()];
    for h in planar.half_edge_ids() {
        let length = match sides[h.index()] {
            Side::Up => vertical[h.index()],
            Side::Right => horizontal[h.index()],
            // Twins share one physical segment.
            Side::Down | Side::Left => continue,
        };
        lengths[h.index()] = length;
        lengths[planar.half_edge(h).twin.index()] = length;
    }
    Ok(lengths)
}

fn solve_axis(
    planar: &PlanarEmbedding,
    sides: &[Side],
    target: Side,
    axis: Axis,
) -> Result<Vec<i64>> {
    let mut net = FlowNet::new();
    let mut arcs: Vec<(usize, HalfEdgeId)> = Vec::new();
    for h in planar.half_edge_ids() {
        if sides[h.index()] != target {
            continue;
        }
        let right = planar.half_edge(h).face;
        let tail = net.node(FlowNode::Face(planar.left_face(h)));
        // The external face is the sink whenever it sits on the head side;
        // as a tail it keeps its own identity (it is also the source).
        let head = if planar.face(right).external {
            net.node(FlowNode::Sink)
        } else {
            net.node(FlowNode::Face(right))
        };
        arcs.push((net.add_arc(tail, head, 1, BIG, 1), h));
    }

    let mut lengths = vec![0i64; planar.half_edge_count()];
    if arcs.is_empty() {
        return Ok(lengths);
    }

    let source = net.node(FlowNode::Face(planar.external_face()));
    let sink = net.node(FlowNode::Sink);
    net.set_demand(source, -BIG);
    net.set_demand(sink, BIG);
    // Zero-cost overflow arc absorbing whatever the sentinel demands do
    // not push through the real arcs.
    net.add_arc(source, sink, 0, BIG, 0);

    let flow = net
        .min_cost_flow()
        .ok_or(Error::Infeasible { axis })?;
    for (arc, h) in arcs {
        lengths[h.index()] = flow[arc];
    }
    Ok(lengths)
}
