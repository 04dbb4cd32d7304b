//! Construct a [`PlanarEmbedding`] from a rotation system.
//!
//! A rotation system is, per node, the clockwise order of its neighbors.
//! Together with the choice of external face it fully determines the
//! embedding: faces are the orbits of the "next neighbor after the one we
//! arrived from" successor permutation.

use crate::embedding::{HashMap, PlanarEmbedding};
use crate::error::{Error, Result};
use crate::{Face, FaceId, HalfEdge, HalfEdgeId, Node, NodeId};

#[derive(Debug, Default)]
pub struct EmbeddingBuilder {
    rotation: Vec<(String, Vec<String>)>,
}

impl EmbeddingBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a node and the clockwise order of its neighbors.
    pub fn node<I>(&mut self, name: impl Into<String>, clockwise: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.rotation.push((
            name.into(),
            clockwise.into_iter().map(Into::into).collect(),
        ));
        self
    }

    /// Trace faces and link the embedding. `external` names a directed edge
    /// whose incident face is the unbounded one; rotation alone cannot tell
    /// the external face apart, so the caller has to.
    pub fn build(&self, external: (&str, &str)) -> Result<PlanarEmbedding> {
        let mut nodes: Vec<Node> = Vec::with_capacity(self.rotation.len());
        let mut node_ids: HashMap<String, NodeId> = HashMap::default();
        for (name, _) in &self.rotation {
            if node_ids.contains_key(name) {
                return Err(Error::DuplicateNode { name: name.clone() });
            }
            node_ids.insert(name.clone(), NodeId(nodes.len() as u32));
            nodes.push(Node {
                name: name.clone(),
                bend: false,
            });
        }

        // One half-edge per directed neighbor entry, in declaration order.
        let mut half_edges: Vec<HalfEdge> = Vec::new();
        let mut targets: Vec<NodeId> = Vec::new();
        let mut endpoints: HashMap<(NodeId, NodeId), HalfEdgeId> = HashMap::default();
        let mut out: Vec<Vec<HalfEdgeId>> = vec![Vec::new(); nodes.len()];
        let mut rot_pos: HashMap<(NodeId, NodeId), usize> = HashMap::default();
        for (name, neighbors) in &self.rotation {
            let u = node_ids[name.as_str()];
            for neighbor in neighbors {
                let Some(&v) = node_ids.get(neighbor.as_str()) else {
                    return Err(Error::UnknownNode {
                        node: name.clone(),
                        neighbor: neighbor.clone(),
                    });
                };
                if u == v {
                    return Err(Error::SelfLoop { node: name.clone() });
                }
                let h = HalfEdgeId(half_edges.len() as u32);
                if endpoints.insert((u, v), h).is_some() {
                    return Err(Error::DuplicateEdge {
                        from: name.clone(),
                        to: neighbor.clone(),
                    });
                }
                rot_pos.insert((u, v), out[u.index()].len());
                out[u.index()].push(h);
                targets.push(v);
                // twin / next / face are wired below.
                half_edges.push(HalfEdge {
                    origin: u,
                    twin: h,
                    next: h,
                    face: FaceId(0),
                });
            }
        }

        for ix in 0..half_edges.len() {
            let u = half_edges[ix].origin;
            let v = targets[ix];
            let Some(&twin) = endpoints.get(&(v, u)) else {
                return Err(Error::MissingTwin {
                    from: nodes[u.index()].name.clone(),
                    to: nodes[v.index()].name.clone(),
                });
            };
            half_edges[ix].twin = twin;

            // Face successor: at the head v, continue with the neighbor
            // that follows u in v's rotation.
            let deg = out[v.index()].len();
            let i = rot_pos[&(v, u)];
            half_edges[ix].next = out[v.index()][(i + 1) % deg];
        }

        // Faces are the orbits of `next`, discovered in half-edge id order.
        let mut faces: Vec<Face> = Vec::new();
        let mut assigned = vec![false; half_edges.len()];
        for ix in 0..half_edges.len() {
            if assigned[ix] {
                continue;
            }
            let f = FaceId(faces.len() as u32);
            faces.push(Face {
                first: HalfEdgeId(ix as u32),
                external: false,
            });
            let mut cur = ix;
            loop {
                assigned[cur] = true;
                half_edges[cur].face = f;
                cur = half_edges[cur].next.index();
                if cur == ix {
                    break;
                }
            }
        }

        let external_id = node_ids
            .get(external.0)
            .zip(node_ids.get(external.1))
            .and_then(|(&u, &v)| endpoints.get(&(u, v)))
            .map(|&h| half_edges[h.index()].face)
            .ok_or_else(|| Error::UnknownExternalEdge {
                from: external.0.to_string(),
                to: external.1.to_string(),
            })?;
        faces[external_id.index()].external = true;

        Ok(PlanarEmbedding {
            nodes,
            half_edges,
            faces,
            node_ids,
            endpoints,
            external: external_id,
        })
    }
}
