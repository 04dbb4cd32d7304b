use rustc_hash::FxBuildHasher;

use crate::error::{Error, Result};
use crate::{Face, FaceId, HalfEdge, HalfEdgeId, Node, NodeId};

pub(crate) type HashMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;

/// A planar graph with a fixed face structure.
///
/// Arenas are append-only: handles stay valid across every mutation this
/// type offers. Hash maps are used for lookup only; all iteration runs in
/// arena order, so traversals are deterministic.
#[derive(Debug, Clone)]
pub struct PlanarEmbedding {
    pub(crate) nodes: Vec<Node>,
    pub(crate) half_edges: Vec<HalfEdge>,
    pub(crate) faces: Vec<Face>,
    pub(crate) node_ids: HashMap<String, NodeId>,
    pub(crate) endpoints: HashMap<(NodeId, NodeId), HalfEdgeId>,
    pub(crate) external: FaceId,
}

/// Result of [`PlanarEmbedding::split_edge`]: the inserted node and the two
/// new half-edges leaving it.
#[derive(Debug, Clone, Copy)]
pub struct EdgeSplit {
    pub node: NodeId,
    /// New half-edge from the inserted node toward the old target, on the
    /// split half-edge's face.
    pub forward: HalfEdgeId,
    /// New half-edge from the inserted node toward the old origin, on the
    /// twin's face.
    pub backward: HalfEdgeId,
}

impl PlanarEmbedding {
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    pub fn half_edge(&self, id: HalfEdgeId) -> &HalfEdge {
        &self.half_edges[id.index()]
    }

    pub fn face(&self, id: FaceId) -> &Face {
        &self.faces[id.index()]
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn half_edge_count(&self) -> usize {
        self.half_edges.len()
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    pub fn node_id(&self, name: &str) -> Option<NodeId> {
        self.node_ids.get(name).copied()
    }

    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(ix, n)| (NodeId(ix as u32), n))
    }

    pub fn half_edge_ids(&self) -> impl Iterator<Item = HalfEdgeId> + use<> {
        (0..self.half_edges.len() as u32).map(HalfEdgeId)
    }

    pub fn face_ids(&self) -> impl Iterator<Item = FaceId> + use<> {
        (0..self.faces.len() as u32).map(FaceId)
    }

    /// Destination node of a half-edge (its twin's origin).
    pub fn target(&self, h: HalfEdgeId) -> NodeId {
        self.half_edges[self.half_edges[h.index()].twin.index()].origin
    }

    /// Face on the other side of a half-edge (its twin's incident face).
    pub fn left_face(&self, h: HalfEdgeId) -> FaceId {
        self.half_edges[self.half_edges[h.index()].twin.index()].face
    }

    pub fn external_face(&self) -> FaceId {
        self.external
    }

    /// Half-edge from `u` to `v`, by node name.
    pub fn half_edge_between(&self, u: &str, v: &str) -> Option<HalfEdgeId> {
        let u = self.node_id(u)?;
        let v = self.node_id(v)?;
        self.endpoints.get(&(u, v)).copied()
    }

    /// Boundary cycle of a face, starting at its stored first half-edge.
    pub fn face_cycle(&self, f: FaceId) -> FaceCycle<'_> {
        self.cycle_from(self.faces[f.index()].first)
    }

    /// Boundary cycle of a face, starting at an arbitrary half-edge on it.
    pub fn cycle_from(&self, start: HalfEdgeId) -> FaceCycle<'_> {
        FaceCycle {
            embedding: self,
            start,
            next: Some(start),
        }
    }

    /// Insert a new node in the middle of the edge carried by `h`, turning
    /// it into a two-edge chain. Both incident faces are preserved; `h` and
    /// its old twin keep their ids and origins and are re-targeted at the
    /// new node, so every pre-existing half-edge id stays valid.
    pub fn split_edge(
        &mut self,
        h: HalfEdgeId,
        name: impl Into<String>,
        bend: bool,
    ) -> Result<EdgeSplit> {
        let name = name.into();
        if self.node_ids.contains_key(&name) {
            return Err(Error::DuplicateNode { name });
        }

        let t = self.half_edges[h.index()].twin;
        let u = self.half_edges[h.index()].origin;
        let v = self.half_edges[t.index()].origin;
        let h_next = self.half_edges[h.index()].next;
        let t_next = self.half_edges[t.index()].next;
        let h_face = self.half_edges[h.index()].face;
        let t_face = self.half_edges[t.index()].face;

        let b = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node {
            name: name.clone(),
            bend,
        });
        self.node_ids.insert(name, b);

        let forward = HalfEdgeId(self.half_edges.len() as u32);
        let backward = HalfEdgeId(self.half_edges.len() as u32 + 1);
        self.half_edges.push(HalfEdge {
            origin: b,
            twin: t,
            next: h_next,
            face: h_face,
        });
        self.half_edges.push(HalfEdge {
            origin: b,
            twin: h,
            next: t_next,
            face: t_face,
        });

        // h: u -> b, t: v -> b; the new halves pick up the old continuations.
        self.half_edges[h.index()].twin = backward;
        self.half_edges[h.index()].next = forward;
        self.half_edges[t.index()].twin = forward;
        self.half_edges[t.index()].next = backward;

        self.endpoints.remove(&(u, v));
        self.endpoints.remove(&(v, u));
        self.endpoints.insert((u, b), h);
        self.endpoints.insert((b, v), forward);
        self.endpoints.insert((v, b), t);
        self.endpoints.insert((b, u), backward);

        Ok(EdgeSplit {
            node: b,
            forward,
            backward,
        })
    }

    /// Faces in DFS preorder over the dual graph, rooted at the external
    /// face. Neighbors are expanded in boundary-walk order, so the result
    /// is reproducible for a given embedding.
    pub fn dual_dfs_order(&self) -> Vec<FaceId> {
        if self.faces.is_empty() {
            return Vec::new();
        }
        let mut order = Vec::with_capacity(self.faces.len());
        let mut seen = vec![false; self.faces.len()];
        let mut stack = vec![self.external];
        while let Some(f) = stack.pop() {
            if seen[f.index()] {
                continue;
            }
            seen[f.index()] = true;
            order.push(f);
            let neighbors: Vec<FaceId> = self.face_cycle(f).map(|h| self.left_face(h)).collect();
            for nf in neighbors.into_iter().rev() {
                if !seen[nf.index()] {
                    stack.push(nf);
                }
            }
        }
        order
    }
}

/// Iterator over one face boundary cycle.
#[derive(Debug, Clone)]
pub struct FaceCycle<'a> {
    embedding: &'a PlanarEmbedding,
    start: HalfEdgeId,
    next: Option<HalfEdgeId>,
}

impl Iterator for FaceCycle<'_> {
    type Item = HalfEdgeId;

    fn next(&mut self) -> Option<HalfEdgeId> {
        let cur = self.next?;
        let succ = self.embedding.half_edges[cur.index()].next;
        self.next = (succ != self.start).then_some(succ);
        Some(cur)
    }
}
