use selkie_dcel::{EmbeddingBuilder, Error, HalfEdgeId, PlanarEmbedding};

fn square() -> PlanarEmbedding {
    let mut b = EmbeddingBuilder::new();
    b.node("a", ["b", "d"]);
    b.node("b", ["c", "a"]);
    b.node("c", ["d", "b"]);
    b.node("d", ["a", "c"]);
    b.build(("a", "d")).unwrap()
}

#[test]
fn square_has_two_faces_and_satisfies_euler() {
    let g = square();
    assert_eq!(g.node_count(), 4);
    assert_eq!(g.half_edge_count(), 8);
    assert_eq!(g.face_count(), 2);

    let v = g.node_count() as i64;
    let e = (g.half_edge_count() / 2) as i64;
    let f = g.face_count() as i64;
    assert_eq!(v - e + f, 2);
}

#[test]
fn twin_is_an_involution_and_reverses_endpoints() {
    let g = square();
    for h in g.half_edge_ids() {
        let t = g.half_edge(h).twin;
        assert_ne!(t, h);
        assert_eq!(g.half_edge(t).twin, h);
        assert_eq!(g.half_edge(h).origin, g.target(t));
        assert_eq!(g.half_edge(t).origin, g.target(h));
    }
}

#[test]
fn every_half_edge_lies_on_exactly_one_face_boundary() {
    let g = square();
    let mut seen: Vec<HalfEdgeId> = Vec::new();
    for f in g.face_ids() {
        for h in g.face_cycle(f) {
            assert_eq!(g.half_edge(h).face, f);
            seen.push(h);
        }
    }
    seen.sort();
    let all: Vec<HalfEdgeId> = g.half_edge_ids().collect();
    assert_eq!(seen, all);
}

#[test]
fn external_face_is_the_one_named_at_build_time() {
    let g = square();
    let h = g.half_edge_between("a", "d").unwrap();
    assert_eq!(g.half_edge(h).face, g.external_face());
    assert!(g.face(g.external_face()).external);
    let inner = g.half_edge_between("a", "b").unwrap();
    assert!(!g.face(g.half_edge(inner).face).external);
}

#[test]
fn dual_dfs_order_is_rooted_at_the_external_face_and_reproducible() {
    let g = square();
    let order = g.dual_dfs_order();
    assert_eq!(order.len(), g.face_count());
    assert_eq!(order[0], g.external_face());
    assert_eq!(order, g.dual_dfs_order());
}

#[test]
fn single_edge_graph_has_one_face() {
    let mut b = EmbeddingBuilder::new();
    b.node("u", ["v"]);
    b.node("v", ["u"]);
    let g = b.build(("u", "v")).unwrap();
    assert_eq!(g.face_count(), 1);
    let boundary: Vec<HalfEdgeId> = g.face_cycle(g.external_face()).collect();
    assert_eq!(boundary.len(), 2);
    assert_eq!(g.half_edge(boundary[0]).twin, boundary[1]);
}

#[test]
fn split_edge_inserts_a_node_and_preserves_surviving_ids() {
    let mut g = square();
    let h = g.half_edge_between("a", "b").unwrap();
    let t = g.half_edge(h).twin;
    let h_face = g.half_edge(h).face;
    let t_face = g.half_edge(t).face;
    let a = g.node_id("a").unwrap();
    let b = g.node_id("b").unwrap();

    let split = g.split_edge(h, "m", true).unwrap();
    assert_eq!(g.node_count(), 5);
    assert!(g.node(split.node).bend);

    // h now runs a -> m, its old twin b -> m; the new halves take over.
    assert_eq!(g.half_edge(h).origin, a);
    assert_eq!(g.target(h), split.node);
    assert_eq!(g.half_edge(t).origin, b);
    assert_eq!(g.target(t), split.node);
    assert_eq!(g.half_edge(split.forward).face, h_face);
    assert_eq!(g.half_edge(split.backward).face, t_face);
    assert_eq!(g.half_edge(h).twin, split.backward);
    assert_eq!(g.half_edge(t).twin, split.forward);

    assert_eq!(g.half_edge_between("a", "m"), Some(h));
    assert_eq!(g.half_edge_between("m", "b"), Some(split.forward));
    assert_eq!(g.half_edge_between("b", "m"), Some(t));
    assert_eq!(g.half_edge_between("m", "a"), Some(split.backward));
    assert_eq!(g.half_edge_between("a", "b"), None);

    // Both boundary cycles grew by one.
    assert_eq!(g.face_cycle(h_face).count(), 5);
    assert_eq!(g.face_cycle(t_face).count(), 5);
    assert_eq!(g.face_count(), 2);
}

#[test]
fn split_edge_rejects_an_existing_node_name() {
    let mut g = square();
    let h = g.half_edge_between("a", "b").unwrap();
    assert!(matches!(
        g.split_edge(h, "c", true),
        Err(Error::DuplicateNode { .. })
    ));
}

#[test]
fn builder_rejects_unknown_neighbors() {
    let mut b = EmbeddingBuilder::new();
    b.node("u", ["x"]);
    assert!(matches!(
        b.build(("u", "x")),
        Err(Error::UnknownNode { .. })
    ));
}

#[test]
fn builder_rejects_a_missing_reverse_entry() {
    let mut b = EmbeddingBuilder::new();
    b.node("u", ["v"]);
    b.node("v", Vec::<String>::new());
    assert!(matches!(
        b.build(("u", "v")),
        Err(Error::MissingTwin { .. })
    ));
}

#[test]
fn builder_rejects_duplicate_nodes_edges_and_self_loops() {
    let mut b = EmbeddingBuilder::new();
    b.node("u", ["v"]);
    b.node("u", ["v"]);
    b.node("v", ["u"]);
    assert!(matches!(
        b.build(("u", "v")),
        Err(Error::DuplicateNode { .. })
    ));

    let mut b = EmbeddingBuilder::new();
    b.node("u", ["v", "v"]);
    b.node("v", ["u"]);
    assert!(matches!(
        b.build(("u", "v")),
        Err(Error::DuplicateEdge { .. })
    ));

    let mut b = EmbeddingBuilder::new();
    b.node("u", ["u"]);
    assert!(matches!(b.build(("u", "u")), Err(Error::SelfLoop { .. })));
}

#[test]
fn builder_rejects_an_unknown_external_edge() {
    let mut b = EmbeddingBuilder::new();
    b.node("u", ["v"]);
    b.node("v", ["u"]);
    assert!(matches!(
        b.build(("u", "w")),
        Err(Error::UnknownExternalEdge { .. })
    ));
}
