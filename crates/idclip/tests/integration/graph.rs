// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use idclip::errors::LoadError;
use idclip::graph::{by_cost, extended_dijkstra, recover_path, PathInfo};
use idclip::HashGraph;
use proptest::prelude::*;
use test_strategy::{proptest, Arbitrary};

#[test]
fn test_add_nodes_and_edges() {
    let mut g: HashGraph<i64> = HashGraph::new();
    assert!(g.is_empty());

    assert!(g.add_node("a"));
    assert!(!g.add_node("a"));
    assert_eq!(g.node_count(), 1);

    // Edges create their endpoints.
    assert_eq!(g.add_edge("a", "b", 3), None);
    assert_eq!(g.node_count(), 2);
    assert_eq!(g.edge_count(), 1);
    assert!(g.has_node("b"));
    assert!(g.has_edge("a", "b"));
    assert!(!g.has_edge("b", "a"));
    assert_eq!(g.edge_value("a", "b"), Some(&3));
    assert_eq!(g.edge_value("b", "a"), None);

    // Re-adding an edge overwrites the weight and returns the old one.
    assert_eq!(g.add_edge("a", "b", 7), Some(3));
    assert_eq!(g.edge_count(), 1);
    assert_eq!(g.edge_value("a", "b"), Some(&7));

    g.validate().expect("graph should be valid");
}

#[test]
fn test_degrees() {
    let mut g: HashGraph<i64> = HashGraph::new();
    g.add_edge("a", "b", 1);
    g.add_edge("c", "b", 1);
    g.add_edge("b", "d", 1);

    assert_eq!(g.in_degree("b"), Some(2));
    assert_eq!(g.out_degree("b"), Some(1));
    assert_eq!(g.degree("b"), Some(3));
    assert_eq!(g.degree("a"), Some(1));

    // Queries about absent nodes answer None, not zero.
    assert_eq!(g.in_degree("zzz"), None);
    assert_eq!(g.out_degree("zzz"), None);
    assert_eq!(g.degree("zzz"), None);
}

#[test]
fn test_self_loop_counts_twice() {
    let mut g: HashGraph<i64> = HashGraph::new();
    g.add_edge("a", "a", 9);

    assert_eq!(g.node_count(), 1);
    assert_eq!(g.edge_count(), 1);
    assert_eq!(g.in_degree("a"), Some(1));
    assert_eq!(g.out_degree("a"), Some(1));
    assert_eq!(g.degree("a"), Some(2));
    g.validate().expect("graph should be valid");

    assert!(g.remove_node("a"));
    assert!(g.is_empty());
    assert_eq!(g.edge_count(), 0);
    g.validate().expect("graph should be valid");
}

#[test]
fn test_neighbor_sets() {
    let mut g: HashGraph<i64> = HashGraph::new();
    g.add_edge("a", "b", 1);
    g.add_edge("a", "c", 2);
    g.add_edge("c", "a", 3);

    let outs = g.out_nodes("a").unwrap();
    assert_eq!(outs.len(), 2);
    assert!(outs.contains(&"b".to_owned()));
    assert!(outs.contains(&"c".to_owned()));

    let ins = g.in_nodes("a").unwrap();
    assert_eq!(ins.len(), 1);
    assert!(ins.contains(&"c".to_owned()));

    assert!(g.out_nodes("zzz").is_none());

    let mut names: Vec<&String> = g.all_nodes().collect();
    names.sort();
    assert_eq!(names, ["a", "b", "c"]);
}

#[test]
fn test_remove_edge_keeps_nodes() {
    let mut g: HashGraph<i64> = HashGraph::new();
    g.add_edge("a", "b", 3);

    assert_eq!(g.remove_edge("a", "b"), Some(3));
    assert_eq!(g.remove_edge("a", "b"), None);
    assert_eq!(g.edge_count(), 0);
    assert!(g.has_node("a"));
    assert!(g.has_node("b"));
    assert_eq!(g.out_degree("a"), Some(0));
    assert_eq!(g.in_degree("b"), Some(0));

    g.validate().expect("graph should be valid");
}

#[test]
fn test_remove_node_drops_incident_edges() {
    let mut g: HashGraph<i64> = HashGraph::new();
    g.add_edge("a", "b", 1);
    g.add_edge("b", "c", 2);
    g.add_edge("c", "b", 3);
    g.add_edge("a", "c", 4);

    assert!(g.remove_node("b"));
    assert!(!g.remove_node("b"));

    assert_eq!(g.node_count(), 2);
    assert_eq!(g.edge_count(), 1);
    assert!(g.has_edge("a", "c"));
    assert_eq!(g.out_degree("a"), Some(1));
    assert_eq!(g.in_degree("c"), Some(1));

    g.validate().expect("graph should be valid");
}

#[test]
fn test_clear() {
    let mut g: HashGraph<i64> = HashGraph::new();
    g.add_edge("a", "b", 1);
    g.clear();
    assert!(g.is_empty());
    assert_eq!(g.edge_count(), 0);
    g.validate().expect("graph should be valid");
}

#[test]
fn test_display_sorted() {
    let mut g: HashGraph<i64> = HashGraph::new();
    g.add_edge("a", "b", 3);
    g.add_edge("a", "c", 7);
    g.add_edge("c", "a", 1);

    assert_eq!(
        format!("{g}"),
        "graph[nodes=3, edges=3]\n\
         \x20 a: out=[b(3),c(7)] in=[c(1)]\n\
         \x20 b: out=[] in=[a(3)]\n\
         \x20 c: out=[a(1)] in=[a(7)]"
    );

    let empty: HashGraph<i64> = HashGraph::new();
    assert_eq!(format!("{empty}"), "graph[nodes=0, edges=0]");
}

#[test]
fn test_load_mixed_lines() {
    let text = "lonely\n\
                \n\
                a b 3\n\
                \x20  \n\
                b c 4\n";
    let mut g: HashGraph<i64> = HashGraph::new();
    let applied = g.load(text.as_bytes(), " ").unwrap();

    // Blank lines are skipped and not counted.
    assert_eq!(applied, 3);
    assert_eq!(g.node_count(), 4);
    assert_eq!(g.edge_count(), 2);
    assert!(g.has_node("lonely"));
    assert_eq!(g.edge_value("a", "b"), Some(&3));
    assert_eq!(g.edge_value("b", "c"), Some(&4));
    g.validate().expect("graph should be valid");
}

#[test]
fn test_load_is_additive() {
    let mut g: HashGraph<i64> = HashGraph::new();
    g.add_edge("x", "y", 9);

    g.load("a b 1\n".as_bytes(), " ").unwrap();
    assert!(g.has_edge("x", "y"));
    assert!(g.has_edge("a", "b"));
    assert_eq!(g.node_count(), 4);

    // Loading an edge that already exists overwrites its weight.
    g.load("x y 2\n".as_bytes(), " ").unwrap();
    assert_eq!(g.edge_value("x", "y"), Some(&2));
    assert_eq!(g.edge_count(), 2);
}

#[test]
fn test_load_malformed_field_count() {
    let mut g: HashGraph<i64> = HashGraph::new();
    let err = g.load("a\n\nb c\n".as_bytes(), " ").unwrap_err();

    // Line numbers are 1-based and count blank lines too.
    match err {
        LoadError::Malformed { line, content } => {
            assert_eq!(line, 3);
            assert_eq!(content, "b c");
        }
        LoadError::Io(err) => panic!("unexpected io error: {err}"),
    }

    // Lines before the bad one stay applied.
    assert!(g.has_node("a"));
}

#[test]
fn test_load_malformed_weight() {
    let mut g: HashGraph<i64> = HashGraph::new();
    let err = g.load("a b ten\n".as_bytes(), " ").unwrap_err();

    match err {
        LoadError::Malformed { line, content } => {
            assert_eq!(line, 1);
            assert_eq!(content, "a b ten");
        }
        LoadError::Io(err) => panic!("unexpected io error: {err}"),
    }
    assert!(g.is_empty());
}

#[test]
fn test_store_format_and_round_trip() {
    let mut g: HashGraph<i64> = HashGraph::new();
    g.add_edge("c", "a", 1);
    g.add_edge("a", "b", 3);

    let mut buf = Vec::new();
    g.store(&mut buf, " ").unwrap();
    let text = String::from_utf8(buf).unwrap();
    assert_eq!(text, "a\nb\nc\na b 3\nc a 1\n");

    let mut reloaded: HashGraph<i64> = HashGraph::new();
    let applied = reloaded.load(text.as_bytes(), " ").unwrap();
    assert_eq!(applied, 5);
    assert_eq!(reloaded, g);
    reloaded.validate().expect("graph should be valid");
}

#[test]
fn test_equality_is_content_only() {
    let mut a: HashGraph<i64> = HashGraph::new();
    a.add_edge("x", "y", 1);
    a.add_node("z");

    // Same content, different construction order.
    let mut b: HashGraph<i64> = HashGraph::new();
    b.add_node("z");
    b.add_node("y");
    b.add_edge("x", "y", 1);
    assert_eq!(a, b);

    b.add_edge("x", "y", 2);
    assert_ne!(a, b);

    let mut c = a.clone();
    assert_eq!(a, c);
    c.add_node("w");
    assert_ne!(a, c);
}

#[test]
fn test_dijkstra_costs_and_back_pointers() {
    let mut g: HashGraph<i64> = HashGraph::new();
    g.add_edge("a", "b", 1);
    g.add_edge("b", "c", 1);
    g.add_edge("a", "c", 5);
    g.add_edge("c", "d", 2);
    g.add_node("e");

    let answer = extended_dijkstra(&g, "a");
    assert_eq!(answer.len(), g.node_count());

    let a = answer.get(&"a".to_owned()).unwrap();
    assert_eq!(a.cost, Some(0));
    assert_eq!(a.from, None);

    let b = answer.get(&"b".to_owned()).unwrap();
    assert_eq!(b.cost, Some(1));
    assert_eq!(b.from, Some("a".to_owned()));

    // The two-hop path beats the direct edge.
    let c = answer.get(&"c".to_owned()).unwrap();
    assert_eq!(c.cost, Some(2));
    assert_eq!(c.from, Some("b".to_owned()));

    let d = answer.get(&"d".to_owned()).unwrap();
    assert_eq!(d.cost, Some(4));
    assert_eq!(d.from, Some("c".to_owned()));

    // No path reaches the isolated node.
    let e = answer.get(&"e".to_owned()).unwrap();
    assert_eq!(e.cost, None);
    assert_eq!(e.from, None);
}

#[test]
fn test_dijkstra_improvement_after_enqueue() {
    // b is first reached for 10, then improved to 2 before settling; the
    // stale pending entry is skipped when dequeued.
    let mut g: HashGraph<i64> = HashGraph::new();
    g.add_edge("a", "b", 10);
    g.add_edge("a", "c", 1);
    g.add_edge("c", "b", 1);

    let answer = extended_dijkstra(&g, "a");
    let b = answer.get(&"b".to_owned()).unwrap();
    assert_eq!(b.cost, Some(2));
    assert_eq!(b.from, Some("c".to_owned()));
}

#[test]
fn test_dijkstra_missing_start() {
    let mut g: HashGraph<i64> = HashGraph::new();
    g.add_edge("a", "b", 1);

    // Every node gets the sentinel; the answer still covers the graph.
    let answer = extended_dijkstra(&g, "zzz");
    assert_eq!(answer.len(), 2);
    assert_eq!(answer.get(&"a".to_owned()).unwrap().cost, None);
    assert_eq!(answer.get(&"b".to_owned()).unwrap().cost, None);

    let empty: HashGraph<i64> = HashGraph::new();
    assert!(extended_dijkstra(&empty, "a").is_empty());
}

#[test]
fn test_recover_path() {
    let mut g: HashGraph<i64> = HashGraph::new();
    g.add_edge("a", "b", 1);
    g.add_edge("b", "c", 1);
    g.add_edge("a", "c", 5);
    g.add_node("d");

    let answer = extended_dijkstra(&g, "a");

    let path: Vec<String> = recover_path(&answer, "c").into_iter().collect();
    assert_eq!(path, ["a", "b", "c"]);

    // The start's path is just itself.
    let path: Vec<String> = recover_path(&answer, "a").into_iter().collect();
    assert_eq!(path, ["a"]);

    // Unreachable or unknown nodes give an empty path.
    assert!(recover_path(&answer, "d").is_empty());
    assert!(recover_path(&answer, "zzz").is_empty());
}

#[test]
fn test_by_cost_ranks_reachable_first() {
    let cheap: PathInfo<i64> =
        PathInfo { node: "a".to_owned(), cost: Some(1), from: None };
    let dear: PathInfo<i64> =
        PathInfo { node: "b".to_owned(), cost: Some(9), from: None };
    let lost: PathInfo<i64> = PathInfo::unreachable("c");

    assert!(by_cost(&cheap, &dear));
    assert!(!by_cost(&dear, &cheap));
    assert!(by_cost(&cheap, &lost));
    assert!(!by_cost(&lost, &cheap));
    assert!(!by_cost(&lost, &lost));
    assert!(!by_cost(&cheap, &cheap));
}

#[test]
fn test_path_info_display() {
    let reached: PathInfo<i64> = PathInfo {
        node: "c".to_owned(),
        cost: Some(3),
        from: Some("b".to_owned()),
    };
    assert_eq!(format!("{reached}"), "info[c,cost=3,from=b]");

    let start: PathInfo<i64> =
        PathInfo { node: "a".to_owned(), cost: Some(0), from: None };
    assert_eq!(format!("{start}"), "info[a,cost=0]");

    let lost: PathInfo<i64> = PathInfo::unreachable("x");
    assert_eq!(format!("{lost}"), "info[x,unreachable]");
}

#[derive(Debug, Arbitrary)]
struct EdgeSpec {
    #[strategy(0u8..8)]
    from: u8,
    #[strategy(0u8..8)]
    to: u8,
    #[strategy(0i64..100)]
    weight: i64,
}

fn node_name(index: u8) -> String {
    format!("n{index}")
}

fn build(edges: &[EdgeSpec]) -> HashGraph<i64> {
    let mut g = HashGraph::new();
    for edge in edges {
        g.add_edge(node_name(edge.from), node_name(edge.to), edge.weight);
    }
    g
}

#[proptest(cases = 64)]
fn proptest_store_load_round_trip(
    #[strategy(prop::collection::vec(any::<EdgeSpec>(), 0..64))] edges: Vec<
        EdgeSpec,
    >,
) {
    let g = build(&edges);
    g.validate().expect("graph should be valid");

    let mut buf = Vec::new();
    g.store(&mut buf, "\t").unwrap();
    let mut reloaded: HashGraph<i64> = HashGraph::new();
    reloaded.load(buf.as_slice(), "\t").unwrap();

    assert_eq!(reloaded, g);
    reloaded.validate().expect("graph should be valid");
}

#[proptest(cases = 64)]
fn proptest_dijkstra_relaxed_edges(
    #[strategy(prop::collection::vec(any::<EdgeSpec>(), 0..64))] edges: Vec<
        EdgeSpec,
    >,
) {
    let g = build(&edges);
    let answer = extended_dijkstra(&g, "n0");

    // Every node is answered exactly once.
    assert_eq!(answer.len(), g.node_count());

    for name in g.all_nodes() {
        let info = answer.get(name).unwrap();
        assert_eq!(&info.node, name);

        // A settled cost admits no shortcut through any edge.
        if let Some(cost) = info.cost {
            for next in g.out_nodes(name).unwrap().iter() {
                let weight = *g.edge_value(name, next).unwrap();
                let next_cost = answer
                    .get(next)
                    .unwrap()
                    .cost
                    .expect("neighbors of reached nodes are reached");
                assert!(next_cost <= cost + weight);
            }
        }

        // Back-pointers replay to a full path that starts at the start.
        match (&info.cost, &info.from) {
            (Some(cost), Some(from)) => {
                let via = answer.get(from).unwrap();
                let hop =
                    *g.edge_value(from, name).expect("from is a real edge");
                assert_eq!(via.cost.unwrap() + hop, *cost);
                let path = recover_path(&answer, name);
                assert!(path.len() >= 2);
                assert_eq!(path.peek().unwrap(), &"n0".to_owned());
            }
            (Some(_), None) => assert_eq!(name, &"n0".to_owned()),
            (None, from) => assert_eq!(from, &None),
        }
    }
}
