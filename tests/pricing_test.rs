use vcg_pricing::{CostGraph, PricingError, PricingInput, price_cheapest_path};

fn snapshot(graph: &CostGraph<u32>) -> Vec<(u32, u32, f64)> {
    let mut edges: Vec<(u32, u32, f64)> = graph
        .edges()
        .map(|(a, b, w)| if a <= b { (a, b, w) } else { (b, a, w) })
        .collect();
    edges.sort_by_key(|&(a, b, _)| (a, b));
    edges
}

#[test]
fn test_shortcut_network_prices() {
    // Path 1-2-3-4 (weights 3, 1, 1) with shortcuts 2-4, 1-4 and 1-3.
    let mut graph = CostGraph::from_edges([
        (1, 2, 3.0),
        (2, 3, 1.0),
        (3, 4, 1.0),
        (2, 4, 4.0),
        (1, 4, 10.0),
        (1, 3, 5.0),
    ]);
    let before = snapshot(&graph);

    let output = price_cheapest_path(&mut graph, 1, 4).expect("graph is connected");

    assert_eq!(output.path, vec![1, 2, 3, 4]);
    assert_eq!(output.baseline_cost, 5.0);
    assert_eq!(output.price_of(1, 2), Some(4.0));
    assert_eq!(output.price_of(2, 3), Some(2.0));
    assert_eq!(output.price_of(3, 4), Some(3.0));
    assert_eq!(output.total, 9.0);
    assert_eq!(snapshot(&graph), before);
}

#[test]
fn test_complete_graph_prices_the_direct_edge() {
    let mut graph = CostGraph::complete(&[0, 1, 2, 3, 4, 5], 1.0);

    let output = price_cheapest_path(&mut graph, 1, 5).expect("graph is connected");

    // The direct edge is the whole path; its cheapest detour is any two-hop
    // route.
    assert_eq!(output.path, vec![1, 5]);
    assert_eq!(output.baseline_cost, 1.0);
    assert_eq!(output.price_of(1, 5), Some(2.0));
    assert_eq!(output.total, 2.0);
}

#[test]
fn test_complete_graph_without_direct_edge() {
    let mut graph = CostGraph::complete(&[0, 1, 2, 3, 4, 5], 1.0);
    graph.remove_edge(1, 5);

    let output = price_cheapest_path(&mut graph, 1, 5).expect("graph is connected");

    // Baseline is some two-hop route; suspending either hop leaves another
    // two-hop route through a different intermediate, so each hop prices at 1.
    assert_eq!(output.path.len(), 3);
    assert_eq!(output.baseline_cost, 2.0);
    assert_eq!(output.prices.len(), 2);
    assert!(output.prices.iter().all(|ep| ep.price == 1.0));
    assert!(output.prices.iter().all(|ep| !ep.no_alternative));
    assert_eq!(output.total, 2.0);
}

#[test]
fn test_bare_path_falls_back_on_every_edge() {
    let mut graph = CostGraph::from_edges([(1, 2, 3.0), (2, 3, 1.0), (3, 4, 1.0)]);
    let before = snapshot(&graph);

    let output = price_cheapest_path(&mut graph, 1, 4).expect("graph is connected");

    assert_eq!(output.baseline_cost, 5.0);
    assert_eq!(output.prices.len(), 3);
    assert!(output.prices.iter().all(|ep| ep.no_alternative));
    assert!(output.prices.iter().all(|ep| ep.price == 77.7));
    assert!(
        (output.total - 233.1).abs() < 1e-9,
        "total mismatch: got {}",
        output.total
    );
    assert_eq!(snapshot(&graph), before);
}

#[test]
fn test_single_shortcut_mixes_fallback_and_finite_prices() {
    // Only 2-4 offers a detour; the 1-2 edge is a bridge.
    let mut graph = CostGraph::from_edges([
        (1, 2, 3.0),
        (2, 3, 1.0),
        (3, 4, 1.0),
        (2, 4, 4.0),
    ]);

    let output = price_cheapest_path(&mut graph, 1, 4).expect("graph is connected");

    assert_eq!(output.path, vec![1, 2, 3, 4]);
    assert_eq!(output.price_of(1, 2), Some(77.7));
    assert_eq!(output.price_of(2, 3), Some(3.0));
    assert_eq!(output.price_of(3, 4), Some(3.0));
    let fallbacks: Vec<bool> = output.prices.iter().map(|ep| ep.no_alternative).collect();
    assert_eq!(fallbacks, vec![true, false, false]);
    assert!(
        (output.total - 83.7).abs() < 1e-9,
        "total mismatch: got {}",
        output.total
    );
}

#[test]
fn test_disconnected_endpoints_abort_with_no_path() {
    let mut graph = CostGraph::from_edges([(1, 2, 1.0), (2, 3, 2.0), (8, 9, 1.0)]);
    let before = snapshot(&graph);

    let result = price_cheapest_path(&mut graph, 1, 9);

    assert_eq!(
        result,
        Err(PricingError::NoPath {
            source: "1".to_string(),
            target: "9".to_string(),
        })
    );
    assert_eq!(snapshot(&graph), before);
}

#[test]
fn test_fallback_price_is_a_per_call_parameter() {
    let mut graph = CostGraph::from_edges([(1, 2, 3.0), (2, 3, 1.0), (3, 4, 1.0)]);

    let output = PricingInput {
        fallback_price: 500.0,
        ..PricingInput::new(&mut graph, 1, 4)
    }
    .compute()
    .expect("graph is connected");

    assert!(output.prices.iter().all(|ep| ep.price == 500.0));
    assert_eq!(output.total, 1500.0);
}

#[test]
fn test_total_matches_the_sum_of_prices() {
    let mut graph = CostGraph::from_edges([
        (1, 2, 3.0),
        (2, 3, 1.0),
        (3, 4, 1.0),
        (2, 4, 4.0),
    ]);

    let output = price_cheapest_path(&mut graph, 1, 4).expect("graph is connected");

    let sum: f64 = output.prices.iter().map(|ep| ep.price).sum();
    assert_eq!(output.total, sum);
}
