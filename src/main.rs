use vcg_pricing::{CostGraph, price_cheapest_path, render_dot};

fn main() {
    env_logger::init();

    // Path with shortcuts: every edge has a detour, so all prices are finite.
    let mut shortcut_network = CostGraph::from_edges([
        (1, 2, 3.0),
        (2, 3, 1.0),
        (3, 4, 1.0),
        (2, 4, 4.0),
        (1, 4, 10.0),
        (1, 3, 5.0),
    ]);
    run("shortcut network", &mut shortcut_network, 1, 4);

    // Complete graph: the direct edge wins, and its detour costs one hop more.
    let mut complete = CostGraph::complete(&[0, 1, 2, 3, 4, 5], 1.0);
    run("complete graph", &mut complete, 1, 5);

    // Bare path: removing any edge disconnects the endpoints, so every edge
    // is priced at the fallback.
    let mut bare_path = CostGraph::from_edges([(1, 2, 3.0), (2, 3, 1.0), (3, 4, 1.0)]);
    run("bare path", &mut bare_path, 1, 4);
}

fn run(name: &str, graph: &mut CostGraph<u32>, source: u32, target: u32) {
    println!("== {name}: pricing {source} -> {target}");
    match price_cheapest_path(graph, source, target) {
        Err(e) => {
            eprintln!("pricing failed: {e}");
        }
        Ok(output) => {
            println!(
                "cheapest path {:?} costs {}",
                output.path, output.baseline_cost
            );
            println!("{output}");
            println!();
            println!("{}", render_dot(graph, &output));
        }
    }
}
