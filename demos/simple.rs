use vcg_pricing::{CostGraph, PricingInput, Result};

fn build_sample_graph() -> CostGraph<u32> {
    CostGraph::from_edges([
        (1, 2, 3.0),
        (2, 3, 1.0),
        (3, 4, 1.0),
        (2, 4, 4.0),
        (1, 4, 10.0),
        (1, 3, 5.0),
    ])
}

fn main() -> Result<()> {
    let mut graph = build_sample_graph();
    let output = PricingInput::new(&mut graph, 1, 4).compute()?;

    println!("{:>10}  {:>8}  {:>8}", "Edge", "Weight", "Price");
    for ep in &output.prices {
        println!(
            "{:>10}  {:>8}  {:>8}",
            ep.edge.to_string(),
            ep.weight,
            ep.price
        );
    }
    println!("total: {:.1}", output.total);

    Ok(())
}
