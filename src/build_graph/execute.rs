use{
    rand::SeedableRng,
    rand_pcg::Pcg64,
    serde_json::Value,
    super::*,
    crate::contact_graph::ContactGraph,
};

pub fn run_build_graph(param: BuildGraphParams, _json: Value)
{
    let mut rng = Pcg64::seed_from_u64(param.graph_seed);
    let graph = ContactGraph::from_distribution(
        param.system_size.get(),
        &param.contact_distribution,
        &mut rng
    );
    println!(
        "contact graph: {} agents, {} edges, mean degree {:.2}",
        graph.size(),
        graph.edge_count(),
        graph.mean_degree()
    );
    let name = param.out_file
        .clone()
        .unwrap_or_else(|| param.name());
    println!("Creating: {}", &name);
    graph.save(&name)
        .expect("unable to save contact graph");
}
