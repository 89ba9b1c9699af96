use{
    rand::SeedableRng,
    rand_pcg::Pcg64,
    serde_json::Value,
    super::*,
    crate::contact_graph::ContactGraph,
    crate::epidemic_model::*,
};

pub fn run_curves(param: SimpleCurvesParams, json: Value)
{
    let mut graph_rng = Pcg64::seed_from_u64(param.graph_seed);
    let graph = match &param.graph_file{
        Some(path) => {
            ContactGraph::load(path)
                .expect("unable to load contact graph")
        },
        None => ContactGraph::from_distribution(
            param.system_size.get(),
            &param.contact_distribution,
            &mut graph_rng
        ),
    };

    let name = param.name();
    println!("Creating: {}", &name);
    let mut writer = CurveWriter::new(&name);
    writer.write_header(&[json])
        .expect("unable to write curve header");

    let mut master_rng = Pcg64::seed_from_u64(param.sir_seed);
    let bar = crate::indication_bar(param.samples);
    for _ in 0..param.samples{
        let opt = EpidemicOptions::from_curves_param(&param);
        let trial_rng = Pcg64::from_rng(&mut master_rng).unwrap();
        let mut model = EpidemicModel::new(graph.clone(), opt, trial_rng);
        writer.write_current(&model)
            .expect("unable to write curve point");
        let mut rounds = 0;
        loop{
            if param.num_rounds > 0{
                if rounds >= param.num_rounds{
                    break;
                }
            } else if model.is_extinct() || model.time() >= param.max_rounds{
                break;
            }
            model.round();
            rounds += 1;
            writer.write_current(&model)
                .expect("unable to write curve point");
        }
        writer.write_line()
            .expect("unable to finish curve line");
        bar.inc(1);
    }
    bar.finish();
}
