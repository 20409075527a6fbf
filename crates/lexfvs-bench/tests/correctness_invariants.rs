//! Property tests over generated dictionaries: every stage of the pipeline
//! is checked against the independent checkers in `correctness`.
#![allow(clippy::expect_used)]

use lexfvs_bench::correctness::{
    check_annealed, check_graph_invariants, check_oracles_agree, check_refinement,
    check_removal_feasible,
};
use lexfvs_bench::{GeneratorConfig, generate_dictionary};
use lexfvs_core::{AnnealConfig, CullMode, Oracle, Solver, anneal, cull};
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn config_strategy() -> impl Strategy<Value = GeneratorConfig> {
    (any::<u64>(), 5usize..60, 1usize..15, 0.0f64..0.5).prop_map(
        |(seed, num_headwords, num_primitives, forward_reference_rate)| GeneratorConfig {
            seed,
            num_headwords,
            num_primitives,
            min_definition_len: 1,
            max_definition_len: 5,
            forward_reference_rate,
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn constructed_set_is_feasible(config in config_strategy()) {
        let dict = generate_dictionary(&config);
        let solver = Solver::new(dict.clone());
        let graph = solver.build_graph();
        prop_assert!(check_graph_invariants(&dict, &graph).is_ok());

        let removal = solver.construct();
        let free = graph.free_words();
        prop_assert!(check_removal_feasible(&graph, &removal, &free).is_ok());
        prop_assert!(check_oracles_agree(&graph, &removal, &free).is_ok());
    }

    #[test]
    fn oracles_agree_on_partial_sets(config in config_strategy(), keep in 0usize..8) {
        let solver = Solver::new(generate_dictionary(&config));
        let removal = solver.construct();
        let graph = solver.build_graph();
        let free = graph.free_words();
        let partial = &removal[..keep.min(removal.len())];
        prop_assert!(check_oracles_agree(&graph, partial, &free).is_ok());
    }

    #[test]
    fn culling_keeps_feasibility(config in config_strategy()) {
        let solver = Solver::new(generate_dictionary(&config));
        let removal = solver.construct();
        let graph = solver.build_graph();
        let free = graph.free_words();
        let oracle = Oracle::new(&graph, &free);
        for mode in [CullMode::SinglePass, CullMode::Fixpoint] {
            let culled = cull(&oracle, &removal, mode);
            prop_assert!(check_refinement(&oracle, &removal, &culled).is_ok());
        }
    }

    #[test]
    fn annealing_ends_feasible(config in config_strategy(), rng_seed in any::<u64>()) {
        let solver = Solver::new(generate_dictionary(&config));
        let removal = solver.construct();
        let graph = solver.build_graph();
        let free = graph.free_words();
        let anneal_config = AnnealConfig {
            initial_temperature: 0.5,
            cooling_rate: 0.01,
            ..AnnealConfig::default()
        };
        let result = anneal(
            Oracle::new(&graph, &free),
            &removal,
            anneal_config,
            StdRng::seed_from_u64(rng_seed),
        )
        .expect("valid schedule");
        let oracle = Oracle::new(&graph, &free);
        prop_assert!(check_annealed(&oracle, &result.solution).is_ok());
    }
}
