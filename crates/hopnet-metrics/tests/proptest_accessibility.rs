use std::collections::BTreeSet;

use proptest::prelude::*;

use hopnet_core::config::AccessibilityConfig;
use hopnet_core::graph::DiNetwork;
use hopnet_metrics::accessibility::{Direction, accessibility_with, build_frontiers};

const EPS: f64 = 1e-9;

/// Random directed graph on `n0..n{size}` with positive weights and no
/// self-loops.
fn arb_network() -> impl Strategy<Value = DiNetwork> {
    (1_usize..8).prop_flat_map(|size| {
        let edge = (0..size, 0..size, 0.1_f64..10.0);
        proptest::collection::vec(edge, 0..20).prop_map(move |edges| {
            let mut net = DiNetwork::new();
            for i in 0..size {
                net.add_node(&format!("n{i}"));
            }
            for (a, b, w) in edges {
                if a != b {
                    net.add_edge(&format!("n{a}"), &format!("n{b}"), Some(w));
                }
            }
            net
        })
    })
}

fn unit_weights(net: &DiNetwork) -> DiNetwork {
    let mut unit = net.clone();
    for w in unit.graph.edge_weights_mut() {
        *w = Some(1.0);
    }
    unit
}

fn arb_direction() -> impl Strategy<Value = Direction> {
    prop_oneof![
        Just(Direction::Symmetric),
        Just(Direction::In),
        Just(Direction::Out),
    ]
}

proptest! {
    #![proptest_config(proptest::test_runner::Config::with_cases(256))]

    #[test]
    fn scores_lie_between_one_and_reached_count(
        net in arb_network(),
        direction in arb_direction(),
        hops in 1_usize..5,
        weighted in any::<bool>(),
    ) {
        let config = AccessibilityConfig::new(weighted, hops);
        let result = accessibility_with(&net, direction, &config).unwrap();

        for (idx, label) in net.graph.node_indices().map(|i| (i, net.graph[i].clone())) {
            let table = build_frontiers(&net, direction, idx, hops);
            for (hop, frontier) in table.iter() {
                let reached: BTreeSet<_> = frontier
                    .iter()
                    .map(|&e| direction.reached_endpoint(e))
                    .collect();
                let score = result.get(&label, hop).unwrap();
                prop_assert!(score >= 1.0 - EPS, "{label}_h_{hop} = {score}");
                let bound = reached.len().max(1) as f64;
                prop_assert!(score <= bound + EPS, "{label}_h_{hop} = {score} > {bound}");
            }
        }
    }

    #[test]
    fn unit_weights_equal_unweighted(
        net in arb_network(),
        direction in arb_direction(),
        hops in 1_usize..5,
    ) {
        let unit = unit_weights(&net);
        let weighted =
            accessibility_with(&unit, direction, &AccessibilityConfig::new(true, hops)).unwrap();
        let counted =
            accessibility_with(&net, direction, &AccessibilityConfig::new(false, hops)).unwrap();
        prop_assert_eq!(weighted.to_flat_map(), counted.to_flat_map());
    }

    #[test]
    fn reruns_are_bit_identical(
        net in arb_network(),
        direction in arb_direction(),
        hops in 1_usize..5,
    ) {
        let config = AccessibilityConfig::new(true, hops);
        let first = accessibility_with(&net, direction, &config).unwrap();
        let second = accessibility_with(&net, direction, &config).unwrap();
        let bits = |r: &hopnet_metrics::AccessibilityResult| {
            r.iter().map(|(k, v)| (k.to_string(), v.to_bits())).collect::<Vec<_>>()
        };
        prop_assert_eq!(bits(&first), bits(&second));
    }

    #[test]
    fn every_node_gets_every_hop(
        net in arb_network(),
        direction in arb_direction(),
        hops in 1_usize..6,
    ) {
        let config = AccessibilityConfig::new(false, hops);
        let result = accessibility_with(&net, direction, &config).unwrap();
        prop_assert_eq!(result.len(), net.node_count() * hops);
    }
}
