//! Replays the search by hand against the same generator to pin down the
//! draw order and the update rule.

use random_search::{DEFAULT_SEED, Function, ObjectiveFunction, RandomSearch};

fn uniform(rng: &mut fastrand::Rng, low: f64, high: f64) -> f64 {
    low + rng.f64() * (high - low)
}

#[allow(clippy::cast_precision_loss)]
fn replay(function: Function, dim: usize, agents: usize, iterations: usize) -> (Vec<f64>, f64) {
    let mut rng = fastrand::Rng::with_seed(DEFAULT_SEED);
    let (low, high) = function.bounds();
    let range = high - low;

    let population: Vec<Vec<f64>> = (0..agents)
        .map(|_| (0..dim).map(|_| uniform(&mut rng, low, high)).collect())
        .collect();

    let mut best_pos = population[0].clone();
    let mut best_fit = function.evaluate(&best_pos);
    for position in &population[1..] {
        let fit = function.evaluate(position);
        if fit < best_fit {
            best_fit = fit;
            best_pos = position.clone();
        }
    }

    for iter in 0..iterations {
        let t = iter as f64 / iterations as f64;
        let radius = range * (0.10 - 0.099 * t);
        for _ in 0..agents {
            let mut candidate = vec![0.0; dim];
            for j in 0..dim {
                let delta = (rng.f64() * 2.0 - 1.0) * radius;
                candidate[j] = (best_pos[j] + delta).max(low).min(high);
            }
            let fit = function.evaluate(&candidate);
            if fit < best_fit {
                best_fit = fit;
                best_pos = candidate;
            }
        }
    }

    (best_pos, best_fit)
}

#[test]
fn test_engine_matches_hand_replay() {
    for function in [Function::Sphere, Function::Rosenbrock] {
        for (dim, agents, iterations) in [(1, 1, 10), (2, 10, 100), (5, 25, 40)] {
            let (expected_pos, expected_fit) = replay(function, dim, agents, iterations);
            let outcome = RandomSearch::new(function, dim, agents)
                .unwrap()
                .run(iterations);
            assert_eq!(outcome.best_position, expected_pos, "{function} {dim}/{agents}/{iterations}");
            assert_eq!(outcome.best_fitness, expected_fit);
        }
    }
}

#[test]
fn test_zero_iterations_is_best_of_initial_population() {
    let (expected, _) = replay(Function::Sphere, 3, 17, 0);
    let got = RandomSearch::new(Function::Sphere, 3, 17).unwrap().optimize(0);
    assert_eq!(got, expected);
}
