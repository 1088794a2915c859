use random_search::{Function, ObjectiveFunction, RandomSearch};

#[test]
fn test_result_within_bounds() {
    for function in Function::ALL {
        let (low, high) = function.bounds();
        for dim in [1, 2, 5, 10] {
            let best = RandomSearch::new(function, dim, 8).unwrap().optimize(50);
            assert_eq!(best.len(), dim);
            for &x in &best {
                assert!(low <= x && x <= high, "{function} dim={dim}: {x} outside [{low}, {high}]");
            }
        }
    }
}

#[test]
fn test_history_is_monotonically_non_increasing() {
    for function in Function::ALL {
        let outcome = RandomSearch::new(function, 3, 12).unwrap().run(150);
        assert_eq!(outcome.history.len(), 150);
        assert!(outcome.history[0] <= outcome.initial_fitness, "{function}");
        assert!(
            outcome.history.windows(2).all(|w| w[1] <= w[0]),
            "{function}: history increased"
        );
        assert_eq!(*outcome.history.last().unwrap(), outcome.best_fitness);
    }
}

#[test]
fn test_best_fitness_matches_best_position() {
    for function in Function::ALL {
        let outcome = RandomSearch::new(function, 4, 10).unwrap().run(60);
        assert_eq!(function.evaluate(&outcome.best_position), outcome.best_fitness);
    }
}

#[test]
fn test_zero_iterations_returns_initial_best() {
    let outcome = RandomSearch::new(Function::Sphere, 2, 10).unwrap().run(0);
    assert!(outcome.history.is_empty());
    assert_eq!(outcome.best_fitness, outcome.initial_fitness);
    assert_eq!(outcome.evaluations, 10);
    assert_eq!(
        RandomSearch::new(Function::Sphere, 2, 10).unwrap().optimize(0),
        outcome.best_position
    );
}

#[test]
fn test_degenerate_domain_runs() {
    struct Point;
    impl ObjectiveFunction for Point {
        fn evaluate(&self, position: &[f64]) -> f64 {
            position.iter().map(|x| x * x).sum()
        }
        fn bounds(&self) -> (f64, f64) {
            (-3.0, -3.0)
        }
    }

    let outcome = RandomSearch::new(Point, 4, 6).unwrap().run(30);
    assert_eq!(outcome.best_position, vec![-3.0; 4]);
    assert_eq!(outcome.best_fitness, 36.0);
    assert!(outcome.history.iter().all(|&f| f == 36.0));
}

#[test]
fn test_single_agent_single_dimension() {
    let outcome = RandomSearch::new(Function::Sphere, 1, 1).unwrap().run(100);
    assert_eq!(outcome.best_position.len(), 1);
    assert!(outcome.best_fitness <= outcome.initial_fitness);
    assert_eq!(outcome.evaluations, 101);
}

#[test]
fn test_rosenbrock_one_dimension_scores_zero_everywhere() {
    // Every candidate ties at zero, so the first agent is kept.
    let outcome = RandomSearch::new(Function::Rosenbrock, 1, 5).unwrap().run(10);
    assert_eq!(outcome.best_fitness, 0.0);
    let (low, high) = Function::Rosenbrock.bounds();
    assert!((low..=high).contains(&outcome.best_position[0]));
}
