use random_search::{Function, ObjectiveFunction, RandomSearch};

#[test]
fn test_sphere_reaches_known_minimum() {
    let best = RandomSearch::new(Function::Sphere, 2, 25)
        .unwrap()
        .optimize(200);
    let fopt = Function::Sphere.evaluate(&best);
    assert!(fopt < 1e-3, "sphere fopt {fopt} should be < 1e-3");
    assert!(best.iter().all(|x| x.abs() < 0.05), "best {best:?} should be near the origin");
}

#[test]
fn test_rosenbrock_improves_on_initial_population() {
    let outcome = RandomSearch::new(Function::Rosenbrock, 2, 25).unwrap().run(300);
    assert!(
        outcome.best_fitness < outcome.initial_fitness,
        "rosenbrock made no progress from {}",
        outcome.initial_fitness
    );
}

#[test]
fn test_more_iterations_never_hurt() {
    // The refinement phase only ever keeps strict improvements, and a longer
    // run starts from the same initial population.
    let short = RandomSearch::new(Function::Sphere, 3, 10).unwrap().run(0);
    let long = RandomSearch::new(Function::Sphere, 3, 10).unwrap().run(100);
    assert_eq!(short.initial_fitness, long.initial_fitness);
    assert!(long.best_fitness <= short.best_fitness);
}
