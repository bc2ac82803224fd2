use RustedRoots::numerical::scalar_roots::companion::find_all_roots;
use RustedRoots::numerical::scalar_roots::evaluator::SymbolicFunction;
use RustedRoots::numerical::scalar_roots::root_finder_api::{
    InitialGuess, RootFindingMethod, ScalarRootFinder,
};
use criterion::{Criterion, criterion_group, criterion_main};
use num_complex::Complex64;
use std::hint::black_box;

fn bench_scalar_methods(c: &mut Criterion) {
    let function = match SymbolicFunction::from_string("x^3 - x - 1", "x") {
        Ok(function) => function,
        Err(e) => panic!("benchmark function does not parse: {}", e),
    };
    let mut finder = ScalarRootFinder::new();
    finder.set_loglevel(Some("off".to_string()));
    let seeds = [0.0, 1.0, 2.0].map(|x| Complex64::new(x, 0.0));
    let mut group = c.benchmark_group("x^3 - x - 1");
    for (method, guess) in [
        (RootFindingMethod::Bisection, InitialGuess::Bracket(1.0, 2.0)),
        (RootFindingMethod::NewtonRaphson, InitialGuess::Point(1.5)),
        (RootFindingMethod::Secant, InitialGuess::Pair(1.0, 2.0)),
        (RootFindingMethod::Steffensen, InitialGuess::Point(1.5)),
        (RootFindingMethod::Muller, InitialGuess::ComplexTriple(seeds)),
    ] {
        group.bench_function(method.to_string(), |b| {
            b.iter(|| finder.solve_with_method(&function, method, black_box(guess)))
        });
    }
    group.finish();
}

fn bench_deflation(c: &mut Criterion) {
    // (x - 1)(x - 2)...(x - 8)
    let coefficients = [1.0, -36.0, 546.0, -4536.0, 22449.0, -67284.0, 118124.0, -109584.0, 40320.0];
    c.bench_function("deflation degree 8", |b| {
        b.iter(|| find_all_roots(black_box(&coefficients)))
    });
}

criterion_group!(benches, bench_scalar_methods, bench_deflation);
criterion_main!(benches);
