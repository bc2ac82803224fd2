// Copyright (c)  by Gleb E. Zaslavkiy
//MIT License
#![allow(non_snake_case)]

use num_complex::Complex64;
use std::path::Path;

use crate::Utils::logger::save_trace_to_csv;
use crate::numerical::scalar_roots::companion::deflate;
use crate::numerical::scalar_roots::config::RootFinderSettings;
use crate::numerical::scalar_roots::errors::RootFindingError;
use crate::numerical::scalar_roots::evaluator::{ClosureFunction, SymbolicFunction};
use crate::numerical::scalar_roots::polynomial::Polynomial;
use crate::numerical::scalar_roots::root_finder_api::{
    InitialGuess, RootFindingMethod, ScalarRootFinder, find_all_roots,
};
use crate::symbolic::symbolic_engine::Expr;

pub fn root_finding_examples(example: usize) -> Result<(), RootFindingError> {
    match example {
        0 => {
            // PARSE, DIFFERENTIATE, EVALUATE
            let input = "x^3 - x - 1";
            let f = Expr::parse_expression(input).map_err(|reason| RootFindingError::Evaluation {
                at: input.to_string(),
                reason,
            })?;
            let df_dx = f.diff_simplified("x");
            println!("f = {}, df/dx = {}", f, df_dx);
            let f_at_2 = f.lambdify1D("x")(2.0);
            let f_at_i = f.eval_complex("x", Complex64::new(0.0, 1.0));
            println!("f(2) = {}, f(i) = {}", f_at_2, f_at_i);
        }
        1 => {
            // THE SAME EQUATION, EVERY METHOD
            let mut finder = ScalarRootFinder::new();
            finder.set_tolerance(1e-10);
            finder.set_loglevel(Some("info".to_string()));
            let f = SymbolicFunction::from_string("x^3 - x - 1", "x")?;
            // fixed point form x = (x + 1)^(1/3)
            let g = SymbolicFunction::from_string("(x + 1)^(1/3)", "x")?;
            let seeds = [0.0, 1.0, 2.0].map(|x| Complex64::new(x, 0.0));
            for method in [
                RootFindingMethod::Bisection,
                RootFindingMethod::FalsePosition,
                RootFindingMethod::BisectionAitken,
                RootFindingMethod::NewtonRaphson,
                RootFindingMethod::Secant,
                RootFindingMethod::SecantAitken,
                RootFindingMethod::Steffensen,
                RootFindingMethod::FixedPoint,
                RootFindingMethod::Muller,
            ] {
                let (function, guess) = match method {
                    m if m.is_bracketing() => (&f, InitialGuess::Bracket(1.0, 2.0)),
                    RootFindingMethod::Secant | RootFindingMethod::SecantAitken => {
                        (&f, InitialGuess::Pair(1.0, 2.0))
                    }
                    RootFindingMethod::FixedPoint => (&g, InitialGuess::Point(1.5)),
                    RootFindingMethod::Muller => (&f, InitialGuess::ComplexTriple(seeds)),
                    _ => (&f, InitialGuess::Point(1.5)),
                };
                let outcome = finder.solve(function, method, guess)?;
                println!(
                    "{:>16}: root = {:.12}, iterations = {}",
                    method.to_string(),
                    outcome.root(),
                    outcome.iterations()
                );
            }
        }
        2 => {
            // CLOSURES AND THE TRACE TABLE
            let mut finder = ScalarRootFinder::new();
            finder.set_tolerance(1e-12);
            let f = ClosureFunction::new(|x: f64| x.cos() - x, "cos(x) - x".to_string());
            let result = finder.secant_aitken(&f, 0.0, 1.0)?;
            println!("root = {}\n{}", result.root, result.trace_table());
            let path = Path::new("secant_aitken_trace.csv");
            save_trace_to_csv(&result.trace, path).map_err(|e| {
                RootFindingError::InvalidInput(format!("cannot write {}: {}", path.display(), e))
            })?;
            println!("trace saved to {}", path.display());
        }
        3 => {
            // COMPLEX ROOTS WITH MULLER
            let p = Polynomial::new(vec![1.0, -2.0, 5.0])?;
            let mut finder = ScalarRootFinder::new();
            finder.set_tolerance(1e-12);
            let seeds = [-1.0, 0.0, 1.0].map(|x| Complex64::new(x, 0.0));
            let result = finder.muller(&p, seeds[0], seeds[1], seeds[2])?;
            println!("{} = 0 at x = {}, |p(x)| = {:e}", p, result.root, result.function_value.norm());
        }
        4 => {
            // ALL ROOTS OF A POLYNOMIAL
            let p = Polynomial::new(vec![1.0, -3.0, 5.0, -15.0, 4.0, -12.0])?;
            let report = deflate(&p)?;
            for step in &report.steps {
                println!(
                    "degree {}: extracted {:?}, quotient {:?}",
                    step.degree, step.extracted, step.quotient
                );
            }
            println!("roots of {}: {:?}", p, report.roots);
            let roots = find_all_roots(&[1.0, -6.0, 11.0, -6.0])?;
            println!("roots of x^3 - 6x^2 + 11x - 6: {:?}", roots);
        }
        5 => {
            // SETTINGS FROM TOML
            let document = r#"
                [solver]
                tolerance = 1e-9
                max_iterations = 50
                loglevel = "debug"
                method = "steffensen"
            "#;
            let settings = RootFinderSettings::from_toml_str(document)?;
            let finder = ScalarRootFinder::from_settings(settings);
            let method = finder
                .default_method()
                .unwrap_or(RootFindingMethod::NewtonRaphson);
            let outcome =
                finder.solve_symbolic_str("exp(x) - 2", "x", method, InitialGuess::Point(1.0))?;
            println!("{}: ln 2 = {}", method, outcome.root().re);
        }
        _ => {
            println!("no example with number {}", example);
        }
    }
    Ok(())
}
