//! Iteration records, results and trace rendering.
use num_complex::Complex64;
use tabled::{builder::Builder, settings::Style};

use crate::numerical::scalar_roots::root_finder_api::RootFindingMethod;

/// Immutable snapshot of one iteration step. The variant depends on the method family;
/// every variant carries the iteration index, the working points, the function values and
/// an error estimate.
#[derive(Debug, Clone, PartialEq)]
pub enum IterationRecord {
    /// bisection, false position and bisection-Aitken
    Bracketing {
        iteration: usize,
        a: f64,
        b: f64,
        c: f64,
        f_c: f64,
        error: f64,
        accelerated: Option<f64>,
    },
    Newton {
        iteration: usize,
        x: f64,
        f_x: f64,
        df_x: f64,
        x_next: f64,
        error: f64,
    },
    /// secant and secant-Aitken
    Secant {
        iteration: usize,
        x0: f64,
        x1: f64,
        x_next: f64,
        f_next: f64,
        error: f64,
        accelerated: Option<f64>,
    },
    Steffensen {
        iteration: usize,
        x: f64,
        f_x: f64,
        f_shifted: f64,
        x_next: f64,
        error: f64,
    },
    FixedPoint {
        iteration: usize,
        x: f64,
        g_x: f64,
        error: f64,
    },
    Muller {
        iteration: usize,
        x1: Complex64,
        x2: Complex64,
        x3: Complex64,
        x_next: Complex64,
        f_next: Complex64,
        error: f64,
    },
}

fn optional(value: &Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{:.12}", v))
}

impl IterationRecord {
    pub fn iteration(&self) -> usize {
        match self {
            IterationRecord::Bracketing { iteration, .. }
            | IterationRecord::Newton { iteration, .. }
            | IterationRecord::Secant { iteration, .. }
            | IterationRecord::Steffensen { iteration, .. }
            | IterationRecord::FixedPoint { iteration, .. }
            | IterationRecord::Muller { iteration, .. } => *iteration,
        }
    }

    pub fn error(&self) -> f64 {
        match self {
            IterationRecord::Bracketing { error, .. }
            | IterationRecord::Newton { error, .. }
            | IterationRecord::Secant { error, .. }
            | IterationRecord::Steffensen { error, .. }
            | IterationRecord::FixedPoint { error, .. }
            | IterationRecord::Muller { error, .. } => *error,
        }
    }

    /// Column names matching `row()`
    pub fn headers(&self) -> Vec<&'static str> {
        match self {
            IterationRecord::Bracketing { .. } => {
                vec!["n", "a", "b", "c", "f(c)", "error", "aitken"]
            }
            IterationRecord::Newton { .. } => vec!["n", "x", "f(x)", "f'(x)", "x_next", "error"],
            IterationRecord::Secant { .. } => {
                vec!["n", "x0", "x1", "x_next", "f(x_next)", "error", "aitken"]
            }
            IterationRecord::Steffensen { .. } => {
                vec!["n", "x", "f(x)", "f(x+f(x))", "x_next", "error"]
            }
            IterationRecord::FixedPoint { .. } => vec!["n", "x", "g(x)", "error"],
            IterationRecord::Muller { .. } => {
                vec!["n", "x1", "x2", "x3", "x_next", "f(x_next)", "error"]
            }
        }
    }

    pub fn row(&self) -> Vec<String> {
        match self {
            IterationRecord::Bracketing {
                iteration,
                a,
                b,
                c,
                f_c,
                error,
                accelerated,
            } => vec![
                iteration.to_string(),
                format!("{:.12}", a),
                format!("{:.12}", b),
                format!("{:.12}", c),
                format!("{:.3e}", f_c),
                format!("{:.3e}", error),
                optional(accelerated),
            ],
            IterationRecord::Newton {
                iteration,
                x,
                f_x,
                df_x,
                x_next,
                error,
            } => vec![
                iteration.to_string(),
                format!("{:.12}", x),
                format!("{:.3e}", f_x),
                format!("{:.6e}", df_x),
                format!("{:.12}", x_next),
                format!("{:.3e}", error),
            ],
            IterationRecord::Secant {
                iteration,
                x0,
                x1,
                x_next,
                f_next,
                error,
                accelerated,
            } => vec![
                iteration.to_string(),
                format!("{:.12}", x0),
                format!("{:.12}", x1),
                format!("{:.12}", x_next),
                format!("{:.3e}", f_next),
                format!("{:.3e}", error),
                optional(accelerated),
            ],
            IterationRecord::Steffensen {
                iteration,
                x,
                f_x,
                f_shifted,
                x_next,
                error,
            } => vec![
                iteration.to_string(),
                format!("{:.12}", x),
                format!("{:.3e}", f_x),
                format!("{:.3e}", f_shifted),
                format!("{:.12}", x_next),
                format!("{:.3e}", error),
            ],
            IterationRecord::FixedPoint {
                iteration,
                x,
                g_x,
                error,
            } => vec![
                iteration.to_string(),
                format!("{:.12}", x),
                format!("{:.12}", g_x),
                format!("{:.3e}", error),
            ],
            IterationRecord::Muller {
                iteration,
                x1,
                x2,
                x3,
                x_next,
                f_next,
                error,
            } => vec![
                iteration.to_string(),
                format!("{:.10}", x1),
                format!("{:.10}", x2),
                format!("{:.10}", x3),
                format!("{:.10}", x_next),
                format!("{:.3e}", f_next.norm()),
                format!("{:.3e}", error),
            ],
        }
    }
}

/// Pretty table of a trace; empty string for an empty trace
pub fn trace_table(trace: &[IterationRecord]) -> String {
    let Some(first) = trace.first() else {
        return String::new();
    };
    let mut builder = Builder::default();
    builder.push_record(first.headers());
    for record in trace {
        builder.push_record(record.row());
    }
    let mut table = builder.build();
    table.with(Style::modern_rounded());
    table.to_string()
}

/// Which derivative Newton-Raphson actually used
#[derive(Debug, Clone, PartialEq)]
pub enum DerivativeSource {
    /// supplied by the evaluator; `expression` is its readable form when known
    Analytic { expression: Option<String> },
    /// approximated as (f(x+h) - f(x-h)) / 2h
    CentralDifference { step: f64 },
}

/// Result of a converged solve
#[derive(Debug, Clone, PartialEq)]
pub struct RootFindingResult<T = f64> {
    pub root: T,
    pub function_value: T,
    pub iterations: usize,
    pub method: RootFindingMethod,
    pub trace: Vec<IterationRecord>,
    /// Newton-Raphson only
    pub derivative: Option<DerivativeSource>,
}

impl<T> RootFindingResult<T> {
    pub(crate) fn new(
        root: T,
        function_value: T,
        method: RootFindingMethod,
        trace: Vec<IterationRecord>,
    ) -> Self {
        Self {
            root,
            function_value,
            iterations: trace.len(),
            method,
            trace,
            derivative: None,
        }
    }

    pub fn trace_table(&self) -> String {
        trace_table(&self.trace)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_point_trace() -> Vec<IterationRecord> {
        vec![
            IterationRecord::FixedPoint {
                iteration: 1,
                x: 1.0,
                g_x: 0.5403023058681398,
                error: 0.45969769413186023,
            },
            IterationRecord::FixedPoint {
                iteration: 2,
                x: 0.5403023058681398,
                g_x: 0.8575532158463934,
                error: 0.3172509099782536,
            },
        ]
    }

    #[test]
    fn test_record_accessors() {
        let trace = fixed_point_trace();
        assert_eq!(trace[1].iteration(), 2);
        assert_eq!(trace[0].error(), 0.45969769413186023);
        assert_eq!(trace[0].headers().len(), trace[0].row().len());
    }

    #[test]
    fn test_rows_match_headers_for_every_family() {
        let z = Complex64::new(1.0, -1.0);
        let records = vec![
            IterationRecord::Bracketing {
                iteration: 1,
                a: 0.0,
                b: 2.0,
                c: 1.0,
                f_c: -1.0,
                error: 2.0,
                accelerated: None,
            },
            IterationRecord::Newton {
                iteration: 1,
                x: 1.5,
                f_x: 0.875,
                df_x: 5.75,
                x_next: 1.35,
                error: 0.15,
            },
            IterationRecord::Secant {
                iteration: 1,
                x0: 0.0,
                x1: 1.0,
                x_next: 0.68,
                f_next: 0.09,
                error: 0.32,
                accelerated: Some(0.7),
            },
            IterationRecord::Steffensen {
                iteration: 1,
                x: 1.0,
                f_x: -1.0,
                f_shifted: -2.0,
                x_next: 0.0,
                error: 1.0,
            },
            IterationRecord::Muller {
                iteration: 1,
                x1: z,
                x2: z,
                x3: z,
                x_next: z,
                f_next: z,
                error: 0.0,
            },
        ];
        for record in records {
            assert_eq!(record.headers().len(), record.row().len());
        }
    }

    #[test]
    fn test_trace_table() {
        assert!(trace_table(&[]).is_empty());
        let table = trace_table(&fixed_point_trace());
        assert!(table.contains("g(x)"));
        assert!(table.contains("0.540302305868"));
        assert_eq!(table.lines().filter(|l| l.contains("0.8575")).count(), 1);
    }

    #[test]
    fn test_result_counts_iterations_from_trace() {
        let result = RootFindingResult::new(
            0.8575532158463934,
            0.0,
            RootFindingMethod::FixedPoint,
            fixed_point_trace(),
        );
        assert_eq!(result.iterations, 2);
        assert!(result.derivative.is_none());
        assert!(!result.trace_table().is_empty());
    }
}
