#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
/// a module turns a String expression into a symbolic expression
///
///# Example
/// ```
/// use RustedRoots::symbolic::symbolic_engine::Expr;
/// let input = "x^3 - x - 1";
/// let parsed_expression = Expr::parse_expression(input).unwrap();
/// println!(" parsed_expression {}", parsed_expression);
/// let parsed_function = parsed_expression.lambdify1D("x");
/// println!("{}, Rust function: {}  \n", input, parsed_function(2.0));
///  ```
/// ________________________________________________________________________________________________________________________________
pub mod parse_expr;
///____________________________________________________________________________________________________________________________
/// # Symbolic engine
/// 1) turns a String expression into a symbolic expression
/// 2) differentiates it analytically
/// 3) evaluates it in real or complex arithmetic
///# Example#
/// ```
/// use RustedRoots::symbolic::symbolic_engine::Expr;
/// use num_complex::Complex64;
/// let f = Expr::parse_expression("x^2 + 1").unwrap();
/// let df_dx = f.diff_simplified("x");
/// println!("df_dx = {}", df_dx);
/// assert_eq!(df_dx.eval_real("x", 3.0), 6.0);
/// let at_i = f.eval_complex("x", Complex64::new(0.0, 1.0));
/// assert!(at_i.norm() < 1e-15);
/// ```
pub mod symbolic_engine;
pub mod symbolic_engine_derivatives;
pub mod symbolic_lambdify;
///______________________________________________________________________________________________________________________________________________
/// the collection of utility functions mainly for bracket parsing and proceeding
/// _____________________________________________________________________________________________________________________________________________
pub mod utils;
mod symbolic_engine_tests;
