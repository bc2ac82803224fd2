//! examples of usage of RustedRoots
/// root finding examples: scalar solvers, Muller, polynomial deflation, settings
pub mod root_finding_examples;
