//! different utility modules used throughout the project
/// logger initialisation and saving of iteration traces into csv
pub mod logger;
