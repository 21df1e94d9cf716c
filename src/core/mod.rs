// Core logic exports
pub mod domains;
pub mod generator;

pub use domains::check_domain;
pub use generator::{GeneratorError, NameGenerator, NameRule};
