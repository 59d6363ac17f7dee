//! Aid program entities.

pub mod model;

pub use model::{DEFAULT_PROGRAMS, Program};
