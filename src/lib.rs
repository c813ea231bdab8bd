pub mod enrollment;
pub mod error;
pub mod generator;
pub mod model;
pub mod names;
pub mod xlsx;

pub use error::{EnrollmentError, Result};
pub use model::*;
