pub mod error;
pub mod generate;
pub mod model;
pub mod rng;
pub mod time;

pub use error::Error;
