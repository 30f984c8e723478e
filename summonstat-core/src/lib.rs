pub mod combin;
pub mod distribution;
pub mod error;
pub mod models;

pub use distribution::{probability_distribution, UniqueDistribution};
pub use error::{Result, SummonError};
