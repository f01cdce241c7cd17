pub mod advisor;
pub mod report;

pub use advisor::Advisor;
