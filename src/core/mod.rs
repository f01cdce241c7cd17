pub mod career;
pub mod catalog;
pub mod conversation;
pub mod engine;
pub mod filter;
pub mod results;
pub mod scoring;
pub mod session;

pub use crate::domain::model::{Recommendation, University, UserProfile};
pub use crate::domain::ports::{Catalog, ConfigProvider, Storage};
pub use crate::utils::error::Result;
