pub mod boost;
pub mod business;
pub mod client;
pub mod gateway;
pub mod member;
pub mod product;
pub mod session;

pub use crate::domain::model::*;
pub use crate::domain::ports::{Connectivity, KeyValueStore, TokenSource};
pub use crate::utils::error::Result;
