//! Top-K prefix queries over an autorank index

mod config;
mod engine;

pub use autorank_index::{Index, MalformedPolicy, Record};
pub use config::Config;
pub use engine::QueryEngine;
