#![doc = include_str!("../README.md")]

mod chunk;
mod chunk_type;
mod config;
pub mod display;
mod error;
pub mod math;
mod png;
mod policy;
mod selection;

pub use chunk::*;
pub use chunk_type::*;
pub use config::*;
pub use error::*;
pub use png::*;
pub use policy::*;
pub use selection::*;
