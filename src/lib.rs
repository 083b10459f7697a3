pub mod config;
pub mod dwarf;
pub mod error;
pub mod symbols;
pub mod test;

pub use error::{Error, Result};
