mod parser;
mod function;

pub use parser::DwarfParser;
pub use function::{normalize_name, FunctionInfo};
