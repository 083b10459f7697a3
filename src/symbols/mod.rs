mod demangle;
pub mod resolver;
pub mod dwarf_resolver;

pub use demangle::demangle_symbol;
pub use resolver::{LocationRecord, LocationResolver, NoLocations};
pub use dwarf_resolver::DwarfLocationResolver;
