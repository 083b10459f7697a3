use rustc_demangle::try_demangle as rust_demangle;
use cpp_demangle::Symbol as CppSymbol;

/// Demangle a symbol name from any supported format (Rust, C++, or plain C).
/// Returns the demangled name, or the original if demangling fails.
/// Rust hash suffixes (`::h1234…`) are dropped so names stay stable across builds.
pub fn demangle_symbol(mangled: &str) -> String {
    if let Ok(symbol) = rust_demangle(mangled) {
        return format!("{:#}", symbol);
    }

    // Try C++ (Itanium ABI) demangling
    if let Ok(symbol) = CppSymbol::new(mangled) {
        if let Ok(demangled) = symbol.demangle(&cpp_demangle::DemangleOptions::default()) {
            return demangled;
        }
    }

    // Plain C or unknown
    mangled.to_string()
}
