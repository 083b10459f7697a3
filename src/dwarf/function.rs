use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionInfo {
    /// Demangled, normalized qualified name: `ns::Type::method`.
    pub name: String,
    pub name_raw: Option<String>,
    pub source_file: Option<String>,
    pub line_number: Option<u32>,
}

impl FunctionInfo {
    /// Last `::` segment of the qualified name.
    pub fn method_name(&self) -> &str {
        last_segment(&self.name)
    }

    /// True if the qualified name is `qualified` or ends with `::qualified`.
    pub fn matches_qualified(&self, qualified: &str) -> bool {
        self.name == qualified
            || self.name
                .strip_suffix(qualified)
                .is_some_and(|prefix| prefix.ends_with("::"))
    }
}

pub(crate) fn last_segment(name: &str) -> &str {
    name.rsplit("::").next().unwrap_or(name)
}

/// Reduce a demangled symbol to a plain `a::b::c` path.
///
/// C++ parameter lists and qualifiers are cut at the first `(`. Rust impl
/// wrappers `<a::Type>::m` and `<a::Type as Trait>::m` become `a::Type::m`.
pub fn normalize_name(demangled: &str) -> String {
    let name = match demangled.find('(') {
        Some(idx) if idx > 0 => &demangled[..idx],
        _ => demangled,
    };

    if let Some(inner) = name.strip_prefix('<') {
        if let Some(close) = inner.find(">::") {
            let self_ty = &inner[..close];
            let self_ty = self_ty.split(" as ").next().unwrap_or(self_ty);
            return format!("{}::{}", self_ty.trim(), &inner[close + 3..]);
        }
    }

    name.trim().to_string()
}
