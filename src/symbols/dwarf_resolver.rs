use std::path::Path;
use super::resolver::*;
use crate::dwarf::DwarfParser;

/// Resolves test methods against the DWARF info of the test binary.
///
/// Opening never fails: a binary that cannot be read or carries no debug
/// info yields a resolver that answers `None` for everything.
pub struct DwarfLocationResolver {
    dwarf: Option<DwarfParser>,
}

impl DwarfLocationResolver {
    pub fn open(binary_path: &Path) -> Self {
        match DwarfParser::parse(binary_path) {
            Ok(parser) => {
                tracing::debug!(
                    "Loaded {} functions for source lookup from {}",
                    parser.functions.len(),
                    binary_path.display()
                );
                Self { dwarf: Some(parser) }
            }
            Err(e) => {
                tracing::warn!(
                    "Source locations unavailable for {}: {}",
                    binary_path.display(),
                    e
                );
                Self { dwarf: None }
            }
        }
    }

    pub fn from_parser(parser: DwarfParser) -> Self {
        Self { dwarf: Some(parser) }
    }

    pub fn has_debug_info(&self) -> bool {
        self.dwarf.is_some()
    }
}

impl LocationResolver for DwarfLocationResolver {
    fn resolve(&self, class_name: &str, method_name: &str) -> Option<LocationRecord> {
        let (file_path, min_line_number) = self.dwarf.as_ref()?.locate(class_name, method_name)?;
        Some(LocationRecord { file_path, min_line_number })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dwarf::FunctionInfo;

    #[test]
    fn test_open_missing_binary_degrades() {
        let resolver = DwarfLocationResolver::open(Path::new("/nonexistent/test_binary"));
        assert!(!resolver.has_debug_info());
        assert_eq!(resolver.resolve("Suite", "case"), None);
    }

    #[test]
    fn test_resolve_from_parser() {
        let parser = DwarfParser::from_functions(vec![FunctionInfo {
            name: "shop::tests::Cart::totals".to_string(),
            name_raw: None,
            source_file: Some("/work/shop/src/cart.rs".to_string()),
            line_number: Some(88),
        }]);
        let resolver = DwarfLocationResolver::from_parser(parser);

        assert_eq!(
            resolver.resolve("shop::tests::Cart", "totals"),
            Some(LocationRecord {
                file_path: "/work/shop/src/cart.rs".to_string(),
                min_line_number: 88,
            })
        );
        assert_eq!(resolver.resolve("shop::tests::Cart", "missing"), None);
    }
}
