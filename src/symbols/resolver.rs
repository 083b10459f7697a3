use serde::{Deserialize, Serialize};

/// Where a test method is declared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationRecord {
    pub file_path: String,
    pub min_line_number: u32,
}

/// Maps a class + method pair to its source location.
///
/// `None` is the normal answer for anything the resolver cannot place:
/// unknown method, missing or ambiguous metadata, unreadable binary.
/// Implementations release their underlying resources on drop.
pub trait LocationResolver {
    fn resolve(&self, class_name: &str, method_name: &str) -> Option<LocationRecord>;
}

/// Resolver for binaries without usable debug metadata.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoLocations;

impl LocationResolver for NoLocations {
    fn resolve(&self, _class_name: &str, _method_name: &str) -> Option<LocationRecord> {
        None
    }
}
