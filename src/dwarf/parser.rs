use gimli::{self, RunTimeEndian, EndianSlice, SectionId};
use object::{Object, ObjectSection};
use memmap2::Mmap;
use std::borrow::Cow;
use std::collections::HashMap;
use std::fs::File;
use std::path::Path;
use crate::{Error, Result};
use crate::symbols::demangle_symbol;
use super::function::{last_segment, normalize_name};
use super::FunctionInfo;

pub struct DwarfParser {
    pub functions: Vec<FunctionInfo>,
    /// Last path segment (method name) → indices into `functions`.
    functions_by_method: HashMap<String, Vec<usize>>,
}

impl DwarfParser {
    pub fn parse(binary_path: &Path) -> Result<Self> {
        // First try the binary itself
        let direct = Self::parse_file(binary_path);
        if direct.is_ok() {
            return direct;
        }

        // On macOS, check for .dSYM bundle
        let dsym_path = binary_path.with_extension("dSYM");
        if dsym_path.exists() {
            // The actual DWARF is in Contents/Resources/DWARF/<binary_name>
            if let Some(binary_name) = binary_path.file_name() {
                let dwarf_file = dsym_path
                    .join("Contents")
                    .join("Resources")
                    .join("DWARF")
                    .join(binary_name);
                if dwarf_file.exists() {
                    return Self::parse_file(&dwarf_file);
                }
            }
        }

        direct
    }

    /// Build a parser from already-extracted functions.
    pub fn from_functions(functions: Vec<FunctionInfo>) -> Self {
        let mut functions_by_method: HashMap<String, Vec<usize>> = HashMap::new();
        for (idx, func) in functions.iter().enumerate() {
            functions_by_method
                .entry(func.method_name().to_string())
                .or_default()
                .push(idx);
        }

        Self {
            functions,
            functions_by_method,
        }
    }

    fn parse_file(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let mmap = unsafe { Mmap::map(&file)? };
        let object = object::File::parse(&*mmap)
            .map_err(|e| Error::BinaryParse(e.to_string()))?;

        // Check if debug info exists
        if object.section_by_name(".debug_info").is_none()
            && object.section_by_name("__debug_info").is_none() {
            return Err(Error::NoDebugSymbols);
        }

        let endian = if object.is_little_endian() {
            RunTimeEndian::Little
        } else {
            RunTimeEndian::Big
        };

        let load_section = |id: SectionId| -> std::result::Result<Cow<[u8]>, gimli::Error> {
            let name = id.name();
            // Try both ELF and Mach-O section names
            let data = object
                .section_by_name(name)
                .or_else(|| {
                    let macho_name = name.replace(".debug_", "__debug_");
                    object.section_by_name(&macho_name)
                })
                .and_then(|section| section.data().ok())
                .unwrap_or(&[]);
            Ok(Cow::Borrowed(data))
        };

        let dwarf_cow = gimli::Dwarf::load(&load_section)
            .map_err(|e| Error::Dwarf(format!("Failed to load DWARF: {}", e)))?;

        let dwarf = dwarf_cow.borrow(|section| {
            EndianSlice::new(section.as_ref(), endian)
        });

        let mut functions = Vec::new();

        let mut units = dwarf.units();
        while let Ok(Some(header)) = units.next() {
            let unit = match dwarf.unit(header) {
                Ok(unit) => unit,
                Err(e) => {
                    // One bad unit should not hide the rest of the binary
                    tracing::debug!("Skipping unreadable DWARF unit in {}: {}", path.display(), e);
                    continue;
                }
            };

            let mut entries = unit.entries();
            while let Ok(Some((_, entry))) = entries.next_dfs() {
                if entry.tag() != gimli::DW_TAG_subprogram {
                    continue;
                }
                Self::keep_parsed(&mut functions, Self::parse_function(&dwarf, &unit, entry), path);
            }
        }

        tracing::debug!("Parsed {} functions from {}", functions.len(), path.display());
        Ok(Self::from_functions(functions))
    }

    /// A malformed subprogram is dropped on its own; the rest of the unit
    /// is still collected.
    fn keep_parsed(functions: &mut Vec<FunctionInfo>, parsed: Result<Option<FunctionInfo>>, path: &Path) {
        match parsed {
            Ok(Some(func)) => functions.push(func),
            Ok(None) => {}
            Err(e) => {
                tracing::debug!("Skipping malformed subprogram in {}: {}", path.display(), e);
            }
        }
    }

    fn parse_function<R: gimli::Reader>(
        dwarf: &gimli::Dwarf<R>,
        unit: &gimli::Unit<R>,
        entry: &gimli::DebuggingInformationEntry<R>,
    ) -> Result<Option<FunctionInfo>> {
        // Only functions with code; declarations and inline-only bodies have no low_pc.
        if entry.attr_value(gimli::DW_AT_low_pc)
            .map_err(|e| Error::Dwarf(e.to_string()))?
            .is_none()
        {
            return Ok(None);
        }

        // Prefer DW_AT_linkage_name (fully qualified mangled name) over DW_AT_name.
        let linkage_name = entry.attr_value(gimli::DW_AT_linkage_name)
            .ok()
            .flatten()
            .and_then(|v| {
                let s = dwarf.attr_string(unit, v).ok()?;
                let cow = s.to_string_lossy().ok()?;
                Some(cow.to_string())
            });

        let short_name = match entry.attr_value(gimli::DW_AT_name)
            .map_err(|e| Error::Dwarf(e.to_string()))?
        {
            Some(attr_val) => dwarf.attr_string(unit, attr_val)
                .ok()
                .and_then(|s| s.to_string_lossy().ok().map(|c| c.to_string())),
            None => None,
        };

        let name = match linkage_name.or(short_name) {
            Some(n) => n,
            None => return Ok(None),
        };

        let source_file = match entry.attr_value(gimli::DW_AT_decl_file)
            .map_err(|e| Error::Dwarf(e.to_string()))?
        {
            Some(gimli::AttributeValue::FileIndex(index)) => {
                Self::file_path(dwarf, unit, index)
            }
            _ => None,
        };

        let line_number = match entry.attr_value(gimli::DW_AT_decl_line)
            .map_err(|e| Error::Dwarf(e.to_string()))?
        {
            Some(gimli::AttributeValue::Udata(n)) => u32::try_from(n).ok(),
            _ => None,
        };

        let demangled = demangle_symbol(&name);
        let name_raw = if name != demangled { Some(name) } else { None };

        Ok(Some(FunctionInfo {
            name: normalize_name(&demangled),
            name_raw,
            source_file,
            line_number,
        }))
    }

    fn file_path<R: gimli::Reader>(
        dwarf: &gimli::Dwarf<R>,
        unit: &gimli::Unit<R>,
        index: u64,
    ) -> Option<String> {
        let line_program = unit.line_program.as_ref()?;
        let header = line_program.header();
        let file = header.file(index)?;

        let file_name = dwarf.attr_string(unit, file.path_name()).ok()?
            .to_string_lossy().ok()?
            .to_string();
        if file_name.starts_with('/') {
            return Some(file_name);
        }

        let mut path = String::new();
        if let Some(dir) = file.directory(header) {
            if let Ok(s) = dwarf.attr_string(unit, dir) {
                path.push_str(&s.to_string_lossy().unwrap_or_default());
                if !path.is_empty() && !path.ends_with('/') {
                    path.push('/');
                }
            }
        }
        path.push_str(&file_name);
        if path.is_empty() { None } else { Some(path) }
    }

    /// Functions named `class::method`, matched exactly or on a `::` suffix.
    /// `.` separators in the class name are accepted (`App.Tests.Calc`).
    pub fn find_method(&self, class_name: &str, method_name: &str) -> Vec<&FunctionInfo> {
        let class_path = class_name.replace('.', "::");
        let qualified = if class_path.is_empty() {
            method_name.to_string()
        } else {
            format!("{}::{}", class_path, method_name)
        };

        self.functions_by_method
            .get(last_segment(&qualified))
            .map(|indices| {
                indices.iter()
                    .map(|&i| &self.functions[i])
                    .filter(|f| f.matches_qualified(&qualified))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Source file and minimum declaration line for `class::method`.
    /// Candidates spread across more than one file are ambiguous → `None`.
    pub fn locate(&self, class_name: &str, method_name: &str) -> Option<(String, u32)> {
        let candidates = self.find_method(class_name, method_name);
        let mut located = candidates.iter().filter_map(|f| {
            Some((f.source_file.as_deref()?, f.line_number?))
        });

        let (file, mut line) = located.next()?;
        for (other_file, other_line) in located {
            if other_file != file {
                tracing::debug!(
                    "Ambiguous location for {}::{}: {} vs {}",
                    class_name, method_name, file, other_file
                );
                return None;
            }
            line = line.min(other_line);
        }
        Some((file.to_string(), line))
    }
}
