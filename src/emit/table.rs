//! Packed compile-time table emitter.
//!
//! Renders the sorted record set as a C++ source fragment
//! (`catalog_data.inc`) compiled directly into the firmware. The fragment
//! declares:
//!
//! - `kCatalogEntries[]` — one fixed-width row per record: string table
//!   offset/length pairs for name and code, the category index, and
//!   fixed-point position/brightness fields (`ra×1000`, `dec×100`, `mag×10`,
//!   each rounded to the nearest integer),
//! - `kCatalogStrings[]` — every name and code concatenated as raw ASCII
//!   bytes, no separators or terminators,
//! - `kCatalogStringTableSize` / `kCatalogEntryCount` — derived sizes so the
//!   storage layer never recomputes them.
//!
//! The string table is rendered as character literals, 12 per line. The
//! wrapping is purely cosmetic; the byte sequence is what matters.

use crate::error::{CatalogError, Result};
use crate::object::CatalogObject;

/// Character literals emitted per string-table line.
const LITERALS_PER_LINE: usize = 12;

/// One row of the packed table, mirroring `storage::CatalogEntry`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackedEntry {
    pub name_offset: usize,
    pub name_length: usize,
    pub code_offset: usize,
    pub code_length: usize,
    pub type_index: usize,
    pub ra_times1000: i32,
    pub dec_times100: i32,
    pub magnitude_times10: i32,
}

/// The packed table: fixed-width rows plus the shared string buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedCatalog {
    pub entries: Vec<PackedEntry>,
    pub strings: Vec<u8>,
}

/// Packs the record set into entry rows and a shared ASCII string buffer.
///
/// Names and codes are appended in record order, name before code. Record
/// order must already be the final sorted order — the packed table has no
/// ordering of its own.
///
/// # Errors
/// Returns [`CatalogError::Encoding`] if any name or code contains
/// non-ASCII characters.
pub fn pack(objects: &[CatalogObject]) -> Result<PackedCatalog> {
    let mut strings = Vec::new();
    let mut entries = Vec::with_capacity(objects.len());

    for obj in objects {
        let (name_offset, name_length) = append_ascii(&mut strings, &obj.name, "name", obj)?;
        let (code_offset, code_length) = append_ascii(&mut strings, &obj.code, "code", obj)?;
        entries.push(PackedEntry {
            name_offset,
            name_length,
            code_offset,
            code_length,
            type_index: obj.object_type.rank(),
            // Ties round to even: a 4-dp coordinate times 1000 lands on an
            // exact .5 for real entries (e.g. RA 6.7525), and the firmware
            // tables were generated with that convention.
            ra_times1000: (obj.ra_hours * 1000.0).round_ties_even() as i32,
            dec_times100: (obj.dec_degrees * 100.0).round_ties_even() as i32,
            magnitude_times10: (obj.magnitude * 10.0).round_ties_even() as i32,
        });
    }

    Ok(PackedCatalog { entries, strings })
}

fn append_ascii(
    strings: &mut Vec<u8>,
    value: &str,
    field: &'static str,
    obj: &CatalogObject,
) -> Result<(usize, usize)> {
    if !value.is_ascii() {
        return Err(CatalogError::Encoding {
            name: obj.name.clone(),
            field,
            value: value.to_string(),
        });
    }
    let offset = strings.len();
    strings.extend_from_slice(value.as_bytes());
    Ok((offset, value.len()))
}

/// Renders a packed catalog as the C++ include fragment.
pub fn render_packed(packed: &PackedCatalog) -> String {
    let mut lines = vec![
        "// Generated from data/catalog.xml".to_string(),
        "static constexpr storage::CatalogEntry kCatalogEntries[] = {".to_string(),
    ];
    for e in &packed.entries {
        lines.push(format!(
            "    {{{}, {}, {}, {}, {}, {}, {}, {}}},",
            e.name_offset,
            e.name_length,
            e.code_offset,
            e.code_length,
            e.type_index,
            e.ra_times1000,
            e.dec_times100,
            e.magnitude_times10
        ));
    }
    lines.push("};".to_string());
    lines.push("static constexpr char kCatalogStrings[] = {".to_string());

    let mut line = String::from("    ");
    for (index, &byte) in packed.strings.iter().enumerate() {
        line.push_str(&char_literal(byte));
        line.push_str(", ");
        if index % LITERALS_PER_LINE == LITERALS_PER_LINE - 1 {
            lines.push(line.trim_end().to_string());
            line = String::from("    ");
        }
    }
    if !line.trim().is_empty() {
        lines.push(line.trim_end().to_string());
    }
    lines.push("};".to_string());
    lines.push(
        "static constexpr size_t kCatalogStringTableSize = sizeof(kCatalogStrings);".to_string(),
    );
    lines.push(
        "static constexpr size_t kCatalogEntryCount = sizeof(kCatalogEntries) / sizeof(kCatalogEntries[0]);"
            .to_string(),
    );
    lines.push(String::new());
    lines.join("\n")
}

/// Packs and renders in one step.
///
/// # Errors
/// Same as [`pack`].
pub fn render(objects: &[CatalogObject]) -> Result<String> {
    Ok(render_packed(&pack(objects)?))
}

/// Renders one byte as a C character literal.
///
/// Backslash and single quote get their escape forms; other printable ASCII
/// is emitted verbatim; everything else uses `'\xNN'`.
fn char_literal(byte: u8) -> String {
    match byte {
        b'\\' => "'\\\\'".to_string(),
        b'\'' => "'\\''".to_string(),
        0x20..=0x7e => format!("'{}'", byte as char),
        _ => format!("'\\x{:02x}'", byte),
    }
}
