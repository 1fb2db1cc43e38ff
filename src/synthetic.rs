//! Synthetic filler records.
//!
//! The catalog is padded to a minimum entry count with deterministic
//! `NGC <n>` filler objects. Two operations live here:
//!
//! - [`reclassify_legacy`] repairs catalogs written by an older generator
//!   that cycled fillers through several categories,
//! - [`generate_additional_objects`] synthesizes new fillers.
//!
//! Both key off the reserved `NGC ` name prefix. Generation is a pure
//! function of the emitted-record index, so repeated runs (and independent
//! implementations) produce bit-identical fillers.

use crate::error::Result;
use crate::object::{CatalogObject, ObjectType};
use std::collections::HashSet;

/// Reserved name prefix for synthetic records.
pub const SYNTHETIC_PREFIX: &str = "NGC ";
/// First numeral tried when synthesizing names.
pub const SYNTHETIC_BASE_NUMBER: u32 = 3000;
/// Width of the numeral range claimed by the legacy generation scheme.
const LEGACY_RANGE_WIDTH: u32 = 200;

/// Every synthetic filler gets this category. Fillers represent static
/// deep-sky targets; cycling through categories that imply orbital or
/// ephemeris semantics produced confusing catalog entries.
pub const SYNTHETIC_TYPE: ObjectType = ObjectType::Galaxy;

/// Extracts the numeral from a reserved-prefix name, e.g. `"NGC 3042"` → 3042.
///
/// Returns `None` for names without the prefix or with a non-decimal suffix.
pub fn parse_synthetic_number(name: &str) -> Option<u32> {
    let suffix = name.strip_prefix(SYNTHETIC_PREFIX)?;
    if suffix.is_empty() || !suffix.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    suffix.parse().ok()
}

/// Forces legacy synthetic records back to the fixed filler category.
///
/// A record is a legacy candidate when its name is the reserved prefix plus
/// a numeral in `[3000, 3200)` — the range the old generator drew from while
/// cycling types. Each reclassified record is re-validated. Idempotent.
///
/// Returns the number of records whose category changed.
pub fn reclassify_legacy(objects: &mut [CatalogObject]) -> Result<usize> {
    let mut changed = 0;
    for obj in objects.iter_mut() {
        let number = match parse_synthetic_number(&obj.name) {
            Some(n) => n,
            None => continue,
        };
        if number < SYNTHETIC_BASE_NUMBER
            || number >= SYNTHETIC_BASE_NUMBER + LEGACY_RANGE_WIDTH
        {
            continue;
        }
        if obj.object_type != SYNTHETIC_TYPE {
            obj.object_type = SYNTHETIC_TYPE;
            obj.validate()?;
            changed += 1;
        }
    }
    Ok(changed)
}

/// Synthesizes `needed` deterministic filler records.
///
/// Numerals start at [`SYNTHETIC_BASE_NUMBER`] and increase; a numeral whose
/// name collides with an existing name (input or already generated in this
/// call) is skipped without consuming a position index. For emitted-record
/// index `i`:
///
/// - right ascension: `(0.75 + i * 0.213) mod 24`, rounded to 4 dp
/// - declination: `-40 + fmod(i * 2.75, 80)`, rounded to 4 dp
/// - magnitude: `6.2 + (i mod 12) * 0.3`, rounded to 1 dp
///
/// Every record is validated before being appended.
pub fn generate_additional_objects(
    existing: &[CatalogObject],
    needed: usize,
) -> Result<Vec<CatalogObject>> {
    let mut names: HashSet<String> = existing.iter().map(|o| o.name.clone()).collect();
    let mut objects = Vec::with_capacity(needed);
    let mut number = SYNTHETIC_BASE_NUMBER;
    let mut generated: usize = 0;

    while generated < needed {
        let name = format!("{}{}", SYNTHETIC_PREFIX, number);
        number += 1;
        if names.contains(&name) {
            continue;
        }
        let i = generated as f64;
        let ra_hours = round_to((0.75 + i * 0.213) % 24.0, 4);
        let dec_degrees = round_to(-40.0 + (i * 2.75) % 80.0, 4);
        let magnitude = round_to(6.2 + (generated % 12) as f64 * 0.3, 1);
        let obj = CatalogObject::new(
            name.clone(),
            name.clone(),
            SYNTHETIC_TYPE,
            ra_hours,
            dec_degrees,
            magnitude,
        )?;
        names.insert(name);
        objects.push(obj);
        generated += 1;
    }
    Ok(objects)
}

fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}
