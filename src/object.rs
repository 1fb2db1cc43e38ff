//! Catalog object model and validation.
//!
//! [`ObjectType`] is a closed set of eight categories whose *declaration
//! order* is semantically meaningful: it defines both the type index stored
//! in the packed table and the primary sort key of the emitted catalog
//! (observational grouping — solar-system bodies first, then stars, then
//! deep-sky objects). Reordering the variants changes the on-disk format.

use crate::error::{CatalogError, Constraint, Result};

/// Maximum length of a name or catalog code, in characters (not bytes —
/// non-ASCII text is only rejected later, on the packed-table path).
///
/// The firmware stores string lengths in a `uint8_t`, so 254 is the longest
/// value that leaves room for a terminator on the host side.
pub const MAX_FIELD_LEN: usize = 254;

/// The eight object categories, in sort-precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum ObjectType {
    Planet,
    Moon,
    Star,
    Cluster,
    DoubleStar,
    Galaxy,
    Nebula,
    PlanetaryNebula,
}

impl ObjectType {
    /// All categories in declaration (sort) order.
    pub const ALL: [ObjectType; 8] = [
        ObjectType::Planet,
        ObjectType::Moon,
        ObjectType::Star,
        ObjectType::Cluster,
        ObjectType::DoubleStar,
        ObjectType::Galaxy,
        ObjectType::Nebula,
        ObjectType::PlanetaryNebula,
    ];

    /// Zero-based position within the fixed category ordering.
    ///
    /// This value is both the primary sort key and the `typeIndex` byte
    /// written to the packed table.
    pub fn rank(self) -> usize {
        self as usize
    }

    /// The category name as it appears in the XML `type` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            ObjectType::Planet => "Planet",
            ObjectType::Moon => "Moon",
            ObjectType::Star => "Star",
            ObjectType::Cluster => "Cluster",
            ObjectType::DoubleStar => "Double Star",
            ObjectType::Galaxy => "Galaxy",
            ObjectType::Nebula => "Nebula",
            ObjectType::PlanetaryNebula => "Planetary Nebula",
        }
    }

    /// Parses an XML `type` attribute value.
    pub fn parse(value: &str) -> Option<ObjectType> {
        Self::ALL.iter().copied().find(|t| t.as_str() == value)
    }
}

impl std::fmt::Display for ObjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One astronomical catalog entry.
///
/// A plain value object: two identifiers, a category, and position/brightness
/// fields. Construct with [`CatalogObject::new`] (which validates), and call
/// [`validate`](CatalogObject::validate) again after mutating any field —
/// no object is ever allowed to exist partially valid past a pipeline stage.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogObject {
    /// Display name, e.g. `"Andromeda Galaxy"`. Also the synthetic-record
    /// detector: generated fillers are named `"NGC <n>"`.
    pub name: String,
    /// Catalog designation, e.g. `"M 31"`. Defaults to `name` when the
    /// source XML omits it.
    pub code: String,
    pub object_type: ObjectType,
    /// Right ascension in hours, `[0, 24)`.
    pub ra_hours: f64,
    /// Declination in degrees, `[-90, 90]`.
    pub dec_degrees: f64,
    /// Apparent magnitude, `[-30, 30]`.
    pub magnitude: f64,
}

impl CatalogObject {
    /// Builds and validates a catalog object.
    ///
    /// # Errors
    /// Returns [`CatalogError::Validation`] if any field constraint fails.
    pub fn new(
        name: String,
        code: String,
        object_type: ObjectType,
        ra_hours: f64,
        dec_degrees: f64,
        magnitude: f64,
    ) -> Result<Self> {
        let obj = Self {
            name,
            code,
            object_type,
            ra_hours,
            dec_degrees,
            magnitude,
        };
        obj.validate()?;
        Ok(obj)
    }

    /// Checks every field constraint, reporting the first violation.
    ///
    /// # Errors
    /// Returns [`CatalogError::Validation`] carrying the object's name and
    /// the violated [`Constraint`].
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(CatalogError::validation(&self.name, Constraint::NameEmpty));
        }
        let name_chars = self.name.chars().count();
        if name_chars > MAX_FIELD_LEN {
            return Err(CatalogError::validation(
                &self.name,
                Constraint::NameTooLong { length: name_chars },
            ));
        }
        if self.code.trim().is_empty() {
            return Err(CatalogError::validation(&self.name, Constraint::CodeEmpty));
        }
        let code_chars = self.code.chars().count();
        if code_chars > MAX_FIELD_LEN {
            return Err(CatalogError::validation(
                &self.name,
                Constraint::CodeTooLong { length: code_chars },
            ));
        }
        if !(0.0..24.0).contains(&self.ra_hours) {
            return Err(CatalogError::validation(
                &self.name,
                Constraint::RaOutOfRange {
                    value: self.ra_hours,
                },
            ));
        }
        if !(-90.0..=90.0).contains(&self.dec_degrees) {
            return Err(CatalogError::validation(
                &self.name,
                Constraint::DecOutOfRange {
                    value: self.dec_degrees,
                },
            ));
        }
        if !(-30.0..=30.0).contains(&self.magnitude) {
            return Err(CatalogError::validation(
                &self.name,
                Constraint::MagnitudeOutOfRange {
                    value: self.magnitude,
                },
            ));
        }
        Ok(())
    }
}
