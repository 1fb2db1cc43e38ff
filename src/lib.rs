//! Build pipeline for the telescope firmware's object catalog.
//!
//! Converts the hand-editable `data/catalog.xml` into two artifacts: a
//! normalized rewrite of the same file, and `catalog_data.inc`, a packed
//! compile-time table (fixed-width entry rows plus a shared ASCII string
//! buffer) included directly by the firmware's storage layer. Catalogs
//! smaller than 300 entries are padded with deterministic `NGC <n>` filler
//! objects.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`object`] | [`CatalogObject`](object::CatalogObject), [`ObjectType`](object::ObjectType) (fixed category order), validation |
//! | [`loader`] | XML document → validated records |
//! | [`synthetic`] | legacy filler repair, deterministic filler generation |
//! | [`sort`] | stable (category rank, case-folded name) ordering |
//! | [`emit`] | markup and packed-table serializers |
//! | [`pipeline`] | stage composition; the only module that touches the filesystem |
//! | [`error`] | [`CatalogError`](error::CatalogError) taxonomy |
//!
//! # Quick Start
//!
//! ```
//! use catalog_forge::pipeline::run_pipeline;
//!
//! let input = r#"<catalog>
//!   <object name="Vega" type="Star" ra_hours="18.6156"
//!           dec_degrees="38.7837" magnitude="0.0"/>
//! </catalog>"#;
//!
//! let output = run_pipeline(input)?;
//! assert_eq!(output.objects.len(), 300);
//! # Ok::<(), catalog_forge::error::CatalogError>(())
//! ```
//!
//! The whole pipeline is a single-threaded, single-pass batch job. Every
//! run is a full rebuild; any validation failure aborts before either
//! output file is touched.

pub mod emit;
pub mod error;
pub mod loader;
pub mod object;
pub mod pipeline;
pub mod sort;
pub mod synthetic;

pub use error::{CatalogError, Constraint};
pub use object::{CatalogObject, ObjectType};
