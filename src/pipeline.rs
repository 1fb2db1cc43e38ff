//! Pipeline orchestration.
//!
//! [`run_pipeline`] is the pure composition of the four stages (load,
//! reclassify, pad, sort) and the two emitters — string in, strings out,
//! no filesystem. [`regenerate`] is the single I/O boundary: it reads
//! `data/catalog.xml` under a repository root, runs the pure pipeline, and
//! writes both outputs only after every record has validated and both
//! outputs are fully rendered. A failed run never leaves a half-written
//! file behind.

use crate::emit;
use crate::error::Result;
use crate::loader;
use crate::object::CatalogObject;
use crate::sort;
use crate::synthetic;
use std::fs;
use std::path::Path;

/// Minimum number of entries in the emitted catalog.
pub const TARGET_COUNT: usize = 300;

/// Input/output markup file, relative to the repository root.
pub const CATALOG_XML_PATH: &str = "data/catalog.xml";
/// Generated include fragment, relative to the repository root.
pub const CATALOG_INC_PATH: &str = "catalog_data.inc";

/// Everything a pipeline run produces, still in memory.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineOutput {
    /// Normalized, sorted, padded catalog markup (the next run's input).
    pub catalog_xml: String,
    /// C++ include fragment with the packed table.
    pub table_source: String,
    /// The final sorted record set.
    pub objects: Vec<CatalogObject>,
    /// Records loaded from the input document.
    pub loaded: usize,
    /// Legacy synthetic records whose category was repaired.
    pub reclassified: usize,
    /// Filler records synthesized this run.
    pub synthesized: usize,
    /// Total bytes in the packed string table.
    pub string_table_bytes: usize,
}

/// Runs the full pipeline on catalog markup, producing both outputs.
///
/// # Errors
/// Any load, validation, or encoding failure aborts the run; see
/// [`CatalogError`](crate::error::CatalogError).
pub fn run_pipeline(input_xml: &str) -> Result<PipelineOutput> {
    let mut objects = loader::parse_catalog(input_xml)?;
    let loaded = objects.len();

    let reclassified = synthetic::reclassify_legacy(&mut objects)?;

    let synthesized = if objects.len() < TARGET_COUNT {
        let fillers =
            synthetic::generate_additional_objects(&objects, TARGET_COUNT - objects.len())?;
        let count = fillers.len();
        objects.extend(fillers);
        count
    } else {
        0
    };

    sort::sort_catalog(&mut objects);

    let catalog_xml = emit::xml::render(&objects)?;
    let packed = emit::table::pack(&objects)?;
    let string_table_bytes = packed.strings.len();
    let table_source = emit::table::render_packed(&packed);

    Ok(PipelineOutput {
        catalog_xml,
        table_source,
        objects,
        loaded,
        reclassified,
        synthesized,
        string_table_bytes,
    })
}

/// Regenerates both catalog artifacts under `repo_root`.
///
/// Reads [`CATALOG_XML_PATH`], runs [`run_pipeline`], then rewrites the
/// markup file in place and writes [`CATALOG_INC_PATH`]. Both outputs are
/// fully materialized before the first write.
///
/// # Errors
/// Propagates pipeline errors plus [`CatalogError::Io`](crate::error::CatalogError::Io)
/// for read/write failures.
pub fn regenerate(repo_root: &Path) -> Result<PipelineOutput> {
    let xml_path = repo_root.join(CATALOG_XML_PATH);
    let inc_path = repo_root.join(CATALOG_INC_PATH);

    let input = fs::read_to_string(&xml_path)?;
    let output = run_pipeline(&input)?;

    fs::write(&xml_path, &output.catalog_xml)?;
    fs::write(&inc_path, &output.table_source)?;
    Ok(output)
}
