//! Forge: regenerate the firmware catalog artifacts.
//!
//! Takes no arguments. Reads `data/catalog.xml` relative to the repository
//! root, rewrites it normalized/sorted/padded, and regenerates
//! `catalog_data.inc` for the storage layer. Exits nonzero on the first
//! validation or parse failure, with neither output touched.

use anyhow::Context;
use catalog_forge::pipeline::{self, CATALOG_INC_PATH, CATALOG_XML_PATH};
use std::path::Path;

fn main() -> anyhow::Result<()> {
    let repo_root = Path::new(env!("CARGO_MANIFEST_DIR"));

    let output = pipeline::regenerate(repo_root)
        .with_context(|| format!("Failed to regenerate catalog under {:?}", repo_root))?;

    println!("Loaded {} objects from {}", output.loaded, CATALOG_XML_PATH);
    if output.reclassified > 0 {
        println!("Reclassified {} legacy synthetic objects", output.reclassified);
    }
    if output.synthesized > 0 {
        println!("Synthesized {} filler objects", output.synthesized);
    }
    println!(
        "Wrote {} entries ({} string-table bytes) to {}",
        output.objects.len(),
        output.string_table_bytes,
        CATALOG_INC_PATH
    );
    Ok(())
}
