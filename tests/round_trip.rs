//! End-to-end regeneration tests: on-disk round trips through
//! `pipeline::regenerate`, exercising the same path the `forge` binary runs.

use catalog_forge::pipeline::{regenerate, CATALOG_INC_PATH, CATALOG_XML_PATH, TARGET_COUNT};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const SEED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<catalog>
  <object name="Moon" code="Moon" type="Moon" ra_hours="0.0000" dec_degrees="0.0000" magnitude="-12.7"/>
  <object name="Jupiter" code="Jupiter" type="Planet" ra_hours="0.0000" dec_degrees="0.0000" magnitude="-2.5"/>
  <object name="Vega" code="Alpha Lyrae" type="Star" ra_hours="18.6156" dec_degrees="38.7837" magnitude="0.0"/>
  <object name="Albireo" code="Beta Cygni" type="Double Star" ra_hours="19.5120" dec_degrees="27.9597" magnitude="3.1"/>
  <object name="Pleiades" code="M 45" type="Cluster" ra_hours="3.7833" dec_degrees="24.1167" magnitude="1.6"/>
  <object name="Andromeda Galaxy" code="M 31" type="Galaxy" ra_hours="0.7123" dec_degrees="41.2692" magnitude="3.4"/>
  <object name="Orion Nebula" code="M 42" type="Nebula" ra_hours="5.5880" dec_degrees="-5.3911" magnitude="4.0"/>
  <object name="Ring Nebula" code="M 57" type="Planetary Nebula" ra_hours="18.8931" dec_degrees="33.0292" magnitude="8.8"/>
  <object name="NGC 3000" code="NGC 3000" type="Star" ra_hours="9.8100" dec_degrees="-2.0000" magnitude="11.5"/>
</catalog>
"#;

fn seed_repo(seed: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("data")).unwrap();
    fs::write(dir.path().join(CATALOG_XML_PATH), seed).unwrap();
    dir
}

fn read(root: &Path, rel: &str) -> String {
    fs::read_to_string(root.join(rel)).unwrap()
}

#[test]
fn regenerate_writes_both_artifacts() {
    let dir = seed_repo(SEED);
    let output = regenerate(dir.path()).unwrap();

    assert_eq!(output.loaded, 9);
    assert_eq!(output.objects.len(), TARGET_COUNT);
    assert!(dir.path().join(CATALOG_XML_PATH).exists());
    assert!(dir.path().join(CATALOG_INC_PATH).exists());

    let inc = read(dir.path(), CATALOG_INC_PATH);
    assert!(inc.starts_with("// Generated from data/catalog.xml\n"));
    assert!(inc.contains("storage::CatalogEntry kCatalogEntries[]"));
    assert!(inc.contains("kCatalogStringTableSize"));
    assert!(inc.contains("kCatalogEntryCount"));
}

#[test]
fn second_run_is_byte_identical() {
    let dir = seed_repo(SEED);

    regenerate(dir.path()).unwrap();
    let xml_first = read(dir.path(), CATALOG_XML_PATH);
    let inc_first = read(dir.path(), CATALOG_INC_PATH);

    let second = regenerate(dir.path()).unwrap();
    assert_eq!(second.loaded, TARGET_COUNT);
    assert_eq!(second.synthesized, 0);
    assert_eq!(read(dir.path(), CATALOG_XML_PATH), xml_first);
    assert_eq!(read(dir.path(), CATALOG_INC_PATH), inc_first);
}

#[test]
fn legacy_ngc_record_is_reclassified_and_its_numeral_skipped() {
    let dir = seed_repo(SEED);
    let output = regenerate(dir.path()).unwrap();

    assert_eq!(output.reclassified, 1); // NGC 3000 arrived typed as Star
    let xml = read(dir.path(), CATALOG_XML_PATH);
    assert!(xml.contains(r#"name="NGC 3000" code="NGC 3000" type="Galaxy""#));
    // The augmenter skipped numeral 3000; its first filler is NGC 3001
    // with the position-0 field values.
    assert!(xml.contains(
        r#"<object name="NGC 3001" code="NGC 3001" type="Galaxy" ra_hours="0.7500" dec_degrees="-40.0000" magnitude="6.2"/>"#
    ));
}

#[test]
fn emitted_xml_is_sorted_by_category_then_name() {
    let dir = seed_repo(SEED);
    regenerate(dir.path()).unwrap();

    let xml = read(dir.path(), CATALOG_XML_PATH);
    let order = [
        r#"name="Jupiter""#,
        r#"name="Moon""#,
        r#"name="Vega""#,
        r#"name="Pleiades""#,
        r#"name="Albireo""#,
        r#"name="Andromeda Galaxy""#,
        r#"name="Orion Nebula""#,
        r#"name="Ring Nebula""#,
    ];
    let positions: Vec<usize> = order.iter().map(|n| xml.find(n).unwrap()).collect();
    for pair in positions.windows(2) {
        assert!(pair[0] < pair[1], "categories out of order in output XML");
    }
}

#[test]
fn packed_table_rows_match_string_buffer() {
    let dir = seed_repo(SEED);
    let output = regenerate(dir.path()).unwrap();

    let packed = catalog_forge::emit::table::pack(&output.objects).unwrap();
    assert_eq!(packed.entries.len(), TARGET_COUNT);
    assert_eq!(packed.strings.len(), output.string_table_bytes);
    for (entry, obj) in packed.entries.iter().zip(&output.objects) {
        let name = &packed.strings[entry.name_offset..entry.name_offset + entry.name_length];
        assert_eq!(name, obj.name.as_bytes());
        let code = &packed.strings[entry.code_offset..entry.code_offset + entry.code_length];
        assert_eq!(code, obj.code.as_bytes());
    }
}

#[test]
fn failed_run_leaves_existing_outputs_untouched() {
    let dir = seed_repo(SEED);
    regenerate(dir.path()).unwrap();
    let xml_before = read(dir.path(), CATALOG_XML_PATH);
    let inc_before = read(dir.path(), CATALOG_INC_PATH);

    // Corrupt the input: out-of-range declination.
    let broken = xml_before.replace(
        r#"dec_degrees="38.7837""#,
        r#"dec_degrees="90.0001""#,
    );
    fs::write(dir.path().join(CATALOG_XML_PATH), &broken).unwrap();

    assert!(regenerate(dir.path()).is_err());
    assert_eq!(read(dir.path(), CATALOG_XML_PATH), broken);
    assert_eq!(read(dir.path(), CATALOG_INC_PATH), inc_before);
}

#[test]
fn catalog_at_target_count_gains_no_fillers() {
    let dir = seed_repo(SEED);
    let first = regenerate(dir.path()).unwrap();
    assert_eq!(first.synthesized, TARGET_COUNT - 9);

    let second = regenerate(dir.path()).unwrap();
    assert_eq!(second.loaded, TARGET_COUNT);
    assert_eq!(second.synthesized, 0);
    assert_eq!(second.objects.len(), TARGET_COUNT);
}

#[test]
fn missing_input_file_is_an_io_error() {
    let dir = TempDir::new().unwrap();
    match regenerate(dir.path()) {
        Err(catalog_forge::CatalogError::Io(_)) => {}
        other => panic!("expected I/O error, got {:?}", other.map(|o| o.loaded)),
    }
}
