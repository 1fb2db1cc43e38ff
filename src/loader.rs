//! XML catalog loader.
//!
//! Parses the hand-editable `data/catalog.xml` document into validated
//! [`CatalogObject`] records. The loader is strict: the root element must be
//! `<catalog>`, every `<object>` needs its required attributes, and the
//! first invalid record aborts the whole load.

use crate::error::{CatalogError, Constraint, Result};
use crate::object::{CatalogObject, ObjectType};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

/// Root element of the catalog document.
pub const ROOT_TAG: &str = "catalog";
/// Per-record element.
pub const OBJECT_TAG: &str = "object";

/// Parses a catalog document into validated records, in document order.
///
/// The `code` attribute is optional and defaults to the trimmed `name`.
/// All attribute values are trimmed of surrounding whitespace before use.
///
/// # Errors
/// - [`CatalogError::Schema`] if the root element is not `<catalog>`
/// - [`CatalogError::Format`] for a missing or non-numeric attribute
/// - [`CatalogError::Validation`] for a record violating a field constraint
/// - [`CatalogError::Xml`] for markup that is not well-formed
pub fn parse_catalog(xml: &str) -> Result<Vec<CatalogObject>> {
    let mut reader = Reader::from_str(xml);
    let mut objects = Vec::new();
    let mut saw_root = false;
    let mut depth = 0usize;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => {
                handle_element(e, depth, &mut saw_root, &mut objects)?;
                depth += 1;
            }
            Ok(Event::Empty(ref e)) => {
                handle_element(e, depth, &mut saw_root, &mut objects)?;
            }
            Ok(Event::End(_)) => depth = depth.saturating_sub(1),
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => return Err(CatalogError::Xml(e.to_string())),
        }
    }

    if !saw_root {
        return Err(CatalogError::Xml(
            "document has no root element".to_string(),
        ));
    }
    Ok(objects)
}

fn handle_element(
    element: &BytesStart,
    depth: usize,
    saw_root: &mut bool,
    objects: &mut Vec<CatalogObject>,
) -> Result<()> {
    let tag = String::from_utf8_lossy(element.name().as_ref()).to_string();
    if depth == 0 {
        if tag != ROOT_TAG {
            return Err(CatalogError::Schema { found: tag });
        }
        *saw_root = true;
        return Ok(());
    }
    // Only direct children of <catalog> are records; anything else is ignored.
    if depth == 1 && tag == OBJECT_TAG {
        objects.push(parse_object(element)?);
    }
    Ok(())
}

fn parse_object(element: &BytesStart) -> Result<CatalogObject> {
    let mut name = None;
    let mut code = None;
    let mut type_attr = None;
    let mut ra = None;
    let mut dec = None;
    let mut magnitude = None;

    for attr in element.attributes() {
        let attr = attr.map_err(|e| CatalogError::Xml(e.to_string()))?;
        let value = attr
            .unescape_value()
            .map_err(|e| CatalogError::Xml(e.to_string()))?
            .trim()
            .to_string();
        match attr.key.as_ref() {
            b"name" => name = Some(value),
            b"code" => code = Some(value),
            b"type" => type_attr = Some(value),
            b"ra_hours" => ra = Some(value),
            b"dec_degrees" => dec = Some(value),
            b"magnitude" => magnitude = Some(value),
            _ => {}
        }
    }

    let name = name.ok_or_else(|| CatalogError::format("<unnamed>", "name", ""))?;
    let type_attr = type_attr.ok_or_else(|| CatalogError::format(&name, "type", ""))?;
    let object_type = ObjectType::parse(&type_attr).ok_or_else(|| {
        CatalogError::validation(&name, Constraint::UnknownType { value: type_attr })
    })?;
    let ra_hours = parse_number(&name, "ra_hours", ra)?;
    let dec_degrees = parse_number(&name, "dec_degrees", dec)?;
    let magnitude = parse_number(&name, "magnitude", magnitude)?;
    let code = match code {
        Some(c) => c,
        None => name.clone(),
    };

    CatalogObject::new(name, code, object_type, ra_hours, dec_degrees, magnitude)
}

fn parse_number(object: &str, attribute: &str, value: Option<String>) -> Result<f64> {
    let value = value.ok_or_else(|| CatalogError::format(object, attribute, ""))?;
    value
        .parse::<f64>()
        .map_err(|_| CatalogError::format(object, attribute, &value))
}
