//! Normalized catalog markup emitter.
//!
//! Re-renders the sorted record set as `data/catalog.xml`. Numeric
//! attributes use fixed-point formatting (4 decimals for coordinates, 1 for
//! magnitude, trailing zeros preserved) so that a rewritten catalog parses
//! back to exactly the same values and repeated runs are byte-identical.

use crate::error::{CatalogError, Result};
use crate::loader::{OBJECT_TAG, ROOT_TAG};
use crate::object::CatalogObject;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};
use quick_xml::Writer;
use std::io::Cursor;

/// Renders the full catalog document, trailing newline included.
pub fn render(objects: &[CatalogObject]) -> Result<String> {
    let mut buffer = Cursor::new(Vec::new());
    let mut writer = Writer::new_with_indent(&mut buffer, b' ', 2);

    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
        .map_err(|e| CatalogError::Xml(e.to_string()))?;
    writer
        .write_event(Event::Start(BytesStart::new(ROOT_TAG)))
        .map_err(|e| CatalogError::Xml(e.to_string()))?;

    for obj in objects {
        let mut element = BytesStart::new(OBJECT_TAG);
        element.push_attribute(("name", obj.name.as_str()));
        element.push_attribute(("code", obj.code.as_str()));
        element.push_attribute(("type", obj.object_type.as_str()));
        element.push_attribute(("ra_hours", format!("{:.4}", obj.ra_hours).as_str()));
        element.push_attribute(("dec_degrees", format!("{:.4}", obj.dec_degrees).as_str()));
        element.push_attribute(("magnitude", format!("{:.1}", obj.magnitude).as_str()));
        writer
            .write_event(Event::Empty(element))
            .map_err(|e| CatalogError::Xml(e.to_string()))?;
    }

    writer
        .write_event(Event::End(BytesEnd::new(ROOT_TAG)))
        .map_err(|e| CatalogError::Xml(e.to_string()))?;

    let mut bytes = buffer.into_inner();
    bytes.push(b'\n');
    String::from_utf8(bytes).map_err(|e| CatalogError::Xml(e.to_string()))
}
