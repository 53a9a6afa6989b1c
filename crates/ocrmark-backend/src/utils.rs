//! Shared helpers for the markup event scanners.

use quick_xml::events::attributes::Attribute;
use quick_xml::events::BytesText;

/// Decode a text event, keeping the raw bytes when entity resolution
/// fails — engines occasionally emit bare ampersands or HTML-only
/// entities like `&nbsp;`, and those must not fail the scan.
pub(crate) fn decode_text(e: &BytesText) -> String {
    e.unescape().map_or_else(
        |_| String::from_utf8_lossy(e.as_ref()).into_owned(),
        |cow| cow.into_owned(),
    )
}

/// Decode an attribute value with the same bare-entity leniency.
pub(crate) fn decode_attr(attr: &Attribute) -> String {
    attr.unescape_value().map_or_else(
        |_| String::from_utf8_lossy(&attr.value).into_owned(),
        |cow| cow.into_owned(),
    )
}
