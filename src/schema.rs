// src/schema.rs
//
// schema.org ItemList envelope and its JSON-LD serialization.
// Field order below is the serialized key order, so output is deterministic.

use serde::{Deserialize, Serialize};
use serde_json::ser::{PrettyFormatter, Serializer};

pub const SCHEMA_CONTEXT: &str = "https://schema.org";

/// One post link, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListItem {
    #[serde(rename = "@type")]
    pub item_type: String,
    pub position: usize,
    pub name: String,
    pub url: String,
}

impl ListItem {
    pub fn new(position: usize, name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            item_type: "ListItem".to_string(),
            position,
            name: name.into(),
            url: url.into(),
        }
    }
}

/// The fixed ItemList wrapper. One per input URL; lives only long enough
/// to be serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemListSchema {
    #[serde(rename = "@context")]
    pub context: String,
    #[serde(rename = "@type")]
    pub item_type: String,
    #[serde(rename = "itemListElement")]
    pub item_list_element: Vec<ListItem>,
}

impl ItemListSchema {
    pub fn new(items: Vec<ListItem>) -> Self {
        Self {
            context: SCHEMA_CONTEXT.to_string(),
            item_type: "ItemList".to_string(),
            item_list_element: items,
        }
    }
}

/// Serialize the schema as an embeddable script tag:
///
/// ```text
/// <script type="application/ld+json">
/// { ... 4-space indented JSON ... }
/// </script>
/// ```
pub fn to_script_tag(schema: &ItemListSchema) -> Result<String, serde_json::Error> {
    let json = to_pretty_json(schema)?;
    Ok(format!("<script type=\"application/ld+json\">\n{json}\n</script>"))
}

/// serde_json pretty-prints with 2 spaces; the published markup uses 4.
fn to_pretty_json<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    let mut buf: Vec<u8> = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;

    Ok(match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    })
}
