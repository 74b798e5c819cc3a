//! HTML fragment parsing, mutation, and serialization.
//!
//! Snippet HTML arrives as fragments, not documents. kuchiki always builds
//! a full document tree, so fragments are parsed into a document and
//! serialized back as the body's children.

use kuchiki::traits::*;
use kuchiki::{ElementData, NodeDataRef, NodeRef};

use crate::css::ClassNameMap;
use crate::error::{Error, Result};

/// Parse an HTML fragment into a document tree.
pub fn parse_fragment(html: &str) -> NodeRef {
    kuchiki::parse_html().one(html)
}

/// Serialize the fragment content of a parsed document (the body's children).
pub fn serialize_fragment(document: &NodeRef) -> Result<String> {
    let body = document
        .select_first("body")
        .map_err(|()| Error::Snippet("fragment has no body element".to_string()))?;

    let mut out = Vec::new();
    for child in body.as_node().children() {
        child.serialize(&mut out)?;
    }
    Ok(String::from_utf8(out)?)
}

/// Rewrite `class` attributes according to a rename map.
///
/// For each mapped original class, every element carrying that literal class
/// gets the token swapped for its replacement; other classes and attributes
/// are left as they are. Classes absent from the map are never touched.
pub fn rename_html_classes(html: &str, renamed: &ClassNameMap) -> Result<String> {
    let document = parse_fragment(html);

    for (original, replacement) in renamed {
        let old_class = original.trim_start_matches('.');
        let new_class = replacement.trim_start_matches('.');

        // Matching mutates the class attribute, so collect the set first.
        let matches: Vec<NodeDataRef<ElementData>> = match document.select(original) {
            Ok(selection) => selection.collect(),
            Err(()) => continue,
        };

        for element in matches {
            let mut attributes = element.attributes.borrow_mut();
            let value = match attributes.get("class") {
                Some(value) => value.to_string(),
                None => continue,
            };
            let rewritten = value
                .split_whitespace()
                .map(|token| if token == old_class { new_class } else { token })
                .collect::<Vec<_>>()
                .join(" ");
            attributes.insert("class", rewritten);
        }
    }

    serialize_fragment(&document)
}

/// First element matching `selector`, if any.
pub(crate) fn first_element(
    document: &NodeRef,
    selector: &str,
) -> Option<NodeDataRef<ElementData>> {
    document.select_first(selector).ok()
}

/// Append a class token to an element's `class` attribute.
pub(crate) fn append_class(element: &NodeDataRef<ElementData>, class: &str) {
    let mut attributes = element.attributes.borrow_mut();
    let value = match attributes.get("class") {
        Some(existing) if !existing.trim().is_empty() => format!("{existing} {class}"),
        _ => class.to_string(),
    };
    attributes.insert("class", value);
}

/// Absolutely position an element, merging with any inline style it has.
pub(crate) fn position_absolute(element: &NodeDataRef<ElementData>, top: u32, left: u32) {
    let mut attributes = element.attributes.borrow_mut();
    let positioning = format!("position: absolute; top: {top}px; left: {left}px;");
    let value = match attributes.get("style") {
        Some(existing) if !existing.trim().is_empty() => {
            format!("{}; {}", existing.trim_end().trim_end_matches(';'), positioning)
        }
        _ => positioning,
    };
    attributes.insert("style", value);
}
