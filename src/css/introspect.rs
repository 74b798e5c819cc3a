//! Rule introspection: box dimensions and per-rule declaration values.
//!
//! Snippet layouts assume the first rule of a "common" stylesheet defines
//! the demo box, so its `width`/`height` drive the grid geometry.

use super::{Rule, Stylesheet};
use crate::error::{Error, Result};

/// Pixel dimensions parsed from a stylesheet's first rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

/// Extract `width` and `height` from the first rule of `css`.
///
/// Values are parsed as leading decimal digits with any unit text after the
/// digits ignored (pixels are assumed throughout). A missing declaration is
/// an explicit error rather than a crash downstream.
pub fn first_rule_dimensions(css: &str) -> Result<Dimensions> {
    let sheet = Stylesheet::parse(css)?;
    let rule = sheet.rules.first().ok_or_else(|| {
        Error::Configuration("dimension stylesheet contains no rules".to_string())
    })?;

    Ok(Dimensions {
        width: pixel_value(rule, "width")?,
        height: pixel_value(rule, "height")?,
    })
}

fn pixel_value(rule: &Rule, property: &str) -> Result<u32> {
    let declaration = rule
        .declarations
        .iter()
        .find(|d| d.property.eq_ignore_ascii_case(property))
        .ok_or_else(|| Error::MissingDimension(property.to_string()))?;

    let digits: String = declaration
        .value
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();

    digits.parse().map_err(|_| {
        Error::Configuration(format!(
            "`{property}` is not a pixel value: {}",
            declaration.value
        ))
    })
}

/// Collect each rule's declarations as ordered `(property, value)` pairs,
/// one list per rule in document order. The first pair of a variant rule is
/// used as its on-page label.
pub fn declaration_values_per_rule(css: &str) -> Result<Vec<Vec<(String, String)>>> {
    let sheet = Stylesheet::parse(css)?;
    Ok(sheet
        .rules
        .iter()
        .map(|rule| {
            rule.declarations
                .iter()
                .map(|d| (d.property.clone(), d.value.clone()))
                .collect()
        })
        .collect())
}
