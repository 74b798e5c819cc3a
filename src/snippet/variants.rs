//! Single-snippet-with-variants compositor.
//!
//! One base HTML fragment is rendered once per variant rule: classes in the
//! common and variant stylesheets are renamed as a unit (so the base markup
//! keeps pointing at the right rules), then each variant's class is attached
//! to a clone of the base element, positioned in the grid, and labelled with
//! the rule's first declaration.

use super::scale::RowScale;
use super::{PADDING, PARENT_WIDTH, Sections};
use crate::css::{self, ClassNameMap, RenameCounter, Stylesheet};
use crate::dom;
use crate::error::{Error, Result};

pub fn render_variants(code: &str, counter: &mut RenameCounter) -> Result<String> {
    let sections = Sections::parse(code);
    let html = sections.require(0, "html")?;
    let css_common_src = sections.require(1, "common css")?;
    let css_variants_src = sections.require(2, "variant css")?;

    // One map across both stylesheets keeps the HTML rewrite consistent.
    let mut renamed = ClassNameMap::new();
    let css_common = css::rename_classes(css_common_src, &mut renamed, counter)?;
    let css_variants = css::rename_classes(css_variants_src, &mut renamed, counter)?;
    let html = dom::rename_html_classes(html, &renamed)?;
    log::debug!("variant snippet renamed {} classes", renamed.len());

    let variants = Stylesheet::parse(&css_variants)?;
    let dims = css::first_rule_dimensions(&css_common)?;
    let scale = RowScale::new(variants.rules.len(), dims, PARENT_WIDTH, PADDING)?;

    let mut blocks = Vec::with_capacity(variants.rules.len());
    for (index, rule) in variants.rules.iter().enumerate() {
        let selector = rule
            .selectors
            .first()
            .ok_or_else(|| Error::Snippet("variant rule has no selectors".to_string()))?;
        let class = selector
            .split_whitespace()
            .next()
            .and_then(|token| token.strip_prefix('.'))
            .ok_or_else(|| {
                Error::Snippet(format!("variant selector is not a class: {selector}"))
            })?;
        let label = rule
            .declarations
            .first()
            .map(|d| format!("{}: {}", d.property, d.value))
            .ok_or_else(|| {
                Error::Snippet(format!("variant rule {selector} has no declarations"))
            })?;

        let document = dom::parse_fragment(&html);
        if let Some(element) = dom::first_element(&document, "div") {
            dom::append_class(&element, class);
            dom::position_absolute(&element, scale.top(index), scale.left(index));
        }

        let label_top = scale.top(index) + 10 + dims.height;
        let label_left = scale.left(index);
        blocks.push(format!(
            "{}<div style=\"position: absolute; top: {label_top}px; left: {label_left}px; font-size: 16px;\">{label}</div>",
            dom::serialize_fragment(&document)?
        ));
    }

    Ok(format!(
        "<div class=\"snippet-container\">\
         <div class=\"result\" style=\"position: relative; height: {}px;\">\
         <script src=\"assets/jquery-1.6.1.min.js\"></script>\
         <style scoped>@import \"assets/snippet.css\";\n{}\n{}</style>{}</div></div>",
        scale.height(),
        css_common,
        css_variants,
        blocks.join("\n")
    ))
}
