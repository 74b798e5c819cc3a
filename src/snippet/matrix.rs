//! Matrix compositor: a grid of independent html/css pairs.
//!
//! Each pair is a self-contained demo with its own renaming pass, so class
//! collisions are scoped per pair; the shared run counter still guarantees
//! the generated names are unique across the whole page. Grid geometry
//! comes from the first pair's stylesheet, which is assumed representative.

use super::scale::RowScale;
use super::{PADDING, PARENT_WIDTH, Sections};
use crate::css::{self, ClassNameMap, RenameCounter};
use crate::dom;
use crate::error::Result;

pub fn render_matrix(code: &str, counter: &mut RenameCounter) -> Result<String> {
    let sections = Sections::parse(code);
    let pairs = sections.pairs()?;

    let dims = css::first_rule_dimensions(pairs[0].1)?;
    let scale = RowScale::new(pairs.len(), dims, PARENT_WIDTH, PADDING)?;

    let mut output = format!(
        "<div style=\"position: relative; height: {}px;\">",
        scale.height()
    );
    for (index, (html, css_src)) in pairs.iter().enumerate() {
        let mut renamed = ClassNameMap::new();
        let renamed_css = css::rename_classes(css_src, &mut renamed, counter)?;
        let renamed_html = dom::rename_html_classes(html, &renamed)?;

        let document = dom::parse_fragment(&renamed_html);
        if let Some(element) = dom::first_element(&document, "div") {
            dom::position_absolute(&element, scale.top(index), scale.left(index));
        }

        output.push_str(&format!(
            "<style scoped>@import \"assets/snippet.css\";\n{renamed_css}</style>"
        ));
        output.push_str(&dom::serialize_fragment(&document)?);
        output.push('\n');
    }
    output.push_str("</div>");

    Ok(output)
}
