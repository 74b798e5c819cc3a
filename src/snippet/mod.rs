//! Snippet compositors for the book's demo code blocks.
//!
//! A snippet block is plain text with sections separated by a line of three
//! or more hyphens. Which sections mean what depends on the compositor:
//!
//! - [`render_preview`]: `html --- css --- js`, highlighted source panels
//!   plus a sandboxed live preview (the `snippet` tag)
//! - [`render_matrix`]: `html --- css --- html --- css ...`, independent
//!   pairs laid out in a grid (the `snippet-matrix` tag)
//! - [`render_variants`]: `html --- common css --- variant css`, one demo
//!   cloned per variant rule and laid out in a grid (the `inline-snippet`
//!   tag)

pub mod scale;

mod matrix;
mod preview;
mod variants;

pub use matrix::render_matrix;
pub use preview::render_preview;
pub use variants::render_variants;

use crate::error::{Error, Result};
use scale::Padding;

/// Width of the container the grid layouts wrap within.
const PARENT_WIDTH: u32 = 640;

/// Grid spacing shared by the variant and matrix layouts.
const PADDING: Padding = Padding { top: 50, left: 20 };

/// Sections of a snippet block, split on `---` delimiter lines.
#[derive(Debug)]
pub(crate) struct Sections(Vec<String>);

impl Sections {
    pub(crate) fn parse(code: &str) -> Self {
        let mut sections = Vec::new();
        let mut current = String::new();

        for line in code.lines() {
            let trimmed = line.strip_suffix('\r').unwrap_or(line);
            if trimmed.len() >= 3 && trimmed.bytes().all(|b| b == b'-') {
                sections.push(std::mem::take(&mut current));
            } else {
                current.push_str(line);
                current.push('\n');
            }
        }
        sections.push(current);

        Sections(sections)
    }

    /// Section that must be present, by position and name.
    pub(crate) fn require(&self, index: usize, name: &str) -> Result<&str> {
        self.0
            .get(index)
            .map(String::as_str)
            .ok_or_else(|| {
                Error::Snippet(format!(
                    "missing {name} section (found {} of {} sections)",
                    self.0.len(),
                    index + 1
                ))
            })
    }

    /// Section that may be absent; missing means empty.
    pub(crate) fn optional(&self, index: usize) -> &str {
        self.0.get(index).map(String::as_str).unwrap_or("")
    }

    /// Interpret the sections as consecutive `(html, css)` pairs.
    ///
    /// A single trailing blank section (a block ending in a delimiter line)
    /// is dropped before pairing.
    pub(crate) fn pairs(&self) -> Result<Vec<(&str, &str)>> {
        let mut sections: &[String] = &self.0;
        if let Some(last) = sections.last() {
            if sections.len() > 1 && last.trim().is_empty() {
                sections = &sections[..sections.len() - 1];
            }
        }

        if sections.len() < 2 {
            return Err(Error::Snippet(
                "matrix snippet requires at least one html/css pair".to_string(),
            ));
        }
        if sections.len() % 2 != 0 {
            return Err(Error::Snippet(
                "matrix snippet has an html section without a matching css section".to_string(),
            ));
        }

        Ok(sections
            .chunks_exact(2)
            .map(|pair| (pair[0].as_str(), pair[1].as_str()))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_hyphen_lines() {
        let sections = Sections::parse("<div></div>\n---\n.a { color: red; }\n-----\n.b {}\n");

        assert_eq!(sections.require(0, "html").unwrap(), "<div></div>\n");
        assert_eq!(sections.require(1, "css").unwrap(), ".a { color: red; }\n");
        assert_eq!(sections.require(2, "css").unwrap(), ".b {}\n");
    }

    #[test]
    fn short_or_mixed_dashes_are_content() {
        let sections = Sections::parse("a\n--\nb\n-- -\nc\n");

        assert!(sections.require(1, "css").is_err());
        assert_eq!(sections.optional(0), "a\n--\nb\n-- -\nc\n");
    }

    #[test]
    fn missing_section_error_names_the_section() {
        let sections = Sections::parse("<div></div>\n");
        let err = sections.require(2, "variant css").unwrap_err();

        assert!(err.to_string().contains("variant css"), "got: {err}");
    }

    #[test]
    fn optional_sections_default_to_empty() {
        let sections = Sections::parse("<div></div>\n");

        assert_eq!(sections.optional(1), "");
        assert_eq!(sections.optional(2), "");
    }

    #[test]
    fn pairs_groups_consecutive_sections() {
        let sections = Sections::parse("h1\n---\nc1\n---\nh2\n---\nc2\n");
        let pairs = sections.pairs().unwrap();

        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0], ("h1\n", "c1\n"));
        assert_eq!(pairs[1], ("h2\n", "c2\n"));
    }

    #[test]
    fn pairs_drops_trailing_blank_section() {
        let sections = Sections::parse("h1\n---\nc1\n---\n");

        assert_eq!(sections.pairs().unwrap().len(), 1);
    }

    #[test]
    fn unpaired_section_is_an_error() {
        let sections = Sections::parse("h1\n---\nc1\n---\nh2\n");

        assert!(sections.pairs().is_err());
    }
}
