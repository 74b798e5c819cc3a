//! Syntax highlighting and the fenced-block highlighter registry.
//!
//! The markdown toolchain hands each tagged fenced code block to a
//! highlighter as `(code, lang) -> html`. Five tags are recognized
//! (`snippet`, `snippet-matrix`, `inline-snippet`, `spoiler`, `problem`);
//! anything else falls back to a plain highlighted panel.

use std::fs;
use std::path::PathBuf;

use syntect::html::{ClassStyle, ClassedHTMLGenerator};
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

use crate::css::RenameCounter;
use crate::error::{Error, Result};
use crate::markdown::markdown_to_html;
use crate::snippet::{render_matrix, render_preview, render_variants};

/// Highlight `code` as `lang`, falling back to plain text for unknown
/// languages. Output is class-annotated so the page stylesheet controls
/// the colors.
pub fn hl(code: &str, lang: &str, syntaxes: &SyntaxSet) -> Result<String> {
    let syntax = syntaxes
        .find_syntax_by_token(lang)
        .unwrap_or_else(|| syntaxes.find_syntax_plain_text());

    let mut generator =
        ClassedHTMLGenerator::new_with_class_style(syntax, syntaxes, ClassStyle::Spaced);
    for line in LinesWithEndings::from(code) {
        generator
            .parse_html_for_line_which_includes_newline(line)
            .map_err(|e| Error::Highlight(e.to_string()))?;
    }

    Ok(format!(
        "<pre class=\"hljs\"><code>{}</code></pre>",
        generator.finalize()
    ))
}

/// Registry of fenced-block highlighters plus the state they share for one
/// run: the class-rename counter, the spoiler id sequence, and the problems
/// directory. Create one per build so generated names restart at 1.
pub struct Highlighters {
    syntaxes: SyntaxSet,
    counter: RenameCounter,
    spoiler_seq: usize,
    problems_dir: Option<PathBuf>,
}

impl Highlighters {
    pub fn new() -> Self {
        Highlighters {
            syntaxes: SyntaxSet::load_defaults_newlines(),
            counter: RenameCounter::new(),
            spoiler_seq: 0,
            problems_dir: None,
        }
    }

    /// Directory `problem` blocks resolve their markdown files against.
    pub fn with_problems_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.problems_dir = Some(dir.into());
        self
    }

    /// Render one fenced code block tagged with `lang`.
    pub fn render(&mut self, code: &str, lang: &str) -> Result<String> {
        match lang {
            "snippet" => render_preview(code, &self.syntaxes),
            "snippet-matrix" => render_matrix(code, &mut self.counter),
            "inline-snippet" => render_variants(code, &mut self.counter),
            "spoiler" => Ok(self.spoiler(code)),
            "problem" => self.problem(code),
            _ => hl(code, lang, &self.syntaxes),
        }
    }

    fn spoiler(&mut self, code: &str) -> String {
        self.spoiler_seq += 1;
        let id = self.spoiler_seq;
        format!(
            "<div class=\"spoiler-container\">\
             <input type=\"checkbox\" class=\"spoiler\" id=\"spoiler-{id}\"/>\
             <label for=\"spoiler-{id}\">Show answer</label>\
             <div class=\"spoiler-content\">{}</div></div>",
            markdown_to_html(code.trim())
        )
    }

    fn problem(&mut self, code: &str) -> Result<String> {
        let dir = self.problems_dir.as_ref().ok_or_else(|| {
            Error::Configuration("problem block used without a problems directory".to_string())
        })?;
        let text = fs::read_to_string(dir.join(code.trim()))?;
        Ok(format!("<hr>{}<hr><br>", markdown_to_html(&text)))
    }
}

impl Default for Highlighters {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn hl_wraps_highlighted_source() {
        let syntaxes = SyntaxSet::load_defaults_newlines();
        let out = hl("var x = 1;", "js", &syntaxes).unwrap();

        assert!(out.starts_with("<pre class=\"hljs\"><code>"));
        assert!(out.ends_with("</code></pre>"));
        assert!(out.contains("<span"));
    }

    #[test]
    fn hl_unknown_language_falls_back_to_plain_text() {
        let syntaxes = SyntaxSet::load_defaults_newlines();
        let out = hl("plain words", "no-such-language", &syntaxes).unwrap();

        assert!(out.contains("plain words"));
    }

    #[test]
    fn spoiler_ids_increment_per_run() {
        let mut highlighters = Highlighters::new();

        let first = highlighters.render("answer one", "spoiler").unwrap();
        let second = highlighters.render("answer two", "spoiler").unwrap();

        assert!(first.contains("id=\"spoiler-1\""));
        assert!(second.contains("id=\"spoiler-2\""));
        assert!(first.contains("<p>answer one</p>"));
    }

    #[test]
    fn problem_reads_and_renders_the_named_file() {
        let dir = TempDir::new().unwrap();
        let mut file = std::fs::File::create(dir.path().join("ex1.md")).unwrap();
        writeln!(file, "# Exercise").unwrap();

        let mut highlighters = Highlighters::new().with_problems_dir(dir.path());
        let out = highlighters.render("ex1.md\n", "problem").unwrap();

        assert!(out.starts_with("<hr>"));
        assert!(out.contains("<h1>Exercise</h1>"));
        assert!(out.ends_with("<hr><br>"));
    }

    #[test]
    fn problem_without_directory_is_a_configuration_error() {
        let mut highlighters = Highlighters::new();

        assert!(matches!(
            highlighters.render("ex1.md", "problem"),
            Err(Error::Configuration(_))
        ));
    }

    #[test]
    fn snippet_tag_renders_the_panels_and_preview() {
        let block = "<div id=\"demo\"></div>\n\
                     ---\n\
                     #demo { color: red; }\n\
                     ---\n\
                     console.log(1);\n";
        let mut highlighters = Highlighters::new();
        let out = highlighters.render(block, "snippet").unwrap();

        assert!(out.contains("<iframe srcdoc=\""), "got: {out}");
        assert!(out.contains("<div class=\"js\">"));
        // no class renaming in this compositor
        assert!(!out.contains("-s1"));
    }

    #[test]
    fn inline_snippet_tag_renders_the_variants_grid() {
        let block = "<div class=\"box\"></div>\n\
                     ---\n\
                     .box { width: 100px; height: 100px; }\n\
                     ---\n\
                     .red { background: red; }\n";
        let mut highlighters = Highlighters::new();
        let out = highlighters.render(block, "inline-snippet").unwrap();

        assert!(out.contains("class=\"box-s1 red-s2\""), "got: {out}");
        assert!(out.contains("position: relative; height: 150px;"));
        assert!(!out.contains("iframe"));
    }

    #[test]
    fn unknown_tags_fall_back_to_plain_highlighting() {
        let mut highlighters = Highlighters::new();
        let out = highlighters.render("let x = 1;", "rust").unwrap();

        assert!(out.starts_with("<pre class=\"hljs\">"));
    }
}
