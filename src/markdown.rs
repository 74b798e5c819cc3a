//! Markdown-to-HTML conversion with highlighter dispatch.
//!
//! Fenced code blocks with a recognized language tag are replaced by the
//! output of the matching highlighter; a failing snippet is reported and
//! rendered as an error placeholder instead of aborting the whole build.

use pulldown_cmark::escape::escape_html;
use pulldown_cmark::{CodeBlockKind, Event, Options, Parser, Tag, html};

use crate::highlight::Highlighters;

/// Render `markdown` to HTML, dispatching fenced code blocks through the
/// highlighter registry.
pub fn render(markdown: &str, highlighters: &mut Highlighters) -> String {
    let mut events = Vec::new();
    let mut parser = Parser::new_ext(markdown, Options::empty());

    while let Some(event) = parser.next() {
        match event {
            Event::Start(Tag::CodeBlock(CodeBlockKind::Fenced(lang))) => {
                let lang = lang.trim().to_string();
                let mut code = String::new();
                for inner in parser.by_ref() {
                    match inner {
                        Event::Text(text) => code.push_str(&text),
                        Event::End(Tag::CodeBlock(_)) => break,
                        _ => {}
                    }
                }

                let rendered = match highlighters.render(&code, &lang) {
                    Ok(html) => html,
                    Err(e) => {
                        log::error!("failed to render `{lang}` block: {e}");
                        let mut escaped = String::new();
                        let _ = escape_html(&mut escaped, &code);
                        format!("<pre class=\"snippet-error\"><code>{escaped}</code></pre>")
                    }
                };
                events.push(Event::Html(rendered.into()));
            }
            other => events.push(other),
        }
    }

    let mut output = String::new();
    html::push_html(&mut output, events.into_iter());
    output
}

/// Plain markdown-to-HTML conversion, no highlighter dispatch.
pub fn markdown_to_html(markdown: &str) -> String {
    let mut output = String::new();
    html::push_html(&mut output, Parser::new(markdown));
    output
}

/// Strip a metadata header from the start of a markdown document.
///
/// Two header shapes are recognized: a front-matter block fenced between
/// `---` lines, and a run of leading `key: value` lines. A blank line
/// immediately after the header is consumed too. Documents without a
/// header pass through unchanged, as does an unterminated front-matter
/// fence.
pub fn strip_header(markdown: &str) -> &str {
    if let Some(body) = strip_front_matter(markdown) {
        return body;
    }

    let mut offset = 0;
    for line in markdown.split_inclusive('\n') {
        if is_meta_line(line) {
            offset += line.len();
        } else {
            break;
        }
    }
    if offset == 0 {
        return markdown;
    }
    strip_blank_line(&markdown[offset..])
}

fn strip_front_matter(markdown: &str) -> Option<&str> {
    let mut lines = markdown.split_inclusive('\n');
    let first = lines.next()?;
    if first.trim_end() != "---" {
        return None;
    }
    let mut offset = first.len();
    for line in lines {
        offset += line.len();
        if line.trim_end() == "---" {
            return Some(strip_blank_line(&markdown[offset..]));
        }
    }
    None
}

fn is_meta_line(line: &str) -> bool {
    let Some((key, value)) = line.trim_end().split_once(':') else {
        return false;
    };
    !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        && value.starts_with(char::is_whitespace)
        && !value.trim().is_empty()
}

fn strip_blank_line(text: &str) -> &str {
    match text.split_inclusive('\n').next() {
        Some(line) if line.trim().is_empty() => &text[line.len()..],
        _ => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_markdown_passes_through() {
        let mut highlighters = Highlighters::new();
        let out = render("# Title\n\nSome *emphasis*.\n", &mut highlighters);

        assert!(out.contains("<h1>Title</h1>"));
        assert!(out.contains("<em>emphasis</em>"));
    }

    #[test]
    fn fenced_snippet_blocks_are_dispatched() {
        let mut highlighters = Highlighters::new();
        let markdown = "before\n\n\
                        ```snippet\n\
                        <div>hi</div>\n\
                        ```\n\n\
                        after\n";

        let out = render(markdown, &mut highlighters);

        assert!(out.contains("<div class=\"snippet-container\">"));
        assert!(out.contains("<p>before</p>"));
        assert!(out.contains("<p>after</p>"));
    }

    #[test]
    fn untagged_fences_get_plain_highlighting() {
        let mut highlighters = Highlighters::new();
        let out = render("```js\nvar x = 1;\n```\n", &mut highlighters);

        assert!(out.contains("<pre class=\"hljs\">"));
    }

    #[test]
    fn failing_snippet_becomes_an_error_placeholder() {
        let mut highlighters = Highlighters::new();
        // missing sections: the variants compositor rejects this block
        let out = render("```inline-snippet\n<div></div>\n```\n", &mut highlighters);

        assert!(out.contains("<pre class=\"snippet-error\">"));
        assert!(out.contains("&lt;div&gt;&lt;/div&gt;"));
    }

    #[test]
    fn snippet_failure_does_not_abort_surrounding_content() {
        let mut highlighters = Highlighters::new();
        let markdown = "intro\n\n```inline-snippet\nbroken\n```\n\noutro\n";

        let out = render(markdown, &mut highlighters);

        assert!(out.contains("<p>intro</p>"));
        assert!(out.contains("<p>outro</p>"));
    }

    #[test]
    fn strip_header_removes_front_matter() {
        let doc = "---\ntitle: My Book\nauthor: Someone\n---\n\n# Chapter\n";

        assert_eq!(strip_header(doc), "# Chapter\n");
    }

    #[test]
    fn strip_header_removes_leading_key_value_lines() {
        let doc = "title: My Book\nlayout: default\n\nBody text.\n";

        assert_eq!(strip_header(doc), "Body text.\n");
    }

    #[test]
    fn strip_header_leaves_plain_documents_alone() {
        let doc = "# Chapter\n\nSee http://example.com for details.\n";

        assert_eq!(strip_header(doc), doc);
    }

    #[test]
    fn strip_header_leaves_unterminated_front_matter_alone() {
        let doc = "---\ntitle: My Book\n\nBody text.\n";

        assert_eq!(strip_header(doc), doc);
    }
}
