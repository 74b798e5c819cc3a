//! Plain snippet compositor: highlighted source panels plus a live preview.
//!
//! No renaming or layout here; the combined HTML/CSS/JS is embedded as a
//! sandboxed inline document via `iframe srcdoc`, quote-escaped so the
//! markup survives as an attribute value.

use syntect::parsing::SyntaxSet;

use super::Sections;
use crate::css::Stylesheet;
use crate::error::Result;
use crate::highlight::hl;

pub fn render_preview(code: &str, syntaxes: &SyntaxSet) -> Result<String> {
    let sections = Sections::parse(code);
    let html = sections.require(0, "html")?;
    let css = sections.optional(1);
    let js = sections.optional(2);

    let has_css = !css.trim().is_empty();
    let has_js = !js.trim().is_empty();

    // Surface malformed CSS here rather than as a silently broken preview.
    if has_css {
        Stylesheet::parse(css)?;
    }

    let mut result = String::from("<div class=\"snippet-container\">");
    if has_css {
        result.push_str(&format!("<div class=\"css\">{}</div>", hl(css, "css", syntaxes)?));
    }
    result.push_str(&format!("<div class=\"html\">{}</div>", hl(html, "html", syntaxes)?));
    if has_js {
        result.push_str(&format!("<div class=\"js\">{}</div>", hl(js, "js", syntaxes)?));
    }

    result.push_str(&format!(
        "<div class=\"result\"><iframe srcdoc=\"\
         <!doctype html><html><head>\
         <script src=&quot;assets/jquery-1.6.1.min.js&quot;></script>\
         <link type=&quot;text/css&quot; rel=&quot;stylesheet&quot; href=&quot;assets/snippet.css&quot;/>\
         <style>{}</style>{}<script>{}</script>\
         </body></html>\"></iframe></div></div>",
        quote_escape(css),
        quote_escape(html),
        quote_escape(js)
    ));

    Ok(result)
}

fn quote_escape(markup: &str) -> String {
    markup.replace('"', "&quot;")
}
