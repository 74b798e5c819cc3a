//! Collision-free CSS class renaming.
//!
//! Multiple demos can be embedded on one page, and their stylesheets
//! routinely reuse class names like `.box`. Before a snippet's CSS is
//! inlined, every class selector is renamed with a run-unique suffix
//! (`.box` becomes `.box-s3`) and the mapping is recorded so the matching
//! HTML can be rewritten the same way.

use std::collections::HashMap;

use super::Stylesheet;
use crate::error::Result;

/// Mapping from original class selector (`.foo`) to its replacement (`.foo-s3`).
pub type ClassNameMap = HashMap<String, String>;

/// Monotonic counter for replacement class suffixes.
///
/// One counter is shared by every renaming pass of a run so that names never
/// collide across independently composed snippets, even when two snippets
/// both define `.foo`. Scoped to the run rather than the process: create one
/// per build and pass it through.
#[derive(Debug)]
pub struct RenameCounter {
    next: u32,
}

impl RenameCounter {
    pub fn new() -> Self {
        RenameCounter { next: 1 }
    }

    fn next_index(&mut self) -> u32 {
        let n = self.next;
        self.next += 1;
        n
    }
}

impl Default for RenameCounter {
    fn default() -> Self {
        Self::new()
    }
}

/// Rename class selectors in `css`, extending `renamed` with new assignments.
///
/// Only selectors whose leading token starts with `.` are touched; the
/// leading whitespace-delimited token is the rename unit and the rest of a
/// compound selector is preserved. A class already present in `renamed`
/// reuses its assigned name, which is what keeps an HTML rewrite consistent
/// across the common and variant stylesheets of one snippet.
pub fn rename_classes(
    css: &str,
    renamed: &mut ClassNameMap,
    counter: &mut RenameCounter,
) -> Result<String> {
    let mut sheet = Stylesheet::parse(css)?;

    for rule in &mut sheet.rules {
        for selector in &mut rule.selectors {
            if !selector.starts_with('.') {
                continue;
            }
            let class_part = match selector.split_whitespace().next() {
                Some(part) => part.to_string(),
                None => continue,
            };
            let replacement = renamed
                .entry(class_part.clone())
                .or_insert_with(|| {
                    format!(".{}-s{}", &class_part[1..], counter.next_index())
                })
                .clone();
            *selector = selector.replacen(&class_part, &replacement, 1);
        }
    }

    Ok(sheet.to_css_string())
}
