//! Highlighter pipeline tests.
//!
//! Exercises the markdown integration end to end: fenced blocks dispatched
//! by language tag, cross-snippet rename uniqueness, and failure isolation.

use bookgen::{Highlighters, render_markdown};

#[test]
fn test_variants_and_matrix_share_one_rename_sequence() {
    let markdown = "\
```inline-snippet
<div class=\"box\"></div>
---
.box { width: 100px; height: 100px; }
---
.red { background: red; }
```

```snippet-matrix
<div class=\"box\"></div>
---
.box { width: 100px; height: 100px; }
```
";
    let mut highlighters = Highlighters::new();
    let out = render_markdown(markdown, &mut highlighters);

    // first block takes .box-s1 and .red-s2; the matrix block's .box must
    // not collide with the first block's
    assert!(out.contains("box-s1"));
    assert!(out.contains("red-s2"));
    assert!(out.contains("box-s3"));
}

#[test]
fn test_two_variant_blocks_with_the_same_class_never_collide() {
    let block = "\
```inline-snippet
<div class=\"item\"></div>
---
.item { width: 50px; height: 50px; }
---
.wide { width: 200px; }
```
";
    let markdown = format!("{block}\n{block}");
    let mut highlighters = Highlighters::new();
    let out = render_markdown(&markdown, &mut highlighters);

    assert!(out.contains("item-s1"));
    assert!(out.contains("item-s3"));
}

#[test]
fn test_snippet_blocks_render_panels_and_preview() {
    let markdown = "\
```snippet
<div id=\"demo\">hi</div>
---
#demo { color: red; }
---
console.log(1);
```
";
    let mut highlighters = Highlighters::new();
    let out = render_markdown(markdown, &mut highlighters);

    assert!(out.contains("<div class=\"css\">"));
    assert!(out.contains("<div class=\"js\">"));
    assert!(out.contains("iframe srcdoc="));
}

#[test]
fn test_inline_snippet_blocks_render_the_variants_grid() {
    let markdown = "\
```inline-snippet
<div class=\"box\"></div>
---
.box { width: 100px; height: 100px; }
---
.red { background: red; }
.blue { background: blue; }
```
";
    let mut highlighters = Highlighters::new();
    let out = render_markdown(markdown, &mut highlighters);

    assert!(out.contains("position: relative; height: 150px;"));
    assert!(out.contains("background: red"));
    assert!(out.contains("background: blue"));
    assert!(!out.contains("iframe"));
}

#[test]
fn test_spoiler_blocks_number_across_the_document() {
    let markdown = "```spoiler\nfirst\n```\n\n```spoiler\nsecond\n```\n";
    let mut highlighters = Highlighters::new();
    let out = render_markdown(markdown, &mut highlighters);

    assert!(out.contains("spoiler-1"));
    assert!(out.contains("spoiler-2"));
}

#[test]
fn test_broken_snippet_is_isolated_and_reported() {
    let markdown = "\
before

```inline-snippet
<div class=\"box\"></div>
---
.box { width: }
---
.red { background: red; }
```

after
";
    let mut highlighters = Highlighters::new();
    let out = render_markdown(markdown, &mut highlighters);

    assert!(out.contains("<p>before</p>"));
    assert!(out.contains("<p>after</p>"));
    assert!(out.contains("snippet-error"));
}
