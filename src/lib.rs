//! # bookgen
//!
//! A static book generator: concatenates pre-rendered HTML chapters into a
//! themed book (header/footer templates, prev/next navigation, a combined
//! single-page edition, copied assets) and provides a set of "highlighter"
//! transforms that turn fenced code blocks into rendered, annotated demo
//! widgets for the book's markdown toolchain.
//!
//! ## Building a book
//!
//! ```no_run
//! use bookgen::BookConfig;
//!
//! let config = BookConfig::load("book.json")?;
//! bookgen::generate(&config)?;
//! # Ok::<(), bookgen::Error>(())
//! ```
//!
//! ## Rendering snippets
//!
//! Snippet blocks are plain text with sections split on `---` lines. The
//! highlighter registry dispatches on the fence's language tag and keeps
//! the run-scoped state (notably the class-rename counter) that makes
//! multiple demos coexist on one page:
//!
//! ```
//! use bookgen::Highlighters;
//!
//! let mut highlighters = Highlighters::new();
//! let html = highlighters.render("<div>hello</div>\n", "snippet")?;
//! assert!(html.contains("snippet-container"));
//! # Ok::<(), bookgen::Error>(())
//! ```

pub mod book;
pub mod config;
pub mod css;
pub mod dom;
pub mod error;
pub mod highlight;
pub mod markdown;
pub mod snippet;

pub use book::generate;
pub use config::BookConfig;
pub use css::{ClassNameMap, Dimensions, RenameCounter};
pub use error::{Error, Result};
pub use highlight::{Highlighters, hl};
pub use markdown::render as render_markdown;
pub use markdown::strip_header;
pub use snippet::{render_matrix, render_preview, render_variants};
