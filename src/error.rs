//! Error types for bookgen operations.

use thiserror::Error;

/// Errors that can occur while assembling a book or rendering snippets.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("template error: {0}")]
    Template(#[from] handlebars::TemplateError),

    #[error("render error: {0}")]
    Render(#[from] handlebars::RenderError),

    #[error("invalid CSS: {0}")]
    CssParse(String),

    #[error("first rule is missing a `{0}` declaration")]
    MissingDimension(String),

    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("malformed snippet: {0}")]
    Snippet(String),

    #[error("highlighting error: {0}")]
    Highlight(String),

    #[error("UTF-8 decoding error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
