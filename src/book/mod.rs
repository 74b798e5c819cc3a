//! Book assembly: per-chapter pages, the single-page edition, and assets.
//!
//! Chapters are pre-rendered HTML fragments on disk. Each is wrapped in the
//! layout's header/footer templates with prev/next navigation, written to
//! the output directory under its own basename, and accumulated into a
//! combined single-page edition. All I/O is synchronous, so generation has
//! completed every write by the time it returns.

use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use handlebars::Handlebars;
use serde::Serialize;

use crate::config::{BookConfig, InputConfig};
use crate::error::{Error, Result};

const SINGLE_PAGE: &str = "single-page.html";
const CHAPTER_NUMBER_TOKEN: &str = "%chapter_number%";
const TEMPLATE_NAMES: [&str; 3] = ["header", "header_single", "footer"];

/// Variables the layout templates are rendered with.
#[derive(Debug, Serialize)]
struct PageVars<'a> {
    title: &'a str,
    prev: &'a str,
    next: &'a str,
    extras: &'a str,
}

/// Generate the book described by `config`.
pub fn generate(config: &BookConfig) -> Result<()> {
    config.validate()?;

    let files = order_files(collect_files(config)?, &config.input);
    log::info!("assembling {} entries into {}", files.len(), config.output.display());

    let templates = load_templates(&config.layout)?;
    let extras = load_extras(&config.layout)?;
    fs::create_dir_all(&config.output)?;

    // prev starts at the index sentinel; the first chapter points back home.
    let mut prev = config.input.index.clone();
    let mut full = String::new();

    for (position, path) in files.iter().enumerate() {
        if !has_html_extension(path) {
            log::warn!("skipping non-HTML entry {}", path.display());
            continue;
        }
        let basename = file_basename(path)?;
        let next = next_chapter(&files, position);

        let content = fs::read_to_string(path)?
            .replace(CHAPTER_NUMBER_TOKEN, &format!("{position}."));

        let title = config
            .titles
            .get(&basename)
            .map(String::as_str)
            .unwrap_or(&config.title);
        let vars = PageVars {
            title,
            prev: &prev,
            next: &next,
            extras: if basename == config.input.index { &extras } else { "" },
        };

        let page = format!(
            "{}{}{}",
            templates.render("header", &vars)?,
            content,
            templates.render("footer", &vars)?
        );
        let out_path = config.output.join(&basename);
        fs::write(&out_path, page)?;
        log::info!("wrote {}", out_path.display());

        prev = basename;
        full.push_str(&content);
    }

    let vars = PageVars { title: &config.title, prev: "", next: "", extras: "" };
    let single = format!(
        "{}{}{}",
        templates.render("header_single", &vars)?,
        full,
        templates.render("footer", &vars)?
    );
    fs::write(config.output.join(SINGLE_PAGE), single)?;
    log::info!("wrote {}", config.output.join(SINGLE_PAGE).display());

    copy_assets(&config.layout.join("assets"), &config.output.join("assets"))?;
    if let Some(dir) = &config.input.dir {
        copy_assets(&dir.join("assets"), &config.output.join("assets"))?;
    }

    Ok(())
}

/// Resolve the chapter list: the explicit file list when given, otherwise
/// the files of the input directory (enumerated in name order so runs are
/// deterministic).
fn collect_files(config: &BookConfig) -> Result<Vec<PathBuf>> {
    if !config.input.files.is_empty() {
        return Ok(config.input.files.clone());
    }

    // validate() guarantees dir is set when files is empty
    let dir = config.input.dir.as_ref().ok_or_else(|| {
        Error::Configuration("input requires either a file list or a directory".to_string())
    })?;

    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_type()?.is_file() {
            files.push(entry.path());
        }
    }
    files.sort();
    Ok(files)
}

/// Apply the ordering policy: optional lexicographic sort, then pin the
/// index file to the front if present.
fn order_files(mut files: Vec<PathBuf>, input: &InputConfig) -> Vec<PathBuf> {
    if input.sort {
        files.sort();
    }
    if let Some(pos) = files
        .iter()
        .position(|p| p.file_name().and_then(OsStr::to_str) == Some(input.index.as_str()))
    {
        let pinned = files.remove(pos);
        files.insert(0, pinned);
    }
    files
}

/// Basename of the next HTML entry after `position`, or empty when the
/// chapter is the last one.
fn next_chapter(files: &[PathBuf], position: usize) -> String {
    files[position + 1..]
        .iter()
        .find(|p| has_html_extension(p))
        .and_then(|p| p.file_name())
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn has_html_extension(path: &Path) -> bool {
    path.extension().is_some_and(|e| e.eq_ignore_ascii_case("html"))
}

fn file_basename(path: &Path) -> Result<String> {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| {
            Error::Configuration(format!("input entry has no file name: {}", path.display()))
        })
}

fn load_templates(layout: &Path) -> Result<Handlebars<'static>> {
    let mut registry = Handlebars::new();
    for name in TEMPLATE_NAMES {
        let path = layout.join(format!("{name}.hdbs"));
        let source = fs::read_to_string(&path)
            .map_err(|e| io::Error::new(e.kind(), format!("{}: {e}", path.display())))?;
        registry.register_template_string(name, source)?;
    }
    Ok(registry)
}

/// Auxiliary fragment injected into the index chapter only. A layout
/// without one is fine; any other read failure aborts the run.
fn load_extras(layout: &Path) -> Result<String> {
    match fs::read_to_string(layout.join("extras.html")) {
        Ok(text) => Ok(text),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(String::new()),
        Err(e) => Err(e.into()),
    }
}

/// Copy the files of `src` into `dst`, preserving filenames. Not recursive;
/// asset directories are flat.
fn copy_assets(src: &Path, dst: &Path) -> Result<()> {
    fs::create_dir_all(dst)?;
    let mut copied = 0;
    for entry in fs::read_dir(src)
        .map_err(|e| io::Error::new(e.kind(), format!("{}: {e}", src.display())))?
    {
        let entry = entry?;
        if entry.file_type()?.is_file() {
            fs::copy(entry.path(), dst.join(entry.file_name()))?;
            copied += 1;
        }
    }
    log::info!("copied {copied} assets from {}", src.display());
    Ok(())
}
