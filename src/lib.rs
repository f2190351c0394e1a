//! sql2asciidoc: schema documentation from Oracle SQL scripts
//!
//! This library pulls tables, views, columns, comments and grants out of
//! Oracle DDL text and renders them as AsciiDoc, or as a `COMMENT ON` script.

pub mod error;
pub mod model;
pub mod parser;
pub mod render;
mod util;

use std::ffi::{OsStr, OsString};
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Result;
use log::info;

pub use error::Sql2DocError;
pub use model::{build_model as extract_schema, SchemaModel};

/// What kind of document to produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// AsciiDoc tables/views documentation
    #[default]
    AsciiDoc,
    /// `COMMENT ON` statements rebuilt from descriptions
    Comments,
}

/// Options controlling how a SQL script is rendered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Underline character for table and view titles
    pub title_char: char,
    /// Underline character for the "Tables"/"Views" captions.
    /// When set, views are rendered as well as tables.
    pub caption_char: Option<char>,
    pub mode: OutputMode,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            title_char: '~',
            caption_char: None,
            mode: OutputMode::AsciiDoc,
        }
    }
}

impl RenderOptions {
    /// Interpret a title-characters argument.
    ///
    /// One character underlines object titles only (tables rendered alone).
    /// Two or more: the first underlines captions, the second object titles,
    /// and views are rendered too.
    pub fn with_title_chars(mut self, chars: &str) -> Result<Self, Sql2DocError> {
        let mut it = chars.trim().chars();
        match (it.next(), it.next()) {
            (Some(caption), Some(title)) => {
                self.caption_char = Some(caption);
                self.title_char = title;
            }
            (Some(title), None) => {
                self.caption_char = None;
                self.title_char = title;
            }
            _ => {
                return Err(Sql2DocError::InvalidTitleChars {
                    value: chars.to_string(),
                })
            }
        }
        Ok(self)
    }
}

/// Options for converting one SQL script
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// SQL script to read; stdin when `None`
    pub input_path: Option<PathBuf>,
    /// Where to write; see [`resolve_output_path`]
    pub output_path: Option<PathBuf>,
    pub render: RenderOptions,
}

/// Render an AsciiDoc document from an extracted model
pub fn render_asciidoc(model: &SchemaModel, options: &RenderOptions) -> String {
    let mut doc = String::from(render::TOP_COMMENT);

    if let Some(caption_char) = options.caption_char {
        doc.push_str(&render::caption(render::TABLES_CAPTION, caption_char));
    }
    doc.push_str(&render::tables_to_asciidoc(&model.tables, options.title_char));

    if let Some(caption_char) = options.caption_char {
        doc.push_str(&render::caption(render::VIEWS_CAPTION, caption_char));
        doc.push_str(&render::views_to_asciidoc(&model.views, options.title_char));
    }

    // Link titles before the raw view SQL goes in, so it is never rewritten.
    let doc = render::make_title_references(&doc, None);
    render::substitute_inclusions(&doc, &model.verbatim)
}

/// Extract and render `sql` according to `options`
pub fn render_document(sql: &str, options: &RenderOptions) -> String {
    let model = extract_schema(sql);
    info!(
        "Extracted {} tables and {} views",
        model.tables.len(),
        model.views.len()
    );

    match options.mode {
        OutputMode::AsciiDoc => render_asciidoc(&model, options),
        OutputMode::Comments => render::objects_to_comments(&model),
    }
}

/// Decide where output goes: `None` means stdout.
///
/// An explicit `-` is stdout. Without an explicit path, a named input yields
/// `<input stem>.asciidoc` in the current directory and stdin input yields stdout.
pub fn resolve_output_path(input: Option<&Path>, output: Option<&Path>) -> Option<PathBuf> {
    match output {
        Some(path) if path == Path::new("-") => None,
        Some(path) => Some(path.to_path_buf()),
        None => input.map(|input| {
            // Inner dots are kept: `my.schema.sql` -> `my.schema.asciidoc`
            let mut name = input
                .file_stem()
                .map_or_else(|| OsString::from("output"), OsStr::to_os_string);
            name.push(".asciidoc");
            PathBuf::from(name)
        }),
    }
}

/// Read a SQL script, render it and write the result.
///
/// Returns the file written, or `None` when output went to stdout.
pub fn convert(options: ConvertOptions) -> Result<Option<PathBuf>> {
    let sql = match &options.input_path {
        Some(path) => {
            info!("Reading file {} ...", path.display());
            parser::read_sql_file(path)?
        }
        None => {
            info!("Reading SQL from stdin ...");
            parser::read_sql_stdin()?
        }
    };

    let document = render_document(&sql, &options.render);

    let output_path =
        resolve_output_path(options.input_path.as_deref(), options.output_path.as_deref());
    match &output_path {
        Some(path) => {
            info!("Writing file {} ...", path.display());
            std::fs::write(path, &document).map_err(|source| Sql2DocError::OutputWriteError {
                path: path.clone(),
                source,
            })?;
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(document.as_bytes())
                .and_then(|_| stdout.flush())
                .map_err(|source| Sql2DocError::OutputWriteError {
                    path: PathBuf::from("<stdout>"),
                    source,
                })?;
        }
    }

    info!("Done!");
    Ok(output_path)
}
