//! File-level entry points
//!
//! These functions own resource acquisition: they open the input and output,
//! run one [`Parser`] to completion, and let both handles drop on every exit
//! path, including translation failure.

use crate::config::TranslateOptions;
use crate::errors::TranslateError;
use crate::parser::parse::{Parser, TranslationSummary};
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use tracing::info;

/// Translate an in-memory source string.
pub fn translate_str(
    source: &str,
    options: &TranslateOptions,
) -> Result<(String, TranslationSummary), TranslateError> {
    let (summary, out) = Parser::new(source, Vec::new(), options.clone()).translate_file()?;
    // The emitter only ever writes UTF-8 text.
    let text = String::from_utf8_lossy(&out).into_owned();
    Ok((text, summary))
}

/// Translate the file at `src` into `dst`.
pub fn translate_path(
    src: &Path,
    dst: &Path,
    options: &TranslateOptions,
) -> Result<TranslationSummary, TranslateError> {
    info!(src = %src.display(), dst = %dst.display(), "translating");

    let source = fs::read_to_string(src)?;
    let out = BufWriter::new(File::create(dst)?);

    let (summary, _out) = Parser::new(&source, out, options.clone()).translate_file()?;

    info!(
        statements = summary.statements,
        diagnostics = summary.diagnostics.len(),
        "translation complete"
    );
    Ok(summary)
}

/// Output path used when none is given: the input with a `.py` extension.
pub fn default_output_path(src: &Path) -> PathBuf {
    src.with_extension("py")
}
