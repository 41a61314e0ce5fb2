// src/modernize/mod.rs
//! Cosmetic "modernized" rewrites for before/after display.
//!
//! A fixed list of regex substitutions per language family. The output is
//! for showing what a migration might look like; it does not preserve
//! behavior and is not meant to be compiled or run.

mod php;
mod script;

use rayon::prelude::*;
use regex::{Captures, Regex};
use serde::Serialize;
use std::sync::LazyLock;

use crate::diff::{line_delta, LineDelta};
use crate::lang::{Family, Lang};
use crate::types::SourceFile;

/// Label used when the extension is not recognised.
pub const PLAIN_TEXT: &str = "text";

/// How a matched span is replaced.
pub(crate) enum Replacement {
    /// `regex` replacement syntax (`${1}`, `$$`).
    Template(&'static str),
    /// Built from the captures and the full source text.
    With(fn(&Captures<'_>, &str) -> String),
}

pub(crate) struct Rewrite {
    pub name: &'static str,
    pub pattern: &'static str,
    pub replacement: Replacement,
}

struct CompiledRewrite {
    rewrite: &'static Rewrite,
    regex: Regex,
}

fn compile(rewrites: &'static [Rewrite]) -> Vec<CompiledRewrite> {
    rewrites
        .iter()
        .map(|rewrite| CompiledRewrite {
            rewrite,
            regex: Regex::new(rewrite.pattern)
                .unwrap_or_else(|_| panic!("Invalid Regex: {}", rewrite.name)),
        })
        .collect()
}

static SCRIPT: LazyLock<Vec<CompiledRewrite>> = LazyLock::new(|| compile(script::REWRITES));
static PHP: LazyLock<Vec<CompiledRewrite>> = LazyLock::new(|| compile(php::REWRITES));

/// An original file next to its rewrite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversion {
    pub filename: String,
    pub language: &'static str,
    pub original_code: String,
    pub modern_code: String,
    #[serde(flatten)]
    pub delta: LineDelta,
}

impl Conversion {
    #[must_use]
    pub fn is_unchanged(&self) -> bool {
        self.original_code == self.modern_code
    }
}

fn apply(rewrites: &[CompiledRewrite], code: &str) -> String {
    rewrites.iter().fold(code.to_string(), |text, compiled| {
        let replaced = match compiled.rewrite.replacement {
            Replacement::Template(template) => compiled.regex.replace_all(&text, template),
            Replacement::With(build) => compiled.regex.replace_all(&text, |caps: &Captures<'_>| build(caps, &text)),
        };
        replaced.into_owned()
    })
}

/// Rewrites `code` according to the language implied by `filename`.
#[must_use]
pub fn modernize(code: &str, filename: &str) -> Conversion {
    let lang = Lang::from_filename(filename);
    let modern_code = match lang.map(Lang::family) {
        Some(Family::Script) => apply(&SCRIPT, code),
        Some(Family::Php) => apply(&PHP, code),
        Some(Family::Other) | None => code.to_string(),
    };

    log::debug!("modernized {filename}");

    Conversion {
        filename: filename.to_string(),
        language: lang.and_then(Lang::slug).unwrap_or(PLAIN_TEXT),
        delta: line_delta(code, &modern_code),
        original_code: code.to_string(),
        modern_code,
    }
}

/// Rewrites each file independently; output order follows input order.
#[must_use]
pub fn modernize_batch(files: &[SourceFile]) -> Vec<Conversion> {
    files
        .par_iter()
        .map(|file| modernize(&file.code, &file.path))
        .collect()
}
