//! Single-pass line scanner that rewrites one constraint line in place.
//!
//! The scanner never parses TOML. It queues raw lines in a [`LineBuffer`],
//! drains the queue at every `[[...]]` block header, and tracks just enough
//! state to know whether the current block is the `[[constraint]]` or
//! `[[override]]` entry for the target dependency. When the block matches,
//! the buffered `branch`/`version`/`revision` line is swapped for the
//! caller's constraint; every other line reaches the output byte-for-byte.

use crate::engine::LineBuffer;
use crate::error::{PinError, Result};

/// Key/value separator the legacy dep manifest format uses on constraint
/// lines. Lines with any other spacing around `=` pass through unchanged.
const KV_SEPARATOR: &str = " = ";

/// The kind of pin to apply to the matched dependency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Constraint {
    Branch(String),
    Version(String),
    Revision(String),
}

impl Constraint {
    /// Picks the first supplied value, preferring branch over version over
    /// revision. Callers should pass at most one.
    pub fn select(
        branch: Option<String>,
        version: Option<String>,
        revision: Option<String>,
    ) -> Option<Self> {
        branch
            .map(Constraint::Branch)
            .or(version.map(Constraint::Version))
            .or(revision.map(Constraint::Revision))
    }

    fn key(&self) -> &'static str {
        match self {
            Constraint::Branch(_) => "branch",
            Constraint::Version(_) => "version",
            Constraint::Revision(_) => "revision",
        }
    }

    fn value(&self) -> &str {
        match self {
            Constraint::Branch(v) | Constraint::Version(v) | Constraint::Revision(v) => v,
        }
    }
}

/// The dependency and constraint the caller wants applied.
#[derive(Debug, Clone)]
pub struct Target {
    /// Quoted, lowercased import path, matching how the manifest stores
    /// `name` values.
    name: String,
    constraint: Constraint,
}

impl Target {
    pub fn new(name: &str, constraint: Constraint) -> Result<Self> {
        let trimmed = name.trim();
        if trimmed.is_empty() || trimmed == "\"\"" {
            return Err(PinError::InvalidName(
                name.to_string(),
                "cannot be empty".to_string(),
            ));
        }

        let mut name = trimmed.to_ascii_lowercase();
        if !name.starts_with('"') {
            name = format!("\"{name}\"");
        }

        Ok(Self { name, constraint })
    }

    /// Normalized name as it appears as a TOML string value.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The replacement constraint line at the given indentation.
    fn constraint_line(&self, indent: &str) -> String {
        format!(
            "{indent}{} = \"{}\"",
            self.constraint.key(),
            self.constraint.value()
        )
    }
}

/// Per-block scan state, rebuilt from scratch at every `[[...]]` header.
#[derive(Debug, Clone, Copy, Default)]
struct ScanState {
    /// Inside a `[[constraint]]` or `[[override]]` block.
    in_constraint: bool,
    /// The current block's `name` equals the target dependency.
    matched: bool,
}

impl ScanState {
    fn at_header(header: &str) -> Self {
        Self {
            in_constraint: header == "[[constraint]]" || header == "[[override]]",
            matched: false,
        }
    }
}

/// Rewrites the matched constraint line and passes everything else through.
///
/// `lines` yields raw manifest lines; a read error aborts immediately with
/// nothing emitted. A dependency that never matches is not an error; the
/// output is then identical to the input.
pub fn rewrite<I>(lines: I, target: &Target) -> Result<Vec<String>>
where
    I: IntoIterator<Item = std::io::Result<String>>,
{
    let mut buf = LineBuffer::new();
    let mut out = Vec::new();
    let mut state = ScanState::default();

    for line in lines {
        let line = line?;
        log::trace!("{line}");
        buf.push(line.clone());

        let text = line.trim();
        if text.is_empty() {
            continue;
        }

        if text.starts_with("[[") {
            // Block boundary: flush everything pending, header included,
            // and start a fresh state for the new block.
            buf.drain_into(&mut out);
            state = ScanState::at_header(text);
        } else if text.starts_with('[') || text.starts_with('#') {
            // Plain table headers and comments carry no constraint state.
        } else {
            let parts: Vec<&str> = text.split(KV_SEPARATOR).collect();
            let &[raw_key, raw_value] = parts.as_slice() else {
                // Not a recognizable key/value line; pass through as-is.
                continue;
            };
            let key = raw_key.trim().to_ascii_lowercase();
            let value = raw_value.trim().to_ascii_lowercase();

            match key.as_str() {
                "name" => {
                    if state.in_constraint && value == target.name {
                        state.matched = true;
                    }
                }
                "branch" | "version" | "revision" if state.matched => {
                    let replacement = target.constraint_line(indent_of(&line, raw_key.trim()));
                    log::debug!("replacing `{}` with `{}`", text, replacement.trim_start());
                    buf.replace_back(replacement);
                }
                _ => {}
            }
        }
    }

    buf.drain_into(&mut out);
    Ok(out)
}

/// Prefix of `line` up to (not including) the first occurrence of `key`.
fn indent_of<'a>(line: &'a str, key: &str) -> &'a str {
    match line.find(key) {
        Some(pos) => &line[..pos],
        None => "",
    }
}
