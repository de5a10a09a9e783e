#![allow(missing_docs)]

//! Unified-diff encoder producing byte-identical `git diff` output.
//!
//! The encoder consumes an abstract patch whose file transitions are
//! already decomposed into equal/add/delete chunks, and streams the
//! textual unified diff to a byte sink: file headers, `@@` hunks with shared
//! context, no-newline markers, mode changes, renames, binary sentinels,
//! and optional ANSI colour framing. Diff computation, blob hashing and
//! file I/O stay with the caller; see the [`Patch`] family of traits for
//! the consumed surface.

use std::io::Write;

use error_set::error_set;

mod color;
mod header;
mod hunk;
mod model;

pub use color::{ColorConfig, ColorRole, ansi};
pub use model::{Chunk, File, FileMode, FilePatch, ObjectId, Operation, Patch};

/// Context lines shown around a change when the caller has no preference
pub const DEFAULT_CONTEXT_LINES: usize = 3;

error_set! {
    /// Errors produced while streaming a patch to the sink. Output stops
    /// at the first failed write; no other failure mode exists.
    EncodeError = {
        SinkWrite(std::io::Error),
    };
}

/// Streams patches to a byte sink in the unified diff format.
///
/// Construction fixes the sink and configuration; `encode` can then be
/// called for any number of patches and no other state survives between
/// calls.
///
/// # Examples
/// ```
/// use git_unidiff::{DEFAULT_CONTEXT_LINES, UnifiedEncoder};
///
/// let mut out = Vec::new();
/// let encoder = UnifiedEncoder::new(&mut out, DEFAULT_CONTEXT_LINES);
/// ```
pub struct UnifiedEncoder<W> {
    sink: W,
    context_lines: usize,
    src_prefix: String,
    dst_prefix: String,
    color: ColorConfig,
}

impl<W: Write> UnifiedEncoder<W> {
    /// Create an encoder around a sink with the given context window
    pub fn new(sink: W, context_lines: usize) -> Self {
        UnifiedEncoder {
            sink,
            context_lines,
            src_prefix: "a/".to_string(),
            dst_prefix: "b/".to_string(),
            color: ColorConfig::plain(),
        }
    }

    /// Replace the default `a/` source label prefix
    pub fn with_src_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.src_prefix = prefix.into();
        self
    }

    /// Replace the default `b/` destination label prefix
    pub fn with_dst_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.dst_prefix = prefix.into();
        self
    }

    /// Set the colour configuration
    pub fn with_color(mut self, color: ColorConfig) -> Self {
        self.color = color;
        self
    }

    /// Encode one patch: the message, then every file patch in order.
    ///
    /// Returns the first sink error and abandons the remaining output;
    /// whatever was written is a prefix of the intended output.
    pub fn encode<P: Patch>(&mut self, patch: &P) -> Result<(), EncodeError> {
        let message = patch.message();
        if !message.is_empty() {
            self.sink.write_all(message.as_bytes())?;
            if !message.ends_with('\n') {
                self.sink.write_all(b"\n")?;
            }
        }

        for file_patch in patch.file_patches() {
            self.encode_file_patch(file_patch)?;
        }

        Ok(())
    }

    fn encode_file_patch<F: FilePatch>(&mut self, file_patch: &F) -> Result<(), EncodeError> {
        let (from, to) = file_patch.files();
        if from.is_none() && to.is_none() {
            return Ok(());
        }

        let lines = header::header_lines(file_patch, &self.src_prefix, &self.dst_prefix);
        self.write_meta_block(&lines)?;

        if file_patch.is_binary() {
            return Ok(());
        }

        let hunks = hunk::HunkBuilder::new(self.context_lines).build(file_patch.chunks());
        if hunks.is_empty() {
            return Ok(());
        }
        let mut out = String::new();
        for hunk in &hunks {
            hunk.write_into(&mut out, &self.color);
        }
        self.sink.write_all(out.as_bytes())?;
        Ok(())
    }

    /// Write a header block wrapped in the Meta colour role, with the
    /// reset placed before the final newline
    fn write_meta_block(&mut self, lines: &[String]) -> Result<(), EncodeError> {
        if lines.is_empty() {
            return Ok(());
        }
        let mut out = String::new();
        out.push_str(self.color.prefix(ColorRole::Meta));
        out.push_str(&lines.join("\n"));
        out.push_str(self.color.reset(ColorRole::Meta));
        out.push('\n');
        self.sink.write_all(out.as_bytes())?;
        Ok(())
    }
}
