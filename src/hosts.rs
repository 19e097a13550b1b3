//! Hosts file editing: the `## start gsd` / `## end gsd` managed block.
//!
//! Everything between the two sentinel lines belongs to gsd. Each write strips
//! the existing block before inserting a new one, so there is never more than
//! one block that gsd put there.

use std::fs::{File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::ops::Range;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{GsdError, HostsError, Result};

/// Start sentinel; the active mode name follows it on the same line.
pub const START_MARKER: &str = "## start gsd";
/// End sentinel.
pub const END_MARKER: &str = "## end gsd";

/// Edits one hosts file in place.
#[derive(Debug, Clone)]
pub struct HostsEditor {
    path: PathBuf,
}

impl HostsEditor {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replace the managed block with one for `mode` holding `lines`.
    ///
    /// With `mode` of `None` (or empty) the block is only removed. Fails with
    /// [`GsdError::ModeAlreadyActive`] if `mode` is already the active block,
    /// leaving the file untouched.
    pub fn apply(&self, lines: &[String], mode: Option<&str>) -> Result<()> {
        let mode = mode.filter(|m| !m.is_empty());
        let mut file = OpenOptions::new()
            .read(true)
            .write(true)
            .open(&self.path)
            .map_err(|e| self.io_error(e))?;
        let mut content = String::new();
        file.read_to_string(&mut content)
            .map_err(|e| self.io_error(e))?;

        let current = find_block(&content)?;
        if let (Some(mode), Some(block)) = (mode, &current) {
            if block.mode == mode {
                return Err(GsdError::ModeAlreadyActive(mode.to_string()));
            }
        }

        let mut updated = match current {
            Some(block) => splice_out(&content, block.span),
            None => content.clone(),
        };
        if let Some(mode) = mode {
            append_block(&mut updated, mode, lines);
        }

        if updated == content {
            debug!(path = %self.path.display(), "hosts file unchanged");
            return Ok(());
        }
        self.rewrite(&mut file, &updated)?;
        match mode {
            Some(mode) => info!(mode, entries = lines.len(), "managed block written"),
            None => info!("managed block removed"),
        }
        Ok(())
    }

    /// Remove the managed block, inserting nothing.
    pub fn clear(&self) -> Result<()> {
        self.apply(&[], None)
    }

    /// Mode named by the managed block currently in the file.
    pub fn active_mode(&self) -> Result<Option<String>> {
        let content = std::fs::read_to_string(&self.path).map_err(|e| self.io_error(e))?;
        Ok(find_block(&content)?.map(|b| b.mode.to_string()))
    }

    /// Overwrite from the start, then cut off any leftover tail of the old content.
    fn rewrite(&self, file: &mut File, content: &str) -> Result<()> {
        file.seek(SeekFrom::Start(0))
            .map_err(|e| self.io_error(e))?;
        file.write_all(content.as_bytes())
            .map_err(|e| self.io_error(e))?;
        file.set_len(content.len() as u64)
            .map_err(|e| self.io_error(e))?;
        file.sync_all().map_err(|e| self.io_error(e))?;
        Ok(())
    }

    fn io_error(&self, source: io::Error) -> GsdError {
        HostsError::Io {
            path: self.path.clone(),
            source,
        }
        .into()
    }
}

/// Strip the first managed block from `content`.
///
/// Removes the line break before the start sentinel through the text of the
/// first end sentinel line after it, keeping that line's own terminator. A
/// block at the very start of the file takes its terminator instead. Content
/// without a start sentinel comes back unchanged; a start sentinel with no end
/// sentinel after it is an error.
pub fn remove_managed_block(content: &str) -> std::result::Result<String, HostsError> {
    Ok(match find_block(content)? {
        Some(block) => splice_out(content, block.span),
        None => content.to_string(),
    })
}

/// Append the block for a mode to `content`.
///
/// Mirrors [`remove_managed_block`]: after non-empty content the block is led by
/// a newline and has no trailing one; in an empty file it has a trailing newline.
fn append_block(content: &mut String, mode: &str, lines: &[String]) {
    let at_start = content.is_empty();
    if !at_start {
        content.push('\n');
    }
    content.push_str(START_MARKER);
    content.push(' ');
    content.push_str(mode);
    content.push('\n');
    for line in lines {
        content.push_str(line);
        content.push('\n');
    }
    content.push_str(END_MARKER);
    if at_start {
        content.push('\n');
    }
}

#[derive(Debug, PartialEq, Eq)]
struct ManagedBlock<'a> {
    mode: &'a str,
    /// Byte range to delete: the line break ahead of the start line through the
    /// end sentinel text, or whole lines when the block opens the file.
    span: Range<usize>,
}

fn find_block(content: &str) -> std::result::Result<Option<ManagedBlock<'_>>, HostsError> {
    let mut offset = 0;
    let mut start: Option<(usize, &str)> = None;
    for line in content.split_inclusive('\n') {
        let text = line.trim_end_matches(['\n', '\r']);
        match start {
            None => {
                if let Some(mode) = start_sentinel_mode(text) {
                    start = Some((offset, mode));
                }
            }
            Some((begin, mode)) if text.starts_with(END_MARKER) => {
                let span = if begin == 0 {
                    0..offset + line.len()
                } else {
                    // The line before ends in '\n', possibly "\r\n".
                    let newline = if content[..begin].ends_with("\r\n") { 2 } else { 1 };
                    begin - newline..offset + text.len()
                };
                return Ok(Some(ManagedBlock { mode, span }));
            }
            Some(_) => {}
        }
        offset += line.len();
    }
    match start {
        Some(_) => Err(HostsError::UnterminatedBlock),
        None => Ok(None),
    }
}

fn start_sentinel_mode(line: &str) -> Option<&str> {
    let rest = line.strip_prefix(START_MARKER)?;
    if rest.is_empty() {
        return Some("");
    }
    rest.strip_prefix([' ', '\t']).map(str::trim)
}

fn splice_out(content: &str, span: Range<usize>) -> String {
    let mut out = String::with_capacity(content.len() - span.len());
    out.push_str(&content[..span.start]);
    out.push_str(&content[span.end..]);
    out
}
