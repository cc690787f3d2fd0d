//! Locating and rewriting image references in markdown source.
//!
//! Two syntaxes are recognized, in priority order:
//!
//! * wiki embeds, `![[path/name.png]]` or `![[name.png|300]]`
//! * inline images, `![alt](path/name.png)` or `![alt|300](name.png)`
//!
//! The whole document is searched for a wiki embed first; inline images are
//! only considered when no wiki embed names the file. Only the first match is
//! rewritten, so a file embedded twice always resolves to its first wiki
//! embed.

use std::ops::Range;

use percent_encoding::percent_decode_str;
use regex::Regex;

use crate::{
    editor::{HostEditor, TextEdit, apply_edit},
    error::RewriteError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceSyntax {
    Wiki,
    Markdown,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceMatch<'a> {
    pub syntax: ReferenceSyntax,
    pub span: Range<usize>,
    /// Link target as written, ending in the file name.
    pub path: &'a str,
    /// Alt text with any `|width` suffix removed. Empty for wiki embeds.
    pub alt: &'a str,
    pub existing_width: Option<u32>,
}

impl ReferenceMatch<'_> {
    pub fn rewrite(&self, width: u32) -> String {
        match self.syntax {
            ReferenceSyntax::Wiki => format!("![[{}|{width}]]", self.path),
            ReferenceSyntax::Markdown => format!("![{}|{width}]({})", self.alt, self.path),
        }
    }
}

/// Last path segment of an image `src`, percent-decoded. Escapes that decode
/// to invalid UTF-8 yield `None`; a `%` not followed by two hex digits is kept
/// as written.
pub fn file_name_from_source(source: &str) -> Option<String> {
    let segment = source.rsplit('/').next()?;
    if segment.is_empty() {
        return None;
    }
    let decoded = percent_decode_str(segment).decode_utf8().ok()?;
    Some(decoded.into_owned()).filter(|name| !name.is_empty())
}

fn wiki_pattern(file_name: &str) -> Result<Regex, RewriteError> {
    let pattern = format!(r"!\[\[([^|\]]*?{})(?:\|([0-9]+))?\]\]", regex::escape(file_name));
    Regex::new(pattern.as_str()).map_err(|e| RewriteError::Pattern(e.to_string()))
}

fn markdown_pattern(file_name: &str) -> Result<Regex, RewriteError> {
    let pattern = format!(r"!\[([^\]]*?)\]\(([^)]*?{})\)", regex::escape(file_name));
    Regex::new(pattern.as_str()).map_err(|e| RewriteError::Pattern(e.to_string()))
}

fn split_alt_width(alt: &str) -> (&str, Option<u32>) {
    let Some((head, tail)) = alt.rsplit_once('|') else {
        return (alt, None);
    };
    if tail.is_empty() || !tail.bytes().all(|b| b.is_ascii_digit()) {
        return (alt, None);
    }
    (head, tail.parse().ok())
}

pub fn find_reference<'a>(text: &'a str, file_name: &str) -> Result<Option<ReferenceMatch<'a>>, RewriteError> {
    if let Some(caps) = wiki_pattern(file_name)?.captures(text) {
        let (Some(whole), Some(path)) = (caps.get(0), caps.get(1)) else {
            return Ok(None);
        };
        return Ok(Some(ReferenceMatch {
            syntax: ReferenceSyntax::Wiki,
            span: whole.range(),
            path: path.as_str(),
            alt: "",
            existing_width: caps.get(2).and_then(|m| m.as_str().parse().ok()),
        }));
    }

    if let Some(caps) = markdown_pattern(file_name)?.captures(text) {
        let (Some(whole), Some(alt), Some(path)) = (caps.get(0), caps.get(1), caps.get(2)) else {
            return Ok(None);
        };
        let (alt, existing_width) = split_alt_width(alt.as_str());
        return Ok(Some(ReferenceMatch {
            syntax: ReferenceSyntax::Markdown,
            span: whole.range(),
            path: path.as_str(),
            alt,
            existing_width,
        }));
    }

    Ok(None)
}

/// Plans the single edit that gives the image at `source` the new width.
pub fn plan_resize(text: &str, source: &str, width: u32) -> Result<TextEdit, RewriteError> {
    let file_name = file_name_from_source(source).ok_or_else(|| RewriteError::UnresolvableFileName {
        source_text: source.to_string(),
    })?;

    let found = find_reference(text, file_name.as_str())?
        .ok_or(RewriteError::NoReference { file_name })?;

    Ok(TextEdit {
        start: found.span.start,
        end: found.span.end,
        replacement: found.rewrite(width),
    })
}

/// Rewrites the first reference to the image in the active document.
pub fn update_image_size(
    editor: Option<&mut dyn HostEditor>,
    source: Option<&str>,
    width: u32,
) -> Result<TextEdit, RewriteError> {
    crate::profile_scope!("reference.update_image_size");

    let editor = editor.ok_or(RewriteError::NoActiveDocument)?;
    let source = source.filter(|s| !s.is_empty()).ok_or(RewriteError::MissingSource)?;

    let text = editor.text();
    let edit = plan_resize(text.as_str(), source, width)?;
    apply_edit(editor, &edit);
    log::debug!(
        "rewrote image reference at {}..{} to '{}'",
        edit.start,
        edit.end,
        edit.replacement
    );
    Ok(edit)
}
