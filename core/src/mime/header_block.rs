/*
 * header_block.rs
 * Copyright (C) 2026 Chris Burdess
 *
 * This file is part of Sigillo, a raw-safe PGP/MIME signature extractor.
 *
 * Sigillo is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * Sigillo is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with Sigillo.  If not, see <http://www.gnu.org/licenses/>.
 */

//! Header/body split on the first blank line (CRLF preferred, LF fallback).

use crate::mime::error::ExtractError;

/// Line-ending style of the discovered header/body separator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnding {
    Crlf,
    Lf,
}

/// Top-level split: header block, body, and the separator style found.
/// Both sides are untouched sub-slices of the input.
#[derive(Debug)]
pub struct HeaderSplit<'a> {
    pub headers: &'a [u8],
    pub body: &'a [u8],
    pub ending: LineEnding,
}

/// Splits a raw message at the first blank line. A CRLF separator anywhere in
/// the message wins over an LF one.
pub fn find_header_block(raw: &[u8]) -> Result<HeaderSplit<'_>, ExtractError> {
    if let Some(i) = find(raw, b"\r\n\r\n") {
        return Ok(HeaderSplit {
            headers: &raw[..i],
            body: &raw[i + 4..],
            ending: LineEnding::Crlf,
        });
    }
    if let Some(i) = find(raw, b"\n\n") {
        return Ok(HeaderSplit {
            headers: &raw[..i],
            body: &raw[i + 2..],
            ending: LineEnding::Lf,
        });
    }
    Err(ExtractError::MalformedMessage)
}

/// Splits a MIME part into (headers, body) with the same blank-line rule.
/// A part with no blank line is all body with empty headers.
pub fn split_part(part: &[u8]) -> (&[u8], &[u8]) {
    if let Some(i) = find(part, b"\r\n\r\n") {
        return (&part[..i], &part[i + 4..]);
    }
    if let Some(i) = find(part, b"\n\n") {
        return (&part[..i], &part[i + 2..]);
    }
    (&[], part)
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}
