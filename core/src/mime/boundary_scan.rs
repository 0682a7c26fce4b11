/*
 * boundary_scan.rs
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

//! Boundary delimiter index: offsets of every `--token` / `--token--` line
//! in a multipart body, in document order.

use crate::mime::error::ExtractError;
use crate::mime::utils::is_horizontal_ws;

/// One boundary delimiter line: byte span within the body (line terminator
/// included) and whether it is the closing (`--token--`) form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelimiterMark {
    pub start: usize,
    pub end: usize,
    pub closing: bool,
}

/// Walks every line of the body and records each delimiter line for this
/// token: `--token`, optionally `--`, optional trailing space/tab, CRLF or
/// LF terminator, anchored at line start. A valid two-part body needs at
/// least two marks; fewer is an error.
pub fn scan_delimiters(body: &[u8], token: &[u8]) -> Result<Vec<DelimiterMark>, ExtractError> {
    let mut marks = Vec::new();
    let mut pos = 0;
    while pos < body.len() {
        let nl = match body[pos..].iter().position(|&b| b == b'\n') {
            Some(i) => pos + i,
            // an unterminated final line is not a delimiter line
            None => break,
        };
        if let Some(closing) = match_delimiter_line(&body[pos..=nl], token) {
            marks.push(DelimiterMark {
                start: pos,
                end: nl + 1,
                closing,
            });
        }
        pos = nl + 1;
    }
    if marks.len() < 2 {
        return Err(ExtractError::InsufficientBoundaries(marks.len()));
    }
    Ok(marks)
}

/// Some(is_closing) when the line (terminator included) is a delimiter line
/// for this token.
fn match_delimiter_line(line: &[u8], token: &[u8]) -> Option<bool> {
    let rest = line.strip_prefix(b"--")?;
    let rest = rest.strip_prefix(token)?;
    let (closing, rest) = match rest.strip_prefix(b"--") {
        Some(r) => (true, r),
        None => (false, rest),
    };
    let mut i = 0;
    while i < rest.len() && is_horizontal_ws(rest[i]) {
        i += 1;
    }
    match &rest[i..] {
        b"\n" | b"\r\n" => Some(closing),
        _ => None,
    }
}
