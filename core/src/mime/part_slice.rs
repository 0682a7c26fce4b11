/*
 * part_slice.rs
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

//! Carves the two multipart/signed child parts out of the body using the
//! delimiter index. Byte ranges only; nothing is rebuilt.

use crate::mime::boundary_scan::DelimiterMark;
use crate::mime::error::ExtractError;
use crate::mime::utils::strip_leading_newline;

/// Raw (headers + body) byte ranges of the two child parts. Mark #0 opens
/// the signed entity, mark #1 opens the signature container, and the first
/// closing mark ends it. Preamble, epilogue, and any marks past the closing
/// one are ignored.
pub fn slice_signed_parts<'a>(
    body: &'a [u8],
    marks: &[DelimiterMark],
) -> Result<(&'a [u8], &'a [u8]), ExtractError> {
    let closing_idx = marks
        .iter()
        .position(|m| m.closing)
        .ok_or(ExtractError::NoClosingBoundary)?;
    if closing_idx < 2 {
        return Err(ExtractError::NotEnoughParts(closing_idx));
    }
    let first = &body[marks[0].end..marks[1].start];
    let second = &body[marks[1].end..marks[closing_idx].start];
    // tolerate one spurious blank line straight after a delimiter line
    Ok((strip_leading_newline(first), strip_leading_newline(second)))
}
