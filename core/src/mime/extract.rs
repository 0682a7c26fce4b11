/*
 * extract.rs
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

//! Extraction pipeline: raw multipart/signed message in, finalized signed
//! entity and detached signature armor out. Strictly linear, single pass,
//! zero-copy until the caller writes the results.

use crate::mime::boundary_scan::scan_delimiters;
use crate::mime::content_type::extract_boundary;
use crate::mime::error::ExtractError;
use crate::mime::header_block::{find_header_block, split_part};
use crate::mime::part_slice::slice_signed_parts;
use crate::mime::utils::trim_final_newline;

/// Finalized payloads of a multipart/signed message, borrowed from the input
/// buffer. `message` is the signed entity exactly as sent (its own headers +
/// body); `signature` is the ASCII-armored block with the signature part's
/// headers removed. Each has one trailing line terminator trimmed.
#[derive(Debug)]
pub struct SignedParts<'a> {
    pub message: &'a [u8],
    pub signature: &'a [u8],
}

/// Extracts the signed entity and detached signature from a raw
/// multipart/signed message. No byte of either payload is re-encoded,
/// re-wrapped, or normalized; signature verification depends on it.
pub fn extract_signed_parts(raw: &[u8]) -> Result<SignedParts<'_>, ExtractError> {
    let split = find_header_block(raw)?;
    let boundary = extract_boundary(split.headers)?;
    let marks = scan_delimiters(split.body, &boundary)?;
    let (signed_entity, signature_container) = slice_signed_parts(split.body, &marks)?;
    let (_sig_headers, armor) = split_part(signature_container);
    Ok(SignedParts {
        message: trim_final_newline(signed_entity),
        signature: trim_final_newline(armor),
    })
}
