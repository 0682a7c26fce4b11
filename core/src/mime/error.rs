/*
 * error.rs
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

//! Extraction errors. All fatal; malformed input is a terminal condition.

use std::fmt;
use std::io;

/// Errors from multipart/signed extraction or artifact writing.
#[derive(Debug)]
pub enum ExtractError {
    /// No blank-line separator between the top-level headers and the body.
    MalformedMessage,
    /// No Content-Type header in the top-level header block.
    MissingHeader,
    /// Top-level Content-Type is not multipart/signed.
    UnexpectedMediaType,
    /// No usable boundary parameter on the multipart/signed Content-Type.
    MissingBoundary,
    /// Fewer than two boundary delimiter lines in the body (count carried).
    InsufficientBoundaries(usize),
    /// No closing (`--token--`) delimiter line anywhere in the body.
    NoClosingBoundary,
    /// Closing delimiter seen before two parts were delimited (count carried).
    NotEnoughParts(usize),
    /// Input unreadable or output directory/files unwritable.
    Io(io::Error),
}

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractError::MalformedMessage => {
                write!(f, "could not find end of top-level header block")
            }
            ExtractError::MissingHeader => {
                write!(f, "top-level Content-Type header not found")
            }
            ExtractError::UnexpectedMediaType => {
                write!(f, "top-level message is not multipart/signed")
            }
            ExtractError::MissingBoundary => {
                write!(f, "could not find boundary parameter on multipart/signed")
            }
            ExtractError::InsufficientBoundaries(n) => {
                write!(
                    f,
                    "found {} boundary delimiter(s) inside multipart/signed body, need at least 2",
                    n
                )
            }
            ExtractError::NoClosingBoundary => {
                write!(f, "closing boundary not found (no -- after boundary)")
            }
            ExtractError::NotEnoughParts(n) => {
                write!(
                    f,
                    "only {} part(s) before the closing boundary, need 2",
                    n
                )
            }
            ExtractError::Io(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ExtractError {}

impl From<io::Error> for ExtractError {
    fn from(e: io::Error) -> Self {
        ExtractError::Io(e)
    }
}
