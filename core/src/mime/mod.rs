/*
 * mod.rs
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

//! Raw-safe multipart/signed parsing: offset-based boundary scanning and
//! byte-exact part slicing, no re-serialization.

mod boundary_scan;
mod content_type;
mod error;
mod extract;
mod header_block;
mod part_slice;
mod utils;

pub use boundary_scan::{scan_delimiters, DelimiterMark};
pub use content_type::extract_boundary;
pub use error::ExtractError;
pub use extract::{extract_signed_parts, SignedParts};
pub use header_block::{find_header_block, split_part, HeaderSplit, LineEnding};
pub use part_slice::slice_signed_parts;
pub use utils::{strip_leading_newline, trim_final_newline};
