/*
 * lib.rs
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

//! Sigillo core: extract the exact signed bytes and the detached signature
//! from a multipart/signed (RFC 1847) email message. The signed entity is
//! reproduced byte-for-byte so an external PGP tool can verify it.

pub mod artifacts;
pub mod mime;

pub use artifacts::{write_artifacts, ArtifactPaths};
pub use mime::{extract_signed_parts, ExtractError, SignedParts};
