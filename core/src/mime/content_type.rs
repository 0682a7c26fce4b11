/*
 * content_type.rs
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

//! Top-level Content-Type: header unfolding, media type check, boundary
//! parameter. No normalization beyond stripping the quotes around a quoted
//! boundary value.

use crate::mime::error::ExtractError;

/// Boundary token of the top-level multipart/signed Content-Type header.
/// The token is returned byte-for-byte as written, quotes excluded.
pub fn extract_boundary(headers: &[u8]) -> Result<Vec<u8>, ExtractError> {
    let unfolded = unfold_header_lines(headers);
    let value = content_type_value(&unfolded).ok_or(ExtractError::MissingHeader)?;
    if !contains_ignore_case(&value, b"multipart/signed") {
        return Err(ExtractError::UnexpectedMediaType);
    }
    boundary_param(&value)
        .map(|t| t.to_vec())
        .ok_or(ExtractError::MissingBoundary)
}

/// Unfolds header lines (RFC 5322 folding): a line starting with space or tab
/// continues the previous logical line and is appended to it whole, leading
/// whitespace included. Left-fold over lines; the input bytes are not touched.
fn unfold_header_lines(headers: &[u8]) -> Vec<Vec<u8>> {
    let mut unfolded: Vec<Vec<u8>> = Vec::new();
    for line in headers.split(|&b| b == b'\n') {
        let line = line.strip_suffix(b"\r").unwrap_or(line);
        match unfolded.last_mut() {
            Some(prev) if line.first().is_some_and(|&b| b == b' ' || b == b'\t') => {
                prev.extend_from_slice(line);
            }
            _ => unfolded.push(line.to_vec()),
        }
    }
    unfolded
}

/// Value of the first Content-Type logical line (case-insensitive name),
/// surrounding whitespace trimmed.
fn content_type_value(unfolded: &[Vec<u8>]) -> Option<Vec<u8>> {
    const NAME: &[u8] = b"content-type:";
    for line in unfolded {
        if line.len() >= NAME.len() && line[..NAME.len()].eq_ignore_ascii_case(NAME) {
            return Some(trim_ws(&line[NAME.len()..]).to_vec());
        }
    }
    None
}

/// Scans the header value for a `boundary=` parameter (case-insensitive).
/// The value may be wrapped in double quotes; otherwise it runs to the first
/// `"`, `;`, whitespace, or end of value. An empty value is not a match and
/// the scan moves on.
fn boundary_param(value: &[u8]) -> Option<&[u8]> {
    const PARAM: &[u8] = b"boundary=";
    let mut i = 0;
    while i + PARAM.len() <= value.len() {
        if !value[i..i + PARAM.len()].eq_ignore_ascii_case(PARAM) {
            i += 1;
            continue;
        }
        let mut j = i + PARAM.len();
        if value.get(j) == Some(&b'"') {
            j += 1;
        }
        let start = j;
        while j < value.len()
            && value[j] != b'"'
            && value[j] != b';'
            && !value[j].is_ascii_whitespace()
        {
            j += 1;
        }
        if j > start {
            return Some(&value[start..j]);
        }
        i += 1;
    }
    None
}

fn contains_ignore_case(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.len() >= needle.len()
        && haystack.windows(needle.len()).any(|w| w.eq_ignore_ascii_case(needle))
}

fn trim_ws(b: &[u8]) -> &[u8] {
    let start = b.iter().position(|c| !c.is_ascii_whitespace()).unwrap_or(b.len());
    let end = b.iter().rposition(|c| !c.is_ascii_whitespace()).map_or(start, |i| i + 1);
    &b[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unquoted_boundary() {
        let h = b"MIME-Version: 1.0\r\nContent-Type: multipart/signed; boundary=abc123";
        assert_eq!(extract_boundary(h).unwrap(), b"abc123");
    }

    #[test]
    fn quoted_boundary_equals_unquoted() {
        let q = b"Content-Type: multipart/signed; boundary=\"abc123\"";
        let u = b"Content-Type: multipart/signed; boundary=abc123";
        assert_eq!(extract_boundary(q).unwrap(), extract_boundary(u).unwrap());
    }

    #[test]
    fn folded_content_type_line() {
        let h = b"Content-Type: multipart/signed;\r\n micalg=pgp-sha256;\r\n\tboundary=\"b1_xyz\"\r\nSubject: hi";
        assert_eq!(extract_boundary(h).unwrap(), b"b1_xyz");
    }

    #[test]
    fn header_name_and_parameter_are_case_insensitive() {
        let h = b"content-TYPE: Multipart/Signed; BOUNDARY=MiXeD";
        // token case is preserved even though the lookup is not
        assert_eq!(extract_boundary(h).unwrap(), b"MiXeD");
    }

    #[test]
    fn boundary_before_other_parameters() {
        let h = b"Content-Type: multipart/signed; boundary=abc; protocol=\"application/pgp-signature\"";
        assert_eq!(extract_boundary(h).unwrap(), b"abc");
    }

    #[test]
    fn missing_content_type() {
        let err = extract_boundary(b"Subject: x\r\nTo: y").unwrap_err();
        assert!(matches!(err, ExtractError::MissingHeader));
    }

    #[test]
    fn wrong_media_type() {
        let err = extract_boundary(b"Content-Type: multipart/mixed; boundary=x").unwrap_err();
        assert!(matches!(err, ExtractError::UnexpectedMediaType));
    }

    #[test]
    fn missing_boundary_parameter() {
        let err = extract_boundary(b"Content-Type: multipart/signed").unwrap_err();
        assert!(matches!(err, ExtractError::MissingBoundary));
    }

    #[test]
    fn empty_boundary_value_is_not_a_match() {
        let err = extract_boundary(b"Content-Type: multipart/signed; boundary=\"\"").unwrap_err();
        assert!(matches!(err, ExtractError::MissingBoundary));
    }
}
