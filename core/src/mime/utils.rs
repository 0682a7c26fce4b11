/*
 * utils.rs
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

//! Byte-slice helpers shared by the extraction pipeline.

/// Checks if a byte is horizontal whitespace (space or tab).
#[inline]
pub fn is_horizontal_ws(c: u8) -> bool {
    c == b' ' || c == b'\t'
}

/// Removes one trailing line terminator (CRLF preferred, then LF).
/// Never applied recursively: a slice ending in two terminators keeps one.
pub fn trim_final_newline(b: &[u8]) -> &[u8] {
    if b.ends_with(b"\r\n") {
        &b[..b.len() - 2]
    } else if b.ends_with(b"\n") {
        &b[..b.len() - 1]
    } else {
        b
    }
}

/// Removes one leading line terminator (CRLF or LF), if present.
pub fn strip_leading_newline(b: &[u8]) -> &[u8] {
    if b.starts_with(b"\r\n") {
        &b[2..]
    } else if b.starts_with(b"\n") {
        &b[1..]
    } else {
        b
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trim_removes_one_terminator() {
        assert_eq!(trim_final_newline(b"abc\r\n"), b"abc");
        assert_eq!(trim_final_newline(b"abc\n"), b"abc");
        assert_eq!(trim_final_newline(b"abc"), b"abc");
        assert_eq!(trim_final_newline(b""), b"");
    }

    #[test]
    fn trim_keeps_one_of_two_terminators() {
        assert_eq!(trim_final_newline(b"abc\r\n\r\n"), b"abc\r\n");
        assert_eq!(trim_final_newline(b"abc\n\n"), b"abc\n");
    }

    #[test]
    fn trim_again_is_noop_on_finalized_bytes() {
        let once = trim_final_newline(b"armor\r\n");
        assert_eq!(trim_final_newline(once), once);
        let once = trim_final_newline(b"armor\n");
        assert_eq!(trim_final_newline(once), once);
    }

    #[test]
    fn strip_removes_one_leading_terminator() {
        assert_eq!(strip_leading_newline(b"\r\nabc"), b"abc");
        assert_eq!(strip_leading_newline(b"\nabc"), b"abc");
        assert_eq!(strip_leading_newline(b"abc"), b"abc");
        assert_eq!(strip_leading_newline(b"\r\n\r\nabc"), b"\r\nabc");
    }
}
