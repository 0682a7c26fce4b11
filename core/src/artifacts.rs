/*
 * artifacts.rs
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

//! Output artifacts: extractedSignatureData/message.txt and signature.asc.

use std::fs;
use std::path::{Path, PathBuf};

use crate::mime::{ExtractError, SignedParts};

/// Directory created under the run root for the two artifacts.
pub const OUTPUT_DIR: &str = "extractedSignatureData";
/// Signed entity artifact; the data file handed to signature verification.
pub const MESSAGE_FILE: &str = "message.txt";
/// Detached ASCII-armored signature artifact.
pub const SIGNATURE_FILE: &str = "signature.asc";

/// Paths of the two written artifacts.
#[derive(Debug)]
pub struct ArtifactPaths {
    pub message: PathBuf,
    pub signature: PathBuf,
}

/// Writes both artifacts under `root`, creating the output directory if
/// absent. The payload bytes go to disk exactly as extracted.
pub fn write_artifacts(
    root: &Path,
    parts: &SignedParts<'_>,
) -> Result<ArtifactPaths, ExtractError> {
    let outdir = root.join(OUTPUT_DIR);
    fs::create_dir_all(&outdir)?;
    let message = outdir.join(MESSAGE_FILE);
    fs::write(&message, parts.message)?;
    let signature = outdir.join(SIGNATURE_FILE);
    fs::write(&signature, parts.signature)?;
    Ok(ArtifactPaths { message, signature })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_exact_bytes_and_returns_paths() {
        let dir = tempfile::tempdir().unwrap();
        let parts = SignedParts {
            message: b"H: 1\r\n\r\nsigned bytes",
            signature: b"-----BEGIN PGP SIGNATURE-----\r\nxx\r\n-----END PGP SIGNATURE-----",
        };
        let paths = write_artifacts(dir.path(), &parts).unwrap();
        assert_eq!(paths.message, dir.path().join(OUTPUT_DIR).join(MESSAGE_FILE));
        assert_eq!(paths.signature, dir.path().join(OUTPUT_DIR).join(SIGNATURE_FILE));
        assert_eq!(fs::read(&paths.message).unwrap(), parts.message);
        assert_eq!(fs::read(&paths.signature).unwrap(), parts.signature);
    }

    #[test]
    fn existing_output_directory_is_reused() {
        let dir = tempfile::tempdir().unwrap();
        let parts = SignedParts {
            message: b"first",
            signature: b"sig",
        };
        write_artifacts(dir.path(), &parts).unwrap();
        let parts = SignedParts {
            message: b"second",
            signature: b"sig2",
        };
        let paths = write_artifacts(dir.path(), &parts).unwrap();
        assert_eq!(fs::read(&paths.message).unwrap(), b"second");
        assert_eq!(fs::read(&paths.signature).unwrap(), b"sig2");
    }

    #[test]
    fn unwritable_root_reports_io_failure() {
        let dir = tempfile::tempdir().unwrap();
        // a file where the output directory should go
        let blocker = dir.path().join(OUTPUT_DIR);
        fs::write(&blocker, b"not a directory").unwrap();
        let parts = SignedParts {
            message: b"m",
            signature: b"s",
        };
        let err = write_artifacts(dir.path(), &parts).unwrap_err();
        assert!(matches!(err, ExtractError::Io(_)));
    }
}
