/*
 * main.rs
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

use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;

use sigillo_core::{extract_signed_parts, write_artifacts};

#[derive(Parser)]
#[command(
    name = "sigillo",
    about = "Extract the signed entity and detached signature from a multipart/signed email, byte-for-byte"
)]
struct Cli {
    /// Path to the email message (.eml) to extract from
    input: PathBuf,
}

fn main() {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let raw = match std::fs::read(&cli.input) {
        Ok(b) => b,
        Err(e) => {
            tracing::error!("failed to read {}: {}", cli.input.display(), e);
            process::exit(1);
        }
    };

    let parts = match extract_signed_parts(&raw) {
        Ok(p) => p,
        Err(e) => {
            tracing::error!("{}", e);
            process::exit(1);
        }
    };

    let paths = match write_artifacts(Path::new("."), &parts) {
        Ok(p) => p,
        Err(e) => {
            tracing::error!("failed to write output: {}", e);
            process::exit(1);
        }
    };

    println!("Extraction complete (raw-safe, no reformatting).");
    println!("Data:      {}", paths.message.display());
    println!("Signature: {}", paths.signature.display());
}
