//! # Command handlers
//!
//! High-level logic of the `hide` and `recover` subcommands. This module
//! coordinates file I/O, invokes the codec, and reports results to the user.

use crate::cli::{HideArgs, RecoverArgs};
use crate::codec;
use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

/// Handles the 'hide' command.
///
/// Decodes the carrier image, reads the payload file, embeds the payload,
/// and saves the doctored image to the destination path.
///
/// # Errors
///
/// Returns an error when:
/// * the carrier image or payload file cannot be read,
/// * the destination exists and `--force` was not given,
/// * the carrier format is unsupported or too small for the payload,
/// * the doctored image cannot be saved.
pub fn handle_hide(args: HideArgs) -> Result<()> {
    let mut image = image::open(&args.image).with_context(|| {
        format!(
            "Unable to open carrier image: {}",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    let payload = fs::read(&args.text).with_context(|| {
        format!(
            "Unable to read payload file: {}",
            args.text.to_string_lossy().red().bold()
        )
    })?;

    if payload.contains(&codec::TERMINATOR) {
        eprintln!(
            "{} the payload contains a zero byte; recovery will stop at the first one.",
            "warning:".yellow().bold()
        );
    }

    let dest = args
        .dest
        .unwrap_or_else(|| default_hidden_path(&args.image));
    ensure_writable(&dest, args.force)?;

    codec::hide(&mut image, &payload).with_context(|| {
        format!(
            "Unable to hide {} inside {}",
            args.text.to_string_lossy().red().bold(),
            args.image.to_string_lossy().red().bold()
        )
    })?;

    image.save(&dest).with_context(|| {
        format!(
            "Unable to write doctored image: {}",
            dest.to_string_lossy().red().bold()
        )
    })?;

    println!(
        "The payload has been successfully hidden and saved: {}",
        dest.to_string_lossy().green().bold()
    );

    Ok(())
}

/// Handles the 'recover' command.
///
/// Decodes the doctored image, extracts the hidden payload, and writes it to
/// the output file.
///
/// # Errors
///
/// Returns an error when:
/// * the image cannot be read or has an unsupported format,
/// * the image carries no detectable payload,
/// * the output file exists and `--force` was not given,
/// * the output file cannot be written.
pub fn handle_recover(args: RecoverArgs) -> Result<()> {
    let image = image::open(&args.image).with_context(|| {
        format!(
            "Unable to open image: {}",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    let payload = codec::reveal(&image).with_context(|| {
        format!(
            "Unable to inspect image: {}",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    let Some(payload) = payload else {
        anyhow::bail!(
            "No hidden payload found in {}. \nIf the image went through a hosting service, the payload may have been lost to recompression.",
            args.image.to_string_lossy().red().bold()
        );
    };

    let dest = args
        .text
        .unwrap_or_else(|| default_recovered_path(&args.image));
    ensure_writable(&dest, args.force)?;

    fs::write(&dest, payload).with_context(|| {
        format!(
            "Unable to write recovered payload: {}",
            dest.to_string_lossy().red().bold()
        )
    })?;

    println!(
        "The payload has been successfully recovered and saved: {}",
        dest.to_string_lossy().green().bold()
    );

    Ok(())
}

fn ensure_writable(path: &Path, force: bool) -> Result<()> {
    anyhow::ensure!(
        force || !path.exists(),
        "Output file already exists: {} (pass --force to overwrite)",
        path.to_string_lossy().red().bold()
    );
    Ok(())
}

fn default_hidden_path(image: &Path) -> PathBuf {
    let name = image
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    image.with_file_name(format!("hidden_{name}"))
}

fn default_recovered_path(image: &Path) -> PathBuf {
    let stem = image
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    image.with_file_name(format!("recovered_{stem}.txt"))
}
