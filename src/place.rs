//! Placement pipeline: executes a classified drop against a zone's target
//! directory. Moves and downloads never overwrite; collisions get a numeric
//! suffix before the extension.

use chrono::Local;
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlaceError {
    #[error("filesystem error: {0}")]
    Fs(#[from] io::Error),
    #[error("HTTP {0} for {1}")]
    HttpStatus(u16, String),
    #[error("transport error: {0}")]
    Transport(String),
}

/// Move `src` into `dir`, keeping its base filename. Cross-device moves are
/// not special-cased; they surface as an `Fs` error like any other failure.
pub fn move_into(src: &Path, dir: &Path) -> Result<PathBuf, PlaceError> {
    let name = src.file_name().ok_or_else(|| {
        PlaceError::Fs(io::Error::new(
            io::ErrorKind::InvalidInput,
            "source path has no file name",
        ))
    })?;
    let dest = unique_path(dir, &name.to_string_lossy());
    fs::rename(src, &dest)?;
    Ok(dest)
}

/// Fetch `url` with a streaming GET and write the body into `dir` under a
/// date-prefixed name. Non-2xx responses abort before any file is created;
/// a write failure mid-body leaves the partial file behind.
pub fn download_into(url: &str, dir: &Path) -> Result<PathBuf, PlaceError> {
    let response = match ureq::get(url).call() {
        Ok(response) => response,
        Err(ureq::Error::Status(code, _)) => {
            return Err(PlaceError::HttpStatus(code, url.to_string()))
        }
        Err(err) => return Err(PlaceError::Transport(err.to_string())),
    };

    let base = filename_from_url(url).unwrap_or_else(|| fallback_name(response.content_type()));
    let dated = format!("{}{}", Local::now().format("%Y%m%d_"), base);
    let dest = unique_path(dir, &dated);

    let mut reader = response.into_reader();
    let mut file = File::create(&dest)?;
    io::copy(&mut reader, &mut file)?;
    Ok(dest)
}

/// Write dropped text to a timestamp-named file. Second granularity is
/// assumed unique, so no collision loop here.
pub fn save_text(text: &str, dir: &Path) -> Result<PathBuf, PlaceError> {
    let name = format!("dropped_text_{}.txt", Local::now().format("%Y%m%d_%H%M%S"));
    let dest = dir.join(name);
    fs::write(&dest, text)?;
    Ok(dest)
}

/// First free path for `file_name` in `dir`: the name itself, then
/// `stem_1.ext`, `stem_2.ext`, ... counting from the original stem.
pub fn unique_path(dir: &Path, file_name: &str) -> PathBuf {
    let dest = dir.join(file_name);
    if !dest.exists() {
        return dest;
    }
    let (stem, ext) = split_name(file_name);
    let mut counter = 1u32;
    loop {
        let candidate = if ext.is_empty() {
            format!("{stem}_{counter}")
        } else {
            format!("{stem}_{counter}.{ext}")
        };
        let dest = dir.join(&candidate);
        if !dest.exists() {
            return dest;
        }
        counter += 1;
    }
}

fn split_name(name: &str) -> (&str, &str) {
    match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => (stem, ext),
        _ => (name, ""),
    }
}

fn filename_from_url(url: &str) -> Option<String> {
    let parsed = url::Url::parse(url).ok()?;
    let segment = parsed.path_segments()?.filter(|s| !s.is_empty()).last()?;
    if segment == "." || segment == ".." {
        return None;
    }
    Some(segment.to_string())
}

fn fallback_name(content_type: &str) -> String {
    let ext = if content_type.contains("image") {
        content_type.rsplit('/').next().unwrap_or("file")
    } else {
        "file"
    };
    format!("downloaded.{ext}")
}
