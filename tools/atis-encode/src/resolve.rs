//! Clip resolution: turn a pack name into a complete [`ClipSet`].

use rayon::prelude::*;
use std::path::{Path, PathBuf};

use crate::clip::{Clip, ClipSet};
use crate::config::EncoderConfig;
use crate::error::{EncodeError, Result};

/// Read every canonical clip of `pack`, in canonical order.
///
/// Fails with [`EncodeError::SourceNotFound`] before touching any clip if the
/// pack directory is absent, and with [`EncodeError::MissingAsset`] for the
/// first canonical name without a file. Presence is checked for all names
/// before any bytes are read.
pub fn resolve_clip_set(config: &EncoderConfig, pack: &str) -> Result<ClipSet> {
    let pack_dir = config.pack_dir(pack);
    if !pack_dir.is_dir() {
        return Err(EncodeError::SourceNotFound {
            pack: pack.to_string(),
            path: pack_dir,
        });
    }

    let entries: Vec<(&str, PathBuf)> = config
        .names
        .iter()
        .map(|name| (name.as_str(), config.clip_path(pack, name)))
        .collect();

    for (name, path) in &entries {
        if !path.is_file() {
            return Err(EncodeError::MissingAsset {
                name: name.to_string(),
                path: path.clone(),
            });
        }
    }

    // Reads are independent; collect() keeps canonical order.
    let clips: Result<Vec<Clip>> = entries
        .par_iter()
        .map(|(name, path)| {
            let bytes = std::fs::read(path).map_err(|source| EncodeError::Read {
                path: path.clone(),
                source,
            })?;
            tracing::debug!("Read {} ({} bytes)", path.display(), bytes.len());
            if bytes.is_empty() {
                tracing::warn!("Clip {} is empty: {}", name, path.display());
            }
            Ok(Clip::new(*name, bytes))
        })
        .collect();

    Ok(ClipSet::from_clips(clips?))
}

/// List voice packs (subdirectories) under the audio directory, sorted.
pub fn list_packs(audio_dir: &Path) -> Result<Vec<String>> {
    let read_err = |source: std::io::Error| EncodeError::Read {
        path: audio_dir.to_path_buf(),
        source,
    };

    let mut packs = Vec::new();
    for entry in std::fs::read_dir(audio_dir).map_err(read_err)? {
        let entry = entry.map_err(read_err)?;
        if entry.path().is_dir() {
            packs.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    packs.sort();
    Ok(packs)
}
