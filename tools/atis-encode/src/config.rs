//! Encoder configuration
//!
//! Every knob the encoder uses is carried here and passed in explicitly.
//! Values come from defaults, an optional TOML file, then CLI overrides.
//!
//! ```toml
//! audio_dir = "audio"
//! default_pack = "female"
//! extension = "mp3"
//! output = "atis/audio.h"
//! row_width = 32
//! byte_base = "hex"
//!
//! [arrays]
//! lengths = "audioDataLengths"
//! offsets = "audioDataOffsets"
//! data = "audioDataMp3"
//! ```

use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::clip::Digit;
use crate::error::{EncodeError, Result};

pub const DEFAULT_AUDIO_DIR: &str = "./audio";
pub const DEFAULT_PACK: &str = "female";
pub const DEFAULT_EXTENSION: &str = "mp3";
pub const DEFAULT_OUTPUT: &str = "./atis/audio.h";
pub const DEFAULT_ROW_WIDTH: usize = 32;
pub const DEFAULT_INCLUDE_GUARD: &str = "ATIS_AUDIO";

/// Numeric base used for the byte array tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberBase {
    /// `0x1f,` style, matching what the firmware headers have always used
    #[default]
    Hex,
    Decimal,
}

/// C identifiers of the three generated arrays
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ArrayNames {
    pub lengths: String,
    pub offsets: String,
    pub data: String,
}

impl Default for ArrayNames {
    fn default() -> Self {
        Self {
            lengths: "audioDataLengths".to_string(),
            offsets: "audioDataOffsets".to_string(),
            data: "audioDataMp3".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EncoderConfig {
    /// Directory holding one subdirectory per voice pack
    pub audio_dir: PathBuf,
    /// Pack encoded when none is given on the command line
    pub default_pack: String,
    /// Clip file extension, without the dot
    pub extension: String,
    /// Canonical clip order
    pub names: Vec<String>,
    /// Generated header path
    pub output: PathBuf,
    /// Byte tokens per line in the data array
    pub row_width: usize,
    pub byte_base: NumberBase,
    pub arrays: ArrayNames,
    pub include_guard: String,
    /// License text placed in a block comment at the top of the header
    pub license: Option<String>,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            audio_dir: PathBuf::from(DEFAULT_AUDIO_DIR),
            default_pack: DEFAULT_PACK.to_string(),
            extension: DEFAULT_EXTENSION.to_string(),
            names: Digit::canonical_names(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            row_width: DEFAULT_ROW_WIDTH,
            byte_base: NumberBase::Hex,
            arrays: ArrayNames::default(),
            include_guard: DEFAULT_INCLUDE_GUARD.to_string(),
            license: None,
        }
    }
}

impl EncoderConfig {
    /// Load and validate a config file. Missing keys fall back to defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| EncodeError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config: EncoderConfig =
            toml::from_str(&content).map_err(|source| EncodeError::Config {
                path: path.to_path_buf(),
                source,
            })?;

        config.validate()?;
        tracing::debug!("Loaded encoder config from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.names.is_empty() {
            return Err(EncodeError::InvalidConfig(
                "canonical name list is empty".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for name in &self.names {
            if name.trim().is_empty() {
                return Err(EncodeError::InvalidConfig(
                    "canonical name list contains a blank name".to_string(),
                ));
            }
            if !seen.insert(name.as_str()) {
                return Err(EncodeError::InvalidConfig(format!(
                    "duplicate canonical name '{}'",
                    name
                )));
            }
        }

        if self.row_width == 0 {
            return Err(EncodeError::InvalidConfig(
                "row_width must be at least 1".to_string(),
            ));
        }

        if self.extension.is_empty() {
            return Err(EncodeError::InvalidConfig(
                "extension must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    pub fn pack_dir(&self, pack: &str) -> PathBuf {
        self.audio_dir.join(pack)
    }

    pub fn clip_path(&self, pack: &str, name: &str) -> PathBuf {
        self.pack_dir(pack)
            .join(format!("{}.{}", name, self.extension))
    }
}
