//! atis-encode library
//!
//! Packs a voice pack (one audio clip per spoken digit) into three static
//! tables for the ATIS firmware: per-clip lengths, per-clip offsets, and the
//! concatenated clip bytes. The firmware has no file system, so the tables are
//! compiled straight into program memory.
//!
//! Pipeline: [`resolve_clip_set`] -> [`compute_index`] -> [`concatenate_payload`]
//! -> [`render_table`], composed by [`encode`].

pub mod clip;
pub mod config;
pub mod encode;
pub mod error;
pub mod header;
pub mod index;
pub mod output;
pub mod payload;
pub mod render;
pub mod resolve;

pub use clip::{Clip, ClipSet, Digit};
pub use config::{ArrayNames, EncoderConfig, NumberBase};
pub use encode::{encode, encode_clip_set, EncodedTables};
pub use error::{EncodeError, Result};
pub use header::render_header;
pub use index::{compute_index, IndexTable};
pub use output::{check_output, write_output};
pub use payload::{concatenate_payload, extract_clip};
pub use render::{parse_tokens, render_table, RenderedTable};
pub use resolve::{list_packs, resolve_clip_set};
