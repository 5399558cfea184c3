//! WAV audio format support
//!
//! This module implements RIFF/WAVE header parsing and random-access reading
//! and writing of PCM frames in place. Only the canonical layout is handled:
//! a 16-byte PCM `fmt ` chunk immediately followed by the `data` chunk.

pub mod accessor;
pub mod header;
pub mod writer;

pub use accessor::{Frame, WaveFile};
pub use header::{FormatTag, WaveDescriptor};
pub use writer::WaveSpec;

use crate::error::Result;
use std::io::{Read, Write};

/// WAV format magic numbers
pub const RIFF_MAGIC: &[u8; 4] = b"RIFF";
pub const WAVE_MAGIC: &[u8; 4] = b"WAVE";
pub const FMT_CHUNK: &[u8; 4] = b"fmt ";
pub const DATA_CHUNK: &[u8; 4] = b"data";

/// Length of a PCM `fmt ` chunk body
pub const PCM_FMT_LEN: u32 = 16;

/// Chunk header (4 byte ID + 4 byte size)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkHeader {
    pub id: [u8; 4],
    pub size: u32,
}

impl ChunkHeader {
    pub fn new(id: &[u8; 4], size: u32) -> Self {
        ChunkHeader { id: *id, size }
    }

    /// Convert chunk header to bytes
    pub fn to_bytes(&self) -> [u8; 8] {
        let mut bytes = [0u8; 8];
        bytes[0..4].copy_from_slice(&self.id);
        bytes[4..8].copy_from_slice(&self.size.to_le_bytes());
        bytes
    }

    /// Write the header at the writer's current position
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        writer.write_all(&self.to_bytes())?;
        Ok(())
    }
}

/// Read a raw four-byte chunk tag
pub(crate) fn read_tag<R: Read>(reader: &mut R) -> Result<[u8; 4]> {
    let mut tag = [0u8; 4];
    reader.read_exact(&mut tag)?;
    Ok(tag)
}
