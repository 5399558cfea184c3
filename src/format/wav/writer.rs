//! Creation of new canonical WAV files

use super::accessor::WaveFile;
use super::header::FormatTag;
use super::{ChunkHeader, DATA_CHUNK, FMT_CHUNK, PCM_FMT_LEN, RIFF_MAGIC, WAVE_MAGIC};
use crate::error::{Error, Result};
use crate::util::SampleFormat;
use byteorder::{LittleEndian, WriteBytesExt};
use std::io::{Read, Seek, SeekFrom, Write};
use tracing::debug;

/// Silence is written in runs of this many bytes
const FILL_CHUNK: usize = 4096;

/// Layout of a file to create
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaveSpec {
    /// Number of channels (1 or 2)
    pub channels: u16,
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Per-channel sample format
    pub sample_format: SampleFormat,
}

impl WaveSpec {
    pub fn new(channels: u16, sample_rate: u32, sample_format: SampleFormat) -> Self {
        WaveSpec {
            channels,
            sample_rate,
            sample_format,
        }
    }

    /// Bytes per frame
    pub fn block_align(&self) -> u16 {
        self.channels * self.sample_format.sample_size() as u16
    }

    /// Bytes per second
    pub fn byte_rate(&self) -> u32 {
        self.sample_rate.saturating_mul(self.block_align() as u32)
    }

    /// Validate format parameters
    pub fn validate(&self) -> Result<()> {
        if self.channels != 1 && self.channels != 2 {
            return Err(Error::UnsupportedChannelCount(self.channels));
        }
        Ok(())
    }

    /// Data chunk length for `frame_count` frames, if it fits a RIFF file
    fn data_len(&self, frame_count: u64) -> Result<u32> {
        // RIFF length = 4 (WAVE) + 8 + 16 (fmt) + 8 (data header) + data
        let max = u32::MAX as u64 - 36;
        frame_count
            .checked_mul(self.block_align() as u64)
            .filter(|len| *len <= max)
            .map(|len| len as u32)
            .ok_or_else(|| {
                Error::invalid_input(format!(
                    "{} frames do not fit in a WAV data chunk",
                    frame_count
                ))
            })
    }

    fn write_header<W: Write>(&self, writer: &mut W, data_len: u32) -> Result<()> {
        writer.write_all(RIFF_MAGIC)?;
        writer.write_u32::<LittleEndian>(36 + data_len)?;
        writer.write_all(WAVE_MAGIC)?;

        ChunkHeader::new(FMT_CHUNK, PCM_FMT_LEN).write_to(writer)?;
        writer.write_u16::<LittleEndian>(FormatTag::Pcm.into())?;
        writer.write_u16::<LittleEndian>(self.channels)?;
        writer.write_u32::<LittleEndian>(self.sample_rate)?;
        writer.write_u32::<LittleEndian>(self.byte_rate())?;
        writer.write_u16::<LittleEndian>(self.block_align())?;
        writer.write_u16::<LittleEndian>(self.sample_format.bits_per_sample())?;

        ChunkHeader::new(DATA_CHUNK, data_len).write_to(writer)?;
        Ok(())
    }
}

impl<S: Read + Write + Seek> WaveFile<S> {
    /// Write a fresh header and `frame_count` silent frames to `store`,
    /// starting at offset 0, and open the result for frame access.
    ///
    /// Bytes already in the store past the new data chunk are left alone.
    pub fn create(mut store: S, spec: WaveSpec, frame_count: u64) -> Result<Self> {
        spec.validate()?;
        let data_len = spec.data_len(frame_count)?;

        store.seek(SeekFrom::Start(0))?;
        spec.write_header(&mut store, data_len)?;

        let mut silent = vec![0u8; spec.sample_format.sample_size()];
        spec.sample_format
            .encode(spec.sample_format.silence(), &mut silent)?;
        let fill: Vec<u8> = silent.iter().copied().cycle().take(FILL_CHUNK).collect();

        let mut remaining = data_len as usize;
        while remaining > 0 {
            let n = remaining.min(FILL_CHUNK);
            store.write_all(&fill[..n])?;
            remaining -= n;
        }
        store.flush()?;

        debug!(
            channels = spec.channels,
            sample_rate = spec.sample_rate,
            sample_format = %spec.sample_format,
            frame_count,
            "Created WAV file"
        );

        WaveFile::open(store)
    }
}
