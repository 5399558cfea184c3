//! WAV file header structures and parsing

use super::{read_tag, DATA_CHUNK, FMT_CHUNK, PCM_FMT_LEN, RIFF_MAGIC, WAVE_MAGIC};
use crate::error::{Error, Result};
use crate::util::SampleFormat;
use byteorder::{LittleEndian, ReadBytesExt};
use serde::Serialize;
use std::fmt;
use std::io::{Read, Seek, SeekFrom};
use tracing::debug;

/// WAV format tag identifying the codec
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatTag {
    /// PCM (uncompressed)
    Pcm,
    /// Anything else (IEEE float, A-law, extensible, ...)
    Unknown(u16),
}

impl From<u16> for FormatTag {
    fn from(val: u16) -> Self {
        match val {
            0x0001 => FormatTag::Pcm,
            other => FormatTag::Unknown(other),
        }
    }
}

impl From<FormatTag> for u16 {
    fn from(tag: FormatTag) -> Self {
        match tag {
            FormatTag::Pcm => 0x0001,
            FormatTag::Unknown(val) => val,
        }
    }
}

/// Immutable geometry of a parsed WAV file
///
/// Produced once by [`WaveDescriptor::parse`]; the frame layout it describes
/// never changes for the lifetime of the file handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WaveDescriptor {
    /// Number of channels (1 = mono, 2 = stereo)
    pub channels: u16,
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Average bytes per second as declared (not validated)
    pub byte_rate: u32,
    /// Bytes per frame, all channels combined
    pub block_align: u16,
    /// Per-channel sample format
    pub sample_format: SampleFormat,
    /// Number of whole frames in the data chunk
    pub frame_count: u64,
    /// Byte offset of the first frame
    pub data_start: u64,
}

impl WaveDescriptor {
    /// Read and validate the RIFF/WAVE/fmt/data sequence from the start of
    /// `reader`.
    ///
    /// Seeks to offset 0 first, so any previous position is lost. On success
    /// the reader is left at the first byte of frame data.
    pub fn parse<R: Read + Seek>(reader: &mut R) -> Result<Self> {
        reader.seek(SeekFrom::Start(0))?;

        let riff = read_tag(reader)?;
        if &riff != RIFF_MAGIC {
            return Err(Error::NotRiff(riff));
        }
        let riff_len = reader.read_u32::<LittleEndian>()?;

        let wave = read_tag(reader)?;
        if &wave != WAVE_MAGIC {
            return Err(Error::NotWave(wave));
        }

        let fmt = read_tag(reader)?;
        if &fmt != FMT_CHUNK {
            return Err(Error::MissingFmtChunk(fmt));
        }
        let fmt_len = reader.read_u32::<LittleEndian>()?;
        if fmt_len != PCM_FMT_LEN {
            return Err(Error::UnsupportedFmtExtension(fmt_len));
        }

        let audio_format = reader.read_u16::<LittleEndian>()?;
        if FormatTag::from(audio_format) != FormatTag::Pcm {
            return Err(Error::UnsupportedFormat(audio_format));
        }

        let channels = reader.read_u16::<LittleEndian>()?;
        if channels != 1 && channels != 2 {
            return Err(Error::UnsupportedChannelCount(channels));
        }

        let sample_rate = reader.read_u32::<LittleEndian>()?;
        let byte_rate = reader.read_u32::<LittleEndian>()?;
        let block_align = reader.read_u16::<LittleEndian>()?;
        let bits_per_sample = reader.read_u16::<LittleEndian>()?;
        let sample_format = SampleFormat::from_bits(bits_per_sample)
            .ok_or(Error::UnsupportedBitDepth(bits_per_sample))?;

        // Checked ahead of the data tag: the alignment check below divides
        // by block_align, and a nonzero canonical value also bounds each
        // frame to at most 4 bytes. Mono/stereo at 8 or 16 bits keeps the
        // product well inside u16.
        let expected = channels * sample_format.sample_size() as u16;
        if block_align != expected {
            return Err(Error::InvalidBlockAlign {
                block_align,
                expected,
            });
        }

        let data = read_tag(reader)?;
        if &data != DATA_CHUNK {
            return Err(Error::MissingDataChunk(data));
        }
        let data_len = reader.read_u32::<LittleEndian>()?;
        if data_len % block_align as u32 != 0 {
            return Err(Error::MisalignedDataChunk {
                length: data_len,
                block_align,
            });
        }

        let descriptor = WaveDescriptor {
            channels,
            sample_rate,
            byte_rate,
            block_align,
            sample_format,
            frame_count: (data_len / block_align as u32) as u64,
            data_start: reader.stream_position()?,
        };

        debug!(
            riff_len,
            channels,
            sample_rate,
            block_align,
            bits_per_sample,
            frame_count = descriptor.frame_count,
            data_start = descriptor.data_start,
            "Parsed WAV header"
        );

        Ok(descriptor)
    }

    /// Bits per sample as declared in the header
    pub fn bits_per_sample(&self) -> u16 {
        self.sample_format.bits_per_sample()
    }

    /// Bytes occupied by one channel's sample within a frame
    pub fn sample_size(&self) -> usize {
        self.block_align as usize / self.channels as usize
    }

    /// Check if the file has two channels
    pub fn is_stereo(&self) -> bool {
        self.channels == 2
    }

    /// Length of the data chunk in bytes
    pub fn data_len(&self) -> u64 {
        self.frame_count * self.block_align as u64
    }

    /// Absolute store offset of frame `index`
    pub fn frame_offset(&self, index: u64) -> u64 {
        self.data_start + self.block_align as u64 * index
    }

    /// Get duration in seconds
    pub fn duration_seconds(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.frame_count as f64 / self.sample_rate as f64
    }
}

impl fmt::Display for WaveDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} Hz, {} channel(s), {}, {} frames ({:.2}s)",
            self.sample_rate,
            self.channels,
            self.sample_format,
            self.frame_count,
            self.duration_seconds()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn header(channels: u16, bits: u16, block_align: u16, data_len: u32) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(b"RIFF");
        bytes.extend_from_slice(&(36 + data_len).to_le_bytes());
        bytes.extend_from_slice(b"WAVE");
        bytes.extend_from_slice(b"fmt ");
        bytes.extend_from_slice(&16u32.to_le_bytes());
        bytes.extend_from_slice(&1u16.to_le_bytes());
        bytes.extend_from_slice(&channels.to_le_bytes());
        bytes.extend_from_slice(&8000u32.to_le_bytes());
        bytes.extend_from_slice(&(8000 * block_align as u32).to_le_bytes());
        bytes.extend_from_slice(&block_align.to_le_bytes());
        bytes.extend_from_slice(&bits.to_le_bytes());
        bytes.extend_from_slice(b"data");
        bytes.extend_from_slice(&data_len.to_le_bytes());
        bytes.resize(bytes.len() + data_len as usize, 0);
        bytes
    }

    #[test]
    fn test_format_tag_conversion() {
        assert_eq!(u16::from(FormatTag::Pcm), 0x0001);
        assert_eq!(FormatTag::from(0x0001), FormatTag::Pcm);
        assert_eq!(FormatTag::from(0x0055), FormatTag::Unknown(0x0055));
    }

    #[test]
    fn test_parse_canonical_header() {
        let mut cursor = Cursor::new(header(2, 16, 4, 400));
        let desc = WaveDescriptor::parse(&mut cursor).unwrap();

        assert_eq!(desc.channels, 2);
        assert_eq!(desc.sample_rate, 8000);
        assert_eq!(desc.block_align, 4);
        assert_eq!(desc.bits_per_sample(), 16);
        assert_eq!(desc.sample_format, SampleFormat::I16);
        assert_eq!(desc.frame_count, 100);
        assert_eq!(desc.data_start, 44);
        assert_eq!(desc.data_len(), 400);
        assert_eq!(desc.sample_size(), 2);
        assert_eq!(desc.frame_offset(3), 56);
        assert_eq!(cursor.position(), 44);
    }

    #[test]
    fn test_parse_seeks_to_start() {
        let mut cursor = Cursor::new(header(1, 8, 1, 10));
        cursor.set_position(30);
        let desc = WaveDescriptor::parse(&mut cursor).unwrap();
        assert_eq!(desc.frame_count, 10);
    }

    #[test]
    fn test_inconsistent_block_align() {
        let mut cursor = Cursor::new(header(2, 16, 2, 8));
        assert!(matches!(
            WaveDescriptor::parse(&mut cursor),
            Err(Error::InvalidBlockAlign {
                block_align: 2,
                expected: 4
            })
        ));

        let mut cursor = Cursor::new(header(1, 8, 0, 0));
        assert!(matches!(
            WaveDescriptor::parse(&mut cursor),
            Err(Error::InvalidBlockAlign { block_align: 0, .. })
        ));
    }

    #[test]
    fn test_duration() {
        let mut cursor = Cursor::new(header(1, 16, 2, 16000));
        let desc = WaveDescriptor::parse(&mut cursor).unwrap();
        assert!((desc.duration_seconds() - 1.0).abs() < f64::EPSILON);
        assert_eq!(
            desc.to_string(),
            "8000 Hz, 1 channel(s), s16, 8000 frames (1.00s)"
        );
    }
}
