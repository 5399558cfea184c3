//! Audio sample format definitions

use crate::error::{Error, Result};
use byteorder::{ByteOrder, LittleEndian};
use serde::Serialize;
use std::fmt;

/// PCM sample format of a single channel sample
///
/// 8-bit WAV samples are unsigned and 16-bit samples are signed two's
/// complement. Both are stored little-endian.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SampleFormat {
    /// Unsigned 8-bit
    #[serde(rename = "u8")]
    U8,
    /// Signed 16-bit
    #[serde(rename = "s16")]
    I16,
}

impl SampleFormat {
    /// Map a `bitsPerSample` header value onto a format
    pub fn from_bits(bits_per_sample: u16) -> Option<Self> {
        match bits_per_sample {
            8 => Some(SampleFormat::U8),
            16 => Some(SampleFormat::I16),
            _ => None,
        }
    }

    /// Bits per sample as declared in the `fmt ` chunk
    pub fn bits_per_sample(&self) -> u16 {
        match self {
            SampleFormat::U8 => 8,
            SampleFormat::I16 => 16,
        }
    }

    /// Get the size in bytes of one sample
    pub fn sample_size(&self) -> usize {
        match self {
            SampleFormat::U8 => 1,
            SampleFormat::I16 => 2,
        }
    }

    /// Check if samples are two's complement
    pub fn is_signed(&self) -> bool {
        matches!(self, SampleFormat::I16)
    }

    /// Smallest representable sample value
    pub fn min_value(&self) -> i32 {
        match self {
            SampleFormat::U8 => u8::MIN as i32,
            SampleFormat::I16 => i16::MIN as i32,
        }
    }

    /// Largest representable sample value
    pub fn max_value(&self) -> i32 {
        match self {
            SampleFormat::U8 => u8::MAX as i32,
            SampleFormat::I16 => i16::MAX as i32,
        }
    }

    /// Value of a silent sample (the midpoint for unsigned formats)
    pub fn silence(&self) -> i32 {
        match self {
            SampleFormat::U8 => 0x80,
            SampleFormat::I16 => 0,
        }
    }

    /// Reject values the format cannot represent
    pub fn check(&self, value: i32) -> Result<()> {
        let (min, max) = (self.min_value(), self.max_value());
        if value < min || value > max {
            return Err(Error::SampleOutOfRange { value, min, max });
        }
        Ok(())
    }

    /// Decode one sample from exactly `sample_size()` little-endian bytes
    pub fn decode(&self, bytes: &[u8]) -> i32 {
        match self {
            SampleFormat::U8 => bytes[0] as i32,
            SampleFormat::I16 => LittleEndian::read_i16(bytes) as i32,
        }
    }

    /// Encode one sample into exactly `sample_size()` bytes
    pub fn encode(&self, value: i32, out: &mut [u8]) -> Result<()> {
        self.check(value)?;
        match self {
            SampleFormat::U8 => out[0] = value as u8,
            SampleFormat::I16 => LittleEndian::write_i16(out, value as i16),
        }
        Ok(())
    }
}

impl fmt::Display for SampleFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SampleFormat::U8 => "u8",
            SampleFormat::I16 => "s16",
        };
        write!(f, "{}", name)
    }
}
