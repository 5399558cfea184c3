//! Random-access frame reading and writing

use super::header::WaveDescriptor;
use crate::error::{Error, Result};
use serde::Serialize;
use std::fmt;
use std::io::{Read, Seek, SeekFrom, Write};
use tracing::trace;

/// Largest frame the accessor handles: stereo 16-bit
const MAX_BLOCK_ALIGN: usize = 4;

/// One time instant's worth of samples across all channels
///
/// 8-bit files hold values in `0..=255`, 16-bit files in `-32768..=32767`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Frame {
    Mono(i32),
    /// Channel 1 then channel 2, in store order
    Stereo(i32, i32),
}

impl Frame {
    /// Number of channels this value carries
    pub fn channels(&self) -> u16 {
        match self {
            Frame::Mono(_) => 1,
            Frame::Stereo(..) => 2,
        }
    }

    /// Build a frame from per-channel values, if there are one or two of them
    pub fn from_samples(samples: &[i32]) -> Option<Self> {
        match *samples {
            [mono] => Some(Frame::Mono(mono)),
            [left, right] => Some(Frame::Stereo(left, right)),
            _ => None,
        }
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Frame::Mono(v) => write!(f, "{}", v),
            Frame::Stereo(l, r) => write!(f, "({}, {})", l, r),
        }
    }
}

/// A WAV file whose frames can be read and overwritten in place
///
/// Owns its byte store and the descriptor parsed from it. Every access seeks
/// to the frame's absolute offset right before reading or writing, so the
/// store's position between calls does not matter. The frame count is fixed;
/// the data region is never resized.
#[derive(Debug)]
pub struct WaveFile<S> {
    store: S,
    descriptor: WaveDescriptor,
}

impl<S: Read + Write + Seek> WaveFile<S> {
    /// Parse the header of `store` and wrap it for frame access
    pub fn open(mut store: S) -> Result<Self> {
        let descriptor = WaveDescriptor::parse(&mut store)?;
        Ok(WaveFile { store, descriptor })
    }

    /// Get the parsed header
    pub fn descriptor(&self) -> &WaveDescriptor {
        &self.descriptor
    }

    /// Number of frames in the file
    pub fn len(&self) -> u64 {
        self.descriptor.frame_count
    }

    pub fn is_empty(&self) -> bool {
        self.descriptor.frame_count == 0
    }

    fn check_index(&self, index: i64) -> Result<u64> {
        let frame_count = self.descriptor.frame_count;
        if index < 0 || index as u64 >= frame_count {
            return Err(Error::IndexOutOfRange { index, frame_count });
        }
        Ok(index as u64)
    }

    /// Read frame `index`
    pub fn get(&mut self, index: i64) -> Result<Frame> {
        let index = self.check_index(index)?;
        let desc = &self.descriptor;
        let block_align = desc.block_align as usize;
        let size = desc.sample_size();
        let format = desc.sample_format;
        let offset = desc.frame_offset(index);

        let mut buf = [0u8; MAX_BLOCK_ALIGN];
        let block = &mut buf[..block_align];
        self.store.seek(SeekFrom::Start(offset))?;
        self.store.read_exact(block)?;

        let frame = if desc.is_stereo() {
            Frame::Stereo(format.decode(&block[..size]), format.decode(&block[size..]))
        } else {
            Frame::Mono(format.decode(block))
        };

        trace!(index, offset, %frame, "Read frame");
        Ok(frame)
    }

    /// Overwrite frame `index` with `frame`
    ///
    /// The value's shape must match the channel count and every sample must
    /// fit the bit depth. Both are checked before the store is touched, so a
    /// rejected call writes nothing.
    pub fn set(&mut self, index: i64, frame: Frame) -> Result<()> {
        let index = self.check_index(index)?;
        let desc = &self.descriptor;
        let block_align = desc.block_align as usize;
        let size = desc.sample_size();
        let format = desc.sample_format;
        let offset = desc.frame_offset(index);

        let mut buf = [0u8; MAX_BLOCK_ALIGN];
        let block = &mut buf[..block_align];
        match (desc.channels, frame) {
            (1, Frame::Mono(v)) => format.encode(v, block)?,
            (2, Frame::Stereo(l, r)) => {
                let (left, right) = block.split_at_mut(size);
                format.encode(l, left)?;
                format.encode(r, right)?;
            }
            (expected, frame) => {
                return Err(Error::InvalidValueShape {
                    expected,
                    got: frame.channels(),
                })
            }
        }

        self.store.seek(SeekFrom::Start(offset))?;
        self.store.write_all(block)?;

        trace!(index, offset, %frame, "Wrote frame");
        Ok(())
    }

    /// Read `count` consecutive frames starting at `start`
    ///
    /// Fails without reading anything if any index in the range is invalid.
    /// A store shorter than its declared data chunk fails with an
    /// `UnexpectedEof` IO error at the first missing frame.
    pub fn read_range(&mut self, start: i64, count: u64) -> Result<Vec<Frame>> {
        if count == 0 {
            return Ok(Vec::new());
        }
        self.check_index(start)?;
        let last = (start as u64).saturating_add(count - 1);
        self.check_index(i64::try_from(last).unwrap_or(i64::MAX))?;

        // The declared length is not checked against the store, so the
        // range may be far larger than what can actually be read.
        let mut frames = Vec::new();
        for index in start..=last as i64 {
            frames.push(self.get(index)?);
        }
        Ok(frames)
    }

    /// Flush any writes buffered by the store
    pub fn flush(&mut self) -> Result<()> {
        self.store.flush()?;
        Ok(())
    }

    /// Unwrap the store, dropping the descriptor
    pub fn into_inner(self) -> S {
        self.store
    }
}
