//! Common test utilities for wavio integration tests
//!
//! Builds WAV images byte by byte so individual header fields can be
//! corrupted for the error handling suites.

#![allow(dead_code)]

use std::io::Cursor;

pub const HEADER_LEN: usize = 44;

// ============================================================================
// WAV Image Builder
// ============================================================================

/// Field-by-field builder for a canonical WAV file
#[derive(Debug, Clone)]
pub struct WavBuilder {
    pub riff: [u8; 4],
    pub wave: [u8; 4],
    pub fmt: [u8; 4],
    pub fmt_len: u32,
    pub audio_format: u16,
    pub channels: u16,
    pub sample_rate: u32,
    pub block_align: Option<u16>,
    pub bits_per_sample: u16,
    pub data_tag: [u8; 4],
    pub data_len: Option<u32>,
    pub data: Vec<u8>,
}

impl WavBuilder {
    pub fn new(channels: u16, bits_per_sample: u16) -> Self {
        WavBuilder {
            riff: *b"RIFF",
            wave: *b"WAVE",
            fmt: *b"fmt ",
            fmt_len: 16,
            audio_format: 1,
            channels,
            sample_rate: 8000,
            block_align: None,
            bits_per_sample,
            data_tag: *b"data",
            data_len: None,
            data: Vec::new(),
        }
    }

    pub fn data(mut self, data: &[u8]) -> Self {
        self.data = data.to_vec();
        self
    }

    pub fn sample_rate(mut self, rate: u32) -> Self {
        self.sample_rate = rate;
        self
    }

    fn effective_block_align(&self) -> u16 {
        self.block_align
            .unwrap_or(self.channels * (self.bits_per_sample / 8))
    }

    /// Serialize the header followed by the data bytes
    pub fn build(&self) -> Vec<u8> {
        let block_align = self.effective_block_align();
        let data_len = self.data_len.unwrap_or(self.data.len() as u32);
        let extension = self.fmt_len.saturating_sub(16) as usize;

        let mut bytes = Vec::new();
        bytes.extend_from_slice(&self.riff);
        let riff_len = (36 + extension as u32).wrapping_add(data_len);
        bytes.extend_from_slice(&riff_len.to_le_bytes());
        bytes.extend_from_slice(&self.wave);
        bytes.extend_from_slice(&self.fmt);
        bytes.extend_from_slice(&self.fmt_len.to_le_bytes());
        bytes.extend_from_slice(&self.audio_format.to_le_bytes());
        bytes.extend_from_slice(&self.channels.to_le_bytes());
        bytes.extend_from_slice(&self.sample_rate.to_le_bytes());
        bytes.extend_from_slice(&(self.sample_rate * block_align as u32).to_le_bytes());
        bytes.extend_from_slice(&block_align.to_le_bytes());
        bytes.extend_from_slice(&self.bits_per_sample.to_le_bytes());
        bytes.resize(bytes.len() + extension, 0);
        bytes.extend_from_slice(&self.data_tag);
        bytes.extend_from_slice(&data_len.to_le_bytes());
        bytes.extend_from_slice(&self.data);
        bytes
    }

    pub fn cursor(&self) -> Cursor<Vec<u8>> {
        Cursor::new(self.build())
    }
}

// ============================================================================
// Sample Data Generation
// ============================================================================

/// Little-endian bytes of a 16-bit ramp covering the full signed range
pub fn create_i16_ramp(frames: usize, channels: u16) -> Vec<u8> {
    let total = frames * channels as usize;
    (0..total)
        .flat_map(|i| {
            let value = (i as i64 * 65535 / total.max(1) as i64 - 32768) as i16;
            value.to_le_bytes()
        })
        .collect()
}

/// 8-bit ramp wrapping through 0..=255
pub fn create_u8_ramp(frames: usize, channels: u16) -> Vec<u8> {
    (0..frames * channels as usize).map(|i| (i % 256) as u8).collect()
}
