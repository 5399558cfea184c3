//! Error types for wavio

use thiserror::Error;

/// Result type alias for wavio operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for wavio
///
/// Every header variant carries the raw value that failed validation so the
/// caller can report exactly what the file contained.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error from the underlying store, including short reads
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// First four bytes are not `RIFF`
    #[error("Not a RIFF file: found tag {}", tag_display(.0))]
    NotRiff([u8; 4]),

    /// RIFF form type is not `WAVE`
    #[error("Not a WAVE file: found form type {}", tag_display(.0))]
    NotWave([u8; 4]),

    /// Expected the `fmt ` chunk right after the RIFF header
    #[error("Missing fmt chunk: found tag {}", tag_display(.0))]
    MissingFmtChunk([u8; 4]),

    /// `fmt ` chunk carries extension bytes beyond the 16-byte PCM layout
    #[error("Unsupported fmt chunk length: {0} (only 16 is supported)")]
    UnsupportedFmtExtension(u32),

    /// Audio format tag other than PCM
    #[error("Unsupported audio format: 0x{0:04x} (only PCM is supported)")]
    UnsupportedFormat(u16),

    /// Channel count other than mono or stereo
    #[error("Unsupported channel count: {0}")]
    UnsupportedChannelCount(u16),

    /// Bit depth other than 8 or 16
    #[error("Unsupported bit depth: {0}")]
    UnsupportedBitDepth(u16),

    /// Declared block align disagrees with channels and bit depth
    #[error("Invalid block align: {block_align} (expected {expected})")]
    InvalidBlockAlign { block_align: u16, expected: u16 },

    /// Expected the `data` chunk right after the `fmt ` chunk
    #[error("Missing data chunk: found tag {}", tag_display(.0))]
    MissingDataChunk([u8; 4]),

    /// Data chunk does not hold a whole number of frames
    #[error("Misaligned data chunk: length {length} is not a multiple of block align {block_align}")]
    MisalignedDataChunk { length: u32, block_align: u16 },

    /// Frame index outside `[0, frame_count)`
    #[error("Frame index {index} out of range (0-{frame_count})")]
    IndexOutOfRange { index: i64, frame_count: u64 },

    /// Mono value given for a stereo file or the reverse
    #[error("Invalid value shape: file has {expected} channel(s), value has {got}")]
    InvalidValueShape { expected: u16, got: u16 },

    /// Sample value does not fit the file's bit depth
    #[error("Sample value {value} out of range ({min}..={max})")]
    SampleOutOfRange { value: i32, min: i32, max: i32 },

    /// Requested file is too large for a RIFF length field
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    /// Create an invalid input error
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        Error::InvalidInput(msg.into())
    }

    /// True for errors raised while validating the header
    pub fn is_header_error(&self) -> bool {
        matches!(
            self,
            Error::NotRiff(_)
                | Error::NotWave(_)
                | Error::MissingFmtChunk(_)
                | Error::UnsupportedFmtExtension(_)
                | Error::UnsupportedFormat(_)
                | Error::UnsupportedChannelCount(_)
                | Error::UnsupportedBitDepth(_)
                | Error::InvalidBlockAlign { .. }
                | Error::MissingDataChunk(_)
                | Error::MisalignedDataChunk { .. }
        )
    }
}

fn tag_display(tag: &[u8; 4]) -> String {
    format!("{:?}", String::from_utf8_lossy(tag))
}
