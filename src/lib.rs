//! wavio - random-access PCM sample editing for WAV files
//!
//! wavio parses the RIFF/WAVE header of an already-open byte store and then
//! reads or overwrites individual frames in place, without loading the audio
//! payload into memory.
//!
//! # Architecture
//!
//! - `format`: RIFF/WAVE header parsing, frame access and file creation
//! - `util`: sample format definitions
//! - `error`: the crate error type
//!
//! # Example
//!
//! ```no_run
//! use std::fs::OpenOptions;
//! use wavio_lib::format::{Frame, WaveFile};
//!
//! # fn main() -> wavio_lib::Result<()> {
//! let file = OpenOptions::new().read(true).write(true).open("take1.wav")?;
//! let mut wav = WaveFile::open(file)?;
//! if let Frame::Stereo(left, right) = wav.get(0)? {
//!     wav.set(0, Frame::Stereo(right, left))?;
//! }
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod format;
pub mod util;

pub use error::{Error, Result};

/// wavio version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Configuration for the wavio library
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Enable verbose logging
    pub verbose: bool,
    /// Enable debug output
    pub debug: bool,
}

/// Initialize the wavio library with the given configuration
pub fn init(config: Config) -> Result<()> {
    if config.verbose || config.debug {
        let level = if config.debug { "debug" } else { "info" };
        let installed = tracing_subscriber::fmt()
            .with_env_filter(level)
            .with_writer(std::io::stderr)
            .try_init();
        if installed.is_err() {
            // the host application already owns the global subscriber
            tracing::debug!("Tracing subscriber already installed, keeping it");
        }
    }

    Ok(())
}
