//! Container format handling
//!
//! Only RIFF/WAVE is supported. Files are accessed frame by frame through an
//! already-open byte store rather than decoded as a stream.

pub mod wav;

pub use wav::{Frame, WaveDescriptor, WaveFile, WaveSpec};

/// Detect format from file extension
pub fn detect_format_from_extension(path: &str) -> Option<&'static str> {
    let ext = path.rsplit('.').next()?.to_lowercase();
    match ext.as_str() {
        "wav" | "wave" => Some("wav"),
        _ => None,
    }
}
