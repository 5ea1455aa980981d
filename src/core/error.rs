use std::path::PathBuf;

/// Everything that can stop an image from becoming ASCII art.
///
/// The variants exist for logging; the user only ever sees `user_message()`.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("image has no pixels ({width}x{height})")]
    EmptyImage { width: u32, height: u32 },

    #[error("{width}x{height} image shrinks to nothing within {max_width}x{max_height}")]
    ScaledToNothing {
        width: u32,
        height: u32,
        max_width: u32,
        max_height: u32,
    },
}

impl ConvertError {
    /// The single message shown when a conversion fails.
    pub fn user_message(&self) -> String {
        format!("Could not load image: {}", self)
    }
}
