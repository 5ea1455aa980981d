pub mod converter;
pub mod error;
pub mod layout;
pub mod loader;
pub mod palette;
pub mod processor;
pub mod scaler;

pub use converter::AsciiConverter;
pub use error::ConvertError;
pub use layout::AsciiArt;
pub use palette::Palette;
