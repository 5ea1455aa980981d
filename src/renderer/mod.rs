pub mod display;
pub mod state;
pub mod viewport;

pub use display::{TextView, ViewAction};
