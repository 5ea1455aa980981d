pub mod interactive;
pub mod menu;
