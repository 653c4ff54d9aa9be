pub mod keymap;
pub mod pointer;
pub mod window;

pub use keymap::map_key;
pub use pointer::logical_position;
pub use window::{create_window, PlatformConfig};
