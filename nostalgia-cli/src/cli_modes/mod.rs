mod editor_utils;
mod maintenance_mode;
mod save_mode;
mod view_mode;

pub use maintenance_mode::{count_mode, repair_mode};
pub use save_mode::save_mode;
pub use view_mode::view_mode;
