pub mod logging;
pub mod paths;

pub use logging::init_logging;
pub use paths::{room_file_path, validate_room_dir};
