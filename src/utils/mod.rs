mod config;
mod error;
mod io_utils;
mod readers;
mod util;

pub use config::{locate_config, Config, RawConfig, CONFIG_FILE_NAME};
pub use error::SpatialError;
pub use io_utils::{ensure_parent_dir, figure_path};
pub use readers::open_table_reader;
pub use util::{handle_error_and_exit, Result};
