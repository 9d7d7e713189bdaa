//! Utility modules

pub mod file_info;
pub mod file_ops;

pub use file_info::FileProperties;
pub use file_ops::{create_folder, create_new_file, new_file_name, seed_content};
