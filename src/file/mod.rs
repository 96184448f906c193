pub mod operations;

pub use operations::{read_file, write_file, DEFAULT_FILE_MODE};
