mod bytes;
pub mod datetime;
pub mod media_types;
mod path;

pub use bytes::format_bytes;
pub use path::create_log_path;
