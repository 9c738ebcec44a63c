mod classifier;
mod error;
mod importer;
mod runner;
mod scanner;
#[cfg(test)]
mod test_support;

pub use classifier::{classify_date, read_capture_time};
pub use error::ImportError;
pub use importer::{ImportHandle, Importer};
pub use runner::{ImportRunner, SUCCESS_MESSAGE};
pub use scanner::PhotoScanner;
