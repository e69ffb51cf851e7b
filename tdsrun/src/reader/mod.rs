mod args;
mod configure;
mod error;

pub use args::{RunInfo, resolve_args};
pub use error::ReaderError;
