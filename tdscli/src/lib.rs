mod args;
mod config;
mod error;
mod filter;
mod java;
mod options;
mod runner;
mod standalone;
mod versioned;

pub use args::Target;
pub use config::{InvocationConfig, JarVersion, install_dir};
pub use error::InvokeError;
pub use options::{InvocationOptions, OptionValue};
pub use runner::{Invocation, ProcessResult};
pub use standalone::Standalone;
pub use versioned::Tdscli;
