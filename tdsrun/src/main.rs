mod logger;
mod reader;

use std::process;

use owo_colors::OwoColorize;
use tdscli::{Standalone, Tdscli};

use crate::reader::resolve_args;

fn main() {
    let info = match resolve_args() {
        Ok(i) => i,
        Err(e) => {
            eprintln!("❌ {}", e);
            process::exit(1);
        }
    };

    let invocation = if info.standalone {
        Standalone::new().compile(info.options)
    } else {
        Tdscli::new(info.config).exec(info.target, info.options)
    };

    match invocation.wait() {
        Ok(result) => {
            log::debug!("tdscli finished with code {}", result.code);
        }
        Err(e) => {
            eprintln!("❌ {}", e.to_string().red());
            process::exit(e.exit_code());
        }
    }
}
