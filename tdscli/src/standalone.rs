use std::path::PathBuf;

use crate::args::{Target, build_args};
use crate::config::install_dir;
use crate::error::InvokeError;
use crate::java;
use crate::options::InvocationOptions;
use crate::runner::{self, EnvPolicy, Invocation, InvocationSpec};

const STANDALONE_JAR: &str = "tdscli.jar";

/// Fixed-jar wrapper. Unlike [`crate::Tdscli`] it resolves java through
/// `JAVA_HOME`/`JRE_HOME` on every platform, always echoes the command it
/// runs, and hands the child an explicit environment holding only
/// `TDS_APPRE` (the installation directory).
pub struct Standalone {
    java: PathBuf,
}

impl Standalone {
    pub fn new() -> Self {
        Self {
            java: java::find_home_java(),
        }
    }

    pub fn compile(&self, mut options: InvocationOptions) -> Invocation {
        options.normalize();

        let home = match install_dir() {
            Ok(dir) => dir,
            Err(e) => return Invocation::failed(InvokeError::Spawn(e)),
        };

        let jar = home.join(STANDALONE_JAR);
        let args = build_args(&jar, Target::Compile, &options);

        log::info!("COMMAND: {} {}", self.java.display(), args.join(" "));
        log::info!("TDS_APPRE: {}", home.display());

        runner::spawn(
            InvocationSpec {
                program: self.java.clone(),
                args,
                cwd: home.clone(),
                env: EnvPolicy::Explicit(vec![(
                    "TDS_APPRE".to_owned(),
                    home.to_string_lossy().into_owned(),
                )]),
            },
            false,
        )
    }
}

impl Default for Standalone {
    fn default() -> Self {
        Self::new()
    }
}
