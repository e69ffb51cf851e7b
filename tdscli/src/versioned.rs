use std::path::PathBuf;

use crate::args::{Target, build_args};
use crate::config::{InvocationConfig, install_dir};
use crate::error::InvokeError;
use crate::java;
use crate::options::InvocationOptions;
use crate::runner::{self, EnvPolicy, Invocation, InvocationSpec};

/// Version-selecting wrapper around `tdscli-<version>.jar`.
///
/// The java path and configuration are resolved once at construction and
/// stay fixed for the lifetime of the instance. Each call spawns one child
/// process and returns a deferred [`Invocation`]; filtered output comes
/// back per call, so concurrent invocations on one instance do not share
/// any mutable state.
pub struct Tdscli {
    java: PathBuf,
    config: InvocationConfig,
}

impl Tdscli {
    pub fn new(config: InvocationConfig) -> Self {
        Self {
            java: java::find_platform_java(),
            config,
        }
    }

    pub fn config(&self) -> &InvocationConfig {
        &self.config
    }

    pub fn compile(&self, options: InvocationOptions) -> Invocation {
        self.exec(Target::Compile, options)
    }

    pub fn remove(&self, options: InvocationOptions) -> Invocation {
        self.exec(Target::DeleteProg, options)
    }

    pub fn generate_patch(&self, options: InvocationOptions) -> Invocation {
        self.exec(Target::PatchGen, options)
    }

    pub fn apply_patch(&self, options: InvocationOptions) -> Invocation {
        self.exec(Target::PatchApply, options)
    }

    pub fn list_patch(&self, options: InvocationOptions) -> Invocation {
        self.exec(Target::PatchInfo, options)
    }

    pub fn defrag_rpo(&self, options: InvocationOptions) -> Invocation {
        self.exec(Target::DefragRpo, options)
    }

    pub fn clear_log(&self, options: InvocationOptions) -> Invocation {
        self.exec(Target::ClearLog, options)
    }

    pub fn exec(&self, target: Target, mut options: InvocationOptions) -> Invocation {
        options.normalize();

        let home = match install_dir() {
            Ok(dir) => dir,
            Err(e) => return Invocation::failed(InvokeError::Spawn(e)),
        };

        let jar = home.join(self.config.version.jar_name());
        let args = build_args(&jar, target, &options);

        if self.config.debug {
            log::debug!("COMMAND: {} {}", self.java.display(), args.join(" "));
        }

        runner::spawn(
            InvocationSpec {
                program: self.java.clone(),
                args,
                cwd: home,
                env: EnvPolicy::Inherit,
            },
            self.config.silent,
        )
    }
}

impl Default for Tdscli {
    fn default() -> Self {
        Self::new(InvocationConfig::default())
    }
}
