use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::thread::{self, JoinHandle};

use crate::error::InvokeError;
use crate::filter::{filter_stderr, filter_stdout};

/// Child environment handling: pass the wrapper's environment through, or
/// start from nothing and set only the listed variables.
pub(crate) enum EnvPolicy {
    Inherit,
    Explicit(Vec<(String, String)>),
}

pub(crate) struct InvocationSpec {
    pub program: PathBuf,
    pub args: Vec<String>,
    pub cwd: PathBuf,
    pub env: EnvPolicy,
}

/// Filtered output and exit status of one completed invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessResult {
    pub stdout: String,
    pub stderr: String,
    pub code: i32,
}

/// A started (or spawn-failed) invocation. [`Invocation::wait`] settles it:
/// exit code 0 resolves to a [`ProcessResult`], anything else rejects with
/// an [`InvokeError`]. There is no timeout or cancellation; a hung child
/// keeps `wait` blocked.
pub struct Invocation {
    state: State,
}

enum State {
    Failed(InvokeError),
    Running {
        child: std::process::Child,
        stdout: JoinHandle<String>,
        stderr: JoinHandle<String>,
    },
}

impl Invocation {
    pub(crate) fn failed(error: InvokeError) -> Self {
        Self {
            state: State::Failed(error),
        }
    }

    pub fn wait(self) -> Result<ProcessResult, InvokeError> {
        match self.state {
            State::Failed(error) => Err(error),
            State::Running {
                mut child,
                stdout,
                stderr,
            } => {
                // Drain both streams before looking at the exit status so
                // settlement never races the final flush.
                let stdout = stdout.join().unwrap_or_default();
                let stderr = stderr.join().unwrap_or_default();

                let status = child.wait().map_err(InvokeError::Spawn)?;
                // No code means the child died to a signal
                let code = status.code().unwrap_or(-1);

                if code == 0 {
                    Ok(ProcessResult {
                        stdout,
                        stderr,
                        code,
                    })
                } else {
                    Err(InvokeError::NonZeroExit {
                        code,
                        stdout,
                        stderr,
                    })
                }
            }
        }
    }
}

pub(crate) fn spawn(spec: InvocationSpec, silent: bool) -> Invocation {
    let mut cmd = Command::new(&spec.program);
    cmd.args(&spec.args)
        .current_dir(&spec.cwd)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    if let EnvPolicy::Explicit(vars) = &spec.env {
        cmd.env_clear();
        cmd.envs(vars.iter().map(|(k, v)| (k.as_str(), v.as_str())));
    }

    let mut child = match cmd.spawn() {
        Ok(child) => child,
        Err(e) => return Invocation::failed(InvokeError::Spawn(e)),
    };

    // SAFE `unwrap`: both handles were requested as piped above.
    let out = child.stdout.take().unwrap();
    let err = child.stderr.take().unwrap();

    let stdout = thread::spawn(move || pump(out, silent, filter_stdout, echo_stdout));
    let stderr = thread::spawn(move || pump(err, silent, filter_stderr, echo_stderr));

    Invocation {
        state: State::Running {
            child,
            stdout,
            stderr,
        },
    }
}

/// Reads raw chunks until EOF, filters each one, echoes it unless silenced,
/// and returns everything collected. Filtering is per chunk, like the tool
/// it fronts; a banner block split across a read boundary passes through.
fn pump<R: Read>(
    mut stream: R,
    silent: bool,
    filter: fn(&str) -> String,
    echo: fn(&str),
) -> String {
    let mut collected = String::new();
    let mut buf = [0u8; 4096];

    loop {
        match stream.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => {
                let chunk = String::from_utf8_lossy(&buf[..n]);
                let filtered = filter(&chunk);

                if !silent && !filtered.trim().is_empty() {
                    echo(&filtered);
                }

                collected.push_str(&filtered);
            }
            Err(_) => break,
        }
    }

    collected
}

fn echo_stdout(text: &str) {
    print!("{}", text);
    let _ = io::stdout().flush();
}

fn echo_stderr(text: &str) {
    eprint!("{}", text);
}
