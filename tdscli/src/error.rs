use std::fmt;
use std::io;

/// Failure of a single invocation. Settles the deferred result; there is
/// no retry or partial-success path.
#[derive(Debug)]
pub enum InvokeError {
    /// The java executable could not be started at all.
    Spawn(io::Error),
    /// The jar ran but reported failure through its exit status. The
    /// filtered output captured up to that point rides along.
    NonZeroExit {
        code: i32,
        stdout: String,
        stderr: String,
    },
}

impl fmt::Display for InvokeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            InvokeError::Spawn(e) => write!(f, "Failed to start java: {}", e),
            InvokeError::NonZeroExit { code, .. } => {
                write!(f, "Tdscli process exited with code {}", code)
            }
        }
    }
}

impl std::error::Error for InvokeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InvokeError::Spawn(e) => Some(e),
            InvokeError::NonZeroExit { .. } => None,
        }
    }
}

impl InvokeError {
    /// Exit code to forward from a wrapping process.
    pub fn exit_code(&self) -> i32 {
        match self {
            InvokeError::Spawn(_) => 1,
            InvokeError::NonZeroExit { code, .. } => *code,
        }
    }
}
