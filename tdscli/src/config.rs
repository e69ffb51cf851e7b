use std::io;
use std::{env, path::PathBuf};

pub const DEFAULT_VERSION: JarVersion = JarVersion::V11_4;

/// Jar releases the wrapper knows how to drive. Anything else falls back
/// to [`DEFAULT_VERSION`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JarVersion {
    V11_3,
    V11_4,
}

impl JarVersion {
    pub fn from_requested(requested: &str) -> Self {
        match requested {
            "11.3" => Self::V11_3,
            "11.4" => Self::V11_4,
            _ => DEFAULT_VERSION,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::V11_3 => "11.3",
            Self::V11_4 => "11.4",
        }
    }

    pub fn jar_name(&self) -> String {
        format!("tdscli-{}.jar", self.as_str())
    }
}

impl Default for JarVersion {
    fn default() -> Self {
        DEFAULT_VERSION
    }
}

#[derive(Debug, Clone, Default)]
pub struct InvocationConfig {
    pub silent: bool,
    pub debug: bool,
    pub version: JarVersion,
}

/// Directory the wrapper (and its jars) are installed in. The child
/// process runs here, not in the caller's working directory.
pub fn install_dir() -> io::Result<PathBuf> {
    if cfg!(debug_assertions) {
        // debug
        env::current_dir()
    } else {
        // release
        let exe_path = env::current_exe()?;
        let exe_dir = exe_path
            .parent()
            .ok_or_else(|| io::Error::other("Failed to get exe directory"))?;
        Ok(exe_dir.to_path_buf())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_version_falls_back_to_default() {
        assert_eq!(JarVersion::from_requested("12.0"), DEFAULT_VERSION);
        assert_eq!(JarVersion::from_requested(""), DEFAULT_VERSION);
        assert_eq!(JarVersion::from_requested("11.35"), DEFAULT_VERSION);
    }

    #[test]
    fn supported_versions_are_kept() {
        assert_eq!(JarVersion::from_requested("11.3"), JarVersion::V11_3);
        assert_eq!(JarVersion::from_requested("11.4"), JarVersion::V11_4);
    }

    #[test]
    fn jar_name_is_version_templated() {
        assert_eq!(JarVersion::V11_3.jar_name(), "tdscli-11.3.jar");
        assert_eq!(JarVersion::default().jar_name(), "tdscli-11.4.jar");
    }
}
