use std::env;
use std::path::PathBuf;

/// `JAVA_HOME` preferred, `JRE_HOME` as fallback, `bin/java` joined on,
/// `.exe` appended on Windows. With neither variable set the result is an
/// empty (or suffix-only) path; that is deliberate — the spawn later
/// fails with a not-found error the caller can handle, matching the
/// tool's historical behavior.
fn home_java(java_home: Option<&str>, jre_home: Option<&str>, windows: bool) -> PathBuf {
    let java = match java_home.or(jre_home) {
        Some(home) => PathBuf::from(home).join("bin").join("java"),
        None => PathBuf::new(),
    };

    if windows {
        let mut with_suffix = java.into_os_string();
        with_suffix.push(".exe");
        PathBuf::from(with_suffix)
    } else {
        java
    }
}

/// Versioned-variant policy: the HOME lookup only applies on Windows;
/// everywhere else `java` is resolved through the search path.
fn platform_java(java_home: Option<&str>, jre_home: Option<&str>, windows: bool) -> PathBuf {
    if windows {
        home_java(java_home, jre_home, true)
    } else {
        PathBuf::from("java")
    }
}

fn env_home(var: &str) -> Option<String> {
    env::var(var).ok().filter(|v| !v.is_empty())
}

pub(crate) fn find_home_java() -> PathBuf {
    home_java(
        env_home("JAVA_HOME").as_deref(),
        env_home("JRE_HOME").as_deref(),
        cfg!(windows),
    )
}

pub(crate) fn find_platform_java() -> PathBuf {
    platform_java(
        env_home("JAVA_HOME").as_deref(),
        env_home("JRE_HOME").as_deref(),
        cfg!(windows),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn java_home_wins_over_jre_home() {
        let java = home_java(Some("/opt/jdk"), Some("/opt/jre"), false);
        assert_eq!(java, Path::new("/opt/jdk/bin/java"));
    }

    #[test]
    fn jre_home_is_the_fallback() {
        let java = home_java(None, Some("/opt/jre"), false);
        assert_eq!(java, Path::new("/opt/jre/bin/java"));
    }

    #[test]
    fn windows_appends_exe_suffix() {
        let java = home_java(Some("C:/jdk"), None, true);
        assert!(java.to_string_lossy().ends_with("java.exe"));
    }

    #[test]
    fn missing_homes_produce_malformed_path_not_panic() {
        assert_eq!(home_java(None, None, false), PathBuf::new());
        assert_eq!(home_java(None, None, true), Path::new(".exe"));
    }

    #[test]
    fn platform_policy_uses_search_path_off_windows() {
        let java = platform_java(Some("/opt/jdk"), None, false);
        assert_eq!(java, Path::new("java"));

        let java = platform_java(Some("C:/jdk"), None, true);
        assert_eq!(java, Path::new("C:/jdk/bin/java.exe"));
    }
}
