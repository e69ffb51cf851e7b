use once_cell::sync::Lazy;
use regex::Regex;

// The jar frames its progress chatter in `>>>>` banner blocks. A
// compilation banner collapses to the single token `0` (the success
// marker downstream tooling looks for); every other banner block is
// dropped outright.
static COMPILE_BANNER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^>>>>> Compil.*(?s:.)*?>>>>\s*$").unwrap());

static GENERIC_BANNER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^>>>>.*(?s:.)*?>>>>\s*$").unwrap());

static NLS_WARNING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^Warning: NLS unused message: .*$").unwrap());

pub(crate) fn filter_stdout(chunk: &str) -> String {
    let chunk = COMPILE_BANNER.replace_all(chunk, "0");
    GENERIC_BANNER.replace_all(&chunk, "").into_owned()
}

pub(crate) fn filter_stderr(chunk: &str) -> String {
    NLS_WARNING.replace_all(chunk, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compilation_banner_collapses_to_zero() {
        let raw = "before\n>>>>> Compiling sample.prw <<<<<\nprogress 50%\n>>>>\nafter\n";
        assert_eq!(filter_stdout(raw), "before\n0\nafter\n");
    }

    #[test]
    fn generic_banner_is_removed_entirely() {
        let raw = ">>>> Connecting to server\nhandshake ok\n>>>>\n";
        assert_eq!(filter_stdout(raw).trim(), "");
    }

    #[test]
    fn banner_with_trailing_whitespace_still_closes() {
        let raw = ">>>>> Compilation started\nstep\n>>>>   \n";
        assert_eq!(filter_stdout(raw).trim(), "0");
    }

    #[test]
    fn text_outside_banners_passes_through() {
        let raw = "plain output line\n";
        assert_eq!(filter_stdout(raw), raw);
    }

    #[test]
    fn nls_warnings_are_stripped_from_stderr() {
        let raw = "Warning: NLS unused message: SOME_KEY in bundle\nreal failure\n";
        assert_eq!(filter_stderr(raw), "\nreal failure\n");
    }

    #[test]
    fn other_stderr_lines_survive() {
        let raw = "Exception in thread \"main\"\n";
        assert_eq!(filter_stderr(raw), raw);
    }
}
