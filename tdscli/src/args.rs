use std::path::Path;

use crate::options::{InvocationOptions, WORKSPACE_KEY};

/// Subcommands understood by the jar, with their exact wire tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Compile,
    DeleteProg,
    PatchGen,
    PatchApply,
    PatchInfo,
    DefragRpo,
    ClearLog,
}

impl Target {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Compile => "compile",
            Self::DeleteProg => "deleteProg",
            Self::PatchGen => "patchgen",
            Self::PatchApply => "patchapply",
            Self::PatchInfo => "patchinfo",
            Self::DefragRpo => "defragRPO",
            Self::ClearLog => "clearLog",
        }
    }
}

/// Builds the child argv: fixed preamble, target token, then one
/// `key=value` per option in insertion order. The jar is order-sensitive
/// for some flags, so this order is part of the contract.
pub(crate) fn build_args(jar: &Path, target: Target, options: &InvocationOptions) -> Vec<String> {
    let mut args = vec![
        "-Dfile.encoding=UTF-8".to_owned(),
        "-jar".to_owned(),
        jar.to_string_lossy().into_owned(),
    ];

    args.push(target.as_str().to_owned());

    for (key, value) in options.iter() {
        if key == WORKSPACE_KEY {
            continue;
        }
        args.push(format!("{key}={value}"));
    }

    args
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::OptionValue;

    fn args_for(options: &InvocationOptions) -> Vec<String> {
        build_args(Path::new("/opt/tds/tdscli-11.4.jar"), Target::Compile, options)
    }

    #[test]
    fn preamble_then_target_then_options() {
        let mut options = InvocationOptions::new();
        options.set("program", "sample.prw").set("recompile", "t");

        let args = args_for(&options);
        assert_eq!(
            args,
            vec![
                "-Dfile.encoding=UTF-8",
                "-jar",
                "/opt/tds/tdscli-11.4.jar",
                "compile",
                "program=sample.prw",
                "recompile=t",
            ]
        );
    }

    #[test]
    fn options_keep_insertion_order() {
        let mut options = InvocationOptions::new();
        options.set("z", "1").set("a", "2").set("m", "3");

        let args = args_for(&options);
        assert_eq!(&args[4..], &["z=1", "a=2", "m=3"]);
    }

    #[test]
    fn workspace_key_is_never_serialized() {
        let mut options = InvocationOptions::new();
        options
            .set("workspace", "/home/dev/project")
            .set("program", "sample.prw");

        let args = args_for(&options);
        assert!(args.iter().all(|a| !a.starts_with("workspace=")));
        assert!(args.contains(&"program=sample.prw".to_owned()));

        let mut options = InvocationOptions::new();
        options.set("workspace", OptionValue::from(vec!["a", "b"]));
        let args = args_for(&options);
        assert_eq!(args.len(), 4);
    }

    #[test]
    fn list_options_join_with_semicolon() {
        let mut options = InvocationOptions::new();
        options.set("tags", vec!["a", "b", "c"]);

        let args = args_for(&options);
        assert!(args.contains(&"tags=a;b;c".to_owned()));
    }

    #[test]
    fn target_wire_tokens() {
        assert_eq!(Target::Compile.as_str(), "compile");
        assert_eq!(Target::DeleteProg.as_str(), "deleteProg");
        assert_eq!(Target::PatchGen.as_str(), "patchgen");
        assert_eq!(Target::PatchApply.as_str(), "patchapply");
        assert_eq!(Target::PatchInfo.as_str(), "patchinfo");
        assert_eq!(Target::DefragRpo.as_str(), "defragRPO");
        assert_eq!(Target::ClearLog.as_str(), "clearLog");
    }
}
