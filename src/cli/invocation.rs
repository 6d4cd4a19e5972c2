//! Typed command invocation.

use crate::error::{FsnavError, Result};

use super::args::Cli;

/// One validated command, built from the raw [`Cli`] bundle.
///
/// Paths are kept as typed by the user; they are resolved against the
/// working directory when the command runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// `ls [path] [-a]`
    List { path: String, all: bool },
    /// `mkdir <path>`
    MakeDir { path: String },
    /// `cd <path>`
    ChangeDir { path: String },
    /// `rmdir <path>`
    RemoveDir { path: String },
    /// `rm <path>`
    RemoveFile { path: String },
    /// `rm -r <target>`
    RemoveTree { target: String },
    /// `cp <source> <destination>`
    Copy { source: String, destination: String },
    /// `mv <source> <destination>`
    Move { source: String, destination: String },
    /// `find [path] -p <pattern>`
    Find { path: String, pattern: String },
    /// `cat -f <file>`
    Cat { file: String },
    /// `logs`
    Logs,
}

impl Invocation {
    /// Every command name fsnav accepts.
    pub const COMMANDS: [&'static str; 10] = [
        "ls", "mkdir", "cd", "rmdir", "rm", "cp", "mv", "find", "logs", "cat",
    ];

    /// Build an invocation, failing on unknown commands or missing arguments.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let path = cli.path.clone();
        let invocation = match cli.command.as_str() {
            "ls" => Self::List {
                path,
                all: cli.all,
            },
            "mkdir" => Self::MakeDir { path },
            "cd" => Self::ChangeDir { path },
            "rmdir" => Self::RemoveDir { path },
            "rm" => match &cli.recursive {
                Some(target) => Self::RemoveTree {
                    target: target.clone(),
                },
                None => Self::RemoveFile { path },
            },
            "cp" => Self::Copy {
                source: path,
                destination: require(cli, cli.destination.as_ref(), "a destination path")?,
            },
            "mv" => Self::Move {
                source: path,
                destination: require(cli, cli.destination.as_ref(), "a destination path")?,
            },
            "find" => Self::Find {
                path,
                pattern: require(cli, cli.pattern.as_ref(), "a pattern (-p/--pattern)")?,
            },
            "cat" => Self::Cat {
                file: require(cli, cli.file.as_ref(), "a file (-f/--file)")?,
            },
            "logs" => Self::Logs,
            other => {
                return Err(FsnavError::UnknownCommand {
                    name: other.to_string(),
                })
            }
        };
        Ok(invocation)
    }

    /// The command name as it appears on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Self::List { .. } => "ls",
            Self::MakeDir { .. } => "mkdir",
            Self::ChangeDir { .. } => "cd",
            Self::RemoveDir { .. } => "rmdir",
            Self::RemoveFile { .. } | Self::RemoveTree { .. } => "rm",
            Self::Copy { .. } => "cp",
            Self::Move { .. } => "mv",
            Self::Find { .. } => "find",
            Self::Cat { .. } => "cat",
            Self::Logs => "logs",
        }
    }
}

fn require(cli: &Cli, value: Option<&String>, argument: &'static str) -> Result<String> {
    value.cloned().ok_or_else(|| FsnavError::MissingArgument {
        command: cli.command.clone(),
        argument,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn parse(args: &[&str]) -> Result<Invocation> {
        let mut full = vec!["fsnav"];
        full.extend_from_slice(args);
        Invocation::from_cli(&Cli::parse_from(full))
    }

    #[test]
    fn ls_defaults_to_current_dir() {
        assert_eq!(
            parse(&["ls"]).unwrap(),
            Invocation::List {
                path: ".".into(),
                all: false
            }
        );
    }

    #[test]
    fn rm_recursive_targets_flag_value() {
        assert_eq!(
            parse(&["rm", "ignored", "-r", "build"]).unwrap(),
            Invocation::RemoveTree {
                target: "build".into()
            }
        );
        assert_eq!(
            parse(&["rm", "a.txt"]).unwrap(),
            Invocation::RemoveFile {
                path: "a.txt".into()
            }
        );
    }

    #[test]
    fn cp_requires_destination() {
        let err = parse(&["cp", "a.txt"]).unwrap_err();
        assert!(matches!(err, FsnavError::MissingArgument { .. }));
        assert!(err.to_string().contains("destination"));
    }

    #[test]
    fn mv_takes_both_paths() {
        assert_eq!(
            parse(&["mv", "a", "b"]).unwrap(),
            Invocation::Move {
                source: "a".into(),
                destination: "b".into()
            }
        );
    }

    #[test]
    fn find_requires_pattern() {
        let err = parse(&["find", "."]).unwrap_err();
        assert!(matches!(
            err,
            FsnavError::MissingArgument { ref command, .. } if command == "find"
        ));
    }

    #[test]
    fn cat_requires_file() {
        assert!(parse(&["cat"]).is_err());
        assert_eq!(
            parse(&["cat", "-f", "notes.txt"]).unwrap(),
            Invocation::Cat {
                file: "notes.txt".into()
            }
        );
    }

    #[test]
    fn unknown_command_is_rejected() {
        let err = parse(&["frobnicate"]).unwrap_err();
        assert!(matches!(err, FsnavError::UnknownCommand { ref name } if name == "frobnicate"));
    }

    #[test]
    fn names_cover_every_command() {
        for command in Invocation::COMMANDS {
            let args: Vec<&str> = match command {
                "cp" | "mv" => vec![command, "a", "b"],
                "find" => vec![command, "-p", "x"],
                "cat" => vec![command, "-f", "x"],
                _ => vec![command],
            };
            assert_eq!(parse(&args).unwrap().name(), command);
        }
    }
}
