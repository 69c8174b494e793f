// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Parentela-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Parentela and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Parentela CLI entrypoint.
//!
//! Runs the interactive family-tree TUI, optionally loading a JSON snapshot
//! file (which is also where `s` saves back to).

use std::error::Error;
use std::fs;
use std::path::PathBuf;

use parentela::model::TreeSnapshot;
use parentela::tui;
use parentela::workspace::Workspace;

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [<tree.json>]\n  {program} [--tree <tree.json>]\n  {program} --demo\n\nWithout a file the TUI starts with an empty tree.\n--demo uses a built-in demo family and cannot be combined with a tree file."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    demo: bool,
    tree_path: Option<String>,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--demo" => {
                if options.demo {
                    return Err(());
                }
                options.demo = true;
            }
            "--tree" => {
                if options.tree_path.is_some() {
                    return Err(());
                }
                let path = args.next().ok_or(())?;
                options.tree_path = Some(path);
            }
            _ if arg.starts_with('-') => return Err(()),
            _ => {
                if options.tree_path.is_some() {
                    return Err(());
                }
                options.tree_path = Some(arg);
            }
        }
    }

    if options.demo && options.tree_path.is_some() {
        return Err(());
    }

    Ok(options)
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "parentela".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        if options.demo {
            return tui::run();
        }

        match options.tree_path {
            Some(path) => {
                let path = PathBuf::from(path);
                let text = fs::read_to_string(&path)?;
                let snapshot = TreeSnapshot::from_json(&text)?;
                let workspace = Workspace::from_snapshot(snapshot)?;
                tui::run_with_workspace(workspace, Some(path))
            }
            None => tui::run_with_workspace(Workspace::new(), None),
        }
    })();

    if let Err(err) = result {
        eprintln!("parentela: {err}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_options, CliOptions};

    #[test]
    fn parses_empty_args() {
        let options = parse_options(std::iter::empty()).expect("parse options");
        assert_eq!(options, CliOptions::default());
    }

    #[test]
    fn parses_demo_flag() {
        let options = parse_options(["--demo".to_owned()].into_iter()).expect("parse options");
        assert!(options.demo);
        assert!(options.tree_path.is_none());
    }

    #[test]
    fn parses_tree_flag_and_positional() {
        let options = parse_options(["--tree".to_owned(), "fam.json".to_owned()].into_iter())
            .expect("parse options");
        assert_eq!(options.tree_path.as_deref(), Some("fam.json"));

        let options = parse_options(["fam.json".to_owned()].into_iter()).expect("parse options");
        assert_eq!(options.tree_path.as_deref(), Some("fam.json"));
    }

    #[test]
    fn rejects_demo_with_tree_file() {
        parse_options(["--demo".to_owned(), "fam.json".to_owned()].into_iter()).unwrap_err();
    }

    #[test]
    fn rejects_unknown_flags_and_duplicates() {
        parse_options(["--nope".to_owned()].into_iter()).unwrap_err();
        parse_options(["--demo".to_owned(), "--demo".to_owned()].into_iter()).unwrap_err();
        parse_options(["one.json".to_owned(), "two.json".to_owned()].into_iter()).unwrap_err();
        parse_options(["--tree".to_owned()].into_iter()).unwrap_err();
    }
}
