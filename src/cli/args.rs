//! Command-line argument parsing for the workflow step binaries
//!
//! Flag names use underscores (`--input_folder`) so existing workflow
//! definitions can call the binaries unchanged.

use clap::{Args, Parser};
use std::path::PathBuf;

/// Flags shared by both binaries
#[derive(Args, Debug, Clone, Default)]
pub struct CommonArgs {
    /// Configuration file path (default: ~/.flowstep/config.toml if present)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Verbosity level: -q (quiet), default (normal), -v (verbose), -vv (very verbose)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long)]
    pub quiet: bool,
}

/// Picks a file whose name contains a pattern and copies it to the output folder.
/// If several files match, the first one listed is taken.
#[derive(Parser, Debug)]
#[command(name = "file_picker")]
#[command(version)]
#[command(long_about = None)]
pub struct FilePickerArgs {
    /// Folder from which the file is picked
    #[arg(long = "input_folder", value_name = "DIR")]
    pub input_folder: PathBuf,

    /// Text to look for in file names (e.g. .txt); matched literally, not as a regex
    #[arg(long = "regex", value_name = "PATTERN")]
    pub pattern: String,

    /// Folder the picked file is copied into
    #[arg(long = "output_folder", value_name = "DIR")]
    pub output_folder: PathBuf,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Executes a method on each file within a folder and saves the results
#[derive(Parser, Debug)]
#[command(name = "foreach")]
#[command(version)]
#[command(long_about = None)]
pub struct ForeachArgs {
    /// Folder containing the files to loop over
    #[arg(long = "input_folder", value_name = "DIR")]
    pub input_folder: PathBuf,

    /// URL of the method to execute
    #[arg(long = "method_url", value_name = "URL")]
    pub method_url: String,

    /// Method parameters as a JSON object (e.g. '{"threshold":0.000001,"detector":"Harris"}')
    #[arg(long = "method_parameters", value_name = "JSON")]
    pub method_parameters: Option<String>,

    /// Name of the input collection on the processing service
    #[arg(long = "collection_name", value_name = "NAME")]
    pub collection_name: String,

    /// Folder the per-file result folders are created in
    #[arg(long = "output_folder", value_name = "DIR")]
    pub output_folder: PathBuf,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Verbosity level enum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
    VeryVerbose,
}

impl CommonArgs {
    /// Get verbosity level based on flags
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else {
            match self.verbose {
                0 => Verbosity::Normal,
                1 => Verbosity::Verbose,
                _ => Verbosity::VeryVerbose,
            }
        }
    }
}

impl Verbosity {
    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Verbosity::Quiet => "quiet",
            Verbosity::Normal => "normal",
            Verbosity::Verbose => "verbose",
            Verbosity::VeryVerbose => "very_verbose",
        }
    }

    /// Default log directive for this level
    pub fn log_directive(&self) -> &'static str {
        match self {
            Verbosity::Quiet => "error",
            Verbosity::Normal => "warn",
            Verbosity::Verbose => "info",
            Verbosity::VeryVerbose => "debug",
        }
    }

    /// Check if should show progress bars
    pub fn show_progress(&self) -> bool {
        !matches!(self, Verbosity::Quiet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_picker_flags() {
        let args = FilePickerArgs::try_parse_from([
            "file_picker",
            "--input_folder",
            "/data/in",
            "--regex",
            ".png",
            "--output_folder",
            "/data/out",
        ])
        .unwrap();

        assert_eq!(args.input_folder, PathBuf::from("/data/in"));
        assert_eq!(args.pattern, ".png");
        assert_eq!(args.output_folder, PathBuf::from("/data/out"));
        assert_eq!(args.common.verbosity(), Verbosity::Normal);
    }

    #[test]
    fn test_file_picker_requires_regex() {
        let result = FilePickerArgs::try_parse_from([
            "file_picker",
            "--input_folder",
            "/data/in",
            "--output_folder",
            "/data/out",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_foreach_flags() {
        let args = ForeachArgs::try_parse_from([
            "foreach",
            "--input_folder",
            "/data/in",
            "--method_url",
            "http://host/method",
            "--method_parameters",
            r#"{"threshold":0.5}"#,
            "--collection_name",
            "coll",
            "--output_folder",
            "/data/out",
            "-vv",
        ])
        .unwrap();

        assert_eq!(args.method_url, "http://host/method");
        assert_eq!(args.method_parameters.as_deref(), Some(r#"{"threshold":0.5}"#));
        assert_eq!(args.collection_name, "coll");
        assert_eq!(args.common.verbosity(), Verbosity::VeryVerbose);
    }

    #[test]
    fn test_foreach_parameters_optional() {
        let args = ForeachArgs::try_parse_from([
            "foreach",
            "--input_folder",
            "in",
            "--method_url",
            "http://host/method",
            "--collection_name",
            "coll",
            "--output_folder",
            "out",
        ])
        .unwrap();
        assert!(args.method_parameters.is_none());
    }

    #[test]
    fn test_foreach_requires_collection() {
        let result = ForeachArgs::try_parse_from([
            "foreach",
            "--input_folder",
            "in",
            "--method_url",
            "http://host/method",
            "--output_folder",
            "out",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_verbosity_quiet_wins() {
        let common = CommonArgs {
            config: None,
            verbose: 2,
            quiet: true,
        };
        assert_eq!(common.verbosity(), Verbosity::Quiet);
    }

    #[test]
    fn test_verbosity_methods() {
        assert!(!Verbosity::Quiet.show_progress());
        assert!(Verbosity::Normal.show_progress());
        assert_eq!(Verbosity::Verbose.log_directive(), "info");
        assert_eq!(Verbosity::VeryVerbose.as_str(), "very_verbose");
    }
}
