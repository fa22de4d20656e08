use clap::Parser;
use std::path::PathBuf;

use crate::filter::ExtensionCategory;
use crate::preset::Preset;

const EXAMPLES: &str = "\
Examples:
  script-combiner                          combine the current directory
  script-combiner ~/games/dungeon -o ctx.txt
  script-combiner . --tree-only            print only the directory listing
  script-combiner . -p node -I 'coverage/' --enable md
  script-combiner . --ignore-file .gitignore --save-ignore combiner.ignore
  script-combiner . --ignore-item assets/big --ignore-ext data/dump.csv";

#[derive(Parser, Debug, Clone)]
#[command(
    name = "script-combiner",
    version,
    about = "Combine a filtered project tree into one text file for LLM prompts",
    after_help = EXAMPLES
)]
pub struct Args {
    /// Project root (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Write the combined document here (default: <type>_<project>_<date>.txt)
    #[arg(short = 'o', long = "output", conflicts_with = "stdout")]
    pub output: Option<PathBuf>,

    /// Print the result to stdout instead of writing a file
    #[arg(long = "stdout")]
    pub stdout: bool,

    /// Only render the directory listing
    #[arg(long = "tree-only")]
    pub tree_only: bool,

    /// Show hidden files (dotfiles)
    #[arg(short = 'a', long = "all")]
    pub show_hidden: bool,

    /// List symlinked directories without descending into them
    #[arg(long = "no-follow-symlinks")]
    pub no_follow_symlinks: bool,

    /// Apply a preset instead of detecting the project type
    /// [default, godot, unity, node]
    #[arg(short = 'p', long = "preset")]
    pub preset: Option<Preset>,

    /// Do not detect the project type from marker files
    #[arg(long = "no-detect")]
    pub no_detect: bool,

    /// Replace ignore patterns with the lines of this file
    #[arg(long = "ignore-file")]
    pub ignore_file: Option<PathBuf>,

    /// Glob patterns to exclude (repeatable)
    #[arg(short = 'I', long = "ignore", action = clap::ArgAction::Append)]
    pub ignore: Vec<String>,

    /// Ignore this file or directory by its path under the root (repeatable)
    #[arg(long = "ignore-item", value_name = "PATH", action = clap::ArgAction::Append)]
    pub ignore_item: Vec<PathBuf>,

    /// Ignore every file sharing this file's extension (repeatable)
    #[arg(long = "ignore-ext", value_name = "FILE", action = clap::ArgAction::Append)]
    pub ignore_ext: Vec<PathBuf>,

    /// Save the effective ignore patterns to this file
    #[arg(long = "save-ignore")]
    pub save_ignore: Option<PathBuf>,

    /// Enable an extension category, by name or extension (repeatable)
    #[arg(long = "enable", action = clap::ArgAction::Append)]
    pub enable: Vec<ExtensionCategory>,

    /// Disable an extension category, by name or extension (repeatable)
    #[arg(long = "disable", action = clap::ArgAction::Append)]
    pub disable: Vec<ExtensionCategory>,

    /// List extension categories and whether they are enabled, then exit
    #[arg(long = "list-categories")]
    pub list_categories: bool,

    /// Print one file's contents and exit
    #[arg(long = "preview", value_name = "FILE")]
    pub preview: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only report errors
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,
}

impl Args {
    /// Enforce invariants after parsing.
    pub fn validated(mut self) -> Self {
        if self.quiet {
            self.verbose = 0;
        }
        // An explicit preset replaces detection.
        if self.preset.is_some() {
            self.no_detect = true;
        }
        self
    }

    /// Default log filter directive for the chosen verbosity.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
