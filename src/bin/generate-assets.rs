#![forbid(unsafe_code)]
//! Writes release assets: shell completions, a man page, and one ignore file
//! per built-in preset.

use anyhow::Context;
use clap::CommandFactory;
use clap_complete::{generate_to, Shell};
use clap_mangen::Man;
use script_combiner::cli::Args;
use script_combiner::Preset;
use std::fs;
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    let out_dir = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("dist"));
    let completions_dir = out_dir.join("completions");
    let man_dir = out_dir.join("man");
    let presets_dir = out_dir.join("presets");

    for dir in [&completions_dir, &man_dir, &presets_dir] {
        fs::create_dir_all(dir).with_context(|| format!("{}: cannot create", dir.display()))?;
    }

    for shell in [Shell::Bash, Shell::Zsh, Shell::Fish, Shell::PowerShell] {
        let mut cmd = Args::command();
        generate_to(shell, &mut cmd, "script-combiner", &completions_dir)?;
    }

    let mut buffer = Vec::new();
    Man::new(Args::command()).render(&mut buffer)?;
    fs::write(man_dir.join("script-combiner.1"), buffer)?;

    for preset in Preset::ALL {
        let path = presets_dir.join(format!("{preset}.gitignore"));
        preset.ignore_set().save(&path)?;
    }

    eprintln!(
        "generated completions, man page and {} preset ignore files under {}",
        Preset::ALL.len(),
        out_dir.display()
    );
    Ok(())
}
