#![forbid(unsafe_code)]

use anyhow::{Context, Result};
use clap::Parser;
use script_combiner::cli::Args;
use script_combiner::filter::ExtensionCategory;
use script_combiner::output::today;
use script_combiner::render::{combine, preview_file, render_tree};
use script_combiner::Project;
use std::io::Write as _;
use tracing::warn;
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(e) = run_app() {
        eprintln!("script-combiner: {e:#}");
        std::process::exit(1);
    }
}

fn init_tracing(default_level: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run_app() -> Result<()> {
    let args = Args::parse().validated();
    init_tracing(args.log_level());

    if let Some(file) = &args.preview {
        print!("{}", preview_file(file));
        return Ok(());
    }

    let mut project = if args.no_detect {
        Project::open_without_detection(&args.path)
    } else {
        Project::open(&args.path)
    }
    .with_context(|| format!("{}: failed to open project", args.path.display()))?;

    if let Some(preset) = args.preset {
        project.apply_preset(preset);
    }
    if let Some(file) = &args.ignore_file {
        project
            .load_ignore_file(file)
            .context("failed to load ignore file")?;
    }

    let config = project.config_mut();
    config.show_hidden = args.show_hidden;
    config.follow_symlinks = !args.no_follow_symlinks;
    config.ignore.extend(args.ignore.iter().cloned());
    for category in &args.enable {
        config.filter.enable(*category);
    }
    for category in &args.disable {
        config.filter.disable(*category);
    }
    for path in &args.ignore_item {
        project
            .ignore_item(path)
            .with_context(|| format!("{}: cannot ignore", path.display()))?;
    }
    for path in &args.ignore_ext {
        let added = project
            .ignore_extension_of(path)
            .with_context(|| format!("{}: cannot ignore extension", path.display()))?;
        if !added {
            warn!(path = %path.display(), "no file extension to ignore");
        }
    }

    if let Some(file) = &args.save_ignore {
        project
            .save_ignore_file(file)
            .context("failed to save ignore file")?;
    }

    if args.list_categories {
        let filter = &project.config().filter;
        let mut stdout = std::io::stdout().lock();
        for category in ExtensionCategory::ALL {
            let mark = if filter.is_enabled(category) { 'x' } else { ' ' };
            writeln!(
                stdout,
                "[{mark}] {:<22} {}",
                category.name(),
                category.extensions().join(", ")
            )?;
        }
        return Ok(());
    }

    let tree = project
        .scan()
        .with_context(|| format!("{}: scan failed", project.root().display()))?;

    let to_stdout = args.stdout || (args.tree_only && args.output.is_none());
    let text = if args.tree_only {
        render_tree(&tree)
    } else {
        combine(&tree)
    };

    if to_stdout {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(text.as_bytes())?;
        stdout.flush()?;
        return Ok(());
    }

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| project.default_output_name(today()).into());
    script_combiner::output::write_atomic(&output, &text)
        .context("failed to save combined file")?;

    if !args.quiet {
        eprintln!(
            "script-combiner: wrote {} ({} files, {:?} project)",
            output.display(),
            tree.files().len(),
            project.project_type()
        );
    }
    Ok(())
}
