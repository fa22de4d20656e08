//! End-to-end scenarios for script-combiner.
//!
//! Exercises the full pipeline:
//! 1. Builds realistic project fixtures for each preset
//! 2. Scans them through `Project` and the free `scan` function
//! 3. Renders the listing and the combined document
//! 4. Saves, reloads and compares the results on disk
//!
//! Run with tracing output:
//!   RUST_LOG=debug cargo test --test final_integration -- --nocapture

mod common;

use common::{all_paths, create_fixture, create_fixture_with, file_paths, preset_scan_config};
use script_combiner::render::{combine, render_tree, RULE};
use script_combiner::tree::scan;
use script_combiner::{ExtensionCategory, Preset, Project, ProjectType};
use std::fs;
use tempfile::TempDir;
use tracing::{info, span, Level};
use tracing_subscriber::EnvFilter;

// ───────────────────────────────────────────────────
// Helpers
// ───────────────────────────────────────────────────

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .with_target(false)
        .with_file(true)
        .with_line_number(true)
        .with_test_writer()
        .try_init();
}

// ───────────────────────────────────────────────────
// Scenarios
// ───────────────────────────────────────────────────

#[test]
fn test_default_preset_skips_vcs_and_objects() {
    init_tracing();
    let _span = span!(Level::INFO, "default_preset").entered();

    let tmp = create_fixture(&["src/main.cpp", ".git/config", "build/out.o"]);
    let tree = scan(tmp.path(), &preset_scan_config(Preset::Default)).unwrap();
    info!(paths = ?all_paths(&tree), "scanned");

    assert_eq!(file_paths(&tree), vec!["src/main.cpp"]);
    assert!(tree.find(".git").is_none());
    assert!(tree.find(".git/config").is_none());
    // build/ is not a default pattern: it stays as an empty directory.
    let build = tree.find("build").expect("build dir is listed");
    assert!(build.children.is_empty());
}

#[test]
fn test_godot_preset_includes_scenes_and_drops_imports() {
    init_tracing();
    let _span = span!(Level::INFO, "godot_preset").entered();

    let tmp = create_fixture(&["project.godot", "scene.tscn", "icon.png.import"]);
    let tree = scan(tmp.path(), &preset_scan_config(Preset::Godot)).unwrap();
    let files = file_paths(&tree);
    info!(?files, "scanned");

    assert!(files.contains(&"scene.tscn".to_string()));
    assert!(!files.contains(&"icon.png.import".to_string()));
    assert!(!files.contains(&"project.godot".to_string()));
}

#[test]
fn test_extensionless_file_always_excluded() {
    init_tracing();
    let _span = span!(Level::INFO, "extensionless").entered();

    let tmp = create_fixture(&["Makefile", "main.c"]);
    for preset in Preset::ALL {
        let mut cfg = preset_scan_config(preset);
        for category in ExtensionCategory::ALL {
            cfg.filter.enable(category);
        }
        let tree = scan(tmp.path(), &cfg).unwrap();
        assert_eq!(file_paths(&tree), vec!["main.c"], "preset {preset}");
    }
}

// ───────────────────────────────────────────────────
// Full pipeline
// ───────────────────────────────────────────────────

#[test]
fn test_full_pipeline_node_project() {
    init_tracing();
    let _span = span!(Level::INFO, "full_pipeline").entered();

    let tmp = create_fixture_with(&[
        ("package.json", "{\"name\":\"shop\"}\n"),
        ("package-lock.json", "{}\n"),
        ("src/index.ts", "export const x = 1;\n"),
        ("src/legacy.cjs", "module.exports = {};\n"),
        ("dist/bundle.js", "minified\n"),
        ("node_modules/left-pad/index.js", "pad\n"),
        ("README.md", "# shop\n"),
    ]);

    let project = {
        let _span = span!(Level::INFO, "open").entered();
        let project = Project::open(tmp.path()).unwrap();
        assert_eq!(project.project_type(), ProjectType::Node);
        assert!(project.config().filter.is_enabled(ExtensionCategory::TypeScript));
        project
    };

    let tree = {
        let _span = span!(Level::INFO, "scan").entered();
        let tree = project.scan().unwrap();
        let mut files = file_paths(&tree);
        files.sort();
        assert_eq!(files, vec!["README.md", "package.json", "src/index.ts", "src/legacy.cjs"]);
        assert!(tree.find("dist").is_none());
        assert!(tree.find("node_modules").is_none());
        tree
    };

    {
        let _span = span!(Level::INFO, "save").entered();
        let out = TempDir::new().unwrap();
        let name = project.default_output_name(chrono::NaiveDate::from_ymd_opt(2024, 3, 9).unwrap());
        assert_eq!(name, format!("node_{}_2024-03-09.txt", project.name()));

        let path = out.path().join(&name);
        project.save_combined(&tree, &path).unwrap();
        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, combine(&tree));

        let header = format!("{RULE}\n# Project Structure\n{RULE}\n{}\n", render_tree(&tree));
        assert!(written.starts_with(&header));
        assert!(written.contains(&format!("\n{RULE}\n# src/index.ts\n{RULE}\nexport const x = 1;\n")));
        assert!(!written.contains("minified"));
        info!(bytes = written.len(), "combined file verified");
    }
}

#[test]
fn test_full_pipeline_with_saved_ignore_file() {
    init_tracing();
    let _span = span!(Level::INFO, "ignore_roundtrip").entered();

    let tmp = create_fixture_with(&[
        ("main.py", "print('hi')\n"),
        ("scratch/tmp.py", "junk\n"),
        ("notes.md", "todo\n"),
    ]);
    let cfg_dir = TempDir::new().unwrap();
    let ignore_path = cfg_dir.path().join("combiner.ignore");

    let mut first = Project::open(tmp.path()).unwrap();
    assert_eq!(first.project_type(), ProjectType::None);
    first.config_mut().ignore.push("scratch/");
    first.config_mut().filter.disable(ExtensionCategory::Markdown);
    first.save_ignore_file(&ignore_path).unwrap();
    let tree_first = first.scan().unwrap();
    assert_eq!(file_paths(&tree_first), vec!["main.py"]);

    let mut second = Project::open_without_detection(tmp.path()).unwrap();
    second.load_ignore_file(&ignore_path).unwrap();
    second.config_mut().filter.disable(ExtensionCategory::Markdown);
    assert_eq!(second.config().ignore, first.config().ignore);
    assert_eq!(second.scan().unwrap(), tree_first);
}

#[test]
fn test_preset_switch_rescans() {
    init_tracing();
    let _span = span!(Level::INFO, "preset_switch").entered();

    let tmp = create_fixture(&["Assets/Player.cs", "Assets/Main.unity", "Library/cache.json", "tool.py"]);
    let mut project = Project::open_without_detection(tmp.path()).unwrap();

    let before = file_paths(&project.scan().unwrap());
    assert!(before.contains(&"tool.py".to_string()));
    assert!(before.contains(&"Library/cache.json".to_string()));

    project.apply_preset(Preset::Unity);
    let mut after = file_paths(&project.scan().unwrap());
    after.sort();
    assert_eq!(after, vec!["Assets/Main.unity", "Assets/Player.cs"]);
}
