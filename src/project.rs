//! An opened project: root, detected type, and the current scan settings.

use chrono::NaiveDate;
use std::path::{Component, Path, PathBuf};
use tracing::info;

use crate::error::{Error, Result};
use crate::ignore::IgnoreSet;
use crate::output::{default_output_name, write_atomic};
use crate::preset::{detect_project_type, Preset, ProjectType};
use crate::render::combine;
use crate::tree::{Entry, ProjectNode, ScanConfig, TreeScanner, WalkdirScanner};

pub struct Project {
    root: PathBuf,
    project_type: ProjectType,
    config: ScanConfig,
}

impl Project {
    /// Open `root`, detect its type, and apply the matching preset.
    ///
    /// Without a positive detection the default ignore patterns and the
    /// table-default extension selection are used.
    pub fn open(root: impl AsRef<Path>) -> Result<Self> {
        let mut project = Self::open_without_detection(root)?;
        let detected = detect_project_type(&project.root);
        if let Some(preset) = detected.preset() {
            info!(root = %project.root.display(), preset = %preset, "detected project type");
            project.apply_preset(preset);
        }
        Ok(project)
    }

    /// Open `root` with default settings and no project-type detection.
    pub fn open_without_detection(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref();
        let root = root
            .canonicalize()
            .map_err(|source| Error::RootUnreadable {
                path: root.to_path_buf(),
                source,
            })?;
        if !root.is_dir() {
            return Err(Error::NotADirectory(root));
        }
        let config = ScanConfig {
            ignore: Preset::Default.ignore_set(),
            ..ScanConfig::default()
        };
        Ok(Self {
            root,
            project_type: ProjectType::None,
            config,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Leaf name of the root directory.
    pub fn name(&self) -> String {
        Entry::root(&self.root).name
    }

    pub fn project_type(&self) -> ProjectType {
        self.project_type
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut ScanConfig {
        &mut self.config
    }

    /// Replace ignore patterns and extension selection with a preset's.
    pub fn apply_preset(&mut self, preset: Preset) {
        preset.apply(&mut self.config.ignore, &mut self.config.filter);
        self.project_type = preset.project_type();
    }

    /// Replace the ignore set with the contents of an ignore file.
    /// On failure the current set is kept.
    pub fn load_ignore_file(&mut self, path: &Path) -> Result<()> {
        self.config.ignore = IgnoreSet::load(path)?;
        Ok(())
    }

    pub fn save_ignore_file(&self, path: &Path) -> Result<()> {
        self.config.ignore.save(path)
    }

    /// Entry for `path`, taken relative to the root unless absolute.
    ///
    /// The path does not have to exist; a missing path counts as a file.
    pub fn entry_for(&self, path: &Path) -> Result<Entry> {
        let full = if path.is_absolute() {
            path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
        } else {
            self.root.join(path)
        };
        let escapes = full.components().any(|c| matches!(c, Component::ParentDir));
        if escapes || !full.starts_with(&self.root) {
            return Err(Error::OutsideRoot(path.to_path_buf()));
        }
        let is_dir = full.is_dir();
        Ok(Entry::new(&self.root, &full, is_dir))
    }

    /// Ignore exactly one file or directory from now on.
    pub fn ignore_item(&mut self, path: &Path) -> Result<()> {
        let entry = self.entry_for(path)?;
        if entry.relative_path.is_empty() {
            return Err(Error::OutsideRoot(path.to_path_buf()));
        }
        self.config.ignore.ignore_entry(&entry);
        Ok(())
    }

    /// Ignore every file with the same extension as `path`. Returns false
    /// when `path` is a directory or has no extension.
    pub fn ignore_extension_of(&mut self, path: &Path) -> Result<bool> {
        let entry = self.entry_for(path)?;
        Ok(self.config.ignore.ignore_extension(&entry))
    }

    pub fn scan(&self) -> Result<ProjectNode> {
        self.scan_with(&WalkdirScanner)
    }

    pub fn scan_with(&self, scanner: &dyn TreeScanner) -> Result<ProjectNode> {
        scanner.scan(&self.root, &self.config)
    }

    /// Default file name for the combined document on `date`.
    pub fn default_output_name(&self, date: NaiveDate) -> String {
        default_output_name(self.project_type, &self.name(), date)
    }

    /// Render `tree` as a combined document and write it to `path`.
    pub fn save_combined(&self, tree: &ProjectNode, path: &Path) -> Result<()> {
        let doc = combine(tree);
        write_atomic(path, &doc)?;
        info!(path = %path.display(), files = tree.files().len(), "saved combined file");
        Ok(())
    }
}
