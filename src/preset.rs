//! Project-type detection and the built-in preset catalog.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::error::Error;
use crate::filter::{ExtensionCategory, ExtensionFilter};
use crate::ignore::IgnoreSet;

/// Kind of project found at the root, decided once when it is opened.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ProjectType {
    #[default]
    None,
    Godot,
    Unity,
    Node,
    /// A project the catalog has no preset for.
    Other,
}

impl ProjectType {
    /// Prefix used in the default output file name.
    pub fn filename_prefix(self) -> Option<&'static str> {
        match self {
            ProjectType::Godot => Some("godot"),
            ProjectType::Unity => Some("unity"),
            ProjectType::Node => Some("node"),
            ProjectType::None | ProjectType::Other => None,
        }
    }

    /// Preset applied when this type is detected.
    pub fn preset(self) -> Option<Preset> {
        match self {
            ProjectType::Godot => Some(Preset::Godot),
            ProjectType::Unity => Some(Preset::Unity),
            ProjectType::Node => Some(Preset::Node),
            ProjectType::None | ProjectType::Other => None,
        }
    }
}

/// Marker files and directories found at a project root.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProjectProbe {
    pub godot_project: bool,
    pub assets_dir: bool,
    pub project_settings_dir: bool,
    pub package_json: bool,
}

impl ProjectProbe {
    pub fn probe(root: &Path) -> Self {
        Self {
            godot_project: root.join("project.godot").is_file(),
            assets_dir: root.join("Assets").is_dir(),
            project_settings_dir: root.join("ProjectSettings").is_dir(),
            package_json: root.join("package.json").is_file(),
        }
    }

    /// Decision table: Godot, then Unity, then Node.
    pub fn classify(&self) -> ProjectType {
        if self.godot_project {
            ProjectType::Godot
        } else if self.assets_dir && self.project_settings_dir {
            ProjectType::Unity
        } else if self.package_json {
            ProjectType::Node
        } else {
            ProjectType::None
        }
    }
}

pub fn detect_project_type(root: &Path) -> ProjectType {
    ProjectProbe::probe(root).classify()
}

const DEFAULT_IGNORES: &[&str] = &[".git", ".vscode", "node_modules", "*.log", ".DS_Store"];

const GODOT_IGNORES: &[&str] = &[
    ".godot/",
    "*.import",
    ".mono/",
    "export_presets.cfg",
    "*.binary",
    "*.rcedit",
    "*.TMP",
    "*.png.import",
    "*.svg.import",
    "*.gltf.import",
    "*.glb.import",
    "*.obj.import",
    "*.wav.import",
    "*.mp3.import",
];

const UNITY_IGNORES: &[&str] = &[
    "[Ll]ibrary/",
    "[Tt]emp/",
    "[Oo]bj/",
    "[Bb]uild/",
    "[Bb]uilds/",
    "[Ll]ogs/",
    "[Mm]emoryCaptures/",
    "*.pidb",
    "*.suo",
    "*.user",
    "*.userprefs",
    "*.sln",
    "*.csproj",
    "*.unityproj",
    "*.apk",
    "*.aab",
    "*.unitypackage",
    "*.app",
    "*.exe",
    "*.dll",
    "*.mdb",
    "*.pdb",
    ".vs/",
    ".vscode/",
];

const NODE_IGNORES: &[&str] = &[
    "node_modules/",
    "npm-debug.log",
    "yarn-debug.log",
    "yarn-error.log",
    "package-lock.json",
    "yarn.lock",
    "pnpm-lock.yaml",
    ".env",
    "dist/",
    "build/",
    "*.log",
    ".DS_Store",
    ".cache/",
];

/// A named bundle of ignore patterns plus an extension selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    Default,
    Godot,
    Unity,
    Node,
}

impl Preset {
    pub const ALL: [Preset; 4] = [Preset::Default, Preset::Godot, Preset::Unity, Preset::Node];

    pub fn name(self) -> &'static str {
        match self {
            Preset::Default => "default",
            Preset::Godot => "godot",
            Preset::Unity => "unity",
            Preset::Node => "node",
        }
    }

    pub fn ignore_patterns(self) -> &'static [&'static str] {
        match self {
            Preset::Default => DEFAULT_IGNORES,
            Preset::Godot => GODOT_IGNORES,
            Preset::Unity => UNITY_IGNORES,
            Preset::Node => NODE_IGNORES,
        }
    }

    /// Categories enabled by this preset, in table order.
    pub fn categories(self) -> &'static [ExtensionCategory] {
        use ExtensionCategory::*;
        match self {
            Preset::Default => &[CppC, Header, Python, JavaScript, Html, Css, Json, Markdown],
            Preset::Godot => &[
                Json,
                GodotScript,
                GodotScene,
                GodotResourceText,
                GodotResourceBinary,
                Shader,
            ],
            Preset::Unity => &[Json, CSharp, Shader, UnityScene, UnityPrefab],
            Preset::Node => &[JavaScript, Json, Markdown, TypeScript, EsmJs, CjsJs],
        }
    }

    pub fn project_type(self) -> ProjectType {
        match self {
            Preset::Default => ProjectType::None,
            Preset::Godot => ProjectType::Godot,
            Preset::Unity => ProjectType::Unity,
            Preset::Node => ProjectType::Node,
        }
    }

    pub fn ignore_set(self) -> IgnoreSet {
        let mut set = IgnoreSet::new();
        set.extend(self.ignore_patterns().iter().copied());
        set
    }

    pub fn extension_filter(self) -> ExtensionFilter {
        ExtensionFilter::only(self.categories())
    }

    /// Replace both the ignore set and the extension selection wholesale.
    pub fn apply(self, ignore: &mut IgnoreSet, filter: &mut ExtensionFilter) {
        *ignore = self.ignore_set();
        *filter = self.extension_filter();
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "default" | "none" => Ok(Preset::Default),
            "godot" => Ok(Preset::Godot),
            "unity" => Ok(Preset::Unity),
            "node" | "node.js" | "nodejs" => Ok(Preset::Node),
            _ => Err(Error::UnknownPreset(s.to_string())),
        }
    }
}
