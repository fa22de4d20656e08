//! File-extension categories and the include filter built from them.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::tree::Entry;

/// A named bucket of file extensions sharing one on/off switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ExtensionCategory {
    CppC,
    Header,
    Python,
    JavaScript,
    Html,
    Css,
    Json,
    Markdown,
    GodotScript,
    GodotScene,
    GodotResourceText,
    GodotResourceBinary,
    CSharp,
    Shader,
    UnityScene,
    UnityPrefab,
    TypeScript,
    EsmJs,
    CjsJs,
}

const CATEGORY_COUNT: usize = 19;

impl ExtensionCategory {
    /// Every category, in table order.
    pub const ALL: [ExtensionCategory; CATEGORY_COUNT] = [
        Self::CppC,
        Self::Header,
        Self::Python,
        Self::JavaScript,
        Self::Html,
        Self::Css,
        Self::Json,
        Self::Markdown,
        Self::GodotScript,
        Self::GodotScene,
        Self::GodotResourceText,
        Self::GodotResourceBinary,
        Self::CSharp,
        Self::Shader,
        Self::UnityScene,
        Self::UnityPrefab,
        Self::TypeScript,
        Self::EsmJs,
        Self::CjsJs,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::CppC => "cpp/c",
            Self::Header => "header",
            Self::Python => "python",
            Self::JavaScript => "javascript",
            Self::Html => "html",
            Self::Css => "css",
            Self::Json => "json",
            Self::Markdown => "markdown",
            Self::GodotScript => "godot-script",
            Self::GodotScene => "godot-scene",
            Self::GodotResourceText => "godot-resource-text",
            Self::GodotResourceBinary => "godot-resource-binary",
            Self::CSharp => "csharp",
            Self::Shader => "shader",
            Self::UnityScene => "unity-scene",
            Self::UnityPrefab => "unity-prefab",
            Self::TypeScript => "typescript",
            Self::EsmJs => "esm-js",
            Self::CjsJs => "cjs-js",
        }
    }

    /// Lower-case extensions (without the dot) this category matches.
    pub const fn extensions(self) -> &'static [&'static str] {
        match self {
            Self::CppC => &["cpp", "c"],
            Self::Header => &["h", "hpp"],
            Self::Python => &["py"],
            Self::JavaScript => &["js"],
            Self::Html => &["html"],
            Self::Css => &["css"],
            Self::Json => &["json"],
            Self::Markdown => &["md"],
            Self::GodotScript => &["gd"],
            Self::GodotScene => &["tscn"],
            Self::GodotResourceText => &["tres"],
            Self::GodotResourceBinary => &["res"],
            Self::CSharp => &["cs"],
            Self::Shader => &["shader"],
            Self::UnityScene => &["unity"],
            Self::UnityPrefab => &["prefab"],
            Self::TypeScript => &["ts"],
            Self::EsmJs => &["mjs"],
            Self::CjsJs => &["cjs"],
        }
    }

    pub const fn default_enabled(self) -> bool {
        !matches!(
            self,
            Self::GodotScene
                | Self::GodotResourceText
                | Self::GodotResourceBinary
                | Self::UnityScene
                | Self::UnityPrefab
        )
    }

    pub fn matches_extension(self, ext: &str) -> bool {
        self.extensions().contains(&ext)
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for ExtensionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ExtensionCategory {
    type Err = Error;

    /// Accepts a category name (`cpp/c`, `godot-scene`) or one of its
    /// extensions (`c`, `.tscn`), case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().trim_start_matches('.').to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.name() == needle || c.matches_extension(&needle))
            .ok_or_else(|| Error::UnknownCategory(s.to_string()))
    }
}

/// Extension of a file name: text after the last `.`, lower-cased.
/// Empty when the name has no `.`.
pub fn extension_of(name: &str) -> String {
    name.rsplit_once('.')
        .map(|(_, ext)| ext.to_lowercase())
        .unwrap_or_default()
}

/// Which extension categories are enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtensionFilter {
    enabled: [bool; CATEGORY_COUNT],
}

impl Default for ExtensionFilter {
    /// The table defaults: everything except scene/resource/prefab formats.
    fn default() -> Self {
        let mut filter = Self::none();
        for c in ExtensionCategory::ALL {
            filter.set(c, c.default_enabled());
        }
        filter
    }
}

impl ExtensionFilter {
    /// A filter with every category disabled.
    pub fn none() -> Self {
        Self {
            enabled: [false; CATEGORY_COUNT],
        }
    }

    /// A filter with exactly `categories` enabled.
    pub fn only(categories: &[ExtensionCategory]) -> Self {
        let mut filter = Self::none();
        for &c in categories {
            filter.enable(c);
        }
        filter
    }

    pub fn set(&mut self, category: ExtensionCategory, enabled: bool) {
        self.enabled[category.index()] = enabled;
    }

    pub fn enable(&mut self, category: ExtensionCategory) {
        self.set(category, true);
    }

    pub fn disable(&mut self, category: ExtensionCategory) {
        self.set(category, false);
    }

    pub fn is_enabled(&self, category: ExtensionCategory) -> bool {
        self.enabled[category.index()]
    }

    pub fn enabled_categories(&self) -> impl Iterator<Item = ExtensionCategory> + '_ {
        ExtensionCategory::ALL
            .into_iter()
            .filter(move |c| self.is_enabled(*c))
    }

    /// Whether a (non-ignored) file belongs in the output.
    pub fn is_included(&self, entry: &Entry) -> bool {
        let ext = extension_of(&entry.name);
        if ext.is_empty() {
            return false;
        }
        self.enabled_categories().any(|c| c.matches_extension(&ext))
    }
}
