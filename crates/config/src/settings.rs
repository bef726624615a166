// Host-facing settings
// Loaded from ~/.config/huescan/settings.json (or supplied by the host
// as a JSON/TOML string)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use huescan_core::NotationTag;
use huescan_engine::{AlphaPolicy, FormatSpec, HexCase, ScanOptions};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // Notation toggles
    #[serde(rename = "scan.hex")]
    pub hex: bool,

    #[serde(rename = "scan.hexLiteral")]
    pub hex_literal: bool,

    #[serde(rename = "scan.rgbTuple")]
    pub rgb_tuple: bool,

    #[serde(rename = "scan.rgbaTuple")]
    pub rgba_tuple: bool,

    #[serde(rename = "scan.cssFunctions")]
    pub css_functions: bool,

    #[serde(rename = "scan.hslFunctions")]
    pub hsl_functions: bool,

    #[serde(rename = "scan.namedEntries")]
    pub named_entries: bool,

    #[serde(rename = "scan.paletteLists")]
    pub palette_lists: bool,

    #[serde(rename = "scan.maxPaletteEntries")]
    pub max_palette_entries: usize,

    // Formatting preferences
    #[serde(rename = "format.defaultNotation")]
    pub default_notation: NotationTag,

    #[serde(rename = "format.hexCase")]
    pub hex_case: HexCase,

    #[serde(rename = "format.alpha")]
    pub alpha: AlphaPolicy,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            hex: true,
            hex_literal: true,
            rgb_tuple: true,
            rgba_tuple: true,
            css_functions: true,
            hsl_functions: true,
            named_entries: true,
            palette_lists: true,
            max_palette_entries: 1024,
            default_notation: NotationTag::Hex,
            hex_case: HexCase::Upper,
            alpha: AlphaPolicy::Auto,
        }
    }
}

impl Settings {
    /// Scan options matching these settings.
    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions {
            hex: self.hex,
            hex_literal: self.hex_literal,
            rgb_tuple: self.rgb_tuple,
            rgba_tuple: self.rgba_tuple,
            css_func: self.css_functions,
            hsl_func: self.hsl_functions,
            named_map: self.named_entries,
            palette_list: self.palette_lists,
            max_palette_entries: self.max_palette_entries,
        }
    }

    /// The format spec used when a conversion doesn't name a target
    /// notation.
    pub fn format_spec(&self) -> FormatSpec {
        FormatSpec {
            notation: self.default_notation,
            alpha: self.alpha,
            hex_case: self.hex_case,
        }
    }

    /// Get the settings file path
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("huescan");
        config_dir.join("settings.json")
    }

    /// Load settings from disk, falling back to defaults
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Load settings from a specific path, falling back to defaults on a
    /// missing or malformed file.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(contents) => match Self::from_json(&contents) {
                Ok(settings) => settings,
                Err(e) => {
                    log::warn!("error parsing {}: {e}; using defaults", path.display());
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("error reading {}: {e}; using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Parse from a JSON string. Lines starting with `//` are stripped so
    /// hand-edited files can carry comments.
    pub fn from_json(contents: &str) -> Result<Self, String> {
        let cleaned: String = contents
            .lines()
            .filter(|line| !line.trim().starts_with("//"))
            .collect::<Vec<_>>()
            .join("\n");
        serde_json::from_str(&cleaned).map_err(|e| e.to_string())
    }

    /// Parse from a TOML string.
    pub fn from_toml(contents: &str) -> Result<Self, String> {
        toml::from_str(contents).map_err(|e| e.to_string())
    }

    /// Save current settings to disk
    pub fn save(&self) -> Result<(), String> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| e.to_string())?;
        }

        let json = serde_json::to_string_pretty(self).map_err(|e| e.to_string())?;
        fs::write(path, json).map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_enable_everything() {
        let s = Settings::default();
        let opts = s.scan_options();
        assert!(opts.hex && opts.hex_literal && opts.rgb_tuple && opts.rgba_tuple);
        assert!(opts.css_func && opts.hsl_func && opts.named_map && opts.palette_list);
        assert_eq!(opts.max_palette_entries, 1024);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let s = Settings::from_json("{\"scan.paletteLists\": false}").unwrap();
        assert!(!s.palette_lists);
        assert!(s.hex);
        assert_eq!(s.default_notation, NotationTag::Hex);
    }

    #[test]
    fn test_json_comments_stripped() {
        let s = Settings::from_json("// disable lists\n{\"scan.paletteLists\": false}").unwrap();
        assert!(!s.palette_lists);
    }

    #[test]
    fn test_toml() {
        let s = Settings::from_toml(
            "\"scan.hex\" = false\n\"format.defaultNotation\" = \"rgba-tuple\"\n",
        )
        .unwrap();
        assert!(!s.hex);
        assert_eq!(s.default_notation, NotationTag::RgbaTuple);
    }

    #[test]
    fn test_malformed_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{not json").unwrap();
        assert_eq!(Settings::load_from(&path), Settings::default());
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.json");
        assert_eq!(Settings::load_from(&path), Settings::default());
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        let mut s = Settings::default();
        s.hsl_functions = false;
        s.hex_case = HexCase::Lower;
        s.save_to(&path).unwrap();

        assert_eq!(Settings::load_from(&path), s);
    }

    #[test]
    fn test_format_spec_conversion() {
        let mut s = Settings::default();
        s.default_notation = NotationTag::CssRgba;
        s.alpha = AlphaPolicy::Always;
        let spec = s.format_spec();
        assert_eq!(spec.notation, NotationTag::CssRgba);
        assert_eq!(spec.alpha, AlphaPolicy::Always);
    }
}
