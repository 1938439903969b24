pub mod synthesizer;

pub use synthesizer::*;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Identifier of the host's built-in file icon
pub const DEFAULT_FILE_ID: &str = "_file";
/// Identifier of the host's built-in folder icon
pub const DEFAULT_FOLDER_ID: &str = "_folder";
/// Identifier of the host's built-in expanded folder icon
pub const DEFAULT_FOLDER_OPEN_ID: &str = "_folder_open";

/// A single icon definition entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IconDefinition {
    pub icon_path: String,
}

impl IconDefinition {
    pub fn new(icon_path: impl Into<String>) -> Self {
        Self {
            icon_path: icon_path.into(),
        }
    }
}

/// The icon theme document consumed by the editor.
///
/// Maps are ordered so that the same directory contents always serialize
/// to the same bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IconTheme {
    pub icon_definitions: BTreeMap<String, IconDefinition>,
    pub file: String,
    pub folder: String,
    pub folder_expanded: String,
    pub file_extensions: BTreeMap<String, String>,
    pub file_names: BTreeMap<String, String>,
    pub folder_names: BTreeMap<String, String>,
    pub folder_names_expanded: BTreeMap<String, String>,
    // Left empty so the host's own defaults apply
    #[serde(rename = "_file")]
    pub default_file: IconDefinition,
    #[serde(rename = "_folder")]
    pub default_folder: IconDefinition,
    #[serde(rename = "_folder_open")]
    pub default_folder_open: IconDefinition,
}

impl Default for IconTheme {
    fn default() -> Self {
        Self {
            icon_definitions: BTreeMap::new(),
            file: DEFAULT_FILE_ID.to_string(),
            folder: DEFAULT_FOLDER_ID.to_string(),
            folder_expanded: DEFAULT_FOLDER_OPEN_ID.to_string(),
            file_extensions: BTreeMap::new(),
            file_names: BTreeMap::new(),
            folder_names: BTreeMap::new(),
            folder_names_expanded: BTreeMap::new(),
            default_file: IconDefinition::default(),
            default_folder: IconDefinition::default(),
            default_folder_open: IconDefinition::default(),
        }
    }
}

impl IconTheme {
    /// Serialize as pretty JSON with two-space indentation
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(content: &str) -> serde_json::Result<Self> {
        serde_json::from_str(content)
    }

    /// Total number of association entries across all maps
    pub fn association_count(&self) -> usize {
        self.file_extensions.len()
            + self.file_names.len()
            + self.folder_names.len()
            + self.folder_names_expanded.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme_shape() {
        let json = IconTheme::default().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["file"], "_file");
        assert_eq!(value["folder"], "_folder");
        assert_eq!(value["folderExpanded"], "_folder_open");
        assert_eq!(value["_file"]["iconPath"], "");
        assert_eq!(value["_folder"]["iconPath"], "");
        assert_eq!(value["_folder_open"]["iconPath"], "");
        assert!(value["folderNamesExpanded"].as_object().unwrap().is_empty());
    }

    #[test]
    fn test_field_order_and_indentation() {
        let json = IconTheme::default().to_json().unwrap();
        let order = [
            "\"iconDefinitions\":",
            "\"file\":",
            "\"folder\":",
            "\"folderExpanded\":",
            "\"fileExtensions\":",
            "\"fileNames\":",
            "\"folderNames\":",
            "\"folderNamesExpanded\":",
            "\"_file\":",
            "\"_folder\":",
            "\"_folder_open\":",
        ];
        let positions: Vec<usize> = order.iter().map(|k| json.find(k).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(json.contains("\n  \"file\": \"_file\""));
    }
}
