//! Icon theme synthesis
//!
//! Reads the flat file-icons and folder-icons directories and turns every
//! `.svg` / `.png` in them into an icon definition plus one association:
//!
//! - `ts.svg` under file-icons matches the `ts` file extension
//! - `package.json.svg` under file-icons matches files named `package.json`
//! - `src.svg` under folder-icons matches folders named `src`
//!
//! The theme is rebuilt from scratch on every call and only reaches disk
//! through [`write_theme`], which replaces the previous file in one rename.

use super::{IconDefinition, IconTheme};
use crate::config::{IconPaths, FILE_ICONS_DIR, FOLDER_ICONS_DIR};
use crate::error::{AppError, AppResult};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Image formats picked up from the icon directories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Svg,
    Png,
}

impl ImageFormat {
    pub const ALL: [ImageFormat; 2] = [ImageFormat::Svg, ImageFormat::Png];

    pub fn suffix(self) -> &'static str {
        match self {
            ImageFormat::Svg => ".svg",
            ImageFormat::Png => ".png",
        }
    }

    /// Split `name` into its base name and format. Matching is case-sensitive.
    pub fn split_file_name(name: &str) -> Option<(&str, ImageFormat)> {
        Self::ALL
            .iter()
            .find_map(|format| name.strip_suffix(format.suffix()).map(|base| (base, *format)))
    }
}

/// Which icon directory an asset came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    File,
    Folder,
}

impl IconKind {
    fn id_prefix(self) -> &'static str {
        match self {
            IconKind::File => "file_",
            IconKind::Folder => "folder_",
        }
    }

    fn dir_name(self) -> &'static str {
        match self {
            IconKind::File => FILE_ICONS_DIR,
            IconKind::Folder => FOLDER_ICONS_DIR,
        }
    }
}

impl std::fmt::Display for IconKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IconKind::File => write!(f, "file"),
            IconKind::Folder => write!(f, "folder"),
        }
    }
}

/// The lookup string the editor matches against
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssociationKey {
    Extension(String),
    FileName(String),
    FolderName(String),
}

impl AssociationKey {
    pub fn classify(kind: IconKind, base_name: &str) -> Self {
        match kind {
            IconKind::Folder => AssociationKey::FolderName(base_name.to_string()),
            IconKind::File if base_name.contains('.') => {
                AssociationKey::FileName(base_name.to_string())
            }
            IconKind::File => AssociationKey::Extension(base_name.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            AssociationKey::Extension(key)
            | AssociationKey::FileName(key)
            | AssociationKey::FolderName(key) => key,
        }
    }
}

/// An icon image found in one of the icon directories
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconAsset {
    pub kind: IconKind,
    pub file_name: String,
    pub base_name: String,
    pub format: ImageFormat,
    pub path: PathBuf,
}

impl IconAsset {
    /// Build an asset from a directory entry name; `None` for anything that
    /// is not a usable icon image
    pub fn from_file_name(kind: IconKind, dir: &Path, file_name: &str) -> Option<Self> {
        let (base_name, format) = ImageFormat::split_file_name(file_name)?;
        // A bare ".svg" names no extension or file, so it would only add an empty key
        if base_name.is_empty() {
            return None;
        }

        Some(Self {
            kind,
            file_name: file_name.to_string(),
            base_name: base_name.to_string(),
            format,
            path: dir.join(file_name),
        })
    }

    pub fn icon_id(&self) -> String {
        match self.kind {
            IconKind::File => format!("{}{}", self.kind.id_prefix(), self.base_name.replace('.', "_")),
            IconKind::Folder => format!("{}{}", self.kind.id_prefix(), self.base_name),
        }
    }

    /// Path written into the theme, relative to the theme file
    pub fn relative_path(&self) -> String {
        format!("./{}/{}", self.kind.dir_name(), self.file_name)
    }

    pub fn association_key(&self) -> AssociationKey {
        AssociationKey::classify(self.kind, &self.base_name)
    }
}

/// List the icon images in `dir`, sorted by file name.
///
/// Sorting makes collisions resolve the same way on every platform: when two
/// files map to the same identifier, the one sorting last wins.
pub fn list_icon_assets(dir: &Path, kind: IconKind) -> AppResult<Vec<IconAsset>> {
    if !dir.is_dir() {
        return Err(AppError::MissingDirectory(dir.to_path_buf()));
    }

    let mut assets = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_dir() {
            continue;
        }

        let file_name = match entry.file_name().into_string() {
            Ok(name) => name,
            Err(name) => {
                tracing::warn!("Skipping {} icon with non UTF-8 name: {:?}", kind, name);
                continue;
            }
        };

        match IconAsset::from_file_name(kind, dir, &file_name) {
            Some(asset) => assets.push(asset),
            None => tracing::trace!("Ignoring {} in {} icons", file_name, kind),
        }
    }

    assets.sort_by(|a, b| a.file_name.cmp(&b.file_name));
    Ok(assets)
}

/// Accumulates assets into an [`IconTheme`]
#[derive(Debug, Default)]
pub struct ThemeBuilder {
    theme: IconTheme,
}

impl ThemeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, asset: &IconAsset) {
        let icon_id = asset.icon_id();
        let definition = IconDefinition::new(asset.relative_path());

        if let Some(previous) = self
            .theme
            .icon_definitions
            .insert(icon_id.clone(), definition.clone())
        {
            if previous != definition {
                tracing::warn!(
                    "Icon id {} is produced by both {} and {}; using {}",
                    icon_id,
                    previous.icon_path,
                    definition.icon_path,
                    definition.icon_path
                );
            }
        }

        // Dotted file keys are moved to the file name map in build()
        match asset.kind {
            IconKind::File => {
                self.theme
                    .file_extensions
                    .insert(asset.base_name.clone(), icon_id);
            }
            IconKind::Folder => {
                self.theme
                    .folder_names
                    .insert(asset.base_name.clone(), icon_id);
            }
        }
    }

    pub fn build(mut self) -> IconTheme {
        let exact_names: Vec<String> = self
            .theme
            .file_extensions
            .keys()
            .filter(|name| name.contains('.'))
            .cloned()
            .collect();

        for name in exact_names {
            if let Some(icon_id) = self.theme.file_extensions.remove(&name) {
                self.theme.file_names.insert(name, icon_id);
            }
        }

        self.theme
    }
}

/// Build the icon theme from the current contents of both icon directories
pub fn synthesize(paths: &IconPaths) -> AppResult<IconTheme> {
    // List both before building so a missing folder dir fails the whole run
    let file_icons = list_icon_assets(&paths.file_icons, IconKind::File)?;
    let folder_icons = list_icon_assets(&paths.folder_icons, IconKind::Folder)?;

    let mut builder = ThemeBuilder::new();
    for asset in file_icons.iter().chain(folder_icons.iter()) {
        builder.add(asset);
    }

    Ok(builder.build())
}

/// Write `theme` to `path`, replacing any previous file in a single rename.
///
/// Returns `false` without touching the file when its contents already match.
pub fn write_theme(theme: &IconTheme, path: &Path) -> AppResult<bool> {
    let content = theme.to_json()?;

    if let Ok(existing) = fs::read_to_string(path) {
        if existing == content {
            tracing::debug!("Icon theme unchanged: {}", path.display());
            return Ok(false);
        }
    }

    // The temp file is removed on drop if writing or persisting fails
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content.as_bytes())?;
    tmp.persist(path).map_err(|e| AppError::Io(e.error))?;

    Ok(true)
}

/// Result of one regeneration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegenerateOutcome {
    pub written: bool,
    pub definitions: usize,
    pub associations: usize,
}

/// Synthesize the theme and persist it to `paths.theme_file`
pub fn regenerate(paths: &IconPaths) -> AppResult<RegenerateOutcome> {
    let theme = synthesize(paths)?;
    let written = write_theme(&theme, &paths.theme_file)?;

    let outcome = RegenerateOutcome {
        written,
        definitions: theme.icon_definitions.len(),
        associations: theme.association_count(),
    };

    if written {
        tracing::info!(
            definitions = outcome.definitions,
            associations = outcome.associations,
            "Generated icon theme: {}",
            paths.theme_file.display()
        );
    }

    Ok(outcome)
}
