//! Icon directory bootstrap
//!
//! Creates the icon directories on first run and seeds them, either by
//! copying the extension's `default-icons/` tree or, when that is absent,
//! by installing the small icon set compiled into the binary. Directories
//! that already exist are left alone so user edits are never overwritten.

use crate::config::{DefaultIcons, IconPaths};
use crate::error::AppResult;
use std::fs;
use std::path::{Path, PathBuf};

const FILE_ICONS_README: &str = "Place your file icons here (SVG format recommended).\n\
Name them after file extensions, e.g., \"ts.svg\" for TypeScript files.\n\
For exact filenames, use the full name, e.g., \"package.json.svg\"\n\n\
Default icons have been copied here. Feel free to replace or add more!";

const FOLDER_ICONS_README: &str = "Place your folder icons here (SVG format recommended).\n\
Name them after folder names, e.g., \"src.svg\" for src folders.\n\n\
Default icons have been copied here. Feel free to replace or add more!";

/// What a bootstrap run changed on disk
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BootstrapReport {
    pub created: Vec<PathBuf>,
    pub seeded_files: usize,
}

/// Make sure the icons directory and both icon sub-directories exist
pub fn ensure_directories(paths: &IconPaths, defaults: &DefaultIcons) -> AppResult<BootstrapReport> {
    let mut report = BootstrapReport::default();

    if !paths.icons_dir.exists() {
        fs::create_dir_all(&paths.icons_dir)?;
        report.created.push(paths.icons_dir.clone());
    }

    if !paths.file_icons.exists() {
        fs::create_dir_all(&paths.file_icons)?;
        report.created.push(paths.file_icons.clone());
        report.seeded_files += seed(
            &defaults.file_icons(),
            &paths.file_icons,
            defaults.use_bundled.then_some(BUNDLED_FILE_ICONS),
        )?;
        fs::write(paths.file_icons.join("README.txt"), FILE_ICONS_README)?;
    }

    if !paths.folder_icons.exists() {
        fs::create_dir_all(&paths.folder_icons)?;
        report.created.push(paths.folder_icons.clone());
        report.seeded_files += seed(
            &defaults.folder_icons(),
            &paths.folder_icons,
            defaults.use_bundled.then_some(BUNDLED_FOLDER_ICONS),
        )?;
        fs::write(paths.folder_icons.join("README.txt"), FOLDER_ICONS_README)?;
    }

    if !report.created.is_empty() {
        tracing::info!(
            "Created {} icon director{}, seeded {} file(s)",
            report.created.len(),
            if report.created.len() == 1 { "y" } else { "ies" },
            report.seeded_files
        );
    }

    Ok(report)
}

fn seed(
    source: &Path,
    dest: &Path,
    bundled: Option<&[(&str, &str)]>,
) -> AppResult<usize> {
    if source.is_dir() {
        let copied = copy_directory(source, dest)?;
        tracing::debug!("Copied {} default icon(s) from {}", copied, source.display());
        return Ok(copied);
    }

    match bundled {
        Some(icons) => install_bundled_icons(icons, dest),
        None => Ok(0),
    }
}

/// Recursively copy `src` into `dest`, returning the number of files copied
pub fn copy_directory(src: &Path, dest: &Path) -> std::io::Result<usize> {
    let mut copied = 0;

    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dest_path = dest.join(entry.file_name());

        if entry.file_type()?.is_dir() {
            fs::create_dir_all(&dest_path)?;
            copied += copy_directory(&src_path, &dest_path)?;
        } else {
            fs::copy(&src_path, &dest_path)?;
            copied += 1;
        }
    }

    Ok(copied)
}

fn install_bundled_icons(icons: &[(&str, &str)], dest: &Path) -> AppResult<usize> {
    for (file_name, svg) in icons {
        fs::write(dest.join(file_name), svg)?;
    }
    tracing::debug!("Installed {} bundled icon(s) into {}", icons.len(), dest.display());
    Ok(icons.len())
}

// =============================================================================
// Bundled icons
// =============================================================================

const BUNDLED_FILE_ICONS: &[(&str, &str)] = &[
    ("json.svg", JSON_SVG),
    ("md.svg", MARKDOWN_SVG),
    ("rs.svg", RUST_SVG),
    ("ts.svg", TYPESCRIPT_SVG),
    ("package.json.svg", PACKAGE_JSON_SVG),
];

const BUNDLED_FOLDER_ICONS: &[(&str, &str)] = &[
    ("src.svg", SRC_FOLDER_SVG),
    ("test.svg", TEST_FOLDER_SVG),
];

const JSON_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 16 16">
  <rect x="1" y="1" width="14" height="14" rx="2" fill="#cbcb41"/>
  <text x="8" y="11" font-size="7" font-family="monospace" text-anchor="middle" fill="#1e1e1e">{}</text>
</svg>
"##;

const MARKDOWN_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 16 16">
  <rect x="1" y="3" width="14" height="10" rx="1.5" fill="#519aba"/>
  <path d="M3.5 10.5v-5h1.5l1.5 2 1.5-2h1.5v5H8V8l-1.5 2L5 8v2.5z" fill="#fff"/>
  <path d="M11.5 5.5v3h-1.5l2 2.5 2-2.5h-1.5v-3z" fill="#fff"/>
</svg>
"##;

const RUST_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 16 16">
  <circle cx="8" cy="8" r="7" fill="#dea584"/>
  <text x="8" y="11.5" font-size="9" font-family="sans-serif" font-weight="bold" text-anchor="middle" fill="#1e1e1e">R</text>
</svg>
"##;

const TYPESCRIPT_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 16 16">
  <rect x="1" y="1" width="14" height="14" rx="2" fill="#3178c6"/>
  <text x="11" y="13" font-size="7" font-family="sans-serif" font-weight="bold" text-anchor="middle" fill="#fff">TS</text>
</svg>
"##;

const PACKAGE_JSON_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 16 16">
  <path d="M8 1l6 3.5v7L8 15l-6-3.5v-7z" fill="#8bc34a"/>
  <path d="M8 8v7M8 8l6-3.5M8 8L2 4.5" stroke="#33691e" stroke-width="1" fill="none"/>
</svg>
"##;

const SRC_FOLDER_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 16 16">
  <path d="M1.5 3h4.5l1.5 1.5h7v8.5h-13z" fill="#4caf50"/>
  <path d="M6 8l-1.5 1.5L6 11M10 8l1.5 1.5L10 11" stroke="#fff" stroke-width="1" fill="none"/>
</svg>
"##;

const TEST_FOLDER_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 16 16">
  <path d="M1.5 3h4.5l1.5 1.5h7v8.5h-13z" fill="#ff7043"/>
  <path d="M5.5 9.5l2 2 3-4" stroke="#fff" stroke-width="1.2" fill="none"/>
</svg>
"##;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme;

    fn layout(root: &Path, use_bundled: bool) -> (IconPaths, DefaultIcons) {
        (
            IconPaths::under_root(root, "theme.json"),
            DefaultIcons {
                dir: root.join("default-icons"),
                use_bundled,
            },
        )
    }

    #[test]
    fn test_copies_defaults_directory() {
        let dir = tempfile::tempdir().unwrap();
        let (paths, defaults) = layout(dir.path(), true);
        fs::create_dir_all(defaults.file_icons().join("extra")).unwrap();
        fs::create_dir_all(defaults.folder_icons()).unwrap();
        fs::write(defaults.file_icons().join("go.svg"), "<svg/>").unwrap();
        fs::write(defaults.file_icons().join("extra").join("note.txt"), "hi").unwrap();
        fs::write(defaults.folder_icons().join("docs.svg"), "<svg/>").unwrap();

        let report = ensure_directories(&paths, &defaults).unwrap();

        assert_eq!(report.created.len(), 3);
        assert_eq!(report.seeded_files, 3);
        assert!(paths.file_icons.join("go.svg").exists());
        assert!(paths.file_icons.join("extra").join("note.txt").exists());
        assert!(paths.folder_icons.join("docs.svg").exists());
        // Defaults directory wins over the bundled set
        assert!(!paths.file_icons.join("rs.svg").exists());
    }

    #[test]
    fn test_falls_back_to_bundled_icons() {
        let dir = tempfile::tempdir().unwrap();
        let (paths, defaults) = layout(dir.path(), true);

        let report = ensure_directories(&paths, &defaults).unwrap();
        assert_eq!(
            report.seeded_files,
            BUNDLED_FILE_ICONS.len() + BUNDLED_FOLDER_ICONS.len()
        );

        let generated = theme::synthesize(&paths).unwrap();
        assert_eq!(generated.file_extensions["rs"], "file_rs");
        assert_eq!(generated.file_names["package.json"], "file_package_json");
        assert_eq!(generated.folder_names["src"], "folder_src");
    }

    #[test]
    fn test_without_bundled_icons_only_readmes() {
        let dir = tempfile::tempdir().unwrap();
        let (paths, defaults) = layout(dir.path(), false);

        let report = ensure_directories(&paths, &defaults).unwrap();
        assert_eq!(report.seeded_files, 0);

        let readme = fs::read_to_string(paths.file_icons.join("README.txt")).unwrap();
        assert!(readme.contains("package.json.svg"));
        let readme = fs::read_to_string(paths.folder_icons.join("README.txt")).unwrap();
        assert!(readme.contains("src.svg"));

        let generated = theme::synthesize(&paths).unwrap();
        assert!(generated.icon_definitions.is_empty());
    }

    #[test]
    fn test_existing_directories_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let (paths, defaults) = layout(dir.path(), true);
        fs::create_dir_all(&paths.file_icons).unwrap();
        fs::create_dir_all(&paths.folder_icons).unwrap();
        fs::write(paths.file_icons.join("mine.svg"), "<svg/>").unwrap();

        let report = ensure_directories(&paths, &defaults).unwrap();

        assert_eq!(report, BootstrapReport::default());
        assert!(!paths.file_icons.join("README.txt").exists());
        assert_eq!(fs::read_dir(&paths.file_icons).unwrap().count(), 1);
    }

    #[test]
    fn test_recreates_single_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let (paths, defaults) = layout(dir.path(), false);
        ensure_directories(&paths, &defaults).unwrap();
        fs::remove_dir_all(&paths.folder_icons).unwrap();

        let report = ensure_directories(&paths, &defaults).unwrap();
        assert_eq!(report.created, vec![paths.folder_icons.clone()]);
    }
}
