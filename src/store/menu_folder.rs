// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Espalier-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Espalier and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::fs;
use std::io;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::model::{IdError, ItemId, Menu, MenuItem, MenuName};

const MENU_FILE_SUFFIX: &str = ".menu.json";

#[derive(Debug)]
pub enum StoreError {
    Io {
        path: PathBuf,
        source: io::Error,
    },
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    InvalidId {
        field: &'static str,
        value: String,
        source: Box<IdError>,
    },
    SymlinkRefused {
        path: PathBuf,
    },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "io error at {path:?}: {source}"),
            Self::Json { path, source } => write!(f, "json error at {path:?}: {source}"),
            Self::InvalidId {
                field,
                value,
                source,
            } => write!(f, "invalid id for {field}: {value:?}: {source}"),
            Self::SymlinkRefused { path } => {
                write!(f, "refusing to write through symlink at {path:?}")
            }
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
            Self::InvalidId { source, .. } => Some(source),
            Self::SymlinkRefused { .. } => None,
        }
    }
}

/// One menu group per file: `<stem>.menu.json` directly under `root`.
///
/// The stem is the menu name, passed through a Windows-safe encoding so any
/// valid name stays a safe file name on every platform.
#[derive(Debug, Clone)]
pub struct MenuFolder {
    root: PathBuf,
    durability: WriteDurability,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum WriteDurability {
    /// Fast, best-effort persistence.
    ///
    /// - Writes a temp file and renames atomically into place.
    /// - Does not perform per-file fsync/sync.
    #[default]
    BestEffort,

    /// Slower, best-effort durability.
    ///
    /// Attempts to flush written file contents and rename operations to stable storage where
    /// possible. Exact guarantees are platform/filesystem-dependent.
    Durable,
}

fn encode_menu_stem(name: &str) -> String {
    if !needs_windows_safe_filename_stem_encoding(name) {
        return name.to_owned();
    }

    const HEX: &[u8; 16] = b"0123456789abcdef";
    let mut out = String::with_capacity(1 + name.len().saturating_mul(2));
    out.push('~');
    for &b in name.as_bytes() {
        out.push(HEX[(b >> 4) as usize] as char);
        out.push(HEX[(b & 0x0f) as usize] as char);
    }
    out
}

fn decode_menu_stem(stem: &str) -> Option<String> {
    let Some(hex) = stem.strip_prefix('~') else {
        return Some(stem.to_owned());
    };

    if hex.len() % 2 != 0 {
        return None;
    }

    let mut bytes = Vec::with_capacity(hex.len() / 2);
    let digits = hex.as_bytes();
    for pair in digits.chunks_exact(2) {
        let hi = (pair[0] as char).to_digit(16)?;
        let lo = (pair[1] as char).to_digit(16)?;
        bytes.push(((hi << 4) | lo) as u8);
    }
    String::from_utf8(bytes).ok()
}

fn needs_windows_safe_filename_stem_encoding(name: &str) -> bool {
    if name.starts_with('~') {
        return true;
    }
    if name == "." || name == ".." {
        return true;
    }
    if name.ends_with(' ') || name.ends_with('.') {
        return true;
    }

    let trimmed = name.trim_end_matches([' ', '.']);
    let base = trimmed.split('.').next().unwrap_or(trimmed);
    if is_windows_device_name(base) {
        return true;
    }

    for ch in name.chars() {
        if matches!(ch, '<' | '>' | ':' | '"' | '/' | '\\' | '|' | '?' | '*') {
            return true;
        }
        if ch <= '\u{1f}' || ch == '\u{7f}' {
            return true;
        }
    }

    false
}

fn is_windows_device_name(base: &str) -> bool {
    let base = base.to_ascii_uppercase();
    match base.as_str() {
        "CON" | "PRN" | "AUX" | "NUL" => true,
        _ => {
            if let Some(num) = base.strip_prefix("COM") {
                matches!(num, "1" | "2" | "3" | "4" | "5" | "6" | "7" | "8" | "9")
            } else if let Some(num) = base.strip_prefix("LPT") {
                matches!(num, "1" | "2" | "3" | "4" | "5" | "6" | "7" | "8" | "9")
            } else {
                false
            }
        }
    }
}

impl MenuFolder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            durability: WriteDurability::default(),
        }
    }

    pub fn with_durability(mut self, durability: WriteDurability) -> Self {
        self.durability = durability;
        self
    }

    pub fn durability(&self) -> WriteDurability {
        self.durability
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn menu_json_path(&self, name: &MenuName) -> PathBuf {
        let file_stem = encode_menu_stem(name.as_str());
        self.root.join(format!("{file_stem}{MENU_FILE_SUFFIX}"))
    }

    pub fn save_menu(&self, menu: &Menu) -> Result<(), StoreError> {
        let menu_path = self.menu_json_path(menu.name());

        let menu_json = menu_to_json(menu);
        let menu_str =
            serde_json::to_string_pretty(&menu_json).map_err(|source| StoreError::Json {
                path: menu_path.clone(),
                source,
            })?;

        write_atomic(
            self.root(),
            &menu_path,
            format!("{menu_str}\n").as_bytes(),
            self.durability,
        )
    }

    pub fn load_menu(&self, name: &MenuName) -> Result<Option<Menu>, StoreError> {
        let menu_path = self.menu_json_path(name);

        let menu_str = match fs::read_to_string(&menu_path) {
            Ok(menu_str) => menu_str,
            Err(source) if source.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(StoreError::Io {
                    path: menu_path,
                    source,
                })
            }
        };

        let menu_json: MenuJson =
            serde_json::from_str(&menu_str).map_err(|source| StoreError::Json {
                path: menu_path.clone(),
                source,
            })?;

        menu_from_json(menu_json).map(Some)
    }

    /// Menu names present in the folder, sorted. A folder that does not
    /// exist yet lists as empty; files that are not menu files are skipped.
    pub fn list_menus(&self) -> Result<Vec<MenuName>, StoreError> {
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(source) if source.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.root.clone(),
                    source,
                })
            }
        };

        let mut names = Vec::new();
        for entry in entries.filter_map(|entry| entry.ok()) {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let Some(file_name) = path.file_name().and_then(|s| s.to_str()) else {
                continue;
            };
            let Some(stem) = file_name.strip_suffix(MENU_FILE_SUFFIX) else {
                continue;
            };
            let Some(raw) = decode_menu_stem(stem) else {
                continue;
            };
            let Ok(name) = MenuName::new(raw) else {
                continue;
            };
            names.push(name);
        }

        names.sort();
        Ok(names)
    }

    pub fn delete_menu(&self, name: &MenuName) -> Result<bool, StoreError> {
        let menu_path = self.menu_json_path(name);
        match fs::remove_file(&menu_path) {
            Ok(()) => Ok(true),
            Err(source) if source.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(source) => Err(StoreError::Io {
                path: menu_path,
                source,
            }),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct MenuJson {
    name: String,
    #[serde(default)]
    items: Vec<MenuItemJson>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct MenuItemJson {
    id: String,
    #[serde(default)]
    parent: Option<String>,
    #[serde(default)]
    order: u64,
    title: String,
    #[serde(default)]
    location: Option<String>,
    #[serde(default)]
    named_location: Option<String>,
}

fn menu_to_json(menu: &Menu) -> MenuJson {
    MenuJson {
        name: menu.name().to_string(),
        items: menu
            .items()
            .iter()
            .map(|item| MenuItemJson {
                id: item.item_id().to_string(),
                parent: item.parent_id().map(ToString::to_string),
                order: item.order(),
                title: item.title().to_owned(),
                location: item.location().map(ToOwned::to_owned),
                named_location: item.named_location().map(ToOwned::to_owned),
            })
            .collect(),
    }
}

fn menu_from_json(menu_json: MenuJson) -> Result<Menu, StoreError> {
    let name = MenuName::new(menu_json.name.clone()).map_err(|source| StoreError::InvalidId {
        field: "name",
        value: menu_json.name,
        source: Box::new(source),
    })?;

    let mut menu = Menu::new(name);
    for item_json in menu_json.items {
        let item_id = ItemId::new(item_json.id.clone()).map_err(|source| StoreError::InvalidId {
            field: "items[].id",
            value: item_json.id,
            source: Box::new(source),
        })?;

        let mut item = MenuItem::new(item_id, item_json.title).with_order(item_json.order);
        if let Some(parent) = item_json.parent {
            let parent_id = ItemId::new(parent.clone()).map_err(|source| StoreError::InvalidId {
                field: "items[].parent",
                value: parent,
                source: Box::new(source),
            })?;
            item = item.with_parent(parent_id);
        }
        if let Some(location) = item_json.location {
            item = item.with_location(location);
        }
        if let Some(named_location) = item_json.named_location {
            item = item.with_named_location(named_location);
        }
        menu.push_item(item);
    }

    Ok(menu)
}

fn rename_overwrite(from: &Path, to: &Path) -> io::Result<()> {
    #[cfg(windows)]
    {
        match fs::rename(from, to) {
            Ok(()) => Ok(()),
            Err(err)
                if matches!(
                    err.kind(),
                    io::ErrorKind::AlreadyExists | io::ErrorKind::PermissionDenied
                ) =>
            {
                let _ = fs::remove_file(to);
                fs::rename(from, to)
            }
            Err(err) => Err(err),
        }
    }

    #[cfg(not(windows))]
    {
        fs::rename(from, to)
    }
}

fn write_atomic(
    root: &Path,
    path: &Path,
    contents: &[u8],
    durability: WriteDurability,
) -> Result<(), StoreError> {
    fs::create_dir_all(root).map_err(|source| StoreError::Io {
        path: root.to_path_buf(),
        source,
    })?;

    match fs::symlink_metadata(path) {
        Ok(md) if md.file_type().is_symlink() => {
            return Err(StoreError::SymlinkRefused {
                path: path.to_path_buf(),
            });
        }
        Ok(_) => {}
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(source) => {
            return Err(StoreError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    }

    let Some(parent) = path.parent() else {
        return Err(StoreError::Io {
            path: path.to_path_buf(),
            source: io::Error::other("path has no parent"),
        });
    };

    let Some(file_name) = path.file_name() else {
        return Err(StoreError::Io {
            path: path.to_path_buf(),
            source: io::Error::other("path has no file name"),
        });
    };

    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let tmp_path = parent.join(format!(
        ".espalier.tmp.{}.{}",
        file_name.to_string_lossy(),
        nanos
    ));

    let mut file = fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&tmp_path)
        .map_err(|source| StoreError::Io {
            path: tmp_path.clone(),
            source,
        })?;

    file.write_all(contents).map_err(|source| StoreError::Io {
        path: tmp_path.clone(),
        source,
    })?;

    if durability == WriteDurability::Durable {
        file.sync_all().map_err(|source| StoreError::Io {
            path: tmp_path.clone(),
            source,
        })?;
    }
    drop(file);

    if let Err(source) = rename_overwrite(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(StoreError::Io {
            path: path.to_path_buf(),
            source,
        });
    }

    if durability == WriteDurability::Durable {
        #[cfg(unix)]
        {
            let dir = fs::File::open(parent).map_err(|source| StoreError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
            dir.sync_all().map_err(|source| StoreError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }

    Ok(())
}
