// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Espalier-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Espalier and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Tree construction from flat records.
//!
//! Two passes: [`builder`] groups records into per-parent sibling lists,
//! [`assembler`] walks those lists top-down into [`MenuTreeNode`] trees and
//! marks the node matching the current location. [`build_menu_tree`] runs
//! both; it never touches its input and the same input always produces the
//! same tree.

use crate::model::{ItemId, Menu, MenuItem};

pub mod assembler;
pub mod builder;

pub use assembler::{assemble_menu_tree, MenuTreeNode};
pub use builder::{group_items, ChildIndex};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuTreeError {
    /// Two records claimed the same id.
    DuplicateItem { item_id: ItemId },
    /// A chain of parent links closed on itself; `item_id` names one
    /// record on the loop.
    CyclicParentage { item_id: ItemId },
}

impl std::fmt::Display for MenuTreeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateItem { item_id } => {
                write!(f, "duplicate menu item id: {item_id}")
            }
            Self::CyclicParentage { item_id } => {
                write!(f, "cyclic parentage at menu item: {item_id}")
            }
        }
    }
}

impl std::error::Error for MenuTreeError {}

/// Build the display tree for `items` as seen from `current_location`.
///
/// `resolve_location` turns each record into the location its entry links
/// to; the first record (in depth-first sibling order) whose resolved
/// location equals `current_location` becomes active, and the path to it
/// is flagged open.
pub fn build_menu_tree<'a, F>(
    items: &'a [MenuItem],
    current_location: &str,
    resolve_location: F,
) -> Result<Vec<MenuTreeNode<'a>>, MenuTreeError>
where
    F: Fn(&MenuItem) -> String,
{
    let index = group_items(items)?;
    assemble_menu_tree(&index, current_location, resolve_location)
}

/// [`build_menu_tree`] for a menu that may not exist. Asking for a menu
/// nobody defined draws nothing; it is not an error.
pub fn draw_menu<'a, F>(
    menu: Option<&'a Menu>,
    current_location: &str,
    resolve_location: F,
) -> Result<Vec<MenuTreeNode<'a>>, MenuTreeError>
where
    F: Fn(&MenuItem) -> String,
{
    match menu {
        Some(menu) => build_menu_tree(menu.items(), current_location, resolve_location),
        None => Ok(Vec::new()),
    }
}
