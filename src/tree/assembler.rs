// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Espalier-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Espalier and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Assembly pass: sibling lists into a materialized tree with location,
//! active and open state.

use std::collections::BTreeSet;

use crate::model::{ItemId, MenuItem};

use super::builder::ChildIndex;
use super::MenuTreeError;

/// One materialized menu entry.
///
/// Borrows its record from the input slice; `location` is the resolved
/// target as the renderer should print it. At most one node in a tree is
/// `active`, and `open` is set on the active node and every ancestor of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuTreeNode<'a> {
    item: &'a MenuItem,
    location: String,
    children: Vec<MenuTreeNode<'a>>,
    active: bool,
    open: bool,
}

impl<'a> MenuTreeNode<'a> {
    pub fn item(&self) -> &'a MenuItem {
        self.item
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn children(&self) -> &[MenuTreeNode<'a>] {
        &self.children
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_open(&self) -> bool {
        self.open
    }
}

/// Walk the index top-down from its roots and materialize every record.
///
/// The walk is depth-first in sibling order, and the first node whose
/// resolved location equals `current_location` becomes the active one.
/// Records the walk never reaches sit on a parent loop, which is fatal.
pub fn assemble_menu_tree<'a, F>(
    index: &ChildIndex<'a>,
    current_location: &str,
    resolve_location: F,
) -> Result<Vec<MenuTreeNode<'a>>, MenuTreeError>
where
    F: Fn(&MenuItem) -> String,
{
    let mut visited = BTreeSet::<&'a ItemId>::new();
    let mut active_item: Option<&'a MenuItem> = None;

    let mut roots = Vec::new();
    for item in index.root_items() {
        roots.push(materialize(
            index,
            item,
            current_location,
            &resolve_location,
            &mut visited,
            &mut active_item,
        ));
    }

    // Each record sits in exactly one sibling list, so the walk cannot
    // visit anything twice; a shortfall means records nobody can reach
    // from a root, and only a parent loop produces those.
    if visited.len() != index.len() {
        let item_id = first_cycle_member(index, &visited).clone();
        return Err(MenuTreeError::CyclicParentage { item_id });
    }

    if let Some(active) = active_item {
        let open_ids = open_path_ids(index, active);
        for root in &mut roots {
            mark_open(root, &open_ids);
        }
    }

    Ok(roots)
}

fn materialize<'a, F>(
    index: &ChildIndex<'a>,
    item: &'a MenuItem,
    current_location: &str,
    resolve_location: &F,
    visited: &mut BTreeSet<&'a ItemId>,
    active_item: &mut Option<&'a MenuItem>,
) -> MenuTreeNode<'a>
where
    F: Fn(&MenuItem) -> String,
{
    visited.insert(item.item_id());

    let location = resolve_location(item);
    let active = active_item.is_none() && location == current_location;
    if active {
        *active_item = Some(item);
    }

    let mut children = Vec::new();
    for child in index.children_of(Some(item.item_id())) {
        children.push(materialize(
            index,
            child,
            current_location,
            resolve_location,
            visited,
            active_item,
        ));
    }

    MenuTreeNode { item, location, children, active, open: false }
}

/// Name one record on a parent loop, deterministically.
///
/// Starts from the smallest unreached id and follows parent links until an
/// id repeats. Unreached records are never roots and never descend from a
/// reached one, so every step stays on an unreached record whose parent
/// link is set and indexed.
fn first_cycle_member<'a>(index: &ChildIndex<'a>, visited: &BTreeSet<&'a ItemId>) -> &'a ItemId {
    let start = index
        .items()
        .find(|item| !visited.contains(item.item_id()))
        .expect("an unreached record exists when counts differ");

    let mut seen = BTreeSet::<&ItemId>::new();
    let mut cursor = start;
    loop {
        if !seen.insert(cursor.item_id()) {
            return cursor.item_id();
        }
        let parent_id = cursor.parent_id().expect("unreached record has a parent link");
        cursor = index.item(parent_id).expect("unreached record's parent is indexed");
    }
}

/// Ids to flag open: the active record plus its ancestor chain. The chain
/// stops at an explicit root or at an adopted one whose parent id resolves
/// to nothing.
fn open_path_ids<'a>(index: &ChildIndex<'a>, active: &'a MenuItem) -> BTreeSet<&'a ItemId> {
    let mut open = BTreeSet::new();
    open.insert(active.item_id());

    let mut cursor = active;
    while let Some(parent_id) = cursor.parent_id() {
        match index.item(parent_id) {
            Some(parent) => {
                open.insert(parent.item_id());
                cursor = parent;
            }
            None => break,
        }
    }
    open
}

fn mark_open(node: &mut MenuTreeNode<'_>, open_ids: &BTreeSet<&ItemId>) {
    if !open_ids.contains(node.item.item_id()) {
        return;
    }
    node.open = true;
    for child in &mut node.children {
        mark_open(child, open_ids);
    }
}
