// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Espalier-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Espalier and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Grouping pass: flat records into per-parent sibling lists.

use std::collections::BTreeMap;

use crate::model::{ItemId, MenuItem};

use super::MenuTreeError;

/// Borrowed index over one menu's records.
///
/// Every record lands in exactly one sibling list, keyed by its parent id
/// (`None` for the root list). Sibling lists are sorted by
/// [`MenuItem::cmp_in_order`], so assembly can walk them without comparing
/// again.
#[derive(Debug)]
pub struct ChildIndex<'a> {
    items_by_id: BTreeMap<&'a ItemId, &'a MenuItem>,
    children: BTreeMap<Option<&'a ItemId>, Vec<&'a MenuItem>>,
}

impl<'a> ChildIndex<'a> {
    pub fn len(&self) -> usize {
        self.items_by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items_by_id.is_empty()
    }

    pub fn contains(&self, item_id: &ItemId) -> bool {
        self.items_by_id.contains_key(item_id)
    }

    pub fn item(&self, item_id: &ItemId) -> Option<&'a MenuItem> {
        self.items_by_id.get(item_id).copied()
    }

    /// Every indexed record, in id order.
    pub fn items(&self) -> impl Iterator<Item = &'a MenuItem> + '_ {
        self.items_by_id.values().copied()
    }

    /// Sibling list under `parent`, already in display order. Parents
    /// without children (and ids the menu never mentions) yield an empty
    /// slice.
    pub fn children_of(&self, parent: Option<&'a ItemId>) -> &[&'a MenuItem] {
        self.children.get(&parent).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Records that start a tree: the explicit root list plus every list
    /// whose parent id no record carries. A dangling parent link demotes
    /// nobody; the subtree simply joins the top level, ranked by the same
    /// order-then-id rule as any sibling list.
    pub fn root_items(&self) -> Vec<&'a MenuItem> {
        let mut roots: Vec<&'a MenuItem> = Vec::new();
        for (parent, group) in &self.children {
            let adopted = match parent {
                None => true,
                Some(parent_id) => !self.items_by_id.contains_key(*parent_id),
            };
            if adopted {
                roots.extend(group.iter().copied());
            }
        }
        roots.sort_by(|a, b| MenuItem::cmp_in_order(a, b));
        roots
    }
}

/// Index `items` by id and bucket them by parent id.
///
/// The only way this fails is two records claiming the same id; everything
/// else (unknown parents, loops) is left for assembly to rule on.
pub fn group_items(items: &[MenuItem]) -> Result<ChildIndex<'_>, MenuTreeError> {
    let mut items_by_id = BTreeMap::<&ItemId, &MenuItem>::new();
    let mut children = BTreeMap::<Option<&ItemId>, Vec<&MenuItem>>::new();

    for item in items {
        if items_by_id.insert(item.item_id(), item).is_some() {
            return Err(MenuTreeError::DuplicateItem { item_id: item.item_id().clone() });
        }
        children.entry(item.parent_id()).or_default().push(item);
    }

    for group in children.values_mut() {
        group.sort_by(|a, b| MenuItem::cmp_in_order(a, b));
    }

    Ok(ChildIndex { items_by_id, children })
}
