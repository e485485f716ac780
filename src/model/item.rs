// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Espalier-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Espalier and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::cmp::Ordering;

use super::ids::ItemId;

/// One entry of a navigation menu, as flat record data.
///
/// Items form a tree through `parent_id`; `None` marks a root-level item.
/// `order` ranks an item among its siblings, with the item id as the
/// tie-break so sibling order is total and deterministic.
///
/// An item points at its destination either directly (`location`) or via a
/// symbolic route name (`named_location`); see `resolve` for precedence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    item_id: ItemId,
    parent_id: Option<ItemId>,
    order: u64,
    title: String,
    location: Option<String>,
    named_location: Option<String>,
}

impl MenuItem {
    pub fn new(item_id: ItemId, title: impl Into<String>) -> Self {
        Self {
            item_id,
            parent_id: None,
            order: 0,
            title: title.into(),
            location: None,
            named_location: None,
        }
    }

    pub fn with_parent(mut self, parent_id: ItemId) -> Self {
        self.parent_id = Some(parent_id);
        self
    }

    pub fn with_order(mut self, order: u64) -> Self {
        self.order = order;
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_named_location(mut self, named_location: impl Into<String>) -> Self {
        self.named_location = Some(named_location.into());
        self
    }

    pub fn item_id(&self) -> &ItemId {
        &self.item_id
    }

    pub fn parent_id(&self) -> Option<&ItemId> {
        self.parent_id.as_ref()
    }

    pub fn order(&self) -> u64 {
        self.order
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn named_location(&self) -> Option<&str> {
        self.named_location.as_deref()
    }

    /// Total sibling order: `order` ascending, then item id.
    pub fn cmp_in_order(a: &Self, b: &Self) -> Ordering {
        a.order.cmp(&b.order).then_with(|| a.item_id.cmp(&b.item_id))
    }
}
