// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Espalier-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Espalier and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::ids::MenuName;
use super::item::MenuItem;

/// A named group of menu items.
///
/// The name identifies the group in the folder store and when a page asks
/// for a menu to draw. Record order inside `items` carries no meaning; the
/// tree builder orders siblings by `(order, item id)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Menu {
    name: MenuName,
    items: Vec<MenuItem>,
}

impl Menu {
    pub fn new(name: MenuName) -> Self {
        Self {
            name,
            items: Vec::new(),
        }
    }

    pub fn new_with(name: MenuName, items: Vec<MenuItem>) -> Self {
        Self { name, items }
    }

    pub fn name(&self) -> &MenuName {
        &self.name
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn push_item(&mut self, item: MenuItem) {
        self.items.push(item);
    }

    /// Items sorted by `(order, item id)`, regardless of record order.
    pub fn items_in_order(&self) -> Vec<&MenuItem> {
        let mut items = self.items.iter().collect::<Vec<_>>();
        items.sort_by(|a, b| MenuItem::cmp_in_order(a, b));
        items
    }
}
