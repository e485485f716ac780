// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Espalier-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Espalier and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::ids::{ItemId, MenuName};
use super::item::MenuItem;
use super::menu::Menu;

pub(crate) fn item_id(value: &str) -> ItemId {
    ItemId::new(value).expect("item id")
}

pub(crate) fn menu_name(value: &str) -> MenuName {
    MenuName::new(value).expect("menu name")
}

/// The three-item site menu: one root with an about and a contact child.
pub(crate) fn about_site_menu() -> Menu {
    Menu::new_with(
        menu_name("main"),
        vec![
            MenuItem::new(item_id("1"), "Home").with_order(0).with_location("/"),
            MenuItem::new(item_id("2"), "About")
                .with_parent(item_id("1"))
                .with_order(0)
                .with_location("/about"),
            MenuItem::new(item_id("3"), "Contact")
                .with_parent(item_id("1"))
                .with_order(1)
                .with_location("/contact"),
        ],
    )
}

/// Two roots, three levels under the first; records deliberately pushed
/// out of sibling order.
pub(crate) fn deep_menu() -> Menu {
    Menu::new_with(
        menu_name("site"),
        vec![
            MenuItem::new(item_id("contact"), "Contact")
                .with_order(1)
                .with_location("/contact"),
            MenuItem::new(item_id("home"), "Home").with_order(0).with_location("/"),
            MenuItem::new(item_id("gadgets"), "Gadgets")
                .with_parent(item_id("products"))
                .with_order(1)
                .with_location("/products/gadgets"),
            MenuItem::new(item_id("widgets"), "Widgets")
                .with_parent(item_id("products"))
                .with_order(0)
                .with_location("/products/widgets"),
            MenuItem::new(item_id("products"), "Products")
                .with_parent(item_id("home"))
                .with_order(0)
                .with_location("/products"),
            MenuItem::new(item_id("specials"), "Specials")
                .with_parent(item_id("widgets"))
                .with_order(0)
                .with_location("/products/widgets/specials"),
        ],
    )
}

/// Two records whose parent links form a loop, next to a healthy root.
pub(crate) fn cyclic_menu() -> Menu {
    Menu::new_with(
        menu_name("looped"),
        vec![
            MenuItem::new(item_id("home"), "Home").with_order(0).with_location("/"),
            MenuItem::new(item_id("a"), "A").with_parent(item_id("b")).with_order(0),
            MenuItem::new(item_id("b"), "B").with_parent(item_id("a")).with_order(0),
        ],
    )
}

/// A root plus a subtree whose top names a parent id no record carries.
pub(crate) fn orphan_menu() -> Menu {
    Menu::new_with(
        menu_name("partial"),
        vec![
            MenuItem::new(item_id("home"), "Home").with_order(0).with_location("/"),
            MenuItem::new(item_id("lost"), "Lost")
                .with_parent(item_id("ghost"))
                .with_order(1)
                .with_location("/lost"),
            MenuItem::new(item_id("lost-child"), "Lost Child")
                .with_parent(item_id("lost"))
                .with_order(0)
                .with_location("/lost/child"),
        ],
    )
}
