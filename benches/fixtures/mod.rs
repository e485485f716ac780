// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Espalier-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Espalier and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use std::collections::VecDeque;

use espalier::model::{ItemId, Menu, MenuItem, MenuName};
use espalier::resolve::RouteTable;
use espalier::tree::MenuTreeNode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeParams {
    pub roots: usize,
    pub branching: usize,
    pub depth: usize,
    pub named_every: usize,
}

impl TreeParams {
    pub const fn new(roots: usize, branching: usize, depth: usize, named_every: usize) -> Self {
        Self { roots, branching, depth, named_every }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Case {
    Small,
    WideFlat,
    DeepChain,
    LargeMixed,
}

impl Case {
    pub const fn id(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::WideFlat => "wide_flat",
            Self::DeepChain => "deep_chain",
            Self::LargeMixed => "large_mixed",
        }
    }

    pub const fn params(self) -> TreeParams {
        match self {
            Self::Small => TreeParams::new(3, 3, 2, 5),
            Self::WideFlat => TreeParams::new(512, 1, 0, 0),
            Self::DeepChain => TreeParams::new(1, 1, 255, 0),
            Self::LargeMixed => TreeParams::new(8, 4, 4, 7),
        }
    }
}

fn generated_id(index: usize) -> ItemId {
    ItemId::new(format!("i{index:06}")).expect("valid item id")
}

fn generated_route(index: usize) -> String {
    format!("route-{index:06}")
}

fn generated_item(
    index: usize,
    parent: Option<ItemId>,
    order: u64,
    params: TreeParams,
) -> MenuItem {
    let mut item =
        MenuItem::new(generated_id(index), format!("Item {index:06}")).with_order(order);
    if let Some(parent) = parent {
        item = item.with_parent(parent);
    }
    if params.named_every > 0 && index % params.named_every == 0 {
        item.with_named_location(generated_route(index))
    } else {
        item.with_location(format!("/gen/{index:06}"))
    }
}

/// Deterministic complete-forest generator.
///
/// Records are pushed in breadth-first order; every node below the cutoff
/// depth gets the same number of children, so item counts are stable.
pub fn menu(params: TreeParams) -> Menu {
    assert!(params.roots >= 1, "roots must be >= 1");
    assert!(params.branching >= 1, "branching must be >= 1");

    let mut menu = Menu::new(MenuName::new("bench").expect("valid menu name"));
    let mut next_index = 0usize;
    let mut queue = VecDeque::<(ItemId, usize)>::new();

    for root in 0..params.roots {
        let id = generated_id(next_index);
        menu.push_item(generated_item(next_index, None, root as u64, params));
        queue.push_back((id, 0));
        next_index += 1;
    }

    while let Some((parent, depth)) = queue.pop_front() {
        if depth == params.depth {
            continue;
        }
        for child in 0..params.branching {
            let id = generated_id(next_index);
            menu.push_item(generated_item(
                next_index,
                Some(parent.clone()),
                child as u64,
                params,
            ));
            queue.push_back((id, depth + 1));
            next_index += 1;
        }
    }

    menu
}

pub fn fixture(case: Case) -> Menu {
    menu(case.params())
}

/// One route per named location the generator placed, so resolution always
/// hits the table.
pub fn route_table(menu: &Menu) -> RouteTable {
    let mut routes = RouteTable::new();
    for item in menu.items() {
        if let Some(name) = item.named_location() {
            routes.insert_route(name, format!("/routed/{name}"));
        }
    }
    routes
}

/// The last literal location in record order; deep in the forest, so active
/// matching and open marking do real work.
pub fn active_location(menu: &Menu) -> String {
    menu.items()
        .iter()
        .rev()
        .find_map(|item| item.location())
        .expect("generator always places literal locations")
        .to_owned()
}

pub fn checksum_tree(nodes: &[MenuTreeNode<'_>]) -> u64 {
    let mut acc = 0u64;
    for node in nodes {
        acc = acc
            .wrapping_mul(131)
            .wrapping_add(node.item().item_id().as_str().len() as u64);
        acc = acc.wrapping_mul(131).wrapping_add(node.location().len() as u64);
        acc = acc.wrapping_mul(131).wrapping_add(node.is_active() as u64);
        acc = acc.wrapping_mul(131).wrapping_add(node.is_open() as u64);
        acc = acc.wrapping_mul(131).wrapping_add(checksum_tree(node.children()));
    }
    acc
}
