// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Espalier-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Espalier and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::{Menu, MenuItem};
use regex::RegexBuilder;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemSearchMode {
    Substring,
    Regex,
}

/// Records whose title, location, or named location matches `needle`,
/// in order-then-id rank.
pub fn find_items<'a>(
    menu: &'a Menu,
    needle: &str,
    mode: ItemSearchMode,
    case_insensitive: bool,
) -> Result<Vec<&'a MenuItem>, regex::Error> {
    match mode {
        ItemSearchMode::Substring => {
            if case_insensitive {
                let needle_lower = needle.to_lowercase();
                Ok(menu
                    .items_in_order()
                    .into_iter()
                    .filter(|item| {
                        search_fields(item)
                            .any(|field| field.to_lowercase().contains(&needle_lower))
                    })
                    .collect())
            } else {
                Ok(menu
                    .items_in_order()
                    .into_iter()
                    .filter(|item| search_fields(item).any(|field| field.contains(needle)))
                    .collect())
            }
        }
        ItemSearchMode::Regex => {
            let regex = RegexBuilder::new(needle)
                .case_insensitive(case_insensitive)
                .build()?;
            Ok(menu
                .items_in_order()
                .into_iter()
                .filter(|item| search_fields(item).any(|field| regex.is_match(field)))
                .collect())
        }
    }
}

fn search_fields(item: &MenuItem) -> impl Iterator<Item = &str> {
    [Some(item.title()), item.location(), item.named_location()]
        .into_iter()
        .flatten()
}
