// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Espalier-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Espalier and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Flat menu records and the identifiers that key them.
//!
//! A [`Menu`] is a named bag of [`MenuItem`] records. Records stay flat
//! here; the tree shape only exists once [`crate::tree`] assembles it.

#[cfg(test)]
pub(crate) mod fixtures;
pub mod ids;
pub mod item;
pub mod menu;

pub use ids::{Id, IdError, ItemId, MenuName};
pub use item::MenuItem;
pub use menu::Menu;
