// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Espalier-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Espalier and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Espalier: hierarchical navigation menus grown from flat records.
//!
//! Flat menu records go in; a deterministic tree with one active node and an
//! opened ancestor path comes out, ready to render or persist.

pub mod model;
pub mod query;
pub mod render;
pub mod resolve;
pub mod store;
pub mod tree;
