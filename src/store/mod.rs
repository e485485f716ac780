// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Espalier-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Espalier and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Persistence for menu groups on disk.
//!
//! The store module reads/writes the menu folder format (one JSON file per
//! menu group) used by the CLI.

pub mod menu_folder;

pub use menu_folder::{MenuFolder, StoreError, WriteDurability};
