// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Espalier-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Espalier and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Rendering for drawn menu trees.
//!
//! Renderers produce Unicode or ASCII text output, one line per visible node,
//! suitable for terminals and plain-text previews.

pub mod menu;

pub use menu::{render_menu_ascii, render_menu_unicode};

/// Marker in front of a node whose children are visible.
pub const UNICODE_MARKER_OPEN_BRANCH: char = '▾';
/// Marker in front of a node whose children are hidden.
pub const UNICODE_MARKER_CLOSED_BRANCH: char = '▸';
/// Marker in front of a node with no children.
pub const UNICODE_MARKER_LEAF: char = '·';

pub const ASCII_MARKER_OPEN_BRANCH: char = 'v';
pub const ASCII_MARKER_CLOSED_BRANCH: char = '>';
pub const ASCII_MARKER_LEAF: char = '-';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuRenderOptions {
    /// Append each node's resolved location after its title.
    pub show_locations: bool,
    /// Show every node's children, open or not.
    pub expand_all: bool,
}
