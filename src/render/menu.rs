// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Espalier-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Espalier and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt::Write as _;

use crate::tree::MenuTreeNode;

use super::{
    MenuRenderOptions, ASCII_MARKER_CLOSED_BRANCH, ASCII_MARKER_LEAF, ASCII_MARKER_OPEN_BRANCH,
    UNICODE_MARKER_CLOSED_BRANCH, UNICODE_MARKER_LEAF, UNICODE_MARKER_OPEN_BRANCH,
};

#[derive(Debug, Clone, Copy)]
struct Glyphs {
    open_branch: char,
    closed_branch: char,
    leaf: char,
}

const UNICODE_GLYPHS: Glyphs = Glyphs {
    open_branch: UNICODE_MARKER_OPEN_BRANCH,
    closed_branch: UNICODE_MARKER_CLOSED_BRANCH,
    leaf: UNICODE_MARKER_LEAF,
};

const ASCII_GLYPHS: Glyphs = Glyphs {
    open_branch: ASCII_MARKER_OPEN_BRANCH,
    closed_branch: ASCII_MARKER_CLOSED_BRANCH,
    leaf: ASCII_MARKER_LEAF,
};

/// Deterministic line renderer for a drawn menu tree.
///
/// One line per visible node, two spaces of indent per depth. Children are
/// visible under open nodes only, unless `expand_all` shows everything.
pub fn render_menu_unicode(nodes: &[MenuTreeNode<'_>], options: &MenuRenderOptions) -> String {
    render_menu(nodes, options, UNICODE_GLYPHS)
}

/// [`render_menu_unicode`] with plain ASCII markers.
pub fn render_menu_ascii(nodes: &[MenuTreeNode<'_>], options: &MenuRenderOptions) -> String {
    render_menu(nodes, options, ASCII_GLYPHS)
}

fn render_menu(
    nodes: &[MenuTreeNode<'_>],
    options: &MenuRenderOptions,
    glyphs: Glyphs,
) -> String {
    if nodes.is_empty() {
        return String::new();
    }

    let mut out = String::new();
    for node in nodes {
        render_node(&mut out, node, 0, options, glyphs);
    }
    // Lines are pushed with terminators; the last one is the caller's call.
    out.pop();
    out
}

fn render_node(
    out: &mut String,
    node: &MenuTreeNode<'_>,
    depth: usize,
    options: &MenuRenderOptions,
    glyphs: Glyphs,
) {
    let expanded = node.is_open() || options.expand_all;
    let marker = if node.children().is_empty() {
        glyphs.leaf
    } else if expanded {
        glyphs.open_branch
    } else {
        glyphs.closed_branch
    };

    for _ in 0..depth {
        out.push_str("  ");
    }
    out.push(marker);
    out.push(' ');
    out.push_str(node.item().title());
    if options.show_locations {
        let _ = write!(out, "  ({})", node.location());
    }
    if node.is_active() {
        out.push_str(" *");
    }
    out.push('\n');

    if expanded {
        for child in node.children() {
            render_node(out, child, depth + 1, options, glyphs);
        }
    }
}
