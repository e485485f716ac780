// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Espalier-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Espalier and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use crate::model::MenuItem;

use super::FALLBACK_LOCATION;

/// Route names mapped to concrete locations.
///
/// This is the lookup behind symbolic targets: a record naming a route the
/// table knows gets that route's location, everything else degrades through
/// the record's literal location down to [`FALLBACK_LOCATION`]. Resolution
/// never fails from the caller's point of view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteTable {
    routes: BTreeMap<String, String>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_route(mut self, name: impl Into<String>, location: impl Into<String>) -> Self {
        self.insert_route(name, location);
        self
    }

    pub fn insert_route(&mut self, name: impl Into<String>, location: impl Into<String>) {
        self.routes.insert(name.into(), location.into());
    }

    pub fn route(&self, name: &str) -> Option<&str> {
        self.routes.get(name).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Display location for `item`.
    ///
    /// A known route name wins over the literal location; an unknown one is
    /// absorbed, not reported, and the literal location (or the fallback
    /// placeholder) stands in.
    pub fn resolve_location(&self, item: &MenuItem) -> String {
        if let Some(name) = item.named_location() {
            if let Some(location) = self.route(name) {
                return location.to_string();
            }
        }
        match item.location() {
            Some(location) => location.to_string(),
            None => FALLBACK_LOCATION.to_string(),
        }
    }
}
