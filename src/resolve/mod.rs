// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Espalier-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Espalier and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Location resolution for menu records.
//!
//! Tree construction takes any `Fn(&MenuItem) -> String`; [`RouteTable`]
//! is the stock implementation behind a closure.

pub mod routes;

pub use routes::RouteTable;

/// Placeholder location for records that resolve to nothing. Distinct from
/// any real route target, so it never accidentally matches a current
/// location.
pub const FALLBACK_LOCATION: &str = "#";
