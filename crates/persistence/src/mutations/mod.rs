// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Collection mutations.
//!
//! All mutations use the Diesel DSL. Multi-row writes are wrapped in
//! transactions at the granularity documented on each function.

pub mod events;
pub mod sign_ups;
pub mod users;

use rand::{RngExt, distr::Alphanumeric};

/// Length of store-assigned document identifiers.
const DOCUMENT_ID_LEN: usize = 20;

/// Generates a store-assigned document identifier.
///
/// 20 random alphanumeric characters, the shape of auto-assigned ids in
/// hosted document stores. Collision probability is negligible at this
/// length (62^20 keyspace).
#[must_use]
pub fn generate_document_id() -> String {
    rand::rng()
        .sample_iter(Alphanumeric)
        .take(DOCUMENT_ID_LEN)
        .map(char::from)
        .collect()
}
