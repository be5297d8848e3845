// SPDX-License-Identifier: Apache-2.0

//! Terminal rendering.
//!
//! Render functions take a `Write` impl so tests can capture output in a
//! buffer. Progress lines during a bulk run print straight to stdout.

pub mod bulk;
pub mod fetch;
