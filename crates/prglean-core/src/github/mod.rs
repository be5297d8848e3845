// SPDX-License-Identifier: Apache-2.0

//! GitHub REST integration.
//!
//! Authentication, client construction, pagination, and the endpoint
//! wrappers the fetch pipeline consumes. All requests run through one
//! [`octocrab::Octocrab`] client; errors surface as
//! [`crate::error::GleanError`] with endpoint identity attached.

pub mod auth;
pub mod comments;
pub mod paginate;
pub mod pulls;
