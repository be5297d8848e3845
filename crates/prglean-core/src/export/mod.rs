// SPDX-License-Identifier: Apache-2.0

//! Export serialization: JSON, CSV, and Markdown.
//!
//! Rendering is pure (string in, string out); each module pairs its
//! renderer with a `write_*` helper that puts the document on disk. CSV
//! and Markdown are bulk-only formats, built from the comment rows of
//! every fetched PR; JSON covers both the single-PR result and the bulk
//! document.

pub mod csv;
pub mod json;
pub mod markdown;
