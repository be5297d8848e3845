// SPDX-License-Identifier: Apache-2.0

//! Page-number pagination against list endpoints.
//!
//! GitHub list endpoints take 1-based `page` and `per_page` query
//! parameters. The complete item set is read by requesting consecutive
//! pages until one comes back empty; a short page is not treated as the
//! end, only an empty one. A failed page request ends the operation
//! immediately with no retry.

use octocrab::Octocrab;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::Result;
use crate::error::GleanError;

#[derive(Debug, Clone, Copy, Serialize)]
struct PageParams {
    page: u32,
    per_page: u8,
}

/// Fetches every item from a paginated list endpoint, in page order.
///
/// # Errors
///
/// Returns [`GleanError::Fetch`] when a page request gets a non-success
/// response, and [`GleanError::Api`] for transport or payload-decoding
/// failures.
#[instrument(skip(client), fields(route = %route, per_page))]
pub async fn fetch_all_pages<T: DeserializeOwned>(
    client: &Octocrab,
    route: &str,
    per_page: u8,
) -> Result<Vec<T>> {
    let mut items = Vec::new();
    let mut page: u32 = 1;

    loop {
        let params = PageParams { page, per_page };
        let batch: Vec<T> = client
            .get(route, Some(&params))
            .await
            .map_err(|err| GleanError::endpoint(route, err))?;

        if batch.is_empty() {
            break;
        }
        items.extend(batch);
        page += 1;
    }

    debug!(count = items.len(), pages = page, "Fetched all pages");
    Ok(items)
}

/// Fetches a single unpaginated resource.
///
/// # Errors
///
/// Same taxonomy as [`fetch_all_pages`].
#[instrument(skip(client), fields(route = %route))]
pub async fn fetch_one<T: DeserializeOwned>(client: &Octocrab, route: &str) -> Result<T> {
    client
        .get(route, None::<&()>)
        .await
        .map_err(|err| GleanError::endpoint(route, err))
}
