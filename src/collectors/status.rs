//! Status Label Resolver
//!
//! Resolves the configured status names (`metrics.asset_statuses`) to Snipe-IT
//! status label ids.

use super::{retain_named, CollectionContext};
use crate::error::Result;
use tracing::info;

/// A status label whose name is in the configured allow-list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLabel {
    pub id: u64,
    pub name: String,
}

/// Fetches all status labels and keeps the ones named in the configuration
///
/// Matching is exact and case-sensitive. Field values are carried over untouched.
///
/// # Returns
///
/// * `Ok(labels)` - The matching labels, in the order the API returned them
/// * `Err(_)` - The request failed; the scrape is aborted
pub async fn resolve_statuses(ctx: &CollectionContext<'_>) -> Result<Vec<StatusLabel>> {
    let rows = ctx.client.status_labels().await?;
    let total = rows.len();

    let statuses: Vec<StatusLabel> = retain_named(rows, &ctx.config.asset_statuses, |row| {
        row.name.as_str()
    })
    .into_iter()
    .map(|row| StatusLabel {
        id: row.id,
        name: row.name,
    })
    .collect();

    info!("Resolved {} of {} status labels", statuses.len(), total);
    Ok(statuses)
}
