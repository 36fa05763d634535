//! Consumable Fetcher
//!
//! Enabled by `metrics.report_consumables`.
//!
//! # Metrics Produced
//! - `snipeit_consumable_remaining` - Remaining consumable quantity
//!   - Labels: name, model_number

use super::CollectionContext;
use crate::error::Result;
use tracing::info;

/// A consumable and its stock levels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Consumable {
    pub name: String,
    pub model_number: String,
    /// Reorder threshold configured in Snipe-IT (informational only)
    pub min_amt: u64,
    pub remaining: u64,
    pub qty: u64,
}

/// Fetches every consumable, unfiltered
pub async fn fetch_consumables(ctx: &CollectionContext<'_>) -> Result<Vec<Consumable>> {
    let consumables: Vec<Consumable> = ctx
        .client
        .consumables()
        .await?
        .into_iter()
        .map(|row| Consumable {
            name: row.name,
            model_number: row.model_number,
            min_amt: row.min_amt,
            remaining: row.remaining,
            qty: row.qty,
        })
        .collect();

    info!("Fetched {} consumables", consumables.len());
    Ok(consumables)
}
