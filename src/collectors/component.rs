//! Component Fetcher
//!
//! Enabled by `metrics.report_components`. Components are identified by serial
//! rather than model number.

use super::CollectionContext;
use crate::error::Result;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    pub name: String,
    pub serial: String,
    pub min_amt: u64,
    pub remaining: u64,
    pub qty: u64,
}

pub async fn fetch_components(ctx: &CollectionContext<'_>) -> Result<Vec<Component>> {
    let components: Vec<Component> = ctx
        .client
        .components()
        .await?
        .into_iter()
        .map(|row| Component {
            name: row.name,
            serial: row.serial,
            min_amt: row.min_amt,
            remaining: row.remaining,
            qty: row.qty,
        })
        .collect();

    info!("Fetched {} components", components.len());
    Ok(components)
}
