//! Inventory Collectors
//!
//! This module contains the stages that turn Snipe-IT API responses into the
//! inventory result sets published on every scrape.
//!
//! # Architecture
//!
//! Each stage lives in its own module, accepts a `CollectionContext`, and returns an
//! owned, typed result that is handed to the stages that depend on it:
//!
//! ```text
//! status ──┐
//!          ├──► hardware ──► user_asset (optional)
//! category ┘
//! consumable (optional)
//! component  (optional)
//! ```
//!
//! [`collect_inventory`] runs the stages in dependency order and gathers their
//! output into an [`Inventory`].
//!
//! # Error Handling
//!
//! Every API failure is fatal to the scrape: the first error propagates and no
//! partial inventory is returned. The next scrape starts again from scratch.

use crate::config::MetricsConfig;
use crate::error::Result;
use crate::snipeit::SnipeItClient;
use tracing::info;

/// Shared context passed to all collectors
///
/// This struct uses public fields for ergonomic access patterns.
/// All fields are immutable references, so no invariants can be violated.
#[derive(Clone, Copy)]
pub struct CollectionContext<'a> {
    /// Snipe-IT API client for querying endpoints
    pub client: &'a SnipeItClient,
    /// Metrics configuration (names of interest, feature flags)
    pub config: &'a MetricsConfig,
}

/// Everything one scrape produces
///
/// Disabled reports are left empty; the corresponding metric family is still
/// published, just without samples.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    pub hardware: Vec<HardwareCount>,
    pub consumables: Vec<Consumable>,
    pub components: Vec<Component>,
    pub user_assets: Vec<UserAssetCount>,
}

/// Run the full collection pipeline once
pub async fn collect_inventory(ctx: &CollectionContext<'_>) -> Result<Inventory> {
    info!("Collecting inventory from Snipe-IT");

    let statuses = resolve_statuses(ctx).await?;
    let categories = resolve_categories(ctx).await?;
    let hardware = correlate_hardware(ctx, &categories, &statuses).await?;

    let consumables = if ctx.config.report_consumables {
        fetch_consumables(ctx).await?
    } else {
        Vec::new()
    };

    let components = if ctx.config.report_components {
        fetch_components(ctx).await?
    } else {
        Vec::new()
    };

    let user_assets = if ctx.config.report_user_assets {
        correlate_user_assets(ctx, &hardware).await?
    } else {
        Vec::new()
    };

    Ok(Inventory {
        hardware,
        consumables,
        components,
        user_assets,
    })
}

/// Keep the rows whose name exactly matches one of `wanted`, in remote order
pub fn retain_named<T, F>(rows: Vec<T>, wanted: &[String], name: F) -> Vec<T>
where
    F: Fn(&T) -> &str,
{
    rows.into_iter()
        .filter(|row| wanted.iter().any(|w| w == name(row)))
        .collect()
}

// Collector modules
pub mod category;
pub mod component;
pub mod consumable;
pub mod hardware;
pub mod status;
pub mod user_asset;

// Re-export stage entry points and their result types
pub use category::{resolve_categories, Category};
pub use component::{fetch_components, Component};
pub use consumable::{fetch_consumables, Consumable};
pub use hardware::{correlate_hardware, HardwareCount};
pub use status::{resolve_statuses, StatusLabel};
pub use user_asset::{correlate_user_assets, tally_user_assets, KnownModels, UserAssetCount};
