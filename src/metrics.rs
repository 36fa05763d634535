//! Prometheus Metrics Definitions
//!
//! This module defines all Prometheus metrics exposed by the Snipe-IT exporter.
//!
//! # Metric Families
//!
//! ## Inventory
//! - `snipeit_asset_count` - Assets per model and status
//!   - Labels: name, model_number, status
//! - `snipeit_consumable_remaining` - Remaining consumable quantity
//!   - Labels: name, model_number
//! - `snipeit_component_remaining` - Remaining component quantity
//!   - Labels: name, serial
//! - `snipeit_asset_count_user` - Assets checked out per user and model
//!   - Labels: user, model_name, model_number
//!
//! ## Exporter
//! - `snipeit_up` - Whether the last scrape of the Snipe-IT API succeeded
//! - `snipeit_scrape_duration_seconds` - Duration of the last successful scrape
//!
//! # Scrape Semantics
//!
//! [`MetricsCollector::publish`] resets the inventory families before writing the
//! new inventory, so a model or user that disappears from Snipe-IT also disappears
//! from the output. Families without samples are still rendered with their
//! `# HELP` and `# TYPE` lines.
//!
//! All metrics use the `snipeit_` namespace prefix.

use crate::collectors::Inventory;
use prometheus::core::Collector;
use prometheus::{Encoder, Gauge, GaugeVec, Opts, Registry, TextEncoder};
use std::fmt::Write;
use std::sync::Arc;

const NAMESPACE: &str = "snipeit";

/// Metrics collector for Snipe-IT
#[derive(Clone)]
pub struct MetricsCollector {
    registry: Arc<Registry>,

    // Inventory metrics
    pub asset_count: Arc<GaugeVec>,
    pub consumable_remaining: Arc<GaugeVec>,
    pub component_remaining: Arc<GaugeVec>,
    pub asset_count_user: Arc<GaugeVec>,

    // Exporter metrics
    pub up: Arc<Gauge>,
    pub scrape_duration_seconds: Arc<Gauge>,
}

impl MetricsCollector {
    pub fn new() -> anyhow::Result<Self> {
        let registry = Registry::new();

        // Inventory metrics
        let asset_count = GaugeVec::new(
            Opts::new("asset_count", "SnipeIt Assets").namespace(NAMESPACE),
            &["name", "model_number", "status"],
        )?;

        let consumable_remaining = GaugeVec::new(
            Opts::new(
                "consumable_remaining",
                "SnipeIt remaining consumable quantity",
            )
            .namespace(NAMESPACE),
            &["name", "model_number"],
        )?;

        let component_remaining = GaugeVec::new(
            Opts::new(
                "component_remaining",
                "SnipeIt remaining component quantity",
            )
            .namespace(NAMESPACE),
            &["name", "serial"],
        )?;

        let asset_count_user = GaugeVec::new(
            Opts::new("asset_count_user", "SnipeIt user asset counts").namespace(NAMESPACE),
            &["user", "model_name", "model_number"],
        )?;

        // Exporter metrics

        let up = Gauge::new(
            "snipeit_up",
            "Whether the last scrape of the Snipe-IT API succeeded (1=up, 0=down)",
        )?;

        let scrape_duration_seconds = Gauge::new(
            "snipeit_scrape_duration_seconds",
            "Duration of the last successful Snipe-IT scrape in seconds",
        )?;

        // Register all metrics
        registry.register(Box::new(asset_count.clone()))?;
        registry.register(Box::new(consumable_remaining.clone()))?;
        registry.register(Box::new(component_remaining.clone()))?;
        registry.register(Box::new(asset_count_user.clone()))?;
        registry.register(Box::new(up.clone()))?;
        registry.register(Box::new(scrape_duration_seconds.clone()))?;

        Ok(Self {
            registry: Arc::new(registry),
            asset_count: Arc::new(asset_count),
            consumable_remaining: Arc::new(consumable_remaining),
            component_remaining: Arc::new(component_remaining),
            asset_count_user: Arc::new(asset_count_user),
            up: Arc::new(up),
            scrape_duration_seconds: Arc::new(scrape_duration_seconds),
        })
    }

    /// Replace the inventory families with the contents of `inventory`
    ///
    /// Returns the number of samples written.
    pub fn publish(&self, inventory: &Inventory) -> usize {
        self.reset();

        for hw in &inventory.hardware {
            self.asset_count
                .with_label_values(&[
                    hw.model_name.as_str(),
                    hw.model_number.as_str(),
                    hw.status_name.as_str(),
                ])
                .set(hw.count as f64);
        }

        for consumable in &inventory.consumables {
            self.consumable_remaining
                .with_label_values(&[consumable.name.as_str(), consumable.model_number.as_str()])
                .set(consumable.remaining as f64);
        }

        for component in &inventory.components {
            self.component_remaining
                .with_label_values(&[component.name.as_str(), component.serial.as_str()])
                .set(component.remaining as f64);
        }

        for user_asset in &inventory.user_assets {
            self.asset_count_user
                .with_label_values(&[
                    user_asset.user.as_str(),
                    user_asset.model_name.as_str(),
                    user_asset.model_number.as_str(),
                ])
                .set(user_asset.count as f64);
        }

        inventory.hardware.len()
            + inventory.consumables.len()
            + inventory.components.len()
            + inventory.user_assets.len()
    }

    /// Render metrics in Prometheus text format
    ///
    /// The registry drops families without samples, so the header of every empty
    /// inventory family is appended by hand.
    pub fn render(&self) -> anyhow::Result<String> {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        encoder.encode(&metric_families, &mut buffer)?;
        let mut output = String::from_utf8(buffer)?;

        let inventory = [
            &self.asset_count,
            &self.consumable_remaining,
            &self.component_remaining,
            &self.asset_count_user,
        ];
        for desc in inventory.iter().flat_map(|family| family.desc()) {
            if !output.contains(&format!("# TYPE {} gauge\n", desc.fq_name)) {
                writeln!(output, "# HELP {} {}", desc.fq_name, desc.help)?;
                writeln!(output, "# TYPE {} gauge", desc.fq_name)?;
            }
        }

        Ok(output)
    }

    /// Clear all inventory samples
    pub fn reset(&self) {
        self.asset_count.reset();
        self.consumable_remaining.reset();
        self.component_remaining.reset();
        self.asset_count_user.reset();
    }
}
