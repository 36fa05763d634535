//! Snipe-IT Prometheus Exporter
//!
//! A Prometheus metrics exporter for the [Snipe-IT](https://snipeitapp.com) asset
//! management system.
//!
//! # Overview
//!
//! On every scrape the exporter queries the Snipe-IT REST API, correlates hardware
//! counts with models and status labels (and optionally with the users holding
//! them), and exposes the result as gauges in Prometheus format. Nothing is cached
//! between scrapes.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐      HTTPS/JSON      ┌──────────────┐
//! │  Snipe-IT   │ ◄─────────────────►  │   Exporter   │
//! │  /api/v1    │   Bearer API key     │              │
//! └─────────────┘                      │  ┌────────┐  │      HTTP      ┌────────────┐
//!                                      │  │ Client │  │ ◄────────────► │ Prometheus │
//!                                      │  └────────┘  │   /metrics     └────────────┘
//!                                      │  ┌────────┐  │
//!                                      │  │Collect.│  │
//!                                      │  └────────┘  │
//!                                      └──────────────┘
//! ```
//!
//! # Modules
//!
//! - [`snipeit`] - REST client and API type definitions
//! - [`collectors`] - Scrape pipeline stages and correlation logic
//! - [`metrics`] - Prometheus metric definitions
//! - [`server`] - HTTP server and scrape handling
//! - [`config`] - Configuration management
//! - [`error`] - Error types
//!
//! # Quick Start
//!
//! ```no_run
//! use snipeit_exporter::{config::Config, server};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load("config/Default.toml")?;
//!     config.validate()?;
//!     server::start(config).await?;
//!     Ok(())
//! }
//! ```
//!
//! # Features
//!
//! - ✅ Asset counts per model and status label
//! - ✅ Consumable and component stock levels (optional)
//! - ✅ Per-user asset counts (optional)
//! - ✅ Bounded concurrency for the hardware count fan-out

pub mod collectors;
pub mod config;
pub mod error;
pub mod metrics;
pub mod server;
pub mod snipeit;
