//! chart-guides: selection-reactive chart guides.
//!
//! Guides such as the crosshair turn the active selection, the chart's
//! aesthetic groups and a rectangular or polar coordinate system into clipped,
//! z-indexed scenes that a compositor paints over the chart.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{CrosshairGuide, CrosshairGuideConfig, CrosshairOperator, GuideEngine};
pub use error::{ChartError, ChartResult};
