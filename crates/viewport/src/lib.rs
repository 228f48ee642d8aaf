//! Viewport observation for PageKit
//!
//! This crate owns the only piece of mutable layout state: the current
//! breakpoint tier. A [`BreakpointDetector`] is mounted once per render
//! context and every layout primitive reads its tier from there.
//!
//! # Modules
//!
//! - [`detector`] - Tier tracking and change notification
//! - [`source`] - Host measurement abstraction
//! - [`config`] - Threshold configuration

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod detector;
pub mod source;

pub use config::ViewportConfig;
pub use detector::{BreakpointDetector, ListenerId, TierChange, TrackingHandle, ViewportSnapshot};
pub use source::{FixedViewport, ViewportSource};
