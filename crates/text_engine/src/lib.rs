//! Text Engine - Font state, text measurement, and shaping
//!
//! This crate provides the measurement capability the layout engine depends
//! on. Layout never touches glyphs directly; it only asks a [`TextMeasurer`]
//! how wide a string renders under a given [`FontState`].
//!
//! # Modules
//!
//! - `font`: Font state (family list, style, size, baseline)
//! - `metrics`: The measurement trait and deterministic measurers
//! - `shaper`: Width measurement from real font data using rustybuzz

mod error;
mod font;
mod metrics;
mod shaper;

pub use error::*;
pub use font::*;
pub use metrics::*;
pub use shaper::*;
