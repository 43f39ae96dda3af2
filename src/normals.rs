//! The climate normal aggregation engine.
//!
//! A single-pass, side-effect free pipeline per family:
//! [`parser`] → [`aggregator`] → [`summarizer`], wrapped by [`propagator`]
//! which turns any failure along the way into an all-null family.

pub mod aggregator;
pub mod error;
pub mod parser;
pub mod propagator;
pub mod summarizer;
