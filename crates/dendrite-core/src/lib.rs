//! Dendrite Core Types and Definitions
//!
//! This crate provides the foundational types for the Dendrite concept-map
//! layout engine. It includes:
//!
//! - **Geometry**: Points, bounds, and angle helpers ([`geometry`] module)
//! - **Semantic**: The concept-map model of concepts, roles, and
//!   connections ([`semantic`] module)
//!
//! Everything here is pure data: no I/O, no randomness, no hidden state.
//! The layout algorithms that consume these types live in the `dendrite`
//! crate.

pub mod geometry;
pub mod semantic;
