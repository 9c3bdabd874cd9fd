//! # Couette Models
//!
//! Closed-form engineering models for Taylor-Couette (concentric cylinder)
//! flow, rotating-disk shear, and conical-bottom well-plate volumes.
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations.
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Units
//!
//! Fixed-unit quantities (spindle speeds, shear rates, the well-plate
//! geometry) are handled with [`uom`]. Radii and gap heights in the
//! concentric cylinder and disk relations carry whatever length unit the
//! caller chooses, as long as it is consistent within one call; those enter
//! and leave the [`support`] functions as plain `f64` with the unit
//! documented per function.
//!
//! ## Numeric contract
//!
//! The [`support`] functions compute exactly what their formulas state and
//! nothing else: no argument validation, no clamping. Physically
//! inconsistent inputs (a zero-width annular gap, a zero disk clearance)
//! produce infinities or NaNs by ordinary IEEE-754 arithmetic and propagate
//! to the caller unchanged. The typed wrappers in [`models`] check their
//! parameters once, at construction.

pub mod models;
pub mod support;
