//! Public Couette models.
//!
//! Models are the primary public interface of this crate.
//!
//! # Organization
//!
//! Models are organized into domain-specific submodules based on the
//! apparatus they describe: [`couette`] for concentric cylinder flow,
//! [`disk`] for rotating disks over a plate, and [`wellplate`] for
//! conical-bottom multiwell plates.
//!
//! # Model structure
//!
//! Each [`twine_core::Model`] implementation here is a thin adapter over the
//! corresponding [`crate::support`] functions: the adapter owns the fixed
//! apparatus parameters (validated once at construction), converts the typed
//! [`uom`] input to the raw scalars the formulas use, and wraps the result
//! back into a typed quantity.

pub mod couette;
pub mod disk;
pub mod wellplate;
