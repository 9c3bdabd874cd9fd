//! Supporting utilities used by models.
//!
//! Everything here is part of the public API: these are the raw
//! computational surfaces the typed [`crate::models`] adapters delegate to,
//! and they are useful on their own from analysis scripts. Their APIs are
//! not stable; breaking changes may occur as needed.

pub mod angular_speed;
pub mod constraint;
pub mod couette;
pub mod disk;
pub mod quadrature;
pub mod well;
