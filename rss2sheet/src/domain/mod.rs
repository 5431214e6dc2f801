//! Domain layer
//!
//! Feed and row models plus the traits the export pipeline depends on.
//! - `entities`: feed entries, normalized rows, the date window
//! - `ports`: feed source and sheet writer traits

pub mod entities;
pub mod ports;
