//! Cueforge-Common: shared timestamp types and errors.
//!
//! This crate provides the pieces every cueforge crate agrees on:
//!
//! - **Timestamps**: [`TimeUs`], a microsecond media time with a distinguishable
//!   [`TimeUs::UNSET`] sentinel
//! - **Error Handling**: common error types and result aliases
//!
//! # Examples
//!
//! ```
//! use cueforge_common::{Error, TimeUs};
//!
//! let start = TimeUs::from_micros(1_000);
//! assert_eq!(start.checked_add_duration(500).unwrap(), TimeUs::from_micros(1_500));
//!
//! assert!(matches!(
//!     TimeUs::UNSET.checked_add_duration(500),
//!     Err(Error::UnsetTime)
//! ));
//! ```

pub mod error;
pub mod time;

pub use error::{Error, Result};
pub use time::TimeUs;
