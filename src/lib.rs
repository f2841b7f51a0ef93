//! Converts values between units of length, weight, temperature and volume.
//!
//! [`convert`] is the entry point used by the web form: it always returns a
//! line to display, either the formatted result or a user facing error.

pub mod catalog;
pub mod config;
pub mod conversion;
pub mod error;
pub mod registry;
pub mod render;
pub mod theme;

pub use conversion::{convert, convert_input, ConversionRequest, ConversionResult};
pub use error::{ConversionError, ErrorKind};
