//! # ipconv common
//!
//! Value types shared by the conversion core and the command-line host.
//!
//! * **[`address`]**: Address kinds and the raw network-order payload.
//! * **[`window`]**: The resolved source/destination copy window.
//! * **[`buffer`]**: Parsing of host-side byte buffer arguments.
//! * **[`error`]**: Argument-shape failures raised at the host boundary.
//! * **[`config`]**: Output settings of the command-line host.

pub mod address;
pub mod buffer;
pub mod config;
pub mod error;
pub mod window;
