//! # ipconv core
//!
//! Converts IP addresses between presentation text, network-order bytes and
//! exact decimal numbers.
//!
//! * **[`classifier`]**: Text to typed payload, with IPv4-mapped IPv6 collapsed to IPv4.
//! * **[`decimal`]**: 128-bit big-endian value to base-10 digits, without wide integers.
//! * **[`window`]**: Clamping of requested offsets and lengths against bounded buffers.
//! * **[`convert`]**: The operations a host binding exposes, built from the three above.
//!
//! Everything here is pure and synchronous; calls may run concurrently without coordination.

pub mod classifier;
pub mod convert;
pub mod decimal;
pub mod window;
