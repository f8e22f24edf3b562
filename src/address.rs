//! Conversion between dotted-decimal IPv4 text and the numeric ordinals the
//! range table is keyed on.
//!
//! The first octet lands in the most significant byte, so numeric ordering of
//! the ordinals matches address ordering (`1.0.0.0 < 2.0.0.0`).

use std::net::Ipv4Addr;

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum AddressError {
  #[error("invalid IPv4 address: {0:?}")]
  InvalidAddress(String),
}

/// Parse a strict dotted-decimal IPv4 literal into its host-order ordinal.
///
/// Exactly four decimal octets in `0..=255` are accepted. Surrounding
/// whitespace, leading zeros, and any other trailing text are rejected.
pub fn encode(text: &str) -> Result<u32, AddressError> {
  text
    .parse::<Ipv4Addr>()
    .map(u32::from)
    .map_err(|_| AddressError::InvalidAddress(text.to_owned()))
}

/// Render an ordinal back into canonical dotted-decimal text.
///
/// Every `u32` has a textual form, so this never fails in practice; the
/// `Result` keeps the signature symmetric with [`encode`].
pub fn decode(ordinal: u32) -> Result<String, AddressError> {
  Ok(Ipv4Addr::from(ordinal).to_string())
}
