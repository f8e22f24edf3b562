use std::fmt;

use serde::Serialize;

use crate::address::{self, AddressError};
use crate::index::{AsRecord, RangeIndex};

/// A matched table row with its range rendered as dotted-decimal text.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AsInfo {
  pub asn: u32,
  pub range_start: String,
  pub range_end: String,
  pub country_code: String,
  pub description: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum Lookup {
  Found(AsInfo),
  NotFound,
}

impl AsInfo {
  fn from_record(record: &AsRecord) -> Result<AsInfo, AddressError> {
    Ok(AsInfo {
      asn: record.asn(),
      range_start: address::decode(record.range_start())?,
      range_end: address::decode(record.range_end())?,
      country_code: record.country_code().to_owned(),
      description: record.description().to_owned(),
    })
  }
}

impl fmt::Display for AsInfo {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, "ASN: {}", self.asn)?;
    writeln!(f, "Net Range: {} - {}", self.range_start, self.range_end)?;
    writeln!(f, "Country Code: {}", self.country_code)?;
    write!(f, "Description: {}", self.description)
  }
}

impl fmt::Display for Lookup {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Lookup::Found(info) => fmt::Display::fmt(info, f),
      Lookup::NotFound => f.write_str("Not found"),
    }
  }
}

/// Answer which AS, if any, announces `text`.
///
/// # Errors
///
/// `AddressError::InvalidAddress` when `text` is not a dotted-decimal IPv4
/// literal. A miss is `Ok(Lookup::NotFound)`, not an error.
pub fn resolve(index: &RangeIndex, text: &str) -> Result<Lookup, AddressError> {
  let ip = address::encode(text)?;

  match index.query(ip) {
    Some(record) => Ok(Lookup::Found(AsInfo::from_record(record)?)),
    None => Ok(Lookup::NotFound),
  }
}
