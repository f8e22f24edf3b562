use std::fmt;

use thiserror::Error;

/// One row of the AS table: an inclusive span of IPv4 ordinals and the
/// autonomous system that announces it.
///
/// Fields are private so a record cannot change once it has been built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AsRecord {
  range_start: u32,
  range_end: u32,
  asn: u32,
  country_code: String,
  description: String,
}

#[derive(Debug, Error, PartialEq)]
pub enum RecordError {
  #[error("range start {start} is greater than range end {end}")]
  InvertedRange { start: u32, end: u32 },
}

impl AsRecord {
  pub fn new(
    range_start: u32,
    range_end: u32,
    asn: u32,
    country_code: impl Into<String>,
    description: impl Into<String>,
  ) -> Result<AsRecord, RecordError> {
    if range_start > range_end {
      return Err(RecordError::InvertedRange {
        start: range_start,
        end: range_end,
      });
    }

    Ok(AsRecord {
      range_start,
      range_end,
      asn,
      country_code: country_code.into(),
      description: description.into(),
    })
  }

  pub fn range_start(&self) -> u32 {
    self.range_start
  }

  pub fn range_end(&self) -> u32 {
    self.range_end
  }

  pub fn asn(&self) -> u32 {
    self.asn
  }

  pub fn country_code(&self) -> &str {
    &self.country_code
  }

  pub fn description(&self) -> &str {
    &self.description
  }

  /// Both bounds are inclusive.
  pub fn contains(&self, ip: u32) -> bool {
    self.range_start <= ip && ip <= self.range_end
  }
}

impl fmt::Display for AsRecord {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "{}-{} AS{} {} {}",
      self.range_start, self.range_end, self.asn, self.country_code, self.description
    )
  }
}
