pub mod record;

use std::collections::btree_map::{self, Entry};
use std::collections::BTreeMap;
use std::iter::FromIterator;

use log::debug;

pub use record::{AsRecord, RecordError};

/// Disjoint AS records ordered by `range_start`.
///
/// The index is built once and never mutated afterwards, so a shared
/// reference can be handed to any number of reader threads.
///
/// Records are keyed on `range_start` alone. When two records share a start,
/// the first one inserted is kept and the later one is dropped.
#[derive(Debug, Default)]
pub struct RangeIndex {
  records: BTreeMap<u32, AsRecord>,
}

impl RangeIndex {
  pub fn build<I>(records: I) -> RangeIndex
  where
    I: IntoIterator<Item = AsRecord>,
  {
    let mut map = BTreeMap::new();

    for record in records {
      match map.entry(record.range_start()) {
        Entry::Vacant(slot) => {
          slot.insert(record);
        }
        Entry::Occupied(kept) => {
          debug!(
            "dropping record {} with duplicate range start, keeping {}",
            record,
            kept.get()
          );
        }
      }
    }

    RangeIndex { records: map }
  }

  /// Find the record whose `[range_start, range_end]` contains `ip`.
  ///
  /// Only the record with the greatest `range_start <= ip` can cover `ip`
  /// when ranges are disjoint, so that single candidate is tested.
  pub fn query(&self, ip: u32) -> Option<&AsRecord> {
    let (_, candidate) = self.records.range(..=ip).next_back()?;

    if candidate.contains(ip) {
      Some(candidate)
    } else {
      None
    }
  }

  pub fn len(&self) -> usize {
    self.records.len()
  }

  pub fn is_empty(&self) -> bool {
    self.records.is_empty()
  }

  /// Records in ascending `range_start` order.
  pub fn iter(&self) -> btree_map::Values<'_, u32, AsRecord> {
    self.records.values()
  }
}

impl FromIterator<AsRecord> for RangeIndex {
  fn from_iter<I: IntoIterator<Item = AsRecord>>(iter: I) -> Self {
    RangeIndex::build(iter)
  }
}

impl<'a> IntoIterator for &'a RangeIndex {
  type Item = &'a AsRecord;
  type IntoIter = btree_map::Values<'a, u32, AsRecord>;

  fn into_iter(self) -> Self::IntoIter {
    self.iter()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn record(start: u32, end: u32, asn: u32) -> AsRecord {
    AsRecord::new(start, end, asn, "US", format!("AS{}", asn)).unwrap()
  }

  fn sample() -> RangeIndex {
    // deliberately unordered
    RangeIndex::build(vec![
      record(300, 399, 3),
      record(100, 199, 1),
      record(500, 500, 5),
      record(200, 249, 2),
    ])
  }

  #[test]
  fn build_orders_by_range_start() {
    let index = sample();
    let starts: Vec<u32> = index.iter().map(AsRecord::range_start).collect();
    assert_eq!(starts, vec![100, 200, 300, 500]);
    assert_eq!(index.len(), 4);
    assert!(!index.is_empty());
  }

  #[test]
  fn query_inside_range() {
    let index = sample();
    assert_eq!(index.query(150).map(AsRecord::asn), Some(1));
    assert_eq!(index.query(220).map(AsRecord::asn), Some(2));
    assert_eq!(index.query(350).map(AsRecord::asn), Some(3));
    assert_eq!(index.query(500).map(AsRecord::asn), Some(5));
  }

  #[test]
  fn query_boundaries_are_inclusive() {
    let index = sample();

    assert_eq!(index.query(100).map(AsRecord::asn), Some(1));
    assert_eq!(index.query(199).map(AsRecord::asn), Some(1));
    assert_eq!(index.query(99), None);

    assert_eq!(index.query(249).map(AsRecord::asn), Some(2));
    assert_eq!(index.query(250), None);
    assert_eq!(index.query(299), None);
    assert_eq!(index.query(300).map(AsRecord::asn), Some(3));
  }

  #[test]
  fn query_gaps_and_outside() {
    let index = sample();
    assert_eq!(index.query(0), None);
    assert_eq!(index.query(400), None);
    assert_eq!(index.query(499), None);
    assert_eq!(index.query(501), None);
    assert_eq!(index.query(u32::MAX), None);
  }

  #[test]
  fn query_at_edges_of_address_space() {
    let index = RangeIndex::build(vec![record(0, 9, 1), record(u32::MAX - 9, u32::MAX, 2)]);
    assert_eq!(index.query(0).map(AsRecord::asn), Some(1));
    assert_eq!(index.query(u32::MAX).map(AsRecord::asn), Some(2));
    assert_eq!(index.query(10), None);
  }

  #[test]
  fn query_matches_linear_scan() {
    let index = sample();
    let records: Vec<AsRecord> = index.iter().cloned().collect();

    for ip in 0..=600 {
      let expected = records.iter().find(|r| r.contains(ip));
      assert_eq!(index.query(ip), expected, "ip {}", ip);
    }
  }

  #[test]
  fn duplicate_range_start_keeps_first() {
    let index = RangeIndex::build(vec![record(100, 199, 1), record(100, 150, 2)]);

    assert_eq!(index.len(), 1);
    assert_eq!(index.query(120).map(AsRecord::asn), Some(1));
    assert_eq!(index.query(180).map(AsRecord::asn), Some(1));
  }

  #[test]
  fn empty_index_finds_nothing() {
    let index = RangeIndex::build(Vec::new());

    assert!(index.is_empty());
    assert_eq!(index.len(), 0);
    assert_eq!(index.query(0), None);
    assert_eq!(index.query(16777216), None);
    assert_eq!(index.query(u32::MAX), None);
  }

  #[test]
  fn index_is_shareable_across_threads() {
    fn assert_sync<T: Send + Sync>() {}
    assert_sync::<RangeIndex>();

    let index = std::sync::Arc::new(sample());
    let handles: Vec<_> = (0..4)
      .map(|_| {
        let index = index.clone();
        std::thread::spawn(move || index.query(150).map(AsRecord::asn))
      })
      .collect();

    for handle in handles {
      assert_eq!(handle.join().unwrap(), Some(1));
    }
  }

  #[test]
  fn collect_into_index() {
    let index: RangeIndex = vec![record(10, 20, 1), record(30, 40, 2)]
      .into_iter()
      .collect();
    assert_eq!(index.len(), 2);
    assert_eq!((&index).into_iter().count(), 2);
  }
}
