//! Offline IPv4-to-AS resolution over a static table of disjoint ranges.
//!
//! Records come from a [`store::RecordSource`], are bulk-loaded into an
//! immutable [`index::RangeIndex`], and are queried through
//! [`lookup::resolve`].
//!
//! ```
//! use ip2asn::index::{AsRecord, RangeIndex};
//! use ip2asn::lookup::{resolve, Lookup};
//!
//! let record = AsRecord::new(16777216, 16777471, 13335, "US", "CLOUDFLARENET").unwrap();
//! let index = RangeIndex::build(vec![record]);
//!
//! match resolve(&index, "1.0.0.5").unwrap() {
//!     Lookup::Found(info) => assert_eq!(info.asn, 13335),
//!     Lookup::NotFound => unreachable!(),
//! }
//! ```

pub mod address;
pub mod index;
pub mod lookup;
pub mod store;
