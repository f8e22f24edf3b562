use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{info, warn};

use super::{LoadReport, RecordSource, StoreError};
use crate::index::AsRecord;

/// Reads the `ip2asn-v4-u32.tsv` layout: one record per line holding
/// `range_start range_end asn country_code description`, where the numbers
/// are decimal and the description runs to the end of the line.
///
/// Unparsable lines are skipped and counted, never admitted to the table.
pub struct TsvStore<R> {
    reader: R,
}

impl TsvStore<BufReader<File>> {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let file = File::open(path.as_ref())?;
        Ok(TsvStore::new(BufReader::new(file)))
    }
}

impl<R: BufRead> TsvStore<R> {
    pub fn new(reader: R) -> TsvStore<R> {
        TsvStore { reader }
    }
}

impl<R: BufRead> RecordSource for TsvStore<R> {
    fn load(self) -> Result<LoadReport, StoreError> {
        let mut report = LoadReport::default();

        let mut reader = self.reader;
        let mut buf = Vec::new();
        let mut number = 0;

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            number += 1;

            // descriptions are not guaranteed to be UTF-8
            let line = String::from_utf8_lossy(&buf);

            match parse_line(&line) {
                Some(record) => report.records.push(record),
                None if line.trim().is_empty() => {}
                None => {
                    warn!("skipping malformed line {}: {:?}", number, line);
                    report.skipped += 1;
                }
            }
        }

        info!(
            "read {} records, skipped {} malformed lines",
            report.records.len(),
            report.skipped
        );
        Ok(report)
    }
}

/// Parse a single table line. Returns `None` for blank lines, lines with
/// fewer than four leading fields, numbers that do not fit a `u32`, and
/// inverted ranges.
pub fn parse_line(line: &str) -> Option<AsRecord> {
    let line = line.trim_end_matches(|c| c == '\n' || c == '\r');

    let mut rest = line;
    let mut fields = [""; 4];
    for field in fields.iter_mut() {
        let (token, tail) = next_token(rest)?;
        *field = token;
        rest = tail;
    }

    let range_start = fields[0].parse().ok()?;
    let range_end = fields[1].parse().ok()?;
    let asn = fields[2].parse().ok()?;
    let description = rest.trim_start();

    AsRecord::new(range_start, range_end, asn, fields[3], description).ok()
}

fn next_token(input: &str) -> Option<(&str, &str)> {
    let input = input.trim_start();
    if input.is_empty() {
        return None;
    }

    match input.find(char::is_whitespace) {
        Some(end) => Some((&input[..end], &input[end..])),
        None => Some((input, "")),
    }
}
