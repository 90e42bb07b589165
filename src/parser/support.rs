//! Support-report pass: capability lines into a [`SupportRecord`].

use crate::core::{SupportEntry, SupportRecord};
use crate::errors::{Error, Result};
use crate::parser::{classify, tokenize, LineClass};

/// Parse the full text of one support report.
///
/// A malformed line aborts the parse; partial records never escape.
pub fn parse_support<I, S>(lines: I) -> Result<SupportRecord>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut record = SupportRecord::new();

    for (idx, raw) in lines.into_iter().enumerate() {
        let line_no = idx + 1;
        let Some((line, fields)) = tokenize(raw.as_ref()) else {
            continue;
        };
        if fields.len() < 2 {
            return Err(Error::parse(
                line_no,
                format!("expected at least 2 fields, got {}", fields.len()),
            ));
        }

        match classify(line) {
            LineClass::TestInfo => {
                record
                    .test_info
                    .insert(fields[0].to_string(), fields[1].trim().to_string());
            }
            LineClass::JcSystem => {
                record
                    .jcsystem
                    .insert(fields[0].to_string(), fields[1].to_string());
            }
            LineClass::Cplc => {
                record
                    .cplc
                    .insert(fields[0].to_string(), fields[1].to_string());
            }
            LineClass::Support => {
                let detail = fields
                    .get(2)
                    .filter(|d| !d.is_empty())
                    .map(|d| d.to_string());
                record.support.insert(
                    fields[0].to_string(),
                    SupportEntry {
                        status: fields[1].to_string(),
                        detail,
                    },
                );
            }
        }
    }

    Ok(record)
}
