//! Performance-report pass: timing lines into a [`ResultStore`].
//!
//! Record grammar, after tokenization:
//!
//! ```text
//! <key>;<op1>,<op2>,...;<base1>,<base2>,...   measured operation
//! <key>;<ERROR_STRING>                        failed operation
//! ```
//!
//! The first numeric group holds the operation samples, the second the
//! no-op baseline samples. Performance files carry the same metadata
//! header block as support files; those lines are skipped here.

use crate::core::{PerformanceResult, ResultStore};
use crate::errors::{Error, Result};
use crate::parser::{classify, tokenize, LineClass};

pub fn parse_performance<I, S>(lines: I) -> Result<ResultStore>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut store = ResultStore::new();

    for (idx, raw) in lines.into_iter().enumerate() {
        let line_no = idx + 1;
        let Some((line, fields)) = tokenize(raw.as_ref()) else {
            continue;
        };
        if classify(line) != LineClass::Support {
            continue;
        }
        store.insert(parse_record(line_no, &fields)?);
    }

    Ok(store)
}

fn parse_record(line_no: usize, fields: &[&str]) -> Result<PerformanceResult> {
    if fields.len() < 2 {
        return Err(Error::parse(
            line_no,
            format!("expected at least 2 fields, got {}", fields.len()),
        ));
    }
    let key = fields[0];

    match fields.len() {
        // single remaining field: the operation failed with this error
        2 => Ok(PerformanceResult::failed(key, fields[1])),
        3 => {
            let samples = parse_group(line_no, key, 2, fields[1])?;
            let baseline = parse_group(line_no, key, 3, fields[2])?;
            Ok(PerformanceResult::measured(key, samples, baseline))
        }
        n => Err(Error::parse(
            line_no,
            format!("\"{key}\": expected 2 or 3 fields, got {n}"),
        )),
    }
}

/// Parse one comma-delimited numeric group. `field` is the 1-based index
/// of the group within the record, reported on conversion failure.
fn parse_group(line_no: usize, key: &str, field: usize, group: &str) -> Result<Vec<f64>> {
    group
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| {
            token.parse::<f64>().map_err(|_| {
                Error::parse_field(line_no, field, key, format!("not a number: \"{token}\""))
            })
        })
        .collect()
}
