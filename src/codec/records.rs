use super::{CodecError, CodecResult, OptionBits};
use crate::router::{DEFAULT_DELIMITER, PathOptions, RouteRecord};

const OPTIONS_DELIMITER: char = ' ';
const RECORD_SEPARATOR: char = '\n';

/// `<global digit> SP` then `<digit> SP <path>` per record, newline separated.
pub fn encode_text(records: &[RouteRecord], global: &PathOptions) -> CodecResult<String> {
    if global.delimiter != DEFAULT_DELIMITER {
        return Err(CodecError::UnsupportedGlobalDelimiter {
            delimiter: global.delimiter,
        });
    }

    let mut out = String::new();
    out.push(OptionBits::from_options(false, global).to_digit());
    out.push(OPTIONS_DELIMITER);

    for (idx, record) in records.iter().enumerate() {
        if record.path.contains(RECORD_SEPARATOR) {
            return Err(CodecError::NewlineInPath {
                path: record.path.clone(),
            });
        }
        if record.options.delimiter != DEFAULT_DELIMITER {
            return Err(CodecError::UnsupportedDelimiter {
                path: record.path.clone(),
                delimiter: record.options.delimiter,
            });
        }
        if idx > 0 {
            out.push(RECORD_SEPARATOR);
        }
        out.push(OptionBits::from_options(record.apply_options, &record.options).to_digit());
        out.push(OPTIONS_DELIMITER);
        out.push_str(&record.path);
    }

    Ok(out)
}

pub fn decode_text(text: &str) -> CodecResult<(Vec<RouteRecord>, PathOptions)> {
    let (header, body) = text
        .split_once(OPTIONS_DELIMITER)
        .ok_or(CodecError::MissingHeader)?;
    let (_, global) = OptionBits::from_digit(header)?.to_options();

    if body.is_empty() {
        return Ok((Vec::new(), global));
    }

    let records = body
        .split(RECORD_SEPARATOR)
        .enumerate()
        .map(|(line, encoded)| decode_record(line, encoded))
        .collect::<CodecResult<Vec<_>>>()?;

    Ok((records, global))
}

fn decode_record(line: usize, encoded: &str) -> CodecResult<RouteRecord> {
    let (digit, path) =
        encoded
            .split_once(OPTIONS_DELIMITER)
            .ok_or_else(|| CodecError::MalformedRecord {
                line,
                record: encoded.to_string(),
            })?;
    let (apply_options, options) = OptionBits::from_digit(digit)?.to_options();

    Ok(RouteRecord {
        path: path.to_string(),
        options,
        apply_options,
    })
}
