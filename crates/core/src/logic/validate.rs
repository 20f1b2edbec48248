use std::path::Path;

use crate::prelude::*;

pub const ADDRESSES_HEADER: &str = "address";
pub const MAX_RECIPIENTS_PER_BATCH: usize = 1000;

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Succeeds iff `path` can be opened for reading right now.
pub fn validate_file_path(path: impl AsRef<Path>) -> Result<(), ValidationError> {
    let path = path.as_ref();
    std::fs::File::open(path)
        .map(|_| ())
        .map_err(|e| ValidationError::FileNotReadable {
            path: path.to_path_buf(),
            underlying: e.to_string(),
        })
}

pub fn validate_passphrase(raw: &str) -> Result<Passphrase, ValidationError> {
    Passphrase::new(raw)
}

pub fn validate_amount(raw: &str) -> Result<Amount, ValidationError> {
    Amount::parse(raw)
}

/// Requires an absolute url with a host, e.g. `https://rpc.example.com`.
pub fn validate_rpc_url(raw: &str) -> Result<Url, ValidationError> {
    let url = Url::parse(raw.trim()).map_err(|e| ValidationError::RpcUrlInvalid {
        bad_value: raw.to_owned(),
        underlying: e.to_string(),
    })?;
    if !url.has_host() {
        return Err(ValidationError::RpcUrlMissingHost {
            bad_value: raw.to_owned(),
        });
    }
    Ok(url)
}

/// Checks the structure of a recipients file and returns its addresses in
/// file order.
///
/// The first line must be exactly `address`. Every other non-empty line must
/// be `address_length` characters long, all offenders are reported at once.
/// At most [`MAX_RECIPIENTS_PER_BATCH`] addresses are accepted.
pub fn validate_recipients_csv(
    content: &str,
    address_length: usize,
) -> Result<Vec<RecipientAddress>, ValidationError> {
    let mut lines = content
        .trim_start_matches(BYTE_ORDER_MARK)
        .split('\n')
        .map(str::trim);

    let header = lines.next().unwrap_or_default();
    if header != ADDRESSES_HEADER {
        return Err(ValidationError::MalformedHeader {
            expected: ADDRESSES_HEADER.to_owned(),
            found: header.to_owned(),
        });
    }

    let rows = lines.filter(|line| !line.is_empty()).collect::<Vec<_>>();

    let offending = rows
        .iter()
        .filter(|row| row.chars().count() != address_length)
        .map(|row| row.to_string())
        .collect::<Vec<_>>();
    if !offending.is_empty() {
        return Err(ValidationError::InvalidAddresses {
            expected_length: address_length,
            offending,
        });
    }

    if rows.len() > MAX_RECIPIENTS_PER_BATCH {
        return Err(ValidationError::TooManyRecipients {
            count: rows.len(),
            max: MAX_RECIPIENTS_PER_BATCH,
        });
    }

    Ok(rows.into_iter().map(RecipientAddress::new).collect())
}
