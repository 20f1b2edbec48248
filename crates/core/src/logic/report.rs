use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::prelude::*;

pub const RESULTS_FILE_SUFFIX: &str = "-results.csv";
const REPORT_HEADER: [&str; 2] = ["address", "response"];

#[derive(Debug, Serialize)]
struct ReportRow<'a> {
    address: &'a str,
    response: String,
}

impl<'a> From<&'a SubmissionRecord> for ReportRow<'a> {
    fn from(record: &'a SubmissionRecord) -> Self {
        Self {
            address: record.address().as_str(),
            response: record.response(),
        }
    }
}

/// Writes `address,response` followed by one row per record, in order.
pub fn write_report<W: Write>(records: &[SubmissionRecord], writer: W) -> Result<(), ReportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    if records.is_empty() {
        // `serialize` only emits the header along with the first row
        csv_writer.write_record(REPORT_HEADER)?;
    }
    for record in records {
        csv_writer.serialize(ReportRow::from(record))?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// ISO-8601 with milliseconds, so consecutive runs never collide.
pub fn results_file_name(at: DateTime<Utc>) -> String {
    format!(
        "{}{RESULTS_FILE_SUFFIX}",
        at.to_rfc3339_opts(SecondsFormat::Millis, true)
    )
}

/// Writes the report into `output_dir`, creating it if needed, and returns
/// the path of the new file.
pub fn save_report(
    records: &[SubmissionRecord],
    output_dir: impl AsRef<Path>,
    at: DateTime<Utc>,
) -> Result<PathBuf, ReportError> {
    let output_dir = output_dir.as_ref();
    fs::create_dir_all(output_dir).map_err(|e| ReportError::CreateOutputDir {
        path: output_dir.to_path_buf(),
        underlying: e,
    })?;

    let path = output_dir.join(results_file_name(at));
    let file = File::create(&path).map_err(|e| ReportError::CreateFile {
        path: path.clone(),
        underlying: e,
    })?;
    write_report(records, file)?;
    debug!("Wrote {} records to {}", records.len(), path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn report_of(records: &[SubmissionRecord]) -> String {
        let mut output = Vec::new();
        write_report(records, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn empty_report_still_has_header() {
        assert_eq!(report_of(&[]), "address,response\n");
    }

    #[test]
    fn rows_follow_record_order() {
        let records = vec![
            SubmissionRecord::submitted(RecipientAddress::new("b1"), "HASH1"),
            SubmissionRecord::failed(RecipientAddress::new("a2"), "timed out"),
            SubmissionRecord::submitted(RecipientAddress::new("c3"), "HASH3"),
        ];
        assert_eq!(
            report_of(&records),
            "address,response\nb1,HASH1\na2,ERROR: timed out\nc3,HASH3\n"
        );
    }

    #[test]
    fn error_with_comma_is_quoted() {
        let records = vec![SubmissionRecord::failed(
            RecipientAddress::new("a1"),
            r#"{"code":400,"message":"bad"}"#,
        )];
        let output = report_of(&records);

        let mut reader = csv::Reader::from_reader(output.as_bytes());
        let rows = reader
            .records()
            .collect::<Result<Vec<_>, _>>()
            .unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "a1");
        assert_eq!(&rows[0][1], r#"ERROR: {"code":400,"message":"bad"}"#);
    }

    #[test]
    fn file_name_embeds_timestamp() {
        let at = Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 6).unwrap();
        assert_eq!(results_file_name(at), "2024-03-09T14:05:06.000Z-results.csv");
    }

    #[test]
    fn save_creates_missing_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let output_dir = dir.path().join("output");
        let at = Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 6).unwrap();
        let records = vec![SubmissionRecord::submitted(
            RecipientAddress::new("a1"),
            "HASH",
        )];

        let path = save_report(&records, &output_dir, at).unwrap();

        assert_eq!(path, output_dir.join("2024-03-09T14:05:06.000Z-results.csv"));
        assert_eq!(
            fs::read_to_string(path).unwrap(),
            "address,response\na1,HASH\n"
        );
    }
}
