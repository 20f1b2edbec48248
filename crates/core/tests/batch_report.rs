use std::collections::HashMap;

use pokt_batch_send_core::prelude::*;

/// Answers from a fixed table, failing for any address it does not know.
struct TableBuilder {
    hashes: HashMap<String, String>,
}

impl TransactionBuilder for TableBuilder {
    fn send(&self, to_address: &str, amount: &Amount) -> TransferMsg {
        TransferMsg::builder()
            .from_address("f".repeat(40))
            .to_address(to_address)
            .amount(amount.clone())
            .build()
    }

    async fn submit(&self, _memo: &str, msg: TransferMsg) -> Result<TxResponse, SubmitError> {
        match self.hashes.get(msg.to_address()) {
            Some(hash) => Ok(TxResponse::builder().tx_hash(hash.clone()).build()),
            None => Err(SubmitError::Network {
                underlying: "connection reset by peer".to_owned(),
            }),
        }
    }
}

fn address(c: char) -> String {
    std::iter::repeat(c).take(40).collect()
}

fn read_rows(report: &str) -> Vec<(String, String)> {
    let mut reader = csv::Reader::from_reader(report.as_bytes());
    assert_eq!(
        reader.headers().unwrap(),
        &csv::StringRecord::from(vec!["address", "response"])
    );
    reader
        .records()
        .map(|r| {
            let r = r.unwrap();
            (r[0].to_owned(), r[1].to_owned())
        })
        .collect()
}

#[tokio::test]
async fn middle_failure_yields_three_ordered_rows() {
    let csv_content = format!("address\n{}\n{}\n{}\n", address('A'), address('b'), address('c'));
    let recipients = validate_recipients_csv(&csv_content, 40).unwrap();

    let builder = TableBuilder {
        hashes: HashMap::from([
            (address('a'), "HASH-A".to_owned()),
            (address('c'), "HASH-C".to_owned()),
        ]),
    };
    let sender = BatchSender::builder()
        .transaction_builder(builder)
        .amount(Amount::parse("1000000").unwrap())
        .build();
    let records = sender.send_all(&recipients).await;

    let mut report = Vec::new();
    write_report(&records, &mut report).unwrap();
    let rows = read_rows(&String::from_utf8(report).unwrap());

    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0], (address('A'), "HASH-A".to_owned()));
    assert_eq!(rows[1].0, address('b'));
    assert!(rows[1].1.starts_with("ERROR:"), "got {}", rows[1].1);
    assert!(rows[1].1.contains("connection reset by peer"));
    assert_eq!(rows[2], (address('c'), "HASH-C".to_owned()));
}

#[tokio::test]
async fn report_has_one_row_per_input_row() {
    let addresses = (0..250)
        .map(|i| format!("{i:040x}"))
        .collect::<Vec<_>>();
    let csv_content = format!("address\n{}\n", addresses.join("\n"));
    let recipients = validate_recipients_csv(&csv_content, 40).unwrap();

    let builder = TableBuilder {
        hashes: addresses
            .iter()
            .step_by(2)
            .map(|a| (a.clone(), format!("HASH-{a}")))
            .collect(),
    };
    let sender = BatchSender::builder()
        .transaction_builder(builder)
        .amount(Amount::parse("1").unwrap())
        .build();
    let records = sender.send_all(&recipients).await;

    let dir = tempfile::tempdir().unwrap();
    let path = save_report(&records, dir.path(), chrono::Utc::now()).unwrap();
    let rows = read_rows(&std::fs::read_to_string(path).unwrap());

    assert_eq!(
        rows.iter().map(|(a, _)| a.clone()).collect::<Vec<_>>(),
        addresses
    );
    for (i, (_, response)) in rows.iter().enumerate() {
        assert_eq!(response.starts_with("ERROR:"), i % 2 == 1);
    }
}
