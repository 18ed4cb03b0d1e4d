mod common;

use std::sync::Mutex;

use log::{LevelFilter, Log, Metadata, Record};
use matic_token_transfer::{config::Config, TransferService};

use common::{MockTransfer, PRIVATE_KEY, TX_HASH};

static LINES: Mutex<Vec<String>> = Mutex::new(Vec::new());

struct CaptureLogger;

impl Log for CaptureLogger {
    fn enabled(&self, _: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        LINES.lock().unwrap().push(record.args().to_string());
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger;

#[tokio::test]
async fn credential_never_reaches_logs_or_output() {
    log::set_logger(&LOGGER).unwrap();
    log::set_max_level(LevelFilter::Trace);

    let config = Config::from_lookup(|key| match key {
        "PRIVATE_KEY" => Some(PRIVATE_KEY.to_string()),
        _ => None,
    })
    .unwrap();
    let key_digits = &PRIVATE_KEY[2..];

    let service = TransferService::new(MockTransfer::returning(TX_HASH));
    let mut handler_output = String::new();
    let record = service
        .send_with_handler(&config.transfer, |hash| handler_output.push_str(hash))
        .await
        .unwrap();

    let lines = LINES.lock().unwrap().clone();
    assert!(lines.iter().any(|line| line.contains(TX_HASH)));

    let mut outputs = lines;
    outputs.push(handler_output);
    outputs.push(serde_json::to_string(&record).unwrap());
    outputs.push(format!("{:?}", config.credential));
    for output in outputs {
        assert!(!output.contains(key_digits), "{output}");
        assert!(!output.to_lowercase().contains(&key_digits.to_lowercase()), "{output}");
    }
}
