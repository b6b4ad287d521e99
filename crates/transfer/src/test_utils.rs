use crate::error::TransferError;
use crate::transport::{ApiRequest, Payload, Reply, Transport};
use common::settings::{KEY_DROPBOX_TOKEN, KEY_FILENAME};
use common::Settings;
use log::{Level, LevelFilter, Log, Metadata, Record};
use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use std::cell::RefCell;
use std::io::{self, Read};
use std::sync::Once;

/// What the fake endpoint does with every request
pub enum Behavior {
    Respond(StatusCode, Vec<u8>),
    Refuse,
}

/// A request as the fake endpoint saw it, with the file body read out
#[derive(Debug)]
pub struct Recorded {
    pub url: String,
    pub headers: HeaderMap,
    pub body: Option<Vec<u8>>,
    pub declared_len: Option<u64>,
}

pub struct FakeTransport {
    behavior: Behavior,
    pub requests: RefCell<Vec<Recorded>>,
}

impl FakeTransport {
    pub fn respond(status: u16, body: &[u8]) -> Self {
        Self {
            behavior: Behavior::Respond(
                StatusCode::from_u16(status).expect("valid status"),
                body.to_vec(),
            ),
            requests: RefCell::new(Vec::new()),
        }
    }

    pub fn refuse() -> Self {
        Self {
            behavior: Behavior::Refuse,
            requests: RefCell::new(Vec::new()),
        }
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }
}

impl Transport for FakeTransport {
    fn send(&self, request: ApiRequest) -> Result<Reply, TransferError> {
        let (body, declared_len) = match request.payload {
            Payload::Empty => (None, None),
            Payload::File { mut file, len } => {
                let mut buf = Vec::new();
                file.read_to_end(&mut buf)
                    .map_err(TransferError::Connection)?;
                (Some(buf), Some(len))
            }
        };
        self.requests.borrow_mut().push(Recorded {
            url: request.url,
            headers: request.headers,
            body,
            declared_len,
        });

        match &self.behavior {
            Behavior::Respond(status, body) => Ok(Reply {
                status: *status,
                body: body.clone(),
            }),
            Behavior::Refuse => Err(TransferError::Connection(io::Error::new(
                io::ErrorKind::ConnectionRefused,
                "connection refused",
            ))),
        }
    }
}

pub fn settings(filename: &str, token: &str) -> Settings {
    [(KEY_FILENAME, filename), (KEY_DROPBOX_TOKEN, token)]
        .into_iter()
        .collect()
}

thread_local! {
    static CAPTURED: RefCell<Vec<(Level, String)>> = RefCell::new(Vec::new());
}

/// Logger that records each test thread's messages separately
struct CaptureLogger;

impl Log for CaptureLogger {
    fn enabled(&self, _: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        CAPTURED.with(|c| {
            c.borrow_mut()
                .push((record.level(), record.args().to_string()))
        });
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger;
static INIT: Once = Once::new();

/// Run `f` and return its result with the log lines it emitted on this thread
pub fn capture_logs<R>(f: impl FnOnce() -> R) -> (R, Vec<(Level, String)>) {
    INIT.call_once(|| {
        if log::set_logger(&LOGGER).is_ok() {
            log::set_max_level(LevelFilter::Trace);
        }
    });
    CAPTURED.with(|c| c.borrow_mut().clear());
    let result = f();
    let lines = CAPTURED.with(|c| c.borrow_mut().drain(..).collect());
    (result, lines)
}
