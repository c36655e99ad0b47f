use std::{cell::RefCell, sync::Once, time::Duration};

use log::{LevelFilter, Log, Metadata, Record};
use reqwest::Client;
use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::TcpListener,
    time::sleep,
};

thread_local! {
    static CAPTURED: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
}

/// Keeps `LEVEL - message` lines per thread, so parallel tests don't mix.
struct CaptureLogger;

impl Log for CaptureLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= LevelFilter::Info
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let line = format!("{} - {}", record.level(), record.args());
            CAPTURED.with(|x| x.borrow_mut().push(line));
        }
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger;
static LOGGER_INIT: Once = Once::new();

/// Starts capturing log lines emitted on the current thread.
pub fn capture_logs() {
    LOGGER_INIT.call_once(|| {
        log::set_logger(&LOGGER).unwrap();
        log::set_max_level(LevelFilter::Info);
    });
    CAPTURED.with(|x| x.borrow_mut().clear());
}

pub fn captured_logs() -> Vec<String> {
    CAPTURED.with(|x| x.borrow().clone())
}

/// Client that ignores proxy settings from the environment
pub fn test_client() -> Client {
    Client::builder().no_proxy().build().unwrap()
}

/// Answers exactly one request with the given status line and body.
pub async fn serve_once(status: &'static str, body: &'static str) -> String {
    serve_once_after(status, body, Duration::ZERO).await
}

pub async fn serve_once_after(status: &'static str, body: &'static str, delay: Duration) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();

        // read the request head
        let mut request = Vec::new();
        let mut buffer = [0u8; 1024];
        while !request.windows(4).any(|x| x == b"\r\n\r\n") {
            let read = socket.read(&mut buffer).await.unwrap();
            if read == 0 {
                return;
            }
            request.extend_from_slice(&buffer[..read]);
        }

        sleep(delay).await;
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: text/plain; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        _ = socket.write_all(response.as_bytes()).await;
        _ = socket.shutdown().await;
    });

    format!("http://{}/tv", addr)
}
