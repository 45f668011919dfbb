use std::{fs, path::Path};

use reqwest::{
    StatusCode,
    blocking::{Client, multipart},
};
use thiserror::Error;
use tracing::{info, warn};

use super::payload::SubmissionPayload;

/// Where the sheet is exchanged for a generated workbook unless overridden.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8080/upload";

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("no CSV file selected")]
    MissingFile,
    #[error("failed to read CSV file '{path}': {source}")]
    FileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to encode form data: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("upload request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("server rejected the sheet (HTTP {0})")]
    Status(StatusCode),
}

/// One-shot multipart uploader. `formData` carries the JSON-encoded field
/// mapping, `csvFile` the raw attachment; the response body is the
/// generated workbook.
#[derive(Debug, Clone)]
pub struct UploadClient {
    endpoint: String,
    http: Client,
}

impl UploadClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            http: Client::new(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Blocks until the exchange completes; the event loop has no other
    /// work to interleave while a submission is in flight.
    pub fn upload(
        &self,
        payload: &SubmissionPayload,
        csv_path: &Path,
    ) -> Result<Vec<u8>, SubmitError> {
        if csv_path.as_os_str().is_empty() {
            return Err(SubmitError::MissingFile);
        }
        let csv_bytes = fs::read(csv_path).map_err(|source| SubmitError::FileRead {
            path: csv_path.display().to_string(),
            source,
        })?;
        let file_name = csv_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload.csv".to_string());

        let form = multipart::Form::new()
            .text("formData", payload.to_json()?)
            .part(
                "csvFile",
                multipart::Part::bytes(csv_bytes).file_name(file_name),
            );

        info!(endpoint = %self.endpoint, fields = payload.len(), "submitting sheet");
        let response = self.http.post(&self.endpoint).multipart(form).send()?;
        let status = response.status();
        if !status.is_success() {
            warn!(%status, "upload rejected");
            return Err(SubmitError::Status(status));
        }
        let document = response.bytes()?.to_vec();
        info!(bytes = document.len(), "workbook received");
        Ok(document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{domain, form::FormState};
    use std::{
        io::{Read, Write},
        net::TcpListener,
        thread,
    };

    fn empty_payload() -> SubmissionPayload {
        SubmissionPayload::collect(&FormState::from_catalog(&domain::standard_catalog()), &[])
    }

    /// Answers exactly one HTTP request with the given status and body.
    fn one_shot_server(status_line: &'static str, body: &'static [u8]) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
        let addr = listener.local_addr().expect("addr");
        thread::spawn(move || {
            let (mut stream, _) = listener.accept().expect("accept");
            drain_request(&mut stream);
            let response = format!(
                "HTTP/1.1 {status_line}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                body.len()
            );
            stream.write_all(response.as_bytes()).expect("write head");
            stream.write_all(body).expect("write body");
        });
        format!("http://{addr}/upload")
    }

    /// Reads the whole request (headers plus Content-Length body) so the
    /// client never sees a reset while still writing.
    fn drain_request(stream: &mut std::net::TcpStream) {
        let mut data = Vec::new();
        let mut buf = [0u8; 8192];
        let header_end = loop {
            let n = stream.read(&mut buf).expect("read request");
            if n == 0 {
                return;
            }
            data.extend_from_slice(&buf[..n]);
            if let Some(pos) = data.windows(4).position(|w| w == b"\r\n\r\n") {
                break pos + 4;
            }
        };
        let headers = String::from_utf8_lossy(&data[..header_end]).to_ascii_lowercase();
        let content_length = headers
            .lines()
            .find_map(|line| line.strip_prefix("content-length:"))
            .and_then(|value| value.trim().parse::<usize>().ok())
            .unwrap_or(0);
        while data.len() < header_end + content_length {
            let n = stream.read(&mut buf).expect("read body");
            if n == 0 {
                return;
            }
            data.extend_from_slice(&buf[..n]);
        }
    }

    #[test]
    fn empty_path_is_missing_file_before_any_network() {
        let client = UploadClient::new("http://127.0.0.1:1/upload");
        let err = client.upload(&empty_payload(), Path::new("")).unwrap_err();
        assert!(matches!(err, SubmitError::MissingFile));
    }

    #[test]
    fn unreadable_file_is_reported_with_its_path() {
        let client = UploadClient::new("http://127.0.0.1:1/upload");
        let err = client
            .upload(&empty_payload(), Path::new("/no/such/faults.csv"))
            .unwrap_err();
        match err {
            SubmitError::FileRead { path, .. } => assert_eq!(path, "/no/such/faults.csv"),
            other => panic!("expected FileRead, got {other:?}"),
        }
    }

    #[test]
    fn successful_exchange_returns_the_document() {
        let dir = std::env::temp_dir();
        let csv = dir.join("linesheet_client_ok.csv");
        fs::write(&csv, "bus,mag,ang\n1,12.3,45\n").expect("write csv");

        let endpoint = one_shot_server("200 OK", b"workbook-bytes");
        let client = UploadClient::new(endpoint);
        let document = client.upload(&empty_payload(), &csv).expect("upload");
        assert_eq!(document, b"workbook-bytes");
        let _ = fs::remove_file(&csv);
    }

    #[test]
    fn non_success_status_is_an_error() {
        let dir = std::env::temp_dir();
        let csv = dir.join("linesheet_client_500.csv");
        fs::write(&csv, "bus,mag,ang\n").expect("write csv");

        let endpoint = one_shot_server("500 Internal Server Error", b"boom");
        let client = UploadClient::new(endpoint);
        let err = client.upload(&empty_payload(), &csv).unwrap_err();
        assert!(matches!(
            err,
            SubmitError::Status(StatusCode::INTERNAL_SERVER_ERROR)
        ));
        let _ = fs::remove_file(&csv);
    }
}
