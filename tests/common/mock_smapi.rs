//! In-process mock of the skill-management API
//!
//! Serves the three calls the upgrade makes: start export, poll status,
//! download archive. Runs on an ephemeral port in a detached thread.

use std::io::{Cursor, Write};
use std::thread;

use tiny_http::{Header, Response, Server};

/// Spawn a mock that exports successfully.
///
/// `in_progress_polls` status checks answer `IN_PROGRESS` before the export
/// flips to `SUCCEEDED`. Returns the base URL to point the client at.
pub fn spawn(zip_bytes: Vec<u8>, in_progress_polls: u32) -> String {
    let server = Server::http("127.0.0.1:0").unwrap();
    let addr = server.server_addr().to_ip().unwrap();
    let base = format!("http://{addr}");
    let download_url = format!("{base}/downloads/skill-package.zip");

    thread::spawn(move || {
        let mut polls_left = in_progress_polls;
        for request in server.incoming_requests() {
            let url = request.url().to_string();
            if url.contains("/exports") && !url.contains("/v1/exports/") {
                let response = Response::from_string("")
                    .with_status_code(202)
                    .with_header(location_header("/v1/exports/export-1"));
                let _ = request.respond(response);
            } else if url.starts_with("/v1/exports/") {
                let body = if polls_left > 0 {
                    polls_left -= 1;
                    r#"{"status":"IN_PROGRESS"}"#.to_string()
                } else {
                    format!(r#"{{"status":"SUCCEEDED","skill":{{"location":"{download_url}"}}}}"#)
                };
                let _ = request.respond(json_response(&body));
            } else if url.starts_with("/downloads/") {
                let _ = request.respond(Response::from_data(zip_bytes.clone()));
            } else {
                let _ = request.respond(Response::from_string("not found").with_status_code(404));
            }
        }
    });

    base
}

/// Spawn a mock whose exports always end in a `FAILED` status
pub fn spawn_failed_export() -> String {
    let server = Server::http("127.0.0.1:0").unwrap();
    let addr = server.server_addr().to_ip().unwrap();
    let base = format!("http://{addr}");

    thread::spawn(move || {
        for request in server.incoming_requests() {
            let url = request.url().to_string();
            if url.contains("/exports") && !url.contains("/v1/exports/") {
                let response = Response::from_string("")
                    .with_status_code(202)
                    .with_header(location_header("/v1/exports/export-1"));
                let _ = request.respond(response);
            } else {
                let _ = request.respond(json_response(r#"{"status":"FAILED"}"#));
            }
        }
    });

    base
}

/// Spawn a mock that answers every request with the given status code
pub fn spawn_failing(status_code: u16) -> String {
    let server = Server::http("127.0.0.1:0").unwrap();
    let addr = server.server_addr().to_ip().unwrap();
    let base = format!("http://{addr}");

    thread::spawn(move || {
        for request in server.incoming_requests() {
            let _ =
                request.respond(Response::from_string("denied").with_status_code(status_code));
        }
    });

    base
}

/// Build a small skill package archive in memory
pub fn sample_zip() -> Vec<u8> {
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    let options = zip::write::SimpleFileOptions::default();

    writer.start_file("manifest.json", options).unwrap();
    writer.write_all(b"{\"manifest\":{\"apis\":{}}}").unwrap();

    writer.add_directory("interactionModels", options).unwrap();
    writer.start_file("interactionModels/en-US.json", options).unwrap();
    writer.write_all(b"{\"interactionModel\":{}}").unwrap();

    writer.finish().unwrap().into_inner()
}

/// Build an archive with one entry that tries to climb out of the target dir
pub fn traversal_zip() -> Vec<u8> {
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    let options = zip::write::SimpleFileOptions::default();

    writer.start_file("manifest.json", options).unwrap();
    writer.write_all(b"{\"manifest\":{}}").unwrap();

    writer.start_file("../escape.txt", options).unwrap();
    writer.write_all(b"should never land on disk").unwrap();

    writer.finish().unwrap().into_inner()
}

fn json_response(body: &str) -> Response<Cursor<Vec<u8>>> {
    Response::from_string(body).with_header(
        Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..]).unwrap(),
    )
}

fn location_header(location: &str) -> Header {
    Header::from_bytes(&b"Location"[..], location.as_bytes()).unwrap()
}
