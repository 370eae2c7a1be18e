//! Static file server for the StellarCard web app
//!
//! Serves the Trunk build from dist/. Client-side routes fall back to
//! index.html so deep links like /dashboard-smart-contract-hub load the app.

use std::env;
use std::fs;
use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::path::{Component, Path, PathBuf};

const DEFAULT_ADDR: &str = "127.0.0.1:8080";
const DIST_DIR: &str = "dist";

fn main() {
    let addr = env::var("CARD_SERVER_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());
    let listener = match TcpListener::bind(&addr) {
        Ok(listener) => listener,
        Err(e) => {
            eprintln!("Failed to bind to {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    println!("StellarCard server running at http://{}", addr);
    println!("Serving from {}/ directory", DIST_DIR);
    println!("Press Ctrl+C to stop\n");

    let root = Path::new(DIST_DIR);
    for stream in listener.incoming() {
        match stream {
            Ok(stream) => handle_client(stream, root),
            Err(e) => eprintln!("Connection error: {}", e),
        }
    }
}

/// Map a request target to a file under `root`.
///
/// Query strings and fragments are ignored. Paths that escape `root`, name a
/// directory or do not exist resolve to `index.html`.
fn resolve_path(root: &Path, target: &str) -> PathBuf {
    let index = root.join("index.html");
    let path = target.split(['?', '#']).next().unwrap_or_default();
    let relative = Path::new(path.trim_start_matches('/'));

    if relative.as_os_str().is_empty()
        || relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_)))
    {
        return index;
    }

    let candidate = root.join(relative);
    if candidate.is_file() {
        candidate
    } else {
        index
    }
}

fn content_type(path: &Path) -> &'static str {
    match path.extension().and_then(|s| s.to_str()) {
        Some("html") => "text/html; charset=utf-8",
        Some("css") => "text/css",
        Some("js") => "application/javascript",
        Some("wasm") => "application/wasm",
        Some("json") => "application/json",
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("ico") => "image/x-icon",
        _ => "application/octet-stream",
    }
}

fn handle_client(mut stream: TcpStream, root: &Path) {
    let buf_reader = BufReader::new(&mut stream);
    let request_line = match buf_reader.lines().next() {
        Some(Ok(line)) => line,
        _ => {
            eprintln!("Failed to read request line");
            return;
        }
    };

    let target = request_line.split_whitespace().nth(1).unwrap_or("/");
    let file_path = resolve_path(root, target);

    let response = match fs::read(&file_path) {
        Ok(contents) => {
            let mut head = format!(
                "HTTP/1.1 200 OK\r\nContent-Type: {}\r\nContent-Length: {}\r\n\r\n",
                content_type(&file_path),
                contents.len()
            )
            .into_bytes();
            head.extend(contents);
            head
        }
        Err(e) => {
            eprintln!("Cannot read {}: {}", file_path.display(), e);
            let body = b"<!DOCTYPE html><html><body><h1>Error: Index not found</h1></body></html>";
            let mut head = format!(
                "HTTP/1.1 404 NOT FOUND\r\nContent-Type: text/html\r\nContent-Length: {}\r\n\r\n",
                body.len()
            )
            .into_bytes();
            head.extend_from_slice(body);
            head
        }
    };

    if let Err(e) = stream.write_all(&response) {
        eprintln!("Failed to write response: {}", e);
        return;
    }
    let _ = stream.flush();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dist_fixture(name: &str) -> PathBuf {
        let root = env::temp_dir().join(format!("card-server-{}-{}", name, std::process::id()));
        fs::create_dir_all(root.join("assets")).unwrap();
        fs::write(root.join("index.html"), "<html></html>").unwrap();
        fs::write(root.join("card-web.wasm"), [0u8, 97, 115, 109]).unwrap();
        root
    }

    #[test]
    fn test_existing_file_is_served() {
        let root = dist_fixture("file");
        assert_eq!(resolve_path(&root, "/card-web.wasm"), root.join("card-web.wasm"));
    }

    #[test]
    fn test_client_routes_fall_back_to_index() {
        let root = dist_fixture("spa");
        for target in [
            "/",
            "/dashboard-smart-contract-hub",
            "/wallet-connection-authentication?wallet=freighter",
            "/assets",
        ] {
            assert_eq!(resolve_path(&root, target), root.join("index.html"), "{}", target);
        }
    }

    #[test]
    fn test_parent_segments_never_escape_root() {
        let root = dist_fixture("escape");
        assert_eq!(resolve_path(&root, "/../Cargo.toml"), root.join("index.html"));
    }

    #[test]
    fn test_content_types() {
        assert_eq!(content_type(Path::new("app.wasm")), "application/wasm");
        assert_eq!(content_type(Path::new("index.html")), "text/html; charset=utf-8");
        assert_eq!(content_type(Path::new("LICENSE")), "application/octet-stream");
    }
}
