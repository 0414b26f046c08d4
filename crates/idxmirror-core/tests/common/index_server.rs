//! Minimal HTTP/1.1 server that serves a fixed directory-index tree for integration tests.
//!
//! Every request is recorded (method and raw path) so tests can assert which
//! URLs were fetched and in what order. Unknown paths answer 404.

#![allow(dead_code)]

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::thread;

#[derive(Debug, Clone)]
pub enum Route {
    /// 200 with an HTML listing built from (href, text) pairs.
    Listing(Vec<(String, String)>),
    /// 200 with raw bytes.
    Bytes(Vec<u8>),
    /// 301 to another path.
    Redirect(String),
    /// Bare status line with empty body.
    Status(u16),
}

#[derive(Default)]
pub struct TreeBuilder {
    routes: HashMap<String, Route>,
}

impl TreeBuilder {
    /// Directory listing whose anchor texts equal their hrefs, plus a parent link.
    pub fn dir(mut self, path: &str, hrefs: &[&str]) -> Self {
        let mut entries = vec![("/".to_string(), "Parent Directory".to_string())];
        entries.extend(hrefs.iter().map(|h| (h.to_string(), h.to_string())));
        self.routes.insert(path.to_string(), Route::Listing(entries));
        self
    }

    pub fn file(mut self, path: &str, body: &[u8]) -> Self {
        self.routes.insert(path.to_string(), Route::Bytes(body.to_vec()));
        self
    }

    pub fn route(mut self, path: &str, route: Route) -> Self {
        self.routes.insert(path.to_string(), route);
        self
    }

    pub fn start(self) -> IndexServer {
        IndexServer::start(self.routes)
    }
}

pub struct IndexServer {
    base: String,
    log: Arc<Mutex<Vec<String>>>,
}

impl IndexServer {
    fn start(routes: HashMap<String, Route>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
        let port = listener.local_addr().unwrap().port();
        let routes = Arc::new(routes);
        let log = Arc::new(Mutex::new(Vec::new()));
        let log_srv = Arc::clone(&log);
        thread::spawn(move || {
            for stream in listener.incoming().flatten() {
                let routes = Arc::clone(&routes);
                let log = Arc::clone(&log_srv);
                thread::spawn(move || handle(stream, &routes, &log));
            }
        });
        Self {
            base: format!("http://127.0.0.1:{}", port),
            log,
        }
    }

    /// Absolute URL for a server path (e.g. `/pub/`).
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    /// Paths requested so far, in arrival order.
    pub fn requests(&self) -> Vec<String> {
        self.log.lock().unwrap().clone()
    }

    pub fn clear_requests(&self) {
        self.log.lock().unwrap().clear();
    }
}

pub fn render_listing(entries: &[(String, String)]) -> String {
    let mut html = String::from(
        "<!DOCTYPE HTML PUBLIC \"-//W3C//DTD HTML 3.2 Final//EN\">\n<html><head><title>Index</title></head><body>\n<table>\n\
         <tr><th><a href=\"?C=N;O=D\">Name</a></th><th><a href=\"?C=M;O=A\">Last modified</a></th></tr>\n",
    );
    for (href, text) in entries {
        html.push_str(&format!(
            "<tr><td valign=\"top\">&nbsp;</td><td><a href=\"{}\">{}</a></td><td align=\"right\">2020-01-01 00:00</td></tr>\n",
            href, text
        ));
    }
    html.push_str("</table>\n</body></html>\n");
    html
}

fn handle(mut stream: std::net::TcpStream, routes: &HashMap<String, Route>, log: &Mutex<Vec<String>>) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) => return,
        Ok(n) => n,
        Err(_) => return,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s,
        Err(_) => return,
    };
    let mut parts = request.lines().next().unwrap_or("").split_whitespace();
    let method = parts.next().unwrap_or("");
    let path = parts.next().unwrap_or("").to_string();
    if !method.eq_ignore_ascii_case("GET") {
        let _ = stream.write_all(b"HTTP/1.1 405 Method Not Allowed\r\nContent-Length: 0\r\nConnection: close\r\n\r\n");
        return;
    }
    log.lock().unwrap().push(path.clone());

    let (status, extra, body): (&str, String, Vec<u8>) = match routes.get(&path) {
        Some(Route::Listing(entries)) => (
            "200 OK",
            "Content-Type: text/html;charset=UTF-8\r\n".to_string(),
            render_listing(entries).into_bytes(),
        ),
        Some(Route::Bytes(bytes)) => (
            "200 OK",
            "Content-Type: application/octet-stream\r\n".to_string(),
            bytes.clone(),
        ),
        Some(Route::Redirect(to)) => ("301 Moved Permanently", format!("Location: {}\r\n", to), Vec::new()),
        Some(Route::Status(code)) => {
            let line = format!("{} Status", code);
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
                line
            );
            let _ = stream.write_all(response.as_bytes());
            return;
        }
        None => ("404 Not Found", String::new(), b"not found".to_vec()),
    };
    let response = format!(
        "HTTP/1.1 {}\r\nContent-Length: {}\r\n{}Connection: close\r\n\r\n",
        status,
        body.len(),
        extra
    );
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.write_all(&body);
}
