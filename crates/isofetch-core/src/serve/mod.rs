//! Static file server for the `web` directory.

mod mime;

pub use mime::content_type;

use anyhow::{anyhow, Context, Result};
use std::fs::File;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use tiny_http::{Header, Method, Request, Response, Server};

/// Maps a request target onto a file below `root`.
///
/// Query and fragment are dropped, segments are percent-decoded, and any
/// `..` segment refuses the request. Returns `None` for refused targets.
pub fn resolve_path(root: &Path, target: &str) -> Option<PathBuf> {
    let path = target.split(['?', '#']).next().unwrap_or("");
    let mut out = root.to_path_buf();
    for raw in path.split('/') {
        let seg = urlencoding::decode(raw).ok()?;
        match seg.as_ref() {
            "" | "." => continue,
            ".." => return None,
            s if s.contains(['/', '\\', '\0']) => return None,
            s => out.push(s),
        }
    }
    Some(out)
}

pub struct StaticServer {
    server: Server,
    root: PathBuf,
}

impl StaticServer {
    /// Binds `addr` (e.g. `0.0.0.0:8081`); port 0 picks a free port.
    pub fn bind(addr: &str, root: impl Into<PathBuf>) -> Result<Self> {
        let server = Server::http(addr).map_err(|e| anyhow!("bind {}: {}", addr, e))?;
        Ok(Self {
            server,
            root: root.into(),
        })
    }

    pub fn local_addr(&self) -> Result<SocketAddr> {
        self.server
            .server_addr()
            .to_ip()
            .context("server is not bound to an IP address")
    }

    /// Serves requests one at a time until the process exits.
    pub fn serve_forever(&self) {
        for request in self.server.incoming_requests() {
            self.handle(request);
        }
    }

    fn handle(&self, request: Request) {
        if !matches!(request.method(), Method::Get | Method::Head) {
            let _ = request.respond(Response::from_string("Method Not Allowed").with_status_code(405));
            return;
        }

        let Some(mut path) = resolve_path(&self.root, request.url()) else {
            tracing::debug!(url = %request.url(), "refused path");
            let _ = request.respond(Response::from_string("Forbidden").with_status_code(403));
            return;
        };
        if path.is_dir() {
            path.push("index.html");
        }

        match File::open(&path) {
            Ok(file) if path.is_file() => {
                let mut response = Response::from_file(file);
                if let Ok(h) = Header::from_bytes(&b"Content-Type"[..], content_type(&path).as_bytes()) {
                    response = response.with_header(h);
                }
                tracing::debug!(url = %request.url(), "200 {}", path.display());
                let _ = request.respond(response);
            }
            _ => {
                tracing::debug!(url = %request.url(), "404");
                let _ = request.respond(Response::from_string("Not Found").with_status_code(404));
            }
        }
    }
}
