use ureq::Error::Status;

use super::{FileDownloader, Response};

use std::io::Read;

/// Blocking GET with ureq's defaults: no timeout, no retry.
pub struct UReqFetcher;

impl FileDownloader for UReqFetcher {
    fn fetch(&self, url: &str) -> Response {
        let request = ureq::request("GET", url);

        let response = match request.call() {
            Ok(response) => response,

            // Error statuses still carry a body that has to land on disk.
            Err(Status(_, response)) => response,

            Err(err) => return Response::network_error(err.to_string()),
        };

        let status = response.status();

        let mut body = Vec::new();

        if let Err(err) = response.into_reader().read_to_end(&mut body) {
            return Response::invalid_body(err.to_string());
        }

        Response::body(status, body)
    }
}

impl UReqFetcher {
    pub fn new() -> Self {
        UReqFetcher
    }
}

impl Default for UReqFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    use super::{FileDownloader, Response, UReqFetcher};

    /// Answers exactly one request with the given status line and body.
    fn serve_once(status_line: &'static str, body: &'static [u8]) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let address = listener.local_addr().unwrap();

        thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();

            let mut request = [0u8; 1024];
            let _ = stream.read(&mut request);

            let head = format!(
                "HTTP/1.1 {}\r\nContent-Type: image/jpeg\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                status_line,
                body.len()
            );

            stream.write_all(head.as_bytes()).unwrap();
            stream.write_all(body).unwrap();
        });

        format!("http://{}/api/portraits/men/0.jpg", address)
    }

    #[test]
    fn test_fetch_ok() {
        let url = serve_once("200 OK", b"jpeg bytes");

        let response = UReqFetcher::new().fetch(&url);

        assert_eq!(response, Response::body(200, b"jpeg bytes".to_vec()));
    }

    #[test]
    fn test_fetch_not_found_keeps_body() {
        let url = serve_once("404 Not Found", b"not found");

        let response = UReqFetcher::new().fetch(&url);

        assert_eq!(response, Response::body(404, b"not found".to_vec()));
    }

    #[test]
    fn test_fetch_connection_refused() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let address = listener.local_addr().unwrap();
        drop(listener);

        let response = UReqFetcher::new().fetch(&format!("http://{}/x.jpg", address));

        assert!(matches!(response, Response::NetworkError(_)));
    }
}
