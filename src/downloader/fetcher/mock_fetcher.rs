use std::cell::RefCell;

use super::{FileDownloader, Response};

/// Replays canned responses in order and records every requested url.
pub struct MockFetcher {
    responses: RefCell<Vec<Response>>,
    requested: RefCell<Vec<String>>,
}

impl FileDownloader for MockFetcher {
    fn fetch(&self, url: &str) -> Response {
        self.requested.borrow_mut().push(url.to_string());

        let mut responses = self.responses.borrow_mut();

        if responses.is_empty() {
            Response::network_error("connection refused")
        } else {
            responses.remove(0)
        }
    }
}

impl MockFetcher {
    pub fn new(responses: Vec<Response>) -> Self {
        Self {
            responses: RefCell::new(responses),
            requested: RefCell::new(Vec::new()),
        }
    }

    /// Same body with status 200 for `count` requests.
    pub fn repeating(body: &[u8], count: usize) -> Self {
        Self::new((0..count).map(|_| Response::ok(body.to_vec())).collect())
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.borrow().clone()
    }
}
