use crate::model::resource::{Resource, Resources};
use crate::parse::Parser;
use crate::Result;
use http::{HeaderMap, Method, StatusCode};
use std::io::Read;

/// A received response: status and headers from the transport plus the
/// still-unread body stream, tagged with the verb of the request it answers
/// so the parser can apply the right id rules.
#[derive(Debug)]
pub struct Response<B> {
    pub status: StatusCode,
    pub headers: HeaderMap,
    method: Method,
    body: B,
}

impl<B: Read> Response<B> {
    pub fn new(method: Method, status: StatusCode, headers: HeaderMap, body: B) -> Self {
        Self { status, headers, method, body }
    }

    /// Parses the body as a single-resource document.
    pub fn get_object(self, parser: &Parser) -> Result<Resource> {
        parser.parse_single(&self.method, &self.headers, self.body)
    }

    /// Parses the body as a list document.
    pub fn get_list(self, parser: &Parser) -> Result<Resources> {
        parser.parse_many(&self.method, &self.headers, self.body)
    }
}
