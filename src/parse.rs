use crate::config::JsonApiSettings;
use crate::error::ClientError;
use crate::model::document::Document;
use crate::model::relationship::Relationship;
use crate::model::resource::{Resource, ResourceIdentifier, Resources};
use crate::Result;
use http::header::CONTENT_TYPE;
use http::{HeaderMap, Method};
use std::io::Read;

/// Decodes and validates inbound resource documents.
///
/// Stateless apart from its settings; one instance can be shared freely
/// across threads.
#[derive(Debug, Clone, Default)]
pub struct Parser {
    settings: JsonApiSettings,
}

impl Parser {
    pub fn new(settings: JsonApiSettings) -> Self { Self { settings } }

    /// Content negotiation: the media type must match exactly. A parameter
    /// suffix (`; charset=UTF-8`) is tolerated for Firefox < v43, which
    /// appends one in violation of the JSON:API negotiation rules. Nothing
    /// else is accepted.
    pub fn validate_headers(&self, headers: &HeaderMap) -> Result<()> {
        let expected = &self.settings.media_type;
        let found = headers.get(CONTENT_TYPE).and_then(|value| value.to_str().ok());
        match found {
            Some(value) if value == expected => Ok(()),
            Some(value) if value.starts_with(&format!("{};", expected)) => Ok(()),
            _ => Err(ClientError::NotAcceptable {
                expected: expected.clone(),
                found: found.map(ToString::to_string),
            }),
        }
    }

    /// Decodes a single-resource document. `method` is the verb of the
    /// originating request: POST is the one case where an empty `id` is
    /// legal, meaning the server will assign one.
    pub fn parse_single<R: Read>(
        &self, method: &Method, headers: &HeaderMap, body: R,
    ) -> Result<Resource> {
        self.validate_headers(headers)?;
        let resource = decode_document(body)?
            .into_single()
            .map_err(|_| ClientError::input("expected a single resource under `data`", "/data"))?;
        validate_resource(&resource, method)?;
        Ok(resource)
    }

    /// Decodes a list document. Every element is validated independently;
    /// the first invalid element fails the whole parse with its own error,
    /// and no partial list is returned.
    pub fn parse_many<R: Read>(
        &self, method: &Method, headers: &HeaderMap, body: R,
    ) -> Result<Resources> {
        self.validate_headers(headers)?;
        let resources = decode_document(body)?
            .into_multiple()
            .map_err(|_| ClientError::input("expected a list of resources under `data`", "/data"))?;
        for resource in &resources {
            validate_resource(resource, method)?;
        }
        Ok(resources)
    }
}

/// Drains the body stream to EOF before decoding, so a pooled transport
/// always gets its connection back, then decodes the envelope.
fn decode_document<R: Read>(mut body: R) -> Result<Document> {
    let mut buf = Vec::new();
    body.read_to_end(&mut buf)?;
    log::trace!("decoding a {} byte document", buf.len());
    Ok(serde_json::from_slice(&buf)?)
}

/// Structural rules for a decoded resource. Shared with the request builder,
/// which refuses to serialize a resource the parser would reject.
pub fn validate_resource(resource: &Resource, method: &Method) -> Result<()> {
    if resource.ty.is_empty() {
        return Err(ClientError::input(
            "resource `type` is missing or empty",
            "/data/attributes/type",
        ));
    }
    if resource.id.is_empty() && *method != Method::POST {
        return Err(ClientError::input(
            "resource `id` is missing or empty",
            "/data/attributes/id",
        ));
    }
    if let Some(relationships) = &resource.relationships {
        for (name, relationship) in relationships {
            validate_relationship(name, relationship)?;
        }
    }
    Ok(())
}

fn validate_relationship(name: &str, relationship: &Relationship) -> Result<()> {
    for identifier in relationship.data.identifiers() {
        validate_identifier(&identifier, &format!("/data/relationships/{}", name))?;
    }
    Ok(())
}

fn validate_identifier(identifier: &ResourceIdentifier, scope: &str) -> Result<()> {
    if identifier.ty.is_empty() {
        return Err(ClientError::input(
            "resource identifier `type` is missing or empty",
            format!("{}/type", scope),
        ));
    }
    if identifier.id.is_empty() {
        return Err(ClientError::input(
            "resource identifier `id` is missing or empty",
            format!("{}/id", scope),
        ));
    }
    Ok(())
}
