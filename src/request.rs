use crate::config::JsonApiSettings;
use crate::error::ClientError;
use crate::model::document::Document;
use crate::model::resource::Resource;
use crate::parse::validate_resource;
use crate::Result;
use http::header::{CONTENT_LENGTH, CONTENT_TYPE};
use http::{Method, Request};
use url::Url;

/// Builds conformant outbound requests. Sending them is the transport's
/// business, not this crate's.
#[derive(Debug, Clone, Default)]
pub struct RequestBuilder {
    settings: JsonApiSettings,
}

impl RequestBuilder {
    pub fn new(settings: JsonApiSettings) -> Self { Self { settings } }

    /// `GET <base>/<type>s` when `id` is empty, `GET <base>/<type>s/<id>`
    /// otherwise.
    pub fn get(&self, base_url: &str, resource_type: &str, id: &str) -> Result<Request<Vec<u8>>> {
        let mut url = Url::parse(base_url)?;
        set_path(&mut url, resource_type, id);
        log::debug!("built GET {}", url);
        Ok(Request::builder().method(Method::GET).uri(url.as_str()).body(Vec::new())?)
    }

    /// Builds a PATCH, DELETE or POST request around `resource`. GET is
    /// refused here; it has no resource body and goes through [`get`].
    /// The resource is validated up front: PATCH and DELETE need both type
    /// and id, POST tolerates an empty id (the server will assign one).
    ///
    /// [`get`]: RequestBuilder::get
    pub fn build(
        &self, method: Method, base_url: &str, resource: Option<&Resource>,
    ) -> Result<Request<Vec<u8>>> {
        let mut url = Url::parse(base_url)?;

        let resource = match method.as_str() {
            "GET" => {
                return Err(ClientError::specification(
                    "use RequestBuilder::get for GET requests",
                ));
            },
            "PATCH" | "DELETE" | "POST" => resource.ok_or_else(|| {
                ClientError::specification(format!(
                    "an object must be present for HTTP method '{}'",
                    method
                ))
            })?,
            other => {
                return Err(ClientError::specification(format!(
                    "cannot use HTTP method '{}' for a resource request",
                    other
                )));
            },
        };

        validate_resource(resource, &method)?;
        set_path(&mut url, &resource.ty, &resource.id);

        // DELETE targets a resource but carries no payload
        let content = if method == Method::PATCH || method == Method::POST {
            serde_json::to_vec_pretty(&Document::single(resource.clone()))?
        } else {
            Vec::new()
        };

        log::debug!("built {} {} ({} byte body)", method, url, content.len());

        let mut builder = Request::builder().method(method).uri(url.as_str());
        if !content.is_empty() {
            builder = builder.header(CONTENT_TYPE, self.settings.media_type.as_str());
        }
        Ok(builder.header(CONTENT_LENGTH, content.len()).body(content)?)
    }
}

// ghetto pluralization, fix when it becomes an issue
fn set_path(url: &mut Url, resource_type: &str, id: &str) {
    let mut path = url.path().trim_end_matches('/').to_string();
    path.push('/');
    path.push_str(resource_type);
    path.push('s');
    if !id.is_empty() {
        path.push('/');
        path.push_str(id);
    }
    url.set_path(&path);
}
