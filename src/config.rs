use crate::JSON_API_HEADER;

/// Wire-level settings shared by the parser and the request builder.
///
/// Carried explicitly instead of living in a process-wide constant, so two
/// clients talking to differently configured servers never share state.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct JsonApiSettings {
    pub media_type: String,
}

impl Default for JsonApiSettings {
    fn default() -> Self { Self { media_type: JSON_API_HEADER.to_string() } }
}
