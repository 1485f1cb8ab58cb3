use crate::model::resource::{Resource, Resources};

/// Primary data: a single resource or an ordered list, never both. Decoding
/// is untagged; which branch a caller accepts is up to the caller, since
/// only the endpoint knows whether `data` should be an object or an array.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum PrimaryData {
    Single(Box<Resource>),
    Multiple(Resources),
}

/// Top-level document envelope. Wire-only: built right before a request body
/// is serialized and discarded right after a response body is decoded.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Document {
    #[serde(default)]
    pub data: Option<PrimaryData>,
}

impl Document {
    pub fn single(resource: Resource) -> Self {
        Self { data: Some(PrimaryData::Single(Box::new(resource))) }
    }

    pub fn multiple(resources: Resources) -> Self {
        Self { data: Some(PrimaryData::Multiple(resources)) }
    }

    pub fn into_single(self) -> Result<Resource, Self> {
        if let Some(PrimaryData::Single(resource)) = self.data {
            Ok(*resource)
        } else {
            Err(self)
        }
    }

    pub fn into_multiple(self) -> Result<Resources, Self> {
        if let Some(PrimaryData::Multiple(resources)) = self.data {
            Ok(resources)
        } else {
            Err(self)
        }
    }
}
