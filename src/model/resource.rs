use crate::model::relationship::{Relationship, Relationships};
use crate::model::Id;
use serde::de::DeserializeOwned;
use serde_json::Value;

pub type ResourceIdentifiers = Vec<ResourceIdentifier>;
pub type Resources = Vec<Resource>;

/// Resource Identifier
///
/// Fields missing on the wire decode as empty strings; the parser rejects
/// them with a pointed specification error rather than a decode failure.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Hash)]
pub struct ResourceIdentifier {
    #[serde(rename = "type")]
    #[serde(default)]
    pub ty: String,
    #[serde(default)]
    pub id: Id,
}

impl ResourceIdentifier {
    pub fn new(ty: impl Into<String>, id: impl Into<String>) -> Self {
        Self { ty: ty.into(), id: id.into() }
    }
}

/// Attribute payload kept as the raw wire value. The crate never interprets
/// it; callers decode it against their own types when they need to, which
/// keeps unknown fields intact across a round trip.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Attributes(Value);

impl Attributes {
    fn is_empty(&self) -> bool { self.0.is_null() }

    pub fn raw(&self) -> &Value { &self.0 }

    pub fn decode<T: DeserializeOwned>(&self) -> crate::Result<T> {
        Ok(serde_json::from_value(self.0.clone())?)
    }
}

impl From<Value> for Attributes {
    fn from(value: Value) -> Self { Self(value) }
}

/// JSON:API Resource
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Resource {
    #[serde(rename = "type")]
    #[serde(default)]
    pub ty: String,
    #[serde(default)]
    pub id: Id,
    #[serde(skip_serializing_if = "Attributes::is_empty")]
    #[serde(default)]
    pub attributes: Attributes,
    /// `None` omits the section entirely; `Some` with an empty map is an
    /// explicit empty `relationships` object.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub relationships: Option<Relationships>,
}

impl Resource {
    pub fn new(ty: impl Into<String>, id: impl Into<String>, attributes: Value) -> Self {
        Self { ty: ty.into(), id: id.into(), attributes: attributes.into(), relationships: None }
    }

    pub fn identifier(&self) -> ResourceIdentifier {
        ResourceIdentifier { ty: self.ty.clone(), id: self.id.clone() }
    }

    /// Adds a named relationship, creating the section on first use.
    pub fn relate(&mut self, name: impl Into<String>, relationship: Relationship) {
        self.relationships.get_or_insert_with(Default::default).insert(name.into(), relationship);
    }
}
