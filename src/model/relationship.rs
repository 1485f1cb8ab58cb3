use crate::model::resource::{ResourceIdentifier, ResourceIdentifiers};
use std::collections::HashMap;

pub type Relationships = HashMap<String, Relationship>;

/// Relationship with another object
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct Relationship {
    #[serde(default)]
    pub data: Linkage,
}

impl Relationship {
    pub fn to_one(identifier: ResourceIdentifier) -> Self {
        Self { data: Linkage::ToOne(Some(identifier)) }
    }

    pub fn empty_to_one() -> Self { Self { data: Linkage::ToOne(None) } }

    pub fn to_many(identifiers: ResourceIdentifiers) -> Self {
        Self { data: Linkage::ToMany(identifiers) }
    }
}

/// Linkage inside a relationship: one identifier rendered as a single object
/// (or `null`), or many rendered as an array. The shape is fixed when the
/// relationship is built, never inferred from how many identifiers it holds,
/// so a one-element to-many relationship stays an array on the wire.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
#[serde(untagged)]
pub enum Linkage {
    ToOne(Option<ResourceIdentifier>),
    ToMany(ResourceIdentifiers),
}

impl Linkage {
    /// Normalized view: zero or more identifiers regardless of wire shape.
    pub fn identifiers(&self) -> ResourceIdentifiers {
        match self {
            Linkage::ToOne(Some(data)) => vec![data.clone()],
            Linkage::ToOne(None) => Default::default(),
            Linkage::ToMany(data) => data.clone(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Linkage::ToOne(data) => data.is_none(),
            Linkage::ToMany(data) => data.is_empty(),
        }
    }
}

impl Default for Linkage {
    fn default() -> Self { Linkage::ToOne(None) }
}
