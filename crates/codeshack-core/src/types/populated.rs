//! References that the backend returns either as ids or as embedded documents

use serde::{Deserialize, Serialize};

/// A reference to another document
///
/// List endpoints usually return bare ids while detail endpoints populate the
/// referenced documents; both shapes deserialize into this type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Populated<T> {
    /// Bare document id
    Id(String),
    /// Embedded document
    Document(T),
}

/// Documents that carry their own id
pub trait HasId {
    fn id(&self) -> &str;
}

impl<T: HasId> Populated<T> {
    /// Id of the referenced document in either shape
    pub fn id(&self) -> &str {
        match self {
            Populated::Id(id) => id,
            Populated::Document(doc) => doc.id(),
        }
    }

    /// The embedded document, if populated
    pub fn document(&self) -> Option<&T> {
        match self {
            Populated::Id(_) => None,
            Populated::Document(doc) => Some(doc),
        }
    }
}

/// Populated documents in a list, skipping bare ids
pub fn documents<T: HasId>(refs: &[Populated<T>]) -> impl Iterator<Item = &T> {
    refs.iter().filter_map(Populated::document)
}
