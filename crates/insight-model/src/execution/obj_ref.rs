use serde::{Deserialize, Serialize};
use std::fmt;

/// Reference to a metadata object (attribute display form, data set, measure, ...).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ObjRef {
    Identifier { identifier: String },
    Uri { uri: String },
    /// Reference to another object of the same execution, by its `localIdentifier`.
    LocalId {
        #[serde(rename = "localIdentifier")]
        local_identifier: String,
    },
}

impl ObjRef {
    pub fn identifier(identifier: impl Into<String>) -> Self {
        ObjRef::Identifier {
            identifier: identifier.into(),
        }
    }

    pub fn uri(uri: impl Into<String>) -> Self {
        ObjRef::Uri { uri: uri.into() }
    }

    pub fn local_id(local_identifier: impl Into<String>) -> Self {
        ObjRef::LocalId {
            local_identifier: local_identifier.into(),
        }
    }

    pub fn is_local(&self) -> bool {
        matches!(self, ObjRef::LocalId { .. })
    }
}

impl fmt::Display for ObjRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ObjRef::Identifier { identifier } => write!(f, "identifier:{identifier}"),
            ObjRef::Uri { uri } => write!(f, "uri:{uri}"),
            ObjRef::LocalId { local_identifier } => write!(f, "local:{local_identifier}"),
        }
    }
}
