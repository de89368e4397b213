//! Kind-tagged identifier newtypes for the two node kinds.
//!
//! Every identifier crossing an interface boundary is a canonical string of
//! the form `"<kind>:<uuid>"` (`folder:…` or `file:…`). Parsing one of these
//! types **is** the validation step: an empty string, a wrong kind tag, or a
//! malformed uuid is rejected with [`ErrorKind::InvalidArgument`] before any
//! store access. Using distinct types prevents passing a `FolderId` where a
//! `FileId` is expected. When the `sqlx` feature is enabled, each ID type
//! also implements `sqlx::Type`, `sqlx::Encode`, and `sqlx::Decode` for
//! PostgreSQL, binding the inner uuid.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;

use crate::error::{AppError, ErrorKind};

/// The kind tag carried by every node identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// A folder node.
    Folder,
    /// A file node.
    File,
}

impl NodeKind {
    /// The tag as stored in the `contains.child_kind` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Folder => "folder",
            Self::File => "file",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse the opaque portion of a tagged identifier, rejecting empty input,
/// a missing or wrong tag, and a malformed uuid.
fn parse_tagged(s: &str, tag: &str) -> Result<Uuid, AppError> {
    if s.is_empty() {
        return Err(AppError::invalid_argument("Identifier cannot be empty"));
    }
    let Some(rest) = s.strip_prefix(tag).and_then(|r| r.strip_prefix(':')) else {
        return Err(AppError::invalid_argument(format!(
            "Invalid identifier. Expected a {tag} identifier starting with '{tag}:', received: {s}"
        )));
    };
    Uuid::parse_str(rest).map_err(|e| {
        AppError::new(
            ErrorKind::InvalidArgument,
            format!("Invalid identifier '{s}': {e}"),
        )
    })
}

/// Macro to define a kind-tagged newtype ID wrapper around `Uuid`.
macro_rules! define_node_id {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:expr
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name(pub Uuid);

        impl $name {
            /// The node kind this identifier is permanently tagged with.
            pub const KIND: NodeKind = $kind;

            /// Create a new random identifier.
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Create an identifier from an existing UUID.
            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Return the inner UUID value.
            pub fn into_uuid(self) -> Uuid {
                self.0
            }

            /// Return a reference to the inner UUID.
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}:{}", Self::KIND, self.0)
            }
        }

        impl FromStr for $name {
            type Err = AppError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                parse_tagged(s, Self::KIND.as_str()).map(Self)
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl From<$name> for Uuid {
            fn from(id: $name) -> Uuid {
                id.0
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.collect_str(self)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let s = String::deserialize(deserializer)?;
                s.parse().map_err(serde::de::Error::custom)
            }
        }

        #[cfg(feature = "sqlx")]
        impl sqlx::Type<sqlx::Postgres> for $name {
            fn type_info() -> sqlx::postgres::PgTypeInfo {
                <Uuid as sqlx::Type<sqlx::Postgres>>::type_info()
            }
        }

        #[cfg(feature = "sqlx")]
        impl<'q> sqlx::Encode<'q, sqlx::Postgres> for $name {
            fn encode_by_ref(
                &self,
                buf: &mut <sqlx::Postgres as sqlx::Database>::ArgumentBuffer<'q>,
            ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
                <Uuid as sqlx::Encode<'q, sqlx::Postgres>>::encode_by_ref(&self.0, buf)
            }
        }

        #[cfg(feature = "sqlx")]
        impl<'r> sqlx::Decode<'r, sqlx::Postgres> for $name {
            fn decode(
                value: <sqlx::Postgres as sqlx::Database>::ValueRef<'r>,
            ) -> Result<Self, sqlx::error::BoxDynError> {
                <Uuid as sqlx::Decode<'r, sqlx::Postgres>>::decode(value).map(Self)
            }
        }
    };
}

define_node_id!(
    /// Unique identifier for a folder, canonically `"folder:<uuid>"`.
    FolderId,
    NodeKind::Folder
);

define_node_id!(
    /// Unique identifier for a file, canonically `"file:<uuid>"`.
    FileId,
    NodeKind::File
);

/// An identifier for a node of either kind.
///
/// This is the "any" role in operations such as rename and move, which
/// accept both folders and files. The kind tag from the canonical string
/// form is preserved, so downstream code dispatches on it with a `match`
/// instead of re-inspecting string prefixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeId {
    /// A folder identifier.
    Folder(FolderId),
    /// A file identifier.
    File(FileId),
}

impl NodeId {
    /// The kind this identifier is tagged with.
    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Folder(_) => NodeKind::Folder,
            Self::File(_) => NodeKind::File,
        }
    }

    /// Return the inner UUID value.
    pub fn into_uuid(self) -> Uuid {
        match self {
            Self::Folder(id) => id.0,
            Self::File(id) => id.0,
        }
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Folder(id) => id.fmt(f),
            Self::File(id) => id.fmt(f),
        }
    }
}

impl FromStr for NodeId {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(AppError::invalid_argument("Identifier cannot be empty"));
        }
        if s.starts_with("folder:") {
            s.parse().map(Self::Folder)
        } else if s.starts_with("file:") {
            s.parse().map(Self::File)
        } else {
            Err(AppError::invalid_argument(format!(
                "Invalid identifier format. Must start with 'folder:' or 'file:'. Received: {s}"
            )))
        }
    }
}

impl From<FolderId> for NodeId {
    fn from(id: FolderId) -> Self {
        Self::Folder(id)
    }
}

impl From<FileId> for NodeId {
    fn from(id: FileId) -> Self {
        Self::File(id)
    }
}

impl Serialize for NodeId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for NodeId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
