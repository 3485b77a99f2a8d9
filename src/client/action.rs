//! Action and resource identity types for the onOffice API.
//!
//! Every request names an action (the verb), a resource type (the entity
//! category) and optionally a resource id. The wire values must match the
//! onOffice API exactly; actions are URNs, resource types are lowercase
//! identifiers.

use serde::{Serialize, Serializer};
use std::fmt;

/// An onOffice API action verb.
///
/// Serialized as the full onOffice action URN, e.g.
/// `urn:onoffice-de-ns:smart:2.5:smartml:action:read`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    /// Fetch a resource collection or relation data.
    Get,
    /// Read a single resource or a filtered listing.
    Read,
    /// Create a new resource.
    Create,
    /// Modify an existing resource.
    Modify,
    /// Delete a resource.
    Delete,
    /// Execute a resource-specific operation.
    Do,
}

impl Action {
    /// Returns the wire value of the action (the onOffice action URN).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "urn:onoffice-de-ns:smart:2.5:smartml:action:get",
            Self::Read => "urn:onoffice-de-ns:smart:2.5:smartml:action:read",
            Self::Create => "urn:onoffice-de-ns:smart:2.5:smartml:action:create",
            Self::Modify => "urn:onoffice-de-ns:smart:2.5:smartml:action:modify",
            Self::Delete => "urn:onoffice-de-ns:smart:2.5:smartml:action:delete",
            Self::Do => "urn:onoffice-de-ns:smart:2.5:smartml:action:do",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Action {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// The category of entity an action targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResourceType {
    /// An address (contact) record.
    Address,
    /// A real-estate listing.
    Estate,
    /// Field metadata for a resource type.
    Fields,
    /// A file attached to a resource.
    File,
    /// A relation-style lookup resolving ids through a relation type.
    IdsFromRelation,
    /// An onOffice user account.
    User,
}

impl ResourceType {
    /// Returns the wire value of the resource type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Address => "address",
            Self::Estate => "estate",
            Self::Fields => "fields",
            Self::File => "file",
            Self::IdsFromRelation => "idsfromrelation",
            Self::User => "user",
        }
    }

    /// Returns whether the resource type supports direct lookup by id.
    ///
    /// Relation-style resources resolve ids through their parameters and
    /// reject a direct `resourceid` lookup; callers can branch on this
    /// capability instead of hitting an
    /// [`UnsupportedOperationError`](crate::client::UnsupportedOperationError)
    /// at request time.
    #[must_use]
    pub const fn supports_lookup(self) -> bool {
        !matches!(self, Self::IdsFromRelation)
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ResourceType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// The id of the resource an action targets.
///
/// onOffice accepts either no id (transmitted as an empty string), a numeric
/// id, or a named id (used e.g. for file upload sub-resources).
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ResourceId {
    /// No resource id; serialized as `""`.
    #[default]
    None,
    /// A numeric resource id.
    Id(i64),
    /// A named resource id.
    Name(String),
}

impl From<i64> for ResourceId {
    fn from(id: i64) -> Self {
        Self::Id(id)
    }
}

impl From<&str> for ResourceId {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for ResourceId {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl Serialize for ResourceId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::None => serializer.serialize_str(""),
            Self::Id(id) => serializer.serialize_i64(*id),
            Self::Name(name) => serializer.serialize_str(name),
        }
    }
}
