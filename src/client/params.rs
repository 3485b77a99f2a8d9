//! Reserved parameter keys of the onOffice API.
//!
//! These keys carry special meaning inside an action's `parameters` object.

/// Extended API claim injected by the client when configured.
pub const EXTENDED_CLAIM: &str = "extendedclaim";

/// Payload data for create/modify actions.
pub const DATA: &str = "data";

/// Page size of a listing request.
pub const LIST_LIMIT: &str = "listlimit";

/// Offset of a listing request.
pub const LIST_OFFSET: &str = "listoffset";

/// Filter definition of a listing request.
pub const FILTER: &str = "filter";

/// Sort definition of a listing request.
pub const SORT_BY: &str = "sortby";

/// Relation type of an `idsfromrelation` request.
pub const RELATION_TYPE: &str = "relationtype";

/// Parent ids of an `idsfromrelation` request.
pub const PARENT_IDS: &str = "parentids";

/// Child ids of an `idsfromrelation` request.
pub const CHILD_IDS: &str = "childids";
