//! Well-known permission names.
//!
//! These must match the permissions configured on the identity provider's
//! API (they arrive in the `permissions` claim of each access token).

pub const GET_MOVIES: &str = "get:movies";
pub const POST_MOVIES: &str = "post:movies";
pub const PATCH_MOVIES: &str = "patch:movies";
pub const DELETE_MOVIES: &str = "delete:movies";

pub const GET_ACTORS: &str = "get:actors";
pub const POST_ACTORS: &str = "post:actors";
pub const PATCH_ACTORS: &str = "patch:actors";
pub const DELETE_ACTORS: &str = "delete:actors";

/// Every permission the API checks, in route-table order.
pub const ALL: [&str; 8] = [
    GET_MOVIES,
    POST_MOVIES,
    PATCH_MOVIES,
    DELETE_MOVIES,
    GET_ACTORS,
    POST_ACTORS,
    PATCH_ACTORS,
    DELETE_ACTORS,
];
