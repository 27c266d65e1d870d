//! Success envelopes.
//!
//! Every success body carries `"success": true` plus one resource key. The
//! key names follow the public route table: list and get use the plural,
//! patch and delete the singular.

use casting_core::types::DbId;
use serde::Serialize;

macro_rules! envelope {
    ($(#[$meta:meta])* $name:ident { $field:ident }) => {
        $(#[$meta])*
        #[derive(Debug, Serialize)]
        pub struct $name<T: Serialize> {
            pub success: bool,
            pub $field: T,
        }

        impl<T: Serialize> $name<T> {
            pub fn new($field: T) -> Self {
                Self {
                    success: true,
                    $field,
                }
            }
        }
    };
}

envelope!(
    /// `{ "success": true, "movies": ... }` -- a list or a single movie.
    MoviesResponse { movies }
);
envelope!(
    /// `{ "success": true, "movie": {...} }`
    MovieResponse { movie }
);
envelope!(
    /// `{ "success": true, "actors": ... }` -- a list or a single actor.
    ActorsResponse { actors }
);
envelope!(
    /// `{ "success": true, "actor": {...} }`
    ActorResponse { actor }
);

/// `{ "success": true, "id": <new id> }` returned by create endpoints.
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub success: bool,
    pub id: DbId,
}

impl CreatedResponse {
    pub fn new(id: DbId) -> Self {
        Self { success: true, id }
    }
}
