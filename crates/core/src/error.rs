use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// Malformed or out-of-range request data.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The entity addressed by the request does not exist.
    #[error("{entity} {id} does not exist")]
    NotFound { entity: &'static str, id: DbId },

    /// An entity referenced from the request body does not exist.
    #[error("{entity} {id} does not exist")]
    UnknownReference { entity: &'static str, id: DbId },

    #[error("all units already rented")]
    NoStockAvailable { game_id: DbId },

    #[error("rental already finished")]
    AlreadyClosed { rental_id: DbId },
}
