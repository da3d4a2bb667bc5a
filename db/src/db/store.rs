use crate::models::{Event, Purchase, PurchaseKey, Ticket, User};
use crate::utils::errors::{DatabaseError, ErrorCode};
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use uuid::Uuid;

/// The backing tables. Purchases are keyed by their composite
/// (user_id, ticket_id) identity, so the uniqueness invariant is enforced
/// by the map itself rather than by a lookup-then-insert convention.
#[derive(Default)]
pub struct Tables {
    pub users: HashMap<Uuid, User>,
    pub events: HashMap<Uuid, Event>,
    pub tickets: HashMap<Uuid, Ticket>,
    pub purchases: HashMap<PurchaseKey, Purchase>,
}

/// Handle to the shared store. Clones are cheap and point at the same
/// tables; model functions take `&Db` the way a database connection is
/// passed around. Mutations acquire the write lock for the full
/// check-then-insert, so concurrent commits for the same purchase key
/// cannot both succeed.
#[derive(Clone, Default)]
pub struct Db {
    tables: Arc<RwLock<Tables>>,
}

impl Db {
    pub fn new() -> Db {
        Db::default()
    }

    pub fn read(&self) -> Result<RwLockReadGuard<Tables>, DatabaseError> {
        self.tables
            .read()
            .map_err(|_| DatabaseError::new(ErrorCode::ConnectionError, Some("Store lock poisoned".to_string())))
    }

    pub fn write(&self) -> Result<RwLockWriteGuard<Tables>, DatabaseError> {
        self.tables
            .write()
            .map_err(|_| DatabaseError::new(ErrorCode::ConnectionError, Some("Store lock poisoned".to_string())))
    }
}
