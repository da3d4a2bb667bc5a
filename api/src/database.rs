use db::prelude::*;

/// The application's handle to the shared store. Mirrors a connection pool:
/// the server creates one and every request borrows a connection from it.
#[derive(Clone, Default)]
pub struct Database {
    store: Db,
}

impl Database {
    pub fn new() -> Database {
        Database { store: Db::new() }
    }

    /// Wraps an existing store; used by tests that seed data before
    /// exercising controllers.
    pub fn from_store(store: Db) -> Database {
        Database { store }
    }

    pub fn get_connection(&self) -> &Db {
        &self.store
    }
}
