use actix_web::web::Data;
use db::dev::TestProject;
use evently_api::config::{Config, Environment};
use evently_api::database::Database;
use evently_api::server::AppState;

pub struct TestDatabase {
    project: TestProject,
}

impl TestDatabase {
    pub fn new() -> TestDatabase {
        TestDatabase {
            project: TestProject::new(),
        }
    }

    pub fn project(&self) -> &TestProject {
        &self.project
    }

    /// Application state backed by this test database's store.
    pub fn state(&self) -> Data<AppState> {
        let config = Config::new(Environment::Test);
        let database = Database::from_store(self.project.connection().clone());
        Data::new(AppState::new(config, database))
    }
}

impl Default for TestDatabase {
    fn default() -> TestDatabase {
        TestDatabase::new()
    }
}
