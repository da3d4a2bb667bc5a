use crate::db::Db;
use crate::models::{Roles, User};
use crate::utils::rand::random_alpha_string;

pub struct UserBuilder<'a> {
    name: String,
    email: String,
    role: Roles,
    age: Option<i32>,
    gender: Option<String>,
    domicile: Option<String>,
    connection: &'a Db,
}

impl<'a> UserBuilder<'a> {
    pub fn new(connection: &'a Db) -> UserBuilder<'a> {
        let x = random_alpha_string(6);
        UserBuilder {
            connection,
            name: format!("Jane {}", x),
            email: format!("jane.{}@example.com", x.to_lowercase()),
            role: Roles::User,
            age: None,
            gender: None,
            domicile: None,
        }
    }

    pub fn with_name(mut self, name: &str) -> UserBuilder<'a> {
        self.name = name.to_string();
        self
    }

    pub fn with_email(mut self, email: &str) -> UserBuilder<'a> {
        self.email = email.to_string();
        self
    }

    pub fn with_role(mut self, role: Roles) -> UserBuilder<'a> {
        self.role = role;
        self
    }

    pub fn with_demographics(mut self, age: Option<i32>, gender: Option<&str>, domicile: Option<&str>) -> UserBuilder<'a> {
        self.age = age;
        self.gender = gender.map(|s| s.to_string());
        self.domicile = domicile.map(|s| s.to_string());
        self
    }

    pub fn finish(self) -> User {
        let mut new_user = User::create(&self.name, &self.email, "$argon2i$fixture-hash", self.role);
        new_user.age = self.age;
        new_user.gender = self.gender.clone();
        new_user.domicile = self.domicile.clone();
        new_user.commit(self.connection).unwrap()
    }
}
