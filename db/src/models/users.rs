use crate::db::Db;
use crate::models::enums::Roles;
use crate::utils::errors::{DatabaseError, ErrorCode};
use chrono::prelude::Utc;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub hashed_pw: String,
    pub role: Roles,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub domicile: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug, Deserialize, Validate)]
pub struct NewUser {
    #[validate(length(min = 1, message = "Name cannot be blank"))]
    pub name: String,
    #[validate(email(message = "Email is invalid"))]
    pub email: String,
    pub hashed_pw: String,
    pub role: Roles,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub domicile: Option<String>,
}

impl NewUser {
    pub fn commit(&self, conn: &Db) -> Result<User, DatabaseError> {
        self.validate()?;

        let mut tables = conn.write()?;
        if tables.users.values().any(|u| u.email == self.email) {
            return DatabaseError::duplicate_key("Email address is already in use");
        }

        let user = User {
            id: Uuid::new_v4(),
            name: self.name.clone(),
            email: self.email.clone(),
            hashed_pw: self.hashed_pw.clone(),
            role: self.role,
            age: self.age,
            gender: self.gender.clone(),
            domicile: self.domicile.clone(),
            created_at: Utc::now().naive_utc(),
        };
        tables.users.insert(user.id, user.clone());
        Ok(user)
    }
}

impl User {
    /// The caller supplies an already hashed credential; this crate never
    /// sees plaintext passwords.
    pub fn create(name: &str, email: &str, hashed_pw: &str, role: Roles) -> NewUser {
        NewUser {
            name: name.to_string(),
            email: email.to_string(),
            hashed_pw: hashed_pw.to_string(),
            role,
            age: None,
            gender: None,
            domicile: None,
        }
    }

    pub fn find(id: Uuid, conn: &Db) -> Result<User, DatabaseError> {
        conn.read()?
            .users
            .get(&id)
            .cloned()
            .ok_or_else(|| DatabaseError::new(ErrorCode::NoResults, Some("Error loading user".to_string())))
    }

    pub fn exists(id: Uuid, conn: &Db) -> Result<bool, DatabaseError> {
        Ok(conn.read()?.users.contains_key(&id))
    }

    pub fn all(conn: &Db) -> Result<Vec<User>, DatabaseError> {
        let tables = conn.read()?;
        let mut users: Vec<User> = tables.users.values().cloned().collect();
        users.sort_by(|a, b| (a.created_at, a.id).cmp(&(b.created_at, b.id)));
        Ok(users)
    }

    /// Removes the user and, per the referential policy, every purchase that
    /// belongs to them. Returns the number of rows removed.
    pub fn destroy(id: Uuid, conn: &Db) -> Result<usize, DatabaseError> {
        let mut tables = conn.write()?;
        if tables.users.remove(&id).is_none() {
            return DatabaseError::no_results("Error loading user");
        }
        let before = tables.purchases.len();
        tables.purchases.retain(|key, _| key.user_id != id);
        Ok(1 + before - tables.purchases.len())
    }
}
