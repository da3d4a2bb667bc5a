pub mod db;
pub mod dev;
pub mod models;
pub mod utils;

pub mod prelude {
    pub use crate::db::Db;
    pub use crate::models::*;
    pub use crate::utils::dates;
    pub use crate::utils::errors::*;
}
