pub mod dates;
pub mod errors;
pub mod money;
pub mod rand;
