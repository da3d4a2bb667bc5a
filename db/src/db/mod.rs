pub use self::store::*;

mod store;
