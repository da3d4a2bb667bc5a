pub use self::event_builder::*;
pub use self::purchase_builder::*;
pub use self::ticket_builder::*;
pub use self::user_builder::*;

mod event_builder;
mod purchase_builder;
mod ticket_builder;
mod user_builder;
