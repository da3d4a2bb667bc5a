pub use self::attendees::*;
pub use self::demographics::*;
pub use self::enums::*;
pub use self::events::*;
pub use self::purchases::*;
pub use self::tickets::*;
pub use self::users::*;

pub mod attendees;
pub mod demographics;
pub mod enums;
pub mod events;
pub mod purchases;
pub mod tickets;
pub mod users;
