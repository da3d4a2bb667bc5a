pub mod attendees;
pub mod registrations;
pub mod reports;
pub mod status;
