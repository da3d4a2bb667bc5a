mod attendees;
mod registrations;
mod reports;
mod status;
