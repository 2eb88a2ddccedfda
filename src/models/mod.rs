pub mod events;
pub mod freelancers;
pub mod organizers;
pub mod professions;
pub mod proposals;
pub mod ratings;
pub mod users;
