pub mod attempts;
pub mod clients;
pub mod mailings;
pub mod messages;
pub mod relations;
pub mod users;
