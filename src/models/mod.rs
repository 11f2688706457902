mod attempt;
mod client;
mod mailing;
mod message;
mod user;

pub use attempt::Attempt;
pub use client::Client;
pub use mailing::{Mailing, MailingPeriod, MailingStatus};
pub use message::Message;
pub use user::User;
