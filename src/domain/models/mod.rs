mod api;
mod catalog;
mod command;
mod conversation;
mod error;
mod form;
mod message;
mod screen;
mod ticket;

pub use api::*;
pub use catalog::*;
pub use command::*;
pub use conversation::*;
pub use error::*;
pub use form::*;
pub use message::*;
pub use screen::*;
pub use ticket::*;
