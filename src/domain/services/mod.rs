mod chat_log;
pub mod dispatcher;
pub mod events;
mod scroll;

pub use chat_log::*;
pub use scroll::*;
