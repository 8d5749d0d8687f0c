//! Terminal input: key mapping and the event loop feeding the app.

pub mod handler;
pub mod key;
