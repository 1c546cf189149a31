//! Visual theme for the client.

pub mod colors;
