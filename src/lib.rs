//! Lists the files of an HTTP server's open directory indexes.

pub mod browser;
pub mod parsing;
pub mod path;
pub mod response;
pub mod server;

pub use browser::{DirectoryBrowser, Listing};
pub use parsing::AnchorExtractor;
pub use server::Server;
