//! Session state for the box office client.
//!
//! This module provides:
//! - `SessionStore`: the key-value capability holding the logged-in identity
//! - `FileStore` / `MemoryStore`: persistent and in-process implementations
//! - `Session`: authentication queries and logout
//!
//! The identity fields are written by the external login flow and cleared as
//! a group on logout.

pub mod session;
pub mod store;

pub use session::{Navigator, Session};
pub use store::{FileStore, MemoryStore, SessionStore, ACCESS_TOKEN, USER_EMAIL, USER_ID};
