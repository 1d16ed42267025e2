//! Client-side helpers for the theatre box office web application.
//!
//! This crate wraps the pieces every page of the booking frontend needs:
//! authenticated request dispatch against the API origin, locally persisted
//! session state with logout, display formatting for prices and dates, and
//! transient notifications with timed auto-dismiss.

pub mod api;
pub mod config;
pub mod notify;
pub mod session;
pub mod utils;

pub use api::{ApiClient, ApiError, RequestOptions};
pub use config::Config;
pub use notify::{Level, NotificationCenter};
pub use session::{Session, SessionStore};
