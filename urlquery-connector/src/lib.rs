pub mod api;
pub mod client;
pub mod protocol;
pub mod time;

pub use client::{CallOptions, UrlQuery, UrlQueryBuilder, DEFAULT_BASE_URL};
