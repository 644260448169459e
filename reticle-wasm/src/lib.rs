mod api;
mod error;
mod interop;

pub use api::*;
