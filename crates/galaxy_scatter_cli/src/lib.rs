#![forbid(unsafe_code)]

mod app;

pub use app::{execute, init_tracing, Cli};
