pub mod config;
pub mod error;
pub mod logging;

pub mod extract;
pub mod fetch;
pub mod pipeline;
pub mod sniff;
pub mod storage;
pub mod url_model;
