pub mod config;
pub mod logging;

pub mod api;
pub mod checksum;
pub mod downloader;
pub mod error;
pub mod messages;
pub mod models;
pub mod presenter;
pub mod session;
pub mod storage;
pub mod url_model;
pub mod validate;
