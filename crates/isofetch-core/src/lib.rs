pub mod config;
pub mod logging;

pub mod candidate;
pub mod catalog;
pub mod explorer;
pub mod fetcher;
pub mod http;
pub mod serve;
pub mod storage;
