pub mod config;
pub mod endpoint;
pub mod error;
pub mod items;
pub mod logging;
pub mod model;
pub mod publish;
pub mod repository;
pub mod resolve;
