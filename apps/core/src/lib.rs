pub mod catalog;
pub mod config;
pub mod contract;
pub mod history;
pub mod index;
pub mod logging;
pub mod model;
pub mod runtime;
pub mod search;
pub mod service;
pub mod suggest;
pub mod transport;
