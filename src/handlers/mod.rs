//! Request handlers module

pub mod config;
pub mod document;
pub mod hierarchy;
pub mod request;
pub mod tree;
pub mod user;
