//! System level settings

pub mod config;

pub use config::FaceConfig;
