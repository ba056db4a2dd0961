pub mod config;
pub mod export;
pub mod hit;
pub mod init;
pub mod render;
pub mod summary;
