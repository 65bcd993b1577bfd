//! CLI commands for hydroroute

pub mod dispatch;
pub mod format;
pub mod init;
pub mod neighbors;
pub mod network;
pub mod pipes;
pub mod route;
pub mod survey;
pub mod times;
