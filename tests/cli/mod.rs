pub mod errors;
pub mod init;
pub mod logging;
pub mod neighbors;
pub mod route;
pub mod support;
pub mod survey;
pub mod times;
