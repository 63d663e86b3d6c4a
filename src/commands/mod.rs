pub mod init;
pub mod resolve;
