pub mod generate;
pub mod init;
pub mod list_modules;
pub mod validate;
