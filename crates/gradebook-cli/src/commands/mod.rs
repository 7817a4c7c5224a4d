pub mod add;
pub mod average;
pub mod init;
pub mod menu;
pub mod view;

mod table;
