pub mod compare;
pub mod show;
pub mod tables;
