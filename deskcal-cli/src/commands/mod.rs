pub mod add;
pub mod config;
pub mod delete;
pub mod export;
pub mod import;
pub mod month;
pub mod repeat;
pub mod show;
pub mod today;
