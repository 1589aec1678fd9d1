pub mod account;
pub mod directory;
pub mod transaction;
pub mod user;
