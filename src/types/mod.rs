pub mod book;
pub mod error;
pub mod response;
pub mod user;
