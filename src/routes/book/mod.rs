pub mod create;
pub mod destroy;
pub mod list;
pub mod retrieve;
pub mod update;
