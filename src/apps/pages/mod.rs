//! The pages app: two server-rendered pages and their URL table.

pub mod urls;
pub mod views;
