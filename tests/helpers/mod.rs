#![allow(dead_code)]
pub mod lms_fixtures;
pub mod test_app;
pub mod test_db;

pub use lms_fixtures::*;
pub use test_app::*;
pub use test_db::*;
