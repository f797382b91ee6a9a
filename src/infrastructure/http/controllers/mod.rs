pub mod assignments;
pub mod greeting;
pub mod news;
pub mod tasks;
pub mod weather;
