pub mod course;
pub mod greeting;
pub mod news;
pub mod task;
pub mod weather;

pub use course::*;
pub use greeting::*;
pub use news::*;
pub use task::*;
pub use weather::*;
