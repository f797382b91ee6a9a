pub mod assignment_service;
pub mod greeting_service;
pub mod news_service;
pub mod task_service;
pub mod weather_service;

pub use assignment_service::*;
pub use greeting_service::*;
pub use news_service::*;
pub use task_service::*;
pub use weather_service::*;
