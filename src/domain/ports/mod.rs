pub mod clock;
pub mod greeting_generator;
pub mod lms_client;
pub mod news_feed;
pub mod task_repository;
pub mod weather_provider;
