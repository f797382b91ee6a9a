use crate::application::services::{
    AssignmentService, GreetingService, NewsService, TaskService, WeatherService,
};

/// Services shared by every handler
#[derive(Clone)]
pub struct AppState {
    pub assignment_service: AssignmentService,
    pub task_service: TaskService,
    pub weather_service: WeatherService,
    pub news_service: NewsService,
    pub greeting_service: GreetingService,
}
