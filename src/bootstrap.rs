use crate::application::services::{
    AssignmentService, GreetingService, NewsService, TaskService, WeatherService,
};
use crate::config::Config;
use crate::domain::ports::{
    clock::Clock, greeting_generator::GreetingGenerator, lms_client::LmsClient,
    news_feed::NewsFeed, task_repository::TaskRepository, weather_provider::WeatherProvider,
};
use crate::infrastructure::http::middleware::AppState;
use crate::infrastructure::persistence::Database;
use crate::infrastructure::providers::{
    build_http_client, CanvasClient, GeminiClient, OpenWeatherClient, RssFeedClient,
};
use crate::infrastructure::runtime::clock::SystemClock;
use std::sync::Arc;

pub fn build_app_state(db: Database, config: &Config) -> Result<AppState, Box<dyn std::error::Error>> {
    build_app_state_with_clock(db, config, Arc::new(SystemClock::new()))
}

/// Wire every service from configuration, reading "now" from `clock`
pub fn build_app_state_with_clock(
    db: Database,
    config: &Config,
    clock: Arc<dyn Clock>,
) -> Result<AppState, Box<dyn std::error::Error>> {
    let http_client = build_http_client(config.upstream_timeout())?;

    let lms_client = match &config.canvas_api_key {
        Some(key) => Some(Arc::new(CanvasClient::new(
            http_client.clone(),
            &config.canvas_api_url,
            key,
        )) as Arc<dyn LmsClient>),
        None => {
            tracing::warn!("CANVAS_API_KEY not set, /assignments will answer with an error");
            None
        }
    };
    let assignment_service =
        AssignmentService::new(lms_client, clock, config.aggregation_settings());
    tracing::info!(
        "Assignment service initialized (horizon {} days)",
        config.assignment_horizon_days
    );

    let task_service = TaskService::new(Arc::new(db) as Arc<dyn TaskRepository>);

    let weather_provider = config.weather_api_key.as_ref().map(|key| {
        Arc::new(OpenWeatherClient::new(
            http_client.clone(),
            &config.weather_api_url,
            key,
            &config.weather_location,
        )) as Arc<dyn WeatherProvider>
    });
    if weather_provider.is_none() {
        tracing::warn!("OPENWEATHER_API_KEY not set, /api/weather will answer with an error");
    }
    let weather_service = WeatherService::new(weather_provider);

    let news_service = NewsService::new(
        Arc::new(RssFeedClient::new(http_client.clone(), &config.news_feed_url))
            as Arc<dyn NewsFeed>,
        config.news_article_limit,
        config.news_excerpt_chars,
    );

    let generator = config.google_ai_api_key.as_ref().map(|key| {
        Arc::new(GeminiClient::new(
            http_client.clone(),
            &config.google_ai_api_url,
            key,
            &config.google_ai_model,
        )) as Arc<dyn GreetingGenerator>
    });
    if generator.is_none() {
        tracing::warn!("GOOGLE_AI_API_KEY not set, /api/ai-assistant will answer with an error");
    }
    let greeting_service = GreetingService::new(
        generator,
        assignment_service.clone(),
        config.display_timezone,
    );

    Ok(AppState {
        assignment_service,
        task_service,
        weather_service,
        news_service,
        greeting_service,
    })
}
