use crate::application::services::AssignmentService;
use crate::domain::entities::{
    Assignment, Greeting, FALLBACK_GREETING, FALLBACK_TASK_SUGGESTION,
};
use crate::domain::ports::greeting_generator::GreetingGenerator;
use chrono::Local;
use chrono_tz::Tz;
use regex::Regex;
use serde::Deserialize;
use std::sync::{Arc, OnceLock};

#[derive(Debug, thiserror::Error)]
pub enum GreetingError {
    #[error("Google AI API key is not configured")]
    NotConfigured,
}

/// Greeting and study suggestion based on the next upcoming assignment
#[derive(Clone)]
pub struct GreetingService {
    generator: Option<Arc<dyn GreetingGenerator>>,
    assignment_service: AssignmentService,
    timezone: Option<Tz>,
}

impl GreetingService {
    /// `generator` is `None` when no LLM API key is configured. Due dates are
    /// shown in `timezone`, or in the server's local time when unset.
    pub fn new(
        generator: Option<Arc<dyn GreetingGenerator>>,
        assignment_service: AssignmentService,
        timezone: Option<Tz>,
    ) -> Self {
        Self {
            generator,
            assignment_service,
            timezone,
        }
    }

    /// Generate a greeting. Generation failures fall back to a fixed pair.
    pub async fn greet(&self) -> Result<Greeting, GreetingError> {
        let generator = self.generator.as_ref().ok_or_else(|| {
            tracing::error!("Google AI API key is not set");
            GreetingError::NotConfigured
        })?;

        // Any failure of the pipeline reads as "nothing upcoming" here
        let outcome = self.assignment_service.upcoming_assignments().await;
        let context = assignment_context(outcome.assignments().first(), self.timezone.as_ref());
        let prompt = build_prompt(&context);

        match generator.generate(&prompt).await {
            Ok(text) => Ok(parse_greeting(&text)),
            Err(e) => {
                tracing::warn!(
                    "Greeting generation via {} failed: {}",
                    generator.provider_name(),
                    e
                );
                metrics::counter!("greeting_fallbacks_total").increment(1);
                Ok(Greeting::fallback())
            }
        }
    }
}

/// One sentence describing the next assignment, if any
pub fn assignment_context(next: Option<&Assignment>, timezone: Option<&Tz>) -> String {
    const DATE_FORMAT: &str = "%-m/%-d/%Y";

    match next {
        Some(assignment) => {
            let due = assignment
                .due_at
                .map(|due| match timezone {
                    Some(tz) => due.with_timezone(tz).format(DATE_FORMAT).to_string(),
                    None => due.with_timezone(&Local).format(DATE_FORMAT).to_string(),
                })
                .unwrap_or_else(|| "soon".to_string());
            format!(
                "Your next assignment \"{}\" for {} is due {}.",
                assignment.name, assignment.course_name, due
            )
        }
        None => "You have no upcoming assignments.".to_string(),
    }
}

pub fn build_prompt(context: &str) -> String {
    format!(
        "You are an AI assistant for a student task management app. Based on this context: \"{}\", provide:\n\
         1. A short, encouraging, fun greeting (1 sentence)\n\
         2. A brief task suggestion related to the assignment or studying (1 sentence)\n\
         Format your response as JSON with 'greeting' and 'taskSuggestion' fields.",
        context
    )
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeneratedGreeting {
    greeting: Option<String>,
    task_suggestion: Option<String>,
}

/// Parse model output, tolerating markdown code fences.
///
/// Unparseable output yields the fallback pair; missing or blank fields fall
/// back one by one.
pub fn parse_greeting(text: &str) -> Greeting {
    static FENCE: OnceLock<Regex> = OnceLock::new();
    let fence = FENCE.get_or_init(|| Regex::new(r"```json|```").expect("valid fence pattern"));

    let cleaned = fence.replace_all(text, "");
    let parsed = match serde_json::from_str::<GeneratedGreeting>(cleaned.trim()) {
        Ok(parsed) => parsed,
        Err(e) => {
            tracing::warn!("Error parsing greeting JSON: {}", e);
            metrics::counter!("greeting_fallbacks_total").increment(1);
            return Greeting::fallback();
        }
    };

    Greeting {
        greeting: present(parsed.greeting).unwrap_or_else(|| FALLBACK_GREETING.to_string()),
        task_suggestion: present(parsed.task_suggestion)
            .unwrap_or_else(|| FALLBACK_TASK_SUGGESTION.to_string()),
    }
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
