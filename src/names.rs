pub const HEALTH_URL: &str = "/";
pub const QUESTIONS_URL: &str = "/api/questions";
pub const QUESTIONS_BY_CATEGORY_URL: &str = "/api/questions/{category}";

pub const HEALTH_MESSAGE: &str = "Quiz Backend API is running!";
pub const INSERTED_MESSAGE: &str = "Questions inserted successfully.";

pub fn questions_by_category_url(category: &str) -> String {
    format!("{QUESTIONS_URL}/{category}")
}

// Database defaults
pub const DEFAULT_DATABASE: &str = "quizbank";
pub const QUESTIONS_COLLECTION: &str = "questions";

// Request bodies larger than this are answered with 413.
pub const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

// Server defaults
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3001;
