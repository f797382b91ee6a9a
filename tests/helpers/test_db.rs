use studydesk::infrastructure::persistence::Database;
use uuid::Uuid;

/// Fresh file-backed SQLite database with migrations applied
pub async fn setup_test_db() -> Database {
    // Unique file per test for parallel execution
    let path = std::env::temp_dir().join(format!("studydesk_test_{}.db", Uuid::new_v4()));
    let db_url = format!("sqlite://{}?mode=rwc", path.display());

    let db = Database::connect(&db_url)
        .await
        .expect("Failed to connect to test database");

    db.run_migrations()
        .await
        .expect("Failed to run migrations");

    db
}
