use anyhow::Result;
use sqlx::SqlitePool;
use tracing::info;

pub async fn run_migrations(pool: &SqlitePool) -> Result<()> {
    info!("Running database migrations...");

    create_attendance_records_table(pool).await?;
    create_attendance_records_index(pool).await?;

    info!("Database migrations completed successfully");
    Ok(())
}

async fn create_attendance_records_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS attendance_records (
            id INTEGER PRIMARY KEY,
            user_id TEXT NOT NULL,
            work_date DATE NOT NULL,
            clock_in_time DATETIME,
            clock_out_time DATETIME,
            working_hours REAL,
            overtime_hours REAL NOT NULL DEFAULT 0,
            overtime_amount REAL NOT NULL DEFAULT 0,
            created_at DATETIME DEFAULT CURRENT_TIMESTAMP,
            updated_at DATETIME DEFAULT CURRENT_TIMESTAMP,
            UNIQUE (user_id, work_date)
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

async fn create_attendance_records_index(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_attendance_records_user_date
        ON attendance_records (user_id, work_date)
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
