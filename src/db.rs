use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::config::validate_schema_name;

pub struct Database {
    pub pool: PgPool,
}

impl Database {
    /// Opens the pool and makes sure the `leads` and `analytics_events`
    /// collections exist inside `schema`.
    pub async fn new(database_url: &str, schema: &str) -> anyhow::Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect(database_url)
            .await?;

        sqlx::query("SELECT 1").execute(&pool).await?;

        let db = Self { pool };
        db.ensure_collections(schema).await?;
        Ok(db)
    }

    async fn ensure_collections(&self, schema: &str) -> anyhow::Result<()> {
        let schema = validate_schema_name(schema)?;

        let statements = [
            format!("CREATE SCHEMA IF NOT EXISTS {schema}"),
            format!(
                "CREATE TABLE IF NOT EXISTS {schema}.leads (
                    record_id BIGSERIAL PRIMARY KEY,
                    id TEXT NOT NULL UNIQUE,
                    name TEXT NOT NULL,
                    email TEXT NOT NULL,
                    phone TEXT NOT NULL,
                    source TEXT NOT NULL,
                    status TEXT NOT NULL,
                    created_at TIMESTAMPTZ NOT NULL
                )"
            ),
            format!(
                "CREATE TABLE IF NOT EXISTS {schema}.analytics_events (
                    record_id BIGSERIAL PRIMARY KEY,
                    document JSONB NOT NULL,
                    received_at TIMESTAMPTZ NOT NULL
                )"
            ),
        ];

        for statement in &statements {
            sqlx::query(statement).execute(&self.pool).await?;
        }

        tracing::info!("Collections ready in schema '{}'", schema);
        Ok(())
    }

    /// Closes every pooled connection. Called once, after the server drains.
    pub async fn close(&self) {
        self.pool.close().await;
        tracing::info!("Database connection pool closed");
    }
}
