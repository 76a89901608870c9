use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx::{FromRow, PgPool};
use tokio::sync::RwLock;

use crate::config::validate_schema_name;
use crate::errors::AppError;
use crate::models::{AnalyticsEvent, Lead, StoredLead};

/// Storage for captured leads and analytics events.
///
/// Each method is a single write or a single bounded read; implementations
/// never retry.
#[async_trait]
pub trait LeadStore: Send + Sync {
    /// Persists one lead in a single insert.
    async fn insert_lead(&self, lead: &Lead) -> Result<(), AppError>;

    /// Returns at most `limit` leads in insertion order.
    async fn list_leads(&self, limit: usize) -> Result<Vec<StoredLead>, AppError>;

    /// Persists one analytics document in a single insert.
    async fn insert_event(&self, event: &AnalyticsEvent) -> Result<(), AppError>;
}

/// Postgres-backed store; both collections live in one schema.
pub struct PgLeadStore {
    pool: PgPool,
    schema: String,
}

#[derive(Debug, FromRow)]
struct LeadRow {
    record_id: i64,
    id: String,
    name: String,
    email: String,
    phone: String,
    source: String,
    status: String,
    created_at: DateTime<Utc>,
}

impl From<LeadRow> for StoredLead {
    fn from(row: LeadRow) -> Self {
        StoredLead {
            record_id: row.record_id.to_string(),
            lead: Lead {
                id: row.id,
                name: row.name,
                email: row.email,
                phone: row.phone,
                source: row.source,
                status: row.status,
                created_at: row.created_at,
            },
        }
    }
}

impl PgLeadStore {
    pub fn new(pool: PgPool, schema: &str) -> anyhow::Result<Self> {
        let schema = validate_schema_name(schema)?.to_string();
        Ok(Self { pool, schema })
    }
}

#[async_trait]
impl LeadStore for PgLeadStore {
    async fn insert_lead(&self, lead: &Lead) -> Result<(), AppError> {
        let sql = format!(
            "INSERT INTO {}.leads (id, name, email, phone, source, status, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
            self.schema
        );

        sqlx::query(&sql)
            .bind(&lead.id)
            .bind(&lead.name)
            .bind(&lead.email)
            .bind(&lead.phone)
            .bind(&lead.source)
            .bind(&lead.status)
            .bind(lead.created_at)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn list_leads(&self, limit: usize) -> Result<Vec<StoredLead>, AppError> {
        let sql = format!(
            "SELECT record_id, id, name, email, phone, source, status, created_at
             FROM {}.leads
             ORDER BY record_id
             LIMIT $1",
            self.schema
        );

        let rows = sqlx::query_as::<_, LeadRow>(&sql)
            .bind(i64::try_from(limit).unwrap_or(i64::MAX))
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(StoredLead::from).collect())
    }

    async fn insert_event(&self, event: &AnalyticsEvent) -> Result<(), AppError> {
        let sql = format!(
            "INSERT INTO {}.analytics_events (document, received_at) VALUES ($1, $2)",
            self.schema
        );

        sqlx::query(&sql)
            .bind(event.to_document())
            .bind(event.received_at())
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

/// Process-local store for tests; the server always runs on `PgLeadStore`.
#[derive(Default)]
pub struct InMemoryLeadStore {
    inner: RwLock<Collections>,
}

#[derive(Default)]
struct Collections {
    next_record_id: u64,
    leads: Vec<StoredLead>,
    events: Vec<Value>,
}

impl InMemoryLeadStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every stored analytics document, oldest first.
    pub async fn events(&self) -> Vec<Value> {
        self.inner.read().await.events.clone()
    }

    pub async fn lead_count(&self) -> usize {
        self.inner.read().await.leads.len()
    }
}

#[async_trait]
impl LeadStore for InMemoryLeadStore {
    async fn insert_lead(&self, lead: &Lead) -> Result<(), AppError> {
        let mut inner = self.inner.write().await;
        if inner.leads.iter().any(|stored| stored.lead.id == lead.id) {
            return Err(AppError::DatabaseError(sqlx::Error::Protocol(format!(
                "duplicate lead id {}",
                lead.id
            ))));
        }

        inner.next_record_id += 1;
        let record_id = inner.next_record_id.to_string();
        inner.leads.push(StoredLead {
            record_id,
            lead: lead.clone(),
        });
        Ok(())
    }

    async fn list_leads(&self, limit: usize) -> Result<Vec<StoredLead>, AppError> {
        let inner = self.inner.read().await;
        Ok(inner.leads.iter().take(limit).cloned().collect())
    }

    async fn insert_event(&self, event: &AnalyticsEvent) -> Result<(), AppError> {
        self.inner.write().await.events.push(event.to_document());
        Ok(())
    }
}
