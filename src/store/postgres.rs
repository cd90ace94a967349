// src/store/postgres.rs

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use sqlx::{FromRow, PgPool, types::Json};
use uuid::Uuid;

use crate::{
    models::{
        answer::Answer,
        enquiry::Enquiry,
        question::Question,
        result::{StoredResult, TestResult},
        user::UserInfo,
    },
    store::{EnquiryStore, ResultStore, StoreError, StoreResult},
};

/// PostgreSQL adapter for both collections.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn run_migrations(&self) -> Result<(), sqlx::migrate::MigrateError> {
        sqlx::migrate!("./migrations").run(&self.pool).await
    }
}

#[derive(FromRow)]
struct ResultRecord {
    id: Uuid,
    name: String,
    email: String,
    phone: String,
    fathers_name: String,
    batch_time: String,
    score: i32,
    total_questions: i32,
    answers: Json<Vec<Answer>>,
    questions: Json<Vec<Question>>,
    created_at: DateTime<Utc>,
}

impl ResultRecord {
    fn into_domain(self) -> StoredResult {
        StoredResult {
            id: self.id,
            created_at: self.created_at,
            result: TestResult {
                user_info: UserInfo {
                    name: self.name,
                    email: self.email,
                    phone: self.phone,
                    fathers_name: self.fathers_name,
                    batch_time: self.batch_time,
                },
                score: self.score.max(0) as u32,
                total_questions: self.total_questions.max(0) as u32,
                answers: self.answers.0,
                questions: self.questions.0,
            },
        }
    }
}

#[derive(FromRow)]
struct EnquiryRecord {
    id: Uuid,
    payload: Json<Map<String, Value>>,
    created_at: DateTime<Utc>,
}

#[async_trait]
impl ResultStore for PgStore {
    async fn save_result(&self, result: &TestResult) -> StoreResult<StoredResult> {
        let info = &result.user_info;
        let record = sqlx::query_as::<_, ResultRecord>(
            r#"
            INSERT INTO results
            (id, name, email, phone, fathers_name, batch_time, score, total_questions, answers, questions)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING id, name, email, phone, fathers_name, batch_time,
                      score, total_questions, answers, questions, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&info.name)
        .bind(&info.email)
        .bind(&info.phone)
        .bind(&info.fathers_name)
        .bind(&info.batch_time)
        .bind(result.score as i32)
        .bind(result.total_questions as i32)
        .bind(Json(result.answers.clone()))
        .bind(Json(result.questions.clone()))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert result: {:?}", e);
            StoreError::from(e)
        })?;

        Ok(record.into_domain())
    }

    async fn list_results(&self) -> StoreResult<Vec<StoredResult>> {
        let records = sqlx::query_as::<_, ResultRecord>(
            r#"
            SELECT id, name, email, phone, fathers_name, batch_time,
                   score, total_questions, answers, questions, created_at
            FROM results
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list results: {:?}", e);
            StoreError::from(e)
        })?;

        Ok(records.into_iter().map(ResultRecord::into_domain).collect())
    }

    async fn delete_result(&self, id: Uuid) -> StoreResult<()> {
        let outcome = sqlx::query("DELETE FROM results WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete result: {:?}", e);
                StoreError::from(e)
            })?;

        if outcome.rows_affected() == 0 {
            return Err(StoreError::NotFound(format!("Result {}", id)));
        }
        Ok(())
    }
}

#[async_trait]
impl EnquiryStore for PgStore {
    async fn save_enquiry(&self, payload: Map<String, Value>) -> StoreResult<Enquiry> {
        let record = sqlx::query_as::<_, EnquiryRecord>(
            r#"
            INSERT INTO enquiries (id, payload)
            VALUES ($1, $2)
            RETURNING id, payload, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(Json(payload))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert enquiry: {:?}", e);
            StoreError::from(e)
        })?;

        tracing::info!("Enquiry added with id {}", record.id);

        Ok(Enquiry {
            id: record.id,
            payload: record.payload.0,
            created_at: record.created_at,
        })
    }
}
