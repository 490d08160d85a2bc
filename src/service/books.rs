//! CRUD execution for `books`.

use crate::error::AppError;
use crate::model::{Book, BookFilter, BookInput};
use crate::sql::{self, BindValue, QueryBuf};
use sqlx::postgres::{PgArguments, Postgres};
use sqlx::query::QueryAs;
use sqlx::PgPool;

pub struct BookService;

impl BookService {
    /// All rows matching the substring filters. An empty result is not an error.
    pub async fn list(pool: &PgPool, filter: &BookFilter) -> Result<Vec<Book>, AppError> {
        let q = sql::select_list(filter);
        Self::fetch_all(pool, &q).await
    }

    /// Fetch one row by id. Returns None when absent.
    pub async fn read(pool: &PgPool, id: i32) -> Result<Option<Book>, AppError> {
        let q = sql::select_by_id(id);
        Self::fetch_optional(pool, &q).await
    }

    /// Insert one row and return it with its generated id.
    pub async fn create(pool: &PgPool, body: &BookInput) -> Result<Book, AppError> {
        let q = sql::insert(body);
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let row = bind_all(sqlx::query_as::<_, Book>(&q.sql), &q.params)
            .fetch_one(pool)
            .await?;
        tracing::info!(id = row.id, "book created");
        Ok(row)
    }

    /// Replace all content columns of one row. Returns None when no row has this id.
    pub async fn update(pool: &PgPool, id: i32, body: &BookInput) -> Result<Option<Book>, AppError> {
        let q = sql::update(id, body);
        Self::fetch_optional(pool, &q).await
    }

    /// Delete one row. Returns false when no row has this id.
    pub async fn delete(pool: &PgPool, id: i32) -> Result<bool, AppError> {
        let q = sql::delete(id);
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let deleted = bind_all(sqlx::query_as::<_, (i32,)>(&q.sql), &q.params)
            .fetch_optional(pool)
            .await?;
        Ok(deleted.is_some())
    }

    async fn fetch_all(pool: &PgPool, q: &QueryBuf) -> Result<Vec<Book>, AppError> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let rows = bind_all(sqlx::query_as::<_, Book>(&q.sql), &q.params)
            .fetch_all(pool)
            .await?;
        Ok(rows)
    }

    async fn fetch_optional(pool: &PgPool, q: &QueryBuf) -> Result<Option<Book>, AppError> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let row = bind_all(sqlx::query_as::<_, Book>(&q.sql), &q.params)
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }
}

/// Binds `params` in placeholder order; the single place a `BindValue` becomes a sqlx argument.
fn bind_all<'q, O>(
    mut query: QueryAs<'q, Postgres, O, PgArguments>,
    params: &[BindValue],
) -> QueryAs<'q, Postgres, O, PgArguments> {
    for p in params {
        query = match p {
            BindValue::Int(n) => query.bind(*n),
            BindValue::Text(s) => query.bind(s.clone()),
        };
    }
    query
}
