//! Book instances repository

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{FromRow, Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{
        book::BookTitle,
        book_instance::{BookInstance, BookInstanceDetails, BookInstanceStatus, NewBookInstance},
    },
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookInstanceRepository: Send + Sync {
    /// Every copy with its book title, sorted by title then imprint
    async fn list(&self) -> AppResult<Vec<BookInstanceDetails>>;

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<BookInstanceDetails>>;

    async fn find_by_book(&self, book_id: Uuid) -> AppResult<Vec<BookInstance>>;

    async fn create(&self, data: &NewBookInstance) -> AppResult<BookInstance>;

    /// Returns `None` when no copy has this id
    async fn update(&self, id: Uuid, data: &NewBookInstance) -> AppResult<Option<BookInstance>>;

    async fn delete(&self, id: Uuid) -> AppResult<()>;

    async fn count(&self) -> AppResult<i64>;

    async fn count_by_status(&self, status: BookInstanceStatus) -> AppResult<i64>;
}

/// Status is stored as text
#[derive(FromRow)]
struct BookInstanceRow {
    id: Uuid,
    book_id: Uuid,
    imprint: String,
    status: String,
    due_back: Option<NaiveDate>,
}

impl TryFrom<BookInstanceRow> for BookInstance {
    type Error = AppError;

    fn try_from(row: BookInstanceRow) -> Result<Self, Self::Error> {
        let status = row.status.parse().map_err(|_| {
            AppError::Internal(format!(
                "Book instance {} has unknown status '{}'",
                row.id, row.status
            ))
        })?;
        Ok(Self {
            id: row.id,
            book_id: row.book_id,
            imprint: row.imprint,
            status,
            due_back: row.due_back,
        })
    }
}

#[derive(FromRow)]
struct BookInstanceDetailsRow {
    #[sqlx(flatten)]
    instance: BookInstanceRow,
    book_title: String,
}

impl TryFrom<BookInstanceDetailsRow> for BookInstanceDetails {
    type Error = AppError;

    fn try_from(row: BookInstanceDetailsRow) -> Result<Self, Self::Error> {
        let instance = BookInstance::try_from(row.instance)?;
        Ok(Self {
            book: BookTitle {
                id: instance.book_id,
                title: row.book_title,
            },
            instance,
        })
    }
}

const DETAILS_QUERY: &str = r#"
    SELECT bi.id, bi.book_id, bi.imprint, bi.status, bi.due_back,
           COALESCE(b.title, '') AS book_title
    FROM book_instances bi
    LEFT JOIN books b ON b.id = bi.book_id
"#;

#[derive(Clone)]
pub struct PgBookInstanceRepository {
    pool: Pool<Postgres>,
}

impl PgBookInstanceRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookInstanceRepository for PgBookInstanceRepository {
    async fn list(&self) -> AppResult<Vec<BookInstanceDetails>> {
        let query = format!("{} ORDER BY book_title, bi.imprint", DETAILS_QUERY);
        let rows = sqlx::query_as::<_, BookInstanceDetailsRow>(&query)
            .fetch_all(&self.pool)
            .await?;
        rows.into_iter().map(BookInstanceDetails::try_from).collect()
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<BookInstanceDetails>> {
        let query = format!("{} WHERE bi.id = $1", DETAILS_QUERY);
        let row = sqlx::query_as::<_, BookInstanceDetailsRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        row.map(BookInstanceDetails::try_from).transpose()
    }

    async fn find_by_book(&self, book_id: Uuid) -> AppResult<Vec<BookInstance>> {
        let rows = sqlx::query_as::<_, BookInstanceRow>(
            r#"
            SELECT id, book_id, imprint, status, due_back
            FROM book_instances
            WHERE book_id = $1
            ORDER BY imprint
            "#,
        )
        .bind(book_id)
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter().map(BookInstance::try_from).collect()
    }

    async fn create(&self, data: &NewBookInstance) -> AppResult<BookInstance> {
        let row = sqlx::query_as::<_, BookInstanceRow>(
            r#"
            INSERT INTO book_instances (id, book_id, imprint, status, due_back)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, book_id, imprint, status, due_back
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(data.book_id)
        .bind(&data.imprint)
        .bind(data.status.as_str())
        .bind(data.due_back)
        .fetch_one(&self.pool)
        .await?;
        BookInstance::try_from(row)
    }

    async fn update(&self, id: Uuid, data: &NewBookInstance) -> AppResult<Option<BookInstance>> {
        let row = sqlx::query_as::<_, BookInstanceRow>(
            r#"
            UPDATE book_instances
            SET book_id = $2, imprint = $3, status = $4, due_back = $5
            WHERE id = $1
            RETURNING id, book_id, imprint, status, due_back
            "#,
        )
        .bind(id)
        .bind(data.book_id)
        .bind(&data.imprint)
        .bind(data.status.as_str())
        .bind(data.due_back)
        .fetch_optional(&self.pool)
        .await?;
        row.map(BookInstance::try_from).transpose()
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM book_instances WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Book instance {} not found", id)));
        }
        Ok(())
    }

    async fn count(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM book_instances")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    async fn count_by_status(&self, status: BookInstanceStatus) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM book_instances WHERE status = $1")
            .bind(status.as_str())
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
