//! Repository for the `kids_gift_boxes` table.

use giftbox_core::types::DbId;
use sqlx::PgPool;

use crate::models::gift_box::{CreateGiftBox, GiftBox};

/// Column list shared across queries to avoid repetition.
///
/// `price` is cast so it decodes straight into `f64`.
const COLUMNS: &str = "id, title, description, contains, notes, images, price::FLOAT8 AS price";

/// Table definition. Safe to run repeatedly.
const CREATE_TABLE: &str = "CREATE TABLE IF NOT EXISTS kids_gift_boxes (
    id          BIGSERIAL PRIMARY KEY,
    title       TEXT NOT NULL,
    description TEXT NOT NULL,
    contains    TEXT,
    notes       TEXT,
    images      TEXT[] NOT NULL DEFAULT '{}',
    price       NUMERIC(10,2) NOT NULL
)";

/// Provides create and read operations for gift boxes.
pub struct GiftBoxRepo;

impl GiftBoxRepo {
    /// Create the `kids_gift_boxes` table if it does not exist yet.
    ///
    /// There is no migration support: an existing table with a different
    /// shape is left untouched.
    pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
        sqlx::query(CREATE_TABLE).execute(pool).await?;
        tracing::debug!("kids_gift_boxes schema ensured");
        Ok(())
    }

    /// Whether the `kids_gift_boxes` table is visible on the search path.
    pub async fn table_exists(pool: &PgPool) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT to_regclass('kids_gift_boxes') IS NOT NULL")
            .fetch_one(pool)
            .await
    }

    /// Insert a new gift box, returning the created row with its generated id.
    pub async fn create(pool: &PgPool, input: &CreateGiftBox) -> Result<GiftBox, sqlx::Error> {
        let query = format!(
            "INSERT INTO kids_gift_boxes (title, description, contains, notes, images, price)
             VALUES ($1, $2, $3, $4, COALESCE($5::TEXT[], '{{}}'::TEXT[]), $6::NUMERIC)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, GiftBox>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.contains)
            .bind(&input.notes)
            .bind(&input.images)
            .bind(input.price)
            .fetch_one(pool)
            .await
    }

    /// Find a gift box by its ID. `None` means no such row.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<GiftBox>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM kids_gift_boxes WHERE id = $1");
        sqlx::query_as::<_, GiftBox>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all gift boxes ordered by ID.
    pub async fn list(pool: &PgPool) -> Result<Vec<GiftBox>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM kids_gift_boxes ORDER BY id");
        sqlx::query_as::<_, GiftBox>(&query).fetch_all(pool).await
    }
}
