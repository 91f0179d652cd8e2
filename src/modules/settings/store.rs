//! PostgreSQL-backed settings store.

use async_trait::async_trait;
use sqlx::PgPool;

use goldenhorse_cache::{Setting, SettingsError, SettingsStore};

#[derive(Debug, sqlx::FromRow)]
struct SettingRow {
    category: String,
    key: String,
    value: String,
}

impl From<SettingRow> for Setting {
    fn from(row: SettingRow) -> Self {
        Setting {
            category: row.category,
            key: row.key,
            value: row.value,
        }
    }
}

/// Settings persistence over the `settings` table.
///
/// `find_all` reads the whole table at once; the table is low-cardinality
/// and the snapshot cache absorbs repeated reads.
#[derive(Clone)]
pub struct PgSettingsStore {
    db: PgPool,
}

impl PgSettingsStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SettingsStore for PgSettingsStore {
    async fn find_all(&self) -> Result<Vec<Setting>, SettingsError> {
        let rows = sqlx::query_as::<_, SettingRow>(
            "SELECT category, key, value FROM settings ORDER BY category, key",
        )
        .fetch_all(&self.db)
        .await
        .map_err(SettingsError::store)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn upsert(
        &self,
        category: &str,
        key: &str,
        value: &str,
    ) -> Result<Setting, SettingsError> {
        let row = sqlx::query_as::<_, SettingRow>(
            r#"
            INSERT INTO settings (category, key, value)
            VALUES ($1, $2, $3)
            ON CONFLICT (category, key)
            DO UPDATE SET value = EXCLUDED.value, updated_at = NOW()
            RETURNING category, key, value
            "#,
        )
        .bind(category)
        .bind(key)
        .bind(value)
        .fetch_one(&self.db)
        .await
        .map_err(SettingsError::store)?;

        Ok(row.into())
    }
}
