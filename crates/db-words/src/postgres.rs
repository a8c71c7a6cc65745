use rostrum_chunking::Word;
use sqlx::postgres::{PgPool, PgPoolOptions, PgRow};
use sqlx::Row;

use crate::{StoreError, WordStore};

#[derive(Clone, serde::Deserialize)]
pub struct DatabaseEnv {
    pub database_url: String,
}

impl DatabaseEnv {
    pub fn from_env() -> Result<Self, envy::Error> {
        envy::from_env()
    }
}

pub struct PostgresWordStore {
    pool: PgPool,
}

impl PostgresWordStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn connect(env: &DatabaseEnv) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(&env.database_url)
            .await?;
        Ok(Self { pool })
    }
}

impl WordStore for PostgresWordStore {
    async fn list_words(
        &self,
        transcript_id: i64,
        speaker: Option<&str>,
    ) -> Result<Vec<Word>, StoreError> {
        let rows = match speaker {
            Some(speaker) => {
                sqlx::query(
                    "SELECT text, start_ms, end_ms, confidence, speaker \
                     FROM transcript_words \
                     WHERE transcript_id = $1 AND speaker = $2 \
                     ORDER BY word_index ASC",
                )
                .bind(transcript_id)
                .bind(speaker)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query(
                    "SELECT text, start_ms, end_ms, confidence, speaker \
                     FROM transcript_words \
                     WHERE transcript_id = $1 \
                     ORDER BY word_index ASC",
                )
                .bind(transcript_id)
                .fetch_all(&self.pool)
                .await?
            }
        };

        tracing::debug!(transcript_id, speaker, words = rows.len(), "loaded word stream");

        // Stored word_index covers all speakers; the returned sequence is
        // re-indexed so a filtered stream stays contiguous from zero.
        rows.iter()
            .enumerate()
            .map(|(i, row)| word_from_row(i as i64, row).map_err(StoreError::from))
            .collect()
    }
}

fn word_from_row(index: i64, row: &PgRow) -> Result<Word, sqlx::Error> {
    Ok(Word {
        index,
        text: row.try_get("text")?,
        start_ms: row.try_get("start_ms")?,
        end_ms: row.try_get("end_ms")?,
        confidence: row.try_get("confidence")?,
        speaker: row.try_get("speaker")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_env_reads_url() {
        let env: DatabaseEnv = envy::from_iter(vec![(
            "DATABASE_URL".to_string(),
            "postgres://localhost/rostrum".to_string(),
        )])
        .unwrap();
        assert_eq!(env.database_url, "postgres://localhost/rostrum");
    }
}
