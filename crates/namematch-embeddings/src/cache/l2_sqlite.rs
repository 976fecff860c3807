//! L2 SQLite-backed embedding cache.
//!
//! Persists `content_hash -> embedding` rows so reference embeddings survive
//! process restarts. Vectors are stored as little-endian f32 blobs.

use std::path::Path;
use std::sync::Mutex;

use namematch_core::errors::EmbeddingError;
use rusqlite::{params, Connection, OptionalExtension};
use tracing::debug;

fn cache_err(e: impl std::fmt::Display) -> EmbeddingError {
    EmbeddingError::Cache {
        reason: e.to_string(),
    }
}

pub struct L2SqliteCache {
    conn: Mutex<Connection>,
}

impl L2SqliteCache {
    /// Open (or create) the cache database at `path`.
    pub fn open(path: &Path) -> Result<Self, EmbeddingError> {
        let conn = Connection::open(path).map_err(cache_err)?;
        Self::init(conn)
    }

    pub fn open_in_memory() -> Result<Self, EmbeddingError> {
        let conn = Connection::open_in_memory().map_err(cache_err)?;
        Self::init(conn)
    }

    fn init(conn: Connection) -> Result<Self, EmbeddingError> {
        conn.execute_batch(
            "
            PRAGMA journal_mode = WAL;
            PRAGMA synchronous = NORMAL;
            CREATE TABLE IF NOT EXISTS embedding_cache (
                content_hash TEXT PRIMARY KEY,
                dimensions   INTEGER NOT NULL,
                embedding    BLOB NOT NULL
            );
            ",
        )
        .map_err(cache_err)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    pub fn get(&self, content_hash: &str) -> Result<Option<Vec<f32>>, EmbeddingError> {
        let conn = self.conn.lock().map_err(cache_err)?;
        let blob: Option<Vec<u8>> = conn
            .query_row(
                "SELECT embedding FROM embedding_cache WHERE content_hash = ?1",
                params![content_hash],
                |row| row.get(0),
            )
            .optional()
            .map_err(cache_err)?;
        Ok(blob.map(|bytes| bytes_to_f32_vec(&bytes)))
    }

    pub fn insert(&self, content_hash: &str, embedding: &[f32]) -> Result<(), EmbeddingError> {
        let conn = self.conn.lock().map_err(cache_err)?;
        conn.execute(
            "INSERT INTO embedding_cache (content_hash, dimensions, embedding)
             VALUES (?1, ?2, ?3)
             ON CONFLICT(content_hash) DO UPDATE SET
                dimensions = excluded.dimensions,
                embedding = excluded.embedding",
            params![content_hash, embedding.len() as i64, f32_vec_to_bytes(embedding)],
        )
        .map_err(cache_err)?;
        debug!(hash = content_hash, "L2 cache insert");
        Ok(())
    }

    pub fn len(&self) -> Result<usize, EmbeddingError> {
        let conn = self.conn.lock().map_err(cache_err)?;
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM embedding_cache", [], |row| row.get(0))
            .map_err(cache_err)?;
        Ok(count.max(0) as usize)
    }
}

fn f32_vec_to_bytes(v: &[f32]) -> Vec<u8> {
    v.iter().flat_map(|f| f.to_le_bytes()).collect()
}

fn bytes_to_f32_vec(bytes: &[u8]) -> Vec<f32> {
    bytes
        .chunks_exact(4)
        .map(|chunk| f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect()
}
