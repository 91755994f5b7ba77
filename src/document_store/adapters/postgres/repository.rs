//! `PostgreSQL` implementation of the [`DocumentStore`] port.
//!
//! Each collection is a table holding a JSONB body per row. A table is
//! created the first time this store writes to it, in its own transaction
//! guarded by a transaction-scoped advisory lock keyed on the table name, so
//! concurrent first writes to a new collection do not race on the catalogue.
//! Collections known to exist are remembered per store, and every later
//! write is a single `INSERT ... RETURNING id`.

use super::models::{CollectionRow, DocumentRow, ExistsRow, InsertedIdRow};
use crate::document_store::{
    domain::{CollectionName, DocumentId, NewDocument, StoredDocument},
    ports::{DocumentStore, StorageError, StorageResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::Error as DieselError;
use diesel::sql_types::{BigInt, Jsonb, Text, Timestamptz, Uuid as SqlUuid};
use serde_json::Value;
use std::collections::HashSet;
use std::sync::{Arc, RwLock};

/// Serializes table creation per collection across connections.
const COLLECTION_LOCK_SQL: &str = "SELECT pg_advisory_xact_lock(hashtext($1))";

/// `PostgreSQL` connection pool type used by the document store.
pub type DocumentPgPool = Pool<ConnectionManager<PgConnection>>;

type SharedError = Arc<dyn std::error::Error + Send + Sync>;

/// `PostgreSQL`-backed document store.
///
/// Clones share the pool and the set of collections already created.
#[derive(Debug, Clone)]
pub struct PostgresDocumentStore {
    pool: DocumentPgPool,
    created: Arc<RwLock<HashSet<CollectionName>>>,
}

impl PostgresDocumentStore {
    /// Creates a new store from a `PostgreSQL` connection pool.
    #[must_use]
    pub fn new(pool: DocumentPgPool) -> Self {
        Self {
            pool,
            created: Arc::new(RwLock::new(HashSet::new())),
        }
    }

    async fn run_blocking<F, T>(
        &self,
        wrap: fn(SharedError) -> StorageError,
        f: F,
    ) -> StorageResult<T>
    where
        F: FnOnce(&mut PgConnection) -> StorageResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(|err| wrap(Arc::new(err)))?;
            f(&mut connection)
        })
        .await
        .map_err(|err| wrap(Arc::new(err)))?
    }
}

#[async_trait]
impl DocumentStore for PostgresDocumentStore {
    async fn insert_document(
        &self,
        collection: &CollectionName,
        document: NewDocument,
    ) -> StorageResult<DocumentId> {
        let target = collection.clone();
        let created = Arc::clone(&self.created);
        let (body, created_at) = document.into_parts();

        self.run_blocking(StorageError::Write, move |connection| {
            ensure_collection(connection, &created, &target)?;
            let row = diesel::sql_query(insert_document_sql(target.as_str()))
                .bind::<Jsonb, _>(Value::Object(body))
                .bind::<Timestamptz, _>(created_at)
                .get_result::<InsertedIdRow>(connection)
                .map_err(StorageError::write)?;
            Ok(DocumentId::from_uuid(row.id))
        })
        .await
    }

    async fn find_document(
        &self,
        collection: &CollectionName,
        id: DocumentId,
    ) -> StorageResult<Option<StoredDocument>> {
        let table = collection.as_str().to_owned();

        self.run_blocking(StorageError::Read, move |connection| {
            if !collection_exists(connection, &table)? {
                return Ok(None);
            }
            let row = diesel::sql_query(format!(
                "SELECT id, body, created_at FROM \"{table}\" WHERE id = $1"
            ))
            .bind::<SqlUuid, _>(id.into_inner())
            .get_result::<DocumentRow>(connection)
            .optional()
            .map_err(StorageError::read)?;
            row.map(row_to_document).transpose()
        })
        .await
    }

    async fn list_collections(&self, limit: usize) -> StorageResult<Vec<String>> {
        let bounded = i64::try_from(limit).map_err(StorageError::read)?;

        self.run_blocking(StorageError::Read, move |connection| {
            let rows = diesel::sql_query(concat!(
                "SELECT table_name::text AS name FROM information_schema.tables ",
                "WHERE table_schema = current_schema() AND table_type = 'BASE TABLE' ",
                "ORDER BY table_name LIMIT $1",
            ))
            .bind::<BigInt, _>(bounded)
            .load::<CollectionRow>(connection)
            .map_err(StorageError::read)?;
            Ok(rows.into_iter().map(|row| row.name).collect())
        })
        .await
    }
}

/// DDL for a collection table. The name must come from a [`CollectionName`].
fn create_collection_sql(table: &str) -> String {
    format!(
        concat!(
            "CREATE TABLE IF NOT EXISTS \"{table}\" (",
            "id UUID PRIMARY KEY DEFAULT gen_random_uuid(), ",
            "body JSONB NOT NULL, ",
            "created_at TIMESTAMPTZ NOT NULL)",
        ),
        table = table
    )
}

fn insert_document_sql(table: &str) -> String {
    format!("INSERT INTO \"{table}\" (body, created_at) VALUES ($1, $2) RETURNING id")
}

/// Creates the collection table once per store.
///
/// A table dropped behind the store's back is not recreated until the
/// process restarts.
fn ensure_collection(
    connection: &mut PgConnection,
    created: &RwLock<HashSet<CollectionName>>,
    collection: &CollectionName,
) -> StorageResult<()> {
    let known = created
        .read()
        .map_err(|err| StorageError::write(std::io::Error::other(err.to_string())))?
        .contains(collection);
    if known {
        return Ok(());
    }

    connection
        .transaction::<_, DieselError, _>(|tx| {
            diesel::sql_query(COLLECTION_LOCK_SQL)
                .bind::<Text, _>(collection.as_str())
                .execute(tx)?;
            diesel::sql_query(create_collection_sql(collection.as_str())).execute(tx)?;
            Ok(())
        })
        .map_err(StorageError::write)?;

    created
        .write()
        .map_err(|err| StorageError::write(std::io::Error::other(err.to_string())))?
        .insert(collection.clone());
    Ok(())
}

fn collection_exists(connection: &mut PgConnection, table: &str) -> StorageResult<bool> {
    let row = diesel::sql_query(concat!(
        "SELECT EXISTS (SELECT 1 FROM information_schema.tables ",
        "WHERE table_schema = current_schema() AND table_name = $1) AS present",
    ))
    .bind::<Text, _>(table)
    .get_result::<ExistsRow>(connection)
    .map_err(StorageError::read)?;
    Ok(row.present)
}

fn row_to_document(row: DocumentRow) -> StorageResult<StoredDocument> {
    let DocumentRow {
        id,
        body,
        created_at,
    } = row;

    match body {
        Value::Object(map) => Ok(StoredDocument::from_persisted(
            DocumentId::from_uuid(id),
            map,
            created_at,
        )),
        _ => Err(StorageError::read(std::io::Error::other(format!(
            "document {id} has a non-object body"
        )))),
    }
}
