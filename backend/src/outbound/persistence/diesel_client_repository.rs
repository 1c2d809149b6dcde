//! PostgreSQL-backed `ClientRepository` implementation using Diesel ORM.
//!
//! Reads join `categories`; writes reload the joined row so callers always
//! receive the category alongside the client.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use diesel_async::{AsyncPgConnection, RunQueryDsl};

use crate::domain::ports::{ClientRepository, ClientRepositoryError};
use crate::domain::{CategoryId, Client, ClientDraft, ClientId};

use super::diesel_error_mapping::{is_foreign_key_violation, map_diesel_error, map_pool_error};
use super::models::{CategoryRow, ClientRow, ClientUpdate, NewClientRow};
use super::pool::{DbPool, PoolError};
use super::schema::{categories, clients};

/// Diesel-backed implementation of the `ClientRepository` port.
#[derive(Clone)]
pub struct DieselClientRepository {
    pool: DbPool,
}

impl DieselClientRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn pool_error(error: PoolError) -> ClientRepositoryError {
    map_pool_error(error, ClientRepositoryError::connection)
}

fn diesel_error(error: diesel::result::Error) -> ClientRepositoryError {
    map_diesel_error(
        error,
        ClientRepositoryError::query,
        ClientRepositoryError::connection,
    )
}

/// Like [`diesel_error`], but reports a foreign key violation as the draft's
/// missing category.
fn write_error(error: diesel::result::Error, category_id: CategoryId) -> ClientRepositoryError {
    if is_foreign_key_violation(&error) {
        ClientRepositoryError::missing_category(category_id)
    } else {
        diesel_error(error)
    }
}

fn joined((client, category): (ClientRow, CategoryRow)) -> Result<Client, ClientRepositoryError> {
    client
        .into_client(Some(category))
        .map_err(ClientRepositoryError::query)
}

async fn load_joined<C>(
    conn: &mut C,
    id: ClientId,
) -> Result<Option<Client>, ClientRepositoryError>
where
    C: diesel_async::AsyncConnection<Backend = diesel::pg::Pg> + Send,
{
    let row: Option<(ClientRow, CategoryRow)> = clients::table
        .inner_join(categories::table)
        .filter(clients::client_id.eq(id.get()))
        .select((ClientRow::as_select(), CategoryRow::as_select()))
        .first(conn)
        .await
        .optional()
        .map_err(diesel_error)?;
    row.map(joined).transpose()
}

async fn reload(conn: &mut AsyncPgConnection, id: ClientId) -> Result<Client, ClientRepositoryError> {
    load_joined(conn, id)
        .await?
        .ok_or_else(|| ClientRepositoryError::query(format!("client {id} vanished after write")))
}

#[async_trait]
impl ClientRepository for DieselClientRepository {
    async fn list(&self) -> Result<Vec<Client>, ClientRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let rows: Vec<(ClientRow, CategoryRow)> = clients::table
            .inner_join(categories::table)
            .select((ClientRow::as_select(), CategoryRow::as_select()))
            .order(clients::client_id.asc())
            .load(&mut conn)
            .await
            .map_err(diesel_error)?;
        rows.into_iter().map(joined).collect()
    }

    async fn find_by_id(&self, id: ClientId) -> Result<Option<Client>, ClientRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        load_joined(&mut *conn, id).await
    }

    async fn insert(
        &self,
        draft: &ClientDraft,
        created_on: DateTime<Utc>,
    ) -> Result<Client, ClientRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let category_id = draft.category_id();
        let id: i32 = diesel::insert_into(clients::table)
            .values(&NewClientRow::from_draft(draft, created_on))
            .returning(clients::client_id)
            .get_result(&mut conn)
            .await
            .map_err(|error| write_error(error, category_id))?;
        reload(&mut *conn, ClientId::new(id)).await
    }

    async fn save(&self, client: &Client) -> Result<Client, ClientRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let updated = diesel::update(clients::table.find(client.id.get()))
            .set(ClientUpdate::from(client))
            .execute(&mut conn)
            .await
            .map_err(|error| write_error(error, client.category_id))?;
        if updated == 0 {
            return Err(ClientRepositoryError::query(format!(
                "client {} vanished before update",
                client.id
            )));
        }
        reload(&mut *conn, client.id).await
    }

    async fn remove(&self, id: ClientId) -> Result<(), ClientRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        diesel::delete(clients::table.find(id.get()))
            .execute(&mut conn)
            .await
            .map_err(diesel_error)?;
        Ok(())
    }
}
