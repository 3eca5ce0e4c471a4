use async_trait::async_trait;
use fish_supply_db::models::ClientModel;
use fish_supply_db::repository::LoadIds;
use sqlx::{postgres::PgRow, PgPool, Postgres, Row};
use std::error::Error;

use crate::utils::{get_heapless_string, TryFromRow};

pub(crate) const CLIENT_COLUMNS: &str = "client_id, name, contact, address, category";

pub struct ClientRepositoryImpl {
    pub pool: PgPool,
}

impl ClientRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl TryFromRow<PgRow> for ClientModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(ClientModel {
            client_id: get_heapless_string(row, "client_id")?,
            name: get_heapless_string(row, "name")?,
            contact: get_heapless_string(row, "contact")?,
            address: get_heapless_string(row, "address")?,
            category: get_heapless_string(row, "category")?,
        })
    }
}

#[async_trait]
impl LoadIds<Postgres> for ClientRepositoryImpl {
    async fn load_ids(&self) -> Result<Vec<String>, Box<dyn Error + Send + Sync>> {
        let rows = sqlx::query("SELECT client_id FROM client")
            .fetch_all(&self.pool)
            .await?;
        let mut ids = Vec::with_capacity(rows.len());
        for row in rows {
            ids.push(row.try_get("client_id")?);
        }
        Ok(ids)
    }
}
