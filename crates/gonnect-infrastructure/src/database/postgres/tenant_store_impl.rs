// ============================================================================
// Gonnect Infrastructure - PostgreSQL Tenant Store
// File: crates/gonnect-infrastructure/src/database/postgres/tenant_store_impl.rs
// ============================================================================

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use tracing::{debug, error};

use gonnect_core::domain::Tenant;
use gonnect_core::error::DomainError;
use gonnect_core::repositories::TenantStore;

pub struct PgTenantStore {
    pool: PgPool,
    table: String,
    list_sql: String,
    save_sql: String,
}

impl PgTenantStore {
    /// Bind the store to `table`, which may be schema-qualified
    /// (`public.tenants`). The name is validated and quoted once here.
    pub fn new(pool: PgPool, table: &str) -> Result<Self, DomainError> {
        let quoted = quote_table_name(table)?;
        Ok(Self {
            pool,
            table: table.to_string(),
            list_sql: list_query(&quoted),
            save_sql: save_query(&quoted),
        })
    }

    pub fn table(&self) -> &str {
        &self.table
    }
}

// Internal row type for SQLx mapping
#[derive(Debug, FromRow)]
struct TenantRow {
    pub id: i64,
    pub client_key: Option<String>,
    pub base_url: String,
    pub product_type: Option<String>,
    pub description: Option<String>,
    pub addon_installed: bool,
    pub context: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<TenantRow> for Tenant {
    fn from(row: TenantRow) -> Self {
        Tenant {
            id: row.id,
            client_key: row.client_key.unwrap_or_default(),
            base_url: row.base_url,
            product_type: row.product_type.unwrap_or_default(),
            description: row.description.unwrap_or_default(),
            addon_installed: row.addon_installed,
            context: row.context.unwrap_or_default(),
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[async_trait]
impl TenantStore for PgTenantStore {
    async fn list(&self) -> Result<Vec<Tenant>, DomainError> {
        let mut tx = self.pool.begin().await.map_err(database_error)?;

        let rows: Vec<TenantRow> = sqlx::query_as(&self.list_sql)
            .fetch_all(&mut *tx)
            .await
            .map_err(|e: sqlx::Error| {
                error!("Database error listing tenants: {}", e);
                DomainError::DatabaseError(e.to_string())
            })?;

        tx.commit().await.map_err(database_error)?;

        debug!(table = %self.table, count = rows.len(), "listed tenants");
        Ok(rows.into_iter().map(Tenant::from).collect())
    }

    async fn save(&self, tenant: &Tenant) -> Result<(), DomainError> {
        let mut tx = self.pool.begin().await.map_err(database_error)?;

        let context = stored_context(&tenant.context);

        let result = sqlx::query(&self.save_sql)
            .bind(tenant.id)
            .bind(&tenant.base_url)
            .bind(tenant.addon_installed)
            .bind(context)
            .bind(Utc::now())
            .execute(&mut *tx)
            .await
            .map_err(|e: sqlx::Error| {
                error!("Database error saving tenant {}: {}", tenant.id, e);
                DomainError::DatabaseError(e.to_string())
            })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::TenantNotFound(tenant.id));
        }

        tx.commit().await.map_err(database_error)?;

        debug!(table = %self.table, id = tenant.id, "saved tenant");
        Ok(())
    }
}

fn database_error(e: sqlx::Error) -> DomainError {
    error!("Database transaction error: {}", e);
    DomainError::DatabaseError(e.to_string())
}

/// Empty context is stored as SQL NULL; anything else goes to the jsonb cast.
fn stored_context(context: &str) -> Option<&str> {
    if context.is_empty() {
        None
    } else {
        Some(context)
    }
}

fn list_query(table: &str) -> String {
    format!(
        r#"
            SELECT
                id, client_key, base_url, product_type, description,
                addon_installed, context::text AS context,
                created_at, updated_at
            FROM {table}
            ORDER BY created_at, id
            "#
    )
}

fn save_query(table: &str) -> String {
    format!(
        r#"
            UPDATE {table}
            SET
                base_url = $2,
                addon_installed = $3,
                context = $4::jsonb,
                updated_at = $5
            WHERE id = $1
            "#
    )
}

/// Validate and double-quote a (possibly schema-qualified) table name.
fn quote_table_name(table: &str) -> Result<String, DomainError> {
    let table = table.trim();
    if table.is_empty() {
        return Err(DomainError::InvalidTableName(table.to_string()));
    }

    let mut quoted = Vec::new();
    for part in table.split('.') {
        let mut chars = part.chars();
        let valid = match chars.next() {
            Some(first) if first.is_ascii_alphabetic() || first == '_' => {
                chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
            }
            _ => false,
        };
        if !valid {
            return Err(DomainError::InvalidTableName(table.to_string()));
        }
        quoted.push(format!("\"{}\"", part));
    }
    if quoted.len() > 2 {
        return Err(DomainError::InvalidTableName(table.to_string()));
    }
    Ok(quoted.join("."))
}
