//! Repository for disaster areas, including the partial-update builder.

use serde_json::{Map, Value};
use sqlx::postgres::PgArguments;
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::database::models::{CreateDisasterArea, DisasterArea};
use crate::database::DatabaseError;

/// The fixed set of mutable columns. Every key of a partial update must
/// resolve into this enumeration before any SQL is built; the column text
/// in the statement always comes from [`UpdatableColumn::as_column`],
/// never from caller input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdatableColumn {
    Name,
    Township,
    County,
    CenterLat,
    CenterLng,
    Bounds,
    GridSize,
    Status,
    Description,
}

impl UpdatableColumn {
    pub const ALL: [UpdatableColumn; 9] = [
        UpdatableColumn::Name,
        UpdatableColumn::Township,
        UpdatableColumn::County,
        UpdatableColumn::CenterLat,
        UpdatableColumn::CenterLng,
        UpdatableColumn::Bounds,
        UpdatableColumn::GridSize,
        UpdatableColumn::Status,
        UpdatableColumn::Description,
    ];

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "name" => Some(UpdatableColumn::Name),
            "township" => Some(UpdatableColumn::Township),
            "county" => Some(UpdatableColumn::County),
            "center_lat" => Some(UpdatableColumn::CenterLat),
            "center_lng" => Some(UpdatableColumn::CenterLng),
            "bounds" => Some(UpdatableColumn::Bounds),
            "grid_size" => Some(UpdatableColumn::GridSize),
            "status" => Some(UpdatableColumn::Status),
            "description" => Some(UpdatableColumn::Description),
            _ => None,
        }
    }

    pub fn as_column(&self) -> &'static str {
        match self {
            UpdatableColumn::Name => "name",
            UpdatableColumn::Township => "township",
            UpdatableColumn::County => "county",
            UpdatableColumn::CenterLat => "center_lat",
            UpdatableColumn::CenterLng => "center_lng",
            UpdatableColumn::Bounds => "bounds",
            UpdatableColumn::GridSize => "grid_size",
            UpdatableColumn::Status => "status",
            UpdatableColumn::Description => "description",
        }
    }
}

pub async fn list(pool: &PgPool) -> Result<Vec<DisasterArea>, DatabaseError> {
    let rows = sqlx::query_as::<_, DisasterArea>("SELECT * FROM disaster_areas ORDER BY created_at")
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

pub async fn create(
    pool: &PgPool,
    payload: CreateDisasterArea,
) -> Result<DisasterArea, DatabaseError> {
    let id = Uuid::new_v4().to_string();
    let row = sqlx::query_as::<_, DisasterArea>(
        "INSERT INTO disaster_areas \
         (id, name, township, county, center_lat, center_lng, bounds, grid_size, status, description) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) RETURNING *",
    )
    .bind(id)
    .bind(payload.name)
    .bind(payload.township)
    .bind(payload.county)
    .bind(payload.center_lat)
    .bind(payload.center_lng)
    .bind(payload.bounds.map(Json))
    .bind(payload.grid_size)
    .bind(payload.status)
    .bind(payload.description)
    .fetch_one(pool)
    .await?;
    Ok(row)
}

pub async fn get(pool: &PgPool, id: &str) -> Result<Option<DisasterArea>, DatabaseError> {
    let row = sqlx::query_as::<_, DisasterArea>("SELECT * FROM disaster_areas WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

/// Apply a partial update of exactly the supplied fields.
///
/// Field names are resolved against the allow-list up front, so a single
/// unknown key fails the whole operation before any write is attempted.
/// An empty field map is a no-op that returns the current record. `None`
/// means no row matched the id.
pub async fn update(
    pool: &PgPool,
    id: &str,
    fields: Map<String, Value>,
) -> Result<Option<DisasterArea>, DatabaseError> {
    let resolved = resolve_fields(fields)?;
    if resolved.is_empty() {
        return get(pool, id).await;
    }

    let columns: Vec<UpdatableColumn> = resolved.iter().map(|(c, _)| *c).collect();
    let sql = build_update_sql(&columns);

    let mut q = sqlx::query_as::<_, DisasterArea>(&sql);
    for (_, value) in &resolved {
        q = bind_value(q, value);
    }
    let row = q.bind(id).fetch_optional(pool).await?;
    Ok(row)
}

pub async fn delete(pool: &PgPool, id: &str) -> Result<bool, DatabaseError> {
    let result = sqlx::query("DELETE FROM disaster_areas WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

/// Resolve every field name against the allow-list, all-or-nothing.
fn resolve_fields(
    fields: Map<String, Value>,
) -> Result<Vec<(UpdatableColumn, Value)>, DatabaseError> {
    fields
        .into_iter()
        .map(|(key, value)| match UpdatableColumn::from_key(&key) {
            Some(column) => Ok((column, value)),
            None => Err(DatabaseError::InvalidFieldName(key)),
        })
        .collect()
}

/// One UPDATE statement over only the resolved columns. `updated_at` rides
/// along; row-level atomicity comes from the store executing this as a
/// single statement.
fn build_update_sql(columns: &[UpdatableColumn]) -> String {
    let set_clauses: Vec<String> = columns
        .iter()
        .enumerate()
        .map(|(i, column)| format!("\"{}\" = ${}", column.as_column(), i + 1))
        .collect();

    format!(
        "UPDATE disaster_areas SET {}, updated_at = now() WHERE id = ${} RETURNING *",
        set_clauses.join(", "),
        columns.len() + 1
    )
}

fn bind_value<'q>(
    q: sqlx::query::QueryAs<'q, sqlx::Postgres, DisasterArea, PgArguments>,
    v: &'q Value,
) -> sqlx::query::QueryAs<'q, sqlx::Postgres, DisasterArea, PgArguments> {
    match v {
        Value::Null => {
            let none: Option<String> = None;
            q.bind(none)
        }
        Value::Bool(b) => q.bind(*b),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                q.bind(i)
            } else if let Some(u) = n.as_u64() {
                q.bind(u as i64)
            } else if let Some(f) = n.as_f64() {
                q.bind(f)
            } else {
                q.bind(n.to_string())
            }
        }
        Value::String(s) => q.bind(s.as_str()),
        Value::Array(_) | Value::Object(_) => q.bind(v.clone()), // JSONB
    }
}
