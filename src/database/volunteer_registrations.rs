//! Repository for volunteer registrations.

use sqlx::PgPool;

use crate::database::models::{CreateVolunteerRegistration, VolunteerRegistration};
use crate::database::DatabaseError;

pub async fn list(pool: &PgPool) -> Result<Vec<VolunteerRegistration>, DatabaseError> {
    let rows = sqlx::query_as::<_, VolunteerRegistration>(
        "SELECT * FROM volunteer_registrations ORDER BY created_at DESC",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn create(
    pool: &PgPool,
    id: &str,
    payload: CreateVolunteerRegistration,
) -> Result<VolunteerRegistration, DatabaseError> {
    let row = sqlx::query_as::<_, VolunteerRegistration>(
        "INSERT INTO volunteer_registrations (id, grid_id, user_id) \
         VALUES ($1, $2, $3) RETURNING *",
    )
    .bind(id)
    .bind(payload.grid_id)
    .bind(payload.user_id)
    .fetch_one(pool)
    .await?;
    Ok(row)
}

/// Unconditional delete by id. Deleting an id that is already gone is not
/// distinguished from success.
pub async fn delete(pool: &PgPool, id: &str) -> Result<(), DatabaseError> {
    sqlx::query("DELETE FROM volunteer_registrations WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}
