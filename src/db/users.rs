// Timecard
// Copyright 2026 The Timecard Authors
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not
// use this file except in compliance with the License.  You may obtain a copy
// of the License at:
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS, WITHOUT
// WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.  See the
// License for the specific language governing permissions and limitations
// under the License.

//! Database layer for the users collection.

use crate::db::{postgres, sqlite, DbError, DbResult, Executor};
use crate::model::{Hours, User, UserId, Username};
use futures::TryStreamExt;
use sqlx::postgres::PgRow;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

impl TryFrom<PgRow> for User {
    type Error = DbError;

    fn try_from(row: PgRow) -> Result<User, Self::Error> {
        let id: i64 = row.try_get("id").map_err(postgres::map_sqlx_error)?;
        let name: String = row.try_get("name").map_err(postgres::map_sqlx_error)?;
        let hours_worked: i64 = row.try_get("hours_worked").map_err(postgres::map_sqlx_error)?;
        Ok(User::new(UserId::new(id), Username::new(name)?, Hours::from_i64(hours_worked)?))
    }
}

impl TryFrom<SqliteRow> for User {
    type Error = DbError;

    fn try_from(row: SqliteRow) -> Result<User, Self::Error> {
        let id: i64 = row.try_get("id").map_err(sqlite::map_sqlx_error)?;
        let name: String = row.try_get("name").map_err(sqlite::map_sqlx_error)?;
        let hours_worked: i64 = row.try_get("hours_worked").map_err(sqlite::map_sqlx_error)?;
        Ok(User::new(UserId::new(id), Username::new(name)?, Hours::from_i64(hours_worked)?))
    }
}

/// Validates that a statement affecting the user `id` only touched 1 row.
fn ensure_one_row(id: UserId, affected: u64, action: &str) -> DbResult<()> {
    match affected {
        0 => Err(DbError::NotFound),
        1 => Ok(()),
        _ => Err(DbError::BackendError(format!(
            "{} of user {} affected {} rows",
            action,
            id.as_i64(),
            affected
        ))),
    }
}

/// Initializes the database schema.
pub async fn init_schema(ex: &mut Executor) -> DbResult<()> {
    match ex {
        Executor::Postgres(ref mut ex) => {
            postgres::run_schema(ex, include_str!("postgres.sql")).await
        }

        Executor::Sqlite(ref mut ex) => sqlite::run_schema(ex, include_str!("sqlite.sql")).await,
    }
}

/// Fetches all users sorted by their identifier.
pub(crate) async fn get_users(ex: &mut Executor) -> DbResult<Vec<User>> {
    let query_str = "SELECT id, name, hours_worked FROM users ORDER BY id";
    let mut users = vec![];
    match ex {
        Executor::Postgres(ref mut ex) => {
            let mut rows = sqlx::query(query_str).fetch(ex.conn());
            while let Some(row) = rows.try_next().await.map_err(postgres::map_sqlx_error)? {
                users.push(User::try_from(row)?);
            }
        }

        Executor::Sqlite(ref mut ex) => {
            let mut rows = sqlx::query(query_str).fetch(ex.conn());
            while let Some(row) = rows.try_next().await.map_err(sqlite::map_sqlx_error)? {
                users.push(User::try_from(row)?);
            }
        }
    }
    Ok(users)
}

/// Fetches the user with identifier `id`.
pub(crate) async fn get_user(ex: &mut Executor, id: UserId) -> DbResult<User> {
    match ex {
        Executor::Postgres(ref mut ex) => {
            let query_str = "SELECT id, name, hours_worked FROM users WHERE id = $1";
            let row = sqlx::query(query_str)
                .bind(id.as_i64())
                .fetch_one(ex.conn())
                .await
                .map_err(postgres::map_sqlx_error)?;
            User::try_from(row)
        }

        Executor::Sqlite(ref mut ex) => {
            let query_str = "SELECT id, name, hours_worked FROM users WHERE id = ?";
            let row = sqlx::query(query_str)
                .bind(id.as_i64())
                .fetch_one(ex.conn())
                .await
                .map_err(sqlite::map_sqlx_error)?;
            User::try_from(row)
        }
    }
}

/// Stores a new user named `name` with a zeroed hours counter and returns it with its
/// database-assigned identifier.
pub(crate) async fn create_user(ex: &mut Executor, name: &Username) -> DbResult<User> {
    let id = match ex {
        Executor::Postgres(ref mut ex) => {
            let query_str = "INSERT INTO users (name, hours_worked) VALUES ($1, $2) RETURNING id";
            let row = sqlx::query(query_str)
                .bind(name.as_str())
                .bind(Hours::ZERO.as_i64())
                .fetch_one(ex.conn())
                .await
                .map_err(postgres::map_sqlx_error)?;
            let id: i64 = row.try_get("id").map_err(postgres::map_sqlx_error)?;
            id
        }

        Executor::Sqlite(ref mut ex) => {
            let query_str = "INSERT INTO users (name, hours_worked) VALUES (?, ?)";
            let done = sqlx::query(query_str)
                .bind(name.as_str())
                .bind(Hours::ZERO.as_i64())
                .execute(ex.conn())
                .await
                .map_err(sqlite::map_sqlx_error)?;
            done.last_insert_rowid()
        }
    };
    Ok(User::new(UserId::new(id), name.clone(), Hours::ZERO))
}

/// Persists the mutable fields of `user`, addressed by its identifier.
pub(crate) async fn update_user(ex: &mut Executor, user: &User) -> DbResult<()> {
    let rows_affected = match ex {
        Executor::Postgres(ref mut ex) => {
            let query_str = "UPDATE users SET name = $1, hours_worked = $2 WHERE id = $3";
            sqlx::query(query_str)
                .bind(user.name().as_str())
                .bind(user.hours_worked().as_i64())
                .bind(user.id().as_i64())
                .execute(ex.conn())
                .await
                .map_err(postgres::map_sqlx_error)?
                .rows_affected()
        }

        Executor::Sqlite(ref mut ex) => {
            let query_str = "UPDATE users SET name = ?, hours_worked = ? WHERE id = ?";
            sqlx::query(query_str)
                .bind(user.name().as_str())
                .bind(user.hours_worked().as_i64())
                .bind(user.id().as_i64())
                .execute(ex.conn())
                .await
                .map_err(sqlite::map_sqlx_error)?
                .rows_affected()
        }
    };
    ensure_one_row(*user.id(), rows_affected, "Update")
}

/// Deletes the user with identifier `id`.
pub(crate) async fn delete_user(ex: &mut Executor, id: UserId) -> DbResult<()> {
    let rows_affected = match ex {
        Executor::Postgres(ref mut ex) => {
            let query_str = "DELETE FROM users WHERE id = $1";
            sqlx::query(query_str)
                .bind(id.as_i64())
                .execute(ex.conn())
                .await
                .map_err(postgres::map_sqlx_error)?
                .rows_affected()
        }

        Executor::Sqlite(ref mut ex) => {
            let query_str = "DELETE FROM users WHERE id = ?";
            sqlx::query(query_str)
                .bind(id.as_i64())
                .execute(ex.conn())
                .await
                .map_err(sqlite::map_sqlx_error)?
                .rows_affected()
        }
    };
    ensure_one_row(id, rows_affected, "Deletion")
}

/// Deletes every stored user.  Gaps in the identifier sequence are preserved.
pub(crate) async fn delete_all_users(ex: &mut Executor) -> DbResult<()> {
    let query_str = "DELETE FROM users";
    match ex {
        Executor::Postgres(ref mut ex) => {
            sqlx::query(query_str)
                .execute(ex.conn())
                .await
                .map_err(postgres::map_sqlx_error)?;
        }

        Executor::Sqlite(ref mut ex) => {
            sqlx::query(query_str)
                .execute(ex.conn())
                .await
                .map_err(sqlite::map_sqlx_error)?;
        }
    }
    Ok(())
}
