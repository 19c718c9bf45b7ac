use chrono::NaiveDate;
use exemplar::Model;
use rusqlite::{Connection, OptionalExtension};
use sea_query::{enum_def, Expr, Query, SqliteQueryBuilder};
use sea_query_rusqlite::RusqliteBinder;
use serde::{Deserialize, Serialize};

use crate::types::Uuid;

/// One exercise record tied to a user. Never updated or deleted.
///
/// `user_id` is a weak reference: the row carries no foreign key and the
/// referenced user is resolved before any insert happens.
#[derive(Debug, Clone, PartialEq, Model, Serialize, Deserialize)]
#[table("exercise_log")]
#[check("../../../server/migrations/002-exercise-log/up.sql")]
#[enum_def]
pub struct ExerciseLog {
    pub id: Uuid,
    pub user_id: Uuid,
    pub description: String,
    pub duration: i64,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Model, Serialize, Deserialize)]
#[table("exercise_log")]
#[check("../../../server/migrations/002-exercise-log/up.sql")]
pub struct NewExerciseLog {
    pub id: Uuid,
    pub user_id: Uuid,
    pub description: String,
    pub duration: i64,
    pub date: NaiveDate,
}

impl NewExerciseLog {
    pub fn new<I: Into<Uuid>, T: Into<String>>(
        id: I,
        user_id: I,
        description: T,
        duration: i64,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            user_id: user_id.into(),
            description: description.into(),
            duration,
            date,
        }
    }
}

impl ExerciseLog {
    const COLUMNS: [ExerciseLogIden; 5] = [
        ExerciseLogIden::Id,
        ExerciseLogIden::UserId,
        ExerciseLogIden::Description,
        ExerciseLogIden::Duration,
        ExerciseLogIden::Date,
    ];

    pub fn fetch_by_id(conn: &Connection, id: &Uuid) -> Result<Option<ExerciseLog>, anyhow::Error> {
        let (sql, values) = Query::select()
            .columns(Self::COLUMNS)
            .from(ExerciseLogIden::Table)
            .and_where(Expr::col(ExerciseLogIden::Id).eq(id))
            .limit(1)
            .build_rusqlite(SqliteQueryBuilder);

        let mut stmt = conn.prepare_cached(&sql)?;
        let log = stmt
            .query_row(&*values.as_params(), ExerciseLog::from_row)
            .optional()?;
        Ok(log)
    }

    /// Logs for one user in the store's natural order, optionally narrowed to
    /// an inclusive date range and capped at `limit` rows. A `limit` of 0 is
    /// passed through and yields no rows.
    pub fn fetch_for_user(
        conn: &Connection,
        user_id: &Uuid,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
        limit: Option<u64>,
    ) -> Result<Vec<ExerciseLog>, anyhow::Error> {
        let mut query = Query::select();
        query
            .columns(Self::COLUMNS)
            .from(ExerciseLogIden::Table)
            .and_where(Expr::col(ExerciseLogIden::UserId).eq(user_id));

        if let Some(from) = from {
            query.and_where(Expr::col(ExerciseLogIden::Date).gte(from));
        }
        if let Some(to) = to {
            query.and_where(Expr::col(ExerciseLogIden::Date).lte(to));
        }
        if let Some(limit) = limit {
            query.limit(limit);
        }

        let (sql, values) = query.build_rusqlite(SqliteQueryBuilder);

        let mut stmt = conn.prepare_cached(&sql)?;
        let logs = stmt
            .query_map(&*values.as_params(), ExerciseLog::from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(logs)
    }

    pub fn create(
        conn: &mut Connection,
        new_log: NewExerciseLog,
    ) -> Result<ExerciseLog, anyhow::Error> {
        let id = new_log.id;
        let tx = conn.transaction()?;
        let log = {
            new_log.insert(&tx)?;
            ExerciseLog::fetch_by_id(&tx, &id)?
                .ok_or_else(|| anyhow::anyhow!("exercise log {id} missing after insert"))?
        };
        tx.commit()?;

        Ok(log)
    }
}
