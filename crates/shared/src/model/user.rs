use exemplar::Model;
use rusqlite::{Connection, OptionalExtension};
use sea_query::{enum_def, Expr, Query, SqliteQueryBuilder};
use sea_query_rusqlite::RusqliteBinder;
use serde::{Deserialize, Serialize};

use crate::types::Uuid;

#[derive(Debug, Clone, PartialEq, Model, Serialize, Deserialize)]
#[table("user")]
#[check("../../../server/migrations/001-user/up.sql")]
#[enum_def]
pub struct User {
    pub id: Uuid,
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, Model, Serialize, Deserialize)]
#[table("user")]
#[check("../../../server/migrations/001-user/up.sql")]
pub struct NewUser {
    pub id: Uuid,
    pub username: String,
}

impl NewUser {
    pub fn new<I: Into<Uuid>, T: Into<String>>(id: I, username: T) -> Self {
        Self {
            id: id.into(),
            username: username.into(),
        }
    }
}

impl User {
    pub fn fetch_by_id(conn: &Connection, id: &Uuid) -> Result<Option<User>, anyhow::Error> {
        let (sql, values) = Query::select()
            .columns([UserIden::Id, UserIden::Username])
            .from(UserIden::Table)
            .and_where(Expr::col(UserIden::Id).eq(id))
            .limit(1)
            .build_rusqlite(SqliteQueryBuilder);

        let mut stmt = conn.prepare_cached(&sql)?;
        let user = stmt
            .query_row(&*values.as_params(), User::from_row)
            .optional()?;
        Ok(user)
    }

    pub fn fetch_all(conn: &Connection) -> Result<Vec<User>, anyhow::Error> {
        let (sql, values) = Query::select()
            .columns([UserIden::Id, UserIden::Username])
            .from(UserIden::Table)
            .build_rusqlite(SqliteQueryBuilder);

        let mut stmt = conn.prepare_cached(&sql)?;
        let users = stmt
            .query_map(&*values.as_params(), User::from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(users)
    }

    pub fn create(conn: &mut Connection, new_user: NewUser) -> Result<User, anyhow::Error> {
        let id = new_user.id;
        let tx = conn.transaction()?;
        let user = {
            new_user.insert(&tx)?;
            User::fetch_by_id(&tx, &id)?
                .ok_or_else(|| anyhow::anyhow!("user {id} missing after insert"))?
        };
        tx.commit()?;

        Ok(user)
    }
}
