//! sqlx integration. Rendered statements use `?` placeholders and backtick
//! identifiers, which MySQL and SQLite both accept.

use sqlx::{Arguments, error::BoxDynError};

use crate::bind::{Bind, Binds};

/// Databases the builders can run on. Binds are encoded in order and the
/// first value the database cannot take fails the whole statement, so no
/// placeholder ever receives its neighbour's value.
pub trait EncodeBinds: sqlx::Database {
    type Encoded<'q>: sqlx::IntoArguments<'q, Self>;

    fn encode_binds<'q>(binds: Binds) -> Result<Self::Encoded<'q>, BoxDynError>;
}

#[cfg(feature = "mysql")]
impl EncodeBinds for sqlx::MySql {
    type Encoded<'q> = sqlx::mysql::MySqlArguments;

    fn encode_binds<'q>(binds: Binds) -> Result<Self::Encoded<'q>, BoxDynError> {
        let mut arguments = sqlx::mysql::MySqlArguments::default();
        for bind in binds {
            match bind {
                Bind::Null => Arguments::add(&mut arguments, None::<String>)?,
                Bind::String(value) => Arguments::add(&mut arguments, value)?,
                Bind::StaticString(value) => Arguments::add(&mut arguments, value)?,
                Bind::Bool(value) => Arguments::add(&mut arguments, value)?,
                Bind::F32(value) => Arguments::add(&mut arguments, value)?,
                Bind::F64(value) => Arguments::add(&mut arguments, value)?,
                Bind::I8(value) => Arguments::add(&mut arguments, value)?,
                Bind::I16(value) => Arguments::add(&mut arguments, value)?,
                Bind::I32(value) => Arguments::add(&mut arguments, value)?,
                Bind::I64(value) => Arguments::add(&mut arguments, value)?,
                Bind::U8(value) => Arguments::add(&mut arguments, value)?,
                Bind::U16(value) => Arguments::add(&mut arguments, value)?,
                Bind::U32(value) => Arguments::add(&mut arguments, value)?,
                Bind::U64(value) => Arguments::add(&mut arguments, value)?,
            }
        }
        Ok(arguments)
    }
}

#[cfg(feature = "sqlite")]
impl EncodeBinds for sqlx::Sqlite {
    type Encoded<'q> = sqlx::sqlite::SqliteArguments<'q>;

    fn encode_binds<'q>(binds: Binds) -> Result<Self::Encoded<'q>, BoxDynError> {
        let mut arguments = sqlx::sqlite::SqliteArguments::default();
        for bind in binds {
            match bind {
                Bind::Null => Arguments::add(&mut arguments, None::<String>)?,
                Bind::String(value) => Arguments::add(&mut arguments, value)?,
                Bind::StaticString(value) => Arguments::add(&mut arguments, value)?,
                Bind::Bool(value) => Arguments::add(&mut arguments, value)?,
                Bind::F32(value) => Arguments::add(&mut arguments, value)?,
                Bind::F64(value) => Arguments::add(&mut arguments, value)?,
                Bind::I8(value) => Arguments::add(&mut arguments, value)?,
                Bind::I16(value) => Arguments::add(&mut arguments, value)?,
                Bind::I32(value) => Arguments::add(&mut arguments, value)?,
                Bind::I64(value) => Arguments::add(&mut arguments, value)?,
                Bind::U8(value) => Arguments::add(&mut arguments, value)?,
                Bind::U16(value) => Arguments::add(&mut arguments, value)?,
                Bind::U32(value) => Arguments::add(&mut arguments, value)?,
                // sqlite integers are signed 64 bits
                Bind::U64(value) => Arguments::add(&mut arguments, i64::try_from(value)?)?,
            }
        }
        Ok(arguments)
    }
}

pub(crate) async fn execute<'c, DB, E>(
    sql: &str,
    binds: Binds,
    executor: E,
) -> Result<<DB as sqlx::Database>::QueryResult, sqlx::Error>
where
    DB: EncodeBinds,
    E: sqlx::Executor<'c, Database = DB>,
{
    tracing::debug!(sql, binds = binds.len(), "executing statement");
    let arguments = DB::encode_binds(binds).map_err(|error| {
        tracing::warn!(%error, "failed to encode binds");
        sqlx::Error::Encode(error)
    })?;
    sqlx::query_with::<DB, _>(sql, arguments)
        .execute(executor)
        .await
}

#[cfg(all(test, feature = "sqlite"))]
mod tests {
    use sqlx::Sqlite;

    use super::*;

    #[test]
    fn test_sqlite_keeps_every_bind() {
        let binds = Binds::Many(vec![Bind::U64(7), Bind::Null, Bind::I32(5)]);
        let arguments = Sqlite::encode_binds(binds).unwrap();
        assert_eq!(3, Arguments::len(&arguments));
    }

    #[test]
    fn test_sqlite_u64_out_of_range() {
        let binds = Binds::Many(vec![Bind::U64(u64::MAX), Bind::I32(5)]);
        assert!(Sqlite::encode_binds(binds).is_err());
    }
}
