use dba::{Bind, CompositeClause, DeleteBuilder, Error, SetClause, UpdateBuilder, expr};
use indexmap::IndexMap;

#[test]
fn delete_end_to_end() {
    let (sql, binds) = DeleteBuilder::new()
        .table("users")
        .where_raw("id = ?", 5)
        .to_sql()
        .unwrap();
    assert_eq!("DELETE FROM `users` WHERE id = ?", sql);
    assert_eq!(vec![Bind::I32(5)], binds.into_vec());
}

#[test]
fn update_end_to_end() {
    let (sql, binds) = UpdateBuilder::new()
        .table("users")
        .set("name", "bob")
        .set("age", 30)
        .where_raw("id = ?", 5)
        .to_sql()
        .unwrap();
    assert_eq!("UPDATE `users` SET name=?, age=? WHERE id = ?", sql);
    assert_eq!(
        vec![Bind::String("bob".to_owned()), Bind::I32(30), Bind::I32(5)],
        binds.into_vec()
    );
}

#[test]
fn delete_starts_with_prefix() {
    let (sql, binds) = DeleteBuilder::new()
        .prefix("/* purge ? */", "nightly")
        .table("logs")
        .where_raw("created_at < ?", 1_600_000_000i64)
        .to_sql()
        .unwrap();
    assert!(sql.starts_with("/* purge ? */ DELETE FROM `logs`"));
    assert_eq!(Bind::String("nightly".to_owned()), binds.as_slice()[0]);
}

#[test]
fn missing_where_is_rejected() {
    let err = DeleteBuilder::new().table("users").to_sql().unwrap_err();
    assert_eq!("delete statements must have WHERE condition", err.to_string());
    let err = UpdateBuilder::new()
        .table("users")
        .set("a", 1)
        .to_sql()
        .unwrap_err();
    assert_eq!("update statements must have WHERE condition", err.to_string());
}

#[test]
fn update_without_set_is_rejected() {
    let err = UpdateBuilder::new()
        .table("users")
        .where_raw("id = ?", 1)
        .to_sql()
        .unwrap_err();
    assert!(matches!(err, Error::MissingRequiredColumns));
    assert_eq!("update statements must have at least one Set", err.to_string());
}

#[test]
fn several_where_fragments_are_parenthesized() {
    let (sql, _) = DeleteBuilder::new()
        .table("sessions")
        .where_raw("user_id = ? OR admin = 1", 3)
        .where_raw("expired = ?", true)
        .to_sql()
        .unwrap();
    assert_eq!(
        "DELETE FROM `sessions` WHERE (user_id = ? OR admin = 1) AND (expired = ?)",
        sql
    );
}

#[test]
fn where_clause_resets_fragments() {
    let mut builder = UpdateBuilder::new();
    builder
        .table("accounts")
        .set("locked", true)
        .where_raw("a = ?", 1)
        .where_raw("b = ?", 2)
        .where_clause(
            CompositeClause::any()
                .with(expr("failures > ?", 5))
                .with(expr("banned = ?", true)),
        )
        .unwrap();
    let (sql, binds) = builder.to_sql().unwrap();
    assert_eq!(
        "UPDATE `accounts` SET locked=? WHERE (failures > ? OR banned = ?)",
        sql
    );
    assert_eq!(
        vec![Bind::Bool(true), Bind::I32(5), Bind::Bool(true)],
        binds.into_vec()
    );
}

#[test]
fn limit_zero_differs_from_unset() {
    let mut builder = DeleteBuilder::new();
    builder.table("t").where_raw("x = ?", 1);
    let (unset, _) = builder.to_sql().unwrap();
    assert_eq!("DELETE FROM `t` WHERE x = ?", unset);
    builder.limit(0);
    let (zero, _) = builder.to_sql().unwrap();
    assert_eq!("DELETE FROM `t` WHERE x = ? LIMIT 0", zero);
}

#[test]
fn rendering_twice_gives_same_output() {
    let mut builder = UpdateBuilder::new();
    builder
        .table("items")
        .set("qty", 0)
        .set_clause(SetClause::raw("version", "version + ?", 1))
        .where_in("id", [1, 2, 3])
        .order_by_asc("id")
        .limit(3);
    let first = builder.to_sql().unwrap();
    let second = builder.to_sql().unwrap();
    assert_eq!(first, second);
    assert_eq!(
        "UPDATE `items` SET qty=?, version=version + ? WHERE id IN (?, ?, ?) ORDER BY id ASC LIMIT 3",
        first.0
    );
    assert_eq!(5, first.1.len());
}

#[test]
fn set_map_follows_ordered_map() {
    let mut values = IndexMap::new();
    values.insert("status", "archived");
    values.insert("owner", "system");
    values.insert("note", "moved");
    let (sql, binds) = UpdateBuilder::new()
        .table("docs")
        .set_map(values)
        .where_eq("id", 11)
        .to_sql()
        .unwrap();
    assert_eq!(
        "UPDATE `docs` SET status=?, owner=?, note=? WHERE id = ?",
        sql
    );
    assert_eq!(
        vec![
            Bind::String("archived".to_owned()),
            Bind::String("system".to_owned()),
            Bind::String("moved".to_owned()),
            Bind::I32(11),
        ],
        binds.into_vec()
    );
}

#[cfg(feature = "sqlite")]
#[tokio::test]
async fn sqlite_round_trip() {
    use sqlx::Connection;

    let mut conn = sqlx::SqliteConnection::connect("sqlite::memory:")
        .await
        .unwrap();
    sqlx::query("CREATE TABLE users (id INTEGER PRIMARY KEY, name TEXT, age INTEGER)")
        .execute(&mut conn)
        .await
        .unwrap();
    sqlx::query("INSERT INTO users (id, name, age) VALUES (1, 'ann', 20), (2, 'bob', 25)")
        .execute(&mut conn)
        .await
        .unwrap();

    let updated = UpdateBuilder::new()
        .table("users")
        .set("name", "bobby")
        .set_raw("age", "age + ?", 1)
        .where_raw("id = ?", 2)
        .execute(&mut conn)
        .await
        .unwrap();
    assert_eq!(1, updated.rows_affected());

    let (name, age): (String, i64) = sqlx::query_as("SELECT name, age FROM users WHERE id = 2")
        .fetch_one(&mut conn)
        .await
        .unwrap();
    assert_eq!("bobby", name);
    assert_eq!(26, age);

    let deleted = DeleteBuilder::new()
        .table("users")
        .where_in("id", [1, 2])
        .execute(&mut conn)
        .await
        .unwrap();
    assert_eq!(2, deleted.rows_affected());

    let err = DeleteBuilder::new()
        .table("users")
        .where_raw("id = ? OR id = ?", (u64::MAX, 1i32))
        .execute(&mut conn)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        dba::ExecError::Executor(sqlx::Error::Encode(_))
    ));
}
