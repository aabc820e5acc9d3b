//! Composable `DELETE` and `UPDATE` statement builders.
//!
//! Builders collect fragments and render them into a single SQL string with
//! `?` placeholders plus the ordered list of values bound to them.

mod bind;
mod clause;
mod delete;
#[cfg(any(feature = "mysql", feature = "sqlite"))]
mod driver;
mod error;
mod exec;
mod expr;
mod ident;
mod join;
mod order;
mod paginate;
mod raw;
mod set;
mod statement;
mod update;
mod writer;

pub use bind::{Array, Bind, Binds, IntoBind, IntoBinds};
pub use clause::{Clause, CompositeClause};
pub use delete::DeleteBuilder;
#[cfg(any(feature = "mysql", feature = "sqlite"))]
pub use driver::EncodeBinds;
pub use error::{Error, ExecError, Result, StatementKind};
pub use exec::{ExecOutput, Prepare, PreparedStatement, QueryRows, exec, query};
pub use expr::{Expression, cond::WhereExpressionList, list::ExpressionList};
pub use ident::{Ident, IntoIdent};
pub use join::JoinType;
pub use order::Ordering;
pub use raw::{IntoRaw, Raw};
pub use set::{SetClause, SetValue};
pub use update::UpdateBuilder;
pub use writer::FormatContext;

pub fn ident_static(value: &'static str) -> Ident {
    Ident::new_static(value)
}

pub fn ident(value: &str) -> Ident {
    Ident::new(value)
}

pub fn raw_static(value: &'static str) -> Raw {
    Raw::new_static(value)
}

pub fn raw(value: &str) -> Raw {
    Raw::new(value)
}

/// Shorthand for [`Expression::new`].
pub fn expr<R, B>(sql: R, binds: B) -> Expression
where
    R: IntoRaw,
    B: IntoBinds,
{
    Expression::new(sql, binds)
}
