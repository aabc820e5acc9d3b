use crate::{
    bind::{Binds, IntoBind, IntoBinds},
    clause::{Clause, CompositeClause},
    error::{Error, Result, StatementKind},
    raw::IntoRaw,
    set::SetClause,
    statement::{Sections, render, sections_methods},
    writer::FormatContext,
};

/// Builder for `UPDATE` statements.
///
/// Assignments render in the order they were added.
///
/// ```
/// let (sql, binds) = dba::UpdateBuilder::new()
///     .table("users")
///     .set("name", "bob")
///     .set("age", 30)
///     .where_raw("id = ?", 5)
///     .to_sql()
///     .unwrap();
/// assert_eq!("UPDATE `users` SET name=?, age=? WHERE id = ?", sql);
/// assert_eq!(3, binds.len());
/// ```
#[derive(Debug, Default)]
pub struct UpdateBuilder {
    sections: Sections,
    sets: CompositeClause,
}

impl UpdateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    sections_methods!();

    /// Appends `column=?` bound to `value`.
    pub fn set<C, V>(&mut self, column: C, value: V) -> &mut Self
    where
        C: IntoRaw,
        V: IntoBind,
    {
        self.sets.append(SetClause::new(column, value));
        self
    }

    /// Appends `column=<sql>`, e.g. `set_raw("hits", "hits + ?", 1)`.
    pub fn set_raw<C, R, B>(&mut self, column: C, sql: R, binds: B) -> &mut Self
    where
        C: IntoRaw,
        R: IntoRaw,
        B: IntoBinds,
    {
        self.sets.append(SetClause::raw(column, sql, binds));
        self
    }

    /// Appends any clause to the SET list.
    pub fn set_clause<C>(&mut self, clause: C) -> &mut Self
    where
        C: Clause + 'static,
    {
        self.sets.append(clause);
        self
    }

    /// Appends one assignment per pair, in the iterator's order.
    ///
    /// A `HashMap` iterates in no particular order, so the rendered column
    /// order (and the bind order with it) may change between runs. Use
    /// repeated [`UpdateBuilder::set`] calls, a `Vec` of pairs or an ordered
    /// map when the output must be stable.
    pub fn set_map<I, C, V>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator<Item = (C, V)>,
        C: IntoRaw,
        V: IntoBind,
    {
        for (column, value) in values {
            self.set(column, value);
        }
        self
    }

    /// Renders the statement and its binds, in placeholder order.
    pub fn to_sql(&self) -> Result<(String, Binds)> {
        self.sections.check_table(StatementKind::Update)?;
        if self.sets.is_empty() {
            return Err(Error::MissingRequiredColumns);
        }
        self.sections.check_where(StatementKind::Update)?;
        render(|context| self.append_to_sql(context))
    }

    fn append_to_sql(&self, context: &mut FormatContext<'_>) -> Result<()> {
        self.sections.format_head(context, "UPDATE")?;
        self.sections.format_tables(context)?;
        self.sections.format_joins(context)?;
        context.write_str(" SET ");
        self.sets.append_to_sql(context)?;
        self.sections.format_tail(context)
    }
}
