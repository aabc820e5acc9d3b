use crate::{
    bind::Binds,
    error::{Result, StatementKind},
    raw::{IntoRaw, Raw},
    statement::{Sections, render, sections_methods},
    writer::FormatContext,
};

/// Builder for `DELETE` statements.
///
/// ```
/// let (sql, binds) = dba::DeleteBuilder::new()
///     .table("users")
///     .where_raw("id = ?", 5)
///     .limit(1)
///     .to_sql()
///     .unwrap();
/// assert_eq!("DELETE FROM `users` WHERE id = ? LIMIT 1", sql);
/// assert_eq!(1, binds.len());
/// ```
#[derive(Debug, Default, Clone)]
pub struct DeleteBuilder {
    sections: Sections,
    aliases: Vec<Raw>,
    maybe_using: Option<Raw>,
}

impl DeleteBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    sections_methods!();

    /// Tables to delete from in a multi-table delete, written between
    /// `DELETE` and `FROM`.
    pub fn alias<I, R>(&mut self, aliases: I) -> &mut Self
    where
        I: IntoIterator<Item = R>,
        R: IntoRaw,
    {
        self.aliases
            .extend(aliases.into_iter().map(IntoRaw::into_raw));
        self
    }

    /// Sets the `USING` table list, replacing any previous one.
    pub fn using<R: IntoRaw>(&mut self, sql: R) -> &mut Self {
        let raw = sql.into_raw();
        self.maybe_using = if raw.is_empty() { None } else { Some(raw) };
        self
    }

    /// Renders the statement and its binds, in placeholder order.
    pub fn to_sql(&self) -> Result<(String, Binds)> {
        self.sections.check_table(StatementKind::Delete)?;
        self.sections.check_where(StatementKind::Delete)?;
        render(|context| self.append_to_sql(context))
    }

    fn append_to_sql(&self, context: &mut FormatContext<'_>) -> Result<()> {
        self.sections.format_head(context, "DELETE")?;
        for (index, alias) in self.aliases.iter().enumerate() {
            if index > 0 {
                context.write_str(", ");
            }
            context.write_str(alias.as_str());
        }
        if !self.aliases.is_empty() {
            context.write_char(' ');
        }
        context.write_str("FROM ");
        self.sections.format_tables(context)?;
        if let Some(ref using) = self.maybe_using {
            context.write_str(" USING ");
            context.write_str(using.as_str());
        }
        self.sections.format_joins(context)?;
        self.sections.format_tail(context)
    }
}
