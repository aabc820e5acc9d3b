use crate::{
    bind::{Bind, IntoBind, IntoBinds},
    clause::Clause,
    error::Result,
    expr::Expression,
    raw::{IntoRaw, Raw},
    writer::{FormatContext, FormatWriter},
};

#[derive(Debug, Clone, PartialEq)]
pub enum SetValue {
    Bind(Bind),
    Raw(Expression),
}

/// One `column=?` assignment of a SET list.
///
/// The column is written as given, so `t.count` or an already quoted name
/// both work.
#[derive(Debug, Clone, PartialEq)]
pub struct SetClause {
    column: Raw,
    value: SetValue,
}

impl SetClause {
    pub fn new<C, V>(column: C, value: V) -> Self
    where
        C: IntoRaw,
        V: IntoBind,
    {
        Self {
            column: column.into_raw(),
            value: SetValue::Bind(value.into_bind()),
        }
    }

    /// `column=<sql>` where `sql` carries its own binds, e.g. `count + ?`.
    pub fn raw<C, R, B>(column: C, sql: R, binds: B) -> Self
    where
        C: IntoRaw,
        R: IntoRaw,
        B: IntoBinds,
    {
        Self {
            column: column.into_raw(),
            value: SetValue::Raw(Expression::new(sql, binds)),
        }
    }

    pub fn column(&self) -> &str {
        self.column.as_str()
    }

    pub fn value(&self) -> &SetValue {
        &self.value
    }
}

impl Clause for SetClause {
    fn append_to_sql(&self, context: &mut FormatContext<'_>) -> Result<()> {
        self.column.format_writer(context)?;
        context.write_char('=');
        match self.value {
            SetValue::Bind(ref bind) => {
                context.write_char('?');
                context.push_binds(bind.clone());
            }
            SetValue::Raw(ref expr) => expr.append_to_sql(context)?,
        }
        Ok(())
    }
}
