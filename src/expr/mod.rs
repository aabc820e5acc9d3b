use crate::{
    bind::{Binds, IntoBinds},
    clause::Clause,
    error::Result,
    raw::{IntoRaw, Raw},
    writer::{FormatContext, FormatWriter},
};

pub mod cond;
pub mod list;

/// A literal SQL fragment and the values bound to its `?` placeholders,
/// left to right.
///
/// Nothing checks that the placeholder count matches the binds: a mismatch
/// is reported by the database when the statement runs.
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    sql: Raw,
    binds: Binds,
}

impl Expression {
    pub fn new<R, B>(sql: R, binds: B) -> Self
    where
        R: IntoRaw,
        B: IntoBinds,
    {
        Self {
            sql: sql.into_raw(),
            binds: binds.into_binds(),
        }
    }

    pub fn sql(&self) -> &str {
        self.sql.as_str()
    }

    pub fn binds(&self) -> &Binds {
        &self.binds
    }
}

impl FormatWriter for Expression {
    fn format_writer(&self, context: &mut FormatContext<'_>) -> std::fmt::Result {
        self.sql.format_writer(context)
    }
}

impl Clause for Expression {
    fn append_to_sql(&self, context: &mut FormatContext<'_>) -> Result<()> {
        self.format_writer(context)?;
        context.extend_binds(&self.binds);
        Ok(())
    }
}
