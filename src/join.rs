use smol_str::SmolStr;

use crate::{
    bind::{Binds, IntoBinds},
    ident::{Ident, IntoIdent},
    raw::{IntoRaw, Raw},
    writer::{FormatContext, FormatWriter},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JoinType {
    Join,
    Inner,
    Left,
    Right,
    Cross,
    /// Any other join keyword, e.g. `STRAIGHT_JOIN`.
    Other(SmolStr),
}

impl FormatWriter for JoinType {
    fn format_writer(&self, context: &mut FormatContext<'_>) -> std::fmt::Result {
        match self {
            JoinType::Join => context.write_str("JOIN"),
            JoinType::Inner => context.write_str("INNER JOIN"),
            JoinType::Left => context.write_str("LEFT JOIN"),
            JoinType::Right => context.write_str("RIGHT JOIN"),
            JoinType::Cross => context.write_str("CROSS JOIN"),
            JoinType::Other(keyword) => context.write_str(keyword.as_str()),
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct JoinClause {
    ty: JoinType,
    table: Ident,
    suffix: Raw,
}

impl FormatWriter for JoinClause {
    fn format_writer(&self, context: &mut FormatContext<'_>) -> std::fmt::Result {
        self.ty.format_writer(context)?;
        context.write_char(' ');
        self.table.format_writer(context)?;
        if !self.suffix.is_empty() {
            context.write_char(' ');
            self.suffix.format_writer(context)?;
        }
        Ok(())
    }
}

/// Join clauses in call order. Their binds are kept apart and appended once
/// every join has been written.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Joins {
    clauses: Vec<JoinClause>,
    binds: Binds,
}

impl Joins {
    pub fn push<T, S, B>(&mut self, ty: JoinType, table: T, suffix: S, binds: B)
    where
        T: IntoIdent,
        S: IntoRaw,
        B: IntoBinds,
    {
        self.clauses.push(JoinClause {
            ty,
            table: table.into_ident(),
            suffix: suffix.into_raw(),
        });
        self.binds.append(binds.into_binds());
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub(crate) fn append_to_sql(&self, context: &mut FormatContext<'_>) -> std::fmt::Result {
        context.write_list(&self.clauses, " ")?;
        context.extend_binds(&self.binds);
        Ok(())
    }
}
