use crate::{
    error::Result,
    writer::{FormatContext, FormatWriter},
};

use super::Expression;

/// Ordered expressions, rendered joined by a separator with their binds
/// appended in the same order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ExpressionList(pub(crate) Vec<Expression>);

impl ExpressionList {
    pub fn push(&mut self, expr: Expression) {
        self.0.push(expr);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn append_to_sql(&self, context: &mut FormatContext<'_>, separator: &str) -> Result<()> {
        context.write_list(&self.0, separator)?;
        for expr in &self.0 {
            context.extend_binds(expr.binds());
        }
        Ok(())
    }
}

impl FromIterator<Expression> for ExpressionList {
    fn from_iter<I: IntoIterator<Item = Expression>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
