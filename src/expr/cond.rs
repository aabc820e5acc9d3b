use crate::{error::Result, writer::FormatContext};

use super::Expression;

/// WHERE fragments. When more than one is held each one is wrapped in
/// parentheses so the caller's `OR`s stay inside their own fragment.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct WhereExpressionList(pub(crate) Vec<Expression>);

impl WhereExpressionList {
    pub fn push(&mut self, expr: Expression) {
        self.0.push(expr);
    }

    /// Drops every fragment and keeps `expr` alone.
    pub fn replace(&mut self, expr: Expression) {
        self.0.clear();
        self.0.push(expr);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn append_to_sql(&self, context: &mut FormatContext<'_>, separator: &str) -> Result<()> {
        let grouped = self.0.len() > 1;
        for (index, expr) in self.0.iter().enumerate() {
            if index > 0 {
                context.write_str(separator);
            }
            if grouped {
                context.write_char('(');
            }
            context.write_str(expr.sql());
            if grouped {
                context.write_char(')');
            }
            context.extend_binds(expr.binds());
        }
        Ok(())
    }
}
