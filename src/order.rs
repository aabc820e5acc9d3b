use crate::{
    raw::{IntoRaw, Raw},
    writer::{FormatContext, FormatWriter},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ordering {
    Asc,
    Desc,
}

impl FormatWriter for Ordering {
    fn format_writer(&self, context: &mut FormatContext<'_>) -> std::fmt::Result {
        match self {
            Ordering::Asc => context.write_str("ASC"),
            Ordering::Desc => context.write_str("DESC"),
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum OrderExpr {
    Column(Raw, Ordering),
    Raw(Raw),
}

impl FormatWriter for OrderExpr {
    fn format_writer(&self, context: &mut FormatContext<'_>) -> std::fmt::Result {
        match self {
            OrderExpr::Column(column, ordering) => {
                column.format_writer(context)?;
                context.write_char(' ');
                ordering.format_writer(context)
            }
            OrderExpr::Raw(raw) => raw.format_writer(context),
        }
    }
}

/// ORDER BY items, comma joined. Never carries binds.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Order {
    projections: Vec<OrderExpr>,
}

impl Order {
    pub fn is_empty(&self) -> bool {
        self.projections.is_empty()
    }

    pub fn push_raw<R: IntoRaw>(&mut self, raw: R) {
        self.projections.push(OrderExpr::Raw(raw.into_raw()));
    }

    pub fn push_column<R: IntoRaw>(&mut self, column: R, ordering: Ordering) {
        self.projections
            .push(OrderExpr::Column(column.into_raw(), ordering));
    }
}

impl FormatWriter for Order {
    fn format_writer(&self, context: &mut FormatContext<'_>) -> std::fmt::Result {
        context.write_list(&self.projections, ", ")
    }
}
