use std::fmt;

use crate::{
    bind::Binds,
    error::Result,
    writer::FormatContext,
};

/// A renderable SQL fragment that writes its text and binds into a shared
/// context.
///
/// Implementations may fail; a failure aborts the whole statement render.
pub trait Clause: fmt::Debug {
    fn append_to_sql(&self, context: &mut FormatContext<'_>) -> Result<()>;

    fn to_sql(&self) -> Result<(String, Binds)> {
        let mut sql = String::with_capacity(32);
        let mut context = FormatContext::new(&mut sql);
        self.append_to_sql(&mut context)?;
        let binds = context.into_binds();
        Ok((sql, binds))
    }
}

impl<C> Clause for Box<C>
where
    C: Clause + ?Sized,
{
    fn append_to_sql(&self, context: &mut FormatContext<'_>) -> Result<()> {
        (**self).append_to_sql(context)
    }
}

impl<C> Clause for &C
where
    C: Clause + ?Sized,
{
    fn append_to_sql(&self, context: &mut FormatContext<'_>) -> Result<()> {
        (**self).append_to_sql(context)
    }
}

/// Ordered children rendered one after the other with a separator.
///
/// `new` joins with `, ` (SET lists). `all` and `any` join with `AND` / `OR`
/// and wrap the group in parentheses once it holds more than one child.
#[derive(Debug)]
pub struct CompositeClause {
    separator: &'static str,
    grouped: bool,
    children: Vec<Box<dyn Clause>>,
}

impl Default for CompositeClause {
    fn default() -> Self {
        Self::new()
    }
}

impl CompositeClause {
    pub fn new() -> Self {
        Self {
            separator: ", ",
            grouped: false,
            children: Vec::new(),
        }
    }

    pub fn all() -> Self {
        Self {
            separator: " AND ",
            grouped: true,
            children: Vec::new(),
        }
    }

    pub fn any() -> Self {
        Self {
            separator: " OR ",
            grouped: true,
            children: Vec::new(),
        }
    }

    pub fn append<C>(&mut self, clause: C) -> &mut Self
    where
        C: Clause + 'static,
    {
        self.children.push(Box::new(clause));
        self
    }

    /// By value variant of [`CompositeClause::append`], for nesting groups inline.
    pub fn with<C>(mut self, clause: C) -> Self
    where
        C: Clause + 'static,
    {
        self.children.push(Box::new(clause));
        self
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl Clause for CompositeClause {
    fn append_to_sql(&self, context: &mut FormatContext<'_>) -> Result<()> {
        let wrap = self.grouped && self.children.len() > 1;
        if wrap {
            context.write_char('(');
        }
        for (index, child) in self.children.iter().enumerate() {
            if index > 0 {
                context.write_str(self.separator);
            }
            child.append_to_sql(context)?;
        }
        if wrap {
            context.write_char(')');
        }
        Ok(())
    }
}
