use std::fmt::Write;

use crate::bind::{Binds, IntoBinds};

pub(crate) trait FormatWriter {
    fn format_writer(&self, context: &mut FormatContext<'_>) -> std::fmt::Result;
}

/// Shared render state: the SQL text written so far and the binds collected
/// for its placeholders, in the same order.
pub struct FormatContext<'a> {
    pub(crate) writer: &'a mut String,
    pub(crate) binds: Binds,
}

impl<'a> FormatContext<'a> {
    pub fn new(writer: &'a mut String) -> Self {
        Self {
            writer,
            binds: Binds::None,
        }
    }

    pub fn write_str(&mut self, sql: &str) {
        self.writer.push_str(sql);
    }

    pub fn write_char(&mut self, c: char) {
        self.writer.push(c);
    }

    /// Appends values after every bind already collected.
    pub fn push_binds<B: IntoBinds>(&mut self, binds: B) {
        self.binds.append(binds.into_binds());
    }

    pub fn extend_binds(&mut self, binds: &Binds) {
        for bind in binds {
            self.binds.push(bind.clone());
        }
    }

    pub fn into_binds(self) -> Binds {
        self.binds
    }

    pub(crate) fn write_table(&mut self, ident: &str) -> std::fmt::Result {
        for (i, part) in ident.split('.').enumerate() {
            if i > 0 {
                self.writer.write_char('.')?;
            }
            self.write_ident(part)?;
        }
        Ok(())
    }

    pub(crate) fn write_ident(&mut self, part: &str) -> std::fmt::Result {
        if part == "*" {
            return self.writer.write_char('*');
        }

        self.writer.write_char('`')?;
        let mut last = 0;
        for (index, char) in part.char_indices() {
            if char == '`' {
                if index != last {
                    self.writer.write_str(&part[last..index])?;
                }
                // duplicate the quote
                self.writer.write_str("``")?;
                last = index + char.len_utf8();
            }
        }

        // write trailing slice
        if last < part.len() {
            self.writer.write_str(&part[last..])?;
        }

        self.writer.write_char('`')?;
        Ok(())
    }

    /// Writes `items` separated by `separator`, nothing when empty.
    pub(crate) fn write_list<T: FormatWriter>(
        &mut self,
        items: &[T],
        separator: &str,
    ) -> std::fmt::Result {
        for (index, item) in items.iter().enumerate() {
            if index > 0 {
                self.writer.write_str(separator)?;
            }
            item.format_writer(self)?;
        }
        Ok(())
    }
}

impl<D> FormatWriter for D
where
    D: std::ops::Deref,
    D::Target: FormatWriter,
{
    fn format_writer(&self, ctx: &mut FormatContext<'_>) -> std::fmt::Result {
        self.deref().format_writer(ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_ident_quotes() {
        let mut sql = String::new();
        let mut context = FormatContext::new(&mut sql);
        context.write_ident("us`ers").unwrap();
        context.write_char(' ');
        context.write_ident("*").unwrap();
        assert_eq!("`us``ers` *", sql);
    }

    #[test]
    fn test_write_table_dotted() {
        let mut sql = String::new();
        let mut context = FormatContext::new(&mut sql);
        context.write_table("shop.orders").unwrap();
        assert_eq!("`shop`.`orders`", sql);
    }

    #[test]
    fn test_binds_accumulate() {
        let mut sql = String::new();
        let mut context = FormatContext::new(&mut sql);
        context.push_binds(1i32);
        context.push_binds(("a", 2i64));
        let binds = context.into_binds();
        assert_eq!(3, binds.len());
    }
}
