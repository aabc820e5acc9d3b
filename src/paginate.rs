use crate::writer::{FormatContext, FormatWriter};

/// LIMIT / OFFSET slots. `None` means never set, so `Some(0)` still renders.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    pub maybe_limit: Option<u64>,
    pub maybe_offset: Option<u64>,
}

impl Paginator {
    pub fn limit(&mut self, limit: u64) {
        self.maybe_limit = Some(limit);
    }

    pub fn offset(&mut self, offset: u64) {
        self.maybe_offset = Some(offset);
    }
}

impl FormatWriter for Paginator {
    fn format_writer(&self, context: &mut FormatContext<'_>) -> std::fmt::Result {
        use std::fmt::Write;

        if let Some(limit) = self.maybe_limit {
            write!(context.writer, " LIMIT {limit}")?;
        }
        if let Some(offset) = self.maybe_offset {
            write!(context.writer, " OFFSET {offset}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::tests::format_writer;

    use super::*;

    #[test]
    fn test_unset_writes_nothing() {
        assert_eq!("", format_writer(Paginator::default()));
    }

    #[test]
    fn test_zero_is_explicit() {
        let mut paginator = Paginator::default();
        paginator.limit(0);
        assert_eq!(" LIMIT 0", format_writer(paginator));
        paginator.offset(0);
        assert_eq!(" LIMIT 0 OFFSET 0", format_writer(paginator));
    }

    #[test]
    fn test_offset_only() {
        let mut paginator = Paginator::default();
        paginator.offset(20);
        assert_eq!(" OFFSET 20", format_writer(paginator));
    }
}
