use std::{borrow::Cow, sync::Arc};

use smol_str::SmolStr;

use crate::writer::{FormatContext, FormatWriter};

/// Literal SQL text, written as is.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct Raw(pub(crate) SmolStr);

impl Raw {
    pub fn new<T>(value: T) -> Self
    where
        T: Into<SmolStr>,
    {
        Self(value.into())
    }

    pub fn new_static(value: &'static str) -> Self {
        Self(SmolStr::new_static(value))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FormatWriter for Raw {
    fn format_writer(&self, context: &mut FormatContext<'_>) -> std::fmt::Result {
        context.write_str(self.0.as_str());
        Ok(())
    }
}

pub trait IntoRaw {
    fn into_raw(self) -> Raw;
}

impl IntoRaw for Raw {
    fn into_raw(self) -> Raw {
        self
    }
}

impl IntoRaw for &str {
    #[inline]
    fn into_raw(self) -> Raw {
        Raw::new(self)
    }
}

impl IntoRaw for &String {
    #[inline]
    fn into_raw(self) -> Raw {
        Raw::new(self)
    }
}

impl IntoRaw for String {
    #[inline(always)]
    fn into_raw(self) -> Raw {
        Raw::new(self)
    }
}

impl IntoRaw for Box<str> {
    #[inline]
    fn into_raw(self) -> Raw {
        Raw::new(self)
    }
}

impl IntoRaw for Arc<str> {
    #[inline]
    fn into_raw(self) -> Raw {
        Raw::new(self)
    }
}

impl IntoRaw for Cow<'_, str> {
    #[inline]
    fn into_raw(self) -> Raw {
        Raw::new(self)
    }
}

impl IntoRaw for SmolStr {
    #[inline(always)]
    fn into_raw(self) -> Raw {
        Raw(self)
    }
}
