use std::{borrow::Cow, sync::Arc};

use smol_str::SmolStr;

use crate::writer::{FormatContext, FormatWriter};

/// A table or column identifier, rendered with backtick quoting.
///
/// Dotted names are quoted per part and `name as alias` keeps the alias
/// (`` `name` AS `alias` ``).
#[derive(Debug, Default, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ident(SmolStr);

pub trait IntoIdent {
    fn into_ident(self) -> Ident;
}

impl IntoIdent for Ident {
    fn into_ident(self) -> Ident {
        self
    }
}

macro_rules! into_ident {
    ( $( $ty:ty ),+ ) => {
        $(
            impl IntoIdent for $ty {
                #[inline]
                fn into_ident(self) -> Ident {
                    Ident::new(self)
                }
            }
        )+
    };
}

into_ident!(&str, &String, String, Box<str>, Arc<str>, Cow<'_, str>, SmolStr);

impl Ident {
    #[inline]
    pub fn new<T>(value: T) -> Self
    where
        T: Into<SmolStr>,
    {
        Self(value.into())
    }

    #[inline]
    pub fn new_static(value: &'static str) -> Self {
        Self(SmolStr::new_static(value))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl FormatWriter for Ident {
    fn format_writer(&self, context: &mut FormatContext<'_>) -> std::fmt::Result {
        match alias_split(self.as_str()) {
            Some((table, alias)) => {
                context.write_table(table)?;
                context.write_str(" AS ");
                context.write_ident(alias)
            }
            None => context.write_table(self.as_str()),
        }
    }
}

/// Splits `users as u` (keyword in any case) into the quoted table path and
/// its alias. Only the first keyword counts, the alias is quoted whole.
fn alias_split(name: &str) -> Option<(&str, &str)> {
    let bytes = name.as_bytes();
    let at = bytes.windows(4).position(|window| {
        window[0] == b' ' && window[3] == b' ' && window[1..3].eq_ignore_ascii_case(b"as")
    })?;
    Some((&name[..at], &name[at + 4..]))
}
