// max size is 32 bytes
#[derive(Debug, Clone, PartialEq)]
pub enum Bind {
    Null,
    String(String),
    StaticString(&'static str),
    Bool(bool),
    F32(f32),
    F64(f64),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
}

/// Ordered argument list, one value per `?` placeholder.
pub type Binds = Array<Bind>;

// if T <= 32 bytes we are good and it's a free data structure.
#[derive(Debug, Clone, PartialEq)]
pub enum Array<T> {
    None,
    One(T),
    Many(Vec<T>),
}

impl<T> Default for Array<T> {
    fn default() -> Self {
        Self::None
    }
}

impl<T> Array<T> {
    pub fn push(&mut self, value: T) {
        let combined = match std::mem::take(self) {
            Self::None => Self::One(value),
            Self::One(a) => Self::Many(vec![a, value]),
            Self::Many(mut a) => {
                a.push(value);
                Self::Many(a)
            }
        };
        *self = combined;
    }

    /// Appends `other` after the current values, keeping both orders.
    pub fn append(&mut self, other: Self) {
        let combined = match (std::mem::take(self), other) {
            (Self::None, values) | (values, Self::None) => values,
            (Self::One(a), Self::One(b)) => Self::Many(vec![a, b]),
            (Self::One(a), Self::Many(mut b)) => {
                b.insert(0, a);
                Self::Many(b)
            }
            (Self::Many(mut a), Self::One(b)) => {
                a.push(b);
                Self::Many(a)
            }
            (Self::Many(mut a), Self::Many(mut b)) => {
                a.append(&mut b);
                Self::Many(a)
            }
        };
        *self = combined;
    }

    pub fn len(&self) -> usize {
        match self {
            Array::None => 0,
            Array::One(_) => 1,
            Array::Many(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    pub fn as_slice(&self) -> &[T] {
        match self {
            Array::None => &[],
            Array::One(one) => std::slice::from_ref(one),
            Array::Many(many) => many.as_slice(),
        }
    }

    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::None => Vec::new(),
            Self::One(one) => Vec::from([one]),
            Self::Many(many) => many,
        }
    }
}

impl<T> IntoIterator for Array<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Array<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> FromIterator<T> for Array<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut values: Vec<T> = iter.into_iter().collect();
        match values.len() {
            0 => Self::None,
            1 => match values.pop() {
                Some(one) => Self::One(one),
                None => Self::None,
            },
            _ => Self::Many(values),
        }
    }
}

pub trait IntoBind {
    fn into_bind(self) -> Bind;
}

pub trait IntoBinds {
    fn into_binds(self) -> Binds;
}

impl IntoBinds for Binds {
    fn into_binds(self) -> Binds {
        self
    }
}

impl IntoBinds for () {
    fn into_binds(self) -> Binds {
        Binds::None
    }
}

impl<T> IntoBinds for T
where
    T: IntoBind,
{
    fn into_binds(self) -> Binds {
        Binds::One(self.into_bind())
    }
}

impl<T> IntoBinds for Vec<T>
where
    T: IntoBind,
{
    fn into_binds(self) -> Binds {
        self.into_iter().map(IntoBind::into_bind).collect()
    }
}

impl<T, const N: usize> IntoBinds for [T; N]
where
    T: IntoBind,
{
    fn into_binds(self) -> Binds {
        self.into_iter().map(IntoBind::into_bind).collect()
    }
}

macro_rules! tuple_into_binds {
    ( $( $name:ident ),+ ) => {
        impl<$( $name ),+> IntoBinds for ( $( $name, )+ )
        where
            $( $name: IntoBind ),+
        {
            #[allow(non_snake_case)]
            fn into_binds(self) -> Binds {
                let ( $( $name, )+ ) = self;
                Binds::Many(vec![ $( $name.into_bind() ),+ ])
            }
        }
    };
}

tuple_into_binds!(A, B);
tuple_into_binds!(A, B, C);
tuple_into_binds!(A, B, C, D);
tuple_into_binds!(A, B, C, D, E);
tuple_into_binds!(A, B, C, D, E, F);

impl IntoBind for Bind {
    fn into_bind(self) -> Bind {
        self
    }
}

impl<T> IntoBind for Option<T>
where
    T: IntoBind,
{
    fn into_bind(self) -> Bind {
        if let Some(value) = self {
            value.into_bind()
        } else {
            Bind::Null
        }
    }
}

macro_rules! primitive_into_bind {
    ( $( $ty:ty => $variant:ident ),+ $(,)? ) => {
        $(
            impl IntoBind for $ty {
                #[inline]
                fn into_bind(self) -> Bind {
                    Bind::$variant(self)
                }
            }
        )+
    };
}

primitive_into_bind!(
    bool => Bool,
    f32 => F32,
    f64 => F64,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    String => String,
);

impl IntoBind for &str {
    fn into_bind(self) -> Bind {
        Bind::String(self.to_owned())
    }
}

impl IntoBind for &String {
    fn into_bind(self) -> Bind {
        Bind::String(self.clone())
    }
}
