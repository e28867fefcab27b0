use super::Value;

/// The primary key of a single row, one value per key column.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Key {
    values: Vec<Value>,
}

/// The rows a delete applies to.
#[derive(Debug, Clone, PartialEq)]
pub enum KeySet {
    /// The row with this key.
    Key(Key),

    /// Every row of the table.
    All,
}

impl Key {
    pub fn from_vec(values: Vec<Value>) -> Key {
        Key { values }
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl From<Key> for KeySet {
    fn from(key: Key) -> KeySet {
        KeySet::Key(key)
    }
}

impl From<Vec<Value>> for Key {
    fn from(values: Vec<Value>) -> Key {
        Key { values }
    }
}

impl From<Value> for Key {
    fn from(value: Value) -> Key {
        Key {
            values: vec![value],
        }
    }
}

macro_rules! impl_key_from_scalar {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Key {
                fn from(src: $ty) -> Key {
                    Key::from(Value::from(src))
                }
            }
        )*
    };
}

impl_key_from_scalar!(bool, i8, i16, i32, i64, u8, u16, u32, f64, String, &String, &str, Vec<u8>);

macro_rules! impl_key_from_tuple {
    ($($T:ident $idx:tt),+) => {
        impl<$($T),+> From<($($T,)+)> for Key
        where
            $(Value: From<$T>,)+
        {
            fn from(src: ($($T,)+)) -> Key {
                Key {
                    values: vec![$(Value::from(src.$idx)),+],
                }
            }
        }
    };
}

impl_key_from_tuple!(T0 0);
impl_key_from_tuple!(T0 0, T1 1);
impl_key_from_tuple!(T0 0, T1 1, T2 2);
impl_key_from_tuple!(T0 0, T1 1, T2 2, T3 3);
