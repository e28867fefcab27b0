use crate::Result;

use spindle_core::{stmt, Error};

/// A Rust type stored in a single column.
pub trait Primitive: Sized {
    fn load(value: stmt::Value) -> Result<Self>;

    fn to_value(&self) -> stmt::Value;
}

macro_rules! impl_primitive_int {
    ($($ty:ident),*) => {
        $(
            impl Primitive for $ty {
                fn load(value: stmt::Value) -> Result<Self> {
                    let v = value.to_i64()?;
                    $ty::try_from(v).map_err(|_| Error::type_conversion(&stmt::Value::I64(v), stringify!($ty)))
                }

                fn to_value(&self) -> stmt::Value {
                    stmt::Value::I64(*self as i64)
                }
            }
        )*
    };
}

impl_primitive_int!(i8, i16, i32, i64, u8, u16, u32);

impl Primitive for bool {
    fn load(value: stmt::Value) -> Result<Self> {
        value.to_bool()
    }

    fn to_value(&self) -> stmt::Value {
        stmt::Value::Bool(*self)
    }
}

impl Primitive for f32 {
    fn load(value: stmt::Value) -> Result<Self> {
        Ok(value.to_f64()? as f32)
    }

    fn to_value(&self) -> stmt::Value {
        stmt::Value::F64(*self as f64)
    }
}

impl Primitive for f64 {
    fn load(value: stmt::Value) -> Result<Self> {
        value.to_f64()
    }

    fn to_value(&self) -> stmt::Value {
        stmt::Value::F64(*self)
    }
}

impl Primitive for String {
    fn load(value: stmt::Value) -> Result<Self> {
        value.to_string()
    }

    fn to_value(&self) -> stmt::Value {
        stmt::Value::String(self.clone())
    }
}

impl Primitive for Vec<u8> {
    fn load(value: stmt::Value) -> Result<Self> {
        value.to_bytes()
    }

    fn to_value(&self) -> stmt::Value {
        stmt::Value::Bytes(self.clone())
    }
}

/// Stored as its hyphenated string form.
impl Primitive for uuid::Uuid {
    fn load(value: stmt::Value) -> Result<Self> {
        match value {
            stmt::Value::String(ref s) => s
                .parse()
                .map_err(|_| Error::type_conversion(&value, "Uuid")),
            _ => Err(Error::type_conversion(&value, "Uuid")),
        }
    }

    fn to_value(&self) -> stmt::Value {
        stmt::Value::String(self.to_string())
    }
}

impl<T: Primitive> Primitive for Option<T> {
    fn load(value: stmt::Value) -> Result<Self> {
        match value {
            stmt::Value::Null => Ok(None),
            value => Ok(Some(T::load(value)?)),
        }
    }

    fn to_value(&self) -> stmt::Value {
        match self {
            Some(value) => value.to_value(),
            None => stmt::Value::Null,
        }
    }
}
