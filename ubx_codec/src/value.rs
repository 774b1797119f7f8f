//! Typed field values and their little-endian wire encoding.

use core::{fmt, str::FromStr};

use crate::{
    constants::UBX_MAX_PAYLOAD_LEN,
    error::{Result, UbxError},
};

/// Element type of a repeated-scalar array
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Elem {
    U1,
    U2,
    U4,
    U8,
    I1,
    I2,
    I4,
    I8,
    R4,
    R8,
}

impl Elem {
    pub const fn width(self) -> usize {
        self.tag().width()
    }

    pub const fn tag(self) -> TypeTag {
        match self {
            Elem::U1 => TypeTag::U1,
            Elem::U2 => TypeTag::U2,
            Elem::U4 => TypeTag::U4,
            Elem::U8 => TypeTag::U8,
            Elem::I1 => TypeTag::I1,
            Elem::I2 => TypeTag::I2,
            Elem::I4 => TypeTag::I4,
            Elem::I8 => TypeTag::I8,
            Elem::R4 => TypeTag::R4,
            Elem::R8 => TypeTag::R8,
        }
    }

    fn from_tag(tag: TypeTag) -> Option<Self> {
        Some(match tag {
            TypeTag::U1 => Elem::U1,
            TypeTag::U2 => Elem::U2,
            TypeTag::U4 => Elem::U4,
            TypeTag::U8 => Elem::U8,
            TypeTag::I1 => Elem::I1,
            TypeTag::I2 => Elem::I2,
            TypeTag::I4 => Elem::I4,
            TypeTag::I8 => Elem::I8,
            TypeTag::R4 => Elem::R4,
            TypeTag::R8 => Elem::R8,
            _ => return None,
        })
    }
}

/// Binary encoding of a single payload field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TypeTag {
    U1,
    U2,
    U4,
    U8,
    I1,
    I2,
    I4,
    I8,
    /// IEEE-754 single precision
    R4,
    /// IEEE-754 double precision
    R8,
    /// Boolean stored in one byte
    L,
    /// Enumerated unsigned scalars
    E1,
    E2,
    E4,
    /// Raw bit-field bytes
    X(usize),
    /// Fixed width character array
    C(usize),
    /// Repeated scalar array, element type and count
    A(Elem, usize),
}

impl TypeTag {
    /// Number of payload bytes the tag occupies. Saturates for array
    /// tags too large to describe any payload.
    pub const fn width(self) -> usize {
        match self {
            TypeTag::U1 | TypeTag::I1 | TypeTag::L | TypeTag::E1 => 1,
            TypeTag::U2 | TypeTag::I2 | TypeTag::E2 => 2,
            TypeTag::U4 | TypeTag::I4 | TypeTag::E4 | TypeTag::R4 => 4,
            TypeTag::U8 | TypeTag::I8 | TypeTag::R8 => 8,
            TypeTag::X(n) | TypeTag::C(n) => n,
            TypeTag::A(elem, count) => elem.width().saturating_mul(count),
        }
    }

    const fn is_unsigned(self) -> bool {
        matches!(
            self,
            TypeTag::U1 | TypeTag::U2 | TypeTag::U4 | TypeTag::U8 | TypeTag::E1 | TypeTag::E2 | TypeTag::E4
        )
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeTag::U1 => f.write_str("U1"),
            TypeTag::U2 => f.write_str("U2"),
            TypeTag::U4 => f.write_str("U4"),
            TypeTag::U8 => f.write_str("U8"),
            TypeTag::I1 => f.write_str("I1"),
            TypeTag::I2 => f.write_str("I2"),
            TypeTag::I4 => f.write_str("I4"),
            TypeTag::I8 => f.write_str("I8"),
            TypeTag::R4 => f.write_str("R4"),
            TypeTag::R8 => f.write_str("R8"),
            TypeTag::L => f.write_str("L"),
            TypeTag::E1 => f.write_str("E1"),
            TypeTag::E2 => f.write_str("E2"),
            TypeTag::E4 => f.write_str("E4"),
            TypeTag::X(n) => write!(f, "X{}", n),
            TypeTag::C(n) => write!(f, "C{:03}", n),
            TypeTag::A(Elem::U1, n) => write!(f, "A{:03}", n),
            TypeTag::A(elem, n) => write!(f, "{}[{}]", elem.tag(), n),
        }
    }
}

impl FromStr for TypeTag {
    type Err = UbxError;

    /// Parses the attribute text used in u-blox interface descriptions,
    /// e.g. `U2`, `X4`, `C030`, `A005` or `U2[6]`.
    fn from_str(s: &str) -> Result<Self> {
        let unknown = || UbxError::invalid_type(s, "unrecognised type tag");
        let tag = match s {
            "U1" => TypeTag::U1,
            "U2" => TypeTag::U2,
            "U4" => TypeTag::U4,
            "U8" => TypeTag::U8,
            "I1" => TypeTag::I1,
            "I2" => TypeTag::I2,
            "I4" => TypeTag::I4,
            "I8" => TypeTag::I8,
            "R4" => TypeTag::R4,
            "R8" => TypeTag::R8,
            "L" => TypeTag::L,
            "E1" => TypeTag::E1,
            "E2" => TypeTag::E2,
            "E4" => TypeTag::E4,
            _ => {
                if let Some((elem, rest)) = s.split_once('[') {
                    let count = rest.strip_suffix(']').ok_or_else(unknown)?;
                    let count: usize = count.parse().map_err(|_| unknown())?;
                    let elem = Elem::from_tag(elem.parse()?).ok_or_else(unknown)?;
                    return checked_width(s, TypeTag::A(elem, count));
                }
                let (kind, width) = match (s.get(..1), s.get(1..)) {
                    (Some(kind), Some(width)) => (kind, width),
                    _ => return Err(unknown()),
                };
                let width: usize = width.parse().map_err(|_| unknown())?;
                if width == 0 {
                    return Err(unknown());
                }
                match kind {
                    "X" => TypeTag::X(width),
                    "C" => TypeTag::C(width),
                    "A" => TypeTag::A(Elem::U1, width),
                    _ => return Err(unknown()),
                }
            },
        };
        checked_width(s, tag)
    }
}

/// A tag must fit in one payload
fn checked_width(text: impl ToString, tag: TypeTag) -> Result<TypeTag> {
    if tag.width() > UBX_MAX_PAYLOAD_LEN {
        return Err(UbxError::invalid_type(
            text,
            format!("wider than the {} byte payload limit", UBX_MAX_PAYLOAD_LEN),
        ));
    }
    Ok(tag)
}

/// A decoded field value
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    Unsigned(u64),
    Signed(i64),
    Float(f64),
    Bool(bool),
    /// Raw bit-field or character bytes, passed through unchanged
    Bytes(Vec<u8>),
    Array(Vec<Value>),
}

impl Value {
    pub fn as_u64(&self) -> Option<u64> {
        match *self {
            Value::Unsigned(v) => Some(v),
            Value::Signed(v) => u64::try_from(v).ok(),
            Value::Bool(b) => Some(u64::from(b)),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Value::Unsigned(v) => i64::try_from(v).ok(),
            Value::Signed(v) => Some(v),
            Value::Bool(b) => Some(i64::from(b)),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Value::Float(v) => Some(v),
            Value::Unsigned(v) => Some(v as f64),
            Value::Signed(v) => Some(v as f64),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match *self {
            Value::Bool(b) => Some(b),
            Value::Unsigned(v) => Some(v != 0),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::Bytes(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Character array contents up to the first NUL, if valid UTF-8
    pub fn as_text(&self) -> Option<&str> {
        let bytes = self.as_bytes()?;
        let end = bytes.iter().position(|b| *b == 0).unwrap_or(bytes.len());
        core::str::from_utf8(&bytes[..end]).ok()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Unsigned(v) => write!(f, "{}", v),
            Value::Signed(v) => write!(f, "{}", v),
            Value::Float(v) => write!(f, "{}", v),
            Value::Bool(v) => write!(f, "{}", v),
            Value::Bytes(v) => {
                f.write_str("0x")?;
                for b in v {
                    write!(f, "{:02x}", b)?;
                }
                Ok(())
            },
            Value::Array(v) => {
                f.write_str("[")?;
                for (i, item) in v.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            },
        }
    }
}

macro_rules! value_from {
    ($variant:ident, $target:ty, $($ty:ty),+) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Value::$variant(<$target>::from(v))
                }
            }
        )+
    };
}

value_from!(Unsigned, u64, u8, u16, u32, u64);
value_from!(Signed, i64, i8, i16, i32, i64);
value_from!(Float, f64, f32, f64);

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Value::Bytes(v)
    }
}

impl From<&[u8]> for Value {
    fn from(v: &[u8]) -> Self {
        Value::Bytes(v.to_vec())
    }
}

impl<const N: usize> From<&[u8; N]> for Value {
    fn from(v: &[u8; N]) -> Self {
        Value::Bytes(v.to_vec())
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Bytes(v.as_bytes().to_vec())
    }
}

fn integer<T: num_traits::NumCast>(value: &Value, tag: TypeTag) -> Result<T> {
    let cast = match *value {
        Value::Unsigned(v) => <T as num_traits::NumCast>::from(v),
        Value::Signed(v) => <T as num_traits::NumCast>::from(v),
        Value::Bool(b) => <T as num_traits::NumCast>::from(u8::from(b)),
        _ => return Err(UbxError::invalid_type(tag, format!("{} is not an integer", value))),
    };
    cast.ok_or_else(|| UbxError::invalid_type(tag, format!("{} is out of range", value)))
}

fn float(value: &Value, tag: TypeTag) -> Result<f64> {
    value
        .as_f64()
        .ok_or_else(|| UbxError::invalid_type(tag, format!("{} is not a number", value)))
}

/// Narrows to single precision. Finite values beyond the `f32` range are
/// rejected rather than rounded to infinity.
fn single(value: &Value, tag: TypeTag) -> Result<f32> {
    let v = float(value, tag)?;
    let narrowed = v as f32;
    if v.is_finite() && !narrowed.is_finite() {
        return Err(UbxError::invalid_type(tag, format!("{} is out of range", value)));
    }
    Ok(narrowed)
}

/// Encodes `value` as the little-endian bytes described by `tag`.
///
/// Integers are range checked against the tag width. `X` accepts either
/// exactly `n` raw bytes or an unsigned integer that fits in `n` bytes;
/// `C` accepts at most `n` bytes and pads with NUL.
pub fn encode(value: &Value, tag: TypeTag) -> Result<Vec<u8>> {
    checked_width(tag, tag)?;
    let bytes = match tag {
        TypeTag::U1 | TypeTag::E1 => vec![integer::<u8>(value, tag)?],
        TypeTag::U2 | TypeTag::E2 => integer::<u16>(value, tag)?.to_le_bytes().to_vec(),
        TypeTag::U4 | TypeTag::E4 => integer::<u32>(value, tag)?.to_le_bytes().to_vec(),
        TypeTag::U8 => integer::<u64>(value, tag)?.to_le_bytes().to_vec(),
        TypeTag::I1 => integer::<i8>(value, tag)?.to_le_bytes().to_vec(),
        TypeTag::I2 => integer::<i16>(value, tag)?.to_le_bytes().to_vec(),
        TypeTag::I4 => integer::<i32>(value, tag)?.to_le_bytes().to_vec(),
        TypeTag::I8 => integer::<i64>(value, tag)?.to_le_bytes().to_vec(),
        TypeTag::R4 => single(value, tag)?.to_le_bytes().to_vec(),
        TypeTag::R8 => float(value, tag)?.to_le_bytes().to_vec(),
        TypeTag::L => match value.as_u64() {
            Some(b @ (0 | 1)) => vec![b as u8],
            _ => return Err(UbxError::invalid_type(tag, format!("{} is not a boolean", value))),
        },
        TypeTag::X(n) => match value {
            Value::Bytes(b) if b.len() == n => b.clone(),
            Value::Bytes(b) => {
                return Err(UbxError::invalid_type(
                    tag,
                    format!("{} bytes supplied, expect {}", b.len(), n),
                ))
            },
            _ => {
                let v = integer::<u64>(value, tag)?;
                if n < 8 && v >> (8 * n) != 0 {
                    return Err(UbxError::invalid_type(tag, format!("{} is out of range", value)));
                }
                let mut bytes = v.to_le_bytes().to_vec();
                bytes.resize(n, 0);
                bytes
            },
        },
        TypeTag::C(n) => match value {
            Value::Bytes(b) if b.len() <= n => {
                let mut bytes = b.clone();
                bytes.resize(n, 0);
                bytes
            },
            _ => {
                return Err(UbxError::invalid_type(
                    tag,
                    format!("{} does not fit {} characters", value, n),
                ))
            },
        },
        TypeTag::A(elem, count) => {
            let items = match value {
                Value::Array(items) => items.iter().collect::<Vec<_>>(),
                Value::Bytes(b) if elem == Elem::U1 => {
                    return encode(&Value::Array(b.iter().map(|v| Value::from(*v)).collect()), tag)
                },
                _ => return Err(UbxError::invalid_type(tag, format!("{} is not an array", value))),
            };
            if items.len() != count {
                return Err(UbxError::invalid_type(
                    tag,
                    format!("{} elements supplied, expect {}", items.len(), count),
                ));
            }
            let mut bytes = Vec::with_capacity(tag.width());
            for item in items {
                bytes.extend(encode(item, elem.tag())?);
            }
            bytes
        },
    };
    Ok(bytes)
}

/// Decodes little-endian `bytes` according to `tag`.
///
/// Scalars require exactly `tag.width()` bytes. Arrays accept any slice that
/// is an exact multiple of the element width and keep element order.
pub fn decode(bytes: &[u8], tag: TypeTag) -> Result<Value> {
    let length_error = |expect| UbxError::DecodeLength {
        tag,
        expect,
        got: bytes.len(),
    };
    if let TypeTag::A(elem, _) = tag {
        let width = elem.width();
        if bytes.len() % width != 0 {
            return Err(length_error(width));
        }
        return bytes
            .chunks_exact(width)
            .map(|chunk| decode(chunk, elem.tag()))
            .collect::<Result<Vec<_>>>()
            .map(Value::Array);
    }
    if bytes.len() != tag.width() {
        return Err(length_error(tag.width()));
    }

    let mut raw = [0u8; 8];
    let scalar = |raw: &mut [u8; 8]| {
        raw[..bytes.len()].copy_from_slice(bytes);
        u64::from_le_bytes(*raw)
    };
    let value = match tag {
        t if t.is_unsigned() => Value::Unsigned(scalar(&mut raw)),
        TypeTag::I1 => Value::Signed(i64::from(bytes[0] as i8)),
        TypeTag::I2 => Value::Signed(i64::from(i16::from_le_bytes([bytes[0], bytes[1]]))),
        TypeTag::I4 => Value::Signed(i64::from(i32::from_le_bytes([
            bytes[0], bytes[1], bytes[2], bytes[3],
        ]))),
        TypeTag::I8 => Value::Signed(scalar(&mut raw) as i64),
        TypeTag::R4 => Value::Float(f64::from(f32::from_le_bytes([
            bytes[0], bytes[1], bytes[2], bytes[3],
        ]))),
        TypeTag::R8 => Value::Float(f64::from_bits(scalar(&mut raw))),
        TypeTag::L => Value::Bool(bytes[0] != 0),
        _ => Value::Bytes(bytes.to_vec()),
    };
    Ok(value)
}
