use graphpeek_core::internal::*;

use crate::tfpb::tensorflow::{DataType, TensorShapeProto};

/// Offset TensorFlow adds to a type to denote a reference to it (`DT_FLOAT_REF`...).
const REF_OFFSET: i32 = 100;

/// Map a raw `DataType` value, including reference types, to a datum type.
pub fn datum_type(raw: i32) -> PeekResult<DatumType> {
    let base = if raw > REF_OFFSET { raw - REF_OFFSET } else { raw };
    let dt = DataType::from_i32(base).ok_or_else(|| format_err!("Unknown DataType {}", raw))?;
    dt.try_into()
}

impl TryFrom<DataType> for DatumType {
    type Error = PeekError;
    fn try_from(t: DataType) -> PeekResult<DatumType> {
        match t {
            DataType::DtBool => Ok(DatumType::Bool),
            DataType::DtUint8 => Ok(DatumType::U8),
            DataType::DtUint16 => Ok(DatumType::U16),
            DataType::DtUint32 => Ok(DatumType::U32),
            DataType::DtUint64 => Ok(DatumType::U64),
            DataType::DtInt4 => Ok(DatumType::I4),
            DataType::DtInt8 => Ok(DatumType::I8),
            DataType::DtInt16 => Ok(DatumType::I16),
            DataType::DtInt32 => Ok(DatumType::I32),
            DataType::DtInt64 => Ok(DatumType::I64),
            DataType::DtHalf => Ok(DatumType::F16),
            DataType::DtBfloat16 => Ok(DatumType::BF16),
            DataType::DtFloat => Ok(DatumType::F32),
            DataType::DtDouble => Ok(DatumType::F64),
            DataType::DtComplex64 => Ok(DatumType::ComplexF32),
            DataType::DtComplex128 => Ok(DatumType::ComplexF64),
            DataType::DtString => Ok(DatumType::String),
            DataType::DtQint8 => Ok(DatumType::QI8),
            DataType::DtQuint8 => Ok(DatumType::QU8),
            DataType::DtQint16 => Ok(DatumType::QI16),
            DataType::DtQuint16 => Ok(DatumType::QU16),
            DataType::DtQint32 => Ok(DatumType::QI32),
            DataType::DtResource => Ok(DatumType::Resource),
            DataType::DtVariant => Ok(DatumType::Variant),
            DataType::DtFloat8E5m2
            | DataType::DtFloat8E4m3fn
            | DataType::DtFloat8E4m3fnuz
            | DataType::DtFloat8E4m3b11fnuz
            | DataType::DtFloat8E5m2fnuz
            | DataType::DtUint4 => bail!("Unsupported DataType {:?}", t),
            DataType::DtInvalid => bail!("Invalid DataType"),
        }
    }
}

impl<'a> From<&'a TensorShapeProto> for Shape {
    fn from(t: &'a TensorShapeProto) -> Shape {
        if t.unknown_rank {
            Shape::unknown()
        } else {
            Shape::from_signed(t.dim.iter().map(|d| d.size))
        }
    }
}
