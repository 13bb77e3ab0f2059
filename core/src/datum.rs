use std::fmt;

/// Element type of a tensor, as declared by the model artifact.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum DatumType {
    Bool,
    U8,
    U16,
    U32,
    U64,
    I4,
    I8,
    I16,
    I32,
    I64,
    F16,
    BF16,
    F32,
    F64,
    ComplexF32,
    ComplexF64,
    String,
    QI8,
    QU8,
    QI16,
    QU16,
    QI32,
    Resource,
    Variant,
}

impl DatumType {
    /// The lowercase name TensorFlow uses for this type.
    pub fn name(&self) -> &'static str {
        use DatumType::*;
        match self {
            Bool => "bool",
            U8 => "uint8",
            U16 => "uint16",
            U32 => "uint32",
            U64 => "uint64",
            I4 => "int4",
            I8 => "int8",
            I16 => "int16",
            I32 => "int32",
            I64 => "int64",
            F16 => "float16",
            BF16 => "bfloat16",
            F32 => "float32",
            F64 => "float64",
            ComplexF32 => "complex64",
            ComplexF64 => "complex128",
            String => "string",
            QI8 => "qint8",
            QU8 => "quint8",
            QI16 => "qint16",
            QU16 => "quint16",
            QI32 => "qint32",
            Resource => "resource",
            Variant => "variant",
        }
    }
}

impl serde::Serialize for DatumType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl fmt::Display for DatumType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn tensorflow_names() {
        assert_eq!(DatumType::F32.to_string(), "float32");
        assert_eq!(DatumType::ComplexF32.to_string(), "complex64");
        assert_eq!(DatumType::QU8.to_string(), "quint8");
    }
}
