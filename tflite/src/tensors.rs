use graphpeek_core::internal::*;

use crate::tflite::{SubGraph, TensorType};

impl TryFrom<TensorType> for DatumType {
    type Error = PeekError;
    fn try_from(t: TensorType) -> PeekResult<DatumType> {
        Ok(match t {
            TensorType::FLOAT32 => DatumType::F32,
            TensorType::FLOAT16 => DatumType::F16,
            TensorType::BFLOAT16 => DatumType::BF16,
            TensorType::FLOAT64 => DatumType::F64,
            TensorType::INT4 => DatumType::I4,
            TensorType::INT8 => DatumType::I8,
            TensorType::INT16 => DatumType::I16,
            TensorType::INT32 => DatumType::I32,
            TensorType::INT64 => DatumType::I64,
            TensorType::UINT8 => DatumType::U8,
            TensorType::UINT16 => DatumType::U16,
            TensorType::UINT32 => DatumType::U32,
            TensorType::UINT64 => DatumType::U64,
            TensorType::BOOL => DatumType::Bool,
            TensorType::STRING => DatumType::String,
            TensorType::COMPLEX64 => DatumType::ComplexF32,
            TensorType::COMPLEX128 => DatumType::ComplexF64,
            TensorType::RESOURCE => DatumType::Resource,
            TensorType::VARIANT => DatumType::Variant,
            _ => bail!("Unknown TensorType {}", t.0),
        })
    }
}

/// Flatbuffer element type for a datum type. Quantized types map to their storage type.
pub fn tensor_type(dt: DatumType) -> TensorType {
    match dt {
        DatumType::F32 => TensorType::FLOAT32,
        DatumType::F16 => TensorType::FLOAT16,
        DatumType::BF16 => TensorType::BFLOAT16,
        DatumType::F64 => TensorType::FLOAT64,
        DatumType::I4 => TensorType::INT4,
        DatumType::I8 | DatumType::QI8 => TensorType::INT8,
        DatumType::I16 | DatumType::QI16 => TensorType::INT16,
        DatumType::I32 | DatumType::QI32 => TensorType::INT32,
        DatumType::I64 => TensorType::INT64,
        DatumType::U8 | DatumType::QU8 => TensorType::UINT8,
        DatumType::U16 | DatumType::QU16 => TensorType::UINT16,
        DatumType::U32 => TensorType::UINT32,
        DatumType::U64 => TensorType::UINT64,
        DatumType::Bool => TensorType::BOOL,
        DatumType::String => TensorType::STRING,
        DatumType::ComplexF32 => TensorType::COMPLEX64,
        DatumType::ComplexF64 => TensorType::COMPLEX128,
        DatumType::Resource => TensorType::RESOURCE,
        DatumType::Variant => TensorType::VARIANT,
    }
}

/// Facts about the tensor at `index` in a subgraph tensor table.
///
/// `shape_signature` wins over `shape` when present, as it keeps `-1` for dynamic
/// dimensions.
pub fn flat_tensor_to_info(subgraph: &SubGraph, index: i32) -> PeekResult<TensorInfo> {
    let tensors = subgraph.tensors().context("No tensors in subgraph")?;
    let ix = usize::try_from(index).ok().filter(|ix| *ix < tensors.len()).with_context(|| {
        format!("Tensor index {} out of range (subgraph has {} tensors)", index, tensors.len())
    })?;
    let flat = tensors.get(ix);
    let name = flat.name().map(|n| n.to_string()).unwrap_or_else(|| format!("tensor_{ix}"));
    let shape = match (flat.shape_signature(), flat.shape()) {
        (Some(sig), _) => Shape::from_signed(sig.iter().map(|d| d as i64)),
        (None, Some(shape)) => Shape::from_signed(shape.iter().map(|d| d as i64)),
        (None, None) if flat.has_rank() => Shape::scalar(),
        (None, None) => Shape::unknown(),
    };
    let datum_type = match DatumType::try_from(flat.type_()) {
        Ok(dt) => Some(dt),
        Err(e) => {
            warn!("Tensor {name}: {e}");
            None
        }
    };
    Ok(TensorInfo::new(name, shape, datum_type).with_index(ix))
}

/// Names of the builtin operators, indexed by their code.
const BUILTIN_NAMES: &[&str] = &[
    "ADD",
    "AVERAGE_POOL_2D",
    "CONCATENATION",
    "CONV_2D",
    "DEPTHWISE_CONV_2D",
    "DEPTH_TO_SPACE",
    "DEQUANTIZE",
    "EMBEDDING_LOOKUP",
    "FLOOR",
    "FULLY_CONNECTED",
    "HASHTABLE_LOOKUP",
    "L2_NORMALIZATION",
    "L2_POOL_2D",
    "LOCAL_RESPONSE_NORMALIZATION",
    "LOGISTIC",
    "LSH_PROJECTION",
    "LSTM",
    "MAX_POOL_2D",
    "MUL",
    "RELU",
    "RELU_N1_TO_1",
    "RELU6",
    "RESHAPE",
    "RESIZE_BILINEAR",
    "RNN",
    "SOFTMAX",
    "SPACE_TO_DEPTH",
    "SVDF",
    "TANH",
    "CONCAT_EMBEDDINGS",
    "SKIP_GRAM",
    "CALL",
    "CUSTOM",
    "EMBEDDING_LOOKUP_SPARSE",
    "PAD",
    "UNIDIRECTIONAL_SEQUENCE_RNN",
    "GATHER",
    "BATCH_TO_SPACE_ND",
    "SPACE_TO_BATCH_ND",
    "TRANSPOSE",
    "MEAN",
    "SUB",
    "DIV",
    "SQUEEZE",
    "UNIDIRECTIONAL_SEQUENCE_LSTM",
    "STRIDED_SLICE",
    "BIDIRECTIONAL_SEQUENCE_RNN",
    "EXP",
    "TOPK_V2",
    "SPLIT",
    "LOG_SOFTMAX",
    "DELEGATE",
    "BIDIRECTIONAL_SEQUENCE_LSTM",
    "CAST",
    "PRELU",
    "MAXIMUM",
    "ARG_MAX",
    "MINIMUM",
    "LESS",
    "NEG",
    "PADV2",
    "GREATER",
    "GREATER_EQUAL",
    "LESS_EQUAL",
    "SELECT",
    "SLICE",
    "SIN",
    "TRANSPOSE_CONV",
    "SPARSE_TO_DENSE",
    "TILE",
    "EXPAND_DIMS",
    "EQUAL",
    "NOT_EQUAL",
    "LOG",
    "SUM",
    "SQRT",
    "RSQRT",
    "SHAPE",
    "POW",
    "ARG_MIN",
    "FAKE_QUANT",
    "REDUCE_PROD",
    "REDUCE_MAX",
    "PACK",
    "LOGICAL_OR",
    "ONE_HOT",
    "LOGICAL_AND",
    "LOGICAL_NOT",
    "UNPACK",
    "REDUCE_MIN",
    "FLOOR_DIV",
    "REDUCE_ANY",
    "SQUARE",
    "ZEROS_LIKE",
    "FILL",
    "FLOOR_MOD",
    "RANGE",
    "RESIZE_NEAREST_NEIGHBOR",
    "LEAKY_RELU",
    "SQUARED_DIFFERENCE",
    "MIRROR_PAD",
    "ABS",
    "SPLIT_V",
    "UNIQUE",
    "CEIL",
    "REVERSE_V2",
    "ADD_N",
    "GATHER_ND",
    "COS",
    "WHERE",
    "RANK",
    "ELU",
    "REVERSE_SEQUENCE",
    "MATRIX_DIAG",
    "QUANTIZE",
    "MATRIX_SET_DIAG",
    "ROUND",
    "HARD_SWISH",
    "IF",
    "WHILE",
    "NON_MAX_SUPPRESSION_V4",
    "NON_MAX_SUPPRESSION_V5",
    "SCATTER_ND",
    "SELECT_V2",
    "DENSIFY",
    "SEGMENT_SUM",
    "BATCH_MATMUL",
];

pub fn builtin_name(code: i32) -> String {
    usize::try_from(code)
        .ok()
        .and_then(|ix| BUILTIN_NAMES.get(ix))
        .map(|s| s.to_string())
        .unwrap_or_else(|| format!("BUILTIN_{code}"))
}

/// Builtin code for an operator name, if it is a builtin.
pub fn builtin_code(name: &str) -> Option<i32> {
    BUILTIN_NAMES.iter().position(|n| *n == name).map(|ix| ix as i32)
}
