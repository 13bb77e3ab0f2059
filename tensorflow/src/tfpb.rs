use std::collections::HashMap;

use graphpeek_core::internal::*;

/// The subset of `tensorflow/core/framework` and `tensorflow/core/protobuf` messages
/// graphpeek reads. Fields not declared here are skipped by the decoder.
pub mod tensorflow {
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct GraphDef {
        #[prost(message, repeated, tag = "1")]
        pub node: ::prost::alloc::vec::Vec<NodeDef>,
        #[prost(message, optional, tag = "4")]
        pub versions: ::core::option::Option<VersionDef>,
        #[prost(int32, tag = "3")]
        pub version: i32,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct VersionDef {
        #[prost(int32, tag = "1")]
        pub producer: i32,
        #[prost(int32, tag = "2")]
        pub min_consumer: i32,
        #[prost(int32, repeated, tag = "3")]
        pub bad_consumers: ::prost::alloc::vec::Vec<i32>,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct NodeDef {
        #[prost(string, tag = "1")]
        pub name: ::prost::alloc::string::String,
        #[prost(string, tag = "2")]
        pub op: ::prost::alloc::string::String,
        #[prost(string, repeated, tag = "3")]
        pub input: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
        #[prost(string, tag = "4")]
        pub device: ::prost::alloc::string::String,
        #[prost(map = "string, message", tag = "5")]
        pub attr: ::std::collections::HashMap<::prost::alloc::string::String, AttrValue>,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct AttrValue {
        #[prost(oneof = "attr_value::Value", tags = "2, 3, 4, 5, 6, 7, 8, 1, 9")]
        pub value: ::core::option::Option<attr_value::Value>,
    }

    pub mod attr_value {
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct ListValue {
            #[prost(bytes = "vec", repeated, tag = "2")]
            pub s: ::prost::alloc::vec::Vec<::prost::alloc::vec::Vec<u8>>,
            #[prost(int64, repeated, tag = "3")]
            pub i: ::prost::alloc::vec::Vec<i64>,
            #[prost(float, repeated, tag = "4")]
            pub f: ::prost::alloc::vec::Vec<f32>,
            #[prost(bool, repeated, tag = "5")]
            pub b: ::prost::alloc::vec::Vec<bool>,
            #[prost(enumeration = "super::DataType", repeated, tag = "6")]
            pub r#type: ::prost::alloc::vec::Vec<i32>,
            #[prost(message, repeated, tag = "7")]
            pub shape: ::prost::alloc::vec::Vec<super::TensorShapeProto>,
            #[prost(message, repeated, tag = "8")]
            pub tensor: ::prost::alloc::vec::Vec<super::TensorProto>,
        }

        #[derive(Clone, PartialEq, ::prost::Oneof)]
        pub enum Value {
            #[prost(bytes, tag = "2")]
            S(::prost::alloc::vec::Vec<u8>),
            #[prost(int64, tag = "3")]
            I(i64),
            #[prost(float, tag = "4")]
            F(f32),
            #[prost(bool, tag = "5")]
            B(bool),
            #[prost(enumeration = "super::DataType", tag = "6")]
            Type(i32),
            #[prost(message, tag = "7")]
            Shape(super::TensorShapeProto),
            #[prost(message, tag = "8")]
            Tensor(super::TensorProto),
            #[prost(message, tag = "1")]
            List(ListValue),
            #[prost(string, tag = "9")]
            Placeholder(::prost::alloc::string::String),
        }
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct TensorShapeProto {
        #[prost(message, repeated, tag = "2")]
        pub dim: ::prost::alloc::vec::Vec<tensor_shape_proto::Dim>,
        #[prost(bool, tag = "3")]
        pub unknown_rank: bool,
    }

    pub mod tensor_shape_proto {
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct Dim {
            #[prost(int64, tag = "1")]
            pub size: i64,
            #[prost(string, tag = "2")]
            pub name: ::prost::alloc::string::String,
        }
    }

    /// Only the header of a tensor: graphpeek never looks at values.
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct TensorProto {
        #[prost(enumeration = "DataType", tag = "1")]
        pub dtype: i32,
        #[prost(message, optional, tag = "2")]
        pub tensor_shape: ::core::option::Option<TensorShapeProto>,
        #[prost(int32, tag = "3")]
        pub version_number: i32,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct SavedModel {
        #[prost(int64, tag = "1")]
        pub saved_model_schema_version: i64,
        #[prost(message, repeated, tag = "2")]
        pub meta_graphs: ::prost::alloc::vec::Vec<MetaGraphDef>,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct MetaGraphDef {
        #[prost(message, optional, tag = "1")]
        pub meta_info_def: ::core::option::Option<meta_graph_def::MetaInfoDef>,
        #[prost(message, optional, tag = "2")]
        pub graph_def: ::core::option::Option<GraphDef>,
        /// A `map<string, SignatureDef>` on the wire, read as its entries to keep
        /// serialization order.
        #[prost(message, repeated, tag = "5")]
        pub signature_def: ::prost::alloc::vec::Vec<SignatureDefEntry>,
    }

    pub mod meta_graph_def {
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct MetaInfoDef {
            #[prost(string, tag = "1")]
            pub meta_graph_version: ::prost::alloc::string::String,
            #[prost(string, repeated, tag = "4")]
            pub tags: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
            #[prost(string, tag = "5")]
            pub tensorflow_version: ::prost::alloc::string::String,
            #[prost(string, tag = "6")]
            pub tensorflow_git_version: ::prost::alloc::string::String,
        }
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct SignatureDefEntry {
        #[prost(string, tag = "1")]
        pub key: ::prost::alloc::string::String,
        #[prost(message, optional, tag = "2")]
        pub value: ::core::option::Option<SignatureDef>,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct SignatureDef {
        #[prost(message, repeated, tag = "1")]
        pub inputs: ::prost::alloc::vec::Vec<TensorInfoEntry>,
        #[prost(message, repeated, tag = "2")]
        pub outputs: ::prost::alloc::vec::Vec<TensorInfoEntry>,
        #[prost(string, tag = "3")]
        pub method_name: ::prost::alloc::string::String,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct TensorInfoEntry {
        #[prost(string, tag = "1")]
        pub key: ::prost::alloc::string::String,
        #[prost(message, optional, tag = "2")]
        pub value: ::core::option::Option<TensorInfo>,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct TensorInfo {
        #[prost(enumeration = "DataType", tag = "2")]
        pub dtype: i32,
        #[prost(message, optional, tag = "3")]
        pub tensor_shape: ::core::option::Option<TensorShapeProto>,
        #[prost(oneof = "tensor_info::Encoding", tags = "1")]
        pub encoding: ::core::option::Option<tensor_info::Encoding>,
    }

    pub mod tensor_info {
        #[derive(Clone, PartialEq, ::prost::Oneof)]
        pub enum Encoding {
            #[prost(string, tag = "1")]
            Name(::prost::alloc::string::String),
        }
    }

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
    #[repr(i32)]
    pub enum DataType {
        DtInvalid = 0,
        DtFloat = 1,
        DtDouble = 2,
        DtInt32 = 3,
        DtUint8 = 4,
        DtInt16 = 5,
        DtInt8 = 6,
        DtString = 7,
        DtComplex64 = 8,
        DtInt64 = 9,
        DtBool = 10,
        DtQint8 = 11,
        DtQuint8 = 12,
        DtQint32 = 13,
        DtBfloat16 = 14,
        DtQint16 = 15,
        DtQuint16 = 16,
        DtUint16 = 17,
        DtComplex128 = 18,
        DtHalf = 19,
        DtResource = 20,
        DtVariant = 21,
        DtUint32 = 22,
        DtUint64 = 23,
        DtFloat8E5m2 = 24,
        DtFloat8E4m3fn = 25,
        DtFloat8E4m3fnuz = 26,
        DtFloat8E4m3b11fnuz = 27,
        DtFloat8E5m2fnuz = 28,
        DtInt4 = 29,
        DtUint4 = 30,
    }
}

use self::tensorflow::attr_value::{ListValue, Value};
use self::tensorflow::tensor_shape_proto::Dim;
use self::tensorflow::{
    AttrValue, DataType, GraphDef, MetaGraphDef, NodeDef, SavedModel, SignatureDef,
    SignatureDefEntry, TensorInfo, TensorInfoEntry, TensorProto, TensorShapeProto,
};

pub fn graph() -> GraphDef {
    GraphDef { node: vec![], versions: None, version: 0 }
}

pub fn node() -> NodeDef {
    NodeDef {
        name: String::new(),
        op: String::new(),
        input: vec![],
        device: String::new(),
        attr: HashMap::new(),
    }
}

pub fn shape(dims: &[i64]) -> TensorShapeProto {
    TensorShapeProto {
        dim: dims.iter().map(|&size| Dim { size, name: String::new() }).collect(),
        unknown_rank: false,
    }
}

pub fn unknown_rank() -> TensorShapeProto {
    TensorShapeProto { dim: vec![], unknown_rank: true }
}

/// A `Placeholder` node, as TensorFlow writes them.
pub fn placeholder(name: &str, dt: DataType, dims: &[i64]) -> NodeDef {
    node().name(name).op("Placeholder").attr("dtype", dt).attr("shape", shape(dims))
}

pub fn saved_model(meta_graphs: Vec<MetaGraphDef>) -> SavedModel {
    SavedModel { saved_model_schema_version: 1, meta_graphs }
}

pub fn meta_graph(tags: &[&str], graph_def: GraphDef) -> MetaGraphDef {
    MetaGraphDef {
        meta_info_def: Some(tensorflow::meta_graph_def::MetaInfoDef {
            meta_graph_version: String::new(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            tensorflow_version: String::new(),
            tensorflow_git_version: String::new(),
        }),
        graph_def: Some(graph_def),
        signature_def: vec![],
    }
}

pub fn signature() -> SignatureDef {
    SignatureDef {
        inputs: vec![],
        outputs: vec![],
        method_name: "tensorflow/serving/predict".to_string(),
    }
}

pub fn tensor_info(name: &str, dt: DataType, shape: TensorShapeProto) -> TensorInfo {
    TensorInfo {
        dtype: dt.into(),
        tensor_shape: Some(shape),
        encoding: Some(tensorflow::tensor_info::Encoding::Name(name.to_string())),
    }
}

fn encode(message: &impl prost::Message) -> PeekResult<Vec<u8>> {
    let mut buf = vec![];
    message.encode(&mut buf).map_err(|e| format_err!("Prost/Protobuf encoding error : {:?}", e))?;
    Ok(buf)
}

impl GraphDef {
    pub fn node(mut self, n: NodeDef) -> Self {
        self.node.push(n);
        self
    }
    pub fn write_to_bytes(&self) -> PeekResult<Vec<u8>> {
        encode(self)
    }
    pub fn save_to<P: AsRef<::std::path::Path>>(self, p: P) -> PeekResult<()> {
        let buf = self.write_to_bytes()?;
        fs_err::write(p.as_ref(), buf)?;
        Ok(())
    }
}

impl SavedModel {
    pub fn write_to_bytes(&self) -> PeekResult<Vec<u8>> {
        encode(self)
    }
    /// Write `saved_model.pb` into the `dir` directory, creating it if needed.
    pub fn save_to_dir<P: AsRef<::std::path::Path>>(self, dir: P) -> PeekResult<()> {
        fs_err::create_dir_all(dir.as_ref())?;
        fs_err::write(dir.as_ref().join(crate::saved_model::SAVED_MODEL_FILENAME), self.write_to_bytes()?)?;
        Ok(())
    }
}

impl MetaGraphDef {
    pub fn signature<S: ToString>(mut self, key: S, signature: SignatureDef) -> Self {
        self.signature_def.push(SignatureDefEntry { key: key.to_string(), value: Some(signature) });
        self
    }

    pub fn tags(&self) -> &[String] {
        self.meta_info_def.as_ref().map(|m| &*m.tags).unwrap_or(&[])
    }
}

impl SignatureDef {
    pub fn input<S: ToString>(mut self, key: S, info: TensorInfo) -> Self {
        self.inputs.push(TensorInfoEntry { key: key.to_string(), value: Some(info) });
        self
    }
    pub fn output<S: ToString>(mut self, key: S, info: TensorInfo) -> Self {
        self.outputs.push(TensorInfoEntry { key: key.to_string(), value: Some(info) });
        self
    }
}

impl NodeDef {
    pub fn name<S: ToString>(mut self, n: S) -> NodeDef {
        self.name = n.to_string();
        self
    }
    pub fn op<S: ToString>(mut self, n: S) -> NodeDef {
        self.op = n.to_string();
        self
    }
    pub fn input<S: ToString>(mut self, n: S) -> NodeDef {
        self.input.push(n.to_string());
        self
    }
    pub fn attr<S: ToString, V: Into<AttrValue>>(mut self, n: S, v: V) -> NodeDef {
        self.attr.insert(n.to_string(), v.into());
        self
    }
}

impl NodeDef {
    fn get_attr_value(&self, name: &str) -> Option<&Value> {
        self.attr.get(name).and_then(|a| a.value.as_ref())
    }

    pub fn get_attr_opt_datum_type(&self, name: &str) -> PeekResult<Option<DatumType>> {
        match self.get_attr_value(name) {
            Some(Value::Type(v)) => Ok(Some(crate::tensor::datum_type(*v).with_context(|| {
                format!("Node {} ({}) attribute '{}'", self.name, self.op, name)
            })?)),
            _ => Ok(None),
        }
    }

    pub fn get_attr_opt_shape(&self, name: &str) -> Option<Shape> {
        match self.get_attr_value(name) {
            Some(Value::Shape(shape)) => Some(shape.into()),
            _ => None,
        }
    }

    pub fn get_attr_opt_list_shape(&self, name: &str) -> Option<Vec<Shape>> {
        match self.get_attr_value(name) {
            Some(Value::List(list)) => Some(list.shape.iter().map(Shape::from).collect()),
            _ => None,
        }
    }

    pub fn get_attr_opt_tensor(&self, name: &str) -> Option<&TensorProto> {
        match self.get_attr_value(name) {
            Some(Value::Tensor(t)) => Some(t),
            _ => None,
        }
    }
}

impl From<DataType> for AttrValue {
    fn from(t: DataType) -> AttrValue {
        AttrValue { value: Some(Value::Type(t.into())) }
    }
}

impl From<TensorProto> for AttrValue {
    fn from(t: TensorProto) -> AttrValue {
        AttrValue { value: Some(Value::Tensor(t)) }
    }
}

impl From<TensorShapeProto> for AttrValue {
    fn from(t: TensorShapeProto) -> AttrValue {
        AttrValue { value: Some(Value::Shape(t)) }
    }
}

impl From<Vec<TensorShapeProto>> for AttrValue {
    fn from(t: Vec<TensorShapeProto>) -> AttrValue {
        AttrValue {
            value: Some(Value::List(ListValue {
                s: vec![],
                i: vec![],
                f: vec![],
                b: vec![],
                r#type: vec![],
                shape: t,
                tensor: vec![],
            })),
        }
    }
}

/// A tensor header, enough for a `Const` node `value` attribute.
pub fn tensor_header(dt: DataType, dims: &[i64]) -> TensorProto {
    TensorProto { dtype: dt.into(), tensor_shape: Some(shape(dims)), version_number: 0 }
}
