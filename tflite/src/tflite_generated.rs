// Bindings for the part of the TFLite schema (tensorflow/lite/schema/schema.fbs)
// graphpeek reads and writes. Laid out like flatc output so a regenerated file can
// replace it.
#![allow(dead_code, clippy::all)]

pub mod tflite {
    use flatbuffers::{ForwardsUOffset, Vector, WIPOffset};

    pub const MODEL_IDENTIFIER: &str = "TFL3";

    #[inline]
    pub fn model_buffer_has_identifier(buf: &[u8]) -> bool {
        buf.len() >= 8 && flatbuffers::buffer_has_identifier(buf, MODEL_IDENTIFIER, false)
    }

    #[inline]
    pub fn root_as_model(buf: &[u8]) -> Result<Model, flatbuffers::InvalidFlatbuffer> {
        flatbuffers::root::<Model>(buf)
    }

    /// # Safety
    /// `buf` must hold a verified `Model`.
    #[inline]
    pub unsafe fn root_as_model_unchecked(buf: &[u8]) -> Model {
        unsafe { flatbuffers::root_unchecked::<Model>(buf) }
    }

    #[inline]
    pub fn finish_model_buffer<'a, 'b>(
        fbb: &'b mut flatbuffers::FlatBufferBuilder<'a>,
        root: WIPOffset<Model<'a>>,
    ) {
        fbb.finish(root, Some(MODEL_IDENTIFIER));
    }

    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
    #[repr(transparent)]
    pub struct TensorType(pub i8);

    #[allow(non_upper_case_globals)]
    impl TensorType {
        pub const FLOAT32: Self = Self(0);
        pub const FLOAT16: Self = Self(1);
        pub const INT32: Self = Self(2);
        pub const UINT8: Self = Self(3);
        pub const INT64: Self = Self(4);
        pub const STRING: Self = Self(5);
        pub const BOOL: Self = Self(6);
        pub const INT16: Self = Self(7);
        pub const COMPLEX64: Self = Self(8);
        pub const INT8: Self = Self(9);
        pub const FLOAT64: Self = Self(10);
        pub const COMPLEX128: Self = Self(11);
        pub const UINT64: Self = Self(12);
        pub const RESOURCE: Self = Self(13);
        pub const VARIANT: Self = Self(14);
        pub const UINT32: Self = Self(15);
        pub const UINT16: Self = Self(16);
        pub const INT4: Self = Self(17);
        pub const BFLOAT16: Self = Self(18);
    }

    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
    #[repr(transparent)]
    pub struct BuiltinOperator(pub i32);

    impl BuiltinOperator {
        pub const ADD: Self = Self(0);
        pub const CONV_2D: Self = Self(3);
        pub const DEPTHWISE_CONV_2D: Self = Self(4);
        pub const FULLY_CONNECTED: Self = Self(9);
        pub const LOGISTIC: Self = Self(14);
        pub const RESHAPE: Self = Self(22);
        pub const SOFTMAX: Self = Self(25);
        pub const CUSTOM: Self = Self(32);
        /// Largest code that fits in `deprecated_builtin_code`.
        pub const PLACEHOLDER_FOR_GREATER_OP_CODES: Self = Self(127);
    }

    // Model

    #[derive(Copy, Clone, PartialEq)]
    pub struct Model<'a> {
        pub _tab: flatbuffers::Table<'a>,
    }

    impl<'a> flatbuffers::Follow<'a> for Model<'a> {
        type Inner = Model<'a>;
        #[inline]
        unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
            Self { _tab: unsafe { flatbuffers::Table::new(buf, loc) } }
        }
    }

    impl<'a> Model<'a> {
        pub const VT_VERSION: flatbuffers::VOffsetT = 4;
        pub const VT_OPERATOR_CODES: flatbuffers::VOffsetT = 6;
        pub const VT_SUBGRAPHS: flatbuffers::VOffsetT = 8;
        pub const VT_DESCRIPTION: flatbuffers::VOffsetT = 10;
        pub const VT_BUFFERS: flatbuffers::VOffsetT = 12;

        #[inline]
        pub unsafe fn init_from_table(table: flatbuffers::Table<'a>) -> Self {
            Model { _tab: table }
        }

        pub fn create<'bldr: 'args, 'args: 'mut_bldr, 'mut_bldr>(
            _fbb: &'mut_bldr mut flatbuffers::FlatBufferBuilder<'bldr>,
            args: &'args ModelArgs<'args>,
        ) -> WIPOffset<Model<'bldr>> {
            let start = _fbb.start_table();
            if let Some(x) = args.buffers {
                _fbb.push_slot_always::<WIPOffset<_>>(Model::VT_BUFFERS, x);
            }
            if let Some(x) = args.description {
                _fbb.push_slot_always::<WIPOffset<_>>(Model::VT_DESCRIPTION, x);
            }
            if let Some(x) = args.subgraphs {
                _fbb.push_slot_always::<WIPOffset<_>>(Model::VT_SUBGRAPHS, x);
            }
            if let Some(x) = args.operator_codes {
                _fbb.push_slot_always::<WIPOffset<_>>(Model::VT_OPERATOR_CODES, x);
            }
            _fbb.push_slot::<u32>(Model::VT_VERSION, args.version, 0);
            let o = _fbb.end_table(start);
            WIPOffset::new(o.value())
        }

        #[inline]
        pub fn version(&self) -> u32 {
            unsafe { self._tab.get::<u32>(Model::VT_VERSION, Some(0)).unwrap_or(0) }
        }
        #[inline]
        pub fn operator_codes(&self) -> Option<Vector<'a, ForwardsUOffset<OperatorCode<'a>>>> {
            unsafe {
                self._tab.get::<ForwardsUOffset<Vector<'a, ForwardsUOffset<OperatorCode>>>>(
                    Model::VT_OPERATOR_CODES,
                    None,
                )
            }
        }
        #[inline]
        pub fn subgraphs(&self) -> Option<Vector<'a, ForwardsUOffset<SubGraph<'a>>>> {
            unsafe {
                self._tab.get::<ForwardsUOffset<Vector<'a, ForwardsUOffset<SubGraph>>>>(
                    Model::VT_SUBGRAPHS,
                    None,
                )
            }
        }
        #[inline]
        pub fn description(&self) -> Option<&'a str> {
            unsafe { self._tab.get::<ForwardsUOffset<&str>>(Model::VT_DESCRIPTION, None) }
        }
        #[inline]
        pub fn buffers(&self) -> Option<Vector<'a, ForwardsUOffset<Buffer<'a>>>> {
            unsafe {
                self._tab.get::<ForwardsUOffset<Vector<'a, ForwardsUOffset<Buffer>>>>(
                    Model::VT_BUFFERS,
                    None,
                )
            }
        }
    }

    impl flatbuffers::Verifiable for Model<'_> {
        #[inline]
        fn run_verifier(
            v: &mut flatbuffers::Verifier,
            pos: usize,
        ) -> Result<(), flatbuffers::InvalidFlatbuffer> {
            v.visit_table(pos)?
                .visit_field::<u32>("version", Self::VT_VERSION, false)?
                .visit_field::<ForwardsUOffset<Vector<'_, ForwardsUOffset<OperatorCode>>>>(
                    "operator_codes",
                    Self::VT_OPERATOR_CODES,
                    false,
                )?
                .visit_field::<ForwardsUOffset<Vector<'_, ForwardsUOffset<SubGraph>>>>(
                    "subgraphs",
                    Self::VT_SUBGRAPHS,
                    false,
                )?
                .visit_field::<ForwardsUOffset<&str>>("description", Self::VT_DESCRIPTION, false)?
                .visit_field::<ForwardsUOffset<Vector<'_, ForwardsUOffset<Buffer>>>>(
                    "buffers",
                    Self::VT_BUFFERS,
                    false,
                )?
                .finish();
            Ok(())
        }
    }

    pub struct ModelArgs<'a> {
        pub version: u32,
        pub operator_codes: Option<WIPOffset<Vector<'a, ForwardsUOffset<OperatorCode<'a>>>>>,
        pub subgraphs: Option<WIPOffset<Vector<'a, ForwardsUOffset<SubGraph<'a>>>>>,
        pub description: Option<WIPOffset<&'a str>>,
        pub buffers: Option<WIPOffset<Vector<'a, ForwardsUOffset<Buffer<'a>>>>>,
    }

    // SubGraph

    #[derive(Copy, Clone, PartialEq)]
    pub struct SubGraph<'a> {
        pub _tab: flatbuffers::Table<'a>,
    }

    impl<'a> flatbuffers::Follow<'a> for SubGraph<'a> {
        type Inner = SubGraph<'a>;
        #[inline]
        unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
            Self { _tab: unsafe { flatbuffers::Table::new(buf, loc) } }
        }
    }

    impl<'a> SubGraph<'a> {
        pub const VT_TENSORS: flatbuffers::VOffsetT = 4;
        pub const VT_INPUTS: flatbuffers::VOffsetT = 6;
        pub const VT_OUTPUTS: flatbuffers::VOffsetT = 8;
        pub const VT_OPERATORS: flatbuffers::VOffsetT = 10;
        pub const VT_NAME: flatbuffers::VOffsetT = 12;

        pub fn create<'bldr: 'args, 'args: 'mut_bldr, 'mut_bldr>(
            _fbb: &'mut_bldr mut flatbuffers::FlatBufferBuilder<'bldr>,
            args: &'args SubGraphArgs<'args>,
        ) -> WIPOffset<SubGraph<'bldr>> {
            let start = _fbb.start_table();
            if let Some(x) = args.name {
                _fbb.push_slot_always::<WIPOffset<_>>(SubGraph::VT_NAME, x);
            }
            if let Some(x) = args.operators {
                _fbb.push_slot_always::<WIPOffset<_>>(SubGraph::VT_OPERATORS, x);
            }
            if let Some(x) = args.outputs {
                _fbb.push_slot_always::<WIPOffset<_>>(SubGraph::VT_OUTPUTS, x);
            }
            if let Some(x) = args.inputs {
                _fbb.push_slot_always::<WIPOffset<_>>(SubGraph::VT_INPUTS, x);
            }
            if let Some(x) = args.tensors {
                _fbb.push_slot_always::<WIPOffset<_>>(SubGraph::VT_TENSORS, x);
            }
            let o = _fbb.end_table(start);
            WIPOffset::new(o.value())
        }

        #[inline]
        pub fn tensors(&self) -> Option<Vector<'a, ForwardsUOffset<Tensor<'a>>>> {
            unsafe {
                self._tab.get::<ForwardsUOffset<Vector<'a, ForwardsUOffset<Tensor>>>>(
                    SubGraph::VT_TENSORS,
                    None,
                )
            }
        }
        #[inline]
        pub fn inputs(&self) -> Option<Vector<'a, i32>> {
            unsafe { self._tab.get::<ForwardsUOffset<Vector<'a, i32>>>(SubGraph::VT_INPUTS, None) }
        }
        #[inline]
        pub fn outputs(&self) -> Option<Vector<'a, i32>> {
            unsafe { self._tab.get::<ForwardsUOffset<Vector<'a, i32>>>(SubGraph::VT_OUTPUTS, None) }
        }
        #[inline]
        pub fn operators(&self) -> Option<Vector<'a, ForwardsUOffset<Operator<'a>>>> {
            unsafe {
                self._tab.get::<ForwardsUOffset<Vector<'a, ForwardsUOffset<Operator>>>>(
                    SubGraph::VT_OPERATORS,
                    None,
                )
            }
        }
        #[inline]
        pub fn name(&self) -> Option<&'a str> {
            unsafe { self._tab.get::<ForwardsUOffset<&str>>(SubGraph::VT_NAME, None) }
        }
    }

    impl flatbuffers::Verifiable for SubGraph<'_> {
        #[inline]
        fn run_verifier(
            v: &mut flatbuffers::Verifier,
            pos: usize,
        ) -> Result<(), flatbuffers::InvalidFlatbuffer> {
            v.visit_table(pos)?
                .visit_field::<ForwardsUOffset<Vector<'_, ForwardsUOffset<Tensor>>>>(
                    "tensors",
                    Self::VT_TENSORS,
                    false,
                )?
                .visit_field::<ForwardsUOffset<Vector<'_, i32>>>("inputs", Self::VT_INPUTS, false)?
                .visit_field::<ForwardsUOffset<Vector<'_, i32>>>("outputs", Self::VT_OUTPUTS, false)?
                .visit_field::<ForwardsUOffset<Vector<'_, ForwardsUOffset<Operator>>>>(
                    "operators",
                    Self::VT_OPERATORS,
                    false,
                )?
                .visit_field::<ForwardsUOffset<&str>>("name", Self::VT_NAME, false)?
                .finish();
            Ok(())
        }
    }

    pub struct SubGraphArgs<'a> {
        pub tensors: Option<WIPOffset<Vector<'a, ForwardsUOffset<Tensor<'a>>>>>,
        pub inputs: Option<WIPOffset<Vector<'a, i32>>>,
        pub outputs: Option<WIPOffset<Vector<'a, i32>>>,
        pub operators: Option<WIPOffset<Vector<'a, ForwardsUOffset<Operator<'a>>>>>,
        pub name: Option<WIPOffset<&'a str>>,
    }

    // Tensor

    #[derive(Copy, Clone, PartialEq)]
    pub struct Tensor<'a> {
        pub _tab: flatbuffers::Table<'a>,
    }

    impl<'a> flatbuffers::Follow<'a> for Tensor<'a> {
        type Inner = Tensor<'a>;
        #[inline]
        unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
            Self { _tab: unsafe { flatbuffers::Table::new(buf, loc) } }
        }
    }

    impl<'a> Tensor<'a> {
        pub const VT_SHAPE: flatbuffers::VOffsetT = 4;
        pub const VT_TYPE_: flatbuffers::VOffsetT = 6;
        pub const VT_BUFFER: flatbuffers::VOffsetT = 8;
        pub const VT_NAME: flatbuffers::VOffsetT = 10;
        pub const VT_IS_VARIABLE: flatbuffers::VOffsetT = 14;
        pub const VT_SHAPE_SIGNATURE: flatbuffers::VOffsetT = 18;
        pub const VT_HAS_RANK: flatbuffers::VOffsetT = 20;

        pub fn create<'bldr: 'args, 'args: 'mut_bldr, 'mut_bldr>(
            _fbb: &'mut_bldr mut flatbuffers::FlatBufferBuilder<'bldr>,
            args: &'args TensorArgs<'args>,
        ) -> WIPOffset<Tensor<'bldr>> {
            let start = _fbb.start_table();
            if let Some(x) = args.shape_signature {
                _fbb.push_slot_always::<WIPOffset<_>>(Tensor::VT_SHAPE_SIGNATURE, x);
            }
            if let Some(x) = args.name {
                _fbb.push_slot_always::<WIPOffset<_>>(Tensor::VT_NAME, x);
            }
            _fbb.push_slot::<u32>(Tensor::VT_BUFFER, args.buffer, 0);
            if let Some(x) = args.shape {
                _fbb.push_slot_always::<WIPOffset<_>>(Tensor::VT_SHAPE, x);
            }
            _fbb.push_slot::<bool>(Tensor::VT_HAS_RANK, args.has_rank, false);
            _fbb.push_slot::<bool>(Tensor::VT_IS_VARIABLE, args.is_variable, false);
            _fbb.push_slot::<i8>(Tensor::VT_TYPE_, args.type_.0, 0);
            let o = _fbb.end_table(start);
            WIPOffset::new(o.value())
        }

        #[inline]
        pub fn shape(&self) -> Option<Vector<'a, i32>> {
            unsafe { self._tab.get::<ForwardsUOffset<Vector<'a, i32>>>(Tensor::VT_SHAPE, None) }
        }
        #[inline]
        pub fn type_(&self) -> TensorType {
            TensorType(unsafe { self._tab.get::<i8>(Tensor::VT_TYPE_, Some(0)).unwrap_or(0) })
        }
        #[inline]
        pub fn buffer(&self) -> u32 {
            unsafe { self._tab.get::<u32>(Tensor::VT_BUFFER, Some(0)).unwrap_or(0) }
        }
        #[inline]
        pub fn name(&self) -> Option<&'a str> {
            unsafe { self._tab.get::<ForwardsUOffset<&str>>(Tensor::VT_NAME, None) }
        }
        #[inline]
        pub fn is_variable(&self) -> bool {
            unsafe { self._tab.get::<bool>(Tensor::VT_IS_VARIABLE, Some(false)).unwrap_or(false) }
        }
        #[inline]
        pub fn shape_signature(&self) -> Option<Vector<'a, i32>> {
            unsafe {
                self._tab.get::<ForwardsUOffset<Vector<'a, i32>>>(Tensor::VT_SHAPE_SIGNATURE, None)
            }
        }
        #[inline]
        pub fn has_rank(&self) -> bool {
            unsafe { self._tab.get::<bool>(Tensor::VT_HAS_RANK, Some(false)).unwrap_or(false) }
        }
    }

    impl flatbuffers::Verifiable for Tensor<'_> {
        #[inline]
        fn run_verifier(
            v: &mut flatbuffers::Verifier,
            pos: usize,
        ) -> Result<(), flatbuffers::InvalidFlatbuffer> {
            v.visit_table(pos)?
                .visit_field::<ForwardsUOffset<Vector<'_, i32>>>("shape", Self::VT_SHAPE, false)?
                .visit_field::<i8>("type_", Self::VT_TYPE_, false)?
                .visit_field::<u32>("buffer", Self::VT_BUFFER, false)?
                .visit_field::<ForwardsUOffset<&str>>("name", Self::VT_NAME, false)?
                .visit_field::<bool>("is_variable", Self::VT_IS_VARIABLE, false)?
                .visit_field::<ForwardsUOffset<Vector<'_, i32>>>(
                    "shape_signature",
                    Self::VT_SHAPE_SIGNATURE,
                    false,
                )?
                .visit_field::<bool>("has_rank", Self::VT_HAS_RANK, false)?
                .finish();
            Ok(())
        }
    }

    pub struct TensorArgs<'a> {
        pub shape: Option<WIPOffset<Vector<'a, i32>>>,
        pub type_: TensorType,
        pub buffer: u32,
        pub name: Option<WIPOffset<&'a str>>,
        pub is_variable: bool,
        pub shape_signature: Option<WIPOffset<Vector<'a, i32>>>,
        pub has_rank: bool,
    }

    // Operator

    #[derive(Copy, Clone, PartialEq)]
    pub struct Operator<'a> {
        pub _tab: flatbuffers::Table<'a>,
    }

    impl<'a> flatbuffers::Follow<'a> for Operator<'a> {
        type Inner = Operator<'a>;
        #[inline]
        unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
            Self { _tab: unsafe { flatbuffers::Table::new(buf, loc) } }
        }
    }

    impl<'a> Operator<'a> {
        pub const VT_OPCODE_INDEX: flatbuffers::VOffsetT = 4;
        pub const VT_INPUTS: flatbuffers::VOffsetT = 6;
        pub const VT_OUTPUTS: flatbuffers::VOffsetT = 8;

        pub fn create<'bldr: 'args, 'args: 'mut_bldr, 'mut_bldr>(
            _fbb: &'mut_bldr mut flatbuffers::FlatBufferBuilder<'bldr>,
            args: &'args OperatorArgs<'args>,
        ) -> WIPOffset<Operator<'bldr>> {
            let start = _fbb.start_table();
            if let Some(x) = args.outputs {
                _fbb.push_slot_always::<WIPOffset<_>>(Operator::VT_OUTPUTS, x);
            }
            if let Some(x) = args.inputs {
                _fbb.push_slot_always::<WIPOffset<_>>(Operator::VT_INPUTS, x);
            }
            _fbb.push_slot::<u32>(Operator::VT_OPCODE_INDEX, args.opcode_index, 0);
            let o = _fbb.end_table(start);
            WIPOffset::new(o.value())
        }

        #[inline]
        pub fn opcode_index(&self) -> u32 {
            unsafe { self._tab.get::<u32>(Operator::VT_OPCODE_INDEX, Some(0)).unwrap_or(0) }
        }
        #[inline]
        pub fn inputs(&self) -> Option<Vector<'a, i32>> {
            unsafe { self._tab.get::<ForwardsUOffset<Vector<'a, i32>>>(Operator::VT_INPUTS, None) }
        }
        #[inline]
        pub fn outputs(&self) -> Option<Vector<'a, i32>> {
            unsafe { self._tab.get::<ForwardsUOffset<Vector<'a, i32>>>(Operator::VT_OUTPUTS, None) }
        }
    }

    impl flatbuffers::Verifiable for Operator<'_> {
        #[inline]
        fn run_verifier(
            v: &mut flatbuffers::Verifier,
            pos: usize,
        ) -> Result<(), flatbuffers::InvalidFlatbuffer> {
            v.visit_table(pos)?
                .visit_field::<u32>("opcode_index", Self::VT_OPCODE_INDEX, false)?
                .visit_field::<ForwardsUOffset<Vector<'_, i32>>>("inputs", Self::VT_INPUTS, false)?
                .visit_field::<ForwardsUOffset<Vector<'_, i32>>>("outputs", Self::VT_OUTPUTS, false)?
                .finish();
            Ok(())
        }
    }

    pub struct OperatorArgs<'a> {
        pub opcode_index: u32,
        pub inputs: Option<WIPOffset<Vector<'a, i32>>>,
        pub outputs: Option<WIPOffset<Vector<'a, i32>>>,
    }

    // OperatorCode

    #[derive(Copy, Clone, PartialEq)]
    pub struct OperatorCode<'a> {
        pub _tab: flatbuffers::Table<'a>,
    }

    impl<'a> flatbuffers::Follow<'a> for OperatorCode<'a> {
        type Inner = OperatorCode<'a>;
        #[inline]
        unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
            Self { _tab: unsafe { flatbuffers::Table::new(buf, loc) } }
        }
    }

    impl<'a> OperatorCode<'a> {
        pub const VT_DEPRECATED_BUILTIN_CODE: flatbuffers::VOffsetT = 4;
        pub const VT_CUSTOM_CODE: flatbuffers::VOffsetT = 6;
        pub const VT_VERSION: flatbuffers::VOffsetT = 8;
        pub const VT_BUILTIN_CODE: flatbuffers::VOffsetT = 10;

        pub fn create<'bldr: 'args, 'args: 'mut_bldr, 'mut_bldr>(
            _fbb: &'mut_bldr mut flatbuffers::FlatBufferBuilder<'bldr>,
            args: &'args OperatorCodeArgs<'args>,
        ) -> WIPOffset<OperatorCode<'bldr>> {
            let start = _fbb.start_table();
            _fbb.push_slot::<i32>(OperatorCode::VT_BUILTIN_CODE, args.builtin_code.0, 0);
            _fbb.push_slot::<i32>(OperatorCode::VT_VERSION, args.version, 1);
            if let Some(x) = args.custom_code {
                _fbb.push_slot_always::<WIPOffset<_>>(OperatorCode::VT_CUSTOM_CODE, x);
            }
            _fbb.push_slot::<i8>(
                OperatorCode::VT_DEPRECATED_BUILTIN_CODE,
                args.deprecated_builtin_code,
                0,
            );
            let o = _fbb.end_table(start);
            WIPOffset::new(o.value())
        }

        #[inline]
        pub fn deprecated_builtin_code(&self) -> i8 {
            unsafe {
                self._tab
                    .get::<i8>(OperatorCode::VT_DEPRECATED_BUILTIN_CODE, Some(0))
                    .unwrap_or(0)
            }
        }
        #[inline]
        pub fn custom_code(&self) -> Option<&'a str> {
            unsafe { self._tab.get::<ForwardsUOffset<&str>>(OperatorCode::VT_CUSTOM_CODE, None) }
        }
        #[inline]
        pub fn version(&self) -> i32 {
            unsafe { self._tab.get::<i32>(OperatorCode::VT_VERSION, Some(1)).unwrap_or(1) }
        }
        #[inline]
        pub fn builtin_code(&self) -> BuiltinOperator {
            BuiltinOperator(unsafe {
                self._tab.get::<i32>(OperatorCode::VT_BUILTIN_CODE, Some(0)).unwrap_or(0)
            })
        }
    }

    impl flatbuffers::Verifiable for OperatorCode<'_> {
        #[inline]
        fn run_verifier(
            v: &mut flatbuffers::Verifier,
            pos: usize,
        ) -> Result<(), flatbuffers::InvalidFlatbuffer> {
            v.visit_table(pos)?
                .visit_field::<i8>("deprecated_builtin_code", Self::VT_DEPRECATED_BUILTIN_CODE, false)?
                .visit_field::<ForwardsUOffset<&str>>("custom_code", Self::VT_CUSTOM_CODE, false)?
                .visit_field::<i32>("version", Self::VT_VERSION, false)?
                .visit_field::<i32>("builtin_code", Self::VT_BUILTIN_CODE, false)?
                .finish();
            Ok(())
        }
    }

    pub struct OperatorCodeArgs<'a> {
        pub deprecated_builtin_code: i8,
        pub custom_code: Option<WIPOffset<&'a str>>,
        pub version: i32,
        pub builtin_code: BuiltinOperator,
    }

    // Buffer

    #[derive(Copy, Clone, PartialEq)]
    pub struct Buffer<'a> {
        pub _tab: flatbuffers::Table<'a>,
    }

    impl<'a> flatbuffers::Follow<'a> for Buffer<'a> {
        type Inner = Buffer<'a>;
        #[inline]
        unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
            Self { _tab: unsafe { flatbuffers::Table::new(buf, loc) } }
        }
    }

    impl<'a> Buffer<'a> {
        pub const VT_DATA: flatbuffers::VOffsetT = 4;

        pub fn create<'bldr: 'args, 'args: 'mut_bldr, 'mut_bldr>(
            _fbb: &'mut_bldr mut flatbuffers::FlatBufferBuilder<'bldr>,
            args: &'args BufferArgs<'args>,
        ) -> WIPOffset<Buffer<'bldr>> {
            let start = _fbb.start_table();
            if let Some(x) = args.data {
                _fbb.push_slot_always::<WIPOffset<_>>(Buffer::VT_DATA, x);
            }
            let o = _fbb.end_table(start);
            WIPOffset::new(o.value())
        }

        #[inline]
        pub fn data(&self) -> Option<Vector<'a, u8>> {
            unsafe { self._tab.get::<ForwardsUOffset<Vector<'a, u8>>>(Buffer::VT_DATA, None) }
        }
    }

    impl flatbuffers::Verifiable for Buffer<'_> {
        #[inline]
        fn run_verifier(
            v: &mut flatbuffers::Verifier,
            pos: usize,
        ) -> Result<(), flatbuffers::InvalidFlatbuffer> {
            v.visit_table(pos)?
                .visit_field::<ForwardsUOffset<Vector<'_, u8>>>("data", Self::VT_DATA, false)?
                .finish();
            Ok(())
        }
    }

    pub struct BufferArgs<'a> {
        pub data: Option<WIPOffset<Vector<'a, u8>>>,
    }
}
