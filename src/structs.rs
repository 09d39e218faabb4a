use crate::defines::*;

// (type, name) pair from one parameter declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub ty: String,
    pub name: String,
}

// One `// <ret> <name>(<params>);` comment, decomposed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionSignature {
    pub return_type: String,
    pub name: String,
    pub parameters: Vec<Parameter>,
    /// The parameter list exactly as written, reused for the wrapper definition.
    pub raw_parameters: String,
}

impl FunctionSignature {
    pub fn first(&self) -> Option<&Parameter> {
        self.parameters.first()
    }

    pub fn arg_names(&self) -> Vec<&str> {
        self.parameters.iter().map(|p| p.name.as_str()).collect()
    }
}

/// Every name the emitted C depends on. `Default` gives the values the
/// zlib shim expects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrapConfig {
    pub macro_name: String,
    pub stream_pointer_type: String,
    pub bookkeeping_prefix: String,
    pub stream_handle_name: String,
    pub shim_type: String,
    pub shim_unwrap_fn: String,
    pub shim_wrap_fn: String,
    pub real_prefix: String,
    pub wrapper_prefix: String,
    pub log_sink: String,
}

impl Default for WrapConfig {
    fn default() -> Self {
        Self {
            macro_name: D_MACRO_NAME.to_string(),
            stream_pointer_type: D_STREAM_POINTER_TYPE.to_string(),
            bookkeeping_prefix: D_BOOKKEEPING_PREFIX.to_string(),
            stream_handle_name: D_STREAM_HANDLE_NAME.to_string(),
            shim_type: D_SHIM_TYPE.to_string(),
            shim_unwrap_fn: D_SHIM_UNWRAP_FN.to_string(),
            shim_wrap_fn: D_SHIM_WRAP_FN.to_string(),
            real_prefix: D_REAL_PREFIX.to_string(),
            wrapper_prefix: D_WRAPPER_PREFIX.to_string(),
            log_sink: D_LOG_SINK.to_string(),
        }
    }
}

// Counters reported after a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenStats {
    pub lines: usize,
    pub prototypes: usize,
}
