// =====================================================================
// =====================================================================
// Names baked into the generated shim source
// =====================================================================
// =====================================================================

// =====================================================================
// Registration macro (defined in dlutil.h)
// =====================================================================
pub const D_MACRO_NAME: &str = "DLWRAP";

// =====================================================================
// Rule triggers
// =====================================================================
// first parameter type that gets its address logged
pub const D_STREAM_POINTER_TYPE: &str = "z_streamp";
// functions with this prefix get the shim round trip
pub const D_BOOKKEEPING_PREFIX: &str = "deflate";
pub const D_STREAM_HANDLE_NAME: &str = "strm";

// =====================================================================
// Shim helpers (implemented by hand in the shim source)
// =====================================================================
pub const D_SHIM_TYPE: &str = "z_shimp";
pub const D_SHIM_UNWRAP_FN: &str = "unwrap_z_streamp";
pub const D_SHIM_WRAP_FN: &str = "wrap_z_streamp";

// =====================================================================
// Naming conventions
// =====================================================================
pub const D_REAL_PREFIX: &str = "_real_";
pub const D_WRAPPER_PREFIX: &str = "wrap_";
pub const D_LOG_SINK: &str = "stderr";

// aliases are single letters: a..z
pub const D_MAX_PARAMETERS: usize = 26;
