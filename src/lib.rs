//! Expands `// <ret> <name>(<params>);` comments in a shim template into
//! `DLWRAP` registrations and logging wrapper functions.
pub mod defines;
pub mod gen_error;
pub mod generator;
pub mod prototype_analyzer;
pub mod structs;
pub mod wrap_quote;

pub use gen_error::{ExtractError, GenError};
pub use generator::Generator;
pub use prototype_analyzer::PrototypeAnalyzer;
pub use structs::{FunctionSignature, GenStats, Parameter, WrapConfig};
pub use wrap_quote::WrapQuote;
