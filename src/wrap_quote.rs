use crate::structs::*;

// =====================================================================
// Text templates for one recognized prototype
// =====================================================================
pub struct WrapQuote;

impl WrapQuote {
    // =====================================================================
    // Full block: registration, blank line, wrapper, blank line
    // =====================================================================
    pub fn emit(sig: &FunctionSignature, config: &WrapConfig) -> String {
        let mut out = Self::quote_registration(sig, config);
        out.push('\n');
        out.push_str(&Self::quote_wrapper(sig, config));
        out.push('\n');
        out
    }

    // positional aliases: a, b, c, ...
    pub fn aliases(count: usize) -> Vec<String> {
        ('a'..='z').take(count).map(String::from).collect()
    }

    // =====================================================================
    // DLWRAP(name, ret,
    //   (type a, type b),
    // (a, b))
    // =====================================================================
    pub fn quote_registration(sig: &FunctionSignature, config: &WrapConfig) -> String {
        let aliases = Self::aliases(sig.parameters.len());
        let typed = sig
            .parameters
            .iter()
            .zip(&aliases)
            .map(|(param, alias)| format!("{} {}", param.ty, alias))
            .collect::<Vec<_>>();
        format!(
            "{}({}, {},\n  ({}),\n({}))\n",
            config.macro_name,
            sig.name,
            sig.return_type,
            typed.join(", "),
            aliases.join(", ")
        )
    }

    pub fn quote_wrapper(sig: &FunctionSignature, config: &WrapConfig) -> String {
        let mut out = format!(
            "{} {}{}({}) {{\n",
            sig.return_type, config.wrapper_prefix, sig.name, sig.raw_parameters
        );
        out.push_str(&Self::quote_log(sig, config));
        out.push_str(&Self::quote_call(sig, config));
        out.push_str("  return ret;\n}\n");
        out
    }

    // =====================================================================
    // Logging rule: stream pointers are logged by address
    // =====================================================================
    pub fn logs_stream_address(sig: &FunctionSignature, config: &WrapConfig) -> bool {
        sig.first()
            .is_some_and(|first| first.ty == config.stream_pointer_type)
    }

    pub fn quote_log(sig: &FunctionSignature, config: &WrapConfig) -> String {
        match sig.first() {
            Some(first) if Self::logs_stream_address(sig, config) => format!(
                "  fprintf({}, \"{}(%p)\\n\", (void*){});\n",
                config.log_sink, sig.name, first.name
            ),
            _ => format!("  fprintf({}, \"{}\\n\");\n", config.log_sink, sig.name),
        }
    }

    // =====================================================================
    // Bookkeeping rule: prefix match and the first parameter is the handle
    // =====================================================================
    pub fn needs_bookkeeping(sig: &FunctionSignature, config: &WrapConfig) -> bool {
        sig.name.starts_with(&config.bookkeeping_prefix)
            && sig
                .first()
                .is_some_and(|first| first.name == config.stream_handle_name)
    }

    pub fn quote_call(sig: &FunctionSignature, config: &WrapConfig) -> String {
        let call = format!(
            "  {} ret = {}{}({});\n",
            sig.return_type,
            config.real_prefix,
            sig.name,
            sig.arg_names().join(", ")
        );
        if !Self::needs_bookkeeping(sig, config) {
            return call;
        }
        let handle = &config.stream_handle_name;
        format!(
            "  {} shim = {}({});\n{}  {}({}, shim);\n",
            config.shim_type, config.shim_unwrap_fn, handle, call, config.shim_wrap_fn, handle
        )
    }
}
