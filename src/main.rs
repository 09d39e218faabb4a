//! Command-line front end for the shim wrapper generator.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use zshim_gen::Generator;
use zshim_gen::WrapConfig;
use zshim_gen::defines::*;

/// Echo a shim template, appending a DLWRAP registration and wrapper after
/// every `// <ret> <name>(<params>);` comment.
#[derive(Debug, Parser)]
#[command(name = "zshim-gen")]
#[command(about = "Generate logging wrappers from prototype comments")]
struct Cli {
    /// Template file to expand.
    input: PathBuf,
    /// Write to this file (replaced only on success) instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Registration macro invoked for each prototype.
    #[arg(long, default_value = D_MACRO_NAME)]
    macro_name: String,
    /// First-parameter type whose address is logged.
    #[arg(long, default_value = D_STREAM_POINTER_TYPE)]
    stream_pointer_type: String,
    /// Function-name prefix that gets the shim round trip.
    #[arg(long, default_value = D_BOOKKEEPING_PREFIX)]
    bookkeeping_prefix: String,
    /// First-parameter name that gets the shim round trip.
    #[arg(long, default_value = D_STREAM_HANDLE_NAME)]
    stream_handle_name: String,
    #[arg(long, default_value = D_SHIM_TYPE)]
    shim_type: String,
    #[arg(long, default_value = D_SHIM_UNWRAP_FN)]
    shim_unwrap_fn: String,
    #[arg(long, default_value = D_SHIM_WRAP_FN)]
    shim_wrap_fn: String,
    /// Prefix of the forwarded-to implementation.
    #[arg(long, default_value = D_REAL_PREFIX)]
    real_prefix: String,
    /// Prefix of the generated wrapper.
    #[arg(long, default_value = D_WRAPPER_PREFIX)]
    wrapper_prefix: String,
    /// FILE* expression the wrappers log to.
    #[arg(long, default_value = D_LOG_SINK)]
    log_sink: String,
}

impl Cli {
    fn wrap_config(&self) -> WrapConfig {
        WrapConfig {
            macro_name: self.macro_name.clone(),
            stream_pointer_type: self.stream_pointer_type.clone(),
            bookkeeping_prefix: self.bookkeeping_prefix.clone(),
            stream_handle_name: self.stream_handle_name.clone(),
            shim_type: self.shim_type.clone(),
            shim_unwrap_fn: self.shim_unwrap_fn.clone(),
            shim_wrap_fn: self.shim_wrap_fn.clone(),
            real_prefix: self.real_prefix.clone(),
            wrapper_prefix: self.wrapper_prefix.clone(),
            log_sink: self.log_sink.clone(),
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let generator = Generator::new(cli.wrap_config());

    match &cli.output {
        Some(output) => {
            generator
                .generate_into(&cli.input, output)
                .with_context(|| format!("generation from {} failed", cli.input.display()))?;
        }
        None => {
            let text = generator
                .generate_file(&cli.input)
                .with_context(|| format!("generation from {} failed", cli.input.display()))?;
            let mut stdout = io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}
