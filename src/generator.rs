use crate::gen_error::GenError;
use crate::prototype_analyzer::PrototypeAnalyzer;
use crate::structs::*;
use crate::wrap_quote::WrapQuote;
use log::{debug, info};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

// =====================================================================
// Line driver: echo every line, append a block after each prototype
// =====================================================================
pub struct Generator {
    config: WrapConfig,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new(WrapConfig::default())
    }
}

impl Generator {
    pub fn new(config: WrapConfig) -> Self {
        Self { config }
    }

    /// Streams `input` into `output` in line order. Stops at the first
    /// malformed prototype; whatever was already written is not valid output.
    pub fn generate<R: BufRead, W: Write>(
        &self,
        input: R,
        mut output: W,
    ) -> Result<GenStats, GenError> {
        let mut stats = GenStats::default();
        for (idx, line) in input.lines().enumerate() {
            let line_no = idx + 1;
            let line = line.map_err(|source| GenError::Read { line_no, source })?;
            let line = line.trim();
            stats.lines += 1;
            writeln!(output, "{line}")?;

            match PrototypeAnalyzer::extract(line) {
                Ok(Some(sig)) => {
                    debug!(
                        "line {line_no}: {} ({} params, address log: {}, bookkeeping: {})",
                        sig.name,
                        sig.parameters.len(),
                        WrapQuote::logs_stream_address(&sig, &self.config),
                        WrapQuote::needs_bookkeeping(&sig, &self.config),
                    );
                    output.write_all(WrapQuote::emit(&sig, &self.config).as_bytes())?;
                    stats.prototypes += 1;
                }
                Ok(None) => {
                    if PrototypeAnalyzer::looks_like_prototype(line) {
                        debug!("line {line_no}: not recognized as a prototype, passed through: {line}");
                    }
                }
                Err(source) => {
                    return Err(GenError::MalformedPrototype {
                        line_no,
                        line: line.to_string(),
                        source,
                    });
                }
            }
        }
        output.flush()?;
        info!(
            "{} lines read, {} wrappers generated",
            stats.lines, stats.prototypes
        );
        Ok(stats)
    }

    pub fn generate_string(&self, input: &str) -> Result<String, GenError> {
        let mut out = Vec::new();
        self.generate(input.as_bytes(), &mut out)?;
        Ok(String::from_utf8(out).map_err(anyhow::Error::from)?)
    }

    // =====================================================================
    // Whole file rendered in memory; nothing escapes on failure
    // =====================================================================
    pub fn generate_file(&self, path: &Path) -> Result<String, GenError> {
        let reader = Self::open(path)?;
        let mut out = Vec::new();
        self.generate(reader, &mut out)?;
        Ok(String::from_utf8(out).map_err(anyhow::Error::from)?)
    }

    // =====================================================================
    // Writes through a temp file next to `output`, renamed only on success
    // =====================================================================
    pub fn generate_into(&self, input: &Path, output: &Path) -> Result<GenStats, GenError> {
        let reader = Self::open(input)?;
        let dir = match output.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(dir).map_err(|source| GenError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        let stats = self.generate(reader, BufWriter::new(tmp.as_file_mut()))?;
        tmp.persist(output).map_err(|err| GenError::Io {
            path: output.to_path_buf(),
            source: err.error,
        })?;
        info!("wrote {}", output.display());
        Ok(stats)
    }

    fn open(path: &Path) -> Result<BufReader<File>, GenError> {
        let file = File::open(path).map_err(|source| GenError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(BufReader::new(file))
    }
}
