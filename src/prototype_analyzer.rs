use crate::defines::*;
use crate::gen_error::ExtractError;
use crate::structs::*;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // "// int fn(int foo, float bar);" -> ("int", "fn", "int foo, float bar")
    static ref PROTOTYPE_RE: Regex =
        Regex::new(r"^//\s+(?P<ret>\w+)\s+(?P<name>\w+)\((?P<params>[^)]*)\);$").unwrap();
    static ref SEPARATOR_RE: Regex = Regex::new(r",\s*").unwrap();
    // "char *buf" -> ("char *", "buf")
    static ref PARAMETER_RE: Regex = Regex::new(r"^(?P<ty>.+\W+)(?P<name>\w+)$").unwrap();
    // anything shaped like a prototype comment, including ones the recognizer refuses
    static ref NEAR_PROTOTYPE_RE: Regex = Regex::new(r"^//\s+.*\(.*\);$").unwrap();
}

// =====================================================================
// Prototype comment analyzer
// =====================================================================
pub struct PrototypeAnalyzer;

impl PrototypeAnalyzer {
    // =====================================================================
    // Decompose a line into a signature. Ok(None) means "not a prototype
    // comment"; multi-word return types land here on purpose.
    // =====================================================================
    pub fn extract(line: &str) -> Result<Option<FunctionSignature>, ExtractError> {
        let Some(caps) = PROTOTYPE_RE.captures(line.trim()) else {
            return Ok(None);
        };
        let raw_parameters = caps["params"].to_string();
        let parameters = Self::split_parameters(&raw_parameters)?;
        Ok(Some(FunctionSignature {
            return_type: caps["ret"].to_string(),
            name: caps["name"].to_string(),
            parameters,
            raw_parameters,
        }))
    }

    // =====================================================================
    // "int foo, float bar" -> [("int", "foo"), ("float", "bar")]
    // =====================================================================
    pub fn split_parameters(params: &str) -> Result<Vec<Parameter>, ExtractError> {
        if params.trim().is_empty() {
            return Ok(Vec::new());
        }
        let parameters = SEPARATOR_RE
            .split(params)
            .map(Self::decompose_parameter)
            .collect::<Result<Vec<_>, _>>()?;
        if parameters.len() > D_MAX_PARAMETERS {
            return Err(ExtractError::TooManyParameters {
                count: parameters.len(),
                max: D_MAX_PARAMETERS,
            });
        }
        Ok(parameters)
    }

    // =====================================================================
    // The name is the trailing word run, the type is everything before it.
    // =====================================================================
    pub fn decompose_parameter(segment: &str) -> Result<Parameter, ExtractError> {
        let caps = PARAMETER_RE
            .captures(segment)
            .ok_or_else(|| ExtractError::MalformedParameter {
                segment: segment.to_string(),
            })?;
        let ty = caps["ty"].trim();
        if ty.is_empty() {
            return Err(ExtractError::EmptyParameterType {
                segment: segment.to_string(),
            });
        }
        Ok(Parameter {
            ty: ty.to_string(),
            name: caps["name"].to_string(),
        })
    }

    pub fn looks_like_prototype(line: &str) -> bool {
        NEAR_PROTOTYPE_RE.is_match(line.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn param(ty: &str, name: &str) -> Parameter {
        Parameter {
            ty: ty.to_string(),
            name: name.to_string(),
        }
    }

    #[test]
    fn test_extract_two_parameters() {
        let sig = PrototypeAnalyzer::extract("// int inflate(z_streamp strm, int flush);")
            .unwrap()
            .unwrap();
        assert_eq!(sig.return_type, "int");
        assert_eq!(sig.name, "inflate");
        assert_eq!(
            sig.parameters,
            vec![param("z_streamp", "strm"), param("int", "flush")]
        );
        assert_eq!(sig.raw_parameters, "z_streamp strm, int flush");
    }

    #[test]
    fn test_extract_trims_line() {
        let sig = PrototypeAnalyzer::extract("   // uLong deflateBound(z_streamp strm, uLong sourceLen);  \t")
            .unwrap()
            .unwrap();
        assert_eq!(sig.name, "deflateBound");
        assert_eq!(sig.return_type, "uLong");
    }

    #[test]
    fn test_pointer_parameters() {
        let sig = PrototypeAnalyzer::extract(
            "// int compress(Bytef *dest, uLongf *destLen, const Bytef *source, uLong sourceLen);",
        )
        .unwrap()
        .unwrap();
        assert_eq!(
            sig.parameters,
            vec![
                param("Bytef *", "dest"),
                param("uLongf *", "destLen"),
                param("const Bytef *", "source"),
                param("uLong", "sourceLen"),
            ]
        );
    }

    #[test]
    fn test_pointer_without_space_before_name() {
        assert_eq!(
            PrototypeAnalyzer::decompose_parameter("char*buf").unwrap(),
            param("char*", "buf")
        );
        assert_eq!(
            PrototypeAnalyzer::decompose_parameter("unsigned *pending").unwrap(),
            param("unsigned *", "pending")
        );
    }

    #[test]
    fn test_empty_parameter_list_is_zero_parameters() {
        let sig = PrototypeAnalyzer::extract("// int zlibVersionCheck();")
            .unwrap()
            .unwrap();
        assert!(sig.parameters.is_empty());
        assert_eq!(sig.raw_parameters, "");
    }

    #[test]
    fn test_non_prototype_lines() {
        for line in [
            "#include <zlib.h>",
            "",
            "// libzopfli.so.1",
            "//+ int deflate(z_streamp strm, int flush);",
            "// unsigned long crc32(unsigned long crc, const Bytef *buf, uInt len);",
            "// int deflate(z_streamp strm, int flush)",
            "int deflate(z_streamp strm, int flush);",
        ] {
            assert_eq!(PrototypeAnalyzer::extract(line), Ok(None), "{line}");
        }
    }

    #[test]
    fn test_multi_word_return_type_is_only_near_miss() {
        let line = "// unsigned long crc32(unsigned long crc, const Bytef *buf, uInt len);";
        assert_eq!(PrototypeAnalyzer::extract(line), Ok(None));
        assert!(PrototypeAnalyzer::looks_like_prototype(line));
        assert!(!PrototypeAnalyzer::looks_like_prototype("// libzopfli.so.1"));
    }

    #[test]
    fn test_bare_identifier_is_malformed() {
        let err = PrototypeAnalyzer::extract("// int deflateEnd(strm);").unwrap_err();
        assert_eq!(
            err,
            ExtractError::MalformedParameter {
                segment: "strm".to_string()
            }
        );
        assert!(PrototypeAnalyzer::extract("// int zlibCompileFlags(void);").is_err());
    }

    #[test]
    fn test_space_before_comma_is_malformed() {
        let err = PrototypeAnalyzer::extract("// int f(int a , int b);").unwrap_err();
        assert_eq!(
            err,
            ExtractError::MalformedParameter {
                segment: "int a ".to_string()
            }
        );
    }

    #[test]
    fn test_whitespace_only_type_is_rejected() {
        let err = PrototypeAnalyzer::extract("// int f(  foo);").unwrap_err();
        assert!(matches!(err, ExtractError::EmptyParameterType { .. }));
    }

    #[test]
    fn test_parameter_limit() {
        let params = |n: usize| {
            (0..n)
                .map(|i| format!("int p{i}"))
                .collect::<Vec<_>>()
                .join(", ")
        };
        assert_eq!(
            PrototypeAnalyzer::split_parameters(&params(26)).unwrap().len(),
            26
        );
        assert_eq!(
            PrototypeAnalyzer::split_parameters(&params(27)).unwrap_err(),
            ExtractError::TooManyParameters { count: 27, max: 26 }
        );
    }
}
