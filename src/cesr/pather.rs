use crate::cesr::bexter::{derawify, rawify};
use crate::cesr::matter::{BaseMatter, Matter};
use crate::cesr::{bex_dex, tex_dex};
use crate::errors::{CesrError, Result};
use once_cell::sync::Lazy;
use regex::Regex;

/// Path parts that may be joined into Base64 text
static PATH_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9_]*$").expect("Invalid regex pattern"));

///  Pather is Matter subclass for SAD paths into nested field maps.
///
///  When every part is Base64 without '-' the parts are joined with '-' and
///  stored as Base64 text, otherwise they are joined with '/' and stored as
///  bytes. Absolute paths start with an empty part, so "/a/b" and "-a-b"
///  are the same path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pather {
    base: BaseMatter,
}

impl Pather {
    fn from_base(base: BaseMatter) -> Result<Self> {
        if !bex_dex::TUPLE.contains(&base.code()) && !tex_dex::TUPLE.contains(&base.code()) {
            return Err(CesrError::UnsupportedCode(format!(
                "Invalid code={} for pather.",
                base.code()
            )));
        }
        Ok(Pather { base })
    }

    /// Creates a Pather from a path separated by '/' or, failing that, by '-'
    pub fn from_path(path: &str, relative: bool) -> Result<Self> {
        let sep = if path.contains('/') { '/' } else { '-' };
        let parts: Vec<&str> = path.split(sep).collect();
        Self::from_parts(&parts, relative)
    }

    pub fn from_parts(parts: &[&str], relative: bool) -> Result<Self> {
        let mut parts = parts.to_vec();
        if !relative {
            if parts.is_empty() {
                parts = vec!["", ""];
            } else if !parts[0].is_empty() {
                parts.insert(0, "");
            }
        }

        if parts.iter().all(|part| PATH_RE.is_match(part)) {
            let path = parts.join("-");
            if path.contains("--") {
                return Err(CesrError::InvalidValue(format!(
                    "Non unitary path separators in path={}.",
                    path
                )));
            }

            // leading 'A' would be lost as prepad so escape it with '--'
            let ws = (4 - path.len() % 4) % 4;
            let raw = if path.starts_with('A') && ws <= 1 {
                rawify(&format!("--{}", path))?
            } else {
                rawify(&path)?
            };
            return Self::from_base(BaseMatter::from_code_and_raw(bex_dex::STR_B64_L0, &raw)?);
        }

        let path = parts.join("/");
        if path.contains("//") {
            return Err(CesrError::InvalidValue(format!(
                "Non unitary path separators in path={}.",
                path
            )));
        }
        Self::from_base(BaseMatter::from_code_and_raw(tex_dex::BYTES_L0, path.as_bytes())?)
    }

    pub fn from_qb64(qb64: &str) -> Result<Self> {
        Self::from_base(BaseMatter::from_qb64(qb64)?)
    }

    pub fn from_qb64b(qb64b: &[u8]) -> Result<Self> {
        Self::from_base(BaseMatter::from_qb64b(qb64b)?)
    }

    pub fn from_qb2(qb2: &[u8]) -> Result<Self> {
        Self::from_base(BaseMatter::from_qb2(qb2)?)
    }

    /// Returns the path with '/' separators
    pub fn path(&self) -> Result<String> {
        Ok(self.parts()?.join("/"))
    }

    pub fn parts(&self) -> Result<Vec<String>> {
        let code = self.base.code();
        if bex_dex::TUPLE.contains(&code) {
            let bext = derawify(self.base.raw(), code);
            let path = bext.strip_prefix("--").unwrap_or(&bext);
            return Ok(path.split('-').map(str::to_string).collect());
        }

        let path = String::from_utf8(self.base.raw().to_vec())
            .map_err(|e| CesrError::InvalidValue(format!("Non UTF-8 path: {}", e)))?;
        Ok(path.split('/').map(str::to_string).collect())
    }
}

impl Matter for Pather {
    fn code(&self) -> &str { self.base.code() }
    fn raw(&self) -> &[u8] { self.base.raw() }
    fn soft(&self) -> &str { self.base.soft() }
    fn both(&self) -> String { self.base.both() }
    fn qb64(&self) -> String { self.base.qb64() }
    fn qb64b(&self) -> Vec<u8> { self.base.qb64b() }
    fn qb2(&self) -> Vec<u8> { self.base.qb2() }
    fn full_size(&self) -> usize { self.base.full_size() }
    fn size(&self) -> Option<u32> { self.base.size() }
    fn is_transferable(&self) -> bool { self.base.is_transferable() }
    fn is_digestive(&self) -> bool { self.base.is_digestive() }
    fn is_prefixive(&self) -> bool { self.base.is_prefixive() }
    fn is_special(&self) -> bool { self.base.is_special() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cesr::mtr_dex;

    #[test]
    fn test_pather_bext() -> Result<()> {
        let pather = Pather::from_parts(&["a", "b", "c"], false)?;
        assert_eq!(pather.code(), bex_dex::STR_B64_L1);
        assert_eq!(pather.qb64(), "5AACAA-a-b-c");
        assert_eq!(pather.path()?, "/a/b/c");
        assert_eq!(pather.parts()?, vec!["", "a", "b", "c"]);

        assert_eq!(Pather::from_path("/a/b/c", false)?, pather);
        assert_eq!(Pather::from_path("-a-b-c", false)?, pather);
        assert_eq!(Pather::from_qb64("5AACAA-a-b-c")?, pather);
        assert_eq!(Pather::from_qb2(&pather.qb2())?, pather);

        let pather = Pather::from_path("a/b", true)?;
        assert_eq!(pather.qb64(), "4AABAa-b");
        assert_eq!(pather.path()?, "a/b");

        let root = Pather::from_parts(&[], false)?;
        assert_eq!(root.path()?, "/");
        Ok(())
    }

    #[test]
    fn test_pather_leading_a() -> Result<()> {
        let pather = Pather::from_parts(&["A", "b"], true)?;
        assert_eq!(pather.code(), bex_dex::STR_B64_L2);
        assert_eq!(pather.qb64(), "6AACAAA--A-b");
        assert_eq!(pather.path()?, "A/b");
        assert_eq!(Pather::from_qb64b(&pather.qb64b())?.parts()?, vec!["A", "b"]);
        Ok(())
    }

    #[test]
    fn test_pather_bytes() -> Result<()> {
        let pather = Pather::from_path("/a b/c", false)?;
        assert_eq!(pather.code(), mtr_dex::BYTES_L0);
        assert_eq!(pather.raw(), b"/a b/c");
        assert_eq!(pather.path()?, "/a b/c");
        assert_eq!(pather.parts()?, vec!["", "a b", "c"]);

        // '-' inside a part forces bytes
        let pather = Pather::from_parts(&["x-y", "z"], true)?;
        assert!(tex_dex::TUPLE.contains(&pather.code()));
        assert_eq!(pather.path()?, "x-y/z");
        Ok(())
    }

    #[test]
    fn test_pather_errors() {
        assert!(matches!(
            Pather::from_path("a//b", true),
            Err(CesrError::InvalidValue(_))
        ));
        assert!(matches!(
            Pather::from_parts(&["a b", "", "c"], true),
            Err(CesrError::InvalidValue(_))
        ));
        assert!(matches!(
            Pather::from_qb64("Xicp"),
            Err(CesrError::UnsupportedCode(_))
        ));
    }
}
