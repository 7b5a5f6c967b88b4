use crate::cesr::bexter::{derawify, rawify};
use crate::cesr::matter::{BaseMatter, Matter};
use crate::cesr::tagger::codify;
use crate::cesr::{bex_dex, label_dex, mtr_dex, tag_dex, tex_dex};
use crate::errors::{CesrError, Result};
use once_cell::sync::Lazy;
use regex::Regex;

/// Field map labels that may be encoded as Base64 text
static ATT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z_][a-zA-Z0-9_]*$").expect("Invalid regex pattern"));

/// Labeler is Matter subclass for field map labels.
///
/// Labels of 1 to 11 chars that match `ATT_RE` are coded as tags, longer ones
/// as Base64 text. Any other label is coded as bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labeler {
    base: BaseMatter,
}

impl Labeler {
    fn from_base(base: BaseMatter) -> Result<Self> {
        if !label_dex::TUPLE.contains(&base.code()) {
            return Err(CesrError::UnsupportedCode(format!(
                "Invalid code={} for labeler.",
                base.code()
            )));
        }
        Ok(Labeler { base })
    }

    pub fn from_label(label: &str) -> Result<Self> {
        if label.is_empty() {
            return Self::from_base(BaseMatter::from_code_and_raw(mtr_dex::EMPTY, &[])?);
        }

        if !ATT_RE.is_match(label) {
            return Self::from_base(BaseMatter::from_code_and_raw(
                tex_dex::BYTES_L0,
                label.as_bytes(),
            )?);
        }

        if label.len() <= tag_dex::TUPLE.len() {
            let code = codify(label)?;
            return Self::from_base(BaseMatter::from_soft_and_code(label, code)?);
        }

        // leading 'A' would be lost as prepad so escape it with '-'
        let ws = (4 - label.len() % 4) % 4;
        let raw = if label.starts_with('A') && ws <= 1 {
            rawify(&format!("-{}", label))?
        } else {
            rawify(label)?
        };
        Self::from_base(BaseMatter::from_code_and_raw(bex_dex::STR_B64_L0, &raw)?)
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

    pub fn label(&self) -> Result<String> {
        let code = self.base.code();
        if tag_dex::TUPLE.contains(&code) {
            return Ok(self.base.soft().to_string());
        }

        if bex_dex::TUPLE.contains(&code) {
            let bext = derawify(self.base.raw(), code);
            return Ok(bext.strip_prefix('-').unwrap_or(&bext).to_string());
        }

        String::from_utf8(self.base.raw().to_vec())
            .map_err(|e| CesrError::InvalidValue(format!("Non UTF-8 label: {}", e)))
    }
}

impl Matter for Labeler {
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

    #[test]
    fn test_labeler_tags() -> Result<()> {
        let labeler = Labeler::from_label("a")?;
        assert_eq!(labeler.code(), mtr_dex::TAG1);
        assert_eq!(labeler.qb64(), "0J_a");
        assert_eq!(labeler.label()?, "a");

        let labeler = Labeler::from_label("first_name")?;
        assert_eq!(labeler.code(), mtr_dex::TAG10);
        assert_eq!(Labeler::from_qb2(&labeler.qb2())?.label()?, "first_name");
        Ok(())
    }

    #[test]
    fn test_labeler_bext() -> Result<()> {
        let label = "Abcdefghijkl";
        let labeler = Labeler::from_label(label)?;
        assert!(bex_dex::TUPLE.contains(&labeler.code()));
        assert_eq!(Labeler::from_qb64(&labeler.qb64())?.label()?, label);

        let label = "abcdefghijklm";
        let labeler = Labeler::from_label(label)?;
        assert!(bex_dex::TUPLE.contains(&labeler.code()));
        assert_eq!(Labeler::from_qb64b(&labeler.qb64b())?.label()?, label);
        Ok(())
    }

    #[test]
    fn test_labeler_bytes_and_empty() -> Result<()> {
        let labeler = Labeler::from_label("@id")?;
        assert!(tex_dex::TUPLE.contains(&labeler.code()));
        assert_eq!(labeler.label()?, "@id");

        let labeler = Labeler::from_label("")?;
        assert_eq!(labeler.code(), mtr_dex::EMPTY);
        assert_eq!(labeler.qb64(), "1AAP");
        assert_eq!(labeler.label()?, "");
        Ok(())
    }

    #[test]
    fn test_labeler_errors() {
        assert!(matches!(
            Labeler::from_qb64("EAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA"),
            Err(CesrError::UnsupportedCode(_))
        ));
    }
}
