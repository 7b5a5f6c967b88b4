use crate::cesr::matter::{BaseMatter, Matter};
use crate::cesr::{is_base64, tag_dex};
use crate::errors::{CesrError, Result};

/// Tagger is Matter subclass for compact special fixed size primitive with
/// non-empty soft part and empty raw part.
///
/// The tag is carried entirely in the soft part and the code is selected from
/// its length, so tags of 1 to 11 Base64 chars are supported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tagger {
    base: BaseMatter,
}

impl Tagger {
    fn from_base(base: BaseMatter) -> Result<Self> {
        if !tag_dex::TUPLE.contains(&base.code()) {
            return Err(CesrError::UnsupportedCode(format!(
                "Invalid code={} for tagger.",
                base.code()
            )));
        }
        Ok(Tagger { base })
    }

    pub fn from_tag(tag: &str) -> Result<Self> {
        let code = codify(tag)?;
        Self::from_base(BaseMatter::from_soft_and_code(tag, code)?)
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

    /// Returns the tag text
    pub fn tag(&self) -> &str {
        self.base.soft()
    }
}

/// Returns the tag code for `tag` based on its length
pub(crate) fn codify(tag: &str) -> Result<&'static str> {
    if !is_base64(tag) {
        return Err(CesrError::CharsetViolation(format!(
            "Tag={} is not Base64.",
            tag
        )));
    }

    let l = tag.len();
    if l < 1 || l > tag_dex::TUPLE.len() {
        return Err(CesrError::InvalidSoft(format!(
            "Tag={} is empty or oversized.",
            tag
        )));
    }
    Ok(tag_dex::TUPLE[l - 1])
}

impl Matter for Tagger {
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
    fn test_tagger() -> Result<()> {
        let tagger = Tagger::from_tag("icp")?;
        assert_eq!(tagger.code(), mtr_dex::TAG3);
        assert_eq!(tagger.tag(), "icp");
        assert_eq!(tagger.qb64(), "Xicp");
        assert!(tagger.raw().is_empty());
        assert!(tagger.is_special());
        assert_eq!(Tagger::from_qb64("Xicp")?, tagger);
        assert_eq!(Tagger::from_qb2(&tagger.qb2())?, tagger);

        let tagger = Tagger::from_tag("z")?;
        assert_eq!(tagger.code(), mtr_dex::TAG1);
        assert_eq!(tagger.qb64(), "0J_z");

        let tagger = Tagger::from_tag("KERICAAACAA")?;
        assert_eq!(tagger.code(), mtr_dex::TAG11);
        assert_eq!(tagger.qb64(), "ZKERICAAACAA");
        Ok(())
    }

    #[test]
    fn test_tagger_codes_by_length() -> Result<()> {
        let text = "abcdefghijk";
        for l in 1..=11 {
            let tagger = Tagger::from_tag(&text[..l])?;
            assert_eq!(tagger.code(), tag_dex::TUPLE[l - 1]);
            assert_eq!(tagger.qb64().len() % 4, 0);
            assert_eq!(Tagger::from_qb64b(&tagger.qb64b())?.tag(), &text[..l]);
        }
        Ok(())
    }

    #[test]
    fn test_tagger_errors() {
        assert!(matches!(Tagger::from_tag(""), Err(CesrError::InvalidSoft(_))));
        assert!(matches!(
            Tagger::from_tag("abcdefghijkl"),
            Err(CesrError::InvalidSoft(_))
        ));
        assert!(matches!(
            Tagger::from_tag("a.b"),
            Err(CesrError::CharsetViolation(_))
        ));
        assert!(matches!(
            Tagger::from_qb64("EAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA"),
            Err(CesrError::UnsupportedCode(_))
        ));
    }
}
