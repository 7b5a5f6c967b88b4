use crate::cesr::matter::Matter;
use crate::cesr::tagger::Tagger;
use crate::cesr::{b64_to_u32, int_to_b64, tag_dex, Versionage};
use crate::errors::{CesrError, Result};

/// Versage is a protocol with its protocol version and optional genus version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Versage {
    pub proto: String,
    pub pvrsn: Versionage,
    pub gvrsn: Option<Versionage>,
}

/// Verser is Tagger for protocol and version pairs.
///
/// Tag is the 4 char protocol followed by one major and two minor version
/// chars, Tag7 without a genus version and Tag10 with one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verser {
    tagger: Tagger,
}

impl Verser {
    fn from_tagger(tagger: Tagger) -> Result<Self> {
        if tagger.code() != tag_dex::TAG7 && tagger.code() != tag_dex::TAG10 {
            return Err(CesrError::UnsupportedCode(format!(
                "Invalid code={} for verser, expected Tag7 or Tag10.",
                tagger.code()
            )));
        }
        Ok(Verser { tagger })
    }

    pub fn from_versage(versage: &Versage) -> Result<Self> {
        let proto = &versage.proto;
        if proto.len() != 4 || !proto.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(CesrError::InvalidValue(format!(
                "Invalid protocol={}.",
                proto
            )));
        }

        let mut tag = format!("{}{}", proto, ver_to_b64(&versage.pvrsn)?);
        if let Some(gvrsn) = &versage.gvrsn {
            tag.push_str(&ver_to_b64(gvrsn)?);
        }
        Self::from_tagger(Tagger::from_tag(&tag)?)
    }

    pub fn from_qb64(qb64: &str) -> Result<Self> {
        Self::from_tagger(Tagger::from_qb64(qb64)?)
    }

    pub fn from_qb64b(qb64b: &[u8]) -> Result<Self> {
        Self::from_tagger(Tagger::from_qb64b(qb64b)?)
    }

    pub fn from_qb2(qb2: &[u8]) -> Result<Self> {
        Self::from_tagger(Tagger::from_qb2(qb2)?)
    }

    pub fn versage(&self) -> Result<Versage> {
        let tag = self.tagger.tag();
        let gvrsn = if tag.len() == 10 {
            Some(b64_to_ver(&tag[7..10])?)
        } else {
            None
        };

        Ok(Versage {
            proto: tag[..4].to_string(),
            pvrsn: b64_to_ver(&tag[4..7])?,
            gvrsn,
        })
    }
}

fn ver_to_b64(version: &Versionage) -> Result<String> {
    if version.major > 63 || version.minor > 4095 {
        return Err(CesrError::InvalidValue(format!(
            "Out of bounds version={}.{}.",
            version.major, version.minor
        )));
    }
    Ok(format!(
        "{}{}",
        int_to_b64(version.major as u64, 1),
        int_to_b64(version.minor as u64, 2)
    ))
}

fn b64_to_ver(b64: &str) -> Result<Versionage> {
    Ok(Versionage {
        major: b64_to_u32(&b64[..1])?,
        minor: b64_to_u32(&b64[1..3])?,
    })
}

impl Matter for Verser {
    fn code(&self) -> &str { self.tagger.code() }
    fn raw(&self) -> &[u8] { self.tagger.raw() }
    fn soft(&self) -> &str { self.tagger.soft() }
    fn both(&self) -> String { self.tagger.both() }
    fn qb64(&self) -> String { self.tagger.qb64() }
    fn qb64b(&self) -> Vec<u8> { self.tagger.qb64b() }
    fn qb2(&self) -> Vec<u8> { self.tagger.qb2() }
    fn full_size(&self) -> usize { self.tagger.full_size() }
    fn size(&self) -> Option<u32> { self.tagger.size() }
    fn is_transferable(&self) -> bool { self.tagger.is_transferable() }
    fn is_digestive(&self) -> bool { self.tagger.is_digestive() }
    fn is_prefixive(&self) -> bool { self.tagger.is_prefixive() }
    fn is_special(&self) -> bool { self.tagger.is_special() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cesr::{VRSN_1_0, VRSN_2_0};

    #[test]
    fn test_verser() -> Result<()> {
        let versage = Versage {
            proto: "KERI".to_string(),
            pvrsn: VRSN_2_0,
            gvrsn: None,
        };
        let verser = Verser::from_versage(&versage)?;
        assert_eq!(verser.code(), tag_dex::TAG7);
        assert_eq!(verser.qb64(), "YKERICAA");
        assert_eq!(verser.versage()?, versage);
        assert_eq!(Verser::from_qb2(&verser.qb2())?, verser);

        let versage = Versage {
            proto: "ACDC".to_string(),
            pvrsn: VRSN_1_0,
            gvrsn: Some(VRSN_2_0),
        };
        let verser = Verser::from_versage(&versage)?;
        assert_eq!(verser.code(), tag_dex::TAG10);
        assert_eq!(verser.qb64(), "0OACDCBAACAA");
        assert_eq!(Verser::from_qb64("0OACDCBAACAA")?.versage()?, versage);
        Ok(())
    }

    #[test]
    fn test_verser_errors() {
        let versage = Versage {
            proto: "keri".to_string(),
            pvrsn: VRSN_2_0,
            gvrsn: None,
        };
        assert!(matches!(
            Verser::from_versage(&versage),
            Err(CesrError::InvalidValue(_))
        ));

        let versage = Versage {
            proto: "KERI".to_string(),
            pvrsn: Versionage { major: 64, minor: 0 },
            gvrsn: None,
        };
        assert!(matches!(
            Verser::from_versage(&versage),
            Err(CesrError::InvalidValue(_))
        ));

        assert!(matches!(
            Verser::from_qb64("Xicp"),
            Err(CesrError::UnsupportedCode(_))
        ));
    }
}
