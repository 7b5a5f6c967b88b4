use crate::cesr::{
    b64_text, b64_to_u32, code_b2_to_b64, int_to_b64, nab_sextets, pack_code, sceil, Parsable,
    Versionage, VERSION,
};
use crate::errors::{CesrError, Result};
use tracing::{debug, trace};

/// GenusCodex is codex of protocol genera for code table.
///
/// KERI, ACDC and SPAC share the same tables, so one code selects all three.
#[allow(dead_code)]
pub mod gen_dex {
    pub const KERI_ACDC_SPAC: &str = "-_AAA";
    pub const KERI: &str = KERI_ACDC_SPAC;
    pub const ACDC: &str = KERI_ACDC_SPAC;
    pub const SPAC: &str = KERI_ACDC_SPAC;

    pub static TUPLE: [&str; 1] = [KERI_ACDC_SPAC];
}

#[allow(dead_code)]
pub mod ctr_dex_1_0 {
    use once_cell::sync::Lazy;
    use std::collections::HashMap;

    pub const CONTROLLER_IDX_SIGS: &str = "-A"; // Qualified Base64 Indexed Signature.
    pub const WITNESS_IDX_SIGS: &str = "-B"; // Qualified Base64 Indexed Signature.
    pub const NON_TRANS_RECEIPT_COUPLES: &str = "-C"; // Composed Base64 Couple, pre+cig.
    pub const TRANS_RECEIPT_QUADRUPLES: &str = "-D"; // Composed Base64 Quadruple, pre+snu+dig+sig.
    pub const FIRST_SEEN_REPLAY_COUPLES: &str = "-E"; // Composed Base64 Couple, fnu+dts.
    pub const TRANS_IDX_SIG_GROUPS: &str = "-F"; // Composed Base64 Group, pre+snu+dig+ControllerIdxSigs group.
    pub const SEAL_SOURCE_COUPLES: &str = "-G"; // Composed Base64 couple, snu+dig of given delegator/issuer/transaction event
    pub const TRANS_LAST_IDX_SIG_GROUPS: &str = "-H"; // Composed Base64 Group, pre+ControllerIdxSigs group.
    pub const SEAL_SOURCE_TRIPLES: &str = "-I"; // Composed Base64 triple, pre+snu+dig of anchoring source event
    pub const PATHED_MATERIAL_GROUP: &str = "-L"; // Composed Grouped Pathed Material Quadlet (4 char each)
    pub const BIG_PATHED_MATERIAL_GROUP: &str = "--L"; // Composed Grouped Pathed Material Quadlet (4 char each)
    pub const GENERIC_GROUP: &str = "-T"; // Generic Material Quadlet (Universal with override)
    pub const BIG_GENERIC_GROUP: &str = "--T"; // Big Generic Material Quadlet (Universal with override)
    pub const BODY_WITH_ATTACHMENT_GROUP: &str = "-U"; // Message Body plus Attachments Quadlet (Universal with Override)
    pub const BIG_BODY_WITH_ATTACHMENT_GROUP: &str = "--U"; // Big Message Body plus Attachments Quadlet (Universal with Override)
    pub const ATTACHMENT_GROUP: &str = "-V"; // Message Attachments Only Quadlet (Universal with Override)
    pub const BIG_ATTACHMENT_GROUP: &str = "--V"; // Message Attachments Only Quadlet (Universal with Override)
    pub const NON_NATIVE_BODY_GROUP: &str = "-W"; // Message body Non-native enclosed with Texter
    pub const BIG_NON_NATIVE_BODY_GROUP: &str = "--W"; // Big Message body Non-native enclosed with Texter
    pub const ESSR_PAYLOAD_GROUP: &str = "-Z"; // ESSR Payload Group Quadlets
    pub const BIG_ESSR_PAYLOAD_GROUP: &str = "--Z"; // Big ESSR Payload Group Quadlets
    pub const KERI_ACDC_GENUS_VERSION: &str = "-_AAA"; // KERI ACDC Protocol Stack CESR Version

    pub static TUPLE: [&str; 22] = [
        CONTROLLER_IDX_SIGS,
        WITNESS_IDX_SIGS,
        NON_TRANS_RECEIPT_COUPLES,
        TRANS_RECEIPT_QUADRUPLES,
        FIRST_SEEN_REPLAY_COUPLES,
        TRANS_IDX_SIG_GROUPS,
        SEAL_SOURCE_COUPLES,
        TRANS_LAST_IDX_SIG_GROUPS,
        SEAL_SOURCE_TRIPLES,
        PATHED_MATERIAL_GROUP,
        BIG_PATHED_MATERIAL_GROUP,
        GENERIC_GROUP,
        BIG_GENERIC_GROUP,
        BODY_WITH_ATTACHMENT_GROUP,
        BIG_BODY_WITH_ATTACHMENT_GROUP,
        ATTACHMENT_GROUP,
        BIG_ATTACHMENT_GROUP,
        NON_NATIVE_BODY_GROUP,
        BIG_NON_NATIVE_BODY_GROUP,
        ESSR_PAYLOAD_GROUP,
        BIG_ESSR_PAYLOAD_GROUP,
        KERI_ACDC_GENUS_VERSION,
    ];

    /// Map of counter codes to their codex names
    pub static MAP: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
        HashMap::from([
            (CONTROLLER_IDX_SIGS, "ControllerIdxSigs"),
            (WITNESS_IDX_SIGS, "WitnessIdxSigs"),
            (NON_TRANS_RECEIPT_COUPLES, "NonTransReceiptCouples"),
            (TRANS_RECEIPT_QUADRUPLES, "TransReceiptQuadruples"),
            (FIRST_SEEN_REPLAY_COUPLES, "FirstSeenReplayCouples"),
            (TRANS_IDX_SIG_GROUPS, "TransIdxSigGroups"),
            (SEAL_SOURCE_COUPLES, "SealSourceCouples"),
            (TRANS_LAST_IDX_SIG_GROUPS, "TransLastIdxSigGroups"),
            (SEAL_SOURCE_TRIPLES, "SealSourceTriples"),
            (PATHED_MATERIAL_GROUP, "PathedMaterialGroup"),
            (BIG_PATHED_MATERIAL_GROUP, "BigPathedMaterialGroup"),
            (GENERIC_GROUP, "GenericGroup"),
            (BIG_GENERIC_GROUP, "BigGenericGroup"),
            (BODY_WITH_ATTACHMENT_GROUP, "BodyWithAttachmentGroup"),
            (BIG_BODY_WITH_ATTACHMENT_GROUP, "BigBodyWithAttachmentGroup"),
            (ATTACHMENT_GROUP, "AttachmentGroup"),
            (BIG_ATTACHMENT_GROUP, "BigAttachmentGroup"),
            (NON_NATIVE_BODY_GROUP, "NonNativeBodyGroup"),
            (BIG_NON_NATIVE_BODY_GROUP, "BigNonNativeBodyGroup"),
            (ESSR_PAYLOAD_GROUP, "ESSRPayloadGroup"),
            (BIG_ESSR_PAYLOAD_GROUP, "BigESSRPayloadGroup"),
            (KERI_ACDC_GENUS_VERSION, "KERIACDCGenusVersion"),
        ])
    });
}

#[allow(dead_code)]
pub mod ctr_dex_2_0 {
    use once_cell::sync::Lazy;
    use std::collections::HashMap;

    pub const GENERIC_GROUP: &str = "-A"; // Generic Group (Universal with Override).
    pub const BIG_GENERIC_GROUP: &str = "--A"; // Big Generic Group (Universal with Override).
    pub const BODY_WITH_ATTACHMENT_GROUP: &str = "-B"; // Message Body plus Attachments Group (Universal with Override).
    pub const BIG_BODY_WITH_ATTACHMENT_GROUP: &str = "--B"; // Big Message Body plus Attachments Group (Universal with Override).
    pub const ATTACHMENT_GROUP: &str = "-C"; // Message Attachments Only Group (Universal with Override).
    pub const BIG_ATTACHMENT_GROUP: &str = "--C"; // Big Attachments Only Group (Universal with Override).
    pub const DATAGRAM_SEGMENT_GROUP: &str = "-D"; // Datagram Segment Group (Universal).
    pub const BIG_DATAGRAM_SEGMENT_GROUP: &str = "--D"; // Big Datagram Segment Group (Universal).
    pub const ESSR_WRAPPER_GROUP: &str = "-E"; // ESSR Wrapper Group (Universal).
    pub const BIG_ESSR_WRAPPER_GROUP: &str = "--E"; // Big ESSR Wrapper Group (Universal).
    pub const FIX_BODY_GROUP: &str = "-F"; // Fixed Field Message Body Group (Universal).
    pub const BIG_FIX_BODY_GROUP: &str = "--F"; // Big Fixed Field Message Body Group (Universal).
    pub const MAP_BODY_GROUP: &str = "-G"; // Field Map Message Body Group (Universal).
    pub const BIG_MAP_BODY_GROUP: &str = "--G"; // Big Field Map Message Body Group (Universal).
    pub const NON_NATIVE_BODY_GROUP: &str = "-H"; // Message body Non-native enclosed with Texter
    pub const BIG_NON_NATIVE_BODY_GROUP: &str = "--H"; // Big Message body Non-native enclosed with Texter
    pub const GENERIC_MAP_GROUP: &str = "-I"; // Generic Field Map Group (Universal).
    pub const BIG_GENERIC_MAP_GROUP: &str = "--I"; // Big Generic Field Map Group (Universal).
    pub const GENERIC_LIST_GROUP: &str = "-J"; // Generic List Group (Universal).
    pub const BIG_GENERIC_LIST_GROUP: &str = "--J"; // Big Generic List Group (Universal).
    pub const CONTROLLER_IDX_SIGS: &str = "-K"; // Controller Indexed Signature(s) of qb64.
    pub const BIG_CONTROLLER_IDX_SIGS: &str = "--K"; // Big Controller Indexed Signature(s) of qb64.
    pub const WITNESS_IDX_SIGS: &str = "-L"; // Witness Indexed Signature(s) of qb64.
    pub const BIG_WITNESS_IDX_SIGS: &str = "--L"; // Big Witness Indexed Signature(s) of qb64.
    pub const NON_TRANS_RECEIPT_COUPLES: &str = "-M"; // NonTrans Receipt Couple(s), pre+cig.
    pub const BIG_NON_TRANS_RECEIPT_COUPLES: &str = "--M"; // Big NonTrans Receipt Couple(s), pre+cig.
    pub const TRANS_RECEIPT_QUADRUPLES: &str = "-N"; // Trans Receipt Quadruple(s), pre+snu+dig+sig.
    pub const BIG_TRANS_RECEIPT_QUADRUPLES: &str = "--N"; // Big Trans Receipt Quadruple(s), pre+snu+dig+sig.
    pub const FIRST_SEEN_REPLAY_COUPLES: &str = "-O"; // First Seen Replay Couple(s), fnu+dts.
    pub const BIG_FIRST_SEEN_REPLAY_COUPLES: &str = "--O"; // Big First Seen Replay Couple(s), fnu+dts.
    pub const PATHED_MATERIAL_GROUP: &str = "-P"; // Pathed Material Group.
    pub const BIG_PATHED_MATERIAL_GROUP: &str = "--P"; // Big Pathed Material Group.
    pub const DIGEST_SEAL_SINGLES: &str = "-Q"; // Digest Seal Single(s), dig of sealed data.
    pub const BIG_DIGEST_SEAL_SINGLES: &str = "--Q"; // Big Digest Seal Single(s), dig of sealed data.
    pub const MERKLE_ROOT_SEAL_SINGLES: &str = "-R"; // Merkle Tree Root Digest Seal Single(s), dig of sealed data.
    pub const BIG_MERKLE_ROOT_SEAL_SINGLES: &str = "--R"; // Big Merkle Tree Root Digest Seal Single(s), dig of sealed data.
    pub const SEAL_SOURCE_TRIPLES: &str = "-S"; // Seal Source Triple(s), pre+snu+dig of source sealing or sealed event.
    pub const BIG_SEAL_SOURCE_TRIPLES: &str = "--S"; // Big Seal Source Triple(s), pre+snu+dig of source sealing or sealed event.
    pub const SEAL_SOURCE_COUPLES: &str = "-T"; // Seal Source Couple(s), snu+dig of source sealing or sealed event.
    pub const BIG_SEAL_SOURCE_COUPLES: &str = "--T"; // Big Seal Source Couple(s), snu+dig of source sealing or sealed event.
    pub const SEAL_SOURCE_LAST_SINGLES: &str = "-U"; // Seal Source Single(s), pre of last source sealing or sealed event.
    pub const BIG_SEAL_SOURCE_LAST_SINGLES: &str = "--U"; // Big Seal Source Single(s), pre of last source sealing or sealed event.
    pub const BACKER_REGISTRAR_SEAL_COUPLES: &str = "-V"; // Backer Registrar Seal Couple(s), brid+dig of sealed data.
    pub const BIG_BACKER_REGISTRAR_SEAL_COUPLES: &str = "--V"; // Big Backer Registrar Seal Couple(s), brid+dig of sealed data.
    pub const TYPED_DIGEST_SEAL_COUPLES: &str = "-W"; // Typed Digest Seal Couple(s), type seal+dig of sealed data.
    pub const BIG_TYPED_DIGEST_SEAL_COUPLES: &str = "--W"; // Big Typed Digest Seal Couple(s), type seal+dig of sealed data.
    pub const TRANS_IDX_SIG_GROUPS: &str = "-X"; // Trans Indexed Signature Group(s), pre+snu+dig+CtrControllerIdxSigs of qb64.
    pub const BIG_TRANS_IDX_SIG_GROUPS: &str = "--X"; // Big Trans Indexed Signature Group(s), pre+snu+dig+CtrControllerIdxSigs of qb64.
    pub const TRANS_LAST_IDX_SIG_GROUPS: &str = "-Y"; // Trans Last Est Evt Indexed Signature Group(s), pre+CtrControllerIdxSigs of qb64.
    pub const BIG_TRANS_LAST_IDX_SIG_GROUPS: &str = "--Y"; // Big Trans Last Est Evt Indexed Signature Group(s), pre+CtrControllerIdxSigs of qb64.
    pub const ESSR_PAYLOAD_GROUP: &str = "-Z"; // ESSR Payload Group.
    pub const BIG_ESSR_PAYLOAD_GROUP: &str = "--Z"; // Big ESSR Payload Group.
    pub const BLINDED_STATE_QUADRUPLES: &str = "-a"; // Blinded transaction event state quadruples dig+uuid+said+state.
    pub const BIG_BLINDED_STATE_QUADRUPLES: &str = "--a"; // Big Blinded transaction event state quadruples dig+uuid+said+state.
    pub const KERI_ACDC_GENUS_VERSION: &str = "-_AAA"; // KERI ACDC Stack CESR Protocol Genus Version (Universal)

    pub static TUPLE: [&str; 55] = [
        GENERIC_GROUP,
        BIG_GENERIC_GROUP,
        BODY_WITH_ATTACHMENT_GROUP,
        BIG_BODY_WITH_ATTACHMENT_GROUP,
        ATTACHMENT_GROUP,
        BIG_ATTACHMENT_GROUP,
        DATAGRAM_SEGMENT_GROUP,
        BIG_DATAGRAM_SEGMENT_GROUP,
        ESSR_WRAPPER_GROUP,
        BIG_ESSR_WRAPPER_GROUP,
        FIX_BODY_GROUP,
        BIG_FIX_BODY_GROUP,
        MAP_BODY_GROUP,
        BIG_MAP_BODY_GROUP,
        NON_NATIVE_BODY_GROUP,
        BIG_NON_NATIVE_BODY_GROUP,
        GENERIC_MAP_GROUP,
        BIG_GENERIC_MAP_GROUP,
        GENERIC_LIST_GROUP,
        BIG_GENERIC_LIST_GROUP,
        CONTROLLER_IDX_SIGS,
        BIG_CONTROLLER_IDX_SIGS,
        WITNESS_IDX_SIGS,
        BIG_WITNESS_IDX_SIGS,
        NON_TRANS_RECEIPT_COUPLES,
        BIG_NON_TRANS_RECEIPT_COUPLES,
        TRANS_RECEIPT_QUADRUPLES,
        BIG_TRANS_RECEIPT_QUADRUPLES,
        FIRST_SEEN_REPLAY_COUPLES,
        BIG_FIRST_SEEN_REPLAY_COUPLES,
        PATHED_MATERIAL_GROUP,
        BIG_PATHED_MATERIAL_GROUP,
        DIGEST_SEAL_SINGLES,
        BIG_DIGEST_SEAL_SINGLES,
        MERKLE_ROOT_SEAL_SINGLES,
        BIG_MERKLE_ROOT_SEAL_SINGLES,
        SEAL_SOURCE_TRIPLES,
        BIG_SEAL_SOURCE_TRIPLES,
        SEAL_SOURCE_COUPLES,
        BIG_SEAL_SOURCE_COUPLES,
        SEAL_SOURCE_LAST_SINGLES,
        BIG_SEAL_SOURCE_LAST_SINGLES,
        BACKER_REGISTRAR_SEAL_COUPLES,
        BIG_BACKER_REGISTRAR_SEAL_COUPLES,
        TYPED_DIGEST_SEAL_COUPLES,
        BIG_TYPED_DIGEST_SEAL_COUPLES,
        TRANS_IDX_SIG_GROUPS,
        BIG_TRANS_IDX_SIG_GROUPS,
        TRANS_LAST_IDX_SIG_GROUPS,
        BIG_TRANS_LAST_IDX_SIG_GROUPS,
        ESSR_PAYLOAD_GROUP,
        BIG_ESSR_PAYLOAD_GROUP,
        BLINDED_STATE_QUADRUPLES,
        BIG_BLINDED_STATE_QUADRUPLES,
        KERI_ACDC_GENUS_VERSION,
    ];

    /// Map of counter codes to their codex names
    pub static MAP: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
        HashMap::from([
            (GENERIC_GROUP, "GenericGroup"),
            (BIG_GENERIC_GROUP, "BigGenericGroup"),
            (BODY_WITH_ATTACHMENT_GROUP, "BodyWithAttachmentGroup"),
            (BIG_BODY_WITH_ATTACHMENT_GROUP, "BigBodyWithAttachmentGroup"),
            (ATTACHMENT_GROUP, "AttachmentGroup"),
            (BIG_ATTACHMENT_GROUP, "BigAttachmentGroup"),
            (DATAGRAM_SEGMENT_GROUP, "DatagramSegmentGroup"),
            (BIG_DATAGRAM_SEGMENT_GROUP, "BigDatagramSegmentGroup"),
            (ESSR_WRAPPER_GROUP, "ESSRWrapperGroup"),
            (BIG_ESSR_WRAPPER_GROUP, "BigESSRWrapperGroup"),
            (FIX_BODY_GROUP, "FixBodyGroup"),
            (BIG_FIX_BODY_GROUP, "BigFixBodyGroup"),
            (MAP_BODY_GROUP, "MapBodyGroup"),
            (BIG_MAP_BODY_GROUP, "BigMapBodyGroup"),
            (NON_NATIVE_BODY_GROUP, "NonNativeBodyGroup"),
            (BIG_NON_NATIVE_BODY_GROUP, "BigNonNativeBodyGroup"),
            (GENERIC_MAP_GROUP, "GenericMapGroup"),
            (BIG_GENERIC_MAP_GROUP, "BigGenericMapGroup"),
            (GENERIC_LIST_GROUP, "GenericListGroup"),
            (BIG_GENERIC_LIST_GROUP, "BigGenericListGroup"),
            (CONTROLLER_IDX_SIGS, "ControllerIdxSigs"),
            (BIG_CONTROLLER_IDX_SIGS, "BigControllerIdxSigs"),
            (WITNESS_IDX_SIGS, "WitnessIdxSigs"),
            (BIG_WITNESS_IDX_SIGS, "BigWitnessIdxSigs"),
            (NON_TRANS_RECEIPT_COUPLES, "NonTransReceiptCouples"),
            (BIG_NON_TRANS_RECEIPT_COUPLES, "BigNonTransReceiptCouples"),
            (TRANS_RECEIPT_QUADRUPLES, "TransReceiptQuadruples"),
            (BIG_TRANS_RECEIPT_QUADRUPLES, "BigTransReceiptQuadruples"),
            (FIRST_SEEN_REPLAY_COUPLES, "FirstSeenReplayCouples"),
            (BIG_FIRST_SEEN_REPLAY_COUPLES, "BigFirstSeenReplayCouples"),
            (PATHED_MATERIAL_GROUP, "PathedMaterialGroup"),
            (BIG_PATHED_MATERIAL_GROUP, "BigPathedMaterialGroup"),
            (DIGEST_SEAL_SINGLES, "DigestSealSingles"),
            (BIG_DIGEST_SEAL_SINGLES, "BigDigestSealSingles"),
            (MERKLE_ROOT_SEAL_SINGLES, "MerkleRootSealSingles"),
            (BIG_MERKLE_ROOT_SEAL_SINGLES, "BigMerkleRootSealSingles"),
            (SEAL_SOURCE_TRIPLES, "SealSourceTriples"),
            (BIG_SEAL_SOURCE_TRIPLES, "BigSealSourceTriples"),
            (SEAL_SOURCE_COUPLES, "SealSourceCouples"),
            (BIG_SEAL_SOURCE_COUPLES, "BigSealSourceCouples"),
            (SEAL_SOURCE_LAST_SINGLES, "SealSourceLastSingles"),
            (BIG_SEAL_SOURCE_LAST_SINGLES, "BigSealSourceLastSingles"),
            (BACKER_REGISTRAR_SEAL_COUPLES, "BackerRegistrarSealCouples"),
            (BIG_BACKER_REGISTRAR_SEAL_COUPLES, "BigBackerRegistrarSealCouples"),
            (TYPED_DIGEST_SEAL_COUPLES, "TypedDigestSealCouples"),
            (BIG_TYPED_DIGEST_SEAL_COUPLES, "BigTypedDigestSealCouples"),
            (TRANS_IDX_SIG_GROUPS, "TransIdxSigGroups"),
            (BIG_TRANS_IDX_SIG_GROUPS, "BigTransIdxSigGroups"),
            (TRANS_LAST_IDX_SIG_GROUPS, "TransLastIdxSigGroups"),
            (BIG_TRANS_LAST_IDX_SIG_GROUPS, "BigTransLastIdxSigGroups"),
            (ESSR_PAYLOAD_GROUP, "ESSRPayloadGroup"),
            (BIG_ESSR_PAYLOAD_GROUP, "BigESSRPayloadGroup"),
            (BLINDED_STATE_QUADRUPLES, "BlindedStateQuadruples"),
            (BIG_BLINDED_STATE_QUADRUPLES, "BigBlindedStateQuadruples"),
            (KERI_ACDC_GENUS_VERSION, "KERIACDCGenusVersion"),
        ])
    });
}

/// Cizage holds the sizes of a counter code: hard size `hs`, soft size `ss`
/// and full size `fs`, all in chars.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cizage {
    pub hs: u32,
    pub ss: u32,
    pub fs: u32,
}

const SMALL: Cizage = Cizage { hs: 2, ss: 2, fs: 4 };
const BIG: Cizage = Cizage { hs: 3, ss: 5, fs: 8 };
const GENUS: Cizage = Cizage { hs: 5, ss: 3, fs: 8 };

/// Codes defined by the counter table of `version`
fn codes(version: Versionage) -> &'static [&'static str] {
    match version.major {
        1 => &ctr_dex_1_0::TUPLE,
        _ => &ctr_dex_2_0::TUPLE,
    }
}

/// Returns the Cizage of `code` in the counter table of `version`
pub fn cizage(code: &str, version: Versionage) -> Option<Cizage> {
    if !codes(version).contains(&code) {
        return None;
    }

    match hardage(code)? {
        2 => Some(SMALL),
        3 => Some(BIG),
        5 => Some(GENUS),
        _ => None,
    }
}

/// Hard code size selected by the first two chars of a counter code
pub fn hardage(code: &str) -> Option<u32> {
    let mut chars = code.chars();
    match (chars.next()?, chars.next()?) {
        ('-', 'A'..='Z' | 'a'..='z') => Some(2),
        ('-', '-') => Some(3),
        ('-', '_') => Some(5),
        _ => None,
    }
}

/// Hard code size selected by the first two sextets of a counter code
pub fn bardage(sextets: &[u8]) -> Option<u32> {
    match sextets {
        [62, 0..=51, ..] => Some(2),
        [62, 62, ..] => Some(3),
        [62, 63, ..] => Some(5),
        _ => None,
    }
}

/// Counter is a framing code with a count of the material that follows it.
pub trait Counter {
    /// Returns the hard part of the counter code
    fn code(&self) -> &str;

    /// Returns the codex name of the code for the counter's version
    fn name(&self) -> &str;

    /// Returns the count
    fn count(&self) -> u32;

    /// Returns the version of the code table
    fn version(&self) -> Versionage;

    /// Returns the hard part of the counter code
    fn hard(&self) -> &str;

    /// Returns the count as Base64 soft chars
    fn soft(&self) -> String;

    /// Returns hard plus soft
    fn both(&self) -> String;

    /// Returns base64 fully qualified representation
    fn qb64(&self) -> String;

    /// Returns base64 fully qualified representation as bytes
    fn qb64b(&self) -> Vec<u8>;

    /// Returns binary fully qualified representation
    fn qb2(&self) -> Vec<u8>;

    /// Full size in chars
    fn full_size(&self) -> usize;
}

/// The four ways of providing Counter material
#[derive(Debug, Clone, Copy)]
pub enum CounterSource<'a> {
    CodeAndCount { code: &'a str, count: u32 },
    Qb64(&'a str),
    Qb64b(&'a [u8]),
    Qb2(&'a [u8]),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseCounter {
    code: String,
    count: u32,
    version: Versionage,
    size: Cizage,
}

impl BaseCounter {
    pub fn new(source: CounterSource, version: Versionage) -> Result<Self> {
        match source {
            CounterSource::CodeAndCount { code, count } => Self::from_parts(code, count, version),
            CounterSource::Qb64(qb64) => Self::exfil(qb64.as_bytes(), version),
            CounterSource::Qb64b(qb64b) => Self::exfil(qb64b, version),
            CounterSource::Qb2(qb2) => Self::bexfil(qb2, version),
        }
    }

    pub fn from_code_and_count(code: &str, count: u32) -> Result<Self> {
        Self::from_parts(code, count, VERSION)
    }

    pub fn from_qb64(qb64: &str) -> Result<Self> {
        Self::exfil(qb64.as_bytes(), VERSION)
    }

    pub fn from_qb64b(qb64b: &[u8]) -> Result<Self> {
        Self::exfil(qb64b, VERSION)
    }

    pub fn from_qb2(qb2: &[u8]) -> Result<Self> {
        Self::bexfil(qb2, VERSION)
    }

    fn from_parts(code: &str, count: u32, version: Versionage) -> Result<Self> {
        if code.is_empty() {
            return Err(CesrError::InvalidOptionCombination(
                "Improper initialization need either (code and count) or qb64b or qb64 or qb2."
                    .to_string(),
            ));
        }

        let mut size = cizage(code, version).ok_or_else(|| {
            CesrError::UnknownCode(format!(
                "Unsupported code={} for version={}.{}.",
                code, version.major, version.minor
            ))
        })?;
        let mut code = code.to_string();

        if size.hs == 2 && count > max_count(SMALL.ss) {
            let big = format!("-{}", code);
            if let Some(big_size) = cizage(&big, version) {
                debug!(code, big = big.as_str(), count, "promoting to big counter code");
                code = big;
                size = big_size;
            }
        }

        if count > max_count(size.ss) {
            return Err(CesrError::InvalidCount(format!(
                "Invalid count={} for code={} with ss={}.",
                count, code, size.ss
            )));
        }

        Ok(BaseCounter {
            code,
            count,
            version,
            size,
        })
    }

    fn exfil(qb64b: &[u8], version: Versionage) -> Result<Self> {
        if qb64b.len() < 2 {
            return Err(CesrError::InsufficientMaterial(format!(
                "Need {} more characters.",
                2 - qb64b.len()
            )));
        }

        let first = b64_text(&qb64b[..2])?;
        if first.starts_with('_') {
            return Err(CesrError::UnknownCode(
                "Unexpected op code start while extracting Counter.".to_string(),
            ));
        }
        let hs = hardage(first).ok_or_else(|| {
            CesrError::UnknownCode(format!("Unsupported code start first={}.", first))
        })? as usize;

        if qb64b.len() < hs {
            return Err(CesrError::InsufficientMaterial(format!(
                "Need {} more characters.",
                hs - qb64b.len()
            )));
        }

        let hard = b64_text(&qb64b[..hs])?;
        let size = cizage(hard, version)
            .ok_or_else(|| CesrError::UnknownCode(format!("Unsupported code={}.", hard)))?;
        let fs = size.fs as usize;

        if qb64b.len() < fs {
            return Err(CesrError::InsufficientMaterial(format!(
                "Need {} more characters.",
                fs - qb64b.len()
            )));
        }

        let count = b64_to_u32(b64_text(&qb64b[hs..fs])?)?;

        Ok(BaseCounter {
            code: hard.to_string(),
            count,
            version,
            size,
        })
    }

    fn bexfil(qb2: &[u8], version: Versionage) -> Result<Self> {
        if qb2.len() < 2 {
            return Err(CesrError::InsufficientMaterial(format!(
                "Need {} more bytes.",
                2 - qb2.len()
            )));
        }

        let first = nab_sextets(qb2, 2)?;
        if first[0] == 0x3f {
            return Err(CesrError::UnknownCode(
                "Unexpected op code start while extracting Counter.".to_string(),
            ));
        }
        let hs = bardage(&first).ok_or_else(|| {
            CesrError::UnknownCode(format!("Unsupported code start sextets={:02x?}.", first))
        })? as usize;

        let bhs = sceil(hs * 3, 4);
        if qb2.len() < bhs {
            return Err(CesrError::InsufficientMaterial(format!(
                "Need {} more bytes.",
                bhs - qb2.len()
            )));
        }

        let hard = code_b2_to_b64(qb2, hs)?;
        let size = cizage(&hard, version)
            .ok_or_else(|| CesrError::UnknownCode(format!("Unsupported code={}.", hard)))?;
        let fs = size.fs as usize;

        let bfs = sceil(fs * 3, 4);
        if qb2.len() < bfs {
            return Err(CesrError::InsufficientMaterial(format!(
                "Need {} more bytes.",
                bfs - qb2.len()
            )));
        }

        let both = code_b2_to_b64(qb2, fs)?;
        let count = b64_to_u32(&both[hs..])?;

        Ok(BaseCounter {
            code: hard,
            count,
            version,
            size,
        })
    }
}

/// Largest count a soft of `ss` chars can hold
fn max_count(ss: u32) -> u32 {
    (64u64.pow(ss) - 1).min(u32::MAX as u64) as u32
}

impl Counter for BaseCounter {
    fn code(&self) -> &str {
        &self.code
    }

    fn name(&self) -> &str {
        let map = match self.version.major {
            1 => &ctr_dex_1_0::MAP,
            _ => &ctr_dex_2_0::MAP,
        };
        map.get(self.code.as_str()).copied().unwrap_or_default()
    }

    fn count(&self) -> u32 {
        self.count
    }

    fn version(&self) -> Versionage {
        self.version
    }

    fn hard(&self) -> &str {
        &self.code
    }

    fn soft(&self) -> String {
        int_to_b64(self.count as u64, self.size.ss as usize)
    }

    fn both(&self) -> String {
        format!("{}{}", self.code, self.soft())
    }

    fn qb64(&self) -> String {
        let both = self.both();
        debug_assert_eq!(both.len(), self.size.fs as usize);
        debug_assert_eq!(both.len() % 4, 0);
        both
    }

    fn qb64b(&self) -> Vec<u8> {
        self.qb64().into_bytes()
    }

    fn qb2(&self) -> Vec<u8> {
        pack_code(&self.both())
    }

    fn full_size(&self) -> usize {
        self.size.fs as usize
    }
}

impl BaseCounter {
    /// Extracts a counter for `version` from the front of qualified Base64 bytes
    pub fn parse_qb64b_with_version(
        data: &mut Vec<u8>,
        strip: Option<bool>,
        version: Versionage,
    ) -> Result<Self> {
        let counter = BaseCounter::exfil(data, version)?;
        if strip.unwrap_or(false) {
            let fs = counter.full_size();
            trace!(code = counter.code(), fs, "stripping qb64b counter");
            data.drain(..fs);
        }
        Ok(counter)
    }

    /// Extracts a counter for `version` from the front of qualified Base2 bytes
    pub fn parse_qb2_with_version(
        data: &mut Vec<u8>,
        strip: Option<bool>,
        version: Versionage,
    ) -> Result<Self> {
        let counter = BaseCounter::bexfil(data, version)?;
        if strip.unwrap_or(false) {
            let bfs = counter.full_size() * 3 / 4;
            trace!(code = counter.code(), bfs, "stripping qb2 counter");
            data.drain(..bfs);
        }
        Ok(counter)
    }
}

impl Parsable for BaseCounter {
    fn parse_qb64b(data: &mut Vec<u8>, strip: Option<bool>) -> Result<Self> {
        Self::parse_qb64b_with_version(data, strip, VERSION)
    }

    fn parse_qb2(data: &mut Vec<u8>, strip: Option<bool>) -> Result<Self> {
        Self::parse_qb2_with_version(data, strip, VERSION)
    }
}
