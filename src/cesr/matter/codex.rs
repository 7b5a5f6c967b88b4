/// Matter derivation codes
#[allow(dead_code)]
pub mod mtr_dex {
    pub const ED25519_SEED: &str = "A"; // Ed25519 256 bit random seed for private key
    pub const ED25519N: &str = "B"; // Ed25519 verification key non-transferable, basic derivation
    pub const X25519: &str = "C"; // X25519 public encryption key, may be converted from Ed25519 or Ed25519N
    pub const ED25519: &str = "D"; // Ed25519 verification key basic derivation
    pub const BLAKE3_256: &str = "E"; // Blake3 256 bit digest self-addressing derivation
    pub const BLAKE2B_256: &str = "F"; // Blake2b 256 bit digest self-addressing derivation
    pub const BLAKE2S_256: &str = "G"; // Blake2s 256 bit digest self-addressing derivation
    pub const SHA3_256: &str = "H"; // SHA3 256 bit digest self-addressing derivation
    pub const SHA2_256: &str = "I"; // SHA2 256 bit digest self-addressing derivation
    pub const ECDSA_256K1_SEED: &str = "J"; // ECDSA secp256k1 256 bit random Seed for private key
    pub const ED448_SEED: &str = "K"; // Ed448 448 bit random Seed for private key
    pub const X448: &str = "L"; // X448 public encryption key, converted from Ed448
    pub const SHORT: &str = "M"; // Short 2 byte b2 number
    pub const BIG: &str = "N"; // Big 8 byte b2 number
    pub const X25519_PRIVATE: &str = "O"; // X25519 private decryption key/seed, may be converted from Ed25519
    pub const X25519_CIPHER_SEED: &str = "P"; // X25519 sealed box 124 char qb64 Cipher of 44 char qb64 Seed
    pub const ECDSA_256R1_SEED: &str = "Q"; // ECDSA secp256r1 256 bit random Seed for private key
    pub const TALL: &str = "R"; // Tall 5 byte b2 number
    pub const LARGE: &str = "S"; // Large 11 byte b2 number
    pub const GREAT: &str = "T"; // Great 14 byte b2 number
    pub const VAST: &str = "U"; // Vast 17 byte b2 number
    pub const LABEL1: &str = "V"; // Label1 1 bytes for label lead size 1
    pub const LABEL2: &str = "W"; // Label2 2 bytes for label lead size 0
    pub const TAG3: &str = "X"; // Tag3 3 B64 encoded chars for special values
    pub const TAG7: &str = "Y"; // Tag7 7 B64 encoded chars for special values
    pub const TAG11: &str = "Z"; // Tag11 11 B64 encoded chars for special values
    pub const SALT_256: &str = "a"; // Salt/seed/nonce/blind 256 bits
    pub const SALT_128: &str = "0A"; // Salt/seed/nonce 128 bits or number of length 128 bits (Huge)
    pub const ED25519_SIG: &str = "0B"; // Ed25519 signature
    pub const ECDSA_256K1_SIG: &str = "0C"; // ECDSA secp256k1 signature
    pub const BLAKE3_512: &str = "0D"; // Blake3 512 bit digest self-addressing derivation
    pub const BLAKE2B_512: &str = "0E"; // Blake2b 512 bit digest self-addressing derivation
    pub const SHA3_512: &str = "0F"; // SHA3 512 bit digest self-addressing derivation
    pub const SHA2_512: &str = "0G"; // SHA2 512 bit digest self-addressing derivation
    pub const LONG: &str = "0H"; // Long 4 byte b2 number
    pub const ECDSA_256R1_SIG: &str = "0I"; // ECDSA secp256r1 signature
    pub const TAG1: &str = "0J"; // Tag1 1 B64 encoded char + 1 prepad for special values
    pub const TAG2: &str = "0K"; // Tag2 2 B64 encoded chars for special values
    pub const TAG5: &str = "0L"; // Tag5 5 B64 encoded chars + 1 prepad for special values
    pub const TAG6: &str = "0M"; // Tag6 6 B64 encoded chars for special values
    pub const TAG9: &str = "0N"; // Tag9 9 B64 encoded chars + 1 prepad for special values
    pub const TAG10: &str = "0O"; // Tag10 10 B64 encoded chars for special values
    pub const GRAM_HEAD_NECK: &str = "0P"; // GramHeadNeck 32 B64 chars memogram head with neck
    pub const GRAM_HEAD: &str = "0Q"; // GramHead 28 B64 chars memogram head only
    pub const GRAM_HEAD_AID_NECK: &str = "0R"; // GramHeadAIDNeck 76 B64 chars memogram head with AID and neck
    pub const GRAM_HEAD_AID: &str = "0S"; // GramHeadAID 72 B64 chars memogram head with AID only
    pub const ECDSA_256K1N: &str = "1AAA"; // ECDSA secp256k1 verification key non-transferable, basic derivation
    pub const ECDSA_256K1: &str = "1AAB"; // ECDSA public verification or encryption key, basic derivation
    pub const ED448N: &str = "1AAC"; // Ed448 non-transferable prefix public signing verification key
    pub const ED448: &str = "1AAD"; // Ed448 public signing verification key
    pub const ED448_SIG: &str = "1AAE"; // Ed448 signature
    pub const TAG4: &str = "1AAF"; // Tag4 4 B64 encoded chars for special values
    pub const DATE_TIME: &str = "1AAG"; // Base64 custom encoded 32 char ISO-8601 DateTime
    pub const X25519_CIPHER_SALT: &str = "1AAH"; // X25519 sealed box 100 char qb64 Cipher of 24 char qb64 Salt
    pub const ECDSA_256R1N: &str = "1AAI"; // ECDSA secp256r1 verification key non-transferable, basic derivation
    pub const ECDSA_256R1: &str = "1AAJ"; // ECDSA secp256r1 verification or encryption key, basic derivation
    pub const NULL: &str = "1AAK"; // Null None or empty value
    pub const NO: &str = "1AAL"; // No Falsey Boolean value
    pub const YES: &str = "1AAM"; // Yes Truthy Boolean value
    pub const TAG8: &str = "1AAN"; // Tag8 8 B64 encoded chars for special values
    pub const ESCAPE: &str = "1AAO"; // Escape code for escaping special map fields
    pub const EMPTY: &str = "1AAP"; // Empty value for Nonce, UUID, or related fields
    pub const TBD0S: &str = "1__-"; // Testing purposes only, fixed special values with non-empty raw lead size 0
    pub const TBD0: &str = "1___"; // Testing purposes only, fixed with lead size 0
    pub const TBD1S: &str = "2__-"; // Testing purposes only, fixed special values with non-empty raw lead size 1
    pub const TBD1: &str = "2___"; // Testing purposes only, fixed with lead size 1
    pub const TBD2S: &str = "3__-"; // Testing purposes only, fixed special values with non-empty raw lead size 2
    pub const TBD2: &str = "3___"; // Testing purposes only, fixed with lead size 2
    pub const STR_B64_L0: &str = "4A"; // String Base64 only lead size 0
    pub const STR_B64_L1: &str = "5A"; // String Base64 only lead size 1
    pub const STR_B64_L2: &str = "6A"; // String Base64 only lead size 2
    pub const STR_B64_BIG_L0: &str = "7AAA"; // String Base64 only big lead size 0
    pub const STR_B64_BIG_L1: &str = "8AAA"; // String Base64 only big lead size 1
    pub const STR_B64_BIG_L2: &str = "9AAA"; // String Base64 only big lead size 2
    pub const BYTES_L0: &str = "4B"; // Byte String lead size 0
    pub const BYTES_L1: &str = "5B"; // Byte String lead size 1
    pub const BYTES_L2: &str = "6B"; // Byte String lead size 2
    pub const BYTES_BIG_L0: &str = "7AAB"; // Byte String big lead size 0
    pub const BYTES_BIG_L1: &str = "8AAB"; // Byte String big lead size 1
    pub const BYTES_BIG_L2: &str = "9AAB"; // Byte String big lead size 2
    pub const X25519_CIPHER_L0: &str = "4C"; // X25519 sealed box cipher bytes of sniffable stream plaintext lead size 0
    pub const X25519_CIPHER_L1: &str = "5C"; // X25519 sealed box cipher bytes of sniffable stream plaintext lead size 1
    pub const X25519_CIPHER_L2: &str = "6C"; // X25519 sealed box cipher bytes of sniffable stream plaintext lead size 2
    pub const X25519_CIPHER_BIG_L0: &str = "7AAC"; // X25519 sealed box cipher bytes of sniffable stream plaintext big lead size 0
    pub const X25519_CIPHER_BIG_L1: &str = "8AAC"; // X25519 sealed box cipher bytes of sniffable stream plaintext big lead size 1
    pub const X25519_CIPHER_BIG_L2: &str = "9AAC"; // X25519 sealed box cipher bytes of sniffable stream plaintext big lead size 2
    pub const X25519_CIPHER_QB64_L0: &str = "4D"; // X25519 sealed box cipher bytes of QB64 plaintext lead size 0
    pub const X25519_CIPHER_QB64_L1: &str = "5D"; // X25519 sealed box cipher bytes of QB64 plaintext lead size 1
    pub const X25519_CIPHER_QB64_L2: &str = "6D"; // X25519 sealed box cipher bytes of QB64 plaintext lead size 2
    pub const X25519_CIPHER_QB64_BIG_L0: &str = "7AAD"; // X25519 sealed box cipher bytes of QB64 plaintext big lead size 0
    pub const X25519_CIPHER_QB64_BIG_L1: &str = "8AAD"; // X25519 sealed box cipher bytes of QB64 plaintext big lead size 1
    pub const X25519_CIPHER_QB64_BIG_L2: &str = "9AAD"; // X25519 sealed box cipher bytes of QB64 plaintext big lead size 2
    pub const X25519_CIPHER_QB2_L0: &str = "4E"; // X25519 sealed box cipher bytes of QB2 plaintext lead size 0
    pub const X25519_CIPHER_QB2_L1: &str = "5E"; // X25519 sealed box cipher bytes of QB2 plaintext lead size 1
    pub const X25519_CIPHER_QB2_L2: &str = "6E"; // X25519 sealed box cipher bytes of QB2 plaintext lead size 2
    pub const X25519_CIPHER_QB2_BIG_L0: &str = "7AAE"; // X25519 sealed box cipher bytes of QB2 plaintext big lead size 0
    pub const X25519_CIPHER_QB2_BIG_L1: &str = "8AAE"; // X25519 sealed box cipher bytes of QB2 plaintext big lead size 1
    pub const X25519_CIPHER_QB2_BIG_L2: &str = "9AAE"; // X25519 sealed box cipher bytes of QB2 plaintext big lead size 2
    pub const HPKE_BASE_CIPHER_L0: &str = "4F"; // HPKE Base cipher bytes of sniffable stream plaintext lead size 0
    pub const HPKE_BASE_CIPHER_L1: &str = "5F"; // HPKE Base cipher bytes of sniffable stream plaintext lead size 1
    pub const HPKE_BASE_CIPHER_L2: &str = "6F"; // HPKE Base cipher bytes of sniffable stream plaintext lead size 2
    pub const HPKE_BASE_CIPHER_BIG_L0: &str = "7AAF"; // HPKE Base cipher bytes of sniffable stream plaintext big lead size 0
    pub const HPKE_BASE_CIPHER_BIG_L1: &str = "8AAF"; // HPKE Base cipher bytes of sniffable stream plaintext big lead size 1
    pub const HPKE_BASE_CIPHER_BIG_L2: &str = "9AAF"; // HPKE Base cipher bytes of sniffable stream plaintext big lead size 2
    pub const HPKE_AUTH_CIPHER_L0: &str = "4G"; // HPKE Auth cipher bytes of sniffable stream plaintext lead size 0
    pub const HPKE_AUTH_CIPHER_L1: &str = "5G"; // HPKE Auth cipher bytes of sniffable stream plaintext lead size 1
    pub const HPKE_AUTH_CIPHER_L2: &str = "6G"; // HPKE Auth cipher bytes of sniffable stream plaintext lead size 2
    pub const HPKE_AUTH_CIPHER_BIG_L0: &str = "7AAG"; // HPKE Auth cipher bytes of sniffable stream plaintext big lead size 0
    pub const HPKE_AUTH_CIPHER_BIG_L1: &str = "8AAG"; // HPKE Auth cipher bytes of sniffable stream plaintext big lead size 1
    pub const HPKE_AUTH_CIPHER_BIG_L2: &str = "9AAG"; // HPKE Auth cipher bytes of sniffable stream plaintext big lead size 2
    pub const DECIMAL_L0: &str = "4H"; // Decimal B64 string float and int lead size 0
    pub const DECIMAL_L1: &str = "5H"; // Decimal B64 string float and int lead size 1
    pub const DECIMAL_L2: &str = "6H"; // Decimal B64 string float and int lead size 2
    pub const DECIMAL_BIG_L0: &str = "7AAH"; // Decimal B64 string float and int big lead size 0
    pub const DECIMAL_BIG_L1: &str = "8AAH"; // Decimal B64 string float and int big lead size 1
    pub const DECIMAL_BIG_L2: &str = "9AAH"; // Decimal B64 string float and int big lead size 2

    /// Every code with a size table entry
    pub static TUPLE: [&str; 116] = [
        ED25519_SEED, ED25519N, X25519, ED25519, BLAKE3_256, BLAKE2B_256, BLAKE2S_256, SHA3_256,
        SHA2_256, ECDSA_256K1_SEED, ED448_SEED, X448, SHORT, BIG, X25519_PRIVATE,
        X25519_CIPHER_SEED, ECDSA_256R1_SEED, TALL, LARGE, GREAT, VAST, LABEL1, LABEL2, TAG3,
        TAG7, TAG11, SALT_256, SALT_128, ED25519_SIG, ECDSA_256K1_SIG, BLAKE3_512, BLAKE2B_512,
        SHA3_512, SHA2_512, LONG, ECDSA_256R1_SIG, TAG1, TAG2, TAG5, TAG6, TAG9, TAG10,
        GRAM_HEAD_NECK, GRAM_HEAD, GRAM_HEAD_AID_NECK, GRAM_HEAD_AID, ECDSA_256K1N, ECDSA_256K1,
        ED448N, ED448, ED448_SIG, TAG4, DATE_TIME, X25519_CIPHER_SALT, ECDSA_256R1N, ECDSA_256R1,
        NULL, NO, YES, TAG8, ESCAPE, EMPTY, TBD0S, TBD0, TBD1S, TBD1, TBD2S, TBD2,
        STR_B64_L0, STR_B64_L1, STR_B64_L2, STR_B64_BIG_L0, STR_B64_BIG_L1, STR_B64_BIG_L2,
        BYTES_L0, BYTES_L1, BYTES_L2, BYTES_BIG_L0, BYTES_BIG_L1, BYTES_BIG_L2,
        X25519_CIPHER_L0, X25519_CIPHER_L1, X25519_CIPHER_L2, X25519_CIPHER_BIG_L0,
        X25519_CIPHER_BIG_L1, X25519_CIPHER_BIG_L2, X25519_CIPHER_QB64_L0, X25519_CIPHER_QB64_L1,
        X25519_CIPHER_QB64_L2, X25519_CIPHER_QB64_BIG_L0, X25519_CIPHER_QB64_BIG_L1,
        X25519_CIPHER_QB64_BIG_L2, X25519_CIPHER_QB2_L0, X25519_CIPHER_QB2_L1,
        X25519_CIPHER_QB2_L2, X25519_CIPHER_QB2_BIG_L0, X25519_CIPHER_QB2_BIG_L1,
        X25519_CIPHER_QB2_BIG_L2, HPKE_BASE_CIPHER_L0, HPKE_BASE_CIPHER_L1, HPKE_BASE_CIPHER_L2,
        HPKE_BASE_CIPHER_BIG_L0, HPKE_BASE_CIPHER_BIG_L1, HPKE_BASE_CIPHER_BIG_L2,
        HPKE_AUTH_CIPHER_L0, HPKE_AUTH_CIPHER_L1, HPKE_AUTH_CIPHER_L2, HPKE_AUTH_CIPHER_BIG_L0,
        HPKE_AUTH_CIPHER_BIG_L1, HPKE_AUTH_CIPHER_BIG_L2, DECIMAL_L0, DECIMAL_L1, DECIMAL_L2,
        DECIMAL_BIG_L0, DECIMAL_BIG_L1, DECIMAL_BIG_L2,
    ];
}

/// Selector characters for small variable sized codes, indexed by lead size
#[allow(dead_code)]
pub mod small_vrz_dex {
    pub const LEAD0: &str = "4"; // First Selector Character for all ls == 0 codes
    pub const LEAD1: &str = "5"; // First Selector Character for all ls == 1 codes
    pub const LEAD2: &str = "6"; // First Selector Character for all ls == 2 codes

    pub static TUPLE: [&str; 3] = [LEAD0, LEAD1, LEAD2];
}

/// Selector characters for large variable sized codes, indexed by lead size
#[allow(dead_code)]
pub mod large_vrz_dex {
    pub const LEAD0_BIG: &str = "7"; // First Selector Character for all ls == 0 codes
    pub const LEAD1_BIG: &str = "8"; // First Selector Character for all ls == 1 codes
    pub const LEAD2_BIG: &str = "9"; // First Selector Character for all ls == 2 codes

    pub static TUPLE: [&str; 3] = [LEAD0_BIG, LEAD1_BIG, LEAD2_BIG];
}

/// BextCodex is codex of all variable sized Base64 Text (Bext) derivation codes.
/// Only provides defined codes.
#[allow(dead_code)]
pub mod bex_dex {
    use super::mtr_dex;

    pub const STR_B64_L0: &str = mtr_dex::STR_B64_L0;
    pub const STR_B64_L1: &str = mtr_dex::STR_B64_L1;
    pub const STR_B64_L2: &str = mtr_dex::STR_B64_L2;
    pub const STR_B64_BIG_L0: &str = mtr_dex::STR_B64_BIG_L0;
    pub const STR_B64_BIG_L1: &str = mtr_dex::STR_B64_BIG_L1;
    pub const STR_B64_BIG_L2: &str = mtr_dex::STR_B64_BIG_L2;

    pub static TUPLE: [&str; 6] = [
        STR_B64_L0, STR_B64_L1, STR_B64_L2, STR_B64_BIG_L0, STR_B64_BIG_L1, STR_B64_BIG_L2,
    ];
}

/// TexCodex is codex of all variable sized byte string (Text) derivation codes.
#[allow(dead_code)]
pub mod tex_dex {
    use super::mtr_dex;

    pub const BYTES_L0: &str = mtr_dex::BYTES_L0;
    pub const BYTES_L1: &str = mtr_dex::BYTES_L1;
    pub const BYTES_L2: &str = mtr_dex::BYTES_L2;
    pub const BYTES_BIG_L0: &str = mtr_dex::BYTES_BIG_L0;
    pub const BYTES_BIG_L1: &str = mtr_dex::BYTES_BIG_L1;
    pub const BYTES_BIG_L2: &str = mtr_dex::BYTES_BIG_L2;

    pub static TUPLE: [&str; 6] =
        [BYTES_L0, BYTES_L1, BYTES_L2, BYTES_BIG_L0, BYTES_BIG_L1, BYTES_BIG_L2];
}

/// DecimalCodex is codex of all variable sized Base64 decimal number codes.
#[allow(dead_code)]
pub mod dec_dex {
    use super::mtr_dex;

    pub const DECIMAL_L0: &str = mtr_dex::DECIMAL_L0;
    pub const DECIMAL_L1: &str = mtr_dex::DECIMAL_L1;
    pub const DECIMAL_L2: &str = mtr_dex::DECIMAL_L2;
    pub const DECIMAL_BIG_L0: &str = mtr_dex::DECIMAL_BIG_L0;
    pub const DECIMAL_BIG_L1: &str = mtr_dex::DECIMAL_BIG_L1;
    pub const DECIMAL_BIG_L2: &str = mtr_dex::DECIMAL_BIG_L2;

    pub static TUPLE: [&str; 6] = [
        DECIMAL_L0, DECIMAL_L1, DECIMAL_L2, DECIMAL_BIG_L0, DECIMAL_BIG_L1, DECIMAL_BIG_L2,
    ];
}

/// NonceCodex is codex of codes for nonce, salty nonce and UUID fields.
/// Digests may stand in for a nonce so all digest codes are included.
#[allow(dead_code)]
pub mod non_dex {
    use super::mtr_dex;

    pub const EMPTY: &str = mtr_dex::EMPTY;
    pub const SALT_128: &str = mtr_dex::SALT_128;
    pub const SALT_256: &str = mtr_dex::SALT_256;

    pub static TUPLE: [&str; 12] = [
        EMPTY,
        SALT_128,
        SALT_256,
        mtr_dex::BLAKE3_256,
        mtr_dex::BLAKE2B_256,
        mtr_dex::BLAKE2S_256,
        mtr_dex::SHA3_256,
        mtr_dex::SHA2_256,
        mtr_dex::BLAKE3_512,
        mtr_dex::BLAKE2B_512,
        mtr_dex::SHA3_512,
        mtr_dex::SHA2_512,
    ];
}

/// DigCodex is codex of all digest derivation codes.
#[allow(dead_code)]
pub mod dig_dex {
    use super::mtr_dex;

    /// Blake3 256 bit digest self-addressing derivation
    pub const BLAKE3_256: &str = mtr_dex::BLAKE3_256;

    /// Blake2b 256 bit digest self-addressing derivation
    pub const BLAKE2B_256: &str = mtr_dex::BLAKE2B_256;

    /// Blake2s 256 bit digest self-addressing derivation
    pub const BLAKE2S_256: &str = mtr_dex::BLAKE2S_256;

    /// SHA3 256 bit digest self-addressing derivation
    pub const SHA3_256: &str = mtr_dex::SHA3_256;

    /// SHA2 256 bit digest self-addressing derivation
    pub const SHA2_256: &str = mtr_dex::SHA2_256;

    /// Blake3 512 bit digest self-addressing derivation
    pub const BLAKE3_512: &str = mtr_dex::BLAKE3_512;

    /// Blake2b 512 bit digest self-addressing derivation
    pub const BLAKE2B_512: &str = mtr_dex::BLAKE2B_512;

    /// SHA3 512 bit digest self-addressing derivation
    pub const SHA3_512: &str = mtr_dex::SHA3_512;

    /// SHA2 512 bit digest self-addressing derivation
    pub const SHA2_512: &str = mtr_dex::SHA2_512;

    pub static TUPLE: [&str; 9] = [
        BLAKE3_256, BLAKE2B_256, BLAKE2S_256, SHA3_256, SHA2_256, BLAKE3_512, BLAKE2B_512,
        SHA3_512, SHA2_512,
    ];
}

/// NumCodex is codex of Base64 derivation codes for compactly representing
/// numbers across a wide range of sizes.
#[allow(dead_code)]
pub mod num_dex {
    use super::mtr_dex;

    pub const SHORT: &str = mtr_dex::SHORT; // Short 2 byte b2 number
    pub const LONG: &str = mtr_dex::LONG; // Long 4 byte b2 number
    pub const TALL: &str = mtr_dex::TALL; // Tall 5 byte b2 number
    pub const BIG: &str = mtr_dex::BIG; // Big 8 byte b2 number
    pub const LARGE: &str = mtr_dex::LARGE; // Large 11 byte b2 number
    pub const GREAT: &str = mtr_dex::GREAT; // Great 14 byte b2 number
    pub const HUGE: &str = mtr_dex::SALT_128; // Huge 16 byte b2 number
    pub const VAST: &str = mtr_dex::VAST; // Vast 17 byte b2 number

    pub static TUPLE: [&str; 8] = [SHORT, LONG, TALL, BIG, LARGE, GREAT, HUGE, VAST];
}

/// TagCodex is codex of special soft only tag codes, ordered by tag length.
#[allow(dead_code)]
pub mod tag_dex {
    use super::mtr_dex;

    pub const TAG1: &str = mtr_dex::TAG1;
    pub const TAG2: &str = mtr_dex::TAG2;
    pub const TAG3: &str = mtr_dex::TAG3;
    pub const TAG4: &str = mtr_dex::TAG4;
    pub const TAG5: &str = mtr_dex::TAG5;
    pub const TAG6: &str = mtr_dex::TAG6;
    pub const TAG7: &str = mtr_dex::TAG7;
    pub const TAG8: &str = mtr_dex::TAG8;
    pub const TAG9: &str = mtr_dex::TAG9;
    pub const TAG10: &str = mtr_dex::TAG10;
    pub const TAG11: &str = mtr_dex::TAG11;

    /// Tag code for a tag of length `i + 1` is `TUPLE[i]`
    pub static TUPLE: [&str; 11] =
        [TAG1, TAG2, TAG3, TAG4, TAG5, TAG6, TAG7, TAG8, TAG9, TAG10, TAG11];
}

/// LabelCodex is codex of codes usable for field map labels.
#[allow(dead_code)]
pub mod label_dex {
    use super::mtr_dex;

    pub static TUPLE: [&str; 26] = [
        mtr_dex::EMPTY,
        mtr_dex::TAG1,
        mtr_dex::TAG2,
        mtr_dex::TAG3,
        mtr_dex::TAG4,
        mtr_dex::TAG5,
        mtr_dex::TAG6,
        mtr_dex::TAG7,
        mtr_dex::TAG8,
        mtr_dex::TAG9,
        mtr_dex::TAG10,
        mtr_dex::TAG11,
        mtr_dex::STR_B64_L0,
        mtr_dex::STR_B64_L1,
        mtr_dex::STR_B64_L2,
        mtr_dex::STR_B64_BIG_L0,
        mtr_dex::STR_B64_BIG_L1,
        mtr_dex::STR_B64_BIG_L2,
        mtr_dex::LABEL1,
        mtr_dex::LABEL2,
        mtr_dex::BYTES_L0,
        mtr_dex::BYTES_L1,
        mtr_dex::BYTES_L2,
        mtr_dex::BYTES_BIG_L0,
        mtr_dex::BYTES_BIG_L1,
        mtr_dex::BYTES_BIG_L2,
    ];
}

/// PreCodex is codex of all identifier prefix derivation codes.
#[allow(dead_code)]
pub mod pre_dex {
    use super::mtr_dex;

    pub static TUPLE: [&str; 18] = [
        mtr_dex::ED25519N,
        mtr_dex::ED25519,
        mtr_dex::BLAKE3_256,
        mtr_dex::BLAKE2B_256,
        mtr_dex::BLAKE2S_256,
        mtr_dex::SHA3_256,
        mtr_dex::SHA2_256,
        mtr_dex::BLAKE3_512,
        mtr_dex::BLAKE2B_512,
        mtr_dex::SHA3_512,
        mtr_dex::SHA2_512,
        mtr_dex::ECDSA_256K1N,
        mtr_dex::ECDSA_256K1,
        mtr_dex::ED448N,
        mtr_dex::ED448,
        mtr_dex::ED448_SIG,
        mtr_dex::ECDSA_256R1N,
        mtr_dex::ECDSA_256R1,
    ];
}

/// NonTransCodex is codex of all non-transferable prefix derivation codes.
#[allow(dead_code)]
pub mod non_trans_dex {
    use super::mtr_dex;

    pub static TUPLE: [&str; 4] = [
        mtr_dex::ED25519N,
        mtr_dex::ECDSA_256K1N,
        mtr_dex::ED448N,
        mtr_dex::ECDSA_256R1N,
    ];
}

/// PreNonDigCodex is codex of all prefixive but non-digestive derivation codes.
#[allow(dead_code)]
pub mod pre_non_dig_dex {
    use super::mtr_dex;

    pub static TUPLE: [&str; 8] = [
        mtr_dex::ED25519N,
        mtr_dex::ED25519,
        mtr_dex::ECDSA_256K1N,
        mtr_dex::ECDSA_256K1,
        mtr_dex::ED448N,
        mtr_dex::ED448,
        mtr_dex::ECDSA_256R1N,
        mtr_dex::ECDSA_256R1,
    ];
}

/// SigCodex is codex of all non-indexed signature derivation codes.
#[allow(dead_code)]
pub mod sig_dex {
    use super::mtr_dex;

    pub const ED25519_SIG: &str = mtr_dex::ED25519_SIG;
    pub const ECDSA_256K1_SIG: &str = mtr_dex::ECDSA_256K1_SIG;
    pub const ECDSA_256R1_SIG: &str = mtr_dex::ECDSA_256R1_SIG;
    pub const ED448_SIG: &str = mtr_dex::ED448_SIG;

    pub static TUPLE: [&str; 4] = [ED25519_SIG, ECDSA_256K1_SIG, ECDSA_256R1_SIG, ED448_SIG];
}

/// Sizage for Matter codes.
///
/// * `hs` hard size in chars
/// * `ss` soft size in chars, includes `xs`
/// * `xs` xtra prepad size in chars
/// * `fs` full size in chars, `None` when variable sized
/// * `ls` lead size in bytes prepended to raw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sizage {
    pub hs: u32,
    pub ss: u32,
    pub xs: u32,
    pub fs: Option<u32>,
    pub ls: u32,
}

impl Sizage {
    const fn fixed(hs: u32, ss: u32, xs: u32, fs: u32, ls: u32) -> Self {
        Sizage { hs, ss, xs, fs: Some(fs), ls }
    }

    const fn variable(hs: u32, ss: u32, ls: u32) -> Self {
        Sizage { hs, ss, xs: 0, fs: None, ls }
    }

    /// Combined hard and soft size
    pub fn cs(&self) -> u32 {
        self.hs + self.ss
    }

    /// Raw size in bytes for fixed codes
    pub fn raw_size(&self) -> Option<usize> {
        self.fs
            .map(|fs| (((fs - self.cs()) * 3 / 4) - self.ls) as usize)
    }

    /// True for fixed codes that carry a soft value
    pub fn is_special(&self) -> bool {
        self.fs.is_some() && self.ss > 0
    }
}

/// Returns the Sizage of Matter code `code`
pub fn sizage(code: &str) -> Option<Sizage> {
    let size = match code {
        // keys, seeds, digests and salts
        "A" | "B" | "C" | "D" | "E" | "F" | "G" | "H" | "I" | "J" | "O" | "Q" | "a" => {
            Sizage::fixed(1, 0, 0, 44, 0)
        }
        "K" | "L" => Sizage::fixed(1, 0, 0, 76, 0),
        "P" => Sizage::fixed(1, 0, 0, 124, 0),

        // numbers
        "M" => Sizage::fixed(1, 0, 0, 4, 0),
        "R" => Sizage::fixed(1, 0, 0, 8, 0),
        "N" => Sizage::fixed(1, 0, 0, 12, 0),
        "S" => Sizage::fixed(1, 0, 0, 16, 0),
        "T" => Sizage::fixed(1, 0, 0, 20, 0),
        "U" => Sizage::fixed(1, 0, 0, 24, 0),
        "0H" => Sizage::fixed(2, 0, 0, 8, 0),
        "0A" => Sizage::fixed(2, 0, 0, 24, 0),

        // labels
        "V" => Sizage::fixed(1, 0, 0, 4, 1),
        "W" => Sizage::fixed(1, 0, 0, 4, 0),

        // tags
        "0J" => Sizage::fixed(2, 2, 1, 4, 0),
        "0K" => Sizage::fixed(2, 2, 0, 4, 0),
        "X" => Sizage::fixed(1, 3, 0, 4, 0),
        "1AAF" => Sizage::fixed(4, 4, 0, 8, 0),
        "0L" => Sizage::fixed(2, 6, 1, 8, 0),
        "0M" => Sizage::fixed(2, 6, 0, 8, 0),
        "Y" => Sizage::fixed(1, 7, 0, 8, 0),
        "1AAN" => Sizage::fixed(4, 8, 0, 12, 0),
        "0N" => Sizage::fixed(2, 10, 1, 12, 0),
        "0O" => Sizage::fixed(2, 10, 0, 12, 0),
        "Z" => Sizage::fixed(1, 11, 0, 12, 0),

        // signatures and 512 bit digests
        "0B" | "0C" | "0D" | "0E" | "0F" | "0G" | "0I" => Sizage::fixed(2, 0, 0, 88, 0),
        "1AAE" => Sizage::fixed(4, 0, 0, 156, 0),

        // gram heads
        "0P" => Sizage::fixed(2, 22, 0, 32, 0),
        "0Q" => Sizage::fixed(2, 22, 0, 28, 0),
        "0R" => Sizage::fixed(2, 22, 0, 76, 0),
        "0S" => Sizage::fixed(2, 22, 0, 72, 0),

        // four char keys, datetime and specials
        "1AAA" | "1AAB" | "1AAI" | "1AAJ" => Sizage::fixed(4, 0, 0, 48, 0),
        "1AAC" | "1AAD" => Sizage::fixed(4, 0, 0, 80, 0),
        "1AAG" => Sizage::fixed(4, 0, 0, 36, 0),
        "1AAH" => Sizage::fixed(4, 0, 0, 100, 0),
        "1AAK" | "1AAL" | "1AAM" | "1AAO" | "1AAP" => Sizage::fixed(4, 0, 0, 4, 0),

        // testing
        "1__-" => Sizage::fixed(4, 2, 0, 12, 0),
        "1___" => Sizage::fixed(4, 0, 0, 8, 0),
        "2__-" => Sizage::fixed(4, 2, 1, 12, 1),
        "2___" => Sizage::fixed(4, 0, 0, 8, 1),
        "3__-" => Sizage::fixed(4, 2, 0, 12, 2),
        "3___" => Sizage::fixed(4, 0, 0, 8, 2),

        // variable sized
        "4A" | "4B" | "4C" | "4D" | "4E" | "4F" | "4G" | "4H" => Sizage::variable(2, 2, 0),
        "5A" | "5B" | "5C" | "5D" | "5E" | "5F" | "5G" | "5H" => Sizage::variable(2, 2, 1),
        "6A" | "6B" | "6C" | "6D" | "6E" | "6F" | "6G" | "6H" => Sizage::variable(2, 2, 2),
        "7AAA" | "7AAB" | "7AAC" | "7AAD" | "7AAE" | "7AAF" | "7AAG" | "7AAH" => {
            Sizage::variable(4, 4, 0)
        }
        "8AAA" | "8AAB" | "8AAC" | "8AAD" | "8AAE" | "8AAF" | "8AAG" | "8AAH" => {
            Sizage::variable(4, 4, 1)
        }
        "9AAA" | "9AAB" | "9AAC" | "9AAD" | "9AAE" | "9AAF" | "9AAG" | "9AAH" => {
            Sizage::variable(4, 4, 2)
        }
        _ => return None,
    };

    Some(size)
}

/// Hard code size selected by the first char of a Matter code
pub fn hardage(c: char) -> Option<u32> {
    match c {
        'A'..='Z' | 'a'..='z' => Some(1),
        '0' | '4' | '5' | '6' => Some(2),
        '1' | '2' | '3' | '7' | '8' | '9' => Some(4),
        _ => None,
    }
}

/// Hard code size selected by the first sextet of a Matter code
pub fn bardage(b: u8) -> Option<u32> {
    match b {
        0..=51 => Some(1),
        52 | 56 | 57 | 58 => Some(2),
        53 | 54 | 55 | 59 | 60 | 61 => Some(4),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cesr::{b64_char_to_index, B64_ALPHABET};

    #[test]
    fn test_matter_sizes() {
        for code in mtr_dex::TUPLE {
            let size = sizage(code).unwrap_or_else(|| panic!("missing size for {}", code));
            let cs = size.cs();

            assert_eq!(hardage(code.chars().next().unwrap()), Some(size.hs), "{}", code);
            assert_eq!(size.hs as usize, code.len(), "{}", code);
            assert!(size.xs <= size.ss, "{}", code);
            assert!(size.ls <= 2, "{}", code);

            match size.fs {
                Some(fs) => {
                    assert!(fs >= cs && fs % 4 == 0, "{}", code);
                    if size.ss > 0 && fs == cs {
                        // soft only special codes carry no raw
                        assert_eq!(size.ls, 0, "{}", code);
                    }
                    let rs = size.raw_size().unwrap();
                    let ps = (3 - (rs + size.ls as usize) % 3) % 3;
                    assert_eq!(ps, (cs % 4) as usize, "{}", code);
                }
                None => {
                    assert_eq!(cs % 4, 0, "{}", code);
                    assert_eq!(size.xs, 0, "{}", code);
                }
            }
        }
    }

    #[test]
    fn test_matter_size_values() {
        assert_eq!(sizage(mtr_dex::ED25519_SEED), Some(Sizage::fixed(1, 0, 0, 44, 0)));
        assert_eq!(sizage(mtr_dex::BLAKE3_256).unwrap().raw_size(), Some(32));
        assert_eq!(sizage(mtr_dex::ED25519_SIG).unwrap().raw_size(), Some(64));
        assert_eq!(sizage(mtr_dex::ED448_SIG).unwrap().raw_size(), Some(114));
        assert_eq!(sizage(mtr_dex::SHORT).unwrap().raw_size(), Some(2));
        assert_eq!(sizage(mtr_dex::LABEL1).unwrap().raw_size(), Some(1));
        assert_eq!(sizage(mtr_dex::DATE_TIME).unwrap().raw_size(), Some(24));
        assert_eq!(sizage(mtr_dex::TAG3).unwrap().raw_size(), Some(0));
        assert_eq!(sizage(mtr_dex::TBD1S).unwrap().raw_size(), Some(3));
        assert_eq!(sizage(mtr_dex::BYTES_L1), Some(Sizage::variable(2, 2, 1)));
        assert_eq!(sizage(mtr_dex::BYTES_L1).unwrap().raw_size(), None);
        assert!(sizage(mtr_dex::TAG3).unwrap().is_special());
        assert!(!sizage(mtr_dex::STR_B64_L0).unwrap().is_special());
        assert!(sizage("b").is_none());
        assert!(sizage("-A").is_none());
    }

    #[test]
    fn test_matter_hards_bards() {
        for &c in B64_ALPHABET.iter() {
            let c = c as char;
            let sextet = b64_char_to_index(c).unwrap();
            assert_eq!(hardage(c), bardage(sextet), "{}", c);
        }
        assert_eq!(hardage('-'), None);
        assert_eq!(hardage('_'), None);
        assert_eq!(bardage(62), None);
        assert_eq!(bardage(63), None);
    }

    #[test]
    fn test_sub_codexes() {
        for dex in [
            &dig_dex::TUPLE[..],
            &num_dex::TUPLE[..],
            &tag_dex::TUPLE[..],
            &label_dex::TUPLE[..],
            &pre_dex::TUPLE[..],
            &non_trans_dex::TUPLE[..],
            &pre_non_dig_dex::TUPLE[..],
            &sig_dex::TUPLE[..],
            &bex_dex::TUPLE[..],
            &tex_dex::TUPLE[..],
            &dec_dex::TUPLE[..],
            &non_dex::TUPLE[..],
        ] {
            for code in dex {
                assert!(mtr_dex::TUPLE.contains(code), "{}", code);
            }
        }

        for (i, code) in tag_dex::TUPLE.iter().enumerate() {
            let size = sizage(code).unwrap();
            assert_eq!((size.ss - size.xs) as usize, i + 1, "{}", code);
        }
        for code in non_trans_dex::TUPLE {
            assert!(pre_dex::TUPLE.contains(&code));
        }
    }
}
