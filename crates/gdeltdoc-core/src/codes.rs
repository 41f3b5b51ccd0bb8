//! Source-country and source-language codes accepted by the DOC API.
//!
//! Countries use FIPS 10-4 two-letter codes (note `UK`, not `GB`).
//! Languages use ISO 639-1 codes.

pub mod country {
    pub const US: &str = "US";
    pub const UK: &str = "UK";
    pub const CA: &str = "CA";
    pub const AU: &str = "AU";
    pub const DE: &str = "DE";
    pub const FR: &str = "FR";
    pub const JP: &str = "JP";
    pub const CN: &str = "CN";
    pub const IN: &str = "IN";
    pub const BR: &str = "BR";
    pub const RU: &str = "RU";
    pub const KR: &str = "KR";
    pub const IT: &str = "IT";
    pub const ES: &str = "ES";
    pub const MX: &str = "MX";
    pub const ID: &str = "ID";
    pub const NL: &str = "NL";
    pub const SA: &str = "SA";
    pub const CH: &str = "CH";
    pub const SE: &str = "SE";
    pub const TR: &str = "TR";
    pub const BE: &str = "BE";
    pub const AR: &str = "AR";
    pub const PL: &str = "PL";
    pub const ZA: &str = "ZA";
    pub const TH: &str = "TH";
    pub const EG: &str = "EG";
    pub const MY: &str = "MY";
    pub const SG: &str = "SG";
    pub const PH: &str = "PH";
    pub const PK: &str = "PK";
    pub const BD: &str = "BD";
    pub const NG: &str = "NG";
    pub const VN: &str = "VN";
    pub const IR: &str = "IR";
    pub const CL: &str = "CL";
    pub const FI: &str = "FI";
    pub const DK: &str = "DK";
    pub const NO: &str = "NO";
    pub const IE: &str = "IE";
    pub const AT: &str = "AT";
    pub const IL: &str = "IL";
    pub const NZ: &str = "NZ";
    pub const GR: &str = "GR";
    pub const PT: &str = "PT";
    pub const CZ: &str = "CZ";
    pub const HU: &str = "HU";
    pub const UA: &str = "UA";
    pub const HK: &str = "HK";
    pub const CO: &str = "CO";
    pub const RO: &str = "RO";
    pub const VE: &str = "VE";

    /// Every code above, in declaration order.
    pub const ALL: &[&str] = &[
        US,
        UK,
        CA,
        AU,
        DE,
        FR,
        JP,
        CN,
        IN,
        BR,
        RU,
        KR,
        IT,
        ES,
        MX,
        ID,
        NL,
        SA,
        CH,
        SE,
        TR,
        BE,
        AR,
        PL,
        ZA,
        TH,
        EG,
        MY,
        SG,
        PH,
        PK,
        BD,
        NG,
        VN,
        IR,
        CL,
        FI,
        DK,
        NO,
        IE,
        AT,
        IL,
        NZ,
        GR,
        PT,
        CZ,
        HU,
        UA,
        HK,
        CO,
        RO,
        VE,
    ];

    /// Case-insensitive membership test against [`ALL`].
    #[must_use]
    pub fn is_known(code: &str) -> bool {
        ALL.iter().any(|known| known.eq_ignore_ascii_case(code))
    }
}

pub mod language {
    pub const ENGLISH: &str = "en";
    pub const SPANISH: &str = "es";
    pub const FRENCH: &str = "fr";
    pub const GERMAN: &str = "de";
    pub const ITALIAN: &str = "it";
    pub const PORTUGUESE: &str = "pt";
    pub const RUSSIAN: &str = "ru";
    pub const CHINESE: &str = "zh";
    pub const JAPANESE: &str = "ja";
    pub const KOREAN: &str = "ko";
    pub const ARABIC: &str = "ar";
    pub const HINDI: &str = "hi";
    pub const INDONESIAN: &str = "id";
    pub const TURKISH: &str = "tr";
    pub const DUTCH: &str = "nl";
    pub const POLISH: &str = "pl";
    pub const VIETNAMESE: &str = "vi";
    pub const THAI: &str = "th";
    pub const SWEDISH: &str = "sv";
    pub const GREEK: &str = "el";
    pub const CZECH: &str = "cs";
    pub const ROMANIAN: &str = "ro";
    pub const HUNGARIAN: &str = "hu";
    pub const DANISH: &str = "da";
    pub const FINNISH: &str = "fi";
    pub const NORWEGIAN: &str = "no";
    pub const HEBREW: &str = "he";
    pub const UKRAINIAN: &str = "uk";
    pub const FARSI: &str = "fa";
    pub const BENGALI: &str = "bn";
    pub const TAGALOG: &str = "tl";
    pub const SWAHILI: &str = "sw";

    /// Every code above, in declaration order.
    pub const ALL: &[&str] = &[
        ENGLISH,
        SPANISH,
        FRENCH,
        GERMAN,
        ITALIAN,
        PORTUGUESE,
        RUSSIAN,
        CHINESE,
        JAPANESE,
        KOREAN,
        ARABIC,
        HINDI,
        INDONESIAN,
        TURKISH,
        DUTCH,
        POLISH,
        VIETNAMESE,
        THAI,
        SWEDISH,
        GREEK,
        CZECH,
        ROMANIAN,
        HUNGARIAN,
        DANISH,
        FINNISH,
        NORWEGIAN,
        HEBREW,
        UKRAINIAN,
        FARSI,
        BENGALI,
        TAGALOG,
        SWAHILI,
    ];

    /// Case-insensitive membership test against [`ALL`].
    #[must_use]
    pub fn is_known(code: &str) -> bool {
        ALL.iter().any(|known| known.eq_ignore_ascii_case(code))
    }
}
