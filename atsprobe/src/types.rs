// atsprobe/src/types.rs

/// FeatureTag - Newtype Pattern (1 バイト)
///
/// Identifies one vendor capability inside the PC/SC part 10 feature
/// directory. Well-known tags are provided as consts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FeatureTag(u8);

impl FeatureTag {
    /// FEATURE_VERIFY_PIN_DIRECT
    pub const VERIFY_PIN_DIRECT: Self = Self(0x06);
    /// FEATURE_MODIFY_PIN_DIRECT
    pub const MODIFY_PIN_DIRECT: Self = Self(0x07);
    /// FEATURE_IFD_PIN_PROPERTIES
    pub const IFD_PIN_PROPERTIES: Self = Self(0x0A);
    /// FEATURE_CCID_ESC_COMMAND, the tag this crate exists to find
    pub const ESCAPE: Self = Self(0x13);

    /// Wrap a raw tag byte.
    pub const fn new(tag: u8) -> Self {
        Self(tag)
    }

    /// The raw tag byte.
    pub fn as_u8(&self) -> u8 {
        self.0
    }
}

/// ControlCode (u32)
///
/// The transport selector a reader assigns to escape commands for the
/// current session. Only constructible by the feature-directory scanner, so
/// holding one proves discovery succeeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
#[display(fmt = "{:#010x}", _0)]
pub struct ControlCode(u32);

impl ControlCode {
    pub(crate) const fn new(code: u32) -> Self {
        Self(code)
    }

    /// The raw 32-bit value, as passed to the transport.
    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

/// ISO 14443 transmission rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BitRate {
    #[display(fmt = "106Kbps")]
    Kbps106,
    #[display(fmt = "212Kbps")]
    Kbps212,
    #[display(fmt = "424Kbps")]
    Kbps424,
    #[display(fmt = "848Kbps")]
    Kbps848,
}

impl BitRate {
    /// Decode a rate table index (0..=3) as used by the negotiated-rates
    /// response nibbles.
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Self::Kbps106),
            1 => Some(Self::Kbps212),
            2 => Some(Self::Kbps424),
            3 => Some(Self::Kbps848),
            _ => None,
        }
    }

    /// Index into the ordered rate table.
    pub fn index(&self) -> u8 {
        match self {
            Self::Kbps106 => 0,
            Self::Kbps212 => 1,
            Self::Kbps424 => 2,
            Self::Kbps848 => 3,
        }
    }

    /// Rate in kilobits per second.
    pub fn kbps(&self) -> u16 {
        match self {
            Self::Kbps106 => 106,
            Self::Kbps212 => 212,
            Self::Kbps424 => 424,
            Self::Kbps848 => 848,
        }
    }
}

/// Comma-separated kbps list, e.g. `"106,212,424"`.
pub fn rate_list(rates: &[BitRate]) -> String {
    let mut s = String::new();
    for (i, r) in rates.iter().enumerate() {
        if i != 0 {
            s.push(',');
        }
        s.push_str(&r.kbps().to_string());
    }
    s
}

/// Protocol class of the selected card, from the high nibble of the
/// communication-status type byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ProtocolClass {
    #[display(fmt = "Memory card")]
    Memory,
    #[display(fmt = "T=CL ISO 14443-4 card")]
    Iso14443_4,
    #[display(fmt = "Dual mode card")]
    DualMode,
    /// A class nibble this tool does not recognize. Not malformed data, just
    /// unknown to us; the nibble is kept for display and re-encoding.
    #[display(fmt = "Unknown card type")]
    Unknown(u8),
}

impl ProtocolClass {
    /// Decode the high nibble of the type byte (already shifted down).
    pub fn from_nibble(nibble: u8) -> Self {
        match nibble {
            0x0 => Self::Memory,
            0x1 => Self::Iso14443_4,
            0x2 => Self::DualMode,
            other => Self::Unknown(other),
        }
    }

    /// The nibble this class encodes to.
    pub fn nibble(&self) -> u8 {
        match self {
            Self::Memory => 0x0,
            Self::Iso14443_4 => 0x1,
            Self::DualMode => 0x2,
            Self::Unknown(n) => *n,
        }
    }
}

/// ISO 14443 card sub-type, from the low nibble of the type byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CardSubType {
    #[display(fmt = "Type A")]
    TypeA,
    #[display(fmt = "Type B")]
    TypeB,
}

impl CardSubType {
    /// Decode the low nibble of the type byte: zero means Type A, anything
    /// else Type B.
    pub fn from_nibble(nibble: u8) -> Self {
        if nibble == 0 {
            Self::TypeA
        } else {
            Self::TypeB
        }
    }

    /// The canonical nibble this sub-type encodes to.
    pub fn nibble(&self) -> u8 {
        match self {
            Self::TypeA => 0,
            Self::TypeB => 1,
        }
    }
}

/// Decoded communication-status facts (escape sub-command 0x11).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CommunicationCapabilities {
    /// Rates the reader can transmit at, 106Kbps always first.
    pub reader_to_card: Vec<BitRate>,
    /// Rates the card can transmit at, 106Kbps always first.
    pub card_to_reader: Vec<BitRate>,
    /// Whether the reader requires the same rate in both directions.
    pub same_rate_required: bool,
    /// Protocol class from the type byte's high nibble.
    pub class: ProtocolClass,
    /// Card sub-type from the type byte's low nibble.
    pub sub_type: CardSubType,
}

impl CommunicationCapabilities {
    /// Combined description matching the vendor tool wording, e.g.
    /// `"T=CL ISO 14443-4 card (Type A)"`.
    pub fn card_description(&self) -> String {
        format!("{} ({})", self.class, self.sub_type)
    }
}

/// AnswerToSelect - opaque byte sequence returned verbatim by the reader.
///
/// This crate retrieves and renders the ATS; it does not parse its fields.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnswerToSelect(Vec<u8>);

impl AnswerToSelect {
    /// Wrap raw ATS bytes. An empty ATS is valid.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Uppercase hex pairs, no separators, e.g. `"3B8F"`.
    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(&self.0)
    }
}

impl std::fmt::Display for AnswerToSelect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Negotiated transmission rates (escape sub-command 0x9E).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NegotiatedRates {
    /// Rate currently used reader -> card.
    pub reader_to_card: BitRate,
    /// Rate currently used card -> reader.
    pub card_to_reader: BitRate,
}
