use std::fmt;
use std::ops::BitOr;
use crate::bundle::structs::key_usage::KeyUsage;

impl KeyUsage {
    pub const DIGITAL_SIGNATURE: KeyUsage = KeyUsage { bits: 1 << 0 };
    pub const CONTENT_COMMITMENT: KeyUsage = KeyUsage { bits: 1 << 1 };
    pub const KEY_ENCIPHERMENT: KeyUsage = KeyUsage { bits: 1 << 2 };
    pub const DATA_ENCIPHERMENT: KeyUsage = KeyUsage { bits: 1 << 3 };
    pub const KEY_AGREEMENT: KeyUsage = KeyUsage { bits: 1 << 4 };
    pub const CERT_SIGN: KeyUsage = KeyUsage { bits: 1 << 5 };
    pub const CRL_SIGN: KeyUsage = KeyUsage { bits: 1 << 6 };
    pub const ENCIPHER_ONLY: KeyUsage = KeyUsage { bits: 1 << 7 };
    pub const DECIPHER_ONLY: KeyUsage = KeyUsage { bits: 1 << 8 };

    /// Usages a root CA is expected to carry; anything else is suspicious.
    pub const EXPECTED_CA: KeyUsage = KeyUsage {
        bits: Self::CERT_SIGN.bits | Self::CRL_SIGN.bits | Self::DIGITAL_SIGNATURE.bits,
    };

    pub const fn empty() -> KeyUsage {
        KeyUsage { bits: 0 }
    }

    pub const fn from_bits(bits: u16) -> KeyUsage {
        KeyUsage { bits }
    }

    pub const fn bits(&self) -> u16 {
        self.bits
    }

    pub const fn is_empty(&self) -> bool {
        self.bits == 0
    }

    pub const fn contains(&self, other: KeyUsage) -> bool {
        self.bits & other.bits == other.bits
    }

    /// Bits set in `self` but not in `other`.
    pub const fn difference(&self, other: KeyUsage) -> KeyUsage {
        KeyUsage { bits: self.bits & !other.bits }
    }
}

impl BitOr for KeyUsage {
    type Output = KeyUsage;

    fn bitor(self, rhs: KeyUsage) -> KeyUsage {
        KeyUsage { bits: self.bits | rhs.bits }
    }
}

impl fmt::Display for KeyUsage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.bits)
    }
}
