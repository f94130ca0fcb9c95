use serde::Serialize;

/// Key usage bits, numbered the way the X.509 `KeyUsage` BIT STRING numbers
/// them (bit 0 is `digitalSignature`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct KeyUsage {
    pub(crate) bits: u16,
}
