//! Bech32 rendering of metadata addresses.

use crate::domain::AddressFormatError;
use bech32::{FromBase32, ToBase32, Variant};

/// Encode `bytes` under human readable part `hrp`.
pub fn encode(hrp: &str, bytes: &[u8]) -> Result<String, AddressFormatError> {
    bech32::encode(hrp, bytes.to_base32(), Variant::Bech32)
        .map_err(|e| AddressFormatError::InvalidBech32(e.to_string()))
}

/// Decode a bech32 string into its human readable part and payload bytes.
pub fn decode(s: &str) -> Result<(String, Vec<u8>), AddressFormatError> {
    let (hrp, data, variant) =
        bech32::decode(s).map_err(|e| AddressFormatError::InvalidBech32(e.to_string()))?;
    if variant != Variant::Bech32 {
        return Err(AddressFormatError::InvalidBech32(
            "bech32m checksum not accepted".to_string(),
        ));
    }
    let bytes = Vec::<u8>::from_base32(&data)
        .map_err(|e| AddressFormatError::InvalidBech32(e.to_string()))?;
    Ok((hrp, bytes))
}
