// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The byte-stuffing primitives behind composite sort keys.
//!
//! One invariant drives everything here: inside an encoded key, the byte pair
//! `00 00` can only ever mean "field boundary", never data. A literal `0x00`
//! inside a value is escaped to `00 FF`, so a value that is a strict prefix of
//! another still compares first (the separator byte is below every escaped
//! continuation).
//!
//! Descending fields reuse the same construction through a bytewise
//! complement: every emitted byte is `0xFF - b`, which turns `00 FF` escapes
//! into `FF 00` and the `00 00` separator into `FF FF`. Complementing flips
//! the comparison for exactly that field and nothing else.

/// Separator appended after a non-final ascending segment.
pub(crate) const ASCENDING_SEPARATOR: [u8; 2] = [0x00, 0x00];

/// Terminator appended after every descending segment.
///
/// Unlike the ascending separator this is emitted even for the final
/// criterion: under complemented comparison an absent value has to sort
/// *after* every present one, and the bare key would otherwise compare first.
pub(crate) const DESCENDING_TERMINATOR: [u8; 2] = [0xFF, 0xFF];

/// Append `value` with every `0x00` byte escaped as `00 FF`.
pub(crate) fn push_escaped(out: &mut Vec<u8>, value: &[u8]) {
    for &byte in value {
        out.push(byte);
        if byte == 0x00 {
            out.push(0xFF);
        }
    }
}

/// Append `value` complemented: each byte becomes `0xFF - b`, and a literal
/// `0x00` becomes the pair `FF 00` (the complement of the `00 FF` escape).
pub(crate) fn push_complemented(out: &mut Vec<u8>, value: &[u8]) {
    for &byte in value {
        out.push(0xFF - byte);
        if byte == 0x00 {
            out.push(0x00);
        }
    }
}
