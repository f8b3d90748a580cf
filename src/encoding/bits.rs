/*
    General purpose bit regrouping.

    Converts a sequence of `from_bits` wide values into a sequence of
    `to_bits` wide values, most significant bit first. Used to squash
    bytes into the 5 bit groups of Bech32 and to expand them back.
*/

use thiserror::Error;

/// Widest group either side of a conversion may use.
pub const MAX_WIDTH: u32 = 8;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertBitsErr {
    #[error("cannot convert from {from} bit to {to} bit groups, widths must be between 1 and 8")]
    InvalidWidth { from: u32, to: u32 },

    #[error("insufficient padding: {0} bits left over, a whole input group was not consumed")]
    ExcessPadding(u32),

    #[error("non-zero trailing bits left over after conversion")]
    NonZeroPadding
}

/**
    Regroups `data` from `from_bits` wide values to `to_bits` wide values.

    With `pad` set, leftover bits are shifted up and zero filled into one final group.
    Without `pad`, the conversion fails if a whole input group or any set bits are left over
    instead of silently dropping them.

    Input values are assumed to fit in `from_bits` and are not checked.
*/
pub fn convert_bits(data: &[u8], from_bits: u32, to_bits: u32, pad: bool) -> Result<Vec<u8>, ConvertBitsErr> {
    if from_bits == 0 || to_bits == 0 || from_bits > MAX_WIDTH || to_bits > MAX_WIDTH {
        return Err(ConvertBitsErr::InvalidWidth { from: from_bits, to: to_bits })
    }

    //The accumulator never needs more than from_bits + to_bits - 1 live bits.
    //Mask it each step so it can never overflow regardless of input length.
    let mut acc: u64 = 0;
    let mut bits: u32 = 0;
    let maxv: u64 = (1 << to_bits) - 1;
    let max_acc: u64 = (1 << (from_bits + to_bits - 1)) - 1;
    let mut result: Vec<u8> = Vec::with_capacity(data.len() * from_bits as usize / to_bits as usize + 1);

    for value in data {
        acc = ((acc << from_bits) | *value as u64) & max_acc;
        bits += from_bits;
        while bits >= to_bits {
            bits -= to_bits;
            result.push(((acc >> bits) & maxv) as u8);
        }
    }

    if pad {
        if bits > 0 {
            result.push(((acc << (to_bits - bits)) & maxv) as u8);
        }
    } else if bits >= from_bits {
        return Err(ConvertBitsErr::ExcessPadding(bits))
    } else if (acc << (to_bits - bits)) & maxv != 0 {
        return Err(ConvertBitsErr::NonZeroPadding)
    }

    Ok(result)
}
