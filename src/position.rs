//! One-byte encoding of a grid position for the turn exchange.
//!
//! Row and column are sent one-based so that a zero byte can mean "no
//! message": the column takes the low [`COL_BITS`] bits and the row the
//! rest.

use crate::common::PositionError;
use crate::config::COL_BITS;

const COL_FIELD: u8 = (1 << COL_BITS) - 1;
const ROW_FIELD: u8 = u8::MAX >> COL_BITS;

/// Packs (`row`, `col`) of a `W`×`H` grid into one byte.
pub fn encode_position<const W: usize, const H: usize>(
    row: usize,
    col: usize,
) -> Result<u8, PositionError> {
    if row >= H || col >= W || row >= ROW_FIELD as usize || col >= COL_FIELD as usize {
        return Err(PositionError::Unencodable { row, col });
    }
    Ok((((row + 1) as u8) << COL_BITS) | (col + 1) as u8)
}

/// Unpacks a byte produced by [`encode_position`] into (`row`, `col`).
pub fn decode_position<const W: usize, const H: usize>(
    byte: u8,
) -> Result<(usize, usize), PositionError> {
    if byte == 0 {
        return Err(PositionError::Empty);
    }
    let row = byte >> COL_BITS;
    let col = byte & COL_FIELD;
    if row == 0 || col == 0 || row as usize > H || col as usize > W {
        return Err(PositionError::OutOfRange { row, col });
    }
    Ok((row as usize - 1, col as usize - 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_positions() {
        assert_eq!(encode_position::<5, 7>(0, 0), Ok(0x11));
        assert_eq!(encode_position::<5, 7>(6, 4), Ok(0x75));
        assert_eq!(decode_position::<5, 7>(0x75), Ok((6, 4)));
    }

    #[test]
    fn rejects_off_grid_bytes() {
        assert_eq!(decode_position::<5, 7>(0), Err(PositionError::Empty));
        assert_eq!(
            decode_position::<5, 7>(0x16),
            Err(PositionError::OutOfRange { row: 1, col: 6 })
        );
        assert_eq!(
            decode_position::<5, 7>(0x01),
            Err(PositionError::OutOfRange { row: 0, col: 1 })
        );
        assert!(encode_position::<5, 7>(7, 0).is_err());
    }
}
