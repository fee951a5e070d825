use crate::consts::N_CELLS;

/// Row index from 0..=8, topmost row is 0.
#[inline(always)]
pub(crate) fn row(cell: u8) -> u8 {
    cell / 9
}

/// Column index from 0..=8, leftmost col is 0.
#[inline(always)]
pub(crate) fn col(cell: u8) -> u8 {
    cell % 9
}

/// Block index from 0..=8, numbering from left to right, top to bottom.
#[inline(always)]
pub(crate) fn block(cell: u8) -> u8 {
    BLOCK[cell as usize]
}

/// Index of the top left cell of the block containing `cell`.
#[inline(always)]
pub(crate) fn block_corner(cell: u8) -> u8 {
    row(cell) / 3 * 27 + col(cell) / 3 * 3
}

#[rustfmt::skip]
static BLOCK: [u8; N_CELLS] = [
    0, 0, 0, 1, 1, 1, 2, 2, 2,
    0, 0, 0, 1, 1, 1, 2, 2, 2,
    0, 0, 0, 1, 1, 1, 2, 2, 2,
    3, 3, 3, 4, 4, 4, 5, 5, 5,
    3, 3, 3, 4, 4, 4, 5, 5, 5,
    3, 3, 3, 4, 4, 4, 5, 5, 5,
    6, 6, 6, 7, 7, 7, 8, 8, 8,
    6, 6, 6, 7, 7, 7, 8, 8, 8,
    6, 6, 6, 7, 7, 7, 8, 8, 8,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_coordinates() {
        assert_eq!(row(0), 0);
        assert_eq!(col(0), 0);
        assert_eq!(row(80), 8);
        assert_eq!(col(80), 8);
        assert_eq!(row(40), 4);
        assert_eq!(col(40), 4);
    }

    #[test]
    fn block_of_cell() {
        // block(cell) must agree with the (row / 3, col / 3) partitioning
        for cell in 0..81 {
            assert_eq!(block(cell), row(cell) / 3 * 3 + col(cell) / 3);
        }
    }

    #[test]
    fn corner_of_block() {
        assert_eq!(block_corner(0), 0);
        assert_eq!(block_corner(40), 30);
        assert_eq!(block_corner(80), 60);
    }
}
