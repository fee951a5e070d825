pub(crate) const N_CELLS: usize = 81;
pub(crate) const N_ROWS: u8 = 9;
pub(crate) const N_COLS: u8 = 9;
