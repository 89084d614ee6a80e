//! A 3x5 bitmap face for the decimal digits.

pub const GLYPH_COLUMNS: usize = 3;
pub const GLYPH_ROWS: usize = 5;

// One byte per row; bit 2 is the leftmost column.
const DIGITS: [[u8; GLYPH_ROWS]; 10] = [
    [0b111, 0b101, 0b101, 0b101, 0b111],
    [0b010, 0b110, 0b010, 0b010, 0b111],
    [0b111, 0b001, 0b111, 0b100, 0b111],
    [0b111, 0b001, 0b111, 0b001, 0b111],
    [0b101, 0b101, 0b111, 0b001, 0b001],
    [0b111, 0b100, 0b111, 0b001, 0b111],
    [0b111, 0b100, 0b111, 0b101, 0b111],
    [0b111, 0b001, 0b010, 0b010, 0b010],
    [0b111, 0b101, 0b111, 0b101, 0b111],
    [0b111, 0b101, 0b111, 0b001, 0b111],
];

/// Lit cells of `digit` as `(column, row)` pairs, or `None` if `digit > 9`.
pub fn digit_cells(digit: u8) -> Option<impl Iterator<Item = (usize, usize)>> {
    let rows = DIGITS.get(usize::from(digit))?;
    Some(rows.iter().enumerate().flat_map(|(row, bits)| {
        (0..GLYPH_COLUMNS)
            .filter(move |col| bits & (0b100 >> col) != 0)
            .map(move |col| (col, row))
    }))
}
