//! Built-in 5x7 capital-letter font, used when no font file can be loaded.

pub const CELL_W: u32 = 5;
pub const CELL_H: u32 = 7;

/// Row bitmaps, bit 4 is the leftmost column.
fn rows(c: char) -> Option<[u8; 7]> {
    let g = match c.to_ascii_uppercase() {
        'A' => [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'B' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110],
        'C' => [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110],
        'D' => [0b11100, 0b10010, 0b10001, 0b10001, 0b10001, 0b10010, 0b11100],
        'E' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111],
        'F' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000],
        'G' => [0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01111],
        'H' => [0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'I' => [0b01110, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        'J' => [0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100],
        'K' => [0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001],
        'L' => [0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111],
        'M' => [0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001],
        'N' => [0b10001, 0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001],
        'O' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'P' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000],
        'Q' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101],
        'R' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001],
        'S' => [0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110],
        'T' => [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100],
        'U' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'V' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100],
        'W' => [0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b10101, 0b01010],
        'X' => [0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001],
        'Y' => [0b10001, 0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100],
        'Z' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111],
        '0' => [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
        '1' => [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        '2' => [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111],
        '3' => [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110],
        '4' => [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
        '6' => [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
        '7' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
        '8' => [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '9' => [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
        '-' => [0, 0, 0, 0b11111, 0, 0, 0],
        '.' => [0, 0, 0, 0, 0, 0b01100, 0b01100],
        ':' => [0, 0b01100, 0b01100, 0, 0b01100, 0b01100, 0],
        '!' => [0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0, 0b00100],
        '?' => [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0, 0b00100],
        '/' => [0, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0],
        '\'' => [0b00100, 0b00100, 0b01000, 0, 0, 0, 0],
        ' ' => [0; 7],
        _ => return None,
    };
    Some(g)
}

/// Ink of one glyph in cell units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitmapGlyph {
    rows: [u8; 7],
    /// First and last inked column / row, `None` for blank glyphs.
    cols: Option<(u32, u32)>,
    lines: Option<(u32, u32)>,
}

impl BitmapGlyph {
    /// Glyph for `c`; unknown characters render as `?`.
    pub fn lookup(c: char) -> Self {
        let rows = rows(c).or_else(|| rows('?')).unwrap_or([0; 7]);
        let mask = rows.iter().fold(0u8, |acc, r| acc | r);
        let cols = (mask != 0).then(|| {
            let first = (0..CELL_W).find(|&x| mask & (1 << (CELL_W - 1 - x)) != 0).unwrap_or(0);
            let last = (0..CELL_W).rev().find(|&x| mask & (1 << (CELL_W - 1 - x)) != 0).unwrap_or(0);
            (first, last)
        });
        let inked: Vec<u32> = (0..CELL_H).filter(|&y| rows[y as usize] != 0).collect();
        let lines = inked.first().zip(inked.last()).map(|(a, b)| (*a, *b));
        Self { rows, cols, lines }
    }

    /// Ink width and height in cells. Blank glyphs advance by three cells.
    pub fn ink_size(&self) -> (u32, u32) {
        match (self.cols, self.lines) {
            (Some((c0, c1)), Some((l0, l1))) => (c1 - c0 + 1, l1 - l0 + 1),
            _ => (3, 0),
        }
    }

    /// Inked cells relative to the ink box's top-left corner.
    pub fn cells(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        let (c0, l0) = (self.cols.map_or(0, |c| c.0), self.lines.map_or(0, |l| l.0));
        (0..CELL_H).flat_map(move |y| {
            (0..CELL_W)
                .filter(move |&x| self.rows[y as usize] & (1 << (CELL_W - 1 - x)) != 0)
                .map(move |x| (x - c0, y - l0))
        })
    }
}

/// Pixel size of one cell for a nominal font size.
pub fn cell_px(size_px: f32) -> u32 {
    ((size_px / 8.0).round() as u32).max(1)
}
