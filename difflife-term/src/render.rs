use crossterm::{
    cursor::MoveToNextLine,
    queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
};
use difflife::{Grid, NeighborCounts, World};
use std::io::{self, Write};

const BORDER: Color = Color::Rgb { r: 127, g: 0, b: 255 };
const ALIVE: Color = Color::Rgb { r: 255, g: 255, b: 255 };
const DEAD: Color = Color::Rgb { r: 0, g: 0, b: 0 };
const DYING: Color = Color::Rgb { r: 255, g: 0, b: 0 };
const BORN: Color = Color::Rgb { r: 0, g: 255, b: 0 };
const STEADY: Color = Color::Rgb { r: 127, g: 127, b: 127 };

/// Columns taken by the border on both sides together.
pub const BORDER_COLUMNS: usize = 4;
/// Rows taken by the border above and below.
pub const BORDER_ROWS: usize = 2;

fn cell_background(alive: bool) -> Color {
    if alive {
        ALIVE
    } else {
        DEAD
    }
}

/// Character and colour showing a live-neighbor count in debug view.
pub fn count_style(alive: bool, count: u8) -> (char, Color) {
    let character = match count {
        0 => ' ',
        1..=8 => (b'0' + count) as char,
        _ => 'E',
    };
    let colour = match (alive, count) {
        (true, 2) | (true, 3) => STEADY,
        (true, _) => DYING,
        (false, 3) => BORN,
        (false, _) => STEADY,
    };
    (character, colour)
}

fn border_row<W: Write>(out: &mut W, width: usize) -> io::Result<()> {
    queue!(
        out,
        SetBackgroundColor(BORDER),
        Print(" ".repeat(width * 2 + BORDER_COLUMNS)),
        ResetColor,
        MoveToNextLine(1)
    )
}

fn framed_rows<W, F>(out: &mut W, width: usize, height: usize, mut cell: F) -> io::Result<()>
where
    W: Write,
    F: FnMut(&mut W, usize, usize) -> io::Result<()>,
{
    border_row(out, width)?;
    for y in 0..height {
        queue!(out, SetBackgroundColor(BORDER), Print("  "))?;
        for x in 0..width {
            cell(out, x, y)?;
        }
        queue!(
            out,
            SetBackgroundColor(BORDER),
            Print("  "),
            ResetColor,
            MoveToNextLine(1)
        )?;
    }
    border_row(out, width)
}

/// Queues one frame showing each cell as a two-column block.
pub fn draw_grid<W: Write>(out: &mut W, grid: &Grid) -> io::Result<()> {
    framed_rows(out, grid.width(), grid.height(), |out, x, y| {
        queue!(
            out,
            SetBackgroundColor(cell_background(grid.get(x, y))),
            Print("  ")
        )
    })
}

/// Like [`draw_grid`], with each cell's live-neighbor count written over it.
///
/// Red counts mark live cells about to die, green counts dead cells about to
/// be born.
pub fn draw_debug<W: Write, C: NeighborCounts>(out: &mut W, world: &World<C>) -> io::Result<()> {
    framed_rows(out, world.width(), world.height(), |out, x, y| {
        let alive = world.get_cell(x, y);
        let (character, colour) = count_style(alive, world.live_neighbors(x, y));
        queue!(
            out,
            SetBackgroundColor(cell_background(alive)),
            SetForegroundColor(colour),
            Print(' '),
            Print(character)
        )
    })
}
