use termion::{clear, color, cursor};
use termion::color::AnsiValue;

use super::printer::{Index, Printer};

use std::io::{stdout, Write};

/** Printer writing straight to the raw-mode terminal.
 *
 * Output is buffered by stdout and only reaches the screen on `update`.
 */
pub struct StdioPrinter {
    cursor_x: Index,
    cursor_y: Index,
}

impl StdioPrinter {
    pub fn new() -> Self {
        StdioPrinter{cursor_x: 0, cursor_y: 0}
    }

    // Where the terminal cursor ends up after the previous print.
    fn cursor_at(&self, x: Index, y: Index) -> bool {
        self.cursor_x == x && self.cursor_y == y
    }
}

impl Printer for StdioPrinter {
    fn set_color(&mut self, fg_color: AnsiValue, bg_color: AnsiValue) {
        print!("{}{}", color::Fg(fg_color), color::Bg(bg_color));
    }

    fn print(&mut self, x: Index, y: Index, text: &str) {
        if self.cursor_at(x, y) {
            print!("{}", text);
        } else {
            print!("{}{}", cursor::Goto(x as u16, y as u16), text);
        }
        // Width in characters, box drawing glyphs are multi-byte
        self.cursor_x = x + text.chars().count();
        self.cursor_y = y;
    }

    fn clear(&mut self) {
        print!("{}{}", color::Bg(color::Reset), clear::All);
        self.cursor_x = 0;
        self.cursor_y = 0;
    }

    fn update(&mut self) {
        stdout().flush().ok();
    }
}
