//! Status presenter: the four display lines derived from the balance.
//!
//! ```text
//! BALANCE A:B
//! X X X - -
//! A: volume up
//! B: volume down
//! ```
//!
//! The ruler is fully determined by `a`, so the screen is generated rather
//! than looked up. Pairs off the `a + b = 5` line cannot be built as a
//! [`Balance`], but [`lines_for`] still answers for them with a blank screen.

use platform::config::STATUS_LINE_CHARS;
use platform::{StatusLine, StatusLines};

use crate::balance::{Balance, BALANCE_TOTAL};

/// First line.
pub const HEADER: &str = "BALANCE A:B";

/// Third line.
pub const INSTRUCTION_A: &str = "A: volume up";

/// Fourth line.
pub const INSTRUCTION_B: &str = "B: volume down";

const MARK: &str = "X ";
const BLANK: &str = "- ";

/// Screen for a valid balance.
pub fn present(balance: Balance) -> StatusLines {
    lines_for(balance.a(), balance.b())
}

/// Screen for a raw `(a, b)` pair; blank unless `a + b == 5`.
pub fn lines_for(a: u8, b: u8) -> StatusLines {
    let Some(balance) = Balance::try_new(a, b) else {
        return StatusLines::default();
    };
    [
        line(HEADER),
        ruler(balance.a()),
        line(INSTRUCTION_A),
        line(INSTRUCTION_B),
    ]
}

/// `a` marks followed by `5 - a` blanks, each cell two characters wide.
pub fn ruler(a: u8) -> StatusLine {
    let marks = a.min(BALANCE_TOTAL);
    let mut out = StatusLine::new();
    for cell in 0..BALANCE_TOTAL {
        push_truncating(&mut out, if cell < marks { MARK } else { BLANK });
    }
    out
}

fn line(text: &str) -> StatusLine {
    let mut out = StatusLine::new();
    push_truncating(&mut out, text);
    out
}

fn push_truncating(out: &mut StatusLine, text: &str) {
    for c in text.chars() {
        if out.len() >= STATUS_LINE_CHARS || out.push(c).is_err() {
            break;
        }
    }
}
