//! Welcome banner and prompt styling.

use crossterm::style::{Color, Stylize};
use tracing::{instrument, warn};

/// Heading of the welcome banner.
pub const WELCOME: [&str; 2] = ["Welcome to TicTacGo!", "Our rules are simple:"];

/// The rules, one line each.
pub const RULES: [&str; 3] = [
    "- Each square on the board is numbered from 1 to 9.",
    "- When it is your turn, you enter the number of the square you want to play at.",
    "- That's it! Those are all the rules. You expected more? Silly! Haha. Have fun playing!",
];

/// Width used when the terminal size cannot be read.
pub const FALLBACK_WIDTH: u16 = 80;

const ACCENT: Color = Color::Rgb {
    r: 0x7D,
    g: 0x56,
    b: 0xF4,
};

const LABEL: Color = Color::Rgb {
    r: 0xFA,
    g: 0xFA,
    b: 0xFA,
};

const EDGE: &str = "._.:*:";

/// Probes the terminal for its width in columns.
#[instrument]
pub fn terminal_width() -> u16 {
    match crossterm::terminal::size() {
        Ok((width, _)) => width,
        Err(e) => {
            warn!(error = %e, fallback = FALLBACK_WIDTH, "Couldn't get terminal size");
            FALLBACK_WIDTH
        }
    }
}

/// Renders the welcome banner centered in `width` columns.
///
/// The frame widens past `width` if a line would not fit.
#[instrument]
pub fn render_banner(width: u16, styled: bool) -> String {
    let lines: Vec<&str> = WELCOME.iter().chain(RULES.iter()).copied().collect();
    let longest = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    let inner = usize::from(width).saturating_sub(6).max(longest);

    let edge: String = EDGE.chars().cycle().take(inner + 4).collect();
    let mut rows = vec![format!("*{}*", edge)];
    rows.extend(lines.iter().map(|line| format!("|* {:^inner$} *|", line)));
    rows.push(format!("*{}*", edge));

    if styled {
        rows.into_iter()
            .map(|row| row.bold().on(ACCENT).to_string())
            .collect::<Vec<_>>()
            .join("\n")
    } else {
        rows.join("\n")
    }
}

/// Styles a prompt label the way the banner is styled.
pub fn style_label(label: &str, styled: bool) -> String {
    if styled {
        label.bold().with(LABEL).on(ACCENT).to_string()
    } else {
        label.to_string()
    }
}
