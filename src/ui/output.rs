//! Styled terminal output helpers
//!
//! Colors are disabled automatically when stdout is not a terminal, so piped
//! output stays plain.

use std::sync::OnceLock;

use owo_colors::{OwoColorize, Style};

#[derive(Debug, Clone)]
struct Palette {
    header: Style,
    success: Style,
    error: Style,
    dim: Style,
}

static PALETTE: OnceLock<Palette> = OnceLock::new();

fn palette() -> &'static Palette {
    PALETTE.get_or_init(|| {
        if console::Term::stdout().is_term() {
            Palette {
                header: Style::new().cyan().bold(),
                success: Style::new().green().bold(),
                error: Style::new().red().bold(),
                dim: Style::new().white().dimmed(),
            }
        } else {
            Palette {
                header: Style::new(),
                success: Style::new(),
                error: Style::new(),
                dim: Style::new(),
            }
        }
    })
}

pub fn header(text: &str) {
    println!("{}", text.style(palette().header.clone()));
}

pub fn success(text: &str) {
    println!("✅ {}", text.style(palette().success.clone()));
}

/// Dialog-equivalent error report: the action is aborted, the session lives.
pub fn error(text: &str) {
    eprintln!("❌ {}", text.style(palette().error.clone()));
}

pub fn info(label: &str, value: &str) {
    println!("{}: {}", label.style(palette().dim.clone()), value);
}

pub fn dim(text: &str) -> String {
    text.style(palette().dim.clone()).to_string()
}
