//! Terminal rendering of notices and the busy indicator

use contrato_client::{LoadingIndicator, Notice, NoticeKind, NoticeSink};

const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const YELLOW: &str = "\x1b[33m";
const BLUE: &str = "\x1b[34m";
const RESET: &str = "\x1b[0m";

/// Colored stderr lines; the terminal's version of a toast
pub struct TerminalSink;

impl NoticeSink for TerminalSink {
    fn notify(&self, notice: &Notice) {
        let (color, tag) = match notice.kind {
            NoticeKind::Sucesso => (GREEN, "ok"),
            NoticeKind::Erro => (RED, "erro"),
            NoticeKind::Aviso => (YELLOW, "aviso"),
            NoticeKind::Info => (BLUE, "info"),
        };
        eprintln!("{color}[{tag}]{RESET} {}", notice.text);
    }
}

/// Inline "carregando..." line, erased when the call finishes
pub struct TerminalLoading;

impl LoadingIndicator for TerminalLoading {
    fn show(&self) {
        eprint!("Carregando...\r");
    }

    fn hide(&self) {
        // clear the line and return the cursor
        eprint!("\x1b[2K\r");
    }
}
