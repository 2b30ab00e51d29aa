use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;
use tempfile::TempDir;

use crate::model::config::StoreConfig;
use crate::store::StoreClient;
use crate::tui::app::App;

pub const TERM_W: u16 = 80;
pub const TERM_H: u16 = 24;

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

/// An App over a fresh temp store, seeded with the given titles, with the
/// first snapshot already applied. Keep the TempDir alive for the test.
pub fn temp_app(titles: &[&str]) -> (TempDir, App) {
    let tmp = TempDir::new().unwrap();
    let client = StoreClient::init(tmp.path(), "todo").unwrap();
    for title in titles {
        client.create(title, None, None).unwrap();
    }
    let mut app = App::new(client, StoreConfig::default(), None);
    app.pump();
    (tmp, app)
}

/// An App that has not yet received its first snapshot.
pub fn pending_app() -> (TempDir, App) {
    let tmp = TempDir::new().unwrap();
    let client = StoreClient::init(tmp.path(), "todo").unwrap();
    let app = App::new(client, StoreConfig::default(), None);
    (tmp, app)
}
