//! Text projection of the page for a terminal.
//!
//! The frame starts with a fixed block of header rows (background, time,
//! date, location). Timer updates rewrite only those rows in place, so a
//! half-typed line at the prompt survives the clock tick.

use std::fmt::Write as _;
use std::io::Write;
use std::ops::ControlFlow;

use startpage_core::{EventHandler, PageEvent};

use crate::models::Page;

/// Clear screen, cursor home
const CLEAR: &str = "\x1b[2J\x1b[H";
const SAVE_CURSOR: &str = "\x1b7";
const RESTORE_CURSOR: &str = "\x1b8";
const CLEAR_LINE_END: &str = "\x1b[K";

const HELP: &str = ":done N  :undo N  :toggle N  :rm N  :clear  :q  ::text";

pub const HEADER_ROWS: usize = 4;

/// Header rows, independent of the task list
pub fn header(page: &Page) -> [String; HEADER_ROWS] {
    let background = page
        .background
        .as_ref()
        .map(|path| format!("[{}]", path))
        .unwrap_or_default();

    let location = if page.temperature.is_empty() {
        page.location.clone()
    } else {
        format!("{}  {}", page.location, page.temperature)
    };

    [background, page.time.clone(), page.date.clone(), location]
}

/// Render the whole page as plain text, ending at the input prompt.
pub fn frame(page: &Page) -> String {
    let mut out = String::new();

    for line in header(page) {
        let _ = writeln!(out, "{}", line);
    }
    out.push('\n');

    for (i, task) in page.tasks.tasks().iter().enumerate() {
        let mark = if task.completed { 'x' } else { ' ' };
        let _ = writeln!(out, "{:>2}. [{}] {}", i + 1, mark, task.text);
    }
    if !page.tasks.is_empty() {
        out.push('\n');
    }

    if let Some(alert) = &page.alert {
        let _ = writeln!(out, "! {}", alert);
    }
    let _ = writeln!(out, "{}", HELP);
    out.push_str("> ");
    out
}

/// Rewrite the header rows in place and put the cursor back where it was.
pub fn header_update(page: &Page) -> String {
    let mut out = String::from(SAVE_CURSOR);
    for (row, line) in header(page).iter().enumerate() {
        let _ = write!(out, "\x1b[{};1H{}{}", row + 1, line, CLEAR_LINE_END);
    }
    out.push_str(RESTORE_CURSOR);
    out
}

/// Applies events to a page and draws it to `out` after each one.
pub struct Screen<W> {
    page: Page,
    out: W,
    drawn: bool,
}

impl<W: Write> Screen<W> {
    pub fn new(page: Page, out: W) -> Self {
        Self {
            page,
            out,
            drawn: false,
        }
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Task changes follow Enter, when the prompt is empty, so they get a
    /// full redraw. Everything else only touches the header.
    fn draw(&mut self, full: bool) -> std::io::Result<()> {
        if full || !self.drawn {
            write!(self.out, "{}{}", CLEAR, frame(&self.page))?;
            self.drawn = true;
        } else {
            write!(self.out, "{}", header_update(&self.page))?;
        }
        self.out.flush()
    }
}

impl<W: Write> EventHandler for Screen<W> {
    fn handle(&mut self, event: PageEvent) -> ControlFlow<()> {
        if event == PageEvent::Quit {
            return ControlFlow::Break(());
        }

        let full = matches!(event, PageEvent::Task(_));
        self.page.apply(event);
        if let Err(e) = self.draw(full) {
            tracing::error!("Failed to draw page: {}", e);
            return ControlFlow::Break(());
        }
        ControlFlow::Continue(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use startpage_core::{Region, TaskCommand};

    fn page_with_tasks() -> Page {
        let mut page = Page::new("Краснодар");
        for text in ["Buy milk", "Call mom"] {
            page.apply(PageEvent::Task(TaskCommand::Add(text.to_string())));
        }
        page.apply(PageEvent::Task(TaskCommand::Toggle(1)));
        page
    }

    fn time(text: &str) -> PageEvent {
        PageEvent::SetText {
            region: Region::Time,
            text: text.to_string(),
        }
    }

    #[test]
    fn test_frame_without_weather() {
        let text = frame(&Page::new("Краснодар"));
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "");
        assert_eq!(lines[3], "Краснодар");
        assert!(text.ends_with("> "));
        assert!(!text.contains('!'));
    }

    #[test]
    fn test_frame_lists_tasks_in_order() {
        let mut page = page_with_tasks();
        page.apply(PageEvent::SetText {
            region: Region::Temperature,
            text: "🌙12°C".to_string(),
        });
        page.apply(PageEvent::SetBackground("img/04.jpg".to_string()));

        let text = frame(&page);
        assert!(text.starts_with("[img/04.jpg]\n"));
        assert!(text.contains("Краснодар  🌙12°C\n"));

        let first = text.find(" 1. [ ] Buy milk").unwrap();
        let second = text.find(" 2. [x] Call mom").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_frame_shows_alert() {
        let mut page = Page::new("x");
        page.apply(PageEvent::Task(TaskCommand::Add(String::new())));
        assert!(frame(&page).contains("! Введите текст задачи!\n"));
    }

    #[test]
    fn test_header_rows_fixed_with_or_without_background() {
        let mut page = Page::new("x");
        let before = frame(&page).lines().count();
        page.apply(PageEvent::SetBackground("img/01.jpg".to_string()));
        assert_eq!(frame(&page).lines().count(), before);
    }

    #[test]
    fn test_header_update_keeps_cursor_and_prompt() {
        let mut page = page_with_tasks();
        page.apply(time("09:04:07"));

        let update = header_update(&page);
        assert!(update.starts_with(SAVE_CURSOR));
        assert!(update.ends_with(RESTORE_CURSOR));
        assert!(update.contains("\x1b[2;1H09:04:07\x1b[K"));
        assert!(update.contains("\x1b[4;1HКраснодар\x1b[K"));
        assert!(!update.contains(CLEAR));
        assert!(!update.contains("> "));
        assert!(!update.contains("Buy milk"));
    }

    #[test]
    fn test_screen_redraws_fully_only_for_tasks() {
        let mut screen = Screen::new(Page::new("x"), Vec::new());

        // First event draws everything; later ticks only the header
        assert_eq!(screen.handle(time("09:04:07")), ControlFlow::Continue(()));
        assert_eq!(screen.handle(time("09:04:08")), ControlFlow::Continue(()));
        screen.handle(PageEvent::Task(TaskCommand::Add("a".to_string())));
        screen.handle(time("09:04:09"));
        assert_eq!(screen.handle(PageEvent::Quit), ControlFlow::Break(()));
        assert_eq!(screen.page().time, "09:04:09");

        let out = String::from_utf8(screen.into_inner()).unwrap();
        assert_eq!(out.matches(CLEAR).count(), 2);
        assert_eq!(out.matches(SAVE_CURSOR).count(), 2);
        assert_eq!(out.matches("> ").count(), 2);
        assert!(out.ends_with(&format!("\x1b[2;1H09:04:09\x1b[K\x1b[3;1H\x1b[K\x1b[4;1Hx\x1b[K{}", RESTORE_CURSOR)));
    }
}
