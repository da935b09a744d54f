use crate::terminal::{KeyCode, KeyEvent, TerminalEvent};
use crate::ui::span::Span;
use crate::ui::style::Color;
use crossterm::event::{Event, KeyEventKind, KeyModifiers, poll, read};
use crossterm::style::{Attribute, ResetColor, SetAttribute, SetForegroundColor};
use crossterm::{cursor, execute, queue, terminal};
use std::io::{self, Stdout, Write};
use std::time::Duration;

/// Inline terminal surface: the form is redrawn in place below the
/// cursor position captured at startup.
pub struct Terminal {
    stdout: Stdout,
    origin_row: u16,
    drawn_rows: u16,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        let (_, origin_row) = cursor::position()?;
        Ok(Self {
            stdout: io::stdout(),
            origin_row,
            drawn_rows: 0,
        })
    }

    pub fn enter_raw_mode(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(self.stdout, terminal::DisableLineWrap, cursor::Hide)
    }

    pub fn exit_raw_mode(&mut self) -> io::Result<()> {
        execute!(self.stdout, cursor::Show, terminal::EnableLineWrap)?;
        terminal::disable_raw_mode()
    }

    pub fn poll(&self, timeout: Duration) -> io::Result<bool> {
        poll(timeout)
    }

    pub fn read_event(&mut self) -> io::Result<TerminalEvent> {
        loop {
            match read()? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    return Ok(TerminalEvent::Key(map_key_event(key)));
                }
                Event::Resize(..) => return Ok(TerminalEvent::Resize),
                _ => continue,
            }
        }
    }

    pub fn draw(&mut self, lines: &[Vec<Span>]) -> io::Result<()> {
        let (_, height) = terminal::size()?;
        let needed = u16::try_from(lines.len()).unwrap_or(u16::MAX);
        let overflow = self.origin_row.saturating_add(needed).saturating_sub(height);
        if overflow > 0 {
            queue!(self.stdout, terminal::ScrollUp(overflow))?;
            self.origin_row = self.origin_row.saturating_sub(overflow);
        }

        queue!(
            self.stdout,
            cursor::MoveTo(0, self.origin_row),
            terminal::Clear(terminal::ClearType::FromCursorDown)
        )?;
        for (row, line) in lines.iter().enumerate() {
            let row = u16::try_from(row).unwrap_or(u16::MAX);
            queue!(self.stdout, cursor::MoveTo(0, self.origin_row.saturating_add(row)))?;
            self.render_line(line)?;
        }
        self.drawn_rows = needed;
        self.stdout.flush()
    }

    /// Leave the cursor on the first row after the last drawn frame.
    pub fn finish(&mut self) -> io::Result<()> {
        let row = self.origin_row.saturating_add(self.drawn_rows);
        execute!(self.stdout, cursor::MoveTo(0, row))?;
        writeln!(self.stdout)
    }

    fn render_line(&mut self, line: &[Span]) -> io::Result<()> {
        for span in line {
            let style = span.style;
            if let Some(color) = style.color {
                queue!(self.stdout, SetForegroundColor(map_color(color)))?;
            }
            if style.bold {
                queue!(self.stdout, SetAttribute(Attribute::Bold))?;
            }
            if style.underline {
                queue!(self.stdout, SetAttribute(Attribute::Underlined))?;
            }

            write!(self.stdout, "{}", span.text)?;

            if !style.is_plain() {
                queue!(self.stdout, SetAttribute(Attribute::Reset), ResetColor)?;
            }
        }
        Ok(())
    }
}

fn map_color(color: Color) -> crossterm::style::Color {
    match color {
        Color::DarkGrey => crossterm::style::Color::DarkGrey,
        Color::Red => crossterm::style::Color::Red,
        Color::Green => crossterm::style::Color::Green,
        Color::Cyan => crossterm::style::Color::Cyan,
    }
}

fn map_key_event(event: crossterm::event::KeyEvent) -> KeyEvent {
    KeyEvent {
        code: map_key_code(event.code),
        ctrl: event.modifiers.contains(KeyModifiers::CONTROL),
    }
}

fn map_key_code(code: crossterm::event::KeyCode) -> KeyCode {
    match code {
        crossterm::event::KeyCode::Char(ch) => KeyCode::Char(ch),
        crossterm::event::KeyCode::Backspace => KeyCode::Backspace,
        crossterm::event::KeyCode::Enter => KeyCode::Enter,
        crossterm::event::KeyCode::Esc => KeyCode::Esc,
        crossterm::event::KeyCode::Tab => KeyCode::Tab,
        crossterm::event::KeyCode::BackTab => KeyCode::BackTab,
        _ => KeyCode::Other,
    }
}
