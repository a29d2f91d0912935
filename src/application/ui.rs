use std::io;

use anyhow::Result;
use crossterm::cursor;
use crossterm::event::DisableMouseCapture;
use crossterm::event::EnableMouseCapture;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use ratatui::backend::CrosstermBackend;
use ratatui::prelude::*;
use ratatui::widgets::Scrollbar;
use ratatui::widgets::ScrollbarOrientation;
use ratatui::Terminal;
use tokio::sync::mpsc;

use crate::domain::models::Action;
use crate::domain::models::Event;
use crate::domain::models::Loading;
use crate::domain::models::TextArea;
use crate::domain::models::TranscriptSnapshot;
use crate::domain::services::events::EventsService;
use crate::domain::services::ChatLog;
use crate::domain::services::Scroll;

async fn start_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    tx: mpsc::UnboundedSender<Action>,
    rx: mpsc::UnboundedReceiver<Event>,
) -> Result<()> {
    let mut events = EventsService::new(rx);
    let mut textarea = TextArea::default();
    let loading = Loading::default();
    let mut chat_log = ChatLog::default();
    let mut scroll = Scroll::default();
    let mut transcript = TranscriptSnapshot::default();
    let mut last_known_width: u16 = 0;
    let mut last_known_height: u16 = 0;

    loop {
        terminal.draw(|frame| {
            let layout = Layout::default()
                .direction(Direction::Vertical)
                .constraints(vec![Constraint::Min(1), Constraint::Max(4)])
                .split(frame.size());

            if layout[0].width != last_known_width || layout[0].height != last_known_height {
                last_known_width = layout[0].width;
                last_known_height = layout[0].height;
                chat_log.set_messages(&transcript.messages, last_known_width);
                scroll.sync(chat_log.len() as u16, last_known_height);
            }

            chat_log.render(frame, layout[0], scroll.position);
            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight),
                layout[0].inner(&Margin {
                    vertical: 1,
                    horizontal: 0,
                }),
                &mut scroll.scrollbar_state,
            );

            if transcript.pending {
                loading.render(frame, layout[1]);
            } else {
                frame.render_widget(textarea.widget(), layout[1]);
            }
        })?;

        match events.next().await? {
            Event::TranscriptChanged(snapshot) => {
                transcript = snapshot;
                chat_log.set_messages(&transcript.messages, last_known_width);
                scroll.sync(chat_log.len() as u16, last_known_height);
                scroll.jump_to_last();
            }
            Event::KeyboardCTRLC() => {
                break;
            }
            Event::KeyboardEnter() => {
                // The input affordance is disabled while a request is in
                // flight; the dispatcher additionally rejects reentrant
                // submissions.
                if transcript.pending {
                    continue;
                }

                let input_str = textarea.lines().join("\n");
                if input_str.trim().is_empty() {
                    continue;
                }

                textarea = TextArea::default();
                tx.send(Action::SubmitPrompt(input_str))?;
            }
            Event::KeyboardCharInput(input) => {
                if !transcript.pending {
                    textarea.input(input);
                }
            }
            Event::KeyboardPaste(text) => {
                if !transcript.pending {
                    textarea.insert_str(&text);
                }
            }
            Event::UIScrollUp() => {
                scroll.up();
            }
            Event::UIScrollDown() => {
                scroll.down();
            }
            Event::UIScrollPageUp() => {
                scroll.up_page();
            }
            Event::UIScrollPageDown() => {
                scroll.down_page();
            }
            Event::UITick() => {
                continue;
            }
        }
    }

    return Ok(());
}

pub fn destruct_terminal_for_panic() {
    disable_raw_mode().unwrap();
    crossterm::execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture).unwrap();
    crossterm::execute!(io::stdout(), cursor::Show).unwrap();
}

pub async fn start(
    tx: mpsc::UnboundedSender<Action>,
    rx: mpsc::UnboundedReceiver<Event>,
) -> Result<()> {
    let stdout = io::stdout();
    let mut stdout = stdout.lock();

    enable_raw_mode()?;
    crossterm::execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let term_backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(term_backend)?;

    start_loop(&mut terminal, tx, rx).await?;

    disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    return Ok(());
}
