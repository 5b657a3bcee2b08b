use std::io::{self, Stdout};
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use cellblocks::clipboard;
use cellblocks::commands::Cmd;
use cellblocks::config::AppConfig;
use cellblocks::input::{key_to_msg, mouse_to_msg};
use cellblocks::messages::{AppMsg, LoadedData, Msg, UiMsg};
use cellblocks::model::AppModel;
use cellblocks::storage::{file_mod_time, load_data, poll_for_change, save_data};
use cellblocks::update::update;
use cellblocks::view;

/// How long to wait for terminal input before checking the inbox
const EVENT_POLL: Duration = Duration::from_millis(250);

type Backend = CrosstermBackend<Stdout>;

pub struct App {
    model: AppModel,
    msg_tx: Sender<Msg>,
    msg_rx: Receiver<Msg>,
    should_quit: bool,
}

impl App {
    pub fn new(config: AppConfig, width: u16, height: u16) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel();
        let model = AppModel::new(config, width as usize, height as usize);
        Self {
            model,
            msg_tx,
            msg_rx,
            should_quit: false,
        }
    }

    /// Take over the terminal until the user quits
    pub fn run(mut self) -> Result<()> {
        enable_raw_mode().context("failed to enable raw mode")?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
            .context("failed to enter alternate screen")?;
        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

        let result = self.event_loop(&mut terminal);

        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        if let Err(e) = &result {
            tracing::error!("Event loop failed: {:#}", e);
        }
        result
    }

    fn event_loop(&mut self, terminal: &mut Terminal<Backend>) -> Result<()> {
        tracing::info!("Loading cards from {}", self.model.data_path.display());
        self.process_cmd(Cmd::LoadData {
            path: self.model.data_path.clone(),
        });

        let mut needs_redraw = true;
        while !self.should_quit {
            if needs_redraw {
                terminal.draw(|frame| view::render(frame, &self.model))?;
                needs_redraw = false;
            }

            if event::poll(EVENT_POLL)? {
                if let Some(cmd) = self.handle_event(event::read()?) {
                    needs_redraw |= cmd.needs_redraw();
                    self.process_cmd(cmd);
                }
            }

            needs_redraw |= self.process_async_messages();

            let expire = Msg::Ui(UiMsg::ExpireMessages(Instant::now()));
            if let Some(cmd) = update(&mut self.model, expire) {
                needs_redraw |= cmd.needs_redraw();
                self.process_cmd(cmd);
            }
        }

        tracing::info!("Exiting");
        Ok(())
    }

    fn handle_event(&mut self, event: Event) -> Option<Cmd> {
        let msg = match event {
            Event::Key(key) => key_to_msg(&self.model, key)?,
            Event::Mouse(mouse) => mouse_to_msg(mouse, Instant::now())?,
            Event::Resize(width, height) => Msg::resize(width, height),
            _ => return None,
        };
        update(&mut self.model, msg)
    }

    /// Execute a command; background work replies through the inbox
    fn process_cmd(&mut self, cmd: Cmd) {
        match cmd {
            Cmd::Redraw => {}
            Cmd::Quit => self.should_quit = true,
            Cmd::LoadData { path } => {
                let tx = self.msg_tx.clone();
                std::thread::spawn(move || {
                    let result = load_data(&path)
                        .map(|data| LoadedData {
                            data,
                            modified: file_mod_time(&path).ok(),
                        })
                        .map_err(|e| format!("{:#}", e));
                    let _ = tx.send(Msg::App(AppMsg::DataLoaded(result)));
                });
            }
            Cmd::SaveData {
                path,
                data,
                card_id,
            } => {
                let tx = self.msg_tx.clone();
                std::thread::spawn(move || {
                    let result = save_data(&path, &data)
                        .map(|()| file_mod_time(&path).ok())
                        .map_err(|e| format!("{:#}", e));
                    let _ = tx.send(Msg::App(AppMsg::SaveCompleted { card_id, result }));
                });
            }
            Cmd::CopyToClipboard { text, label } => {
                let tx = self.msg_tx.clone();
                std::thread::spawn(move || {
                    let result = clipboard::copy(&text)
                        .map(|()| format!("Copied: {}", label))
                        .map_err(|e| format!("{:#}", e));
                    let _ = tx.send(Msg::App(AppMsg::CopyCompleted(result)));
                });
            }
            Cmd::SchedulePoll { delay } => {
                let tx = self.msg_tx.clone();
                std::thread::spawn(move || {
                    std::thread::sleep(delay);
                    let _ = tx.send(Msg::App(AppMsg::PollTick));
                });
            }
            Cmd::PollForChange {
                path,
                since,
                generation,
            } => {
                let tx = self.msg_tx.clone();
                std::thread::spawn(move || {
                    let result = poll_for_change(&path, since).map_err(|e| format!("{:#}", e));
                    let _ = tx.send(Msg::App(AppMsg::FileChanged { generation, result }));
                });
            }
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.process_cmd(cmd);
                }
            }
        }
    }

    fn process_async_messages(&mut self) -> bool {
        let mut needs_redraw = false;
        while let Ok(msg) = self.msg_rx.try_recv() {
            if let Some(cmd) = update(&mut self.model, msg) {
                if cmd.needs_redraw() {
                    needs_redraw = true;
                }
                self.process_cmd(cmd);
            }
        }
        needs_redraw
    }
}
