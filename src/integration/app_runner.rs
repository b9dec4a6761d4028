use std::collections::VecDeque;

use color_eyre::eyre::Result;
use ratatui::prelude::Rect;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::{
    config::Config,
    core::{
        cmd::Cmd,
        raw_msg::RawMsg,
        state::AppState,
        translator::translate_raw_to_domain,
        update::update,
    },
    infrastructure::{
        fetch::{DatasetService, DATASET_ENDPOINT},
        tui,
    },
    presentation::components::{grid::grid_area, GridComponent, StatusBarComponent},
};

/// Drives the whole application: maps terminal events to raw messages,
/// runs the update cycle and executes the resulting commands.
pub struct AppRunner {
    headless: bool,
    tick_rate: f64,
    frame_rate: f64,
    state: AppState,
    raw_tx: mpsc::UnboundedSender<RawMsg>,
    raw_rx: mpsc::UnboundedReceiver<RawMsg>,
    tui: Option<tui::Tui>,
    grid: GridComponent,
    status_bar: StatusBarComponent,
    // Cancels the in-flight fetch on shutdown
    fetch_cancel: Option<CancellationToken>,
}

impl AppRunner {
    pub fn new(config: Config, tick_rate: f64, frame_rate: f64, headless: bool) -> Result<Self> {
        let state = AppState::new(config);
        let (raw_tx, raw_rx) = mpsc::unbounded_channel();

        let tui = if headless {
            None
        } else {
            Some(tui::Tui::new()?.tick_rate(tick_rate).frame_rate(frame_rate))
        };

        Ok(Self {
            headless,
            tick_rate,
            frame_rate,
            state,
            raw_tx,
            raw_rx,
            tui,
            grid: GridComponent::new(),
            status_bar: StatusBarComponent::new(),
            fetch_cancel: None,
        })
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Inject a raw message directly. Used by tests driving the runner headless.
    pub fn send_raw_msg(&mut self, raw_msg: RawMsg) {
        let _ = self.raw_tx.send(raw_msg);
    }

    /// Translate one raw message and run the update cycle to a fixed point.
    pub fn process_raw_msg(&mut self, raw_msg: RawMsg) {
        if !raw_msg.is_frequent() {
            log::debug!("raw msg: {raw_msg:?}");
        }
        let mut queue: VecDeque<_> = translate_raw_to_domain(raw_msg, &self.state).into();
        while let Some(msg) = queue.pop_front() {
            let (new_state, cmds) = update(msg, std::mem::take(&mut self.state));
            self.state = new_state;
            for cmd in cmds {
                self.execute_cmd(cmd);
            }
        }
    }

    fn execute_cmd(&mut self, cmd: Cmd) {
        match cmd {
            Cmd::FetchDataset => {
                let (cancel, service) = DatasetService::new(DATASET_ENDPOINT, self.raw_tx.clone());
                self.fetch_cancel = Some(cancel);
                service.run();
            }
            Cmd::LogError { message } => {
                log::error!("{message}");
            }
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.execute_cmd(cmd);
                }
            }
            Cmd::None => {}
        }
    }

    /// Startup sequence once the terminal (or a headless host) is ready:
    /// seed the hit-test geometry with the initial size, then kick off the
    /// dataset fetch. Terminals only emit resize events on actual resizes,
    /// so the initial size must be fed in explicitly.
    fn terminal_ready(&mut self, width: u16, height: u16) {
        self.process_raw_msg(RawMsg::Resize(width, height));
        self.process_raw_msg(RawMsg::Init);
    }

    pub async fn run(&mut self) -> Result<()> {
        match &mut self.tui {
            Some(tui) => tui.enter()?,
            // No Init event arrives without an event stream
            None => self.process_raw_msg(RawMsg::Init),
        }

        loop {
            tokio::select! {
                event = async {
                    match &mut self.tui {
                        Some(tui) => tui.next().await,
                        None => {
                            // Headless runners are driven via send_raw_msg only
                            futures::future::pending().await
                        }
                    }
                } => {
                    if let Some(e) = event {
                        self.handle_tui_event(e)?;
                    }
                }
                raw_msg = self.raw_rx.recv() => {
                    if let Some(raw_msg) = raw_msg {
                        self.process_raw_msg(raw_msg);
                    }
                }
            }

            if self.state.system.should_suspend {
                self.process_raw_msg(RawMsg::Resume);
                if let Some(tui) = &mut self.tui {
                    tui.suspend()?;
                }
                self.tui = if self.headless {
                    None
                } else {
                    let mut tui = tui::Tui::new()?
                        .tick_rate(self.tick_rate)
                        .frame_rate(self.frame_rate);
                    tui.enter()?;
                    Some(tui)
                };
            } else if self.state.system.should_quit {
                if let Some(cancel) = self.fetch_cancel.take() {
                    cancel.cancel();
                }
                if let Some(tui) = &mut self.tui {
                    tui.exit()?;
                }
                break;
            }
        }
        Ok(())
    }

    fn handle_tui_event(&mut self, event: tui::Event) -> Result<()> {
        match event {
            tui::Event::Init => {
                let size = self.tui.as_ref().map(|tui| tui.size()).transpose()?;
                if let Some(size) = size {
                    self.terminal_ready(size.width, size.height);
                }
            }
            tui::Event::Quit => self.process_raw_msg(RawMsg::Quit),
            tui::Event::Tick => self.process_raw_msg(RawMsg::Tick),
            tui::Event::Key(key) => self.process_raw_msg(RawMsg::Key(key)),
            tui::Event::Mouse(mouse) => self.process_raw_msg(RawMsg::Mouse(mouse)),
            tui::Event::Error => self.process_raw_msg(RawMsg::Error("terminal event error".into())),
            tui::Event::Resize(w, h) => {
                if let Some(tui) = &mut self.tui {
                    tui.resize(Rect::new(0, 0, w, h))?;
                }
                self.process_raw_msg(RawMsg::Resize(w, h));
                self.render()?;
            }
            tui::Event::Render => {
                self.render()?;
            }
            _ => {}
        }
        Ok(())
    }

    fn render(&mut self) -> Result<()> {
        let state = &self.state;
        let grid = &self.grid;
        let status_bar = &self.status_bar;
        if let Some(tui) = &mut self.tui {
            tui.draw(|f| {
                let area = f.area();
                // Same region the mouse hit-test uses
                grid.view(state, f, grid_area(area.width, area.height));
                // Status bar overlays the bottom two lines
                status_bar.view(state, f, area);
            })?;
        }
        Ok(())
    }
}
