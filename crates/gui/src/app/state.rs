use crate::app::Message;
use crate::execution::{open_in_browser, poll_status, start_container, stop_container};
use iced::{time, Element, Subscription, Task};
use std::time::Duration;
use stirling_dock_core::actions::ActionOutcome;
use stirling_dock_core::config;
use stirling_dock_core::docker::ContainerRef;
use stirling_dock_core::status::{ContainerState, Controls};

const POLL_INTERVAL: Duration = Duration::from_secs(5);
const MAX_LOG_LINES: usize = 1000;

pub struct StirlingDock {
    pub container: ContainerRef,
    pub state: ContainerState,
    pub log: Vec<String>,
    pub start_in_flight: bool,
    pub stop_in_flight: bool,
    pub poll_in_flight: bool,
}

impl StirlingDock {
    pub fn new() -> (Self, Task<Message>) {
        let config_path = config::get_config_path(&None);
        let (app_config, config_note) = match config::load_config(&config_path) {
            Ok(app_config) => (app_config, None),
            Err(e) => (Default::default(), Some(format!("{e} Using defaults."))),
        };

        let mut app = Self::with_container(app_config.container_ref());
        if let Some(note) = config_note {
            app.push_log(note);
        }

        // initial status check before the first interval tick
        app.poll_in_flight = true;
        let poll = Task::perform(poll_status(app.container.clone()), Message::PollFinished);
        (app, poll)
    }

    pub fn with_container(container: ContainerRef) -> Self {
        Self {
            container,
            state: ContainerState::Absent,
            log: vec![
                "Welcome to Stirling PDF Docker Manager!".to_string(),
                "Click 'Run Stirling PDF' to start the container.".to_string(),
                "Click 'Stop Stirling PDF' to stop it.".to_string(),
                String::new(),
            ],
            start_in_flight: false,
            stop_in_flight: false,
            poll_in_flight: false,
        }
    }

    pub fn title(&self) -> String {
        "Stirling PDF Docker Manager".to_string()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        time::every(POLL_INTERVAL).map(|_| Message::PollTick)
    }

    /// Enablement for the three buttons: the state table, masked by the
    /// single-flight guard while an action of that kind is still running.
    pub fn controls(&self) -> Controls {
        let mut controls = self.state.controls();
        controls.start &= !self.start_in_flight;
        controls.stop &= !self.stop_in_flight;
        controls
    }

    pub fn push_log(&mut self, line: impl Into<String>) {
        self.log.push(line.into());
        if self.log.len() > MAX_LOG_LINES {
            let excess = self.log.len() - MAX_LOG_LINES;
            self.log.drain(0..excess);
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::StartPressed => {
                if self.start_in_flight {
                    return Task::none();
                }
                self.start_in_flight = true;
                self.push_log("Attempting to run/start Stirling PDF container...");
                Task::perform(
                    start_container(self.container.clone()),
                    Message::StartFinished,
                )
            }
            Message::StopPressed => {
                if self.stop_in_flight {
                    return Task::none();
                }
                self.stop_in_flight = true;
                self.push_log("Stopping Stirling PDF container...");
                Task::perform(stop_container(self.container.clone()), Message::StopFinished)
            }
            Message::OpenPressed => {
                let url = self.container.url();
                self.push_log(format!("Opening Stirling PDF in browser: {url}"));
                Task::perform(open_in_browser(url), Message::BrowserOpened)
            }
            Message::StartFinished(outcome) => {
                self.start_in_flight = false;
                self.finish_action(&outcome)
            }
            Message::StopFinished(outcome) => {
                self.stop_in_flight = false;
                self.finish_action(&outcome)
            }
            Message::BrowserOpened(result) => {
                // Only surface failures; a successful launch needs no line
                if let Err(e) = result {
                    self.push_log(format!("Failed to open browser: {e}"));
                }
                Task::none()
            }
            Message::PollTick => {
                if self.poll_in_flight {
                    // the poll never overlaps itself; drop the tick
                    return Task::none();
                }
                self.poll_in_flight = true;
                Task::perform(poll_status(self.container.clone()), Message::PollFinished)
            }
            Message::PollFinished(state) => {
                self.poll_in_flight = false;
                self.state = state;
                Task::none()
            }
        }
    }

    fn finish_action(&mut self, outcome: &ActionOutcome) -> Task<Message> {
        for line in outcome.log_lines() {
            self.push_log(line);
        }
        // fresh status check right after the action, ahead of the next tick
        self.poll_in_flight = true;
        Task::perform(poll_status(self.container.clone()), Message::PollFinished)
    }

    pub fn view(&self) -> Element<Message> {
        crate::ui::views::main_view(self)
    }
}
