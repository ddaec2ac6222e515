use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Key(KeyEvent),
    Tick,
    /// The splash screen's delay ran out.
    SplashElapsed,
}

pub struct EventHandler {
    sender: mpsc::Sender<Event>,
    receiver: mpsc::Receiver<Event>,
}

/// Poll timeout for a configured tick rate. Zero would spin, so it is raised to 1ms.
pub fn poll_interval(tick_rate_ms: u64) -> Duration {
    Duration::from_millis(tick_rate_ms.max(1))
}

impl EventHandler {
    pub fn new(tick_rate: u64) -> Self {
        let (sender, receiver) = mpsc::channel();
        let interval = poll_interval(tick_rate);
        let sender_clone = sender.clone();

        thread::spawn(move || {
            loop {
                match event::poll(interval) {
                    Ok(true) => {
                        if let Ok(CrosstermEvent::Key(key)) = event::read() {
                            if key.kind == KeyEventKind::Press
                                && sender_clone.send(Event::Key(key)).is_err()
                            {
                                break;
                            }
                        }
                    }
                    Ok(false) => {}
                    Err(_) => {}
                }
                if sender_clone.send(Event::Tick).is_err() {
                    break;
                }
            }
        });

        Self { sender, receiver }
    }

    /// Handle for posting events from scheduled tasks.
    pub fn sender(&self) -> mpsc::Sender<Event> {
        self.sender.clone()
    }

    pub fn recv(&self) -> Result<Event, mpsc::RecvError> {
        self.receiver.recv()
    }
}
