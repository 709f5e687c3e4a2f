use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

pub enum Event {
    Key(KeyEvent),
    Tick,
}

/// Input thread feeding the UI loop. Ticks drive notification expiry.
pub struct EventHandler {
    receiver: mpsc::Receiver<Event>,
}

impl EventHandler {
    pub fn new(tick_rate: u64) -> Self {
        let (sender, receiver) = mpsc::channel();

        thread::spawn(move || loop {
            if let Ok(true) = event::poll(Duration::from_millis(tick_rate)) {
                if let Ok(CrosstermEvent::Key(key)) = event::read() {
                    if key.kind == KeyEventKind::Press && sender.send(Event::Key(key)).is_err() {
                        break;
                    }
                }
            }
            if sender.send(Event::Tick).is_err() {
                break;
            }
        });

        Self { receiver }
    }

    pub fn recv(&self) -> Result<Event, mpsc::RecvError> {
        self.receiver.recv()
    }
}
