use std::io;
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use crossterm::event::{self, KeyEvent, KeyEventKind};
use roulette_engine::{FlashSink, SpinId};

pub enum Event {
    Key(KeyEvent),
    Resize,
    Tick,
    FlashDue(SpinId),
}

/// Single inbox for everything the main loop reacts to: terminal input from a
/// polling thread and expired flash timers.
pub struct EventHandler {
    tx: mpsc::Sender<Event>,
    rx: mpsc::Receiver<Event>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let input_tx = tx.clone();

        thread::spawn(move || loop {
            let forwarded = if event::poll(tick_rate).unwrap_or(false) {
                match event::read() {
                    Ok(crossterm::event::Event::Key(key)) if key.kind == KeyEventKind::Press => {
                        input_tx.send(Event::Key(key))
                    }
                    Ok(crossterm::event::Event::Resize(..)) => input_tx.send(Event::Resize),
                    _ => Ok(()),
                }
            } else {
                input_tx.send(Event::Tick)
            };
            if forwarded.is_err() {
                return;
            }
        });

        Self { tx, rx }
    }

    pub fn flash_sink(&self) -> Arc<dyn FlashSink> {
        Arc::new(ChannelFlashSink {
            tx: self.tx.clone(),
        })
    }

    pub fn next(&self) -> io::Result<Event> {
        self.rx.recv().map_err(io::Error::other)
    }
}

struct ChannelFlashSink {
    tx: mpsc::Sender<Event>,
}

impl FlashSink for ChannelFlashSink {
    fn flash_due(&self, spin_id: SpinId) {
        let _ = self.tx.send(Event::FlashDue(spin_id));
    }
}
