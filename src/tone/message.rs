use std::collections::VecDeque;

#[cfg(feature = "rtrb")]
use rtrb::Consumer;

use super::ToneId;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ToneMessage {
    Start { id: ToneId, frequency: f32, gain: f32 },
    Stop { id: ToneId },
}

pub trait ToneReceiver {
    fn pop(&mut self) -> Option<ToneMessage>;

    /// True once the sending side is gone and no further stops can arrive
    fn is_closed(&self) -> bool {
        false
    }
}

#[cfg(feature = "rtrb")]
impl ToneReceiver for Consumer<ToneMessage> {
    fn pop(&mut self) -> Option<ToneMessage> {
        Consumer::pop(self).ok()
    }

    fn is_closed(&self) -> bool {
        Consumer::is_abandoned(self)
    }
}

// Offline rendering and tests
impl ToneReceiver for VecDeque<ToneMessage> {
    fn pop(&mut self) -> Option<ToneMessage> {
        self.pop_front()
    }
}
