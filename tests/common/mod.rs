//! Recording simulation harness shared by the integration tests
//!
//! `SimLines` and `SimDelay` write into one shared log, so a trace shows
//! pin writes and waits interleaved exactly as the driver issued them.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::PinState;
use max2870_pllset::drivers::max2870::Max2870;
use max2870_pllset::hal::lines::LineDriver;
use max2870_pllset::types::{LineState, Signal};

/// One recorded operation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    /// A line was driven
    Set(Signal, PinState),
    /// Microsecond wait
    Us(u32),
    /// Millisecond wait
    Ms(u32),
    /// Nanosecond wait (never expected from the driver)
    Ns(u32),
}

/// Shared event log
#[derive(Clone, Default)]
pub struct Recorder {
    log: Rc<RefCell<Vec<Event>>>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> SimLines {
        SimLines {
            log: Rc::clone(&self.log),
            state: LineState::IDLE,
        }
    }

    pub fn delay(&self) -> SimDelay {
        SimDelay {
            log: Rc::clone(&self.log),
        }
    }

    /// Driver wired to this recorder
    pub fn synth(&self) -> Max2870<SimLines, SimDelay> {
        Max2870::new(self.lines(), self.delay())
    }

    pub fn events(&self) -> Vec<Event> {
        self.log.borrow().clone()
    }

    pub fn clear(&self) {
        self.log.borrow_mut().clear();
    }
}

/// Line driver that logs every write and tracks levels
pub struct SimLines {
    log: Rc<RefCell<Vec<Event>>>,
    state: LineState,
}

impl SimLines {
    pub fn state(&self) -> LineState {
        self.state
    }
}

impl LineDriver for SimLines {
    fn set_signal(&mut self, signal: Signal, level: PinState) {
        self.state.set(signal, level);
        self.log.borrow_mut().push(Event::Set(signal, level));
    }
}

/// Zero-cost delay that logs the requested duration
pub struct SimDelay {
    log: Rc<RefCell<Vec<Event>>>,
}

impl DelayNs for SimDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.log.borrow_mut().push(Event::Ns(ns));
    }

    fn delay_us(&mut self, us: u32) {
        self.log.borrow_mut().push(Event::Us(us));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.log.borrow_mut().push(Event::Ms(ms));
    }
}

/// Expected trace for one bit: DATA, setup, CLK high, pulse, CLK low, hold
pub fn bit_events(bit: bool) -> [Event; 6] {
    [
        Event::Set(Signal::Data, PinState::from(bit)),
        Event::Us(2),
        Event::Set(Signal::Clock, PinState::High),
        Event::Us(4),
        Event::Set(Signal::Clock, PinState::Low),
        Event::Us(2),
    ]
}

/// Expected trace for one byte
pub fn byte_events(value: u8) -> Vec<Event> {
    (0..8)
        .rev()
        .flat_map(|i| bit_events((value >> i) & 1 == 1))
        .collect()
}

/// Expected trace for one latched register word
pub fn register_events(word: u32) -> Vec<Event> {
    let mut events: Vec<Event> = word.to_be_bytes().into_iter().flat_map(byte_events).collect();
    events.extend([
        Event::Us(2),
        Event::Set(Signal::LatchEnable, PinState::High),
        Event::Us(10),
        Event::Set(Signal::LatchEnable, PinState::Low),
        Event::Us(2),
    ]);
    events
}

/// DATA levels sampled on every CLK rising edge
pub fn sampled_bits(events: &[Event]) -> Vec<bool> {
    let mut state = LineState::IDLE;
    let mut bits = Vec::new();
    for event in events {
        if let Event::Set(signal, level) = *event {
            let rising = signal == Signal::Clock
                && level == PinState::High
                && state.level(Signal::Clock) == PinState::Low;
            if rising {
                bits.push(state.level(Signal::Data) == PinState::High);
            }
            state.set(signal, level);
        }
    }
    bits
}

/// Pack MSB-first bits into bytes
pub fn bits_to_bytes(bits: &[bool]) -> Vec<u8> {
    bits.chunks(8)
        .map(|chunk| chunk.iter().fold(0u8, |acc, &b| (acc << 1) | u8::from(b)))
        .collect()
}

/// Words committed by LE rising edges, using the last 32 bits shifted in
/// since the previous latch. Edges with nothing shifted are ignored.
pub fn latched_words(events: &[Event]) -> Vec<u32> {
    let mut state = LineState::IDLE;
    let mut shift: Vec<bool> = Vec::new();
    let mut words = Vec::new();
    for event in events {
        let Event::Set(signal, level) = *event else {
            continue;
        };
        let was = state.level(signal);
        state.set(signal, level);
        if was != PinState::Low || level != PinState::High {
            continue;
        }
        match signal {
            Signal::Clock => shift.push(state.level(Signal::Data) == PinState::High),
            Signal::LatchEnable if !shift.is_empty() => {
                let word = shift
                    .iter()
                    .rev()
                    .take(32)
                    .rev()
                    .fold(0u32, |acc, &b| (acc << 1) | u32::from(b));
                words.push(word);
                shift.clear();
            }
            _ => {}
        }
    }
    words
}

/// True if DATA never changes while CLK is high
pub fn data_stable_while_clock_high(events: &[Event]) -> bool {
    let mut state = LineState::IDLE;
    for event in events {
        if let Event::Set(signal, level) = *event {
            if signal == Signal::Data
                && state.level(Signal::Clock) == PinState::High
                && state.level(Signal::Data) != level
            {
                return false;
            }
            state.set(signal, level);
        }
    }
    true
}

/// Line levels after replaying `events` from idle
pub fn replay(events: &[Event]) -> LineState {
    events.iter().fold(LineState::IDLE, |state, event| match *event {
        Event::Set(signal, level) => state.with(signal, level),
        _ => state,
    })
}

/// Every millisecond wait, in order
pub fn ms_waits(events: &[Event]) -> Vec<u32> {
    events
        .iter()
        .filter_map(|e| match *e {
            Event::Ms(ms) => Some(ms),
            _ => None,
        })
        .collect()
}

/// Number of LE low-to-high transitions
pub fn latch_pulses(events: &[Event]) -> usize {
    let mut state = LineState::IDLE;
    let mut count = 0;
    for event in events {
        if let Event::Set(signal, level) = *event {
            if signal == Signal::LatchEnable
                && level == PinState::High
                && state.level(signal) == PinState::Low
            {
                count += 1;
            }
            state.set(signal, level);
        }
    }
    count
}
