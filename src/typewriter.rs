//! Typewriter text cycling, modelled as an endless sequence of frames.
//!
//! Each phrase is typed one character at a time, held, then backspaced down to
//! the prefix it shares with the next phrase. After the last phrase the text is
//! erased completely and the cycle starts over.

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeSpeed {
    /// Delay after each typed character.
    pub type_speed: Duration,
    /// Delay after each erased character.
    pub back_speed: Duration,
    /// How long a fully typed phrase stays up.
    pub back_delay: Duration,
    /// Pause before the first character of a cycle.
    pub start_delay: Duration,
}

impl TypeSpeed {
    pub const fn new(type_ms: u64, back_ms: u64) -> Self {
        Self {
            type_speed: Duration::from_millis(type_ms),
            back_speed: Duration::from_millis(back_ms),
            back_delay: Duration::from_millis(700),
            start_delay: Duration::ZERO,
        }
    }
}

/// Text to display and how long to keep it before the next frame.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Frame {
    pub text: String,
    pub hold: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Start,
    Typing,
    Erasing,
}

#[derive(Debug, Clone)]
pub struct Typewriter {
    phrases: Vec<Vec<char>>,
    speed: TypeSpeed,
    phrase: usize,
    shown: usize,
    phase: Phase,
}

impl Typewriter {
    pub fn new<S: AsRef<str>>(phrases: &[S], speed: TypeSpeed) -> Self {
        Self {
            phrases: phrases
                .iter()
                .map(|p| p.as_ref().chars().collect())
                .collect(),
            speed,
            phrase: 0,
            shown: 0,
            phase: Phase::Start,
        }
    }

    pub fn restart(&mut self) {
        self.phrase = 0;
        self.shown = 0;
        self.phase = Phase::Start;
    }

    fn frame(&self, hold: Duration) -> Frame {
        Frame {
            text: self.phrases[self.phrase][..self.shown].iter().collect(),
            hold,
        }
    }

    /// Characters kept when erasing the current phrase.
    fn erase_target(&self) -> usize {
        let current = &self.phrases[self.phrase];
        match self.phrases.get(self.phrase + 1) {
            Some(next) => current
                .iter()
                .zip(next.iter())
                .take_while(|(a, b)| a == b)
                .count(),
            None => 0,
        }
    }

    fn advance_phrase(&mut self) {
        self.phrase = (self.phrase + 1) % self.phrases.len();
        self.phase = Phase::Typing;
    }

    fn type_next(&mut self) -> Frame {
        let len = self.phrases[self.phrase].len();
        if self.shown < len {
            self.shown += 1;
        }
        if self.shown >= len {
            self.phase = Phase::Erasing;
            self.frame(self.speed.back_delay)
        } else {
            self.frame(self.speed.type_speed)
        }
    }
}

impl Iterator for Typewriter {
    type Item = Frame;

    fn next(&mut self) -> Option<Frame> {
        if self.phrases.is_empty() {
            return None;
        }
        let frame = match self.phase {
            Phase::Start => {
                self.phase = Phase::Typing;
                self.shown = 0;
                self.frame(self.speed.start_delay)
            }
            Phase::Typing => self.type_next(),
            Phase::Erasing => {
                let target = self.erase_target();
                if self.shown > target {
                    self.shown -= 1;
                    if self.shown == target {
                        let frame = self.frame(self.speed.type_speed);
                        if self.phrase + 1 == self.phrases.len() {
                            self.phrase = 0;
                            self.phase = Phase::Start;
                        } else {
                            self.advance_phrase();
                        }
                        frame
                    } else {
                        self.frame(self.speed.back_speed)
                    }
                } else {
                    // next phrase extends this one, keep typing
                    self.advance_phrase();
                    self.type_next()
                }
            }
        };
        Some(frame)
    }
}
