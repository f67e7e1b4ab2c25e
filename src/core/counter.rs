use crate::constants::{COUNTER_DURATION_MS, COUNTER_FRAME_MS};

/// Frame-stepped count-up from 0 to a target value.
#[derive(Clone, Debug, PartialEq)]
pub struct Counter {
    target: i64,
    increment: f64,
    current: f64,
    finished: bool,
}

impl Counter {
    pub fn new(target: i64) -> Self {
        Self {
            target,
            increment: target as f64 / (COUNTER_DURATION_MS / COUNTER_FRAME_MS),
            current: 0.0,
            finished: false,
        }
    }

    pub fn target(&self) -> i64 {
        self.target
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Advance one frame and return the value to display.
    pub fn step(&mut self) -> i64 {
        if self.finished {
            return self.target;
        }
        self.current += self.increment;
        if self.current < self.target as f64 {
            self.current.floor() as i64
        } else {
            self.finished = true;
            self.target
        }
    }
}

/// Parse a `data-target` attribute the lenient way: optional sign followed by
/// leading digits, trailing junk ignored.
pub fn parse_target(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (sign, rest) = match s.as_bytes().first() {
        Some(b'-') => (-1, &s[1..]),
        Some(b'+') => (1, &s[1..]),
        _ => (1, s),
    };
    let digits = rest
        .find(|c: char| !c.is_ascii_digit())
        .map_or(rest, |end| &rest[..end]);
    digits.parse::<i64>().ok().map(|v| sign * v)
}
