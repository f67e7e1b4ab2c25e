use smallvec::SmallVec;

pub const KONAMI_SEQUENCE: [&str; 10] = [
    "ArrowUp",
    "ArrowUp",
    "ArrowDown",
    "ArrowDown",
    "ArrowLeft",
    "ArrowRight",
    "ArrowLeft",
    "ArrowRight",
    "b",
    "a",
];

/// Sliding window over the most recent key presses.
#[derive(Clone, Debug, Default)]
pub struct KonamiDetector {
    recent: SmallVec<[String; 10]>,
}

impl KonamiDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key; returns `true` when the last ten keys spell the code.
    pub fn push(&mut self, key: &str) -> bool {
        if self.recent.len() == KONAMI_SEQUENCE.len() {
            self.recent.remove(0);
        }
        self.recent.push(key.to_string());
        self.recent.iter().map(String::as_str).eq(KONAMI_SEQUENCE)
    }
}
