//! Headline cycling: type a label, hold it, erase back to what the next label
//! shares with it, type the next one, forever.

use crate::config::TypingConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Typing,
    Holding,
    Erasing,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cursor {
    pub label: usize,
    pub chars: usize,
    pub phase: Phase,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Typewriter {
    labels: &'static [&'static str],
    timing: TypingConfig,
}

impl Typewriter {
    pub fn new(labels: &'static [&'static str], timing: TypingConfig) -> Self {
        Self { labels, timing }
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn start(&self) -> Cursor {
        Cursor {
            label: 0,
            chars: 0,
            phase: Phase::Typing,
        }
    }

    /// Fully typed cursor on the first label, for when motion is unwanted.
    pub fn resting(&self) -> Cursor {
        Cursor {
            label: 0,
            chars: self.label_len(0),
            phase: Phase::Holding,
        }
    }

    pub fn text(&self, cursor: Cursor) -> &'static str {
        let label = self.label(cursor.label);
        match label.char_indices().nth(cursor.chars) {
            Some((end, _)) => &label[..end],
            None => label,
        }
    }

    /// How long `cursor` stays on screen before [`Typewriter::advance`].
    pub fn delay_ms(&self, cursor: Cursor) -> u32 {
        match cursor.phase {
            Phase::Holding => self.timing.hold_ms,
            Phase::Typing | Phase::Erasing => self.timing.keystroke_ms,
        }
    }

    pub fn advance(&self, cursor: Cursor) -> Cursor {
        if self.is_empty() {
            return cursor;
        }

        match cursor.phase {
            Phase::Typing => {
                let len = self.label_len(cursor.label);
                let chars = (cursor.chars + 1).min(len);
                let phase = if chars == len { Phase::Holding } else { Phase::Typing };
                Cursor { chars, phase, ..cursor }
            }
            Phase::Holding => Cursor {
                phase: Phase::Erasing,
                ..cursor
            },
            Phase::Erasing => {
                let next = self.next_label(cursor.label);
                let keep = self.shared_prefix(cursor.label, next);
                if cursor.chars > keep {
                    Cursor {
                        chars: cursor.chars - 1,
                        ..cursor
                    }
                } else {
                    let phase = if cursor.chars >= self.label_len(next) {
                        Phase::Holding
                    } else {
                        Phase::Typing
                    };
                    Cursor {
                        label: next,
                        chars: cursor.chars,
                        phase,
                    }
                }
            }
        }
    }

    fn label(&self, index: usize) -> &'static str {
        self.labels.get(index).copied().unwrap_or("")
    }

    fn label_len(&self, index: usize) -> usize {
        self.label(index).chars().count()
    }

    fn next_label(&self, index: usize) -> usize {
        (index + 1) % self.labels.len().max(1)
    }

    fn shared_prefix(&self, a: usize, b: usize) -> usize {
        self.label(a)
            .chars()
            .zip(self.label(b).chars())
            .take_while(|(left, right)| left == right)
            .count()
    }
}
