//! Verification code entry state.
//!
//! DESIGN
//! ======
//! `OtpEntry` models the six-cell code form as plain data: the cell contents
//! and the resend countdown. Methods take raw user input and answer with the
//! cell that should receive focus next, leaving actual DOM focus to the
//! caller. Every interaction rule lives here rather than in event handlers.

/// Number of digit cells in a verification code.
pub const CODE_LENGTH: usize = 6;

/// Seconds a user must wait before requesting another code.
pub const RESEND_COOLDOWN_SECONDS: u32 = 60;

/// One in-progress verification code entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OtpEntry {
    digits: Vec<String>,
    seconds_remaining: u32,
}

impl OtpEntry {
    /// Fresh entry: all cells empty, countdown at full length.
    pub fn new() -> Self {
        Self {
            digits: vec![String::new(); CODE_LENGTH],
            seconds_remaining: RESEND_COOLDOWN_SECONDS,
        }
    }

    /// Applies an edit to the cell at `index`.
    ///
    /// `value` is the raw cell contents after the edit. Anything containing
    /// a non-digit is rejected and the cell keeps its previous contents. An
    /// empty value clears the cell. Otherwise the first digit is kept.
    ///
    /// Returns the cell that should receive focus, when a digit landed in
    /// any cell but the last.
    pub fn input(&mut self, index: usize, value: &str) -> Option<usize> {
        if index >= self.digits.len() {
            return None;
        }
        if !value.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        self.digits[index] = value.chars().take(1).collect();
        if self.digits[index].is_empty() || index + 1 >= self.digits.len() {
            return None;
        }
        Some(index + 1)
    }

    /// Handles a backspace pressed in the cell at `index`.
    ///
    /// Returns the previous cell when the current one is already empty, so
    /// the caller can move focus there. A backspace in a non-empty cell
    /// returns `None` and the edit itself clears the digit.
    pub fn backspace(&self, index: usize) -> Option<usize> {
        if index == 0 || index >= self.digits.len() {
            return None;
        }
        if self.digits[index].is_empty() {
            Some(index - 1)
        } else {
            None
        }
    }

    /// Distributes pasted text across the cells, starting from the first.
    ///
    /// The whole text must be numeric or the paste is rejected. Up to
    /// [`CODE_LENGTH`] leading digits replace the leading cells; cells past
    /// the pasted run keep their previous contents.
    ///
    /// Returns the last cell the paste filled.
    pub fn paste(&mut self, text: &str) -> Option<usize> {
        if text.is_empty() || !text.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        let pasted = text.chars().count().min(self.digits.len());
        let mut next: Vec<String> = text.chars().take(pasted).map(String::from).collect();
        next.extend(self.digits.iter().skip(pasted).cloned());
        self.digits = next;
        Some(pasted - 1)
    }

    /// Advances the countdown by one second, stopping at zero.
    pub fn tick(&mut self) {
        self.seconds_remaining = self.seconds_remaining.saturating_sub(1);
    }

    /// Restarts the countdown and clears every cell for a fresh code.
    pub fn resend(&mut self) {
        self.seconds_remaining = RESEND_COOLDOWN_SECONDS;
        self.digits = vec![String::new(); CODE_LENGTH];
    }

    /// True when every cell holds a digit.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.digits.iter().all(|digit| !digit.is_empty())
    }

    /// True once the countdown has run out and a resend is allowed.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.seconds_remaining == 0
    }

    /// The entered code, concatenated in cell order.
    #[must_use]
    pub fn code(&self) -> String {
        self.digits.concat()
    }

    /// Contents of the cell at `index`, or the empty string out of range.
    #[must_use]
    pub fn digit(&self, index: usize) -> &str {
        self.digits.get(index).map_or("", String::as_str)
    }

    /// Number of cells in the form.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.digits.len()
    }

    /// Seconds left on the resend countdown.
    #[must_use]
    pub fn seconds_remaining(&self) -> u32 {
        self.seconds_remaining
    }
}

impl Default for OtpEntry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "otp_test.rs"]
mod otp_test;
