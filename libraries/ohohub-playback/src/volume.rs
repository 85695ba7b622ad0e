//! Volume control
//!
//! Volume range is 0-100%, mapped linearly onto the resource's 0.0-1.0
//! output volume. Muting is a transient override that keeps the level.

/// Listener-facing volume setting
#[derive(Debug, Clone, PartialEq)]
pub struct Volume {
    /// Percent, 0-100
    level: u8,
    muted: bool,
}

impl Volume {
    /// Start at `level` percent, unmuted; values above 100 are capped
    pub fn new(level: u8) -> Self {
        Self {
            level: level.min(100),
            muted: false,
        }
    }

    /// Change the level; 0 mutes, anything else unmutes
    pub fn set_level(&mut self, level: u8) {
        self.level = level.min(100);
        self.muted = self.level == 0;
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    /// Toggle mute state, leaving the level untouched
    pub fn toggle_mute(&mut self) {
        self.muted = !self.muted;
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Output volume for the resource
    ///
    /// Returns 0.0 if muted, otherwise `level / 100`
    pub fn gain(&self) -> f64 {
        if self.muted {
            0.0
        } else {
            self.unmuted_gain()
        }
    }

    /// Output volume ignoring the mute override
    pub fn unmuted_gain(&self) -> f64 {
        f64::from(self.level) / 100.0
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self::new(50)
    }
}
