//! Board quality thresholds
//!
//! A candidate board is accepted when its total score is far enough above the
//! empirical mean for its grid size.
//!
//! ## How the Threshold Works
//!
//! ```text
//! threshold = mean_score + factor × std_score
//! accept    = score >= threshold && (floor disabled || score >= min_score)
//!             || factor <= bypass_below
//! ```

/// Empirical score statistics for one grid size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QualityProfile {
    pub mean_score: u32,
    pub std_score: u32,
    /// Absolute floor, applied regardless of the statistical threshold
    pub min_score: u32,
}

impl QualityProfile {
    /// Statistics for 4×4 boards
    pub const FOUR: Self = Self::new(73_000, 50_000, 8_000);

    /// Statistics for 5×5 boards
    pub const FIVE: Self = Self::new(186_000, 107_000, 16_000);

    #[must_use]
    pub const fn new(mean_score: u32, std_score: u32, min_score: u32) -> Self {
        Self {
            mean_score,
            std_score,
            min_score,
        }
    }

    /// Profile for a supported grid size (4 or 5)
    #[must_use]
    pub const fn for_size(size: usize) -> Option<Self> {
        match size {
            4 => Some(Self::FOUR),
            5 => Some(Self::FIVE),
            _ => None,
        }
    }

    /// Score a board must reach for the given quality factor
    #[must_use]
    pub fn threshold(&self, factor: f64) -> f64 {
        f64::from(self.mean_score) + factor * f64::from(self.std_score)
    }
}

/// Lowest slider position
pub const SLIDER_MIN: i32 = -10;

/// Highest slider position
pub const SLIDER_MAX: i32 = 50;

/// Standard deviations per slider step
pub const SLIDER_SCALE: f64 = 0.1;

/// Acceptance settings for generated boards
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QualityConfig {
    /// Standard deviations above the mean a board must reach.
    /// Meaningful range is roughly -1.0 to 5.0.
    pub factor: f64,

    /// Also require the profile's `min_score` (default: true)
    pub enforce_floor: bool,

    /// Accept every board when `factor` is at or below this value (default: none)
    pub bypass_below: Option<f64>,
}

impl QualityConfig {
    #[must_use]
    pub const fn new(factor: f64) -> Self {
        Self {
            factor,
            enforce_floor: true,
            bypass_below: None,
        }
    }

    /// Build a config from a settings slider position
    ///
    /// The position is clamped to `SLIDER_MIN..=SLIDER_MAX`; each step is a
    /// tenth of a standard deviation. The lowest position accepts any board.
    ///
    /// # Examples
    /// ```
    /// use word_hunt::generator::QualityConfig;
    ///
    /// let config = QualityConfig::from_slider(15);
    /// assert!((config.factor - 1.5).abs() < 1e-9);
    /// ```
    #[must_use]
    pub fn from_slider(position: i32) -> Self {
        let position = position.clamp(SLIDER_MIN, SLIDER_MAX);
        Self {
            factor: f64::from(position) * SLIDER_SCALE,
            enforce_floor: true,
            bypass_below: Some(f64::from(SLIDER_MIN) * SLIDER_SCALE),
        }
    }

    #[must_use]
    pub const fn without_floor(mut self) -> Self {
        self.enforce_floor = false;
        self
    }

    #[must_use]
    pub const fn with_bypass(mut self, bypass_below: Option<f64>) -> Self {
        self.bypass_below = bypass_below;
        self
    }

    /// Whether every board is accepted outright
    #[must_use]
    pub fn bypasses(&self) -> bool {
        self.bypass_below.is_some_and(|b| self.factor <= b)
    }

    /// Decide whether a board with `score` is good enough
    #[must_use]
    pub fn accepts(&self, profile: &QualityProfile, score: u32) -> bool {
        if self.bypasses() {
            return true;
        }

        let meets_threshold = f64::from(score) >= profile.threshold(self.factor);
        let meets_floor = !self.enforce_floor || score >= profile.min_score;
        meets_threshold && meets_floor
    }

    /// Named tier for this factor
    #[must_use]
    pub fn tier(&self) -> QualityTier {
        QualityTier::from_slider((self.factor / SLIDER_SCALE).round() as i32)
    }
}

impl Default for QualityConfig {
    /// Average boards: at least the mean score, floor enforced
    fn default() -> Self {
        Self::new(0.0)
    }
}

/// Human-facing quality category for a slider position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QualityTier {
    /// -5 and below
    Any,
    /// -4 to 5
    Average,
    /// 6 to 15
    Good,
    /// 16 to 25
    Great,
    /// 26 to 35
    Amazing,
    /// 36 to 45
    Pro,
    /// 46 and above
    Wtf,
}

impl QualityTier {
    #[must_use]
    pub const fn from_slider(position: i32) -> Self {
        if position <= -5 {
            Self::Any
        } else if position <= 5 {
            Self::Average
        } else if position <= 15 {
            Self::Good
        } else if position <= 25 {
            Self::Great
        } else if position <= 35 {
            Self::Amazing
        } else if position <= 45 {
            Self::Pro
        } else {
            Self::Wtf
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Any => "Any",
            Self::Average => "Average",
            Self::Good => "Good",
            Self::Great => "Great",
            Self::Amazing => "Amazing",
            Self::Pro => "Pro",
            Self::Wtf => "WTF",
        }
    }
}
