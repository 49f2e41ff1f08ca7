//! Pure dimension state for the resize form.
//!
//! [`DimensionModel`] keeps target width, target height, and the aspect-ratio
//! lock consistent. No I/O, no pixels — everything here is testable with
//! plain numbers.
//!
//! Two anchoring rules worth knowing:
//!
//! - **Manual edits** derive the other dimension from the *captured* aspect
//!   ratio, which is re-anchored to the source dimensions whenever the lock
//!   is turned on. Toggling the lock therefore snaps drifted edits back to
//!   the source ratio.
//! - **Preset scales** always derive from the original source dimensions,
//!   regardless of lock state or prior manual edits.
//!
//! The asymmetry between those two rules is deliberate, observed UI behavior.

/// Width/height/aspect-lock state for one loaded source image.
///
/// Rounding is `f64::round` (half away from zero) throughout. No minimum is
/// enforced — a target of 0 is stored as-is; validating user input is the
/// collaborator's job.
#[derive(Debug, Clone, PartialEq)]
pub struct DimensionModel {
    source_width: u32,
    source_height: u32,
    target_width: u32,
    target_height: u32,
    aspect_ratio: f64,
    lock_aspect: bool,
}

impl DimensionModel {
    /// Initialize from a freshly decoded source image.
    ///
    /// Targets default to 50% of the source, the aspect ratio is captured
    /// from the source, and the lock starts enabled.
    ///
    /// Caller guarantees both dimensions are positive (they come from a
    /// successfully decoded bitmap).
    ///
    /// # Examples
    /// ```
    /// # use pixelfit::dimensions::DimensionModel;
    /// let dims = DimensionModel::new(1200, 900);
    /// assert_eq!(dims.target_width(), 600);
    /// assert_eq!(dims.target_height(), 450);
    /// assert!(dims.lock_aspect());
    /// ```
    pub fn new(source_width: u32, source_height: u32) -> Self {
        Self {
            source_width,
            source_height,
            target_width: scale_round(source_width, 0.5),
            target_height: scale_round(source_height, 0.5),
            aspect_ratio: source_width as f64 / source_height as f64,
            lock_aspect: true,
        }
    }

    pub fn source_width(&self) -> u32 {
        self.source_width
    }

    pub fn source_height(&self) -> u32 {
        self.source_height
    }

    pub fn target_width(&self) -> u32 {
        self.target_width
    }

    pub fn target_height(&self) -> u32 {
        self.target_height
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.aspect_ratio
    }

    pub fn lock_aspect(&self) -> bool {
        self.lock_aspect
    }

    /// Enable or disable the aspect lock.
    ///
    /// Enabling re-anchors the ratio to the *source* dimensions, not the
    /// current target box — prior unlocked edits don't carry their drift
    /// into the locked ratio.
    pub fn set_lock_aspect(&mut self, enabled: bool) {
        self.lock_aspect = enabled;
        if enabled {
            self.aspect_ratio = self.source_width as f64 / self.source_height as f64;
        }
    }

    /// Set the target width; with the lock on, height follows.
    pub fn set_width(&mut self, value: u32) {
        self.target_width = value;
        if self.lock_aspect {
            self.target_height = (value as f64 / self.aspect_ratio).round() as u32;
        }
    }

    /// Set the target height; with the lock on, width follows.
    pub fn set_height(&mut self, value: u32) {
        self.target_height = value;
        if self.lock_aspect {
            self.target_width = (value as f64 * self.aspect_ratio).round() as u32;
        }
    }

    /// Apply a preset multiplier to the *source* dimensions.
    ///
    /// Ignores the lock state and any prior manual edits. Caller guarantees
    /// `scale > 0`.
    ///
    /// # Examples
    /// ```
    /// # use pixelfit::dimensions::DimensionModel;
    /// let mut dims = DimensionModel::new(1000, 800);
    /// dims.apply_preset_scale(0.5);
    /// assert_eq!(dims.target_width(), 500);
    /// assert_eq!(dims.target_height(), 400);
    /// ```
    pub fn apply_preset_scale(&mut self, scale: f64) {
        self.target_width = scale_round(self.source_width, scale);
        self.target_height = scale_round(self.source_height, scale);
    }
}

fn scale_round(value: u32, scale: f64) -> u32 {
    (value as f64 * scale).round() as u32
}
