use crate::LinearModel;
use crate::seasonality::{SeasonalitySettings, Toggle};

/// Builder for [`LinearModel`].
///
/// Every seasonality starts in [`Toggle::Auto`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearModelBuilder {
    seasonality: SeasonalitySettings,
}

impl LinearModelBuilder {
    /// Create a builder with automatic seasonality detection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Force the yearly seasonality on or off.
    #[must_use]
    pub const fn yearly_seasonality(mut self, toggle: Toggle) -> Self {
        self.seasonality.yearly = toggle;
        self
    }

    /// Force the weekly seasonality on or off.
    #[must_use]
    pub const fn weekly_seasonality(mut self, toggle: Toggle) -> Self {
        self.seasonality.weekly = toggle;
        self
    }

    /// Force the daily seasonality on or off.
    #[must_use]
    pub const fn daily_seasonality(mut self, toggle: Toggle) -> Self {
        self.seasonality.daily = toggle;
        self
    }

    /// Build the model.
    #[must_use]
    pub const fn build(self) -> LinearModel {
        LinearModel {
            seasonality: self.seasonality,
        }
    }
}

impl LinearModel {
    /// Returns a builder with automatic seasonality detection.
    #[must_use]
    pub fn builder() -> LinearModelBuilder {
        LinearModelBuilder::new()
    }
}
