use serde::Deserialize;

/// Intersection settings for the timeline fade-in.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct RevealOptions {
    /// Visible fraction of an entry required before it is revealed.
    pub threshold: f64,
    /// How far the bottom of the viewport is pulled in, delaying the reveal.
    pub bottom_inset_px: f64,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: 0.3,
            bottom_inset_px: 100.0,
        }
    }
}

impl RevealOptions {
    pub fn threshold(&self) -> f64 {
        if self.threshold.is_nan() {
            return Self::default().threshold;
        }
        self.threshold.clamp(0.0, 1.0)
    }

    /// CSS margin for the observer root, e.g. `"0px 0px -100px 0px"`.
    pub fn root_margin(&self) -> String {
        let bottom = if self.bottom_inset_px.is_finite() && self.bottom_inset_px != 0.0 {
            -self.bottom_inset_px
        } else {
            0.0
        };
        format!("0px 0px {bottom}px 0px")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_delayed_reveal() {
        let options = RevealOptions::default();
        assert_eq!(options.threshold(), 0.3);
        assert_eq!(options.root_margin(), "0px 0px -100px 0px");
    }

    #[test]
    fn threshold_is_clamped() {
        let high = RevealOptions { threshold: 1.5, ..Default::default() };
        let low = RevealOptions { threshold: -0.2, ..Default::default() };
        let nan = RevealOptions { threshold: f64::NAN, ..Default::default() };
        assert_eq!(high.threshold(), 1.0);
        assert_eq!(low.threshold(), 0.0);
        assert_eq!(nan.threshold(), 0.3);
    }

    #[test]
    fn zero_inset() {
        let options = RevealOptions { bottom_inset_px: 0.0, ..Default::default() };
        assert_eq!(options.root_margin(), "0px 0px 0px 0px");
    }
}
