//! Breathing exercise states.
//!
//! A [`State`] is one timed segment of the exercise: a kind, a background
//! color and a duration in seconds. The loadable states come from the data
//! file; the `Initial` and `Default` bookends are built in.

use serde::{Deserialize, Deserializer, Serialize};

use crate::color::Rgb;

/// Kind of a breathing state.
///
/// Wire names match the `type` field of the data file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StateKind {
    /// Resting state shown between runs.
    #[serde(rename = "tap to breathe")]
    Default,
    #[serde(rename = "")]
    Initial,
    #[serde(rename = "inhale")]
    Inhale,
    #[serde(rename = "exhale")]
    Exhale,
    #[serde(rename = "hold")]
    Hold,
}

impl StateKind {
    /// Display title: the uppercased wire name.
    pub fn title(self) -> &'static str {
        match self {
            StateKind::Default => "TAP TO BREATHE",
            StateKind::Initial => "",
            StateKind::Inhale => "INHALE",
            StateKind::Exhale => "EXHALE",
            StateKind::Hold => "HOLD",
        }
    }

    /// Target scale factor for the visual transition.
    ///
    /// `Hold` keeps the current scale; its duration is a bare timed pause.
    pub fn scale(self) -> Option<f64> {
        match self {
            StateKind::Default => Some(1.0),
            StateKind::Initial => Some(0.75),
            StateKind::Inhale => Some(1.0),
            StateKind::Exhale => Some(0.5),
            StateKind::Hold => None,
        }
    }

    /// True for the kinds counted toward the session's breathe duration.
    pub fn is_breathe(self) -> bool {
        matches!(self, StateKind::Inhale | StateKind::Exhale | StateKind::Hold)
    }
}

/// One timed segment of the breathing exercise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct State {
    #[serde(rename = "type")]
    pub kind: StateKind,
    pub color: Rgb,
    /// Seconds. Finite and non-negative, enforced when decoding.
    #[serde(deserialize_with = "non_negative_secs")]
    pub duration: f64,
}

impl State {
    /// Bookend prepended before the loaded states.
    pub fn initial_state() -> Self {
        Self {
            kind: StateKind::Initial,
            color: Rgb::YELLOW,
            duration: 1.0,
        }
    }

    /// Bookend appended after the loaded states.
    pub fn default_state() -> Self {
        Self {
            kind: StateKind::Default,
            color: Rgb::RED,
            duration: 1.0,
        }
    }

    /// Duration truncated to whole seconds, as tracked by the countdown.
    pub fn duration_secs(&self) -> u64 {
        self.duration as u64
    }
}

fn non_negative_secs<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = f64::deserialize(deserializer)?;
    if !value.is_finite() || value < 0.0 {
        return Err(serde::de::Error::custom(format!(
            "duration must be a non-negative number of seconds, got {value}"
        )));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_wire_names() {
        let state: State =
            serde_json::from_str(r##"{"type": "inhale", "color": "#00FF00", "duration": 4}"##)
                .unwrap();
        assert_eq!(state.kind, StateKind::Inhale);
        assert_eq!(state.color, Rgb { r: 0, g: 255, b: 0 });
        assert_eq!(state.duration, 4.0);

        let resting: State = serde_json::from_str(
            r##"{"type": "tap to breathe", "color": "#FF0000", "duration": 1}"##,
        )
        .unwrap();
        assert_eq!(resting.kind, StateKind::Default);

        let initial: State =
            serde_json::from_str(r##"{"type": "", "color": "#FFFF00", "duration": 1}"##).unwrap();
        assert_eq!(initial.kind, StateKind::Initial);
    }

    #[test]
    fn rejects_unknown_kind_and_bad_duration() {
        assert!(serde_json::from_str::<State>(
            r##"{"type": "gasp", "color": "#00FF00", "duration": 4}"##
        )
        .is_err());
        assert!(serde_json::from_str::<State>(
            r##"{"type": "inhale", "color": "#00FF00", "duration": -1}"##
        )
        .is_err());
        assert!(serde_json::from_str::<State>(
            r##"{"type": "inhale", "color": "nope", "duration": 4}"##
        )
        .is_err());
    }

    #[test]
    fn titles_are_uppercased_wire_names() {
        assert_eq!(StateKind::Default.title(), "TAP TO BREATHE");
        assert_eq!(StateKind::Initial.title(), "");
        assert_eq!(StateKind::Inhale.title(), "INHALE");
        assert_eq!(StateKind::Exhale.title(), "EXHALE");
        assert_eq!(StateKind::Hold.title(), "HOLD");
    }

    #[test]
    fn scale_targets() {
        assert_eq!(StateKind::Default.scale(), Some(1.0));
        assert_eq!(StateKind::Initial.scale(), Some(0.75));
        assert_eq!(StateKind::Inhale.scale(), Some(1.0));
        assert_eq!(StateKind::Exhale.scale(), Some(0.5));
        assert_eq!(StateKind::Hold.scale(), None);
    }

    #[test]
    fn breathe_kinds() {
        assert!(StateKind::Inhale.is_breathe());
        assert!(StateKind::Exhale.is_breathe());
        assert!(StateKind::Hold.is_breathe());
        assert!(!StateKind::Default.is_breathe());
        assert!(!StateKind::Initial.is_breathe());
    }

    #[test]
    fn bookend_constants() {
        let initial = State::initial_state();
        assert_eq!(initial.kind, StateKind::Initial);
        assert_eq!(initial.color, Rgb::YELLOW);
        assert_eq!(initial.duration, 1.0);

        let resting = State::default_state();
        assert_eq!(resting.kind, StateKind::Default);
        assert_eq!(resting.color, Rgb::RED);
        assert_eq!(resting.duration, 1.0);
    }

    #[test]
    fn duration_truncates_to_whole_seconds() {
        let state: State =
            serde_json::from_str(r##"{"type": "hold", "color": "#000000", "duration": 4.9}"##)
                .unwrap();
        assert_eq!(state.duration_secs(), 4);
    }
}
