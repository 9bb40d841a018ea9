/// User-adjustable preferences, persisted by an external store as JSON.
///
/// Every field is individually defaulted so a partial or stale document still
/// loads; `clamped` coerces out-of-range values to the nearest bound rather
/// than rejecting them.

use serde::{Deserialize, Serialize};

pub const WORK_MINUTES_MIN: u32 = 1;
pub const WORK_MINUTES_MAX: u32 = 60;
pub const BREAK_MINUTES_MIN: u32 = 1;
pub const BREAK_MINUTES_MAX: u32 = 30;
pub const STAR_DENSITY_MAX: u32 = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub work_minutes: u32,
    pub break_minutes: u32,
    pub show_orbits: bool,
    pub star_density: u32,
    pub background_music: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            work_minutes: 25,
            break_minutes: 5,
            show_orbits: true,
            star_density: 100,
            background_music: false,
        }
    }
}

impl Settings {
    /// Coerce every field into its documented range.
    pub fn clamped(mut self) -> Self {
        self.work_minutes = self.work_minutes.clamp(WORK_MINUTES_MIN, WORK_MINUTES_MAX);
        self.break_minutes = self.break_minutes.clamp(BREAK_MINUTES_MIN, BREAK_MINUTES_MAX);
        self.star_density = self.star_density.min(STAR_DENSITY_MAX);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_contract() {
        let s = Settings::default();
        assert_eq!(s.work_minutes, 25);
        assert_eq!(s.break_minutes, 5);
        assert!(s.show_orbits);
        assert_eq!(s.star_density, 100);
        assert!(!s.background_music);
    }

    #[test]
    fn clamped_coerces_to_bounds() {
        let s = Settings {
            work_minutes: 0,
            break_minutes: 400,
            star_density: 5000,
            ..Settings::default()
        }
        .clamped();
        assert_eq!(s.work_minutes, WORK_MINUTES_MIN);
        assert_eq!(s.break_minutes, BREAK_MINUTES_MAX);
        assert_eq!(s.star_density, STAR_DENSITY_MAX);
    }

    #[test]
    fn clamped_leaves_valid_values_alone() {
        let s = Settings::default().clamped();
        assert_eq!(s, Settings::default());
    }

    #[test]
    fn json_round_trip() {
        let s = Settings {
            work_minutes: 40,
            break_minutes: 10,
            show_orbits: false,
            star_density: 30,
            background_music: true,
        };
        let json = serde_json::to_string(&s).unwrap();
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(back, s);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let back: Settings = serde_json::from_str(r#"{"work_minutes": 50}"#).unwrap();
        assert_eq!(back.work_minutes, 50);
        assert_eq!(back.break_minutes, 5);
        assert_eq!(back.star_density, 100);
    }
}
