//! Data models for extracted buoy observations

use serde::{Deserialize, Serialize};

/// A normalized observation extracted from a buoy feed
///
/// Measurement fields are optional because feeds frequently report only a
/// subset of instruments; zero is a legitimate reading and is never used to
/// signal absence. An `Observation` is only constructed when at least one
/// measurement is present (see [`Observation::assemble`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Sea-surface temperature in Celsius
    #[serde(rename = "sstC", skip_serializing_if = "Option::is_none")]
    pub sst_c: Option<f64>,

    /// Significant wave height in meters
    #[serde(rename = "waveM", skip_serializing_if = "Option::is_none")]
    pub wave_m: Option<f64>,

    /// Observation time as UTC epoch milliseconds
    ///
    /// Always present. Defaults to the wall-clock time at parse invocation
    /// when the feed carries no parseable date, so its presence says nothing
    /// about whether a real date was found.
    pub ts: i64,
}

impl Observation {
    /// Assemble an observation from optional measurement slots
    ///
    /// Returns `None` when neither slot is filled: the timestamp alone is
    /// never enough to emit an observation.
    pub fn assemble(sst_c: Option<f64>, wave_m: Option<f64>, ts: i64) -> Option<Self> {
        if sst_c.is_none() && wave_m.is_none() {
            return None;
        }
        Some(Observation { sst_c, wave_m, ts })
    }

    /// Check whether both measurement slots are filled
    pub fn is_complete(&self) -> bool {
        self.sst_c.is_some() && self.wave_m.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assemble_requires_a_measurement() {
        assert!(Observation::assemble(None, None, 1_700_000_000_000).is_none());

        let obs = Observation::assemble(Some(14.5), None, 1_700_000_000_000).unwrap();
        assert_eq!(obs.sst_c, Some(14.5));
        assert_eq!(obs.wave_m, None);
        assert!(!obs.is_complete());
    }

    #[test]
    fn test_zero_is_a_valid_measurement() {
        let obs = Observation::assemble(Some(0.0), Some(0.0), 0).unwrap();
        assert_eq!(obs.sst_c, Some(0.0));
        assert_eq!(obs.wave_m, Some(0.0));
        assert!(obs.is_complete());
    }

    #[test]
    fn test_json_shape() {
        let obs = Observation {
            sst_c: Some(14.5),
            wave_m: None,
            ts: 1_673_784_000_000,
        };

        let json = serde_json::to_string(&obs).unwrap();
        assert_eq!(json, r#"{"sstC":14.5,"ts":1673784000000}"#);

        let roundtrip: Observation = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, obs);
    }
}
