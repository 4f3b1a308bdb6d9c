use serde::{Deserialize, Serialize};

/// One waveform observation pushed by a bedside monitor
///
/// `data` holds space-separated integer samples.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaveformObservation {
    pub data: String,
    #[serde(rename = "data-baseline")]
    pub baseline: i64,
    #[serde(rename = "data-high-limit")]
    pub high_limit: i64,
    #[serde(rename = "data-low-limit")]
    pub low_limit: i64,
    #[serde(rename = "date-time")]
    pub date_time: String,
    pub device_id: String,
    #[serde(rename = "patient-id")]
    pub patient_id: i64,
    #[serde(rename = "patient-name")]
    pub patient_name: String,
    pub resolution: String,
    #[serde(rename = "sampling rate")]
    pub sampling_rate: String,
    #[serde(rename = "wave-name")]
    pub wave_name: String,
}

impl WaveformObservation {
    /// Parsed samples; tokens that are not integers are skipped
    pub fn samples(&self) -> Vec<i64> {
        self.data
            .split_whitespace()
            .filter_map(|s| s.parse::<i64>().ok())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_samples_skip_garbage() {
        let json = r#"{
            "data": "1 2 x 3",
            "data-baseline": 0,
            "data-high-limit": 10,
            "data-low-limit": -10,
            "date-time": "2022-09-01 10:00:00",
            "device_id": "dev-1",
            "patient-id": 7,
            "patient-name": "John",
            "resolution": "1uV",
            "sampling rate": "250/sec",
            "wave-name": "II"
        }"#;
        let obs: WaveformObservation = serde_json::from_str(json).unwrap();
        assert_eq!(obs.samples(), vec![1, 2, 3]);
        assert_eq!(obs.sampling_rate, "250/sec");
    }
}
