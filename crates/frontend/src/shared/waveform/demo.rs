use care_contracts::shared::telemetry::WaveformObservation;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

use super::view::WaveformView;

/// Samples per simulated observation
pub const DEMO_STREAM_LENGTH: usize = 250;
const DEMO_BASELINE: i64 = 2048;

/// One second of a synthetic ECG-like trace, phase-shifted by `tick`
pub fn synthetic_observation(tick: u32, len: usize) -> WaveformObservation {
    let data = (0..len)
        .map(|i| {
            let phase = (i + tick as usize * len) % 200;
            let beat = match phase {
                40..=44 => 900 - (phase as i64 - 42).abs() * 300,
                45..=49 => -250,
                90..=130 => {
                    let t = (phase - 90) as f64 / 40.0;
                    ((t * std::f64::consts::PI).sin() * 150.0) as i64
                }
                _ => 0,
            };
            (DEMO_BASELINE + beat).to_string()
        })
        .collect::<Vec<_>>()
        .join(" ");
    WaveformObservation {
        data,
        baseline: DEMO_BASELINE,
        high_limit: 4095,
        low_limit: 0,
        date_time: chrono::Utc::now().to_rfc3339(),
        device_id: "demo-monitor".to_string(),
        patient_id: 0,
        patient_name: "Demo".to_string(),
        resolution: "1uV".to_string(),
        sampling_rate: format!("{}/sec", len),
        wave_name: "II".to_string(),
    }
}

/// Waveform fed by a simulated monitor pushing one observation per second
#[component]
pub fn WaveformDemo() -> impl IntoView {
    let observation = RwSignal::new(None::<WaveformObservation>);
    let running = RwSignal::new(true);

    wasm_bindgen_futures::spawn_local(async move {
        let mut tick = 0u32;
        loop {
            match running.try_get_untracked() {
                None => break,
                Some(true) => {
                    let obs = synthetic_observation(tick, DEMO_STREAM_LENGTH);
                    if observation.try_set(Some(obs)).is_some() {
                        break;
                    }
                    tick = tick.wrapping_add(1);
                }
                Some(false) => {}
            }
            TimeoutFuture::new(1000).await;
        }
    });

    view! {
        <div class="page waveform-demo">
            <h2 class="page__title">"Waveform"</h2>
            <button
                type="button"
                class="button button--secondary"
                on:click=move |_| running.update(|r| *r = !*r)
            >
                {move || if running.get() { "Pause Stream" } else { "Resume Stream" }}
            </button>
            <WaveformView
                observation=observation
                title="II"
                color="green"
                metrics=true
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synthetic_observation_parses_back() {
        let obs = synthetic_observation(3, DEMO_STREAM_LENGTH);
        let samples = obs.samples();
        assert_eq!(samples.len(), DEMO_STREAM_LENGTH);
        assert!(samples.iter().any(|s| *s > DEMO_BASELINE));
        assert_eq!(obs.sampling_rate, "250/sec");
    }
}
