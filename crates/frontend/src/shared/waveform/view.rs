use care_contracts::shared::telemetry::WaveformObservation;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

use super::buffer::{polyline_points, WaveformBuffer, VIEWABLE_SAMPLES};

const PLOT_WIDTH: f64 = 800.0;
const PLOT_HEIGHT: f64 = 90.0;
/// Poll interval while no stream has arrived yet
const IDLE_POLL_MS: u32 = 250;

#[component]
pub fn WaveformView(
    #[prop(into)] observation: Signal<Option<WaveformObservation>>,
    #[prop(into)] title: String,
    #[prop(optional, into)] color: MaybeProp<String>,
    /// Show the metrics row under the plot
    #[prop(optional)]
    metrics: bool,
) -> impl IntoView {
    let buffer = RwSignal::new(WaveformBuffer::default());
    let sampling_rate = RwSignal::new(String::new());
    let seconds_since_stream = RwSignal::new(0u32);

    Effect::new(move |_| {
        if let Some(obs) = observation.get() {
            let samples = obs.samples();
            log::debug!("waveform '{}': {} new samples", obs.wave_name, samples.len());
            buffer.update(|b| b.push_stream(&samples));
            sampling_rate.set(obs.sampling_rate);
            seconds_since_stream.set(0);
        }
    });

    // Playback loop; ends once the component is disposed
    wasm_bindgen_futures::spawn_local(async move {
        loop {
            let Some(interval) = buffer.try_with_untracked(|b| b.frame_interval_ms()) else {
                break;
            };
            match interval {
                Some(ms) => {
                    TimeoutFuture::new(ms.max(1.0) as u32).await;
                    if buffer.try_update(|b| b.tick()).is_none() {
                        break;
                    }
                }
                None => TimeoutFuture::new(IDLE_POLL_MS).await,
            }
        }
    });

    wasm_bindgen_futures::spawn_local(async move {
        loop {
            TimeoutFuture::new(1000).await;
            if seconds_since_stream.try_update(|s| *s += 1).is_none() {
                break;
            }
        }
    });

    let points = move || {
        buffer.with(|b| match b.range() {
            Some(range) => polyline_points(&b.visible(), VIEWABLE_SAMPLES, PLOT_WIDTH, PLOT_HEIGHT, range),
            None => String::new(),
        })
    };
    let stroke = move || color.get().unwrap_or_else(|| "green".to_string());

    view! {
        <div class="waveform">
            <div class="waveform__title">{title}</div>
            <svg
                class="waveform__plot"
                viewBox=format!("0 0 {} {}", PLOT_WIDTH, PLOT_HEIGHT)
                preserveAspectRatio="none"
            >
                <polyline points=points fill="none" stroke=stroke stroke-width="1.5" />
            </svg>
            <Show when=move || metrics>
                {move || {
                    let m = buffer.with(|b| b.metrics());
                    let fmt = |v: Option<i64>| v.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string());
                    view! {
                        <div class="waveform__metrics">
                            <span>"Lowest: " {fmt(m.lowest)}</span>
                            <span>"Highest: " {fmt(m.highest)}</span>
                            <span>"Stream Length: " {m.stream_length}</span>
                            <span>"Buffer Length: " {m.buffer_length}</span>
                            <span>{format!("Flow Rate: {:.2} ms", m.flow_rate_ms)}</span>
                            <span>"Sampling Rate: " {move || sampling_rate.get()}</span>
                            <span>{format!("Lag: {:.2} sec", m.lag_seconds)}</span>
                            <span>"Last response: " {move || seconds_since_stream.get()} " sec ago"</span>
                        </div>
                    }
                }}
                <Show when=move || buffer.with(|b| b.has_backlog())>
                    <button
                        type="button"
                        class="waveform__clear"
                        on:click=move |_| buffer.update(|b| b.clear_backlog())
                    >
                        "Clear Buffer"
                    </button>
                </Show>
            </Show>
        </div>
    }
}
