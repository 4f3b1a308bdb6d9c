//! Scrolling waveform plot for streamed monitor samples

pub mod buffer;
pub mod demo;
pub mod view;

pub use buffer::{polyline_points, WaveformBuffer, WaveformMetrics, STREAM_WINDOW_MS, VIEWABLE_SAMPLES};
pub use view::WaveformView;
