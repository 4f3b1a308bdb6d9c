use std::collections::VecDeque;

/// Samples on screen at once
pub const VIEWABLE_SAMPLES: usize = 400;
/// Time one incoming stream chunk takes to play back
pub const STREAM_WINDOW_MS: f64 = 4000.0;

#[derive(Debug, Clone, PartialEq)]
pub struct WaveformMetrics {
    pub lowest: Option<i64>,
    pub highest: Option<i64>,
    pub stream_length: usize,
    pub buffer_length: usize,
    /// Milliseconds between two advanced samples
    pub flow_rate_ms: f64,
    /// Seconds of queued samples beyond the visible window
    pub lag_seconds: f64,
}

/// Queue of pending samples played back at the stream's own pace
///
/// Every chunk pushed is appended; [`WaveformBuffer::tick`] drops the
/// oldest sample, so the visible window scrolls by one.
#[derive(Debug, Clone)]
pub struct WaveformBuffer {
    queue: VecDeque<i64>,
    stream_length: usize,
    viewable: usize,
}

impl Default for WaveformBuffer {
    fn default() -> Self {
        Self::new(VIEWABLE_SAMPLES)
    }
}

impl WaveformBuffer {
    pub fn new(viewable: usize) -> Self {
        Self {
            queue: VecDeque::new(),
            stream_length: 0,
            viewable: viewable.max(1),
        }
    }

    pub fn push_stream(&mut self, samples: &[i64]) {
        self.stream_length = samples.len();
        self.queue.extend(samples.iter().copied());
    }

    /// Delay until the next [`tick`](Self::tick); `None` before any data
    pub fn frame_interval_ms(&self) -> Option<f64> {
        (self.stream_length > 0).then(|| STREAM_WINDOW_MS / self.stream_length as f64)
    }

    /// Advance by one sample; returns false when the queue is empty
    pub fn tick(&mut self) -> bool {
        self.queue.pop_front().is_some()
    }

    pub fn visible(&self) -> Vec<i64> {
        self.queue.iter().take(self.viewable).copied().collect()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn has_backlog(&self) -> bool {
        self.queue.len() > self.viewable
    }

    /// Drop the backlog, keeping only the newest window
    pub fn clear_backlog(&mut self) {
        let excess = self.queue.len().saturating_sub(self.viewable);
        self.queue.drain(..excess);
    }

    /// Vertical range over the whole queue, so the plot does not rescale
    /// on every tick
    pub fn range(&self) -> Option<(i64, i64)> {
        let min = self.queue.iter().min()?;
        let max = self.queue.iter().max()?;
        Some((*min, *max))
    }

    pub fn metrics(&self) -> WaveformMetrics {
        let flow_rate_ms = self.frame_interval_ms().unwrap_or(0.0);
        let window = self.queue.iter().take(self.viewable);
        let backlog = self.queue.len().saturating_sub(self.viewable);
        WaveformMetrics {
            lowest: window.clone().min().copied(),
            highest: window.max().copied(),
            stream_length: self.stream_length,
            buffer_length: self.queue.len(),
            flow_rate_ms,
            lag_seconds: flow_rate_ms * backlog as f64 / 1000.0,
        }
    }
}

/// SVG `points` for `samples` scaled into a `width` x `height` box
///
/// Sample `i` sits at `x = i * width / (viewable - 1)`; the value range maps
/// onto the full height with larger values on top.
pub fn polyline_points(
    samples: &[i64],
    viewable: usize,
    width: f64,
    height: f64,
    range: (i64, i64),
) -> String {
    let (low, high) = range;
    let span = (high - low) as f64;
    let step = width / (viewable.max(2) - 1) as f64;
    samples
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            let y = if span == 0.0 {
                height / 2.0
            } else {
                height - (v - low) as f64 / span * height
            };
            format!("{:.1},{:.1}", i as f64 * step, y)
        })
        .collect::<Vec<_>>()
        .join(" ")
}
