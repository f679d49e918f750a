//! Gameplay metric aggregation (damage per second and friends).
//!
//! An explicitly owned, lifecycle-scoped aggregator: whoever needs to read or
//! reset metrics holds a handle to one instance, there is no process-wide
//! state. Events carry a mitigated and an unmitigated value; each named
//! stream accumulates totals and derives per-second rates over the time the
//! stream has been active.
//!
//! A stream starts timing at its first event, stops accumulating once
//! `max_duration` is reached, and restarts from zero when an event arrives
//! after `restart_delay` seconds of inactivity.

use hashbrown::HashMap;

/// One gameplay event fed into a metric stream.
#[derive(Debug, Clone, Copy, Default)]
pub struct MetricEvent {
    pub mitigated: f32,
    pub unmitigated: f32,
    pub is_critical: bool,
}

/// Accumulated state of one named metric.
#[derive(Debug, Clone, Default)]
pub struct MetricStream {
    pub total_mitigated: f32,
    pub total_unmitigated: f32,
    pub event_count: u32,
    pub crit_count: u32,
    /// Seconds the stream has been accumulating.
    pub duration: f32,
    /// Seconds since the last event.
    pub idle_time: f32,
    /// Whether the stream timer is currently advancing.
    pub active: bool,
}

impl MetricStream {
    pub fn mitigated_per_second(&self) -> f32 {
        per_second(self.total_mitigated, self.duration)
    }

    pub fn unmitigated_per_second(&self) -> f32 {
        per_second(self.total_unmitigated, self.duration)
    }

    /// Fraction of the unmitigated total that was mitigated away.
    pub fn mitigation_ratio(&self) -> f32 {
        if self.total_unmitigated <= 0.0 {
            return 0.0;
        }
        1.0 - self.total_mitigated / self.total_unmitigated
    }

    fn restart(&mut self) {
        *self = MetricStream::default();
    }
}

fn per_second(total: f32, duration: f32) -> f32 {
    if duration > 0.0 { total / duration } else { total }
}

/// Aggregator over named metric streams.
#[derive(Debug, Clone)]
pub struct MetricsAggregator {
    streams: HashMap<String, MetricStream>,
    /// Stream timers stop once they reach this duration (seconds).
    pub max_duration: f32,
    /// Inactivity after which the next event restarts a stream (seconds).
    pub restart_delay: f32,
    /// Set by the host when the underlying data only exists on the server.
    pub server_only: bool,
}

impl Default for MetricsAggregator {
    fn default() -> Self {
        Self {
            streams: HashMap::new(),
            max_duration: 0.0,
            restart_delay: 5.0,
            server_only: false,
        }
    }
}

impl MetricsAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an event on the named stream, creating it on first use.
    pub fn add_event(&mut self, name: &str, event: MetricEvent) {
        let stream = self.streams.entry_ref(name).or_default();

        if stream.active && self.restart_delay > 0.0 && stream.idle_time >= self.restart_delay {
            stream.restart();
        }

        stream.active = true;
        stream.idle_time = 0.0;
        stream.total_mitigated += event.mitigated;
        stream.total_unmitigated += event.unmitigated;
        stream.event_count += 1;
        if event.is_critical {
            stream.crit_count += 1;
        }
    }

    /// Advance active stream timers.
    pub fn tick(&mut self, dt: f32) {
        for stream in self.streams.values_mut() {
            if !stream.active {
                continue;
            }

            stream.idle_time += dt;

            if self.max_duration > 0.0 && stream.duration >= self.max_duration {
                continue;
            }
            stream.duration += dt;
        }
    }

    pub fn reset(&mut self) {
        self.streams.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.streams.is_empty()
    }

    /// Streams sorted by name for stable display.
    pub fn sorted(&self) -> Vec<(&str, &MetricStream)> {
        let mut entries: Vec<(&str, &MetricStream)> = self
            .streams
            .iter()
            .map(|(name, stream)| (name.as_str(), stream))
            .collect();
        entries.sort_by_key(|(name, _)| *name);
        entries
    }
}
