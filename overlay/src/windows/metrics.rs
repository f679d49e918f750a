//! Metrics viewer window.

use std::cell::RefCell;
use std::rc::Rc;

use cog_core::{DebugWindow, MetricsAggregator};

/// Shared, single-thread handle to the host's metrics aggregator.
pub type SharedMetrics = Rc<RefCell<MetricsAggregator>>;

/// Shows the per-stream totals and per-second rates accumulated by a
/// [`MetricsAggregator`] the host feeds from gameplay events.
pub struct MetricsWindow {
    metrics: SharedMetrics,
}

impl MetricsWindow {
    pub fn new(metrics: SharedMetrics) -> Self {
        Self { metrics }
    }
}

impl DebugWindow for MetricsWindow {
    fn render_help(&self, ui: &mut egui::Ui) {
        ui.label(
            "Totals and per-second rates for gameplay metric streams. A \
             stream starts timing at its first event and restarts after a \
             period of inactivity.",
        );
    }

    fn render_tick(&mut self, dt: f32) {
        self.metrics.borrow_mut().tick(dt);
    }

    fn render_content(&mut self, ui: &mut egui::Ui) {
        let mut metrics = self.metrics.borrow_mut();

        if metrics.server_only {
            ui.weak("Currently not available on client");
            return;
        }

        ui.horizontal(|ui| {
            ui.label("Max duration");
            ui.add(
                egui::DragValue::new(&mut metrics.max_duration)
                    .range(0.0..=3600.0)
                    .speed(1.0)
                    .suffix(" s"),
            );
        });
        ui.horizontal(|ui| {
            ui.label("Restart delay");
            ui.add(
                egui::DragValue::new(&mut metrics.restart_delay)
                    .range(0.0..=60.0)
                    .speed(0.1)
                    .suffix(" s"),
            );
        });
        if ui.button("Reset").clicked() {
            metrics.reset();
        }
        ui.separator();

        if metrics.is_empty() {
            ui.weak("No metric received yet");
            return;
        }

        for (name, stream) in metrics.sorted() {
            egui::CollapsingHeader::new(name)
                .default_open(true)
                .show(ui, |ui| {
                    egui::Grid::new(name).num_columns(3).show(ui, |ui| {
                        ui.label("");
                        ui.label("Total");
                        ui.label("Per second");
                        ui.end_row();

                        ui.label("Mitigated");
                        ui.label(format!("{:.0}", stream.total_mitigated));
                        ui.label(format!("{:.1}", stream.mitigated_per_second()));
                        ui.end_row();

                        ui.label("Unmitigated");
                        ui.label(format!("{:.0}", stream.total_unmitigated));
                        ui.label(format!("{:.1}", stream.unmitigated_per_second()));
                        ui.end_row();

                        ui.label("Mitigation");
                        ui.label(format!("{:.0}%", stream.mitigation_ratio() * 100.0));
                        ui.label("");
                        ui.end_row();

                        ui.label("Events");
                        ui.label(format!("{}", stream.event_count));
                        ui.label(format!("{} crits", stream.crit_count));
                        ui.end_row();

                        ui.label("Duration");
                        ui.label(format!("{:.1} s", stream.duration));
                        ui.label("");
                        ui.end_row();
                    });
                });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cog_core::{DebugWindow, MetricEvent, MetricsAggregator};

    fn shared() -> SharedMetrics {
        Rc::new(RefCell::new(MetricsAggregator::new()))
    }

    fn event(mitigated: f32, unmitigated: f32) -> MetricEvent {
        MetricEvent {
            mitigated,
            unmitigated,
            is_critical: false,
        }
    }

    /// Render one frame headless and collect all painted text.
    fn rendered_text(window: &mut MetricsWindow) -> String {
        let ctx = egui::Context::default();
        let output = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| window.render_content(ui));
        });

        output
            .shapes
            .iter()
            .filter_map(|clipped| match &clipped.shape {
                egui::epaint::Shape::Text(text) => Some(text.galley.text().to_string()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_render_tick_drives_the_aggregator() {
        let metrics = shared();
        metrics.borrow_mut().add_event("dps", event(0.0, 10.0));
        let mut window = MetricsWindow::new(Rc::clone(&metrics));

        window.render_tick(1.0);
        window.render_tick(1.0);
        assert_eq!(metrics.borrow().sorted()[0].1.duration, 2.0);
    }

    #[test]
    fn test_empty_aggregator_shows_placeholder() {
        let mut window = MetricsWindow::new(shared());
        let text = rendered_text(&mut window);
        assert!(text.contains("No metric received yet"));
    }

    #[test]
    fn test_streams_are_rendered() {
        let metrics = shared();
        metrics.borrow_mut().add_event("damage_dealt", event(50.0, 100.0));
        let mut window = MetricsWindow::new(metrics);

        let text = rendered_text(&mut window);
        assert!(text.contains("damage_dealt"));
        assert!(text.contains("Max duration"));
    }

    #[test]
    fn test_server_only_shows_inline_message() {
        let metrics = shared();
        metrics.borrow_mut().server_only = true;
        metrics.borrow_mut().add_event("damage_dealt", event(50.0, 100.0));
        let mut window = MetricsWindow::new(metrics);

        let text = rendered_text(&mut window);
        assert!(text.contains("Currently not available on client"));
        // Nothing else renders while the data lives server-side.
        assert!(!text.contains("damage_dealt"));
        assert!(!text.contains("Max duration"));
    }
}

