use std::collections::VecDeque;

use eframe::egui::{Align2, Color32, Context, FontId, Ui, vec2};

use super::super::particles::FrameStats;

const FPS_SAMPLE_WINDOW: usize = 180;

/// Rolling frame-rate readout for checking the particle pass stays inside the frame budget.
#[derive(Default)]
pub(in crate::app) struct FrameCounter {
    current: f32,
    samples: VecDeque<f32>,
    last_stats: FrameStats,
}

impl FrameCounter {
    pub(in crate::app) fn record(&mut self, ctx: &Context, stats: FrameStats) {
        self.last_stats = stats;
        let dt = ctx.input(|input| input.stable_dt);
        self.push_frame_time(dt);
    }

    fn push_frame_time(&mut self, dt: f32) {
        if dt <= f32::EPSILON {
            return;
        }

        self.current = (1.0 / dt).clamp(0.0, 1000.0);
        self.samples.push_back(self.current);
        while self.samples.len() > FPS_SAMPLE_WINDOW {
            self.samples.pop_front();
        }
    }

    fn display_text(&self) -> String {
        let mut parts = vec![format!("FPS {:.0}", self.current)];

        if !self.samples.is_empty() {
            let avg = self.samples.iter().sum::<f32>() / self.samples.len() as f32;
            parts.push(format!("avg {avg:.1}"));
        }
        if self.current > f32::EPSILON {
            parts.push(format!("{:.1} ms", 1000.0 / self.current));
        }
        parts.push(format!(
            "{} pairs / {} links",
            self.last_stats.pair_checks, self.last_stats.connections
        ));

        parts.join(" | ")
    }

    pub(in crate::app) fn draw(&self, ui: &Ui) {
        let rect = ui.max_rect();
        ui.painter().text(
            rect.right_top() + vec2(-12.0, 8.0),
            Align2::RIGHT_TOP,
            self.display_text(),
            FontId::monospace(12.0),
            Color32::from_rgba_unmultiplied(200, 210, 220, 180),
        );
    }
}
