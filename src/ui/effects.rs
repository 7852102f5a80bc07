use eframe::egui::{Align2, Color32, FontId, Painter, Pos2, vec2};

use crate::config::BURST;
use crate::ui::config::UI_CONFIG;
use crate::utils::app_time::{AppInstant, elapsed_between};
use crate::utils::maths_utils::{ease_out_cubic, lerp, unit_hash};

const GLYPHS: [&str; 3] = ["♥", "✿", "✧"];

/// A one-off burst of hearts from the point the reveal surface was clicked.
pub struct HeartBurst {
    origin: Pos2,
    started_at: AppInstant,
}

impl HeartBurst {
    pub fn new(origin: Pos2, started_at: AppInstant) -> Self {
        Self { origin, started_at }
    }

    fn age(&self, now: AppInstant) -> f32 {
        elapsed_between(self.started_at, now).as_secs_f32()
    }

    pub fn is_finished(&self, now: AppInstant) -> bool {
        self.age(now) >= BURST.lifetime_secs
    }

    pub fn paint(&self, painter: &Painter, now: AppInstant) {
        let t = (self.age(now) / BURST.lifetime_secs).clamp(0.0, 1.0);
        let travel = ease_out_cubic(t);
        let alpha = ((1.0 - t) * 255.0) as u8;

        for i in 0..BURST.particle_count {
            let seed = i as u32;
            let dx = (unit_hash(seed) - 0.5) * BURST.spread;
            let rise = BURST.rise * (0.6 + 0.4 * unit_hash(seed + 1000));
            let size = lerp(BURST.min_size, BURST.max_size, unit_hash(seed + 2000));

            let pos = self.origin + vec2(dx * travel, -rise * travel);
            let base = if i % 2 == 0 {
                UI_CONFIG.colors.soft_pink
            } else {
                UI_CONFIG.colors.blush
            };
            let color = Color32::from_rgba_unmultiplied(base.r(), base.g(), base.b(), alpha);

            painter.text(
                pos,
                Align2::CENTER_CENTER,
                GLYPHS[i % GLYPHS.len()],
                FontId::proportional(size),
                color,
            );
        }
    }
}
