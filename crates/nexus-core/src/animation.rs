//! The per-frame step: advance time, age every particle and glyph, paint.

use crate::config::NexusConfig;
use crate::field::{draw_glyph_opacity, wrap, Field};
use crate::paint::{glyph_color, particle_color, particle_twinkle, phase_cos, phase_sin, Painter};
use crate::sizing::SurfaceSize;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    Painted,
    /// Page hidden: nothing mutated, nothing drawn.
    Skipped,
}

pub struct Animator<P: Painter, R: Rng> {
    field: Field,
    painter: P,
    rng: R,
    config: NexusConfig,
    time: f64,
    frames_painted: u64,
}

impl<P: Painter, R: Rng> Animator<P, R> {
    pub fn new(field: Field, painter: P, rng: R, config: NexusConfig) -> Self {
        Self {
            field,
            painter,
            rng,
            config,
            time: 0.0,
            frames_painted: 0,
        }
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn frames_painted(&self) -> u64 {
        self.frames_painted
    }

    pub fn painter(&self) -> &P {
        &self.painter
    }

    pub fn config(&self) -> &NexusConfig {
        &self.config
    }

    /// Resize the surface and regenerate the field for it. The new field is
    /// complete before it replaces the old one; the old one is returned.
    pub fn rebuild(&mut self, size: SurfaceSize, viewport_width: f64) -> Field {
        self.painter.resize(size);
        let field = Field::build(size, viewport_width, &self.config, &mut self.rng);
        self.replace_field(field)
    }

    /// Swap in a fully built field. The time accumulator carries over so the
    /// colour drift does not jump on resize.
    pub fn replace_field(&mut self, field: Field) -> Field {
        std::mem::replace(&mut self.field, field)
    }

    pub fn step(&mut self, visible: bool) -> StepOutcome {
        if !visible {
            return StepOutcome::Skipped;
        }

        // Trail: composite a translucent wash instead of clearing.
        self.painter.fade(self.config.trail_fade);

        self.time += self.config.time_step;
        let time = self.time;
        let height = self.field.size.height_f32();
        let width = self.field.size.width_f32();
        let margin = self.config.glyph_margin;
        let font_px = self.field.font_px;

        for lane in &mut self.field.lanes {
            for (index, glyph) in lane.glyphs.iter_mut().enumerate() {
                glyph.y += lane.speed;
                if glyph.y > height + margin {
                    glyph.y = -margin;
                    glyph.opacity = draw_glyph_opacity(&mut self.rng, &self.config);
                }
                self.painter.glyph(
                    glyph.symbol,
                    lane.x,
                    glyph.y,
                    font_px,
                    glyph_color(time, index),
                    glyph.opacity * self.config.rain_opacity,
                );
            }
        }

        let drift = self.config.particle_drift_amplitude;
        for (index, particle) in self.field.particles.iter_mut().enumerate() {
            let i = index as f64;
            let drift_x = phase_sin(time, 0.3, i * 0.1) * drift;
            let drift_y = phase_cos(time, 0.3, i * 0.15) * drift;
            particle.position.x = wrap(particle.position.x + particle.velocity.x + drift_x, width);
            particle.position.y = wrap(particle.position.y + particle.velocity.y + drift_y, height);

            self.painter.dot(
                particle.position.x,
                particle.position.y,
                particle.radius,
                particle_color(time, index),
                particle.opacity * self.config.particle_opacity * particle_twinkle(time, index),
            );
        }

        self.frames_painted += 1;
        StepOutcome::Painted
    }
}
