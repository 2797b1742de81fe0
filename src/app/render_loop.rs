use eframe::egui::Vec2;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;

use super::particles::{FrameStats, ParticleField, Surface};

/// Drives the particle field once per frame and rebuilds it whenever the viewport changes.
pub(super) struct RenderLoop {
    field: ParticleField,
    particle_count: usize,
    rng: StdRng,
    rebuilds: u64,
}

impl RenderLoop {
    pub(super) fn new(particle_count: usize) -> Self {
        Self::with_rng(particle_count, StdRng::from_entropy())
    }

    fn with_rng(particle_count: usize, mut rng: StdRng) -> Self {
        let field = ParticleField::new(particle_count, Vec2::ZERO, &mut rng);
        Self {
            field,
            particle_count,
            rng,
            rebuilds: 0,
        }
    }

    pub(super) fn frame(&mut self, surface: &mut impl Surface, viewport: Vec2) -> FrameStats {
        if viewport != self.field.bounds() {
            self.rebuild(viewport);
        }

        self.field.update();
        self.field.render(surface)
    }

    fn rebuild(&mut self, viewport: Vec2) {
        self.field = ParticleField::new(self.particle_count, viewport, &mut self.rng);
        self.rebuilds += 1;
        debug!(
            width = viewport.x,
            height = viewport.y,
            particles = self.particle_count,
            rebuilds = self.rebuilds,
            "viewport resized, rebuilt particle pool"
        );
    }
}

#[cfg(test)]
mod tests {
    use eframe::egui::vec2;

    use super::super::particles::recording::RecordingSurface;
    use super::*;

    fn seeded(count: usize) -> RenderLoop {
        RenderLoop::with_rng(count, StdRng::seed_from_u64(11))
    }

    #[test]
    fn first_frame_builds_pool_for_viewport() {
        let mut driver = seeded(12);
        let mut surface = RecordingSurface::default();

        let stats = driver.frame(&mut surface, vec2(800.0, 600.0));

        assert_eq!(driver.rebuilds, 1);
        assert_eq!(driver.field.bounds(), vec2(800.0, 600.0));
        assert_eq!(stats.pair_checks, 12 * 11 / 2);
    }

    #[test]
    fn steady_viewport_keeps_particles_moving() {
        let mut driver = seeded(5);
        let mut surface = RecordingSurface::default();
        driver.frame(&mut surface, vec2(800.0, 600.0));
        let before = driver.field.particles().to_vec();

        driver.frame(&mut surface, vec2(800.0, 600.0));

        assert_eq!(driver.rebuilds, 1);
        for (old, new) in before.iter().zip(driver.field.particles()) {
            assert_eq!(old.velocity, new.velocity);
            assert_eq!(old.size, new.size);
        }
    }

    #[test]
    fn every_resize_rebuilds_from_scratch() {
        let mut driver = seeded(8);
        let mut surface = RecordingSurface::default();
        driver.frame(&mut surface, vec2(800.0, 600.0));
        driver.frame(&mut surface, vec2(801.0, 600.0));
        driver.frame(&mut surface, vec2(300.0, 200.0));

        assert_eq!(driver.rebuilds, 3);
        assert_eq!(driver.field.particles().len(), 8);
        for particle in driver.field.particles() {
            assert!(particle.position.x <= 300.0);
            assert!(particle.position.y <= 200.0);
        }
    }
}
