mod surface;

use eframe::egui::{Color32, Pos2, Vec2, pos2, vec2};
use rand::Rng;

pub(in crate::app) use surface::{PainterSurface, Surface};
#[cfg(test)]
pub(in crate::app) use surface::recording;

pub const PARTICLE_COUNT: usize = 80;
const CONNECTION_DISTANCE: f32 = 120.0;
const CONNECTION_ALPHA: f32 = 0.15;
const CONNECTION_WIDTH: f32 = 0.5;
const MAX_SPEED: f32 = 0.25;

#[derive(Clone, Debug, PartialEq)]
pub(in crate::app) struct Particle {
    pub(in crate::app) position: Pos2,
    pub(in crate::app) velocity: Vec2,
    pub(in crate::app) size: f32,
    pub(in crate::app) opacity: f32,
}

impl Particle {
    fn random(bounds: Vec2, rng: &mut impl Rng) -> Self {
        Self {
            position: pos2(sample_extent(rng, bounds.x), sample_extent(rng, bounds.y)),
            velocity: vec2(
                rng.gen_range(-MAX_SPEED..MAX_SPEED),
                rng.gen_range(-MAX_SPEED..MAX_SPEED),
            ),
            size: rng.gen_range(0.5..2.5),
            opacity: rng.gen_range(0.2..0.7),
        }
    }

    /// Moves one frame. Leaving an edge snaps to the opposite edge rather than wrapping
    /// by the overshoot.
    pub(in crate::app) fn update(&mut self, bounds: Vec2) {
        self.position += self.velocity;

        if self.position.x > bounds.x {
            self.position.x = 0.0;
        }
        if self.position.x < 0.0 {
            self.position.x = bounds.x;
        }
        if self.position.y > bounds.y {
            self.position.y = 0.0;
        }
        if self.position.y < 0.0 {
            self.position.y = bounds.y;
        }
    }

    fn color(&self) -> Color32 {
        white_alpha(self.opacity)
    }
}

fn sample_extent(rng: &mut impl Rng, extent: f32) -> f32 {
    if extent > 0.0 {
        rng.gen_range(0.0..extent)
    } else {
        0.0
    }
}

fn white_alpha(opacity: f32) -> Color32 {
    let alpha = (opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
    Color32::from_rgba_unmultiplied(255, 255, 255, alpha)
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(in crate::app) struct FrameStats {
    pub(in crate::app) pair_checks: usize,
    pub(in crate::app) connections: usize,
}

pub(in crate::app) struct ParticleField {
    particles: Vec<Particle>,
    bounds: Vec2,
}

impl ParticleField {
    pub(in crate::app) fn new(count: usize, bounds: Vec2, rng: &mut impl Rng) -> Self {
        let particles = (0..count).map(|_| Particle::random(bounds, rng)).collect();
        Self { particles, bounds }
    }

    #[cfg(test)]
    pub(in crate::app) fn from_particles(particles: Vec<Particle>, bounds: Vec2) -> Self {
        Self { particles, bounds }
    }

    #[cfg(test)]
    pub(in crate::app) fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub(in crate::app) fn bounds(&self) -> Vec2 {
        self.bounds
    }

    pub(in crate::app) fn update(&mut self) {
        let bounds = self.bounds;
        for particle in &mut self.particles {
            particle.update(bounds);
        }
    }

    /// Draws particles, then a fading line for every unordered pair closer than
    /// `CONNECTION_DISTANCE`.
    pub(in crate::app) fn render(&self, surface: &mut impl Surface) -> FrameStats {
        surface.clear();

        for particle in &self.particles {
            surface.fill_circle(particle.position, particle.size, particle.color());
        }

        let mut stats = FrameStats::default();
        for (i, first) in self.particles.iter().enumerate() {
            for second in &self.particles[i + 1..] {
                stats.pair_checks += 1;
                let distance = first.position.distance(second.position);
                if distance < CONNECTION_DISTANCE {
                    let opacity = (1.0 - distance / CONNECTION_DISTANCE) * CONNECTION_ALPHA;
                    surface.line(
                        first.position,
                        second.position,
                        CONNECTION_WIDTH,
                        white_alpha(opacity),
                    );
                    stats.connections += 1;
                }
            }
        }

        stats
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::recording::{DrawCall, RecordingSurface};
    use super::*;

    fn still(x: f32, y: f32, velocity: Vec2) -> Particle {
        Particle {
            position: pos2(x, y),
            velocity,
            size: 1.0,
            opacity: 0.5,
        }
    }

    #[test]
    fn initial_state_respects_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        let bounds = vec2(640.0, 480.0);
        let field = ParticleField::new(PARTICLE_COUNT, bounds, &mut rng);

        assert_eq!(field.particles().len(), PARTICLE_COUNT);
        for particle in field.particles() {
            assert!((0.0..640.0).contains(&particle.position.x));
            assert!((0.0..480.0).contains(&particle.position.y));
            assert!((0.5..2.5).contains(&particle.size));
            assert!((-0.25..0.25).contains(&particle.velocity.x));
            assert!((-0.25..0.25).contains(&particle.velocity.y));
            assert!((0.2..0.7).contains(&particle.opacity));
        }
    }

    #[test]
    fn zero_sized_viewport_does_not_panic() {
        let mut rng = StdRng::seed_from_u64(1);
        let field = ParticleField::new(4, Vec2::ZERO, &mut rng);
        assert!(field.particles().iter().all(|p| p.position == Pos2::ZERO));
    }

    #[test]
    fn leaving_right_or_bottom_snaps_to_zero() {
        let bounds = vec2(100.0, 50.0);
        let mut particle = still(99.9, 49.9, vec2(0.2, 0.2));
        particle.update(bounds);
        assert_eq!(particle.position, pos2(0.0, 0.0));
    }

    #[test]
    fn leaving_left_or_top_snaps_to_extent() {
        let bounds = vec2(100.0, 50.0);
        let mut particle = still(0.1, 0.1, vec2(-0.2, -0.2));
        particle.update(bounds);
        assert_eq!(particle.position, pos2(100.0, 50.0));
    }

    #[test]
    fn wrap_is_a_reset_not_a_modulo() {
        let bounds = vec2(100.0, 100.0);
        let mut particle = still(99.0, 10.0, vec2(30.0, 0.0));
        particle.update(bounds);
        assert_eq!(particle.position.x, 0.0);
    }

    #[test]
    fn checks_each_unordered_pair_once() {
        let mut rng = StdRng::seed_from_u64(3);
        let field = ParticleField::new(PARTICLE_COUNT, vec2(1920.0, 1080.0), &mut rng);
        let mut surface = RecordingSurface::default();

        let stats = field.render(&mut surface);

        assert_eq!(stats.pair_checks, PARTICLE_COUNT * (PARTICLE_COUNT - 1) / 2);
        assert_eq!(stats.pair_checks, 3160);
        assert_eq!(surface.calls.first(), Some(&DrawCall::Clear));
        assert_eq!(surface.circles(), PARTICLE_COUNT);
        assert_eq!(surface.lines().count(), stats.connections);
    }

    #[test]
    fn connection_fades_with_distance() {
        let field = ParticleField::from_particles(
            vec![
                still(0.0, 0.0, Vec2::ZERO),
                still(60.0, 0.0, Vec2::ZERO),
                still(300.0, 0.0, Vec2::ZERO),
            ],
            vec2(400.0, 400.0),
        );
        let mut surface = RecordingSurface::default();

        let stats = field.render(&mut surface);

        assert_eq!(stats.pair_checks, 3);
        assert_eq!(stats.connections, 1);
        let line = surface.lines().next().cloned();
        let expected_alpha = ((1.0 - 60.0 / 120.0) * 0.15 * 255.0_f32).round() as u8;
        assert_eq!(
            line,
            Some(DrawCall::Line {
                from: pos2(0.0, 0.0),
                to: pos2(60.0, 0.0),
                width: 0.5,
                alpha: expected_alpha,
            })
        );
    }

    #[test]
    fn exactly_threshold_distance_is_not_connected() {
        let field = ParticleField::from_particles(
            vec![still(0.0, 0.0, Vec2::ZERO), still(120.0, 0.0, Vec2::ZERO)],
            vec2(400.0, 400.0),
        );
        let mut surface = RecordingSurface::default();
        assert_eq!(field.render(&mut surface).connections, 0);
    }

    proptest! {
        #[test]
        fn positions_stay_inside_closed_bounds(
            seed in any::<u64>(),
            width in 1.0f32..2000.0,
            height in 1.0f32..2000.0,
            frames in 1usize..200,
        ) {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut field = ParticleField::new(16, vec2(width, height), &mut rng);
            for _ in 0..frames {
                field.update();
            }
            for particle in field.particles() {
                prop_assert!((0.0..=width).contains(&particle.position.x));
                prop_assert!((0.0..=height).contains(&particle.position.y));
            }
        }
    }
}
