use rand::{rngs::StdRng, Rng, SeedableRng};

pub const PARTICLE_COUNT: usize = 50;
/// Fixed so the server-rendered field matches the hydrated one.
pub const PARTICLE_SEED: u64 = 0x00C0_FFEE;

/// A background dot. Positions are percentages of the viewport, sizes and
/// drift are pixels, period is seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub size: f64,
    pub top: f64,
    pub left: f64,
    pub drift: f64,
    pub period: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleFrame {
    pub y: f64,
    pub opacity: f64,
}

impl Particle {
    /// Position and opacity `elapsed` seconds after mount. The particle
    /// drifts linearly from 0 to `drift` while fading in and back out, then
    /// repeats.
    pub fn sample(&self, elapsed: f64) -> ParticleFrame {
        let progress = (elapsed.max(0.0) / self.period).fract();
        let opacity = if progress < 0.5 {
            progress * 2.0
        } else {
            (1.0 - progress) * 2.0
        };
        ParticleFrame {
            y: self.drift * progress,
            opacity,
        }
    }

    pub fn style(&self, elapsed: f64) -> String {
        let frame = self.sample(elapsed);
        format!(
            "width: {size:.2}px; height: {size:.2}px; top: {top:.2}%; left: {left:.2}%; transform: translateY({y:.2}px); opacity: {opacity:.3};",
            size = self.size,
            top = self.top,
            left = self.left,
            y = frame.y,
            opacity = frame.opacity,
        )
    }
}

pub fn scatter(count: usize, seed: u64) -> Vec<Particle> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| Particle {
            size: rng.gen_range(1.0..4.0),
            top: rng.gen_range(0.0..100.0),
            left: rng.gen_range(0.0..100.0),
            drift: rng.gen_range(-50.0..50.0),
            period: rng.gen_range(5.0..10.0),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn particle() -> Particle {
        Particle {
            size: 2.0,
            top: 10.0,
            left: 20.0,
            drift: 40.0,
            period: 8.0,
        }
    }

    #[test]
    fn test_scatter_is_deterministic() {
        let a = scatter(PARTICLE_COUNT, PARTICLE_SEED);
        let b = scatter(PARTICLE_COUNT, PARTICLE_SEED);
        assert_eq!(a.len(), PARTICLE_COUNT);
        assert_eq!(a, b);
        assert_ne!(a, scatter(PARTICLE_COUNT, PARTICLE_SEED + 1));
    }

    #[test]
    fn test_scatter_ranges() {
        for p in scatter(500, 7) {
            assert!((1.0..4.0).contains(&p.size));
            assert!((0.0..100.0).contains(&p.top));
            assert!((0.0..100.0).contains(&p.left));
            assert!((-50.0..50.0).contains(&p.drift));
            assert!((5.0..10.0).contains(&p.period));
        }
    }

    #[test]
    fn test_sample_fades_in_and_out() {
        let p = particle();
        let start = p.sample(0.0);
        assert_eq!(start.y, 0.0);
        assert_eq!(start.opacity, 0.0);

        let mid = p.sample(4.0);
        assert!((mid.y - 20.0).abs() < 1e-9);
        assert!((mid.opacity - 1.0).abs() < 1e-9);

        let late = p.sample(6.0);
        assert!((late.opacity - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_sample_repeats_each_period() {
        let p = particle();
        let a = p.sample(1.5);
        let b = p.sample(1.5 + p.period * 3.0);
        assert!((a.y - b.y).abs() < 1e-9);
        assert!((a.opacity - b.opacity).abs() < 1e-9);
    }

    #[test]
    fn test_sample_stays_in_bounds() {
        for p in scatter(20, 3) {
            for step in 0..200 {
                let f = p.sample(step as f64 * 0.137);
                assert!((0.0..=1.0).contains(&f.opacity));
                assert!(f.y.abs() <= p.drift.abs() + 1e-9);
            }
        }
    }

    #[test]
    fn test_style_mentions_position() {
        let style = particle().style(0.0);
        assert!(style.contains("top: 10.00%"));
        assert!(style.contains("left: 20.00%"));
        assert!(style.contains("opacity: 0.000"));
    }
}
