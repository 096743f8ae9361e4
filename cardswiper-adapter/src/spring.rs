/// A deterministic damped-spring sampler for snap-back animation.
///
/// Samples the normalized displacement of a released card returning to its
/// resting transform: 1 at the start, decaying to 0 (with overshoot when
/// under-damped) by the end of the duration.
///
/// The integration is a fixed-step semi-implicit Euler over normalized time,
/// so samples are deterministic and need no transcendental functions, which
/// keeps this usable in `no_std` builds.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Spring {
    /// Damping as a fraction of critical (1.0 settles without overshoot).
    pub damping: f32,
    /// Initial velocity in full displacements per normalized second.
    pub initial_velocity: f32,
    pub start_ms: u64,
    pub duration_ms: u64,
}

const STEPS_PER_UNIT: usize = 240;

impl Spring {
    pub fn new(damping: f32, initial_velocity: f32, start_ms: u64, duration_ms: u64) -> Self {
        Self {
            damping: damping.clamp(0.05, 1.0),
            initial_velocity,
            start_ms,
            duration_ms: duration_ms.max(1),
        }
    }

    pub fn is_done(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.start_ms) >= self.duration_ms
    }

    /// Normalized displacement at `now_ms`: 1 at the start, 0 once the
    /// duration elapsed.
    pub fn sample(&self, now_ms: u64) -> f32 {
        let elapsed = now_ms.saturating_sub(self.start_ms);
        if elapsed >= self.duration_ms {
            return 0.0;
        }
        let t = elapsed as f32 / self.duration_ms as f32;

        // The envelope decays as exp(-damping * omega * t); omega is picked
        // so the envelope reaches ~0.1% of the start value at t = 1.
        let omega = 6.9 / self.damping;
        let stiffness = omega * omega;
        let friction = 2.0 * self.damping * omega;

        let steps = ((t * STEPS_PER_UNIT as f32) as usize).max(1);
        let dt = t / steps as f32;
        let mut x = 1.0f32;
        let mut v = -self.initial_velocity;
        for _ in 0..steps {
            v += (-stiffness * x - friction * v) * dt;
            x += v * dt;
        }
        x
    }
}
