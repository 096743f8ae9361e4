//! Small dependency-free float helpers that stay available in `no_std`
//! builds.

pub(crate) fn abs(x: f32) -> f32 {
    if x < 0.0 { -x } else { x }
}

pub(crate) fn floor(x: f32) -> f32 {
    let t = x as i64 as f32;
    if x < t { t - 1.0 } else { t }
}

pub(crate) fn ceil(x: f32) -> f32 {
    let t = x as i64 as f32;
    if x > t { t + 1.0 } else { t }
}

/// Rounds half away from zero, matching the platform rounding the paging
/// math was written against.
pub(crate) fn round(x: f32) -> f32 {
    if x < 0.0 { -floor(-x + 0.5) } else { floor(x + 0.5) }
}
