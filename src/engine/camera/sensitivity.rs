use serde::{Deserialize, Serialize};

/// A single key on a [`SensitivityCurve`]: input position, output value,
/// and Hermite tangents on either side.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CurveKey {
    pub t: f32,
    pub value: f32,
    #[serde(default)]
    pub in_tangent: f32,
    #[serde(default)]
    pub out_tangent: f32,
}

impl CurveKey {
    pub fn new(t: f32, value: f32) -> Self {
        Self {
            t,
            value,
            in_tangent: 0.0,
            out_tangent: 0.0,
        }
    }

    pub fn with_tangents(t: f32, value: f32, in_tangent: f32, out_tangent: f32) -> Self {
        Self {
            t,
            value,
            in_tangent,
            out_tangent,
        }
    }
}

/// Keyframed response curve mapping a rotation-input magnitude (domain
/// ~0..1) to a sensitivity multiplier.
///
/// Evaluation is cubic Hermite between neighbouring keys and clamps to the
/// end values outside the keyed range.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SensitivityCurve {
    keys: Vec<CurveKey>,
}

impl SensitivityCurve {
    /// Builds a curve from keys; keys are sorted by input position.
    pub fn new(mut keys: Vec<CurveKey>) -> Self {
        keys.sort_by(|a, b| a.t.total_cmp(&b.t));
        Self { keys }
    }

    pub fn keys(&self) -> &[CurveKey] {
        &self.keys
    }

    /// Evaluates the curve at `t`, clamping outside the keyed range.
    /// An empty curve evaluates to the identity multiplier.
    pub fn evaluate(&self, t: f32) -> f32 {
        let keys = self.keys.as_slice();
        match keys {
            [] => 1.0,
            [only] => only.value,
            _ => {
                let first = &keys[0];
                let last = &keys[keys.len() - 1];
                if t <= first.t {
                    return first.value;
                }
                if t >= last.t {
                    return last.value;
                }
                let i = keys
                    .windows(2)
                    .position(|pair| t < pair[1].t)
                    .unwrap_or(keys.len() - 2);
                hermite(&keys[i], &keys[i + 1], t)
            }
        }
    }
}

impl Default for SensitivityCurve {
    /// Two-key easing curve: slow small adjustments, fast large sweeps.
    fn default() -> Self {
        Self::new(vec![
            CurveKey::with_tangents(0.0, 0.5, 0.0, 5.0),
            CurveKey::with_tangents(1.0, 2.5, 0.0, 0.0),
        ])
    }
}

fn hermite(a: &CurveKey, b: &CurveKey, t: f32) -> f32 {
    let span = b.t - a.t;
    if span <= f32::EPSILON {
        return a.value;
    }
    let s = (t - a.t) / span;
    let s2 = s * s;
    let s3 = s2 * s;
    let h00 = 2.0 * s3 - 3.0 * s2 + 1.0;
    let h10 = s3 - 2.0 * s2 + s;
    let h01 = -2.0 * s3 + 3.0 * s2;
    let h11 = s3 - s2;
    h00 * a.value + h10 * a.out_tangent * span + h01 * b.value + h11 * b.in_tangent * span
}
