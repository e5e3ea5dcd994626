use num_traits::Float;

// Ref: https://webassembly.github.io/spec/core/exec/numerics.html#float-operations

/// Wasm-compatible minimum of two f64 values, the `f64.min` instruction.
///
/// `f64::min` does not comply with the Wasm spec: it falls back to the other
/// operand when one side is NaN, while `f64.min` requires NaN to win even
/// against negative infinity. When both operands are zero the negatively
/// signed one wins, so `wasm_min(0.0, -0.0)` is `-0.0`.
#[inline]
pub fn wasm_min(x: f64, y: f64) -> f64 {
    if x.is_nan() || y.is_nan() {
        return f64::NAN;
    }
    if x == f64::NEG_INFINITY || y == f64::NEG_INFINITY {
        return f64::NEG_INFINITY;
    }
    if x == 0.0 && x == y {
        // both zero, the negative one wins
        if x.is_sign_negative() {
            return x;
        }
        return y;
    }
    if x < y {
        x
    } else {
        y
    }
}

/// Wasm-compatible maximum of two f64 values, the `f64.max` instruction.
/// NaN wins even against positive infinity, and `wasm_max(0.0, -0.0)` is
/// `0.0`.
#[inline]
pub fn wasm_max(x: f64, y: f64) -> f64 {
    if x.is_nan() || y.is_nan() {
        return f64::NAN;
    }
    if x == f64::INFINITY || y == f64::INFINITY {
        return f64::INFINITY;
    }
    if x == 0.0 && x == y {
        // both zero, the positive one wins
        if x.is_sign_negative() {
            return y;
        }
        return x;
    }
    if x > y {
        x
    } else {
        y
    }
}

/// Round-half-to-even kernel shared by both precisions. Working through the
/// `Float` bound keeps every intermediate of the f32 variant in f32.
fn nearest<F: Float>(f: F) -> F {
    // == matches both zeros; ±0, ±inf and NaN all come back unchanged
    if f.is_nan() || f.is_infinite() || f == F::zero() {
        return f;
    }
    let ceil = f.ceil();
    let floor = f.floor();
    let dist_ceil = (f - ceil).abs();
    let dist_floor = (f - floor).abs();
    if dist_ceil < dist_floor {
        return ceil;
    }
    if dist_floor < dist_ceil {
        return floor;
    }
    // halfway between, take the even neighbor
    let half = ceil / (F::one() + F::one());
    if half.floor() == half {
        ceil
    } else {
        floor
    }
}

/// Wasm-compatible variant of `f32::round`, the `f32.nearest` instruction.
///
/// Ties go to the even neighbor: `f32::round` takes `-4.5` to `-5.0`, this
/// takes it to `-4.0`. These are the semantics of LLVM's rint intrinsic.
#[inline]
pub fn wasm_nearest_f32(f: f32) -> f32 {
    nearest(f)
}

/// Wasm-compatible variant of `f64::round` for the `f64.nearest`
/// instruction, with the same tie-to-even behavior as [`wasm_nearest_f32`].
#[inline]
pub fn wasm_nearest_f64(f: f64) -> f64 {
    nearest(f)
}
