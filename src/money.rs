//! Rounding to two decimal places.

use crate::options::RoundingMode;

#[cfg(feature = "std")]
fn apply(value: f64, mode: RoundingMode) -> f64 {
    match mode {
        RoundingMode::Up => value.ceil(),
        RoundingMode::Down => value.floor(),
        RoundingMode::Nearest => value.round_ties_even(),
    }
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
fn apply(value: f64, mode: RoundingMode) -> f64 {
    match mode {
        RoundingMode::Up => libm::ceil(value),
        RoundingMode::Down => libm::floor(value),
        RoundingMode::Nearest => libm::rint(value),
    }
}

/// Rounds an amount to two decimal places (currency cents, count hundredths).
pub(crate) fn round_hundredths(amount: f64, mode: RoundingMode) -> f64 {
    // Scaling by 100 leaves representation noise such as 114.99999999999999
    // on amounts that are already whole cents; snap those first.
    let scaled = amount * 100.0;
    let nearest = apply(scaled, RoundingMode::Nearest);
    let drift = scaled - nearest;
    if drift > -1e-6 && drift < 1e-6 {
        return nearest / 100.0;
    }
    apply(scaled, mode) / 100.0
}
