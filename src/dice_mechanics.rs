//! Dice probability math: parameterization and two-dice convolution.
//!
//! Both functions are pure and allocation-free; vectors are recomputed fresh
//! for every query.

use crate::constants::{MIRROR_PAIR_MASS, NUM_FACES, NUM_SUMS};

/// Map the free parameters (x, y) to the symmetric face-probability vector
/// (x, y, z, z, y, x) with z = 0.5 − x − y.
///
/// Total over all reals. For the sum-to-1 invariant with non-negative entries,
/// callers restrict (x, y) to the admissible triangle x ≥ 0, y ≥ 0,
/// x + y ≤ 0.5 (see [`crate::search::is_admissible`]).
#[inline]
pub fn face_probabilities(x: f64, y: f64) -> [f64; NUM_FACES] {
    let z = MIRROR_PAIR_MASS - x - y;
    [x, y, z, z, y, x]
}

/// Convolve a face-probability vector with itself: probabilities q2..q12 of
/// each sum of two independent rolls.
///
/// The input is not validated; when it sums to 1 the output does too.
/// The upper half is the exact mirror of the lower: q_k = q_(14−k), because
/// face k and face 7−k are equiprobable on a symmetric die.
#[inline]
pub fn sum_probabilities(p: &[f64; NUM_FACES]) -> [f64; NUM_SUMS] {
    let [p1, p2, p3, p4, p5, p6] = *p;
    let q2 = p1 * p1;
    let q3 = 2.0 * p1 * p2;
    let q4 = 2.0 * p1 * p3 + p2 * p2;
    let q5 = 2.0 * (p1 * p4 + p2 * p3);
    let q6 = 2.0 * (p1 * p5 + p2 * p4) + p3 * p3;
    let q7 = 2.0 * (p1 * p6 + p2 * p5 + p3 * p4);
    [q2, q3, q4, q5, q6, q7, q6, q5, q4, q3, q2]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::NATURAL_COORD;

    #[test]
    fn natural_point_gives_uniform_faces() {
        let p = face_probabilities(NATURAL_COORD, NATURAL_COORD);
        for &pi in &p {
            assert!((pi - 1.0 / 6.0).abs() < 1e-15, "face prob {pi} != 1/6");
        }
    }

    #[test]
    fn natural_point_gives_classical_sum_distribution() {
        let p = face_probabilities(NATURAL_COORD, NATURAL_COORD);
        let q = sum_probabilities(&p);
        // 1,2,3,4,5,6,5,4,3,2,1 out of 36
        let expected = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 5.0, 4.0, 3.0, 2.0, 1.0];
        for (k, (&qi, &e)) in q.iter().zip(&expected).enumerate() {
            assert!(
                (qi - e / 36.0).abs() < 1e-12,
                "q{} = {qi}, expected {}/36",
                k + 2,
                e
            );
        }
    }

    #[test]
    fn degenerate_die_concentrates_on_middle_faces() {
        let p = face_probabilities(0.0, 0.0);
        assert_eq!(p, [0.0, 0.0, 0.5, 0.5, 0.0, 0.0]);
        let q = sum_probabilities(&p);
        // Sums 6, 7, 8 with probabilities 0.25, 0.5, 0.25
        assert!((q[4] - 0.25).abs() < 1e-15);
        assert!((q[5] - 0.5).abs() < 1e-15);
        assert!((q[6] - 0.25).abs() < 1e-15);
        assert!((q.iter().sum::<f64>() - 1.0).abs() < 1e-15);
    }
}
