//! Pairwise Newtonian gravity.
//!
//! Every body attracts every other body, the ship included. Pairs closer
//! than `epsilon` contribute nothing, which keeps the sum finite when two
//! bodies overlap.

use bevy::math::DVec2;

/// Compute the net acceleration on each source from all other sources.
///
/// `a_i = Σ_{j≠i} G * m_j * (p_j - p_i) / |p_j - p_i|³`
///
/// # Arguments
/// * `sources` - (position, mass) of every body
/// * `g` - gravitational constant
/// * `epsilon` - separations below this are skipped
///
/// # Returns
/// One acceleration per source, in the same order.
pub fn compute_accelerations(sources: &[(DVec2, f64)], g: f64, epsilon: f64) -> Vec<DVec2> {
    let epsilon_squared = epsilon * epsilon;

    sources
        .iter()
        .enumerate()
        .map(|(i, &(pos, _))| {
            let mut acc = DVec2::ZERO;
            for (j, &(other_pos, other_mass)) in sources.iter().enumerate() {
                if i == j {
                    continue;
                }
                let delta = other_pos - pos;
                let r_squared = delta.length_squared();
                if r_squared < epsilon_squared {
                    continue;
                }
                let r = r_squared.sqrt();
                acc += delta * (g * other_mass / (r_squared * r));
            }
            acc
        })
        .collect()
}
