// Random sampling primitives shared by the record generators.

use rand::Rng;

const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Uniform pick from a non-empty slice.
pub fn choose<'a, T, R: Rng>(rng: &mut R, pool: &'a [T]) -> &'a T {
    assert!(!pool.is_empty(), "sampling pool must not be empty");
    &pool[rng.random_range(0..pool.len())]
}

/// Cumulative-threshold categorical sampling.
///
/// Draws u in [0,1) and walks the outcomes accumulating weights until the
/// draw falls under the running total. Weights are expected to sum to 1.0;
/// the last outcome absorbs any floating-point shortfall.
pub fn sample_weighted<T: Copy, R: Rng>(rng: &mut R, outcomes: &[(T, f64)]) -> T {
    assert!(!outcomes.is_empty(), "weighted outcomes must not be empty");

    let draw: f64 = rng.random();
    let mut cumulative = 0.0;

    for &(outcome, weight) in outcomes {
        cumulative += weight;
        if draw < cumulative {
            return outcome;
        }
    }

    outcomes[outcomes.len() - 1].0
}

/// Four independent uniform [0,256) octets joined by dots.
pub fn random_ip<R: Rng>(rng: &mut R) -> String {
    format!(
        "{}.{}.{}.{}",
        rng.random_range(0..256),
        rng.random_range(0..256),
        rng.random_range(0..256),
        rng.random_range(0..256)
    )
}

/// Opaque user id: `usr_` followed by 9 random lowercase base-36 chars.
pub fn user_id<R: Rng>(rng: &mut R) -> String {
    let mut id = String::with_capacity(13);
    id.push_str("usr_");
    for _ in 0..9 {
        id.push(ID_ALPHABET[rng.random_range(0..ID_ALPHABET.len())] as char);
    }
    id
}
