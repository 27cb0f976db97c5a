/*
Biased Random Selection
=======================

Every generative decision in the engine goes through the two functions in
this module. The shape is deliberately simple:

    rnd_int(rng, max, power)  ->  floor(uniform()^power * max)

With power = 1.0 the draw is uniform over [0, max). Raising the power pushes
the distribution toward index 0:

    power   P(index 0 of 3)
    1.0     ~33%
    3.0     ~69%
    5.0     ~80%

Callers exploit this by ordering their choice lists from most to least
desirable: pattern mutation lists its gentlest operator first and draws with
power 5, key modulation lists "stay put" first and draws with power 3. The
result is music that mostly evolves in small moves with occasional jumps.
*/

/// Draw an integer in `[0, max)`, skewed toward 0 as `power` rises above 1.
///
/// `power = 1.0` is uniform. Panics if `max` is 0; every call site selects
/// from a non-empty collection.
pub fn rnd_int(rng: &mut fastrand::Rng, max: usize, power: f64) -> usize {
    assert!(max > 0, "rnd_int: max must be at least 1");
    let skewed = rng.f64().powf(power);
    // The product is below max for any uniform sample in [0, 1), but the
    // cast is kept in range explicitly.
    ((skewed * max as f64) as usize).min(max - 1)
}

/// Select one element from a non-empty slice via [`rnd_int`].
///
/// `power = 1.0` selects uniformly; larger powers favor the front of the
/// slice.
pub fn choose<'a, T>(rng: &mut fastrand::Rng, items: &'a [T], power: f64) -> &'a T {
    &items[rnd_int(rng, items.len(), power)]
}
