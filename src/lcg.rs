use crate::modular::Modulus;
use crate::request::GenerationRequest;
use crate::sequence::Sequence;
#[cfg(feature = "serde")] use serde::Serialize;

// This module contains the linear congruential generator
// x <- (a * x + c) mod m over an arbitrary 64-bit modulus,
// together with jump-ahead utilities.

/// LCG iteration is state <- (state * a + c) mod m.
/// Returns the (A, C) pair that iterates by n steps at once.
/// Works for any parameters, full period or not.
pub fn get_jump(modulus: Modulus, a: u64, c: u64, n: u128) -> (u64, u64) {
    // Algorithm from Brown, F. B., "Random Number Generation with Arbitrary Stride",
    // Transactions of the American Nuclear Society, 1994, carried out mod m.
    let mut unit_a = modulus.reduce(a);
    let mut unit_c = modulus.reduce(c);
    let mut jump_a = modulus.reduce(1);
    let mut jump_c = 0;
    let mut delta = n;

    while delta > 0 {
        if delta & 1 == 1 {
            jump_a = modulus.mul(jump_a, unit_a);
            jump_c = modulus.add(modulus.mul(jump_c, unit_a), unit_c);
        }
        unit_c = modulus.mul(modulus.add(unit_a, 1), unit_c);
        unit_a = modulus.mul(unit_a, unit_a);
        delta >>= 1;
    }
    (jump_a, jump_c)
}

/// LCG iteration is state <- (state * a + c) mod m.
/// Returns state after the specified number of iterations from the origin state.
pub fn get_state(modulus: Modulus, a: u64, c: u64, origin: u64, iterations: u128) -> u64 {
    let (jump_a, jump_c) = get_jump(modulus, a, c, iterations);
    modulus.add(modulus.mul(modulus.reduce(origin), jump_a), jump_c)
}

/// Deterministic LCG over [0, m). Yields the seed first, then each successor.
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Lcg {
    modulus: Modulus,
    multiplier: u64,
    increment: u64,
    /// Value returned by the next call to `next`.
    state: u64,
}

impl Lcg {
    /// Creates a generator positioned at the seed, reduced mod m.
    pub fn new(modulus: Modulus, multiplier: u64, increment: u64, seed: u64) -> Self {
        Lcg { modulus, multiplier, increment, state: modulus.reduce(seed) }
    }

    pub fn from_request(request: &GenerationRequest) -> Self {
        Lcg::new(request.modulus(), request.multiplier(), request.increment(), request.seed())
    }

    /// Returns the value the generator will yield next.
    #[inline]
    pub fn peek(&self) -> u64 {
        self.state
    }

    /// Advances by one step without yielding.
    #[inline]
    pub fn step(&mut self) {
        self.state = self.modulus.step(self.state, self.multiplier, self.increment);
    }

    /// Skips the given number of steps in O(log steps) time.
    pub fn advance(&mut self, steps: u128) {
        self.state = get_state(self.modulus, self.multiplier, self.increment, self.state, steps);
    }

    /// Returns the value yielded `index` steps from now, without generating the
    /// values before it or moving the generator. Element 0 is `peek()`.
    pub fn element_at(&self, index: u128) -> u64 {
        get_state(self.modulus, self.multiplier, self.increment, self.state, index)
    }
}

impl Iterator for Lcg {
    type Item = u64;

    #[inline]
    fn next(&mut self) -> Option<u64> {
        let x = self.state;
        self.step();
        Some(x)
    }
}

/// Generates the LCG sequence for a validated request.
/// Element 0 is the seed; element i + 1 is (a * element i + c) mod m.
pub fn generate(request: &GenerationRequest) -> Sequence {
    Lcg::from_request(request).take(request.length()).collect()
}

#[cfg(test)] mod tests {
    use super::*;

    fn request(m: u64, a: u64, c: u64, x0: u64, n: usize) -> GenerationRequest {
        GenerationRequest::new(m, a, c, x0, n).unwrap()
    }

    #[test] fn first_elements() {
        let seq = generate(&request(97, 23, 7, 5, 20));
        assert_eq!(20, seq.len());
        assert_eq!(5, seq[0]);
        assert_eq!(25, seq[1]);
        assert_eq!((23 * 25 + 7) % 97, seq[2]);
    }

    #[test] fn full_period_cycle() {
        let seq = generate(&request(4, 1, 1, 0, 10));
        assert_eq!(&[0, 1, 2, 3, 0, 1, 2, 3, 0, 1], seq.as_slice());
    }

    #[test] fn deterministic() {
        let r = request(1 << 31, 1103515245, 12345, 42, 500);
        assert_eq!(generate(&r), generate(&r));
    }

    #[test] fn modulus_one_is_all_zeros() {
        let seq = generate(&request(1, 5, 3, 0, 8));
        assert!(seq.iter().all(|&x| x == 0));
    }

    #[test] fn run_tests() {

        let mut r: u64 = 0;
        let mut rnd = || -> u64 { r = r.wrapping_mul(0xd1342543de82ef95).wrapping_add(0xffff); r };

        for _ in 0 .. 1<<10 {

            let m = Modulus::new(match rnd() % 3 { 0 => rnd() >> 48, 1 => rnd() >> 16, _ => rnd() } | 1).unwrap();
            let (a, c, origin) = (rnd(), rnd(), rnd());

            let mut lcg = Lcg::new(m, a, c, origin);
            let x0 = lcg.next().unwrap();
            assert_eq!(m.reduce(origin), x0);
            assert_eq!(lcg.peek(), get_state(m, a, c, origin, 1));

            // Every element stays in range.
            let n = 1 + (rnd() & 0xff) as usize;
            let values: Vec<u64> = Lcg::new(m, a, c, origin).take(n).collect();
            assert!(values.iter().all(|&x| x < m.get()));

            // Jumping agrees with stepping.
            assert_eq!(values[n - 1], get_state(m, a, c, origin, (n - 1) as u128));
            assert_eq!(values[n - 1], Lcg::new(m, a, c, origin).element_at((n - 1) as u128));

            // Random access follows the generator's position.
            assert_eq!(lcg.peek(), lcg.element_at(0));
            if n > 1 {
                assert_eq!(values[n - 1], lcg.element_at((n - 2) as u128));
            }

            // Jumps compose.
            let h = (rnd() & 0xffff) as u128;
            let k = (rnd() & 0xffff) as u128;
            let mut jumped = Lcg::new(m, a, c, origin);
            jumped.advance(h);
            jumped.advance(k);
            assert_eq!(get_state(m, a, c, origin, h + k), jumped.peek());

            let (jump_a, jump_c) = get_jump(m, a, c, k);
            let state_h = get_state(m, a, c, origin, h);
            assert_eq!(jumped.peek(), m.step(state_h, jump_a, jump_c));
        }
    }
}
