use tracing::trace;
#[cfg(feature = "serde")] use serde::{Deserialize, Serialize};

/// A repeating cycle confirmed inside a finite sequence.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Cycle {
    /// Index where the cycle begins (the length of the pre-periodic tail).
    pub start: usize,
    /// Index of the first element that repeats `start`.
    pub repeat: usize,
}

impl Cycle {
    #[inline]
    pub fn length(&self) -> usize {
        self.repeat - self.start
    }
}

/// Outcome of period detection on one sequence.
///
/// When no cycle was confirmed within the sampled window, `period` equals the
/// sequence length and `cycle` is `None`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct PeriodReport {
    pub period: usize,
    pub cycle: Option<Cycle>,
}

impl PeriodReport {
    fn confirmed(cycle: Cycle) -> Self {
        PeriodReport { period: cycle.length(), cycle: Some(cycle) }
    }

    fn undetermined(length: usize) -> Self {
        PeriodReport { period: length, cycle: None }
    }

    /// Whether a genuine cycle was observed.
    #[inline]
    pub fn is_confirmed(&self) -> bool {
        self.cycle.is_some()
    }

    /// Index of the first detected repeat, if any.
    #[inline]
    pub fn first_repeat(&self) -> Option<usize> {
        self.cycle.map(|cycle| cycle.repeat)
    }
}

/// Returns the smallest period of every suffix: `periods[i]` is the smallest p
/// with `sequence[t] == sequence[t + p]` for all t >= i in bounds.
///
/// A suffix read backwards is a prefix of the reversed sequence and has the same
/// periods, so one prefix-function pass over the reversed sequence covers all of
/// them: a string of length L with longest border b has smallest period L - b.
fn suffix_periods(sequence: &[u64]) -> Vec<usize> {
    let n = sequence.len();
    let at = |k: usize| sequence[n - 1 - k];
    let mut border = vec![0usize; n];
    for k in 1 .. n {
        let mut b = border[k - 1];
        while b > 0 && at(k) != at(b) {
            b = border[b - 1];
        }
        if at(k) == at(b) {
            b += 1;
        }
        border[k] = b;
    }
    // Suffix i is the reversed prefix of length n - i.
    (0 .. n).map(|i| (n - i) - border[n - i - 1]).collect()
}

/// Finds the smallest cycle observable within the sequence.
///
/// A repeat at `repeat` of the value at `start` counts only if the rest of the
/// sequence keeps replicating it up to the end; an equal value with a diverging
/// continuation is not a cycle. The reported cycle has the earliest such repeat,
/// and among those the shortest length. Runs in time linear in the sequence
/// length, never depending on the modulus.
pub fn detect_period(sequence: &[u64]) -> PeriodReport {
    let n = sequence.len();
    let mut best: Option<Cycle> = None;

    for (start, period) in suffix_periods(sequence).into_iter().enumerate() {
        // A period equal to the suffix length means nothing repeats in it.
        if period >= n - start {
            continue;
        }
        let repeat = start + period;
        // Later starts win ties: same repeat index, shorter cycle.
        if best.map_or(true, |cycle| repeat <= cycle.repeat) {
            best = Some(Cycle { start, repeat });
        }
    }

    match best {
        Some(cycle) => {
            trace!(start = cycle.start, repeat = cycle.repeat, "cycle confirmed");
            PeriodReport::confirmed(cycle)
        }
        None => PeriodReport::undetermined(n),
    }
}
