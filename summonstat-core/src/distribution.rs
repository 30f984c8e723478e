use std::ops::RangeInclusive;

use log::debug;
use num::{BigInt, BigRational, BigUint, ToPrimitive};

use crate::combin::{falling_factorial, stirling_row};
use crate::error::{Result, SummonError};
use crate::models::{DistributionEntry, DistributionReport, DistributionSummary, SummonParams};

/// Maximum allowed distance between the probability total and 1.
pub const SUM_TOLERANCE: f64 = 1e-3;

/// Distribution of the number of unique heroes K after `summons` uniform draws
/// among `heroes`. Keys are exactly 1..=min(summons, heroes).
#[derive(Debug, Clone, PartialEq)]
pub struct UniqueDistribution {
    params: SummonParams,
    // probabilities[k - 1] = P(K = k)
    probabilities: Vec<f64>,
}

/// P(K = k) = S(m, k) * P(n, k) / n^m for 1 <= k <= min(m, n).
///
/// Every intermediate count is exact; only the final ratio becomes an `f64`.
pub fn probability_distribution(summons: u32, heroes: u32) -> Result<UniqueDistribution> {
    let params = SummonParams::new(summons, heroes)?;

    let stirling = stirling_row(summons);
    let denominator = BigInt::from(BigUint::from(heroes).pow(summons));

    let upper = params.max_unique();
    let mut probabilities = Vec::with_capacity(upper as usize);
    for k in 1..=upper {
        let numerator = &stirling[k as usize] * falling_factorial(heroes, k)?;
        probabilities.push(exact_ratio(numerator, &denominator));
    }

    let sum: f64 = probabilities.iter().sum();
    if !sum.is_finite() || (sum - 1.0).abs() >= SUM_TOLERANCE {
        return Err(SummonError::Inconsistent { sum });
    }

    debug!(
        "distribution for {} summons over {} heroes: {} outcomes, total {:.12}",
        summons, heroes, upper, sum
    );

    Ok(UniqueDistribution { params, probabilities })
}

// Ratio<BigInt> -> f64 stays finite when both sides are far beyond f64::MAX.
fn exact_ratio(numerator: BigUint, denominator: &BigInt) -> f64 {
    BigRational::new(BigInt::from(numerator), denominator.clone())
        .to_f64()
        .unwrap_or(f64::NAN)
}

impl UniqueDistribution {
    pub fn params(&self) -> SummonParams {
        self.params
    }

    pub fn summons(&self) -> u32 {
        self.params.summons
    }

    pub fn heroes(&self) -> u32 {
        self.params.heroes
    }

    /// Achievable unique counts, 1..=min(summons, heroes).
    pub fn support(&self) -> RangeInclusive<u32> {
        1..=self.params.max_unique()
    }

    pub fn len(&self) -> usize {
        self.probabilities.len()
    }

    /// Always false: one summon yields at least one hero.
    pub fn is_empty(&self) -> bool {
        self.probabilities.is_empty()
    }

    /// P(K = k), `None` outside the support.
    pub fn get(&self, k: u32) -> Option<f64> {
        if k == 0 {
            return None;
        }
        self.probabilities.get(k as usize - 1).copied()
    }

    /// `(k, P(K = k))` in ascending k.
    pub fn iter(&self) -> impl Iterator<Item = (u32, f64)> + '_ {
        self.support().zip(self.probabilities.iter().copied())
    }

    pub fn total(&self) -> f64 {
        self.probabilities.iter().sum()
    }

    /// P(K >= k).
    pub fn at_least(&self, k: u32) -> f64 {
        if k <= 1 {
            return 1.0;
        }
        let start = (k as usize - 1).min(self.probabilities.len());
        self.probabilities[start..].iter().sum::<f64>().min(1.0)
    }

    pub fn mean(&self) -> f64 {
        self.iter().map(|(k, p)| k as f64 * p).sum()
    }

    pub fn variance(&self) -> f64 {
        let mean = self.mean();
        let second: f64 = self.iter().map(|(k, p)| (k as f64).powi(2) * p).sum();
        (second - mean * mean).max(0.0)
    }

    /// Most likely unique count; the smallest k wins ties.
    pub fn mode(&self) -> u32 {
        let mut best = (1, f64::NEG_INFINITY);
        for (k, p) in self.iter() {
            if p > best.1 {
                best = (k, p);
            }
        }
        best.0
    }

    pub fn max_probability(&self) -> f64 {
        self.probabilities.iter().copied().fold(0.0, f64::max)
    }

    pub fn summary(&self) -> DistributionSummary {
        DistributionSummary {
            min_unique: 1,
            max_unique: self.params.max_unique(),
            mean: self.mean(),
            variance: self.variance(),
            mode: self.mode(),
            expected_closed_form: expected_unique(self.params.summons, self.params.heroes),
        }
    }

    pub fn report(&self) -> DistributionReport {
        let entries = self
            .iter()
            .map(|(k, probability)| DistributionEntry {
                k,
                probability,
                at_least: self.at_least(k),
            })
            .collect();

        DistributionReport {
            summons: self.params.summons,
            heroes: self.params.heroes,
            summary: self.summary(),
            entries,
        }
    }
}

/// E[K] = n(1 - (1 - 1/n)^m).
pub fn expected_unique(summons: u32, heroes: u32) -> f64 {
    let n = heroes as f64;
    n * (1.0 - (1.0 - 1.0 / n).powf(summons as f64))
}
