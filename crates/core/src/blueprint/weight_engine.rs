//! Blueprint weight engine.
//!
//! Splits a fixed number of questions across blueprint categories. When every
//! category carries a weight the split is proportional, using the largest
//! remainder (Hamilton) method; otherwise it is as even as possible, with the
//! leftover units going to the first categories in input order.
//!
//! The engine is a pure function of its inputs. It performs no I/O and no
//! logging, and it verifies before returning that the allocations add up to
//! exactly the requested total.

use num_traits::ToPrimitive;
use rust_decimal::Decimal;

use super::blueprint_model::{Allocation, CategoryAllocation, CategoryWeight, DistributionMode};
use crate::errors::AllocationError;

/// Allocates `total` units across `categories`, preserving input order.
///
/// # Errors
/// * [`AllocationError::EmptyCategorySet`] when `categories` is empty.
/// * [`AllocationError::InvalidWeight`] when a weight is negative.
/// * [`AllocationError::DegenerateWeights`] when all weights are present but sum to zero.
/// * [`AllocationError::WeightOverflow`] when the weights sum past the decimal range.
/// * [`AllocationError::RoundingDriftDetected`] when the rounded counts do not sum to `total`.
pub fn allocate(
    categories: &[CategoryWeight],
    total: u32,
) -> Result<Allocation, AllocationError> {
    if categories.is_empty() {
        return Err(AllocationError::EmptyCategorySet);
    }

    let mode = DistributionMode::resolve(categories);
    let counts = match mode {
        DistributionMode::Proportional => proportional_counts(categories, total)?,
        DistributionMode::Uniform => uniform_counts(categories.len(), total),
    };

    let allocated: u64 = counts.iter().map(|&c| u64::from(c)).sum();
    if allocated != u64::from(total) {
        return Err(AllocationError::RoundingDriftDetected {
            allocated,
            expected: u64::from(total),
        });
    }

    let categories = categories
        .iter()
        .zip(counts)
        .map(|(category, allocated)| CategoryAllocation {
            code: category.code.clone(),
            name: category.name.clone(),
            weight: category.weight,
            allocated,
        })
        .collect();

    Ok(Allocation { mode, categories })
}

/// Real-valued share of `total` owed to a category of `weight`.
///
/// Multiplies before dividing so that whole shares stay exact in decimal.
/// `total_weight` must be non-zero.
pub fn exact_share(weight: Decimal, total_weight: Decimal, total: u32) -> Decimal {
    let total = Decimal::from(total);
    weight
        .checked_mul(total)
        .map(|scaled| scaled / total_weight)
        .unwrap_or_else(|| weight / total_weight * total)
}

fn proportional_counts(
    categories: &[CategoryWeight],
    total: u32,
) -> Result<Vec<u32>, AllocationError> {
    let mut weights = Vec::with_capacity(categories.len());
    for category in categories {
        let weight = category.weight.unwrap_or(Decimal::ZERO);
        if weight < Decimal::ZERO {
            return Err(AllocationError::InvalidWeight {
                code: category.code.clone(),
                weight,
            });
        }
        weights.push(weight);
    }

    let total_weight = weights
        .iter()
        .try_fold(Decimal::ZERO, |sum, &w| sum.checked_add(w))
        .ok_or(AllocationError::WeightOverflow)?;
    if total_weight.is_zero() {
        return Err(AllocationError::DegenerateWeights);
    }

    let exact: Vec<Decimal> = weights
        .iter()
        .map(|&w| exact_share(w, total_weight, total))
        .collect();

    // Floors can only undershoot; a failed conversion leaves a gap the drift check reports.
    let mut counts: Vec<u32> = exact
        .iter()
        .map(|share| share.floor().to_u32().unwrap_or(0))
        .collect();
    let floored: u64 = counts.iter().map(|&c| u64::from(c)).sum();
    let remaining = u64::from(total).saturating_sub(floored);

    let fractions: Vec<Decimal> = exact
        .iter()
        .zip(&counts)
        .map(|(share, &floor)| share - Decimal::from(floor))
        .collect();

    // `sort_by` is stable: equal remainders keep input order.
    let mut order: Vec<usize> = (0..categories.len()).collect();
    order.sort_by(|&a, &b| fractions[b].cmp(&fractions[a]));

    for &index in order.iter().take(remaining.min(order.len() as u64) as usize) {
        counts[index] += 1;
    }

    Ok(counts)
}

fn uniform_counts(n: usize, total: u32) -> Vec<u32> {
    let n = u32::try_from(n).unwrap_or(u32::MAX);
    let base = total / n;
    let remainder = total % n;

    (0..n)
        .map(|index| if index < remainder { base + 1 } else { base })
        .collect()
}
