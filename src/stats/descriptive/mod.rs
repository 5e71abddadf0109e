// Descriptive statistics over column values

use crate::dataset::Scalar;
use std::collections::HashMap;

/// Mean, minimum and maximum of a numeric sample
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub count: usize,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
}

/// Compute mean/min/max; `None` for an empty sample
pub(crate) fn extent_impl(data: &[f64]) -> Option<Extent> {
    if data.is_empty() {
        return None;
    }

    let count = data.len();
    let mean = data.iter().sum::<f64>() / count as f64;
    let min = data.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = data.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

    Some(Extent {
        count,
        mean,
        min,
        max,
    })
}

/// Pearson correlation over pairwise-complete observations.
///
/// Rows where either side is null or non-numeric are skipped. Returns `None`
/// when fewer than two pairs remain or either side has zero variance.
pub(crate) fn correlation_impl(x: &[Scalar], y: &[Scalar]) -> Option<f64> {
    let pairs: Vec<(f64, f64)> = x
        .iter()
        .zip(y.iter())
        .filter_map(|(a, b)| Some((a.as_f64()?, b.as_f64()?)))
        .filter(|(a, b)| a.is_finite() && b.is_finite())
        .collect();

    let n = pairs.len();
    if n < 2 {
        return None;
    }

    let mean_x = pairs.iter().map(|(a, _)| a).sum::<f64>() / n as f64;
    let mean_y = pairs.iter().map(|(_, b)| b).sum::<f64>() / n as f64;

    // Σ(xi - x̄)(yi - ȳ)
    let numerator = pairs
        .iter()
        .map(|(a, b)| (a - mean_x) * (b - mean_y))
        .sum::<f64>();

    let sum_squared_diff_x = pairs.iter().map(|(a, _)| (a - mean_x).powi(2)).sum::<f64>();
    let sum_squared_diff_y = pairs.iter().map(|(_, b)| (b - mean_y).powi(2)).sum::<f64>();

    // zero variance on either side leaves r undefined, however small the scale
    let constant_x = pairs.iter().all(|(a, _)| *a == pairs[0].0);
    let constant_y = pairs.iter().all(|(_, b)| *b == pairs[0].1);
    if constant_x || constant_y || sum_squared_diff_x == 0.0 || sum_squared_diff_y == 0.0 {
        return None;
    }

    let denominator = sum_squared_diff_x.sqrt() * sum_squared_diff_y.sqrt();
    let r = numerator / denominator;
    if !r.is_finite() {
        return None;
    }

    Some(r.clamp(-1.0, 1.0))
}

/// Count occurrences of each non-null value, most frequent first.
///
/// Values are keyed by their display text. Equal counts keep first-seen order.
pub(crate) fn value_counts_impl<'a, I>(values: I) -> Vec<(String, usize)>
where
    I: IntoIterator<Item = &'a Scalar>,
{
    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut counts: Vec<(String, usize)> = Vec::new();

    for value in values {
        if value.is_null() {
            continue;
        }
        let key = value.to_string();
        match positions.get(&key) {
            Some(&idx) => counts[idx].1 += 1,
            None => {
                positions.insert(key.clone(), counts.len());
                counts.push((key, 1));
            }
        }
    }

    // stable: ties stay in first-seen order
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ints(values: &[i64]) -> Vec<Scalar> {
        values.iter().map(|v| Scalar::Int(*v)).collect()
    }

    #[test]
    fn test_extent_basic() {
        let stats = extent_impl(&[100.0, 150.0, 90.0]).unwrap();
        assert_eq!(stats.count, 3);
        assert!((stats.mean - 113.333_333_333).abs() < 1e-6);
        assert_eq!(stats.min, 90.0);
        assert_eq!(stats.max, 150.0);
        assert!(extent_impl(&[]).is_none());
    }

    #[test]
    fn test_correlation() {
        let x = ints(&[1, 2, 3, 4, 5]);
        let corr = correlation_impl(&x, &x).unwrap();
        assert!((corr - 1.0).abs() < 1e-10);

        let y_neg = ints(&[5, 4, 3, 2, 1]);
        let corr_neg = correlation_impl(&x, &y_neg).unwrap();
        assert!((corr_neg + 1.0).abs() < 1e-10);

        let y_const = ints(&[3, 3, 3, 3, 3]);
        assert!(correlation_impl(&x, &y_const).is_none());

        let tenths = vec![Scalar::Float(0.1); 3];
        assert!(correlation_impl(&x[..3], &tenths).is_none());
    }

    #[test]
    fn test_correlation_at_small_scale() {
        let a: Vec<Scalar> = [1e-9, 2e-9, 3e-9].iter().map(|v| Scalar::Float(*v)).collect();
        let b: Vec<Scalar> = [3e-9, 1e-9, 2e-9].iter().map(|v| Scalar::Float(*v)).collect();
        assert!((correlation_impl(&a, &a).unwrap() - 1.0).abs() < 1e-10);
        assert!((correlation_impl(&a, &b).unwrap() + 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_correlation_skips_incomplete_pairs() {
        let x = vec![Scalar::Int(1), Scalar::Null, Scalar::Int(3), Scalar::Int(4)];
        let y = vec![Scalar::Int(2), Scalar::Int(100), Scalar::Null, Scalar::Int(8)];
        // only (1, 2) and (4, 8) survive
        let corr = correlation_impl(&x, &y).unwrap();
        assert!((corr - 1.0).abs() < 1e-10);

        let single = vec![Scalar::Int(1), Scalar::Null];
        assert!(correlation_impl(&single, &single).is_none());
    }

    #[test]
    fn test_value_counts_ties_keep_first_seen() {
        let values = vec![
            Scalar::from("b"),
            Scalar::from("a"),
            Scalar::Null,
            Scalar::from("c"),
            Scalar::from("a"),
            Scalar::from("b"),
        ];
        let counts = value_counts_impl(&values);
        assert_eq!(
            counts,
            vec![("b".to_string(), 2), ("a".to_string(), 2), ("c".to_string(), 1)]
        );
    }
}
