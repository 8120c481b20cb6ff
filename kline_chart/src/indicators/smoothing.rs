//! Exponential smoothing shared by the oscillators.

/// Recursive EMA seeded with the first value:
/// `ema[0] = x[0]`, `ema[i] = a * x[i] + (1 - a) * ema[i-1]` with `a = 2 / (span + 1)`.
pub(crate) fn ema(values: &[f64], span: usize) -> Vec<f64> {
    let alpha = 2.0 / (span as f64 + 1.0);
    let mut out = Vec::with_capacity(values.len());
    let mut prev = None;
    for &x in values {
        let next = match prev {
            None => x,
            Some(p) => alpha * x + (1.0 - alpha) * p,
        };
        out.push(next);
        prev = Some(next);
    }
    out
}

/// Bias-corrected exponentially weighted mean with smoothing factor `alpha`.
///
/// Each output is `sum(w_i * x_i) / sum(w_i)` over the inputs seen so far,
/// with `w_i = (1 - alpha)^age`. Missing inputs still age the earlier
/// weights; outputs stay `None` until the first input arrives.
pub(crate) fn weighted_mean(values: &[Option<f64>], alpha: f64) -> Vec<Option<f64>> {
    let decay = 1.0 - alpha;
    let (mut num, mut den) = (0.0, 0.0);
    values
        .iter()
        .map(|value| {
            num *= decay;
            den *= decay;
            if let Some(x) = value {
                num += x;
                den += 1.0;
            }
            (den > 0.0).then(|| num / den)
        })
        .collect()
}
