/// Arithmetic mean. Returns `None` if `data` is empty.
pub fn mean(data: &[f64]) -> Option<f64> {
    if data.is_empty() {
        return None;
    }
    Some(data.iter().sum::<f64>() / data.len() as f64)
}

/// Sample standard deviation (denominator `len - 1`).
/// Returns `None` if `data` has fewer than two values.
pub fn std_dev(data: &[f64]) -> Option<f64> {
    if data.len() < 2 {
        return None;
    }
    let mean = mean(data)?;
    let sum_sq = data.iter().map(|x| (x - mean) * (x - mean)).sum::<f64>();
    Some((sum_sq / (data.len() - 1) as f64).sqrt())
}

////////////////////////////////////////////////////////////////////////////////
