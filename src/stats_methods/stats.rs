//methods for reducing a case count history to a single growth signal

use crate::misc_types::SirError;

/// Average ratio of new cases in consecutive rounds over a trailing
/// window of `recovery_time` rounds (capped by the history length).
///
/// A ratio with a zero denominator contributes 0 to the sum but still
/// counts in the divisor, which biases the average towards 0 whenever a
/// round had no prior cases. That is intentional: a stalled epidemic
/// should read as not growing.
///
/// Fewer than two entries leave no ratio to average and are reported as
/// `InsufficientHistory` instead of dividing by zero.
pub fn growth_rate(new_cases: &[usize], recovery_time: u32) -> Result<f64, SirError>
{
    let window = (recovery_time as usize).min(new_cases.len().saturating_sub(1));
    if window == 0{
        return Err(SirError::InsufficientHistory{len: new_cases.len()});
    }
    let mut total = 0.0;
    for i in 1..=window{
        let prev = new_cases[i - 1];
        let curr = new_cases[i];
        if prev != 0{
            total += curr as f64 / prev as f64;
        }
    }
    Ok(total / window as f64)
}
