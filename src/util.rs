// Shares of a and b in a + b. None when the sum is too small to divide by.
pub fn proportional_split(a: f64, b: f64, epsilon: f64) -> Option<(f64, f64)> {
    let sum = a + b;
    if sum < epsilon { return None; }

    Some((a / sum, b / sum))
}
