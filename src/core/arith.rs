pub const VARIABLE: f64 = 7.0;

pub fn sum(x: f64, y: f64) -> f64 {
    x + y
}

pub fn multiply(x: f64, y: f64) -> f64 {
    x * y
}
