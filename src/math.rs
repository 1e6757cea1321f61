#[derive(Clone, Copy, Debug, PartialEq)]
pub struct C {
    pub re: f64,
    pub im: f64,
}

impl C {
    pub fn new(re: f64, im: f64) -> Self {
        C { re, im }
    }

    pub fn abs_sq(&self) -> f64 {
        self.re * self.re + self.im * self.im
    }

    pub fn add(&self, other: C) -> C {
        C::new(self.re + other.re, self.im + other.im)
    }

    pub fn square(&self) -> C {
        C::new(self.re * self.re - self.im * self.im, 2.0 * self.re * self.im)
    }
}

/// Linearly maps `value` from `[in_min, in_max]` onto `[out_min, out_max]`.
///
/// No clamping: values outside the input range land outside the output range.
/// A degenerate input range maps everything to the output midpoint.
pub fn map_range(value: f64, in_min: f64, in_max: f64, out_min: f64, out_max: f64) -> f64 {
    if in_min == in_max {
        return (out_min + out_max) / 2.0;
    }
    (value - in_min) * (out_max - out_min) / (in_max - in_min) + out_min
}
