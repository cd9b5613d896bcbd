//! Closed parameter ranges for marching.
//!
//! Every march runs `t` from `min` until it reaches `max`.

/// Closed interval [min, max] for range checking.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    /// Minimum value of the interval
    pub min: f32,
    /// Maximum value of the interval
    pub max: f32,
}

impl Interval {
    /// Create a new interval with given min and max values
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// True while a march parameter has not yet reached the far end.
    pub fn before_end(&self, t: f32) -> bool {
        t < self.max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn march_stops_at_max() {
        let interval = Interval::new(0.001, 10.0);
        assert!(interval.before_end(9.99));
        assert!(!interval.before_end(10.0));
    }
}
