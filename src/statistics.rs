/// A growing list of integer samples with summary statistics.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct Statistics(Vec<i64>);

impl Statistics {
    pub fn push(&mut self, value: i64) {
        self.0.push(value);
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn values(&self) -> &[i64] {
        &self.0
    }
    /// Arithmetic mean, or zero with no samples.
    pub fn mean(&self) -> f64 {
        match self.0.len() {
            0 => 0.0,
            n => self.0.iter().sum::<i64>() as f64 / n as f64,
        }
    }
    /// Sample standard deviation (n - 1 denominator) rounded to three
    /// decimals, or zero with fewer than two samples.
    pub fn stdev(&self) -> f64 {
        match self.0.len() {
            0 | 1 => 0.0,
            n => {
                let mean = self.mean();
                let sum = self
                    .0
                    .iter()
                    .map(|&x| (x as f64 - mean).powi(2))
                    .sum::<f64>();
                let stdev = (sum / (n - 1) as f64).sqrt();
                (stdev * 1000.0).round() / 1000.0
            }
        }
    }
}

impl From<Vec<i64>> for Statistics {
    fn from(values: Vec<i64>) -> Self {
        Self(values)
    }
}

impl FromIterator<i64> for Statistics {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl std::fmt::Display for Statistics {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:.3} ± {:.3}", self.mean(), self.stdev())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_of_samples() {
        let stats = Statistics::from(vec![9, 8, 5, 9, 9, 4, 5, 8, 10, 7, 8, 8]);
        assert_eq!(stats.mean(), 7.5);
    }

    #[test]
    fn stdev_uses_sample_denominator() {
        let stats = Statistics::from(vec![9, 8, 5, 9, 9, 4, 5, 8, 10, 7, 8, 8]);
        assert_eq!(stats.stdev(), 1.883);
    }

    #[test]
    fn degenerate_inputs_are_zero() {
        assert_eq!(Statistics::default().mean(), 0.0);
        assert_eq!(Statistics::default().stdev(), 0.0);
        assert_eq!(Statistics::from(vec![42]).stdev(), 0.0);
        assert_eq!(Statistics::from(vec![42]).mean(), 42.0);
    }

    #[test]
    fn constant_samples_have_no_spread() {
        let stats = (0..10).map(|_| 3).collect::<Statistics>();
        assert_eq!(stats.len(), 10);
        assert_eq!(stats.stdev(), 0.0);
    }
}
