use super::*;

/// Mean and sample standard deviation of one metric.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct Moments {
    pub mean: f64,
    pub stdev: f64,
}

impl From<&Statistics> for Moments {
    fn from(stats: &Statistics) -> Self {
        Self {
            mean: stats.mean(),
            stdev: stats.stdev(),
        }
    }
}

impl std::fmt::Display for Moments {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:>10.3} {:>10.3}", self.mean, self.stdev)
    }
}

/// Result of a full simulation run.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Summary {
    pub strategy: String,
    pub samples: usize,
    pub durations: Moments,
    pub maxima: Moments,
}

impl Summary {
    pub fn new(strategy: &str, durations: &Statistics, maxima: &Statistics) -> Self {
        Self {
            strategy: strategy.to_string(),
            samples: durations.len(),
            durations: Moments::from(durations),
            maxima: Moments::from(maxima),
        }
    }
    pub fn json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "{} over {} sessions", self.strategy, self.samples)?;
        writeln!(f, "{:<10} {:>10} {:>10}", "", "mean", "stdev")?;
        writeln!(f, "{:<10} {}", "duration", self.durations)?;
        write!(f, "{:<10} {}", "maximum", self.maxima)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary() -> Summary {
        let durations = Statistics::from(vec![10, 20, 30]);
        let maxima = Statistics::from(vec![100, 100, 130]);
        Summary::new("Fibonacci", &durations, &maxima)
    }

    #[test]
    fn moments_follow_statistics() {
        let summary = summary();
        assert_eq!(summary.samples, 3);
        assert_eq!(summary.durations.mean, 20.0);
        assert_eq!(summary.durations.stdev, 10.0);
        assert_eq!(summary.maxima.mean, 110.0);
    }

    #[test]
    fn serializes_to_json() {
        let json = summary().json().unwrap();
        let value = serde_json::from_str::<serde_json::Value>(&json).unwrap();
        assert_eq!(value["strategy"], "Fibonacci");
        assert_eq!(value["samples"], 3);
        assert_eq!(value["durations"]["mean"], 20.0);
    }

    #[test]
    fn renders_a_table() {
        let text = summary().to_string();
        assert!(text.starts_with("Fibonacci over 3 sessions"));
        assert!(text.contains("duration"));
        assert!(text.contains("20.000"));
    }
}
