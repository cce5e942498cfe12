use super::*;

const STRAIGHT: Odds = 35;
const SPLIT: Odds = 17;
const STREET: Odds = 11;
const CORNER: Odds = 8;
const FIVE: Odds = 6;
const LINE: Odds = 5;
const DOZEN: Odds = 2;
const COLUMN: Odds = 2;
const EVEN: Odds = 1;

const REDS: [usize; 18] = [
    1, 3, 5, 7, 9, 12, 14, 16, 18, 19, 21, 23, 25, 27, 30, 32, 34, 36,
];

/// Populates the 38 bins of a double-zero wheel with every outcome that
/// pays off on each number. Index 37 is the double-zero.
///
/// Outcome names follow the numbers they cover, joined by `-`, except
/// for the six even-money bets which are named outright.
pub struct BinBuilder {
    bins: Vec<Bin>,
}

impl BinBuilder {
    pub fn new() -> Self {
        Self {
            bins: vec![Bin::default(); BINS],
        }
    }

    /// Every bin, fully populated.
    pub fn build(mut self) -> Vec<Bin> {
        self.straights();
        self.splits();
        self.streets();
        self.corners();
        self.lines();
        self.five();
        self.evens();
        self.dozens();
        self.columns();
        self.bins
    }

    fn name(numbers: &[usize]) -> String {
        numbers
            .iter()
            .map(|n| n.to_string())
            .collect::<Vec<_>>()
            .join("-")
    }

    fn add(&mut self, numbers: &[usize], odds: Odds) {
        let outcome = Outcome::new(&Self::name(numbers), odds);
        for &n in numbers {
            self.bins[n].insert(outcome.clone());
        }
    }

    fn straights(&mut self) {
        for n in 0..=36 {
            self.add(&[n], STRAIGHT);
        }
        self.bins[ZERO_ZERO].insert(Outcome::new("00", STRAIGHT));
    }

    fn splits(&mut self) {
        for row in 0..12 {
            for n in [3 * row + 1, 3 * row + 2] {
                self.add(&[n, n + 1], SPLIT);
            }
        }
        for n in 1..=33 {
            self.add(&[n, n + 3], SPLIT);
        }
    }

    fn streets(&mut self) {
        for row in 0..12 {
            let n = 3 * row + 1;
            self.add(&[n, n + 1, n + 2], STREET);
        }
    }

    fn corners(&mut self) {
        for row in 0..11 {
            for n in [3 * row + 1, 3 * row + 2] {
                self.add(&[n, n + 1, n + 3, n + 4], CORNER);
            }
        }
    }

    fn lines(&mut self) {
        for row in 0..11 {
            let n = 3 * row + 1;
            self.add(&(n..n + 6).collect::<Vec<_>>(), LINE);
        }
    }

    fn five(&mut self) {
        let outcome = Outcome::new("00-0-1-2-3", FIVE);
        for n in [0, 1, 2, 3, ZERO_ZERO] {
            self.bins[n].insert(outcome.clone());
        }
    }

    fn evens(&mut self) {
        let red = Outcome::new("Red", EVEN);
        let black = Outcome::new("Black", EVEN);
        let low = Outcome::new("Low", EVEN);
        let high = Outcome::new("High", EVEN);
        let even = Outcome::new("Even", EVEN);
        let odd = Outcome::new("Odd", EVEN);
        for n in 1..=36 {
            let bin = &mut self.bins[n];
            bin.insert(if n < 19 { low.clone() } else { high.clone() });
            bin.insert(if n % 2 == 0 { even.clone() } else { odd.clone() });
            bin.insert(match REDS.contains(&n) {
                true => red.clone(),
                false => black.clone(),
            });
        }
    }

    fn dozens(&mut self) {
        for dozen in 0..3 {
            let numbers = (12 * dozen + 1..=12 * dozen + 12).collect::<Vec<_>>();
            self.add(&numbers, DOZEN);
        }
    }

    fn columns(&mut self) {
        for column in 1..=3 {
            let numbers = (column..=36).step_by(3).collect::<Vec<_>>();
            self.add(&numbers, COLUMN);
        }
    }
}

impl Default for BinBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bins() -> Vec<Bin> {
        BinBuilder::new().build()
    }

    #[test]
    fn thirty_eight_bins() {
        assert_eq!(bins().len(), BINS);
    }

    #[test]
    fn one_carries_every_covering_bet() {
        let bins = bins();
        let one = &bins[1];
        for name in [
            "1",
            "Red",
            "Odd",
            "Low",
            "1-2",
            "1-4",
            "1-2-3",
            "1-2-4-5",
            "1-2-3-4-5-6",
            "00-0-1-2-3",
            "1-2-3-4-5-6-7-8-9-10-11-12",
            "1-4-7-10-13-16-19-22-25-28-31-34",
        ] {
            assert!(one.contains_name(name), "bin 1 missing {}", name);
        }
        assert_eq!(one.len(), 12);
    }

    #[test]
    fn zeros_pay_straight_and_five_only() {
        let bins = bins();
        assert!(bins[0].contains_name("0"));
        assert!(bins[0].contains_name("00-0-1-2-3"));
        assert_eq!(bins[0].len(), 2);
        assert!(bins[ZERO_ZERO].contains_name("00"));
        assert!(bins[ZERO_ZERO].contains_name("00-0-1-2-3"));
        assert_eq!(bins[ZERO_ZERO].len(), 2);
    }

    #[test]
    fn colors_partition_the_numbers() {
        let bins = bins();
        let reds = bins.iter().filter(|b| b.contains_name("Red")).count();
        let blacks = bins.iter().filter(|b| b.contains_name("Black")).count();
        assert_eq!(reds, 18);
        assert_eq!(blacks, 18);
        assert!(bins.iter().all(|b| !(b.contains_name("Red") && b.contains_name("Black"))));
    }

    #[test]
    fn middle_number_has_four_splits_and_corners() {
        let bins = bins();
        let five = &bins[5];
        let splits = five.iter().filter(|o| o.odds() == SPLIT).count();
        let corners = five.iter().filter(|o| o.odds() == CORNER).count();
        assert_eq!(splits, 4);
        assert_eq!(corners, 4);
    }
}
