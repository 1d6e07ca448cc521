//! Stat counters that count up from zero when scrolled into view.

/// Parsed counter text: every digit forms the number, every other character
/// is kept as a literal suffix ("500+" → 500 and "+").
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CounterTarget {
    pub value: u64,
    pub suffix: String,
}

impl CounterTarget {
    /// `None` when the text has no digits or the number overflows.
    pub fn parse(text: &str) -> Option<Self> {
        let digits: String = text.chars().filter(|c| c.is_ascii_digit()).collect();
        let value = digits.parse::<u64>().ok()?;
        let suffix = text.chars().filter(|c| !c.is_ascii_digit()).collect();
        Some(Self { value, suffix })
    }

    pub fn render(&self, value: u64) -> String {
        format!("{}{}", value, self.suffix)
    }
}

/// Fixed-step interpolation from 0 to the target.
#[derive(Clone, Debug)]
pub struct CounterAnimation {
    target: CounterTarget,
    increment: f64,
    current: f64,
    done: bool,
}

impl CounterAnimation {
    pub fn new(target: CounterTarget, steps: u32) -> Self {
        let increment = target.value as f64 / steps.max(1) as f64;
        Self {
            target,
            increment,
            current: 0.0,
            done: false,
        }
    }

    pub fn initial_text(&self) -> String {
        self.target.render(0)
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Advance one tick and return the text to show.
    pub fn step(&mut self) -> String {
        self.current += self.increment;
        if self.current >= self.target.value as f64 {
            self.done = true;
            return self.target.render(self.target.value);
        }
        self.target.render(self.current.floor() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_suffix() {
        let t = CounterTarget::parse("500+").expect("digits");
        assert_eq!(t.value, 500);
        assert_eq!(t.suffix, "+");
        assert_eq!(CounterTarget::parse("Banyak"), None);
    }

    #[test]
    fn separators_join_into_suffix() {
        let t = CounterTarget::parse("1.200+").expect("digits");
        assert_eq!(t.value, 1200);
        assert_eq!(t.suffix, ".+");
    }

    #[test]
    fn reaches_target_in_step_count() {
        let t = CounterTarget::parse("50K").expect("digits");
        let mut a = CounterAnimation::new(t, 50);
        assert_eq!(a.initial_text(), "0K");
        let mut last = String::new();
        let mut ticks = 0;
        while !a.is_done() {
            last = a.step();
            ticks += 1;
            assert!(ticks <= 51);
        }
        assert_eq!(last, "50K");
        assert_eq!(ticks, 50);
    }

    #[test]
    fn zero_target_finishes_immediately() {
        let mut a = CounterAnimation::new(CounterTarget::parse("0").expect("digits"), 50);
        assert_eq!(a.step(), "0");
        assert!(a.is_done());
    }
}
