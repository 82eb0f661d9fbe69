//! Integer and floating point range patterns.
//!
//! Both bounds are inclusive. A pattern whose upper bound is below its lower
//! bound is unbounded and accepts any parseable number.

use super::PatternKind;
use crate::description::Cursor;
use crate::primitives::{DOUBLE_PREFIX, INTEGER_PREFIX, MAX_DOUBLE_TOKEN, MIN_DOUBLE_TOKEN};
use crate::types::OutputStyle;

// =============================================================================
// INTEGER
// =============================================================================

/// Accepts integers, optionally within `[lower_bound, upper_bound]`.
///
/// Bounds are `i128` so that the range of every primitive integer up to 64
/// bits can be expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Integer {
    lower_bound: i128,
    upper_bound: i128,
}

impl Integer {
    /// Integers in `[lower_bound, upper_bound]`, or any integer if
    /// `upper_bound < lower_bound`.
    #[must_use]
    pub const fn new(lower_bound: i128, upper_bound: i128) -> Self {
        Self {
            lower_bound,
            upper_bound,
        }
    }

    /// Any integer.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self::new(1, 0)
    }

    #[must_use]
    pub const fn lower_bound(&self) -> i128 {
        self.lower_bound
    }

    #[must_use]
    pub const fn upper_bound(&self) -> i128 {
        self.upper_bound
    }

    /// `false` if every integer is accepted.
    #[must_use]
    pub const fn is_bounded(&self) -> bool {
        self.lower_bound <= self.upper_bound
    }
}

impl Default for Integer {
    /// The full `i64` range.
    fn default() -> Self {
        Self::new(i128::from(i64::MIN), i128::from(i64::MAX))
    }
}

impl PatternKind for Integer {
    const PREFIX: &'static str = INTEGER_PREFIX;

    fn is_match(&self, test: &str) -> bool {
        match test.trim().parse::<i128>() {
            Ok(value) => {
                !self.is_bounded() || (self.lower_bound..=self.upper_bound).contains(&value)
            }
            Err(_) => false,
        }
    }

    fn description(&self, style: OutputStyle) -> String {
        let (lo, hi) = (self.lower_bound, self.upper_bound);
        match (style, self.is_bounded()) {
            (OutputStyle::Machine, true) => {
                format!("{INTEGER_PREFIX} range {lo}...{hi} (inclusive)]")
            }
            (OutputStyle::Machine, false) => format!("{INTEGER_PREFIX}]"),
            (OutputStyle::Text, true) => format!("An integer n such that {lo} <= n <= {hi}"),
            (OutputStyle::Text, false) => "An integer n".to_string(),
            (OutputStyle::LaTeX, true) => {
                format!("An integer $n$ such that ${lo}\\leq n \\leq {hi}$")
            }
            (OutputStyle::LaTeX, false) => "An integer $n$".to_string(),
        }
    }

    fn create(description: &str) -> Option<Self> {
        let mut c = Cursor::new(description);
        c.eat(INTEGER_PREFIX)?;
        if c.eat_if("]") {
            c.finish()?;
            return Some(Self::unbounded());
        }
        c.eat(" range ")?;
        let lower = c.number_until("...")?;
        let upper = c.number_until(" (inclusive)]")?;
        c.finish()?;
        Some(Self::new(lower, upper))
    }
}

// =============================================================================
// DOUBLE
// =============================================================================

/// Accepts floating point numbers, optionally within
/// `[lower_bound, upper_bound]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Double {
    lower_bound: f64,
    upper_bound: f64,
}

impl Double {
    /// Numbers in `[lower_bound, upper_bound]`, or any number if
    /// `upper_bound < lower_bound`.
    #[must_use]
    pub const fn new(lower_bound: f64, upper_bound: f64) -> Self {
        Self {
            lower_bound,
            upper_bound,
        }
    }

    /// Any floating point number, including infinities and NaN.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self::new(1.0, 0.0)
    }

    #[must_use]
    pub const fn lower_bound(&self) -> f64 {
        self.lower_bound
    }

    #[must_use]
    pub const fn upper_bound(&self) -> f64 {
        self.upper_bound
    }

    /// `false` if every number is accepted.
    #[must_use]
    pub fn is_bounded(&self) -> bool {
        self.lower_bound <= self.upper_bound
    }
}

impl Default for Double {
    /// Every finite `f64`.
    fn default() -> Self {
        Self::new(-f64::MAX, f64::MAX)
    }
}

fn format_bound(value: f64) -> String {
    if value == -f64::MAX {
        MIN_DOUBLE_TOKEN.to_string()
    } else if value == f64::MAX {
        MAX_DOUBLE_TOKEN.to_string()
    } else {
        value.to_string()
    }
}

fn parse_bound(token: &str) -> Option<f64> {
    match token.trim() {
        MIN_DOUBLE_TOKEN => Some(-f64::MAX),
        MAX_DOUBLE_TOKEN => Some(f64::MAX),
        other => other.parse().ok(),
    }
}

impl PatternKind for Double {
    const PREFIX: &'static str = DOUBLE_PREFIX;

    fn is_match(&self, test: &str) -> bool {
        match test.trim().parse::<f64>() {
            Ok(value) => {
                !self.is_bounded() || (self.lower_bound <= value && value <= self.upper_bound)
            }
            Err(_) => false,
        }
    }

    fn description(&self, style: OutputStyle) -> String {
        if !self.is_bounded() {
            return match style {
                OutputStyle::Machine => format!("{DOUBLE_PREFIX}]"),
                OutputStyle::Text => "A floating point number v".to_string(),
                OutputStyle::LaTeX => "A floating point number $v$".to_string(),
            };
        }

        let lo = format_bound(self.lower_bound);
        let hi = format_bound(self.upper_bound);
        match style {
            OutputStyle::Machine => format!("{DOUBLE_PREFIX} {lo}...{hi} (inclusive)]"),
            OutputStyle::Text => {
                format!("A floating point number v such that {lo} <= v <= {hi}")
            }
            OutputStyle::LaTeX => {
                // Math mode: the sentinels need their underscore escaped.
                let lo = lo.replace('_', "\\_");
                let hi = hi.replace('_', "\\_");
                format!("A floating point number $v$ such that ${lo} \\leq v \\leq {hi}$")
            }
        }
    }

    fn create(description: &str) -> Option<Self> {
        let mut c = Cursor::new(description);
        c.eat(DOUBLE_PREFIX)?;
        if c.eat_if("]") {
            c.finish()?;
            return Some(Self::unbounded());
        }
        c.eat(" ")?;
        let lower = parse_bound(c.take_until("...")?)?;
        c.eat("...")?;
        let upper = parse_bound(c.take_until(" (inclusive)]")?)?;
        c.eat(" (inclusive)]")?;
        c.finish()?;
        Some(Self::new(lower, upper))
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_bounds_are_inclusive() {
        let p = Integer::new(-2, 5);
        assert!(p.is_match("-2"));
        assert!(p.is_match("5"));
        assert!(p.is_match(" 3 "));
        assert!(!p.is_match("-3"));
        assert!(!p.is_match("6"));
    }

    #[test]
    fn integer_rejects_trailing_garbage() {
        let p = Integer::default();
        assert!(!p.is_match("12 apples"));
        assert!(!p.is_match("1.5"));
        assert!(!p.is_match(""));
        assert!(!p.is_match("0x10"));
    }

    #[test]
    fn inverted_integer_bounds_accept_everything() {
        let p = Integer::new(10, 0);
        assert!(!p.is_bounded());
        assert!(p.is_match("-99999999999999999999"));
        assert!(p.is_match("42"));
        assert!(!p.is_match("forty-two"));
    }

    #[test]
    fn integer_descriptions() {
        let p = Integer::new(0, 10);
        assert_eq!(
            p.description(OutputStyle::Machine),
            "[Integer range 0...10 (inclusive)]"
        );
        assert_eq!(
            p.description(OutputStyle::Text),
            "An integer n such that 0 <= n <= 10"
        );
        assert_eq!(
            p.description(OutputStyle::LaTeX),
            "An integer $n$ such that $0\\leq n \\leq 10$"
        );
        assert_eq!(Integer::unbounded().description(OutputStyle::Machine), "[Integer]");
    }

    #[test]
    fn integer_create_round_trip() {
        for p in [Integer::new(-7, 7), Integer::default(), Integer::unbounded()] {
            let description = p.description(OutputStyle::Machine);
            let rebuilt = Integer::create(&description).expect("recognised");
            assert_eq!(rebuilt.description(OutputStyle::Machine), description);
        }
    }

    #[test]
    fn integer_create_rejects_foreign_descriptions() {
        assert!(Integer::create("[Double]").is_none());
        assert!(Integer::create("[Integer range 1...x (inclusive)]").is_none());
        assert!(Integer::create("[Integer] extra").is_none());
    }

    #[test]
    fn double_bounds_are_inclusive() {
        let p = Double::new(0.0, 1.0);
        assert!(p.is_match("0"));
        assert!(p.is_match("1.0"));
        assert!(p.is_match("5e-1"));
        assert!(!p.is_match("1.0000001"));
        assert!(!p.is_match("-0.1"));
        assert!(!p.is_match("0.5 m"));
    }

    #[test]
    fn default_double_rejects_non_finite() {
        let p = Double::default();
        assert!(p.is_match("1e300"));
        assert!(!p.is_match("inf"));
        assert!(!p.is_match("NaN"));
    }

    #[test]
    fn unbounded_double_accepts_any_number() {
        let p = Double::unbounded();
        assert!(p.is_match("inf"));
        assert!(p.is_match("-3.25"));
        assert!(!p.is_match("three"));
    }

    #[test]
    fn double_descriptions_use_sentinels() {
        assert_eq!(
            Double::default().description(OutputStyle::Machine),
            "[Double -MAX_DOUBLE...MAX_DOUBLE (inclusive)]"
        );
        assert_eq!(
            Double::new(0.0, 0.5).description(OutputStyle::Machine),
            "[Double 0...0.5 (inclusive)]"
        );
        assert_eq!(
            Double::new(0.0, 0.5).description(OutputStyle::Text),
            "A floating point number v such that 0 <= v <= 0.5"
        );
        assert_eq!(Double::unbounded().description(OutputStyle::Machine), "[Double]");
    }

    #[test]
    fn double_create_round_trip() {
        for p in [
            Double::new(-1.5, 2.25),
            Double::default(),
            Double::new(0.0, f64::MAX),
            Double::unbounded(),
        ] {
            let description = p.description(OutputStyle::Machine);
            let rebuilt = Double::create(&description).expect("recognised");
            assert_eq!(rebuilt.description(OutputStyle::Machine), description);
        }
    }

    #[test]
    fn double_create_restores_sentinels() {
        let p = Double::create("[Double -MAX_DOUBLE...3 (inclusive)]").expect("recognised");
        assert_eq!(p.lower_bound(), -f64::MAX);
        assert_eq!(p.upper_bound(), 3.0);
    }
}
