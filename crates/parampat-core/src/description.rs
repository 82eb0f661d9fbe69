//! # Description Scanner
//!
//! A forward-only cursor over Machine descriptions, used by every
//! `create` to pull literal tokens, numbers and nested `<...>` groups out
//! of a description.
//!
//! Every method returns `None` when the text does not have the expected
//! shape, so a `create` can bail out with `?` and let the factory move on to
//! the next pattern kind.

use std::str::FromStr;

pub struct Cursor<'a> {
    rest: &'a str,
}

impl<'a> Cursor<'a> {
    pub fn new(description: &'a str) -> Self {
        Self {
            rest: description.trim(),
        }
    }

    /// Consume `token`, which must come next.
    pub fn eat(&mut self, token: &str) -> Option<()> {
        self.rest = self.rest.strip_prefix(token)?;
        Some(())
    }

    /// Consume `token` if it comes next.
    pub fn eat_if(&mut self, token: &str) -> bool {
        self.eat(token).is_some()
    }

    /// Return everything before the next `token`, leaving the cursor on it.
    pub fn take_until(&mut self, token: &str) -> Option<&'a str> {
        let at = self.rest.find(token)?;
        let (taken, rest) = self.rest.split_at(at);
        self.rest = rest;
        Some(taken)
    }

    /// Parse everything before the next `token` as a number and consume the
    /// token as well.
    pub fn number_until<T: FromStr>(&mut self, token: &str) -> Option<T> {
        let value = self.take_until(token)?.trim().parse().ok()?;
        self.eat(token)?;
        Some(value)
    }

    /// Read a `<...>` group, honouring nested groups, and return its inner
    /// text.
    pub fn group(&mut self) -> Option<&'a str> {
        let body = self.rest.strip_prefix('<')?;
        let mut depth = 1usize;
        for (at, c) in body.char_indices() {
            match c {
                '<' => depth += 1,
                '>' => {
                    depth -= 1;
                    if depth == 0 {
                        self.rest = &body[at + 1..];
                        return Some(&body[..at]);
                    }
                }
                _ => {}
            }
        }
        None
    }

    /// Succeed only if the whole description has been consumed.
    pub fn finish(self) -> Option<()> {
        self.rest.is_empty().then_some(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eat_and_finish() {
        let mut c = Cursor::new("  [Bool] ");
        assert!(c.eat("[Bool]").is_some());
        assert!(c.finish().is_some());
    }

    #[test]
    fn eat_rejects_other_token() {
        let mut c = Cursor::new("[Bool]");
        assert!(c.eat("[Integer").is_none());
        assert!(!c.eat_if("[Map"));
    }

    #[test]
    fn numbers_between_tokens() {
        let mut c = Cursor::new("-3...17 (inclusive)]");
        assert_eq!(c.number_until::<i64>("..."), Some(-3));
        assert_eq!(c.number_until::<i64>(" (inclusive)"), Some(17));
        assert!(c.eat("]").is_some());
        assert!(c.finish().is_some());
    }

    #[test]
    fn group_handles_nesting() {
        let mut c = Cursor::new("<[List of <[Integer]> of length 0...2 (inclusive)]> tail");
        assert_eq!(
            c.group(),
            Some("[List of <[Integer]> of length 0...2 (inclusive)]")
        );
        assert!(c.eat(" tail").is_some());
    }

    #[test]
    fn group_requires_balanced_brackets() {
        let mut c = Cursor::new("<[Integer]");
        assert_eq!(c.group(), None);
    }

    #[test]
    fn take_until_leaves_token() {
        let mut c = Cursor::new("key:<value>");
        assert_eq!(c.take_until("<"), Some("key:"));
        assert_eq!(c.group(), Some("value"));
    }
}
