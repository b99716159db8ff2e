//! Scanner for the fixed-width canonical text forms.

use crate::error::PeriodError;
use crate::granularity::Granularity;

/// Cursor over a canonical period string.
pub(crate) struct Scanner<'a> {
    input: &'a str,
    pos: usize,
    granularity: Granularity,
}

impl<'a> Scanner<'a> {
    pub(crate) fn new(input: &'a str, granularity: Granularity) -> Self {
        Self {
            input,
            pos: 0,
            granularity,
        }
    }

    /// Reads exactly `width` ASCII digits.
    pub(crate) fn number(&mut self, width: usize, what: &str) -> Result<u32, PeriodError> {
        let digits = self
            .input
            .get(self.pos..self.pos + width)
            .filter(|s| s.bytes().all(|b| b.is_ascii_digit()))
            .ok_or_else(|| self.error(format!("expected {width}-digit {what} at offset {}", self.pos)))?;
        self.pos += width;
        digits
            .parse()
            .map_err(|_| self.error(format!("invalid {what} {digits:?}")))
    }

    /// Consumes the byte `expected`.
    pub(crate) fn literal(&mut self, expected: u8) -> Result<(), PeriodError> {
        match self.input.as_bytes().get(self.pos) {
            Some(&b) if b == expected => {
                self.pos += 1;
                Ok(())
            }
            _ => Err(self.error(format!(
                "expected {:?} at offset {}",
                char::from(expected),
                self.pos
            ))),
        }
    }

    /// Fails unless the whole input has been consumed.
    pub(crate) fn finish(&self) -> Result<(), PeriodError> {
        if self.pos != self.input.len() {
            return Err(self.error(format!("unexpected trailing input at offset {}", self.pos)));
        }
        Ok(())
    }

    pub(crate) fn error(&self, reason: impl Into<String>) -> PeriodError {
        PeriodError::Parse {
            granularity: self.granularity,
            input: self.input.to_string(),
            reason: reason.into(),
        }
    }

    /// Re-reports a construction failure as a parse failure of this input.
    pub(crate) fn reject(&self, err: PeriodError) -> PeriodError {
        match err {
            PeriodError::InvalidComponents(c) => self.error(c.to_string()),
            PeriodError::OutOfRange { .. } => self.error("outside the supported range"),
            other => self.error(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_fixed_width_fields() {
        let mut s = Scanner::new("2019-08", Granularity::Month);
        assert_eq!(s.number(4, "year").unwrap(), 2019);
        s.literal(b'-').unwrap();
        assert_eq!(s.number(2, "month").unwrap(), 8);
        s.finish().unwrap();
    }

    #[test]
    fn short_field_is_error() {
        let mut s = Scanner::new("201", Granularity::CalendarYear);
        let err = s.number(4, "year").unwrap_err();
        assert!(matches!(err, PeriodError::Parse { .. }));
    }

    #[test]
    fn signs_are_not_digits() {
        let mut s = Scanner::new("+019", Granularity::CalendarYear);
        assert!(s.number(4, "year").is_err());
    }

    #[test]
    fn trailing_input_is_error() {
        let mut s = Scanner::new("2019x", Granularity::CalendarYear);
        s.number(4, "year").unwrap();
        assert_eq!(
            s.finish().unwrap_err(),
            PeriodError::Parse {
                granularity: Granularity::CalendarYear,
                input: "2019x".to_string(),
                reason: "unexpected trailing input at offset 4".to_string(),
            }
        );
    }

    #[test]
    fn multibyte_input_does_not_panic() {
        let mut s = Scanner::new("20é9", Granularity::CalendarYear);
        assert!(s.number(4, "year").is_err());
    }
}
