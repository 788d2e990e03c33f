//! Sandboxed arithmetic expression parser.
//!
//! Recursive descent over `+ - * / ( )`, unary minus, and numeric
//! literals. Identifiers are substituted away before text reaches this
//! parser, so any remaining letter makes the parse fail; the caller turns
//! that failure into the soft fallback (displaying the substituted text
//! verbatim) rather than an error.

/// Evaluate an arithmetic expression. `None` means "cannot parse", which
/// includes division by zero and non-finite results.
pub(crate) fn eval_arith(text: &str) -> Option<f64> {
    let mut parser = Parser {
        bytes: text.as_bytes(),
        pos: 0,
    };
    let value = parser.expr(0)?;
    parser.skip_ws();
    if parser.pos != parser.bytes.len() {
        return None;
    }
    value.is_finite().then_some(value)
}

const MAX_DEPTH: u32 = 32;

struct Parser<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl Parser<'_> {
    fn skip_ws(&mut self) {
        while self.bytes.get(self.pos) == Some(&b' ') {
            self.pos += 1;
        }
    }

    fn peek(&mut self) -> Option<u8> {
        self.skip_ws();
        self.bytes.get(self.pos).copied()
    }

    fn eat(&mut self, ch: u8) -> bool {
        if self.peek() == Some(ch) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// `expr := term (('+' | '-') term)*`
    fn expr(&mut self, depth: u32) -> Option<f64> {
        if depth > MAX_DEPTH {
            return None;
        }
        let mut acc = self.term(depth)?;
        loop {
            if self.eat(b'+') {
                acc += self.term(depth)?;
            } else if self.eat(b'-') {
                acc -= self.term(depth)?;
            } else {
                return Some(acc);
            }
        }
    }

    /// `term := factor (('*' | '/') factor)*`
    fn term(&mut self, depth: u32) -> Option<f64> {
        let mut acc = self.factor(depth)?;
        loop {
            if self.eat(b'*') {
                acc *= self.factor(depth)?;
            } else if self.eat(b'/') {
                let divisor = self.factor(depth)?;
                if divisor == 0.0 {
                    return None;
                }
                acc /= divisor;
            } else {
                return Some(acc);
            }
        }
    }

    /// `factor := '-' factor | '(' expr ')' | number`
    fn factor(&mut self, depth: u32) -> Option<f64> {
        if self.eat(b'-') {
            return Some(-self.factor(depth + 1)?);
        }
        if self.eat(b'(') {
            let inner = self.expr(depth + 1)?;
            if !self.eat(b')') {
                return None;
            }
            return Some(inner);
        }
        self.number()
    }

    fn number(&mut self) -> Option<f64> {
        self.skip_ws();
        let start = self.pos;
        while matches!(self.bytes.get(self.pos), Some(b'0'..=b'9') | Some(&b'.')) {
            self.pos += 1;
        }
        if self.pos == start {
            return None;
        }
        std::str::from_utf8(&self.bytes[start..self.pos])
            .ok()?
            .parse()
            .ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literals() {
        assert_eq!(eval_arith("42"), Some(42.0));
        assert_eq!(eval_arith("2.5"), Some(2.5));
        assert_eq!(eval_arith("  7  "), Some(7.0));
    }

    #[test]
    fn test_precedence() {
        assert_eq!(eval_arith("2 + 3 * 4"), Some(14.0));
        assert_eq!(eval_arith("(2 + 3) * 4"), Some(20.0));
        assert_eq!(eval_arith("10 - 2 - 3"), Some(5.0));
    }

    #[test]
    fn test_unary_minus() {
        assert_eq!(eval_arith("-3"), Some(-3.0));
        assert_eq!(eval_arith("2 * -3"), Some(-6.0));
    }

    #[test]
    fn test_division() {
        assert_eq!(eval_arith("10 / 4"), Some(2.5));
        assert_eq!(eval_arith("1 / 0"), None);
    }

    #[test]
    fn test_rejects_identifiers() {
        assert_eq!(eval_arith("x + 1"), None);
        assert_eq!(eval_arith("hello"), None);
    }

    #[test]
    fn test_rejects_trailing_garbage() {
        assert_eq!(eval_arith("1 + 2)"), None);
        assert_eq!(eval_arith("(1 + 2"), None);
        assert_eq!(eval_arith(""), None);
    }
}
