use super::errs::{Error, EvalResult, FALLBACK_VALUE};
use super::lexer::Lexer;
use super::token::{SpannedToken, Token};

/// Evaluates an arithmetic expression, returning its value or the first
/// error encountered.
pub fn evaluate(source: &str) -> EvalResult<f64> {
    Evaluator::new(source).evaluate()
}

/// Evaluates an arithmetic expression, mapping any error to
/// [`FALLBACK_VALUE`].
pub fn evaluate_or_default(source: &str) -> f64 {
    evaluate(source).unwrap_or(FALLBACK_VALUE)
}

/// Recursive-descent evaluator. Each precedence layer consumes the
/// operators at its level in a loop and folds the result immediately;
/// no syntax tree is built.
///
/// The only mutable state is the lexer plus the one unconsumed token, so
/// after any layer returns, `current` is the first token that layer's
/// grammar rule did not claim.
pub struct Evaluator<'a> {
    lexer: Lexer<'a>,
    current: SpannedToken, // first unconsumed token
}

impl<'src> Evaluator<'src> {
    pub fn new(source: &'src str) -> Self {
        let mut lexer = Lexer::new(source);
        let current = lexer.next_token();
        Evaluator { lexer, current }
    }

    // ---- Simple token-based operations ----

    /// Advances the stream by one token
    fn bump(&mut self) {
        self.current = self.lexer.next_token();
    }

    /// Checks whether or not the current token matches the given token
    fn check(&self, t: &Token) -> bool {
        self.current.token == *t
    }

    /// Checks whether or not the current token matches the given token,
    /// and if so, consumes it, returning true.
    fn try_eat(&mut self, t: &Token) -> bool {
        if self.check(t) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn syntax_error(&self) -> Error {
        Error::Syntax(self.current.span)
    }

    // ---- evaluation layers, outermost first ----

    /// Entry point. The whole input must be consumed; trailing tokens after
    /// a complete expression are rejected.
    pub fn evaluate(mut self) -> EvalResult<f64> {
        if self.check(&Token::EndOfInput) {
            return Err(Error::NoExpression);
        }

        let value = self.eval_term()?;

        if !self.check(&Token::EndOfInput) {
            return Err(self.syntax_error());
        }
        Ok(value)
    }

    /// Sums and differences, folded left-to-right.
    fn eval_term(&mut self) -> EvalResult<f64> {
        let mut value = self.eval_factor()?;
        loop {
            if self.try_eat(&Token::Plus) {
                value += self.eval_factor()?;
            } else if self.try_eat(&Token::Minus) {
                value -= self.eval_factor()?;
            } else {
                break;
            }
        }
        Ok(value)
    }

    /// Products, quotients, and remainders, folded left-to-right. A zero
    /// right-hand operand aborts before the operation is performed. Modulo
    /// truncates both operands to integers first.
    fn eval_factor(&mut self) -> EvalResult<f64> {
        let mut value = self.eval_power()?;
        loop {
            let op_span = self.current.span;
            match self.current.token {
                Token::Asterisk => {
                    self.bump();
                    value *= self.eval_power()?;
                }
                Token::Slash => {
                    self.bump();
                    let divisor = self.eval_power()?;
                    if divisor == 0.0 {
                        return Err(Error::DivideByZero(op_span));
                    }
                    value /= divisor;
                }
                Token::Percent => {
                    self.bump();
                    let divisor = self.eval_power()?;
                    if divisor.trunc() == 0.0 {
                        return Err(Error::DivideByZero(op_span));
                    }
                    value = ((value as i64) % (divisor as i64)) as f64;
                }
                _ => break,
            }
        }
        Ok(value)
    }

    /// Exponentiation, right-recursive. An exponent of exactly zero yields
    /// 1.0 for any base. Any other exponent is truncated to an integer and
    /// the base is multiplied by itself `exponent - 1` times, so exponent 1,
    /// fractional exponents below 2, and all negative exponents return the
    /// base unchanged.
    fn eval_power(&mut self) -> EvalResult<f64> {
        let base = self.eval_unary()?;
        if !self.try_eat(&Token::Caret) {
            return Ok(base);
        }

        let exponent = self.eval_power()?;
        if exponent == 0.0 {
            return Ok(1.0);
        }

        let mut value = base;
        let mut t = exponent as i64 - 1;
        while t > 0 {
            value *= base;
            t -= 1;
        }
        Ok(value)
    }

    /// A single optional leading sign. The sign applies to the group
    /// beneath it, so doubled signs are a syntax error.
    fn eval_unary(&mut self) -> EvalResult<f64> {
        let negate = if self.try_eat(&Token::Minus) {
            true
        } else {
            self.try_eat(&Token::Plus);
            false
        };

        let value = self.eval_group()?;
        Ok(if negate { -value } else { value })
    }

    /// A parenthesized full expression, or an atom.
    fn eval_group(&mut self) -> EvalResult<f64> {
        if !self.try_eat(&Token::LeftParen) {
            return self.eval_atom();
        }

        let value = self.eval_term()?;
        if !self.try_eat(&Token::RightParen) {
            return Err(Error::UnbalancedParens(self.current.span));
        }
        Ok(value)
    }

    /// A numeric literal. Anything else, including variable-shaped
    /// identifiers and the lexer's error tokens, is a syntax error.
    fn eval_atom(&mut self) -> EvalResult<f64> {
        match self.current.token {
            Token::Number(value) => {
                self.bump();
                Ok(value)
            }
            _ => Err(self.syntax_error()),
        }
    }
}
