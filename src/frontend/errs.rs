use super::span::Span;

/// Value handed back in place of a result by callers that report the error
/// and keep going.
pub const FALLBACK_VALUE: f64 = 0.0;

#[derive(Debug, PartialEq)]
pub enum Error {
    /// Malformed or unexpected token sequence, including malformed numeric
    /// literals and trailing tokens after a complete expression.
    Syntax(Span),
    /// A `(` was opened without a matching `)` at the expected position.
    UnbalancedParens(Span),
    /// The input was empty or entirely whitespace.
    NoExpression,
    /// The right-hand operand of `/` or `%` was zero.
    DivideByZero(Span),
}

pub type EvalResult<T> = Result<T, Error>;

impl Error {
    pub fn render(&self, source: &str) -> String {
        match self {
            Error::Syntax(span) => {
                format!("{}: syntax error.", get_error_prefix(span, source))
            }
            Error::UnbalancedParens(span) => {
                format!("{}: unbalanced parentheses.", get_error_prefix(span, source))
            }
            Error::NoExpression => String::from("Error: no expression."),
            Error::DivideByZero(span) => {
                format!("{}: division by zero.", get_error_prefix(span, source))
            }
        }
    }
}

fn get_error_prefix(span: &Span, source: &str) -> String {
    // End-of-input spans sit one past the last byte and can't quote anything.
    if span.lo < source.len() {
        format!("Error at '{}'", span.extract_string(source).unwrap_or("?"))
    } else {
        String::from("Error at end")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_points_at_source() {
        let source = "1 + )";
        let msg = Error::Syntax(Span::new(4, 5)).render(source);
        assert_eq!(msg, "Error at ')': syntax error.");
    }

    #[test]
    fn render_at_end() {
        let source = "(1+2";
        let msg = Error::UnbalancedParens(Span::new(4, 4)).render(source);
        assert_eq!(msg, "Error at end: unbalanced parentheses.");
    }

    #[test]
    fn render_without_span() {
        assert_eq!(Error::NoExpression.render(""), "Error: no expression.");
    }
}
