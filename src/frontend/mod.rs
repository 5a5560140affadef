mod cursor;
mod errs;
mod evaluator;
mod lexer;
mod span;
mod token;

pub use errs::{Error, EvalResult, FALLBACK_VALUE};
pub use evaluator::{evaluate, evaluate_or_default, Evaluator};
pub use lexer::Lexer;
pub use span::Span;
pub use token::{SpannedToken, Token};
