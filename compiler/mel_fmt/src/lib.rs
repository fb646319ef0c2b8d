//! Mel Fmt - printer for mel expressions.
//!
//! One rendering rule per [`Expr`] variant, mirroring the syntax the reader
//! accepts:
//!
//! ```text
//! (val N)  (var ID)  (add A B)  (sub A B)  (if A B then T else E)
//! (let ID = V in B)  (function ID BODY)  (call F A)
//! ```
//!
//! The reader skips `then`, `else`, `=` and `in`, so every printed tree
//! reads back as itself. A closure's captured environment is never printed.

use mel_ir::{Expr, StringInterner, Value};
use mel_stack::ensure_sufficient_stack;

/// Writes expressions into an in-memory buffer.
pub struct Printer<'a> {
    interner: &'a StringInterner,
    buffer: String,
}

impl<'a> Printer<'a> {
    pub fn new(interner: &'a StringInterner) -> Self {
        Printer {
            interner,
            buffer: String::new(),
        }
    }

    /// Text printed so far.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Consume the printer and return its output.
    pub fn finish(self) -> String {
        self.buffer
    }

    /// Append `expr` to the output.
    pub fn print(&mut self, expr: &Expr) {
        ensure_sufficient_stack(|| self.print_inner(expr));
    }

    fn print_inner(&mut self, expr: &Expr) {
        match expr {
            Expr::Literal(n) => {
                self.buffer.push_str("(val ");
                self.buffer.push_str(&n.to_string());
                self.buffer.push(')');
            }
            Expr::Variable(name) => {
                self.buffer.push_str("(var ");
                self.buffer.push_str(self.interner.lookup(*name));
                self.buffer.push(')');
            }
            Expr::Add(left, right) => self.print_pair("add", left, right),
            Expr::Subtract(left, right) => self.print_pair("sub", left, right),
            Expr::Conditional {
                cmp_left,
                cmp_right,
                then_branch,
                else_branch,
            } => {
                self.buffer.push_str("(if ");
                self.print(cmp_left);
                self.buffer.push(' ');
                self.print(cmp_right);
                self.buffer.push_str(" then ");
                self.print(then_branch);
                self.buffer.push_str(" else ");
                self.print(else_branch);
                self.buffer.push(')');
            }
            Expr::Binding { name, bound, body } => {
                self.buffer.push_str("(let ");
                self.buffer.push_str(self.interner.lookup(*name));
                self.buffer.push_str(" = ");
                self.print(bound);
                self.buffer.push_str(" in ");
                self.print(body);
                self.buffer.push(')');
            }
            Expr::Closure(closure) => {
                self.buffer.push_str("(function ");
                self.buffer.push_str(self.interner.lookup(closure.param));
                self.buffer.push(' ');
                self.print(&closure.body);
                self.buffer.push(')');
            }
            Expr::Application { callee, arg } => self.print_pair("call", callee, arg),
        }
    }

    fn print_pair(&mut self, keyword: &str, left: &Expr, right: &Expr) {
        self.buffer.push('(');
        self.buffer.push_str(keyword);
        self.buffer.push(' ');
        self.print(left);
        self.buffer.push(' ');
        self.print(right);
        self.buffer.push(')');
    }
}

/// Print any expression.
///
/// # Example
///
/// ```
/// use mel_ir::{Expr, StringInterner};
///
/// let interner = StringInterner::new();
/// let x = interner.intern("x");
/// let expr = Expr::add(Expr::variable(x), Expr::literal(1));
/// assert_eq!(mel_fmt::print_expr(&expr, &interner), "(add (var x) (val 1))");
/// ```
pub fn print_expr(expr: &Expr, interner: &StringInterner) -> String {
    let mut printer = Printer::new(interner);
    printer.print(expr);
    printer.finish()
}

/// Print the final result of a program.
pub fn render_result(value: &Value, interner: &StringInterner) -> String {
    print_expr(&value.clone().into_expr(), interner)
}
