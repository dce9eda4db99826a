use super::{visit_mut, Expr, Value, VisitMut};
use crate::{Error, Result};

/// Prepares a filter expression for a query that tracks its own bind values.
///
/// Every constant value and every positional argument in `expr` is replaced
/// with an [`Expr::Param`] placeholder. The corresponding values are appended
/// to `binds` in the order the placeholders appear, which is the order the
/// serializer emits them. `Expr::Arg(n)` resolves to `args[n]`.
///
/// On error `binds` is left untouched.
pub fn bind(expr: &mut Expr, args: &[Value], binds: &mut Vec<Value>) -> Result<()> {
    let mut bind = Bind {
        args,
        used: vec![false; args.len()],
        binds: vec![],
        error: None,
    };

    bind.visit_expr_mut(expr);

    if let Some(err) = bind.error {
        return Err(err);
    }

    if let Some(position) = bind.used.iter().position(|used| !used) {
        return Err(Error::invalid_statement(format!(
            "argument {position} is not referenced by the filter"
        )));
    }

    binds.extend(bind.binds);
    Ok(())
}

struct Bind<'a> {
    args: &'a [Value],
    used: Vec<bool>,
    binds: Vec<Value>,
    error: Option<Error>,
}

impl VisitMut for Bind<'_> {
    fn visit_expr_mut(&mut self, expr: &mut Expr) {
        if self.error.is_some() {
            return;
        }

        match expr {
            Expr::Value(value) => {
                self.binds.push(std::mem::take(value));
                *expr = Expr::Param;
            }
            Expr::Arg(expr_arg) => match self.args.get(expr_arg.position) {
                Some(value) => {
                    self.used[expr_arg.position] = true;
                    self.binds.push(value.clone());
                    *expr = Expr::Param;
                }
                None => {
                    self.error = Some(Error::invalid_statement(format!(
                        "argument position {} out of range; {} argument(s) supplied",
                        expr_arg.position,
                        self.args.len()
                    )));
                }
            },
            Expr::Param => {
                self.error = Some(Error::invalid_statement(
                    "filter already contains a bound parameter placeholder",
                ));
            }
            _ => visit_mut::visit_expr_mut(self, expr),
        }
    }
}
