mod bind;
pub use bind::bind;

mod direction;
pub use direction::Direction;

mod directive;
pub use directive::Directive;

mod expr;
pub use expr::Expr;

mod expr_and;
pub use expr_and::ExprAnd;

mod expr_arg;
pub use expr_arg::ExprArg;

mod expr_binary_op;
pub use expr_binary_op::ExprBinaryOp;

mod expr_column;
pub use expr_column::ExprColumn;

mod expr_in_list;
pub use expr_in_list::ExprInList;

mod expr_is_null;
pub use expr_is_null::ExprIsNull;

mod expr_not;
pub use expr_not::ExprNot;

mod expr_or;
pub use expr_or::ExprOr;

mod expr_set;
pub use expr_set::ExprSet;

mod expr_set_op;
pub use expr_set_op::ExprSetOp;

mod filter;
pub use filter::Filter;

mod ident;
pub use ident::Ident;

mod limit;
pub use limit::Limit;

mod node;
pub use node::Node;

mod op_binary;
pub use op_binary::BinaryOp;

mod op_set;
pub use op_set::SetOp;

mod order_by;
pub use order_by::OrderBy;

mod order_by_expr;
pub use order_by_expr::OrderByExpr;

mod path;
pub use path::Path;

mod query;
pub use query::Query;

mod returning;
pub use returning::Returning;

mod select;
pub use select::Select;

mod table_derived;
pub use table_derived::TableDerived;

mod table_ref;
pub use table_ref::TableRef;

mod value;
pub use value::Value;

pub mod visit;
pub use visit::Visit;

pub mod visit_mut;
pub use visit_mut::VisitMut;
