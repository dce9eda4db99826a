use super::{Visit, VisitMut};
use std::fmt;

/// A statement tree node that can be walked by a visitor.
///
/// Children are visited in the order they are serialized.
pub trait Node: fmt::Debug {
    fn visit<V: Visit>(&self, visit: V)
    where
        Self: Sized;

    fn visit_mut<V: VisitMut>(&mut self, visit: V);
}

/// Optional clauses such as `ORDER BY` are visited only when present.
impl<T: Node> Node for Option<T> {
    fn visit<V: Visit>(&self, visit: V)
    where
        Self: Sized,
    {
        if let Some(node) = self {
            node.visit(visit);
        }
    }

    fn visit_mut<V: VisitMut>(&mut self, visit: V) {
        if let Some(node) = self {
            node.visit_mut(visit);
        }
    }
}
