use crate::graph::adjacency::{AdjacencyView, Hop};

/// Trait for providing graph adjacency to the search algorithms
pub trait GraphProvider {
    fn outgoing(&self, id: &str) -> &[Hop];
    fn sources(&self) -> &[String];
    fn contains(&self, id: &str) -> bool;
}

impl GraphProvider for AdjacencyView {
    fn outgoing(&self, id: &str) -> &[Hop] {
        AdjacencyView::outgoing(self, id)
    }

    fn sources(&self) -> &[String] {
        AdjacencyView::sources(self)
    }

    fn contains(&self, id: &str) -> bool {
        AdjacencyView::contains(self, id)
    }
}
