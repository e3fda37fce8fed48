use std::iter::FusedIterator;
use std::slice;

use super::Node;

/// A child visited by [`NodeIter`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Child<'a> {
    /// A sequence item.
    Item(&'a Node),
    /// A map entry.
    Entry { key: &'a Node, value: &'a Node },
}

impl<'a> Child<'a> {
    /// The node of a sequence item, or the value of a map entry.
    pub fn node(&self) -> &'a Node {
        match *self {
            Child::Item(node) => node,
            Child::Entry { value, .. } => value,
        }
    }

    pub fn key(&self) -> Option<&'a Node> {
        match *self {
            Child::Item(_) => None,
            Child::Entry { key, .. } => Some(key),
        }
    }
}

/// Forward cursor over a node's children, whatever shape its content has.
#[derive(Debug, Clone, Default)]
pub enum NodeIter<'a> {
    #[default]
    Empty,
    Sequence(slice::Iter<'a, Node>),
    Map(slice::Iter<'a, (Node, Node)>),
}

impl NodeIter<'_> {
    /// True once no children remain.
    pub fn is_done(&self) -> bool {
        self.len() == 0
    }
}

impl<'a> Iterator for NodeIter<'a> {
    type Item = Child<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            NodeIter::Empty => None,
            NodeIter::Sequence(items) => items.next().map(Child::Item),
            NodeIter::Map(entries) => entries.next().map(|(key, value)| Child::Entry { key, value }),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            NodeIter::Empty => (0, Some(0)),
            NodeIter::Sequence(items) => items.size_hint(),
            NodeIter::Map(entries) => entries.size_hint(),
        }
    }
}

impl ExactSizeIterator for NodeIter<'_> {}

impl FusedIterator for NodeIter<'_> {}
