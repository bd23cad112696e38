use std::iter::FusedIterator;

use crate::list::{DLList, Item, Node, END, START};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum Direction {
    Forward,
    Reverse,
}

/// An iterator over the nodes of a `DLList<T>`.
///
/// Created by [`DLList::nodes`] and friends. It yields handles, never
/// sentinels, and stops at its stop node or at the far sentinel, whichever
/// comes first. The iterator borrows the list, so the list cannot be changed
/// while it is alive.
///
/// [`DLList::nodes`]: struct.DLList.html#method.nodes
pub struct Nodes<'a, T>
where
    T: 'a,
{
    list: &'a DLList<T>,
    current: usize,
    stop: usize,
    direction: Direction,
}

impl<'a, T> Nodes<'a, T> {
    pub(crate) fn new(
        list: &'a DLList<T>,
        from: usize,
        stop: usize,
        direction: Direction,
    ) -> Self {
        // starting on the near sentinel means starting at the first element
        let current = match direction {
            Direction::Forward if from == START => list.entry(START).next,
            Direction::Reverse if from == END => list.entry(END).prev,
            _ => from,
        };

        Nodes {
            list,
            current,
            stop,
            direction,
        }
    }
}

impl<'a, T> Iterator for Nodes<'a, T> {
    type Item = Node;

    fn next(&mut self) -> Option<Node> {
        if self.current == self.stop {
            return None;
        }

        let entry = self.list.entry(self.current);

        if entry.item.is_sentinel() {
            return None;
        }

        let node = Node {
            index: self.current,
            generation: entry.generation,
        };

        // set up our next iteration
        self.current = match self.direction {
            Direction::Forward => entry.next,
            Direction::Reverse => entry.prev,
        };

        Some(node)
    }
}

impl<'a, T> FusedIterator for Nodes<'a, T> {}

/// An iterator of references to the items in a `DLList<T>`.
pub struct Iter<'a, T>
where
    T: 'a,
{
    list: &'a DLList<T>,
    front: usize,
    back: usize,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(list: &'a DLList<T>) -> Self {
        Iter {
            list,
            front: list.entry(START).next,
            back: list.entry(END).prev,
            remaining: list.len(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let list = self.list;
        let entry = list.entry(self.front);

        self.front = entry.next;
        self.remaining -= 1;

        match &entry.item {
            Item::Value(value) => Some(value),
            Item::Start | Item::End => panic!("Corrupted list"),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let list = self.list;
        let entry = list.entry(self.back);

        self.back = entry.prev;
        self.remaining -= 1;

        match &entry.item {
            Item::Value(value) => Some(value),
            Item::Start | Item::End => panic!("Corrupted list"),
        }
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> FusedIterator for Iter<'a, T> {}

/// An owning iterator over the items of a `DLList<T>`.
pub struct IntoIter<T> {
    list: DLList<T>,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(list: DLList<T>) -> Self {
        IntoIter { list }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.list.pop_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}
