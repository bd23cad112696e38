//! A `DLList<T>` with O(1) access by position.

use std::fmt;
use std::iter::FromIterator;
use std::ops;

use crate::error::{Error, Result};
use crate::iter::{IntoIter, Iter, Nodes};
use crate::list::{check_range, write_elements, DLList, Node};

/// A doubly linked list that also keeps a vector of its nodes in list order.
///
/// `nodes[i]` is always the node at position `i`, so [`node`] and everything
/// built on it (`get`, `set`, `remove`) skip the walk `DLList` has to do.
/// Every structural change goes through this type and updates the vector in
/// the same call. Handle-level splicing (`follow`, `precede`, `unlink`) is
/// only available on a plain [`DLList`]; here the list is exposed read-only
/// through [`as_list`].
///
/// [`node`]: #method.node
/// [`as_list`]: #method.as_list
/// [`DLList`]: struct.DLList.html
///
/// # Examples
///
/// ```
/// use dllist::IndexedList;
///
/// let mut list = IndexedList::new();
///
/// list.insert_all(0, vec![6, 7, 8]).unwrap();
///
/// let seven = list.node(1).unwrap();
///
/// assert_eq!(list.element(seven), Ok(&7));
/// assert_eq!(list.len(), 3);
/// assert_eq!(list.to_string(), "IndexedList(6, 7, 8)");
/// ```
#[derive(Clone)]
pub struct IndexedList<T> {
    list: DLList<T>,
    nodes: Vec<Node>,
}

impl<T> IndexedList<T> {
    /// Creates a new, empty `IndexedList<T>`.
    pub fn new() -> IndexedList<T> {
        IndexedList {
            list: DLList::new(),
            nodes: Vec::new(),
        }
    }

    /// Creates a new `IndexedList<T>` with room for `size` elements.
    pub fn with_capacity(size: usize) -> IndexedList<T> {
        IndexedList {
            list: DLList::with_capacity(size),
            nodes: Vec::with_capacity(size),
        }
    }

    /// The underlying list, for traversal and search.
    pub fn as_list(&self) -> &DLList<T> {
        &self.list
    }

    /// Returns the number of elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use dllist::IndexedList;
    ///
    /// let list: IndexedList<_> = vec![1, 2, 3].into();
    ///
    /// assert_eq!(list.len(), 3);
    /// ```
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Returns `true` if the list holds no elements.
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Returns the node at `index` in O(1).
    pub fn node(&self, index: usize) -> Result<Node> {
        match self.nodes.get(index) {
            Some(&node) => Ok(node),
            None => Err(Error::IndexOutOfRange {
                index,
                len: self.len(),
            }),
        }
    }

    /// Adds this item to the tail of the list, returning its node.
    pub fn append(&mut self, item: T) -> Node {
        let node = self.list.append(item);

        self.nodes.push(node);

        node
    }

    /// Adds this item to the head of the list, returning its node.
    ///
    /// This shifts the whole position vector, so it is O(n).
    pub fn prepend(&mut self, item: T) -> Node {
        let node = self.list.prepend(item);

        self.nodes.insert(0, node);

        node
    }

    /// Inserts every element of `values` so that the first one ends up at
    /// `index`, returning the first inserted node.
    ///
    /// The new nodes are collected by walking forward from the first one, so
    /// only the inserted run is visited.
    ///
    /// # Examples
    ///
    /// ```
    /// use dllist::IndexedList;
    ///
    /// let mut list: IndexedList<_> = vec![3, 4, 5].into();
    ///
    /// list.insert_all(1, vec![6, 7, 8]).unwrap();
    ///
    /// assert_eq!(list.iter().collect::<Vec<_>>(), vec![&3, &6, &7, &8, &4, &5]);
    /// assert_eq!(list.get(4), Ok(&4));
    /// ```
    pub fn insert_all<I>(&mut self, index: usize, values: I) -> Result<Option<Node>>
    where
        I: IntoIterator<Item = T>,
    {
        if index > self.len() {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.len(),
            });
        }

        let before = self.list.len();

        let anchor = if index == 0 {
            self.list.start()
        } else {
            self.nodes[index - 1]
        };
        let first = self.list.follow_all(anchor, values)?;

        if let Some(first) = first {
            let count = self.list.len() - before;
            let inserted: Vec<Node> = self.list.nodes_from(first)?.take(count).collect();

            self.nodes.splice(index..index, inserted);
        }

        Ok(first)
    }

    /// Inserts `value` so that it ends up at `index`.
    pub fn insert(&mut self, index: usize, value: T) -> Result<Node> {
        match self.insert_all(index, Some(value))? {
            Some(node) => Ok(node),
            None => panic!("Corrupted list"),
        }
    }

    /// Removes the element at `index` and returns it.
    pub fn remove(&mut self, index: usize) -> Result<T> {
        let node = self.node(index)?;
        let value = self.list.unlink(node)?;

        self.nodes.remove(index);

        Ok(value)
    }

    /// Removes `count` elements starting at `index`, returning them in order.
    ///
    /// Errors are reported like [`DLList::remove_range`]: a start past the
    /// end as itself, an overrunning range by its exclusive end.
    ///
    /// [`DLList::remove_range`]: struct.DLList.html#method.remove_range
    pub fn remove_range(&mut self, index: usize, count: usize) -> Result<Vec<T>> {
        check_range(index, count, self.len())?;

        if count == 0 {
            return Ok(Vec::new());
        }

        let end = index + count;
        let stop = match self.nodes.get(end) {
            Some(&node) => node,
            None => self.list.end(),
        };
        let values = self.list.unlink_until(self.nodes[index], stop)?;

        self.nodes.drain(index..end);

        Ok(values)
    }

    /// Removes every element, orphaning every handle.
    pub fn clear(&mut self) {
        self.list.clear();
        self.nodes.clear();
    }

    /// Removes the head of the list, returning it if there was one.
    pub fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        self.remove(0).ok()
    }

    /// Removes the tail of the list, returning it if there was one.
    pub fn pop_back(&mut self) -> Option<T> {
        let last = self.nodes.pop()?;

        self.list.unlink(last).ok()
    }

    /// Returns a reference to the element at `index` in O(1).
    pub fn get(&self, index: usize) -> Result<&T> {
        self.list.element(self.node(index)?)
    }

    /// Returns a mutable reference to the element at `index` in O(1).
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        let node = self.node(index)?;

        self.list.element_mut(node)
    }

    /// Replaces the element at `index`, returning the old one.
    pub fn set(&mut self, index: usize, value: T) -> Result<T> {
        let node = self.node(index)?;

        self.list.set_element(node, value)
    }

    /// Returns the element held by `node`.
    pub fn element(&self, node: Node) -> Result<&T> {
        self.list.element(node)
    }

    /// Returns the element held by `node`, mutably.
    pub fn element_mut(&mut self, node: Node) -> Result<&mut T> {
        self.list.element_mut(node)
    }

    /// Returns the first node, or `EmptyList`.
    pub fn head_node(&self) -> Result<Node> {
        self.list.head_node()
    }

    /// Returns the last node, or `EmptyList`.
    pub fn last_node(&self) -> Result<Node> {
        self.list.last_node()
    }

    /// Returns the first node, if any.
    pub fn head_node_opt(&self) -> Option<Node> {
        self.list.head_node_opt()
    }

    /// Returns the last node, if any.
    pub fn last_node_opt(&self) -> Option<Node> {
        self.list.last_node_opt()
    }

    /// Walks the nodes from first to last.
    pub fn nodes(&self) -> Nodes<'_, T> {
        self.list.nodes()
    }

    /// Walks the nodes from last to first.
    pub fn rev_nodes(&self) -> Nodes<'_, T> {
        self.list.rev_nodes()
    }

    /// Finds the first node whose element matches `predicate`.
    pub fn find_node<P>(&self, predicate: P) -> Option<Node>
    where
        P: FnMut(&T) -> bool,
    {
        self.list.find_node(predicate)
    }

    /// Finds the last node whose element matches `predicate`.
    pub fn rfind_node<P>(&self, predicate: P) -> Option<Node>
    where
        P: FnMut(&T) -> bool,
    {
        self.list.rfind_node(predicate)
    }

    /// Iterates over the elements in list order.
    pub fn iter(&self) -> Iter<'_, T> {
        self.list.iter()
    }

    /// Checks the position vector against a walk of the list.
    #[cfg(test)]
    pub(crate) fn assert_synced(&self) {
        self.list.assert_consistent();

        assert_eq!(self.nodes.len(), self.list.len());
        assert!(self.list.nodes().eq(self.nodes.iter().cloned()));
    }
}

impl<T> Default for IndexedList<T> {
    fn default() -> Self {
        IndexedList::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for IndexedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for IndexedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_elements(f, "IndexedList", self.iter())
    }
}

impl<T: PartialEq> PartialEq for IndexedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.list == other.list
    }
}

impl<T: Eq> Eq for IndexedList<T> {}

impl<T> FromIterator<T> for IndexedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = IndexedList::new();

        list.extend(iter);

        list
    }
}

impl<T> Extend<T> for IndexedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.append(item);
        }
    }
}

impl<T> From<Vec<T>> for IndexedList<T> {
    fn from(values: Vec<T>) -> Self {
        let mut list = IndexedList::with_capacity(values.len());

        list.extend(values);

        list
    }
}

impl<T> From<DLList<T>> for IndexedList<T> {
    fn from(list: DLList<T>) -> Self {
        let nodes = list.nodes().collect();

        IndexedList { list, nodes }
    }
}

impl<T> IntoIterator for IndexedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        self.list.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a IndexedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T> ops::Index<usize> for IndexedList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(value) => value,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<T> ops::IndexMut<usize> for IndexedList<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.get_mut(index) {
            Ok(value) => value,
            Err(e) => panic!("{}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values<T: Clone>(list: &IndexedList<T>) -> Vec<T> {
        list.iter().cloned().collect()
    }

    #[test]
    fn append_and_prepend() {
        let mut list = IndexedList::new();

        let four = list.append(4);
        let three = list.prepend(3);
        let five = list.append(5);

        assert_eq!(list.nodes, vec![three, four, five]);
        assert_eq!(values(&list), vec![3, 4, 5]);
        list.assert_synced();
    }

    #[test]
    fn node_uses_the_vector() {
        let list: IndexedList<_> = (0..10).collect();

        for i in 0..10 {
            assert_eq!(list.node(i), list.as_list().node(i));
            assert_eq!(list[i], i);
        }

        assert_eq!(
            list.node(10),
            Err(Error::IndexOutOfRange { index: 10, len: 10 })
        );
    }

    #[test]
    fn insert_all_into_empty() {
        let mut list = IndexedList::new();

        let six = list.insert_all(0, vec![6, 7, 8]).unwrap().unwrap();

        assert_eq!(list.node(0), Ok(six));
        assert_eq!(values(&list), vec![6, 7, 8]);
        assert_eq!(list.len(), 3);
        assert_eq!(list.element(list.node(1).unwrap()), Ok(&7));
        list.assert_synced();
    }

    #[test]
    fn insert_all_middle_and_end() {
        let mut list: IndexedList<_> = vec![3, 4, 5].into();

        list.insert_all(1, vec![6, 7, 8]).unwrap();
        list.insert_all(6, vec![9, 10]).unwrap();

        assert_eq!(values(&list), vec![3, 6, 7, 8, 4, 5, 9, 10]);
        assert_eq!(list.insert_all(3, Vec::new()), Ok(None));
        assert_eq!(
            list.insert_all(9, vec![1]),
            Err(Error::IndexOutOfRange { index: 9, len: 8 })
        );
        list.assert_synced();
    }

    #[test]
    fn insert_one() {
        let mut list: IndexedList<_> = vec![1, 3].into();

        list.insert(1, 2).unwrap();
        list.insert(3, 4).unwrap();
        list.insert(0, 0).unwrap();

        assert_eq!(values(&list), vec![0, 1, 2, 3, 4]);
        list.assert_synced();
    }

    #[test]
    fn remove_returns_the_element() {
        let mut list: IndexedList<_> = (3..=8).collect();

        let five = list.node(2).unwrap();

        assert_eq!(list.remove(2), Ok(5));
        assert_eq!(list.element(five), Err(Error::NotLinked));
        assert_eq!(values(&list), vec![3, 4, 6, 7, 8]);

        assert_eq!(list.remove(3), Ok(7));
        assert_eq!(values(&list), vec![3, 4, 6, 8]);
        assert_eq!(
            list.remove(4),
            Err(Error::IndexOutOfRange { index: 4, len: 4 })
        );
        list.assert_synced();
    }

    #[test]
    fn remove_range() {
        let mut list: IndexedList<_> = (0..8).collect();

        assert_eq!(list.remove_range(1, 3), Ok(vec![1, 2, 3]));
        assert_eq!(list.remove_range(3, 2), Ok(vec![6, 7]));
        assert_eq!(list.remove_range(1, 0), Ok(vec![]));
        assert_eq!(list.remove_range(3, 0), Ok(vec![]));

        // a range running past the end is reported by its end
        assert_eq!(
            list.remove_range(1, 3),
            Err(Error::IndexOutOfRange { index: 4, len: 3 })
        );
        // a start past the end is reported as itself
        assert_eq!(
            list.remove_range(3, 1),
            Err(Error::IndexOutOfRange { index: 3, len: 3 })
        );
        assert_eq!(
            list.remove_range(7, 2),
            Err(Error::IndexOutOfRange { index: 7, len: 3 })
        );

        assert_eq!(values(&list), vec![0, 4, 5]);
        list.assert_synced();
    }

    #[test]
    fn pops() {
        let mut list: IndexedList<_> = vec![1, 2, 3].into();

        assert_eq!(list.pop_back(), Some(3));
        assert_eq!(list.pop_front(), Some(1));
        assert_eq!(list.pop_front(), Some(2));
        assert_eq!(list.pop_front(), None);
        assert_eq!(list.pop_back(), None);
        list.assert_synced();
    }

    #[test]
    fn clear_twice() {
        let mut list: IndexedList<_> = vec![1, 2, 3].into();

        list.clear();
        assert_eq!(list.len(), 0);
        list.clear();
        assert_eq!(list.len(), 0);

        assert_eq!(list.iter().count(), 0);
        assert_eq!(list.head_node(), Err(Error::EmptyList));
        assert_eq!(list.last_node(), Err(Error::EmptyList));
        list.assert_synced();
    }

    #[test]
    fn set_and_get() {
        let mut list: IndexedList<_> = vec![1, 2, 3].into();

        assert_eq!(list.set(1, 20), Ok(2));
        list[2] += 1;

        assert_eq!(list.get(1), Ok(&20));
        assert_eq!(values(&list), vec![1, 20, 4]);
    }

    #[test]
    fn from_plain_list() {
        let mut plain: DLList<_> = vec![1, 2].into();
        plain.prepend(0);

        let list = IndexedList::from(plain);

        assert_eq!(list.get(0), Ok(&0));
        assert_eq!(list.to_string(), "IndexedList(0, 1, 2)");
        list.assert_synced();
    }
}
