use std::fmt;
use std::iter::FromIterator;
use std::mem;
use std::ops;

use crate::error::{Error, Result};
use crate::iter::{Direction, IntoIter, Iter, Nodes};

/// Slot of the start sentinel. It never moves and is never freed.
pub(crate) const START: usize = 0;
/// Slot of the end sentinel.
pub(crate) const END: usize = 1;

/// A doubly linked list bounded by two sentinels, backed by a vector.
///
/// See the crate documentation for more.
#[derive(Clone)]
pub struct DLList<T> {
    pub(crate) contents: Vec<Entry<T>>,
    generation: usize,
    next_free: Option<usize>,
    len: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Entry<T> {
    Free { next_free: Option<usize> },
    Occupied(OccupiedEntry<T>),
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct OccupiedEntry<T> {
    pub(crate) item: Item<T>,
    pub(crate) generation: usize,
    pub(crate) next: usize,
    pub(crate) prev: usize,
}

/// What an occupied slot holds: a real element or one of the two sentinels.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Item<T> {
    Value(T),
    Start,
    End,
}

impl<T> Item<T> {
    pub(crate) fn is_sentinel(&self) -> bool {
        match self {
            Item::Value(_) => false,
            Item::Start | Item::End => true,
        }
    }
}

/// A handle to a node in a `DLList<T>`.
///
/// A `Node` does not own anything; it names a slot in the list together with
/// the generation that slot had when the node was linked. Once the node is
/// unlinked, or the list is cleared, the generations no longer agree and every
/// operation given the handle fails with [`Error::NotLinked`].
///
/// Handles are only meaningful for the list that issued them.
///
/// [`Error::NotLinked`]: enum.Error.html#variant.NotLinked
///
/// # Examples
///
/// ```
/// use dllist::{DLList, Error};
///
/// let mut list = DLList::new();
///
/// let five = list.append(5);
/// let six = list.follow(five, 6).unwrap();
///
/// assert_eq!(list.following(five), Ok(six));
///
/// assert_eq!(list.unlink(five), Ok(5));
/// assert_eq!(list.element(five), Err(Error::NotLinked));
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Node {
    pub(crate) index: usize,
    pub(crate) generation: usize,
}

impl<T> DLList<T> {
    /// Creates a new, empty `DLList<T>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use dllist::DLList;
    ///
    /// let list: DLList<i32> = DLList::new();
    ///
    /// assert!(list.is_empty());
    /// ```
    pub fn new() -> DLList<T> {
        DLList::with_capacity(0)
    }

    /// Creates a new `DLList<T>` with room for `size` elements.
    ///
    /// If you know roughly how many elements will be stored in the list,
    /// creating one with that capacity can reduce allocations, increasing
    /// performance.
    pub fn with_capacity(size: usize) -> DLList<T> {
        let mut contents = Vec::with_capacity(size + 2);

        contents.push(Entry::Occupied(OccupiedEntry {
            item: Item::Start,
            generation: 0,
            next: END,
            prev: START,
        }));
        contents.push(Entry::Occupied(OccupiedEntry {
            item: Item::End,
            generation: 0,
            next: END,
            prev: START,
        }));

        DLList {
            contents,
            generation: 0,
            next_free: None,
            len: 0,
        }
    }

    /// Returns the number of elements in the list.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the start sentinel.
    ///
    /// The start sentinel holds no element. It can be followed, which is how
    /// `prepend` works, but it has no predecessor.
    ///
    /// # Examples
    ///
    /// ```
    /// use dllist::{DLList, Error};
    ///
    /// let mut list = DLList::new();
    ///
    /// let start = list.start();
    /// list.follow(start, 1).unwrap();
    ///
    /// assert_eq!(list.preceding(start), Err(Error::BoundaryViolation));
    /// assert_eq!(list.element(start), Err(Error::NoValue));
    /// assert_eq!(list.get(0), Ok(&1));
    /// ```
    pub fn start(&self) -> Node {
        self.handle(START)
    }

    /// Returns the end sentinel. It can be preceded but has no successor.
    pub fn end(&self) -> Node {
        self.handle(END)
    }

    /// Returns a reference to the element held by `node`.
    ///
    /// Fails with `NoValue` on a sentinel and `NotLinked` on a stale handle.
    pub fn element(&self, node: Node) -> Result<&T> {
        match &self.occupied(node)?.item {
            Item::Value(value) => Ok(value),
            Item::Start | Item::End => Err(Error::NoValue),
        }
    }

    /// Returns a mutable reference to the element held by `node`.
    pub fn element_mut(&mut self, node: Node) -> Result<&mut T> {
        match &mut self.occupied_mut(node)?.item {
            Item::Value(value) => Ok(value),
            Item::Start | Item::End => Err(Error::NoValue),
        }
    }

    /// Replaces the element held by `node`, returning the old one.
    ///
    /// The node's links are untouched, so handles to it and its neighbours
    /// stay valid.
    ///
    /// # Examples
    ///
    /// ```
    /// use dllist::DLList;
    ///
    /// let mut list = DLList::new();
    ///
    /// let five = list.append(5);
    ///
    /// assert_eq!(list.set_element(five, 10), Ok(5));
    /// assert_eq!(list.element(five), Ok(&10));
    /// ```
    pub fn set_element(&mut self, node: Node, value: T) -> Result<T> {
        let slot = self.element_mut(node)?;

        Ok(mem::replace(slot, value))
    }

    /// Returns the node after `node`.
    ///
    /// The successor of the last real node is the end sentinel. Asking for
    /// the successor of the end sentinel fails with `BoundaryViolation`.
    pub fn following(&self, node: Node) -> Result<Node> {
        let entry = self.occupied(node)?;

        match entry.item {
            Item::End => Err(Error::BoundaryViolation),
            _ => Ok(self.handle(entry.next)),
        }
    }

    /// Returns the node before `node`.
    ///
    /// Asking for the predecessor of the start sentinel fails with
    /// `BoundaryViolation`.
    pub fn preceding(&self, node: Node) -> Result<Node> {
        let entry = self.occupied(node)?;

        match entry.item {
            Item::Start => Err(Error::BoundaryViolation),
            _ => Ok(self.handle(entry.prev)),
        }
    }

    /// Links a new node holding `value` directly after `node`, in O(1).
    ///
    /// # Examples
    ///
    /// ```
    /// use dllist::DLList;
    ///
    /// let mut list = DLList::new();
    ///
    /// let one = list.append(1);
    /// list.append(3);
    ///
    /// list.follow(one, 2).unwrap();
    ///
    /// assert_eq!(list.iter().collect::<Vec<_>>(), vec![&1, &2, &3]);
    /// ```
    ///
    /// Nothing can follow the end sentinel:
    ///
    /// ```
    /// use dllist::{DLList, Error};
    ///
    /// let mut list = DLList::new();
    ///
    /// let end = list.end();
    ///
    /// assert_eq!(list.follow(end, 1), Err(Error::SentinelViolation));
    /// ```
    pub fn follow(&mut self, node: Node, value: T) -> Result<Node> {
        let entry = self.occupied(node)?;

        if let Item::End = entry.item {
            return Err(Error::SentinelViolation);
        }

        let next = entry.next;

        Ok(self.link_between(node.index, next, value))
    }

    /// Links a new node holding `value` directly before `node`, in O(1).
    pub fn precede(&mut self, node: Node, value: T) -> Result<Node> {
        let entry = self.occupied(node)?;

        if let Item::Start = entry.item {
            return Err(Error::SentinelViolation);
        }

        let prev = entry.prev;

        Ok(self.link_between(prev, node.index, value))
    }

    /// Detaches `node` from the list and returns its element, in O(1).
    ///
    /// The handle is orphaned afterwards: every further use of it fails with
    /// `NotLinked`.
    ///
    /// # Examples
    ///
    /// ```
    /// use dllist::{DLList, Error};
    ///
    /// let mut list = DLList::new();
    ///
    /// list.append(5);
    /// let ten = list.append(10);
    /// list.append(15);
    ///
    /// assert_eq!(list.unlink(ten), Ok(10));
    /// assert_eq!(list.unlink(ten), Err(Error::NotLinked));
    ///
    /// assert_eq!(list.iter().collect::<Vec<_>>(), vec![&5, &15]);
    /// ```
    pub fn unlink(&mut self, node: Node) -> Result<T> {
        let (prev, next) = {
            let entry = self.occupied(node)?;

            if entry.item.is_sentinel() {
                return Err(Error::SentinelViolation);
            }

            (entry.prev, entry.next)
        };

        self.entry_mut(prev).next = next;
        self.entry_mut(next).prev = prev;

        Ok(self.release(node.index))
    }

    /// Detaches the run of nodes from `node` up to, but not including,
    /// `stop`, returning their elements in order.
    ///
    /// `stop` must be reachable forward from `node`; it may be the end
    /// sentinel. If `node == stop` nothing is detached and the result is
    /// empty. The run is spliced out with a single relink, then each node is
    /// released, so this is O(k) in the length of the run.
    ///
    /// # Examples
    ///
    /// ```
    /// use dllist::DLList;
    ///
    /// let mut list: DLList<_> = (1..=5).collect();
    ///
    /// let two = list.node(1).unwrap();
    /// let five = list.node(4).unwrap();
    ///
    /// assert_eq!(list.unlink_until(two, five), Ok(vec![2, 3, 4]));
    /// assert_eq!(list.iter().collect::<Vec<_>>(), vec![&1, &5]);
    /// ```
    pub fn unlink_until(&mut self, node: Node, stop: Node) -> Result<Vec<T>> {
        let prev = {
            let entry = self.occupied(node)?;

            if entry.item.is_sentinel() {
                return Err(Error::SentinelViolation);
            }

            entry.prev
        };

        if node == stop {
            self.occupied(stop)?;

            return Ok(Vec::new());
        }

        if !self.is_before(node, stop)? {
            return Err(Error::InvalidRange);
        }

        self.entry_mut(prev).next = stop.index;
        self.entry_mut(stop.index).prev = prev;

        let mut values = Vec::new();
        let mut current = node.index;

        while current != stop.index {
            let next = self.entry(current).next;

            values.push(self.release(current));

            current = next;
        }

        Ok(values)
    }

    /// Returns `true` if `other` can be reached from `node` by following
    /// successors. A node is never before itself.
    ///
    /// This walks the list, so it is O(distance).
    pub fn is_before(&self, node: Node, other: Node) -> Result<bool> {
        self.occupied(node)?;
        self.occupied(other)?;

        let mut current = node.index;

        while current != END {
            current = self.entry(current).next;

            if current == other.index {
                return Ok(true);
            }
        }

        Ok(false)
    }

    /// Returns `true` if `other` can be reached from `node` by following
    /// predecessors; the mirror of [`is_before`](#method.is_before).
    pub fn is_after(&self, node: Node, other: Node) -> Result<bool> {
        self.is_before(other, node)
    }

    /// Returns an iterator over the nodes from `node` to the end of the list.
    ///
    /// Sentinels are never yielded: starting at the start sentinel begins at
    /// the first element.
    pub fn nodes_from(&self, node: Node) -> Result<Nodes<'_, T>> {
        self.occupied(node)?;

        Ok(Nodes::new(self, node.index, END, Direction::Forward))
    }

    /// Returns an iterator over the nodes from `node` up to, but not
    /// including, `stop`.
    ///
    /// If `stop` is not ahead of `node`, the walk runs to the end of the
    /// list.
    ///
    /// # Examples
    ///
    /// ```
    /// use dllist::DLList;
    ///
    /// let list: DLList<_> = vec![1, 2, 3, 4].into();
    ///
    /// let two = list.node(1).unwrap();
    /// let four = list.node(3).unwrap();
    ///
    /// let between: Vec<_> = list
    ///     .nodes_until(two, four)
    ///     .unwrap()
    ///     .map(|node| *list.element(node).unwrap())
    ///     .collect();
    ///
    /// assert_eq!(between, vec![2, 3]);
    /// ```
    pub fn nodes_until(&self, node: Node, stop: Node) -> Result<Nodes<'_, T>> {
        self.occupied(node)?;
        self.occupied(stop)?;

        Ok(Nodes::new(self, node.index, stop.index, Direction::Forward))
    }

    /// Returns an iterator over the nodes from `node` back to the start of
    /// the list.
    pub fn rev_nodes_from(&self, node: Node) -> Result<Nodes<'_, T>> {
        self.occupied(node)?;

        Ok(Nodes::new(self, node.index, START, Direction::Reverse))
    }

    /// Returns an iterator over the nodes from `node` back to, but not
    /// including, `stop`.
    pub fn rev_nodes_until(&self, node: Node, stop: Node) -> Result<Nodes<'_, T>> {
        self.occupied(node)?;
        self.occupied(stop)?;

        Ok(Nodes::new(self, node.index, stop.index, Direction::Reverse))
    }

    /// Returns the first node, scanning forward from `node` itself, whose
    /// element satisfies `predicate`.
    pub fn find_from<P>(&self, node: Node, predicate: P) -> Result<Option<Node>>
    where
        P: FnMut(&T) -> bool,
    {
        Ok(self.find_in(self.nodes_from(node)?, predicate))
    }

    /// Returns the first node, scanning backward from `node` itself, whose
    /// element satisfies `predicate`.
    pub fn rfind_from<P>(&self, node: Node, predicate: P) -> Result<Option<Node>>
    where
        P: FnMut(&T) -> bool,
    {
        Ok(self.find_in(self.rev_nodes_from(node)?, predicate))
    }

    /// Returns the zero-based position of `node`, counted from the start.
    ///
    /// Sentinels have no position, so they give `Ok(None)`. This walks the
    /// list, so it is O(n).
    ///
    /// # Examples
    ///
    /// ```
    /// use dllist::DLList;
    ///
    /// let mut list = DLList::new();
    ///
    /// list.append(5);
    /// let ten = list.append(10);
    ///
    /// assert_eq!(list.position(ten), Ok(Some(1)));
    /// assert_eq!(list.position(list.end()), Ok(None));
    /// ```
    pub fn position(&self, node: Node) -> Result<Option<usize>> {
        self.occupied(node)?;

        Ok(self.nodes().position(|n| n == node))
    }

    /// Moves `count` nodes forward from `node`.
    ///
    /// Landing on the end sentinel is allowed; stepping beyond it fails with
    /// `BoundaryViolation`.
    pub fn skip_forward(&self, node: Node, count: usize) -> Result<Node> {
        self.occupied(node)?;

        let mut current = node;

        for _ in 0..count {
            current = self.following(current)?;
        }

        Ok(current)
    }

    /// Moves `count` nodes backward from `node`.
    pub fn skip_reverse(&self, node: Node, count: usize) -> Result<Node> {
        self.occupied(node)?;

        let mut current = node;

        for _ in 0..count {
            current = self.preceding(current)?;
        }

        Ok(current)
    }

    /// Adds this item to the tail of the list, returning its node.
    ///
    /// # Examples
    ///
    /// ```
    /// use dllist::DLList;
    ///
    /// let mut list = DLList::new();
    ///
    /// list.append(3);
    /// list.append(4);
    /// list.append(5);
    ///
    /// assert_eq!(list.to_string(), "DLList(3, 4, 5)");
    /// ```
    pub fn append(&mut self, item: T) -> Node {
        let prev = self.entry(END).prev;

        self.link_between(prev, END, item)
    }

    /// Adds this item to the head of the list, returning its node.
    ///
    /// # Examples
    ///
    /// ```
    /// use dllist::DLList;
    ///
    /// let mut list = DLList::new();
    ///
    /// list.prepend(5);
    /// list.prepend(10);
    /// list.prepend(15);
    ///
    /// // This prints 15, 10, and then 5, each on its own line
    /// for element in list.iter() {
    ///     println!("{}", element);
    /// }
    /// ```
    pub fn prepend(&mut self, item: T) -> Node {
        let next = self.entry(START).next;

        self.link_between(START, next, item)
    }

    /// Returns the first node, failing with `EmptyList` if there is none.
    pub fn head_node(&self) -> Result<Node> {
        self.head_node_opt().ok_or(Error::EmptyList)
    }

    /// Returns the last node, failing with `EmptyList` if there is none.
    pub fn last_node(&self) -> Result<Node> {
        self.last_node_opt().ok_or(Error::EmptyList)
    }

    /// Returns the first node, or `None` if the list is empty.
    pub fn head_node_opt(&self) -> Option<Node> {
        if self.is_empty() {
            return None;
        }

        Some(self.handle(self.entry(START).next))
    }

    /// Returns the last node, or `None` if the list is empty.
    pub fn last_node_opt(&self) -> Option<Node> {
        if self.is_empty() {
            return None;
        }

        Some(self.handle(self.entry(END).prev))
    }

    /// Returns a reference to the first item in the list.
    ///
    /// Will return `None` if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use dllist::DLList;
    ///
    /// let mut list = DLList::new();
    ///
    /// list.append(5);
    ///
    /// // this will add to the front, so it's now the head
    /// list.prepend(10);
    ///
    /// assert_eq!(list.head(), Some(&10));
    /// ```
    pub fn head(&self) -> Option<&T> {
        self.iter().next()
    }

    /// Returns a reference to the last item in the list.
    pub fn last(&self) -> Option<&T> {
        self.iter().next_back()
    }

    /// Returns the node at `index`.
    ///
    /// The walk starts from whichever end is closer, so this is
    /// O(min(index, len - index)).
    ///
    /// # Examples
    ///
    /// ```
    /// use dllist::{DLList, Error};
    ///
    /// let list: DLList<_> = vec![3, 4, 5].into();
    ///
    /// let four = list.node(1).unwrap();
    ///
    /// assert_eq!(list.element(four), Ok(&4));
    /// assert_eq!(list.node(3), Err(Error::IndexOutOfRange { index: 3, len: 3 }));
    /// ```
    pub fn node(&self, index: usize) -> Result<Node> {
        self.check_index(index)?;

        let mut current;

        if index <= self.len / 2 {
            current = self.entry(START).next;

            for _ in 0..index {
                current = self.entry(current).next;
            }
        } else {
            current = self.entry(END).prev;

            for _ in index + 1..self.len {
                current = self.entry(current).prev;
            }
        }

        Ok(self.handle(current))
    }

    /// Returns an iterator over every node, first to last.
    pub fn nodes(&self) -> Nodes<'_, T> {
        Nodes::new(self, START, END, Direction::Forward)
    }

    /// Returns an iterator over every node, last to first.
    pub fn rev_nodes(&self) -> Nodes<'_, T> {
        Nodes::new(self, END, START, Direction::Reverse)
    }

    /// Returns the first node whose element satisfies `predicate`.
    ///
    /// # Examples
    ///
    /// ```
    /// use dllist::DLList;
    ///
    /// let list: DLList<_> = vec![1, 2, 3, 4].into();
    ///
    /// let even = list.find_node(|&e| e % 2 == 0).unwrap();
    /// let last_even = list.rfind_node(|&e| e % 2 == 0).unwrap();
    ///
    /// assert_eq!(list.element(even), Ok(&2));
    /// assert_eq!(list.element(last_even), Ok(&4));
    /// assert!(list.find_node(|&e| e > 10).is_none());
    /// ```
    pub fn find_node<P>(&self, predicate: P) -> Option<Node>
    where
        P: FnMut(&T) -> bool,
    {
        self.find_in(self.nodes(), predicate)
    }

    /// Returns the last node whose element satisfies `predicate`.
    pub fn rfind_node<P>(&self, predicate: P) -> Option<Node>
    where
        P: FnMut(&T) -> bool,
    {
        self.find_in(self.rev_nodes(), predicate)
    }

    /// Returns a reference to the element at `index`.
    pub fn get(&self, index: usize) -> Result<&T> {
        let node = self.node(index)?;

        self.element(node)
    }

    /// Returns a mutable reference to the element at `index`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        let node = self.node(index)?;

        self.element_mut(node)
    }

    /// Replaces the element at `index`, returning the old one.
    pub fn set(&mut self, index: usize, value: T) -> Result<T> {
        let node = self.node(index)?;

        self.set_element(node, value)
    }

    /// Inserts `value` so that it ends up at `index`.
    ///
    /// `index` may equal `len()`, which appends.
    pub fn insert(&mut self, index: usize, value: T) -> Result<Node> {
        if index == self.len {
            return Ok(self.append(value));
        }

        let node = self.node(index)?;

        self.precede(node, value)
    }

    /// Removes the element at `index` and returns it.
    ///
    /// # Examples
    ///
    /// ```
    /// use dllist::DLList;
    ///
    /// let mut list: DLList<_> = (3..=8).collect();
    ///
    /// assert_eq!(list.remove(2), Ok(5));
    /// assert_eq!(list.remove(3), Ok(7));
    ///
    /// assert_eq!(list.iter().collect::<Vec<_>>(), vec![&3, &4, &6, &8]);
    /// ```
    pub fn remove(&mut self, index: usize) -> Result<T> {
        let node = self.node(index)?;

        self.unlink(node)
    }

    /// Removes `count` elements starting at `index`, returning them in order.
    ///
    /// The whole range is validated first; on error nothing is removed. A
    /// start past the end is reported as itself; a range that starts inside
    /// the list but runs past it is reported by its exclusive end.
    pub fn remove_range(&mut self, index: usize, count: usize) -> Result<Vec<T>> {
        check_range(index, count, self.len)?;

        if count == 0 {
            return Ok(Vec::new());
        }

        let first = self.node(index)?;
        let stop = self.skip_forward(first, count)?;

        self.unlink_until(first, stop)
    }

    /// Removes every element.
    ///
    /// Every handle issued before the clear is orphaned, and the storage is
    /// reset to the two sentinels.
    pub fn clear(&mut self) {
        self.contents.truncate(2);

        {
            let start = self.entry_mut(START);
            start.next = END;
            start.prev = START;
        }
        {
            let end = self.entry_mut(END);
            end.next = END;
            end.prev = START;
        }

        self.next_free = None;
        self.generation += 1;
        self.len = 0;
    }

    /// Inserts every element of `values` so that the first one ends up at
    /// `index`, keeping their order.
    ///
    /// Returns the first inserted node, or `None` when `values` is empty.
    /// Locating the insertion point costs O(min(index, len - index)); linking
    /// is O(1) per element.
    ///
    /// # Examples
    ///
    /// ```
    /// use dllist::DLList;
    ///
    /// let mut list: DLList<_> = vec![3, 4, 5].into();
    ///
    /// let six = list.insert_all(1, vec![6, 7, 8]).unwrap();
    ///
    /// assert_eq!(six.and_then(|n| list.element(n).ok()), Some(&6));
    /// assert_eq!(list.iter().collect::<Vec<_>>(), vec![&3, &6, &7, &8, &4, &5]);
    /// assert_eq!(list.len(), 6);
    /// ```
    pub fn insert_all<I>(&mut self, index: usize, values: I) -> Result<Option<Node>>
    where
        I: IntoIterator<Item = T>,
    {
        if index > self.len {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.len,
            });
        }

        let anchor = if index == 0 {
            self.start()
        } else {
            self.node(index - 1)?
        };

        self.follow_all(anchor, values)
    }

    /// Links every element of `values` after `anchor`, keeping their order,
    /// and returns the first new node.
    pub(crate) fn follow_all<I>(&mut self, anchor: Node, values: I) -> Result<Option<Node>>
    where
        I: IntoIterator<Item = T>,
    {
        if let Item::End = self.occupied(anchor)?.item {
            return Err(Error::SentinelViolation);
        }

        let mut anchor = anchor.index;
        let mut first = None;

        for value in values {
            let next = self.entry(anchor).next;
            let node = self.link_between(anchor, next, value);

            first.get_or_insert(node);
            anchor = node.index;
        }

        Ok(first)
    }

    /// Removes the head of the list.
    ///
    /// If an item was removed, this will also return it.
    ///
    /// If this list is empty, returns `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use dllist::DLList;
    ///
    /// let mut list = DLList::new();
    ///
    /// list.append(5);
    ///
    /// assert_eq!(list.pop_front(), Some(5));
    ///
    /// assert_eq!(list.iter().count(), 0);
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        let head = self.head_node_opt()?;

        self.unlink(head).ok()
    }

    /// Removes the tail of the list, returning it if there was one.
    pub fn pop_back(&mut self) -> Option<T> {
        let last = self.last_node_opt()?;

        self.unlink(last).ok()
    }

    /// Does this list contain this element?
    ///
    /// Returns true if it does, and false if it does not.
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|e| e == value)
    }

    /// Returns an iterator of references to the items in the list.
    ///
    /// The iterator is double-ended, so `.rev()` walks from the tail.
    ///
    /// # Examples
    ///
    /// ```
    /// use dllist::DLList;
    ///
    /// let list: DLList<_> = (1..=5).collect();
    ///
    /// let forward: Vec<_> = list.iter().cloned().collect();
    /// let mut backward: Vec<_> = list.iter().rev().cloned().collect();
    /// backward.reverse();
    ///
    /// assert_eq!(forward, backward);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    pub(crate) fn entry(&self, index: usize) -> &OccupiedEntry<T> {
        match &self.contents[index] {
            Entry::Free { .. } => panic!("Corrupted list"),
            Entry::Occupied(e) => e,
        }
    }

    fn entry_mut(&mut self, index: usize) -> &mut OccupiedEntry<T> {
        match &mut self.contents[index] {
            Entry::Free { .. } => panic!("Corrupted list"),
            Entry::Occupied(e) => e,
        }
    }

    // a handle is live only while its generation matches the slot's
    fn occupied(&self, node: Node) -> Result<&OccupiedEntry<T>> {
        match self.contents.get(node.index) {
            Some(Entry::Occupied(e)) if e.generation == node.generation => Ok(e),
            _ => Err(Error::NotLinked),
        }
    }

    fn occupied_mut(&mut self, node: Node) -> Result<&mut OccupiedEntry<T>> {
        match self.contents.get_mut(node.index) {
            Some(Entry::Occupied(e)) if e.generation == node.generation => Ok(e),
            _ => Err(Error::NotLinked),
        }
    }

    pub(crate) fn handle(&self, index: usize) -> Node {
        Node {
            index,
            generation: self.entry(index).generation,
        }
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.len {
            Ok(())
        } else {
            Err(Error::IndexOutOfRange {
                index,
                len: self.len,
            })
        }
    }

    fn find_in<P>(&self, mut nodes: Nodes<'_, T>, mut predicate: P) -> Option<Node>
    where
        P: FnMut(&T) -> bool,
    {
        nodes.find(|node| match &self.entry(node.index).item {
            Item::Value(value) => predicate(value),
            Item::Start | Item::End => false,
        })
    }

    fn link_between(&mut self, prev: usize, next: usize, item: T) -> Node {
        let index = self.allocate(item, prev, next);

        self.entry_mut(prev).next = index;
        self.entry_mut(next).prev = index;
        self.len += 1;

        Node {
            index,
            generation: self.generation,
        }
    }

    fn allocate(&mut self, item: T, prev: usize, next: usize) -> usize {
        let entry = Entry::Occupied(OccupiedEntry {
            item: Item::Value(item),
            generation: self.generation,
            next,
            prev,
        });

        // reuse a free slot if we have one, otherwise grow
        if let Some(index) = self.next_free {
            match self.contents[index] {
                Entry::Occupied { .. } => panic!("Corrupted list"),
                Entry::Free { next_free } => self.next_free = next_free,
            }

            self.contents[index] = entry;

            index
        } else {
            let index = self.contents.len();

            self.contents.push(entry);

            index
        }
    }

    // Frees a slot whose neighbours have already been relinked. Bumping the
    // generation invalidates every handle to the slot.
    fn release(&mut self, index: usize) -> T {
        let removed = mem::replace(
            &mut self.contents[index],
            Entry::Free {
                next_free: self.next_free,
            },
        );

        self.next_free = Some(index);
        self.generation += 1;
        self.len -= 1;

        match removed {
            Entry::Occupied(OccupiedEntry {
                item: Item::Value(value),
                ..
            }) => value,
            _ => panic!("Corrupted list"),
        }
    }

    /// Walks the list checking every link and the element count.
    #[cfg(test)]
    pub(crate) fn assert_consistent(&self) {
        let mut count = 0;
        let mut current = START;

        assert!(matches!(self.entry(START).item, Item::Start));
        assert!(matches!(self.entry(END).item, Item::End));

        while current != END {
            let next = self.entry(current).next;

            assert_eq!(self.entry(next).prev, current, "broken link at {}", next);

            if next != END {
                count += 1;
            }

            current = next;
        }

        assert_eq!(count, self.len);
    }
}

impl<T> Default for DLList<T> {
    fn default() -> Self {
        DLList::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for DLList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for DLList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_elements(f, "DLList", self.iter())
    }
}

/// Validates `count` elements starting at `index` in a list of `len`.
pub(crate) fn check_range(index: usize, count: usize, len: usize) -> Result<()> {
    if index > len || (index == len && count > 0) {
        return Err(Error::IndexOutOfRange { index, len });
    }

    let end = index.saturating_add(count);

    if end > len {
        return Err(Error::IndexOutOfRange { index: end, len });
    }

    Ok(())
}

/// Writes `Name(e1, e2, ...)`.
pub(crate) fn write_elements<'a, T, I>(
    f: &mut fmt::Formatter<'_>,
    name: &str,
    elements: I,
) -> fmt::Result
where
    T: fmt::Display + 'a,
    I: Iterator<Item = &'a T>,
{
    write!(f, "{}(", name)?;

    for (i, element) in elements.enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }

        write!(f, "{}", element)?;
    }

    f.write_str(")")
}

impl<T: PartialEq> PartialEq for DLList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for DLList<T> {}

impl<T> FromIterator<T> for DLList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = DLList::new();

        list.extend(iter);

        list
    }
}

impl<T> Extend<T> for DLList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.append(item);
        }
    }
}

impl<T> From<Vec<T>> for DLList<T> {
    fn from(values: Vec<T>) -> Self {
        let mut list = DLList::with_capacity(values.len());

        list.extend(values);

        list
    }
}

impl<T> IntoIterator for DLList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter::new(self)
    }
}

impl<'a, T> IntoIterator for &'a DLList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T> ops::Index<usize> for DLList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(value) => value,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<T> ops::IndexMut<usize> for DLList<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.get_mut(index) {
            Ok(value) => value,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<T> ops::Index<Node> for DLList<T> {
    type Output = T;

    fn index(&self, node: Node) -> &T {
        match self.element(node) {
            Ok(value) => value,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<T> ops::IndexMut<Node> for DLList<T> {
    fn index_mut(&mut self, node: Node) -> &mut T {
        match self.element_mut(node) {
            Ok(value) => value,
            Err(e) => panic!("{}", e),
        }
    }
}
