use crate::error::Result;
use crate::indexed::IndexedList;
use crate::list::{DLList, Node};

/// An element that wants to know which node holds it.
///
/// Elements implementing this trait can be inserted with the `*_observed`
/// methods of [`DLList`] and [`IndexedList`], which call [`on_linked`] right
/// after the new node has been linked. Plain elements use the ordinary
/// insertion methods and pay nothing; those methods (including `insert`,
/// `insert_all`, `Extend` and `From`) never notify, even for observers.
///
/// [`DLList`]: struct.DLList.html
/// [`IndexedList`]: struct.IndexedList.html
/// [`on_linked`]: #tymethod.on_linked
///
/// # Examples
///
/// ```
/// use dllist::{DLList, Node, NodeObserver};
///
/// struct Task {
///     name: &'static str,
///     node: Option<Node>,
/// }
///
/// impl NodeObserver for Task {
///     fn on_linked(&mut self, node: Node) {
///         self.node = Some(node);
///     }
/// }
///
/// let mut list = DLList::new();
///
/// let node = list.append_observed(Task { name: "build", node: None });
///
/// assert_eq!(list[node].node, Some(node));
/// assert_eq!(list[node].name, "build");
/// ```
pub trait NodeObserver {
    /// Called with the node that now holds this element.
    fn on_linked(&mut self, node: Node);
}

impl<T: NodeObserver> DLList<T> {
    /// Like [`follow`](#method.follow), then notifies the new element.
    pub fn follow_observed(&mut self, node: Node, value: T) -> Result<Node> {
        let linked = self.follow(node, value)?;

        self.notify(linked)
    }

    /// Like [`precede`](#method.precede), then notifies the new element.
    pub fn precede_observed(&mut self, node: Node, value: T) -> Result<Node> {
        let linked = self.precede(node, value)?;

        self.notify(linked)
    }

    /// Like [`append`](#method.append), then notifies the new element.
    pub fn append_observed(&mut self, value: T) -> Node {
        let end = self.end();

        match self.precede_observed(end, value) {
            Ok(node) => node,
            Err(e) => panic!("Corrupted list: {}", e),
        }
    }

    /// Like [`prepend`](#method.prepend), then notifies the new element.
    pub fn prepend_observed(&mut self, value: T) -> Node {
        let start = self.start();

        match self.follow_observed(start, value) {
            Ok(node) => node,
            Err(e) => panic!("Corrupted list: {}", e),
        }
    }

    /// Like [`insert`](#method.insert), then notifies the new element.
    pub fn insert_observed(&mut self, index: usize, value: T) -> Result<Node> {
        let linked = self.insert(index, value)?;

        self.notify(linked)
    }

    /// Like [`insert_all`](#method.insert_all), then notifies every new
    /// element, in list order, once all of them are linked.
    pub fn insert_all_observed<I>(&mut self, index: usize, values: I) -> Result<Option<Node>>
    where
        I: IntoIterator<Item = T>,
    {
        let before = self.len();
        let first = self.insert_all(index, values)?;

        if let Some(first) = first {
            let count = self.len() - before;
            let linked: Vec<Node> = self.nodes_from(first)?.take(count).collect();

            for node in linked {
                self.notify(node)?;
            }
        }

        Ok(first)
    }

    fn notify(&mut self, node: Node) -> Result<Node> {
        self.element_mut(node)?.on_linked(node);

        Ok(node)
    }
}

impl<T: NodeObserver> IndexedList<T> {
    /// Like [`append`](#method.append), then notifies the new element.
    pub fn append_observed(&mut self, value: T) -> Node {
        let node = self.append(value);

        match self.notify(node) {
            Ok(node) => node,
            Err(e) => panic!("Corrupted list: {}", e),
        }
    }

    /// Like [`prepend`](#method.prepend), then notifies the new element.
    pub fn prepend_observed(&mut self, value: T) -> Node {
        let node = self.prepend(value);

        match self.notify(node) {
            Ok(node) => node,
            Err(e) => panic!("Corrupted list: {}", e),
        }
    }

    /// Like [`insert`](#method.insert), then notifies the new element.
    pub fn insert_observed(&mut self, index: usize, value: T) -> Result<Node> {
        let linked = self.insert(index, value)?;

        self.notify(linked)
    }

    /// Like [`insert_all`](#method.insert_all), then notifies every new
    /// element, in list order, once all of them are linked.
    pub fn insert_all_observed<I>(&mut self, index: usize, values: I) -> Result<Option<Node>>
    where
        I: IntoIterator<Item = T>,
    {
        let before = self.len();
        let first = self.insert_all(index, values)?;

        for i in index..index + (self.len() - before) {
            let node = self.node(i)?;

            self.notify(node)?;
        }

        Ok(first)
    }

    fn notify(&mut self, node: Node) -> Result<Node> {
        self.element_mut(node)?.on_linked(node);

        Ok(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[derive(Debug, PartialEq)]
    struct Tracked {
        value: i32,
        node: Option<Node>,
        links: usize,
    }

    impl Tracked {
        fn new(value: i32) -> Tracked {
            Tracked {
                value,
                node: None,
                links: 0,
            }
        }
    }

    impl NodeObserver for Tracked {
        fn on_linked(&mut self, node: Node) {
            self.node = Some(node);
            self.links += 1;
        }
    }

    #[test]
    fn observed_insertions_see_their_node() {
        let mut list = DLList::new();

        let b = list.append_observed(Tracked::new(2));
        let a = list.prepend_observed(Tracked::new(1));
        let d = list.follow_observed(b, Tracked::new(4)).unwrap();
        let c = list.precede_observed(d, Tracked::new(3)).unwrap();

        for node in vec![a, b, c, d] {
            assert_eq!(list[node].node, Some(node));
            assert_eq!(list[node].links, 1);
        }

        let order: Vec<_> = list.iter().map(|t| t.value).collect();

        assert_eq!(order, vec![1, 2, 3, 4]);
    }

    #[test]
    fn plain_insertions_do_not_notify() {
        let mut list = DLList::new();

        let node = list.append(Tracked::new(1));

        assert_eq!(list[node].node, None);
    }

    #[test]
    fn failed_insertion_does_not_notify() {
        let mut list: DLList<Tracked> = DLList::new();

        let end = list.end();

        assert!(list.follow_observed(end, Tracked::new(1)).is_err());
        assert!(list.insert_observed(1, Tracked::new(2)).is_err());
        assert_eq!(
            list.insert_all_observed(1, vec![Tracked::new(3)]),
            Err(Error::IndexOutOfRange { index: 1, len: 0 })
        );
        assert!(list.is_empty());
    }

    #[test]
    fn insert_observed_sees_its_node() {
        let mut list = DLList::new();

        list.append_observed(Tracked::new(1));
        list.append_observed(Tracked::new(3));

        let two = list.insert_observed(1, Tracked::new(2)).unwrap();
        let four = list.insert_observed(3, Tracked::new(4)).unwrap();

        assert_eq!(list[two].node, Some(two));
        assert_eq!(list[four].node, Some(four));

        let order: Vec<_> = list.iter().map(|t| t.value).collect();

        assert_eq!(order, vec![1, 2, 3, 4]);
    }

    #[test]
    fn insert_all_observed_sees_every_node() {
        let mut list = DLList::new();

        list.append_observed(Tracked::new(0));
        list.append_observed(Tracked::new(4));

        let first = list
            .insert_all_observed(1, vec![Tracked::new(1), Tracked::new(2), Tracked::new(3)])
            .unwrap()
            .unwrap();

        assert_eq!(list[first].node, Some(first));
        assert_eq!(list[first].value, 1);

        for node in list.nodes() {
            assert_eq!(list[node].node, Some(node));
            assert_eq!(list[node].links, 1);
        }

        let order: Vec<_> = list.iter().map(|t| t.value).collect();

        assert_eq!(order, vec![0, 1, 2, 3, 4]);
        assert_eq!(list.insert_all_observed(0, Vec::new()), Ok(None));
    }

    #[test]
    fn plain_insert_all_does_not_notify() {
        let mut list = DLList::new();

        let first = list
            .insert_all(0, vec![Tracked::new(1), Tracked::new(2)])
            .unwrap()
            .unwrap();

        assert_eq!(list[first].node, None);
        assert!(list.iter().all(|t| t.links == 0));
    }

    #[test]
    fn indexed_observed_insertions_stay_in_sync() {
        let mut list = IndexedList::new();

        let b = list.append_observed(Tracked::new(2));
        let a = list.prepend_observed(Tracked::new(1));
        let e = list.insert_observed(2, Tracked::new(5)).unwrap();
        let c = list
            .insert_all_observed(2, vec![Tracked::new(3), Tracked::new(4)])
            .unwrap()
            .unwrap();

        list.assert_synced();

        assert_eq!(list.node(0), Ok(a));
        assert_eq!(list.node(1), Ok(b));
        assert_eq!(list.node(2), Ok(c));
        assert_eq!(list.node(4), Ok(e));

        for i in 0..list.len() {
            let node = list.node(i).unwrap();

            assert_eq!(list[i].node, Some(node));
            assert_eq!(list[i].links, 1);
        }

        let order: Vec<_> = list.iter().map(|t| t.value).collect();

        assert_eq!(order, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn indexed_failed_insertion_does_not_notify() {
        let mut list: IndexedList<Tracked> = IndexedList::new();

        list.append_observed(Tracked::new(1));

        assert!(list.insert_observed(3, Tracked::new(2)).is_err());
        assert!(list.insert_all_observed(3, vec![Tracked::new(3)]).is_err());
        assert_eq!(list.insert_all_observed(1, Vec::new()), Ok(None));
        assert_eq!(list.len(), 1);
        list.assert_synced();
    }
}
