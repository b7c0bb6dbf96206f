use std::cell::{Ref, RefCell};
use std::fmt;
use std::rc::Rc;

pub mod copy;
pub mod hashing;

pub use copy::{CopyFidelity, CopyOutcome, DeepCopy};
pub use hashing::HashCode;

type Link<T> = Option<Rc<RefCell<Node<T>>>>;

/// A single element of the chain. Nodes are owned by the list that
/// created them and are never handed out mutably.
struct Node<T> {
    elem: T,
    next: Link<T>,
}

impl<T> Node<T> {
    fn new(elem: T) -> Rc<RefCell<Node<T>>> {
        Rc::new(RefCell::new(Node { elem, next: None }))
    }
}

/// Singly linked list with O(1) insertion at both ends.
///
/// The list keeps a head, a tail and an element count. The count is
/// maintained exclusively by the list's own insert/remove operations;
/// collaborators read the chain through a [`Cursor`], which cannot
/// mutate anything.
///
/// Equality is structural and order-sensitive: two lists are equal iff
/// they have the same length and element-wise equal contents in
/// traversal order.
pub struct LinkedList<T> {
    head: Link<T>,
    tail: Link<T>,
    len: usize,
}

impl<T> LinkedList<T> {
    pub fn new() -> Self {
        LinkedList {
            head: None,
            tail: None,
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Inserts `elem` at the front of the list. O(1).
    pub fn add_first(&mut self, elem: T) {
        let node = Node::new(elem);
        node.borrow_mut().next = self.head.take();
        if self.tail.is_none() {
            self.tail = Some(Rc::clone(&node));
        }
        self.head = Some(node);
        self.len += 1;
    }

    /// Inserts `elem` at the back of the list. O(1).
    pub fn add_last(&mut self, elem: T) {
        let node = Node::new(elem);
        match self.tail.take() {
            Some(old_tail) => old_tail.borrow_mut().next = Some(Rc::clone(&node)),
            None => self.head = Some(Rc::clone(&node)),
        }
        self.tail = Some(node);
        self.len += 1;
    }

    /// Removes and discards the first element. Returns `false` on an
    /// empty list instead of failing.
    pub fn remove_first(&mut self) -> bool {
        match self.head.take() {
            None => false,
            Some(node) => {
                self.head = node.borrow_mut().next.take();
                if self.head.is_none() {
                    self.tail = None;
                }
                self.len -= 1;
                true
            }
        }
    }

    /// Removes and discards the last element. Returns `false` on an
    /// empty list. Re-scans the chain to find the new tail, O(len).
    pub fn remove_last(&mut self) -> bool {
        match self.len {
            0 => false,
            1 => {
                self.head = None;
                self.tail = None;
                self.len = 0;
                true
            }
            _ => {
                // Walk to the node just before the tail.
                let mut current = self.head.clone();
                for _ in 0..self.len - 2 {
                    let next = current.as_ref().and_then(|node| node.borrow().next.clone());
                    current = next;
                }
                if let Some(prev) = current {
                    prev.borrow_mut().next = None;
                    self.tail = Some(prev);
                }
                self.len -= 1;
                true
            }
        }
    }

    /// Removes the first element satisfying `pred`, relinking around it.
    /// Returns `false` when nothing matched.
    pub fn remove_first_match<P>(&mut self, pred: P) -> bool
    where
        P: Fn(&T) -> bool,
    {
        let head_matches = match &self.head {
            Some(node) => pred(&node.borrow().elem),
            None => return false,
        };
        if head_matches {
            return self.remove_first();
        }

        let mut prev = self.head.clone();
        loop {
            let current = prev.as_ref().and_then(|node| node.borrow().next.clone());
            let node = match current {
                Some(node) => node,
                None => return false,
            };
            let matches = pred(&node.borrow().elem);
            if matches {
                let next = node.borrow_mut().next.take();
                let removed_tail = next.is_none();
                if let Some(before) = &prev {
                    before.borrow_mut().next = next;
                }
                if removed_tail {
                    self.tail = prev;
                }
                self.len -= 1;
                return true;
            }
            prev = Some(node);
        }
    }

    /// Structural containment: `true` iff some element equals `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        let mut current = self.head.clone();
        while let Some(node) = current {
            let found = node.borrow().elem == *value;
            if found {
                return true;
            }
            let next = node.borrow().next.clone();
            current = next;
        }
        false
    }

    /// Returns a read-only cursor positioned at the head. Cursors
    /// obtained before a removal must be discarded afterwards; no
    /// stability across mutations is guaranteed.
    pub fn head(&self) -> Cursor<T> {
        Cursor {
            current: self.head.clone(),
        }
    }

    /// Visits every element in traversal order.
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(&T),
    {
        let mut current = self.head.clone();
        while let Some(node) = current {
            f(&node.borrow().elem);
            let next = node.borrow().next.clone();
            current = next;
        }
    }

    /// Applies `f` to each element in traversal order, returning the
    /// first `Some` it produces.
    pub fn find_map<R, F>(&self, mut f: F) -> Option<R>
    where
        F: FnMut(&T) -> Option<R>,
    {
        let mut current = self.head.clone();
        while let Some(node) = current {
            let result = f(&node.borrow().elem);
            if result.is_some() {
                return result;
            }
            let next = node.borrow().next.clone();
            current = next;
        }
        None
    }

    /// Applies `f` to the first element satisfying `pred`. This is the
    /// only way collaborators may mutate an element in place; the chain
    /// itself stays untouched.
    pub fn update_first_match<P, F, R>(&mut self, pred: P, f: F) -> Option<R>
    where
        P: Fn(&T) -> bool,
        F: FnOnce(&mut T) -> R,
    {
        let mut current = self.head.clone();
        while let Some(node) = current {
            let matches = pred(&node.borrow().elem);
            if matches {
                return Some(f(&mut node.borrow_mut().elem));
            }
            let next = node.borrow().next.clone();
            current = next;
        }
        None
    }

    /// Rolling structural hash over traversal order:
    /// `hash = hash * 31 + element_hash`, seeded with 1, clamped to a
    /// non-negative value. Equal lists hash equal.
    pub fn hash_code(&self) -> i64
    where
        T: HashCode,
    {
        let mut hash: i64 = 1;
        let mut current = self.head.clone();
        while let Some(node) = current {
            hash = hash
                .wrapping_mul(31)
                .wrapping_add(node.borrow().elem.hash_code());
            let next = node.borrow().next.clone();
            current = next;
        }
        hashing::non_negative(hash)
    }

    /// Snapshot of the elements in traversal order.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        let mut out = Vec::with_capacity(self.len);
        self.for_each(|elem| out.push(elem.clone()));
        out
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        LinkedList::new()
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        for elem in iter {
            list.add_last(elem);
        }
        list
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.len != other.len {
            return false;
        }
        let mut a = self.head.clone();
        let mut b = other.head.clone();
        loop {
            match (a, b) {
                (None, None) => return true,
                (Some(x), Some(y)) => {
                    let differ = x.borrow().elem != y.borrow().elem;
                    if differ {
                        return false;
                    }
                    a = x.borrow().next.clone();
                    b = y.borrow().next.clone();
                }
                _ => return false,
            }
        }
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: fmt::Display> fmt::Display for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "(empty)");
        }
        let mut first = true;
        let mut current = self.head.clone();
        while let Some(node) = current {
            if !first {
                write!(f, " -> ")?;
            }
            write!(f, "{}", node.borrow().elem)?;
            first = false;
            let next = node.borrow().next.clone();
            current = next;
        }
        Ok(())
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        let mut current = self.head.clone();
        while let Some(node) = current {
            list.entry(&node.borrow().elem);
            let next = node.borrow().next.clone();
            current = next;
        }
        list.finish()
    }
}

/// Read-only traversal handle over a [`LinkedList`].
///
/// A cursor can look at the element under it and step forward; it
/// exposes no way to relink the chain or change the count.
pub struct Cursor<T> {
    current: Link<T>,
}

impl<T> Cursor<T> {
    /// `true` while the cursor points at a node.
    pub fn is_valid(&self) -> bool {
        self.current.is_some()
    }

    /// Borrows the element under the cursor, or `None` past the tail.
    pub fn value(&self) -> Option<Ref<'_, T>> {
        self.current
            .as_ref()
            .map(|node| Ref::map(node.borrow(), |n| &n.elem))
    }

    /// Applies `f` to the element under the cursor without exposing the
    /// borrow to the caller.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        self.current.as_ref().map(|node| f(&node.borrow().elem))
    }

    /// Steps to the successor node; past the tail the cursor becomes
    /// invalid and stays so.
    pub fn advance(&mut self) {
        let next = self
            .current
            .as_ref()
            .and_then(|node| node.borrow().next.clone());
        self.current = next;
    }
}

impl<T> Clone for Cursor<T> {
    fn clone(&self) -> Self {
        Cursor {
            current: self.current.clone(),
        }
    }
}
