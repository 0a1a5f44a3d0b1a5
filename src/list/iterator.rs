use crate::list::node::NodeRef;
use crate::list::List;
use std::fmt;
use std::iter::FusedIterator;

/// An iterator over the elements of a `List`.
///
/// It walks the half-open window between `front` and `back`, both inclusive
/// while `len > 0`. Iterating never moves the list's cursor.
///
/// # Examples
///
/// ```compile_fail
/// use cursor_list::List;
///
/// let mut list = List::from_iter([1, 2, 3]);
/// let mut iter = list.iter();
///
/// // Won't compile, because list is already borrowed immutably.
/// list.insert(4);
/// println!("{:?}", iter.next());
/// ```
pub struct Iter<'a, T: 'a> {
    list: &'a List<T>,
    front: Option<NodeRef>,
    back: Option<NodeRef>,
    len: usize,
}

impl<'a, T: 'a> Iter<'a, T> {
    pub(crate) fn new(list: &'a List<T>) -> Self {
        Self {
            list,
            front: list.head,
            back: list.tail,
            len: list.len,
        }
    }
}

impl<'a, T: 'a> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Self { ..*self }
    }
}

impl<'a, T: fmt::Debug + 'a> fmt::Debug for Iter<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter")
            .field(&self.len)
            .field(&self.clone().collect::<Vec<_>>())
            .finish()
    }
}

impl<'a, T: 'a> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        let list = self.list;
        let current = &list.nodes[self.front?];
        self.front = current.next;
        self.len -= 1;
        Some(&current.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }

    fn last(mut self) -> Option<Self::Item>
    where
        Self: Sized,
    {
        self.next_back()
    }
}

impl<'a, T: 'a> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        let list = self.list;
        let current = &list.nodes[self.back?];
        self.back = current.prev;
        self.len -= 1;
        Some(&current.value)
    }
}

impl<'a, T: 'a> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T: 'a> FusedIterator for Iter<'a, T> {}

/// An owning iterator over the elements of a `List`.
///
/// This `struct` is created by the [`into_iter`] method on [`List`]
/// (provided by the [`IntoIterator`] trait).
///
/// [`into_iter`]: List::into_iter
pub struct IntoIter<T> {
    list: List<T>,
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.list).finish()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        let head = self.list.head?;
        Some(self.list.remove_node(head, 0))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len, Some(self.list.len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        let tail = self.list.tail?;
        let index = self.list.len - 1;
        Some(self.list.remove_node(tail, index))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut list = List::with_capacity(iter.size_hint().0);
        list.extend(iter);
        list
    }
}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Consumes the list into an iterator yielding elements by value.
    #[inline]
    fn into_iter(self) -> IntoIter<T> {
        IntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T> Extend<T> for List<T> {
    /// Appends every element of `iter` in order. The cursor is not moved.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|elt| self.insert(elt));
    }
}

impl<'a, T: 'a + Copy> Extend<&'a T> for List<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

#[cfg(test)]
mod tests {
    use crate::list::List;

    #[test]
    fn iter_both_ends() {
        let list = List::from_iter(0..6);
        let mut iter = list.iter();
        assert_eq!(iter.len(), 6);
        assert_eq!(iter.next(), Some(&0));
        assert_eq!(iter.next_back(), Some(&5));
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next_back(), Some(&4));
        assert_eq!(iter.len(), 2);

        let rest = iter.clone();
        assert_eq!(iter.next(), Some(&2));
        assert_eq!(iter.next_back(), Some(&3));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
        assert_eq!(iter.next(), None);

        assert_eq!(rest.last(), Some(&3));
    }

    #[test]
    fn iter_empty() {
        let list = List::<i32>::new();
        assert_eq!(list.iter().next(), None);
        assert_eq!(list.iter().next_back(), None);
        assert_eq!(list.iter().len(), 0);
    }

    #[test]
    fn iter_after_mutation() {
        let mut list = List::from_iter([1, 2, 3]);
        list.remove_at(1).unwrap();
        list.insert_at(4, 0).unwrap();
        list.insert(5);
        assert_eq!(Vec::from_iter(&list), vec![&4, &1, &3, &5]);
        assert_eq!(Vec::from_iter(list.iter().rev()), vec![&5, &3, &1, &4]);
    }

    #[test]
    fn into_iter_both_ends() {
        let list = List::from_iter(0..5);
        let mut iter = list.into_iter();
        assert_eq!(iter.len(), 5);
        assert_eq!(iter.next(), Some(0));
        assert_eq!(iter.next_back(), Some(4));
        assert_eq!(iter.len(), 3);
        assert_eq!(Vec::from_iter(iter), vec![1, 2, 3]);
    }

    #[test]
    fn extend_appends() {
        let mut list = List::from_iter([1, 2]);
        list.reset_cursor(false);
        list.extend([3, 4]);
        list.extend(&[5, 6]);
        assert_eq!(Vec::from_iter(list.iter().copied()), vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(list.cursor_index(), Some(1));
        assert_eq!(list.size(), 6);
    }

    #[test]
    fn for_loop_over_reference() {
        let list = List::from_iter(["a", "b"]);
        let mut joined = String::new();
        for s in &list {
            joined.push_str(s);
        }
        assert_eq!(joined, "ab");
    }
}
