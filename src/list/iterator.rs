use crate::list::{List, Pos};
use std::collections::VecDeque;
use std::fmt;
use std::iter::{FromIterator, FusedIterator};

/// An iterator over the elements of a [`List`], from the header side to the
/// trailer side.
pub struct Iter<'a, T: 'a> {
    list: &'a List<T>,
    start: Pos,
    end: Pos,
    len: usize,
}

impl<'a, T: 'a> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Self {
            list: self.list,
            start: self.start,
            end: self.end,
            len: self.len,
        }
    }
}

impl<'a, T: 'a> Iter<'a, T> {
    pub(crate) fn new(list: &'a List<T>) -> Self {
        Self {
            list,
            start: list.first(),
            end: list.trailer(),
            len: list.len(),
        }
    }
}

impl<'a, T: fmt::Debug + 'a> fmt::Debug for Iter<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter").field(&self.len).finish()
    }
}

impl<'a, T: 'a> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        let list = self.list;
        let current = self.start;
        self.start = list.next_of(current);
        self.len -= 1;
        Some(list.value(current))
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
        self.end = list.prev_of(self.end);
        self.len -= 1;
        Some(list.value(self.end))
    }
}

impl<'a, T: 'a> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T: 'a> FusedIterator for Iter<'a, T> {}

/// A mutable iterator over the elements of a [`List`].
///
/// It mutates the elements, never the links.
pub struct IterMut<'a, T: 'a> {
    elements: VecDeque<&'a mut T>,
}

impl<'a, T: 'a> IterMut<'a, T> {
    pub(crate) fn new(list: &'a mut List<T>) -> Self {
        let mut order = Vec::with_capacity(list.len());
        let mut p = list.first();
        while p != list.trailer() {
            order.push(p.0);
            p = list.next_of(p);
        }

        // Split the arena once, then hand the elements out in link order.
        let mut slots: Vec<Option<&'a mut T>> = Vec::new();
        for (key, node) in list.nodes.iter_mut() {
            if slots.len() <= key {
                slots.resize_with(key + 1, || None);
            }
            slots[key] = node.element_mut();
        }
        let elements = order
            .into_iter()
            .filter_map(|key| slots[key].take())
            .collect();
        Self { elements }
    }
}

impl<'a, T: fmt::Debug + 'a> fmt::Debug for IterMut<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IterMut").field(&self.elements.len()).finish()
    }
}

impl<'a, T: 'a> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.elements.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.elements.len();
        (len, Some(len))
    }

    fn last(mut self) -> Option<Self::Item>
    where
        Self: Sized,
    {
        self.next_back()
    }
}

impl<'a, T: 'a> DoubleEndedIterator for IterMut<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.elements.pop_back()
    }
}

impl<'a, T: 'a> ExactSizeIterator for IterMut<'a, T> {}

impl<'a, T: 'a> FusedIterator for IterMut<'a, T> {}

/// An owning iterator over the elements of a [`List`].
pub struct IntoIter<T> {
    list: List<T>,
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntoIter")
            .field("list", &self.list)
            .finish()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.list.len();
        (len, Some(len))
    }

    fn last(mut self) -> Option<Self::Item>
    where
        Self: Sized,
    {
        self.next_back()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.list.pop_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut List<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = List::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for List<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|elt| self.push_back(elt));
    }
}

impl<'a, T: 'a + Copy> Extend<&'a T> for List<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().cloned());
    }
}

impl<T, const N: usize> From<[T; N]> for List<T> {
    fn from(arr: [T; N]) -> Self {
        Self::from_iter(arr)
    }
}

impl<T> From<Vec<T>> for List<T> {
    fn from(vec: Vec<T>) -> Self {
        Self::from_iter(vec)
    }
}

#[cfg(test)]
mod tests {
    use crate::List;

    #[test]
    fn iter_both_ends() {
        let list = List::from([1, 2, 3, 4]);
        let mut iter = list.iter();
        assert_eq!(iter.len(), 4);
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next_back(), Some(&4));
        assert_eq!(iter.next_back(), Some(&3));
        assert_eq!(iter.len(), 1);
        assert_eq!(iter.next(), Some(&2));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);

        assert_eq!(list.iter().rev().copied().collect::<Vec<_>>(), vec![4, 3, 2, 1]);
        assert_eq!(list.iter().last(), Some(&4));
    }

    #[test]
    fn iter_mut_both_ends() {
        let mut list = List::from([1, 2, 3]);
        {
            let mut iter = list.iter_mut();
            *iter.next().unwrap() *= 10;
            *iter.next_back().unwrap() *= 100;
            *iter.next().unwrap() += 5;
            assert!(iter.next().is_none());
        }
        assert_eq!(list.to_vec(), vec![10, 7, 300]);

        for x in &mut list {
            *x = -*x;
        }
        assert_eq!(list.to_vec(), vec![-10, -7, -300]);
    }

    #[test]
    fn iter_mut_references_coexist() {
        let mut list = List::from([1, 2, 3, 4]);
        list.remove(list.position(1).unwrap()).unwrap();
        list.insert_as_first(0);
        {
            let mut iter = list.iter_mut();
            let a = iter.next().unwrap();
            let b = iter.next().unwrap();
            let c = iter.next_back().unwrap();
            let d = iter.next().unwrap();
            assert!(iter.next().is_none());
            *a += 10;
            *b += 20;
            *c += 30;
            *d += 40;
            *a += *d;
        }
        assert_eq!(list.to_vec(), vec![53, 21, 43, 34]);
        list.assert_links();
    }

    #[test]
    fn into_iter_both_ends() {
        let list = List::from(vec![1, 2, 3]);
        let mut iter = list.into_iter();
        assert_eq!(iter.size_hint(), (3, Some(3)));
        assert_eq!(iter.next_back(), Some(3));
        assert_eq!(iter.next(), Some(1));
        assert_eq!(iter.collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn collect_and_extend() {
        let mut list: List<i32> = (0..3).collect();
        list.extend(vec![3, 4]);
        list.extend(&[5, 6]);
        assert_eq!(list.len(), 7);
        assert_eq!(list.into_vec(), (0..7).collect::<Vec<_>>());
    }
}
