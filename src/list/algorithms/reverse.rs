use crate::list::{List, Pos};
use std::mem;

/// How [`List::reverse_with`] reverses the order of the elements.
///
/// All strategies run in *O*(*n*) time and give the same order. They differ
/// only in what they write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReverseStrategy {
    /// Swap the elements of symmetric nodes, walking inwards from both
    /// sentinels. Links are untouched, so every position keeps its rank but
    /// changes its element. Suits elements that are cheap to move.
    SwapValues,
    /// Two forward passes: the first points every `prev` link at the old
    /// successor, the second points every `next` link at the old
    /// predecessor. Then the header and the trailer trade roles.
    Relink,
    /// Swap the `prev` and `next` links of every node, sentinels included,
    /// then let the header and the trailer trade roles.
    SwapLinks,
}

impl<T> List<T> {
    /// Reverses the order of the elements by relinking the nodes.
    ///
    /// Positions stay attached to their elements.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list = List::from([1, 2, 3]);
    /// let one = list.first();
    /// list.reverse();
    /// assert_eq!(list.to_vec(), vec![3, 2, 1]);
    /// assert_eq!(list.last(), one);
    /// ```
    pub fn reverse(&mut self) {
        self.reverse_with(ReverseStrategy::Relink);
    }

    /// Reverses the order of the elements with the given strategy.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::{List, ReverseStrategy};
    ///
    /// let mut list = List::from([1, 2, 3, 4]);
    /// list.reverse_with(ReverseStrategy::SwapValues);
    /// assert_eq!(list.to_vec(), vec![4, 3, 2, 1]);
    /// list.reverse_with(ReverseStrategy::SwapLinks);
    /// assert_eq!(list.to_vec(), vec![1, 2, 3, 4]);
    /// ```
    pub fn reverse_with(&mut self, strategy: ReverseStrategy) {
        match strategy {
            ReverseStrategy::SwapValues => self.reverse_values(),
            ReverseStrategy::Relink => self.reverse_relink(),
            ReverseStrategy::SwapLinks => self.reverse_swap_links(),
        }
        #[cfg(debug_assertions)]
        self.assert_links();
    }

    fn reverse_values(&mut self) {
        let (mut p, mut q) = (self.header, self.trailer);
        // a middle node of an odd-length list stays where it is
        for _ in 0..self.len / 2 {
            p = self.next_of(p);
            q = self.prev_of(q);
            match self.nodes.get2_mut(p.0, q.0) {
                Some((front, back)) => mem::swap(&mut front.payload, &mut back.payload),
                None => unreachable!("symmetric nodes are distinct and live"),
            }
        }
    }

    fn reverse_relink(&mut self) {
        if self.len < 2 {
            return;
        }
        let (header, trailer) = (self.header, self.trailer);

        let mut p = header;
        while p != trailer {
            let next = self.next_of(p);
            self.nodes[p.0].prev = next;
            p = next;
        }

        // `prev` now runs forward, from the header to the trailer.
        let mut p = header;
        while p != trailer {
            let next = self.prev_of(p);
            self.nodes[next.0].next = p;
            p = next;
        }

        self.nodes[trailer.0].prev = Pos::NONE;
        self.nodes[header.0].next = Pos::NONE;
        mem::swap(&mut self.header, &mut self.trailer);
    }

    fn reverse_swap_links(&mut self) {
        if self.len < 2 {
            return;
        }
        let mut p = self.header;
        while !p.is_none() {
            let node = &mut self.nodes[p.0];
            mem::swap(&mut node.prev, &mut node.next);
            p = node.prev;
        }
        mem::swap(&mut self.header, &mut self.trailer);
    }
}

#[cfg(test)]
mod tests {
    use crate::{List, ReverseStrategy};
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    const STRATEGIES: [ReverseStrategy; 3] = [
        ReverseStrategy::SwapValues,
        ReverseStrategy::Relink,
        ReverseStrategy::SwapLinks,
    ];

    #[test]
    fn reverse_small_lists() {
        for strategy in STRATEGIES {
            for len in 0..6 {
                let mut list: List<i32> = (0..len).collect();
                list.reverse_with(strategy);
                list.assert_links();
                let expected: Vec<i32> = (0..len).rev().collect();
                assert_eq!(list.to_vec(), expected, "{:?}", strategy);
                assert_eq!(list.len(), len as usize);
            }
        }
    }

    #[test]
    fn reverse_twice_round_trips() {
        let mut rng = SmallRng::seed_from_u64(5);
        for _ in 0..50 {
            let len = rng.random_range(0..30);
            let input: Vec<u32> = (0..len).map(|_| rng.random()).collect();
            for strategy in STRATEGIES {
                let mut list = List::from(input.clone());
                list.reverse_with(strategy);
                list.reverse_with(strategy);
                list.assert_links();
                assert_eq!(list.to_vec(), input, "{:?}", strategy);
            }
        }
    }

    #[test]
    fn relinking_keeps_positions() {
        for strategy in [ReverseStrategy::Relink, ReverseStrategy::SwapLinks] {
            let mut list = List::from([1, 2, 3]);
            let (one, three) = (list.first(), list.last());
            list.reverse_with(strategy);
            assert_eq!(list.first(), three);
            assert_eq!(list.last(), one);
            assert_eq!(list.get(one), Some(&1));
            assert_eq!(list.prev(list.header()), None);
            assert_eq!(list.next(list.trailer()), None);

            list.insert_as_last(0);
            list.insert_as_first(4);
            assert_eq!(list.to_vec(), vec![4, 3, 2, 1, 0]);
            list.assert_links();
        }
    }

    #[test]
    fn swapping_values_keeps_links() {
        let mut list = List::from([1, 2, 3]);
        let one = list.first();
        list.reverse_with(ReverseStrategy::SwapValues);
        assert_eq!(list.first(), one);
        assert_eq!(list.get(one), Some(&3));
    }
}
