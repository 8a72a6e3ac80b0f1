//! This crate provides a doubly-linked list whose elements lie between two
//! sentinel nodes, a header and a trailer.
//!
//! The [`List`] hands out a [`Pos`] for every node it allocates. With a
//! position at hand, inserting or removing an element takes constant time.
//! In compromise, finding a position by rank takes *O*(*n*) time.
//!
//! Here is a quick example showing how the list works.
//!
//! ```
//! use sentinel_list::List;
//!
//! let mut list = List::new();
//! let two = list.insert_as_last(2);
//! list.insert_as_first(1);
//! list.insert_after(two, 4).unwrap();
//! assert_eq!(list.to_vec(), vec![1, 2, 4]);
//!
//! let four = list.last();
//! list.insert_before(four, 3).unwrap();
//! assert_eq!(list.remove(two), Ok(2));
//! assert_eq!(list.to_vec(), vec![1, 3, 4]);
//! ```
//!
//! # Memory Layout
//!
//! All nodes of a list, sentinels included, live in one arena owned by the
//! list and link to each other by position:
//! ```text
//!     Header                 Node 0                            Trailer
//!  ┌───────────┐          ╔═══════════╗                     ┌───────────┐
//!  │   next    │ ───────→ ║   next    ║ ───────→ ┄┄ ──────→ │   next    │ ─→ NONE
//!  ├───────────┤          ╟───────────╢                     ├───────────┤
//!  │   prev    │ ←─────── ║   prev    ║ ←─────── ┄┄ ←────── │   prev    │
//!  ├───────────┤          ╟───────────╢   Node 1, 2, ...    ├───────────┤
//!  ┊No payload ┊          ║ payload T ║                     ┊No payload ┊
//!  └╌╌╌╌╌╌╌╌╌╌╌┘          ╚═══════════╝                     └╌╌╌╌╌╌╌╌╌╌╌┘
//!        │ ↑                                                     ↑
//!  NONE ←┘ │        ╔═══════════╗                                │
//!          └─────── ║  header   ║                                │
//!                   ╟───────────╢                                │
//!                   ║  trailer  ║ ───────────────────────────────┘
//!                   ╟───────────╢
//!                   ║   (len)   ║
//!                   ╚═══════════╝
//!                       List
//! ```
//!
//! Initially, an empty list holds only the two sentinels, with `header.next`
//! pointing to the trailer and `trailer.prev` pointing to the header.
//!
//! In convention, in a list with length *n*, the real nodes are ranked by
//! 0, 1, ..., *n* - 1 from the header side.
//!
//! A [`Pos`] stays valid until its node is removed. Reversing the list by
//! relinking keeps every position attached to its element, while sorting
//! moves nodes around without reallocating them.
//!
//! # Iteration
//!
//! Iterating over a list is by the [`Iter`] and [`IterMut`] iterators. These are
//! double-ended iterators and never visit the sentinels. [`IterMut`] provides
//! mutability of the elements (but not the linked structure of the list).
//!
//! ## Examples
//!
//! ```
//! use sentinel_list::List;
//!
//! let mut list = List::from([1, 2, 3]);
//! let mut iter = list.iter();
//! assert_eq!(iter.next(), Some(&1));
//! assert_eq!(iter.next_back(), Some(&3));
//! assert_eq!(iter.next(), Some(&2));
//! assert_eq!(iter.next(), None);
//!
//! list.iter_mut().for_each(|item| *item *= 2);
//! assert_eq!(list.into_vec(), vec![2, 4, 6]);
//! ```
//!
//! # Algorithms
//!
//! - searching: [`find`] looks backwards among the predecessors of a
//!   position, [`search`] does the same on a sorted run and tells where a
//!   missing value belongs;
//! - duplicates: [`deduplicate`] keeps the first occurrence of every value,
//!   [`uniquify`] collapses adjacent runs of a sorted list;
//! - sorting: [`sort_with`] and [`sort_range`] run the insertion, selection or
//!   merge sort chosen by a [`SortAlgorithm`];
//! - reversal: [`reverse_with`] takes a [`ReverseStrategy`].
//!
//! ```
//! use sentinel_list::{List, SortAlgorithm};
//!
//! let mut list = List::from([3, 1, 3, 2, 1]);
//! list.sort_with(SortAlgorithm::Merge);
//! assert_eq!(list.uniquify(), 2);
//! assert_eq!(list.to_vec(), vec![1, 2, 3]);
//!
//! list.reverse();
//! assert_eq!(list.to_vec(), vec![3, 2, 1]);
//! ```
//!
//! [`find`]: crate::List::find
//! [`search`]: crate::List::search
//! [`deduplicate`]: crate::List::deduplicate
//! [`uniquify`]: crate::List::uniquify
//! [`sort_with`]: crate::List::sort_with
//! [`sort_range`]: crate::List::sort_range
//! [`reverse_with`]: crate::List::reverse_with

#[doc(inline)]
pub use error::ListError;
#[doc(inline)]
pub use list::iterator::{IntoIter, Iter, IterMut};
#[doc(inline)]
pub use list::{List, Pos, ReverseStrategy, Search, SortAlgorithm};

mod error;
pub mod list;
