//! Lexicographic index permutation generator.
//!
//! Permutes `usize` indices into the caller's stop list rather than the stops
//! themselves. Starting from ascending order, [`next_permutation`] visits
//! every arrangement exactly once in lexicographic order.

/// Rearranges `items` into the next lexicographically greater permutation.
///
/// Returns `false`, leaving `items` unchanged, when `items` is already the
/// last (descending) permutation.
///
/// # Examples
///
/// ```
/// use u_delivery::search::next_permutation;
///
/// let mut p = [0, 1, 2];
/// assert!(next_permutation(&mut p));
/// assert_eq!(p, [0, 2, 1]);
///
/// let mut last = [2, 1, 0];
/// assert!(!next_permutation(&mut last));
/// assert_eq!(last, [2, 1, 0]);
/// ```
pub fn next_permutation<T: Ord>(items: &mut [T]) -> bool {
    let n = items.len();
    if n < 2 {
        return false;
    }

    // Rightmost ascent: items[i] < items[i + 1].
    let mut i = n - 1;
    while i > 0 && items[i - 1] >= items[i] {
        i -= 1;
    }
    if i == 0 {
        return false;
    }
    let pivot = i - 1;

    let mut j = n - 1;
    while items[j] <= items[pivot] {
        j -= 1;
    }
    items.swap(pivot, j);
    items[i..].reverse();
    true
}

/// Number of permutations of `n` items, `None` on `u64` overflow.
pub fn permutation_count(n: usize) -> Option<u64> {
    (1..=n as u64).try_fold(1u64, |acc, k| acc.checked_mul(k))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Fresh,
    Running,
    Exhausted,
}

/// A lazy, finite, restartable sequence of index permutations.
///
/// [`advance`](Self::advance) lends each permutation without allocating;
/// the [`Iterator`] impl yields owned copies. Zero items produce a single
/// empty permutation.
///
/// # Examples
///
/// ```
/// use u_delivery::search::Permutations;
///
/// let mut perms = Permutations::new(3);
/// let all: Vec<Vec<usize>> = perms.by_ref().collect();
/// assert_eq!(all.len(), 6);
/// assert_eq!(all[0], vec![0, 1, 2]);
/// assert_eq!(all[5], vec![2, 1, 0]);
///
/// perms.reset();
/// assert_eq!(perms.advance(), Some(&[0, 1, 2][..]));
/// ```
#[derive(Debug, Clone)]
pub struct Permutations {
    first: Vec<usize>,
    current: Vec<usize>,
    state: State,
}

impl Permutations {
    /// Permutations of the indices `0..n`.
    pub fn new(n: usize) -> Self {
        Self::from_sorted((0..n).collect())
    }

    /// Permutations of the given indices.
    ///
    /// `indices` should be ascending and distinct; enumeration starts from
    /// the order given and stops at the last lexicographic permutation.
    pub fn from_sorted(indices: Vec<usize>) -> Self {
        Self {
            current: indices.clone(),
            first: indices,
            state: State::Fresh,
        }
    }

    /// Steps to the next permutation and borrows it.
    pub fn advance(&mut self) -> Option<&[usize]> {
        match self.state {
            State::Fresh => {
                self.state = State::Running;
                Some(&self.current)
            }
            State::Running => {
                if next_permutation(&mut self.current) {
                    Some(&self.current)
                } else {
                    self.state = State::Exhausted;
                    None
                }
            }
            State::Exhausted => None,
        }
    }

    /// Rewinds to the first permutation.
    pub fn reset(&mut self) {
        self.current.clone_from(&self.first);
        self.state = State::Fresh;
    }
}

impl Iterator for Permutations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        self.advance().map(<[usize]>::to_vec)
    }
}
