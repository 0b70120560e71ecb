use std::iter::FusedIterator;

/// Iterator over all unordered index pairs `(i, j)` with `i < j < n`,
/// in lexicographic order.
#[derive(Clone, Debug)]
pub struct UnorderedPairs {
    n: usize,
    i: usize,
    j: usize,
}

pub fn unordered_pairs(n: usize) -> UnorderedPairs {
    UnorderedPairs { n, i: 0, j: 1 }
}

/// `n * (n - 1) / 2`
pub fn pair_count(n: usize) -> usize {
    n * n.saturating_sub(1) / 2
}

impl Iterator for UnorderedPairs {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        if self.j >= self.n {
            return None;
        }
        let res = (self.i, self.j);
        self.j += 1;
        if self.j == self.n {
            self.i += 1;
            self.j = self.i + 1;
        }
        Some(res)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.j >= self.n {
            0
        } else {
            // rest of the current row plus all following rows
            (self.n - self.j) + pair_count(self.n - self.i - 1)
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for UnorderedPairs {}

impl FusedIterator for UnorderedPairs {}
