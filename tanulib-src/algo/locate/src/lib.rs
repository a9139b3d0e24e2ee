/// Linear search over a slice; `None` is the absent ("end") result.
pub trait Locate {
    type Item;

    /// First position holding an element equal to `target`; O(n).
    fn position_of(&self, target: &Self::Item) -> Option<usize>
    where
        Self::Item: PartialEq;

    /// First position whose element satisfies `pred`; O(n).
    fn position_by(
        &self,
        pred: impl FnMut(&Self::Item) -> bool,
    ) -> Option<usize>;
}

impl<T> Locate for [T] {
    type Item = T;

    fn position_of(&self, target: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.position_by(|elt| elt == target)
    }

    fn position_by(&self, mut pred: impl FnMut(&T) -> bool) -> Option<usize> {
        (0..self.len()).find(|&i| pred(&self[i]))
    }
}

pub trait LocateSubseq {
    type Item;

    /// First position where `needle` occurs as a contiguous
    /// subsequence; O(n·m) comparisons. The empty needle matches at 0.
    fn position_subseq(&self, needle: &[Self::Item]) -> Option<usize>
    where
        Self::Item: PartialEq;
}

impl<T> LocateSubseq for [T] {
    type Item = T;

    fn position_subseq(&self, needle: &[T]) -> Option<usize>
    where
        T: PartialEq,
    {
        if needle.len() > self.len() {
            return None;
        }
        (0..=self.len() - needle.len())
            .find(|&i| self[i..i + needle.len()] == *needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_match_wins() {
        let a = [1, 4, 8, 3, 3, 6, 9];
        assert_eq!(a.position_of(&3), Some(3));
        assert_eq!(a.position_of(&7), None);
        assert_eq!(a[4..].position_of(&3), Some(0));
    }

    #[test]
    fn predicate_search() {
        let a = [("One", 1), ("Second", 2), ("Three", 3), ("Four", 4)];
        let found = a.position_by(|&(_, n)| n == 3);
        assert_eq!(found, Some(2));
        assert_eq!(a[found.unwrap()], ("Three", 3));
        assert_eq!(a.position_by(|&(_, n)| n > 9), None);
    }

    #[test]
    fn subsequence_search() {
        let a = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
        assert_eq!(a.position_subseq(&[4, 5, 6]), Some(3));
        assert_eq!(a.position_subseq(&[4, 6]), None);
        assert_eq!(a.position_subseq(&[]), Some(0));
        assert_eq!(a.position_subseq(&[9, 10]), Some(8));
        assert_eq!([3].position_subseq(&[3, 4]), None);
    }
}
