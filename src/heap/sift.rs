use super::{BackingSequence, Element};
use crate::utils::{left_child, parent, right_child};

/**
 * Move the element at `index` toward the root while it is strictly greater
 * than its parent.
 *
 * Equal priorities never swap, so a newly inserted element stops below any
 * ancestor it ties with.  Returns the index the element settled at.
 *
 * Panics if `index >= seq.len()`.
 */
pub fn sift_up<P, S>(seq: &mut S, mut index: usize) -> usize
where
    S: BackingSequence<Element<P>> + ?Sized,
{
    assert!(index < seq.len(), "sift_up index {} out of {}", index, seq.len());
    while index > 0 {
        let parent = parent(index);
        if seq.get(index).priority <= seq.get(parent).priority {
            break;
        }
        seq.swap(index, parent);
        index = parent;
    }
    index
}

/**
 * Move the element at `index` toward the leaves while a child is strictly
 * greater than it.
 *
 * The parent starts as the largest candidate; the left child replaces it if
 * strictly greater, then the right child replaces whichever is current if
 * strictly greater.  Returns the index the element settled at.
 *
 * Panics if `index >= seq.len()`.
 */
pub fn sift_down<P, S>(seq: &mut S, mut index: usize) -> usize
where
    S: BackingSequence<Element<P>> + ?Sized,
{
    let size = seq.len();
    assert!(index < size, "sift_down index {} out of {}", index, size);
    loop {
        let mut largest = index;

        let left = left_child(index);
        if left < size && seq.get(left).priority > seq.get(largest).priority {
            largest = left;
        }
        let right = right_child(index);
        if right < size && seq.get(right).priority > seq.get(largest).priority {
            largest = right;
        }

        if largest == index {
            return index;
        }
        seq.swap(index, largest);
        index = largest;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::is_max_heap;

    fn elements(priorities: &[i32]) -> Vec<Element<usize>> {
        priorities
            .iter()
            .enumerate()
            .map(|(i, &p)| Element::new(i, p))
            .collect()
    }

    fn priorities(seq: &[Element<usize>]) -> Vec<i32> {
        seq.iter().map(|e| e.priority).collect()
    }

    #[test]
    fn test_sift_up_to_root() {
        let mut seq = elements(&[9, 7, 5, 3, 1, 4, 10]);
        assert_eq!(sift_up(&mut seq, 6), 0);
        assert_eq!(priorities(&seq), vec![10, 7, 9, 3, 1, 4, 5]);
        assert_eq!(seq[0].payload, 6);
        assert!(is_max_heap(&seq));
    }

    #[test]
    fn test_sift_up_stops_on_tie() {
        let mut seq = elements(&[9, 7, 5, 7]);
        assert_eq!(sift_up(&mut seq, 3), 3);
        assert_eq!(priorities(&seq), vec![9, 7, 5, 7]);
    }

    #[test]
    fn test_sift_up_root_is_noop() {
        let mut seq = elements(&[1]);
        assert_eq!(sift_up(&mut seq, 0), 0);
        assert_eq!(priorities(&seq), vec![1]);
    }

    #[test]
    fn test_sift_down_to_leaf() {
        let mut seq = elements(&[1, 9, 7, 3, 5, 6]);
        assert_eq!(sift_down(&mut seq, 0), 4);
        assert_eq!(priorities(&seq), vec![9, 5, 7, 3, 1, 6]);
        assert_eq!(seq[4].payload, 0);
        assert!(is_max_heap(&seq));
    }

    #[test]
    fn test_sift_down_prefers_larger_child() {
        let mut seq = elements(&[1, 4, 8]);
        assert_eq!(sift_down(&mut seq, 0), 2);
        assert_eq!(priorities(&seq), vec![8, 4, 1]);
    }

    #[test]
    fn test_sift_down_equal_children_takes_left() {
        let mut seq = elements(&[1, 4, 4]);
        assert_eq!(sift_down(&mut seq, 0), 1);
        assert_eq!(seq[0].payload, 1);
    }

    #[test]
    #[should_panic]
    fn test_sift_up_out_of_range() {
        let mut seq = elements(&[3, 2]);
        sift_up(&mut seq, 2);
    }

    #[test]
    #[should_panic]
    fn test_sift_down_out_of_range() {
        let mut seq: Vec<Element<usize>> = Vec::new();
        sift_down(&mut seq, 0);
    }

    #[test]
    fn test_sift_down_stops_on_tie() {
        let mut seq = elements(&[4, 4, 2]);
        assert_eq!(sift_down(&mut seq, 0), 0);
        assert_eq!(seq[0].payload, 0);
    }
}
