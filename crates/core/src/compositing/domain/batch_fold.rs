/// Folds `items` into consecutive groups of at most `batch_size`, combining
/// left to right within each group, and returns one value per group.
///
/// A trailing group shorter than `batch_size` is still returned. Callers
/// merge the returned groups in a single final pass, which keeps the cost of
/// repeated concatenation bounded by the group size instead of the total.
pub fn fold_in_batches<T, I, F>(items: I, batch_size: usize, mut combine: F) -> Vec<T>
where
    I: IntoIterator<Item = T>,
    F: FnMut(T, T) -> T,
{
    let batch_size = batch_size.max(1);
    let mut batches = Vec::new();
    let mut current: Option<T> = None;
    let mut in_batch = 0;

    for item in items {
        current = Some(match current.take() {
            None => item,
            Some(acc) => combine(acc, item),
        });
        in_batch += 1;

        if in_batch == batch_size {
            batches.extend(current.take());
            in_batch = 0;
        }
    }

    batches.extend(current);
    batches
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn concat(a: String, b: String) -> String {
        a + &b
    }

    #[test]
    fn test_empty_input_yields_no_batches() {
        let batches = fold_in_batches(Vec::<String>::new(), 3, concat);
        assert!(batches.is_empty());
    }

    #[test]
    fn test_groups_preserve_order() {
        let items = ["a", "b", "c", "d", "e"].map(String::from);
        let batches = fold_in_batches(items, 2, concat);
        assert_eq!(batches, vec!["ab", "cd", "e"]);
    }

    #[rstest]
    #[case(1, 1)]
    #[case(499, 1)]
    #[case(500, 1)]
    #[case(501, 2)]
    #[case(1200, 3)]
    fn test_batch_counts_at_boundaries(#[case] len: usize, #[case] expected_batches: usize) {
        let items: Vec<Vec<usize>> = (0..len).map(|i| vec![i]).collect();
        let batches = fold_in_batches(items, 500, |mut a, b| {
            a.extend(b);
            a
        });

        assert_eq!(batches.len(), expected_batches);
        let flattened: Vec<usize> = batches.into_iter().flatten().collect();
        assert_eq!(flattened, (0..len).collect::<Vec<_>>());
    }

    #[test]
    fn test_combine_called_once_per_extra_item() {
        let mut calls = 0;
        let batches = fold_in_batches(0..7, 3, |a, b| {
            calls += 1;
            a + b
        });
        // groups [0,1,2] [3,4,5] [6]
        assert_eq!(batches, vec![3, 12, 6]);
        assert_eq!(calls, 4);
    }

    #[test]
    fn test_zero_batch_size_behaves_as_one() {
        let batches = fold_in_batches(1..=3, 0, |a, b| a + b);
        assert_eq!(batches, vec![1, 2, 3]);
    }
}
