use container::cmp::by_key;
use container::collections::BinHeap;
use container::Natural;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Operation {
    Push(i16),
    Pop,
    Peek,
    Init(Vec<i16>),
    Clear,
}

fn operation() -> impl Strategy<Value = Operation> {
    prop_oneof![
        4 => any::<i16>().prop_map(Operation::Push),
        3 => Just(Operation::Pop),
        1 => Just(Operation::Peek),
        1 => proptest::collection::vec(any::<i16>(), 0..32).prop_map(Operation::Init),
        1 => Just(Operation::Clear),
    ]
}

proptest! {
    #[test]
    fn test_heap_matches_sorted_model(ops in proptest::collection::vec(operation(), 1..200)) {
        // The model keeps its elements sorted ascending.
        let mut model: Vec<i16> = Vec::new();
        let mut heap = BinHeap::new(|a: &i16, b: &i16| a.cmp(b));

        for op in ops {
            match op {
                Operation::Push(x) => {
                    let at = model.partition_point(|&m| m <= x);
                    model.insert(at, x);
                    heap.push(x);
                }
                Operation::Pop => {
                    let expected = if model.is_empty() { None } else { Some(model.remove(0)) };
                    prop_assert_eq!(heap.pop(), expected, "Pop result mismatch");
                }
                Operation::Peek => {
                    prop_assert_eq!(heap.peek(), model.first(), "Peek result mismatch");
                }
                Operation::Init(values) => {
                    model = values.clone();
                    model.sort_unstable();
                    heap.init(values);
                }
                Operation::Clear => {
                    model.clear();
                    heap.clear();
                }
            }
            prop_assert!(heap.is_heap(), "Heap property violated");
            prop_assert_eq!(heap.len(), model.len(), "Length mismatch");
        }
    }

    #[test]
    fn test_push_then_pop_all_is_sorted(values in proptest::collection::vec(any::<i32>(), 100)) {
        let mut heap = BinHeap::natural();
        for &x in &values {
            heap.push(x);
        }
        prop_assert_eq!(heap.len(), 100);

        let mut popped = Vec::with_capacity(values.len());
        while let Some(x) = heap.pop() {
            popped.push(x);
        }

        let mut expected = values;
        expected.sort_unstable();
        prop_assert_eq!(popped, expected);
        prop_assert_eq!(heap.pop(), None);
        prop_assert_eq!(heap.len(), 0);
    }

    #[test]
    fn test_init_matches_repeated_push(values in proptest::collection::vec(any::<u8>(), 0..64)) {
        let mut bulk = BinHeap::new(Natural);
        bulk.init(values.iter().copied());
        prop_assert!(bulk.is_heap());
        prop_assert_eq!(bulk.len(), values.len());

        let mut pushed = BinHeap::new(Natural);
        for &x in &values {
            pushed.push(x);
        }
        prop_assert_eq!(bulk.into_sorted_vec(), pushed.into_sorted_vec());
    }

    #[test]
    fn test_extend_keeps_heap_property(
        base in proptest::collection::vec(any::<i32>(), 0..40),
        more in proptest::collection::vec(any::<i32>(), 0..40),
    ) {
        let mut heap: BinHeap<i32, Natural> = base.iter().copied().collect();
        heap.extend(more.iter().copied());
        prop_assert!(heap.is_heap());
        prop_assert_eq!(heap.len(), base.len() + more.len());
    }

    #[test]
    fn test_pop_order_with_duplicate_keys(
        items in proptest::collection::vec((0u8..4, any::<u32>()), 0..64)
    ) {
        let mut heap = BinHeap::new(by_key(|e: &(u8, u32)| e.0));
        heap.init(items.iter().copied());

        let keys: Vec<u8> = heap.drain_sorted().map(|(k, _)| k).collect();
        prop_assert_eq!(keys.len(), items.len());
        prop_assert!(keys.windows(2).all(|w| w[0] <= w[1]));
    }
}
