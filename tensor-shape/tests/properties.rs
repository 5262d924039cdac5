//! Property tests for size arithmetic and slicing over random shapes.

use proptest::prelude::*;
use tensor_shape::{Shape, ShapeError};

// Small extents keep products of up to 8 axes well inside i64.
fn concrete_dims() -> impl Strategy<Value = Vec<i64>> {
    proptest::collection::vec(0_i64..16, 0..8)
}

fn dims_with_unknowns() -> impl Strategy<Value = Vec<i64>> {
    proptest::collection::vec(prop_oneof![3 => 0_i64..16, 1 => Just(-1_i64)], 0..8)
}

fn shape_and_range() -> impl Strategy<Value = (Vec<i64>, usize, usize)> {
    dims_with_unknowns().prop_flat_map(|dims| {
        let rank = dims.len();
        (Just(dims), 0..=rank).prop_flat_map(move |(dims, start)| {
            (Just(dims), Just(start), start..=rank)
        })
    })
}

proptest! {
    #[test]
    fn product_splits_at_every_dimension(dims in concrete_dims()) {
        let shape = Shape::<6>::new(&dims);
        let size = shape.size().unwrap();
        prop_assert_eq!(size, dims.iter().product::<i64>());

        for d in 0..=shape.rank() {
            let head = shape.size_to_dimension(d).unwrap();
            let tail = shape.size_from_dimension(d).unwrap();
            prop_assert_eq!(head * tail, size, "split at {} of {}", d, shape);
        }
    }

    #[test]
    fn unknown_extent_makes_covering_sizes_unknown(dims in dims_with_unknowns()) {
        let shape = Shape::<6>::new(&dims);

        if dims.iter().any(|&dim| dim < 0) {
            prop_assert_eq!(shape.size().unwrap(), -1);
        }

        for d in 0..=shape.rank() {
            if dims[..d].iter().any(|&dim| dim < 0) {
                prop_assert_eq!(shape.size_to_dimension(d).unwrap(), -1);
            } else {
                prop_assert!(shape.size_to_dimension(d).unwrap() >= 0);
            }

            if dims[d..].iter().any(|&dim| dim < 0) {
                prop_assert_eq!(shape.size_from_dimension(d).unwrap(), -1);
            } else {
                prop_assert!(shape.size_from_dimension(d).unwrap() >= 0);
            }
        }
    }

    #[test]
    fn slice_copies_the_requested_range((dims, start, end) in shape_and_range()) {
        let shape = Shape::<6>::new(&dims);
        let sliced = shape.slice(start, end).unwrap();

        prop_assert_eq!(sliced.rank(), end - start);
        for i in 0..sliced.rank() {
            prop_assert_eq!(sliced[i], shape[start + i]);
        }
        prop_assert_eq!(shape.dims(), dims.as_slice());
    }

    #[test]
    fn slice_from_is_slice_to_rank((dims, start, _end) in shape_and_range()) {
        let shape = Shape::<6>::new(&dims);
        prop_assert_eq!(shape.slice_from(start).unwrap(), shape.slice(start, shape.rank()).unwrap());
    }

    #[test]
    fn past_rank_dimensions_are_rejected(dims in dims_with_unknowns(), extra in 1_usize..4) {
        let shape = Shape::<6>::new(&dims);
        let d = shape.rank() + extra;

        let is_invalid_dimension = |result: Result<i64, ShapeError>| {
            matches!(result, Err(ShapeError::InvalidDimension { dimension, rank, .. }) if dimension == d && rank == dims.len())
        };
        prop_assert!(is_invalid_dimension(shape.size_to_dimension(d)));
        prop_assert!(is_invalid_dimension(shape.size_from_dimension(d)));
    }

    #[test]
    fn bad_slices_are_rejected((dims, start, end) in shape_and_range(), extra in 1_usize..4) {
        let shape = Shape::<6>::new(&dims);
        let rank = shape.rank();

        let past_end = shape.slice(start, rank + extra);
        prop_assert!(
            matches!(past_end, Err(ShapeError::InvalidSlice { .. })),
            "end past rank accepted"
        );

        if start < end {
            prop_assert!(
                matches!(shape.slice(end, start), Err(ShapeError::InvalidSlice { .. })),
                "reversed range accepted"
            );
        }
    }

    #[test]
    fn rendering_follows_brace_grammar(dims in dims_with_unknowns()) {
        let rendered = Shape::<6>::new(&dims).to_string();
        let expected = format!(
            "{{{}}}",
            dims.iter().map(i64::to_string).collect::<Vec<_>>().join(",")
        );
        prop_assert_eq!(rendered, expected);
    }
}

#[test]
fn concrete_scenarios() {
    let shape = Shape::<6>::new(&[2, 3, 4]);
    assert_eq!(shape.size(), Ok(24));
    assert_eq!(shape.to_string(), "{2,3,4}");

    let shape = Shape::<6>::new(&[2, -1, 4]);
    assert_eq!(shape.size(), Ok(-1));
    assert_eq!(shape.size_to_dimension(1), Ok(2));
    assert_eq!(shape.size_from_dimension(1), Ok(-1));

    let shape = Shape::<6>::new(&[]);
    assert_eq!(shape.size(), Ok(1));
    assert_eq!(shape.to_string(), "{}");

    let shape = Shape::<6>::new(&[5, 6, 7]);
    assert_eq!(shape.slice(1, 3).map(|s| s.to_string()), Ok("{6,7}".to_string()));
    assert_eq!(shape.slice(3, 3).and_then(|s| s.size()), Ok(1));
}

#[test]
fn shapes_are_shared_across_threads() {
    let shape = Shape::<6>::new(&[8, 16, 32, 64]);

    std::thread::scope(|scope| {
        for start in 0..=shape.rank() {
            let shape = &shape;
            scope.spawn(move || {
                let sliced = shape.slice_from(start).unwrap();
                assert_eq!(sliced.size(), shape.size_from_dimension(start));
            });
        }
    });

    assert_eq!(shape.dims(), &[8, 16, 32, 64]);
}

#[test]
fn contract_violations_are_traced() {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        let shape = Shape::<6>::new(&[2, 3]);
        assert!(shape.size_to_dimension(3).is_err());
        assert!(shape.slice(2, 1).is_err());
    });
}
