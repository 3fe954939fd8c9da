//! Algebraic properties of interval sets, checked against a plain
//! `BTreeSet` model over a small universe.

use std::collections::BTreeSet;

use proptest::prelude::*;
use tokenset_intervals::{Interval, IntervalSet};

const UNIVERSE: std::ops::Range<isize> = -5..60;

#[derive(Debug, Clone)]
enum Op {
    AddOne(isize),
    AddRange(isize, isize),
    RemoveOne(isize),
    RemoveRange(isize, isize),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0isize..50).prop_map(Op::AddOne),
        (0isize..50, 0isize..12).prop_map(|(start, len)| Op::AddRange(start, start + len)),
        (0isize..50).prop_map(Op::RemoveOne),
        (0isize..50, 0isize..12).prop_map(|(start, len)| Op::RemoveRange(start, start + len)),
    ]
}

fn additions() -> impl Strategy<Value = Vec<(isize, isize)>> {
    prop::collection::vec((0isize..50, 1isize..12), 0..20)
        .prop_map(|pairs| pairs.into_iter().map(|(s, len)| (s, s + len)).collect())
}

fn build(ranges: &[(isize, isize)]) -> IntervalSet {
    let mut set = IntervalSet::new();
    for &(l, h) in ranges {
        set.add_range(l, h).unwrap();
    }
    set
}

fn assert_invariants(set: &IntervalSet) -> Result<(), TestCaseError> {
    for interval in set.intervals() {
        prop_assert!(interval.start < interval.stop, "degenerate {interval:?}");
    }
    for pair in set.intervals().windows(2) {
        prop_assert!(
            pair[0].stop < pair[1].start,
            "unsorted, overlapping or touching: {:?} {:?}",
            pair[0],
            pair[1]
        );
    }
    Ok(())
}

proptest! {
    #[test]
    fn proptest_membership_matches_model(ops in prop::collection::vec(op(), 0..40)) {
        let mut set = IntervalSet::new();
        let mut model = BTreeSet::new();

        for op in ops {
            match op {
                Op::AddOne(v) => {
                    set.add_one(v).unwrap();
                    model.insert(v);
                }
                Op::AddRange(l, h) => {
                    set.add_range(l, h).unwrap();
                    model.extend(l..h);
                }
                Op::RemoveOne(v) => {
                    set.remove_one(v).unwrap();
                    model.remove(&v);
                }
                Op::RemoveRange(l, h) => {
                    set.remove_range(Interval::new(l, h)).unwrap();
                    for v in l..h {
                        model.remove(&v);
                    }
                }
            }
            assert_invariants(&set)?;
        }

        for x in UNIVERSE {
            prop_assert_eq!(set.contains(x), model.contains(&x), "x = {}", x);
        }
    }

    #[test]
    fn proptest_union_is_commutative(a in additions(), b in additions()) {
        let mut ab = build(&a);
        ab.add_set(&build(&b)).unwrap();
        let mut ba = build(&b);
        ba.add_set(&build(&a)).unwrap();

        assert_invariants(&ab)?;
        for x in UNIVERSE {
            prop_assert_eq!(ab.contains(x), ba.contains(x), "x = {}", x);
        }
    }

    #[test]
    fn proptest_complement_law(ranges in additions(), lo in 0isize..20, width in 0isize..40) {
        let hi = lo + width;
        let set = build(&ranges);
        let complement = set.complement(lo, hi);

        assert_invariants(&complement)?;
        for x in lo..=hi {
            prop_assert!(set.contains(x) != complement.contains(x), "x = {}", x);
        }
        prop_assert!(!complement.contains(lo - 1));
        prop_assert!(!complement.contains(hi + 1));
    }

    #[test]
    fn proptest_adding_covered_range_is_idempotent(
        ranges in additions().prop_filter("non-empty", |r| !r.is_empty()),
        pick in any::<prop::sample::Index>(),
        shrink in 0isize..5,
    ) {
        let mut set = build(&ranges);
        let covered = set.intervals()[pick.index(set.intervals().len())];
        let before = set.intervals().to_vec();

        let start = (covered.start + shrink).min(covered.stop - 1);
        set.add_range(start, covered.stop).unwrap();
        prop_assert_eq!(set.intervals(), before.as_slice());
    }

    #[test]
    fn proptest_intersection_matches_model(a in additions(), b in additions()) {
        let (sa, sb) = (build(&a), build(&b));
        let both = sa.intersection(&sb);

        assert_invariants(&both)?;
        for x in UNIVERSE {
            prop_assert_eq!(both.contains(x), sa.contains(x) && sb.contains(x), "x = {}", x);
        }
    }
}
