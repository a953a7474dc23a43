//! Synthetic balance-scale records labeled by comparing torques.

use crate::common_types::{Label, Record};
use rand::Rng;
use std::cmp::Ordering;

/// Smallest attribute value drawn by the generator.
pub const MIN_ATTRIBUTE_VALUE: i64 = 1;
/// Largest attribute value drawn by the generator.
pub const MAX_ATTRIBUTE_VALUE: i64 = 5;

/// LEFT when the left torque is larger, RIGHT when it is smaller, BALANCED otherwise.
/// Torques are computed in `i128`, so any pair of `i64` factors fits.
pub fn tipping_label(left_weight: i64, left_distance: i64, right_weight: i64, right_distance: i64) -> Label {
    let left_torque = i128::from(left_weight) * i128::from(left_distance);
    let right_torque = i128::from(right_weight) * i128::from(right_distance);
    match left_torque.cmp(&right_torque) {
        Ordering::Greater => Label::Left,
        Ordering::Less => Label::Right,
        Ordering::Equal => Label::Balanced,
    }
}

pub fn generate_record<R: Rng + ?Sized>(rng: &mut R) -> Record {
    let mut draw = || rng.gen_range(MIN_ATTRIBUTE_VALUE..=MAX_ATTRIBUTE_VALUE);
    let (lw, ld, rw, rd) = (draw(), draw(), draw(), draw());
    Record::new(tipping_label(lw, ld, rw, rd), lw, ld, rw, rd)
}

pub fn generate_records<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<Record> {
    (0..count).map(|_| generate_record(rng)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common_types::Attribute;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_tipping_label() {
        assert_eq!(tipping_label(5, 5, 1, 1), Label::Left);
        assert_eq!(tipping_label(1, 1, 5, 5), Label::Right);
        assert_eq!(tipping_label(2, 3, 3, 2), Label::Balanced);
    }

    #[test]
    fn test_tipping_label_large_values() {
        assert_eq!(tipping_label(i64::MAX, 2, i64::MAX, 1), Label::Left);
        assert_eq!(tipping_label(i64::MIN, i64::MIN, i64::MAX, i64::MAX), Label::Left);
        assert_eq!(tipping_label(i64::MAX, i64::MAX, i64::MAX, i64::MAX), Label::Balanced);
        assert_eq!(tipping_label(-3, 4, 2, 1), Label::Right);
    }

    #[test]
    fn test_generated_records_are_consistent() {
        let mut rng = StdRng::seed_from_u64(42);
        let records = generate_records(&mut rng, 500);
        assert_eq!(records.len(), 500);
        for r in &records {
            for attribute in Attribute::ALL {
                let v = attribute.project(r);
                assert!((MIN_ATTRIBUTE_VALUE..=MAX_ATTRIBUTE_VALUE).contains(&v));
            }
            let expected = tipping_label(r.left_weight(), r.left_distance(), r.right_weight(), r.right_distance());
            assert_eq!(r.label(), expected);
        }
    }

    #[test]
    fn test_same_seed_same_records() {
        let a = generate_records(&mut StdRng::seed_from_u64(9), 20);
        let b = generate_records(&mut StdRng::seed_from_u64(9), 20);
        for (x, y) in a.iter().zip(b.iter()) {
            assert!(x.same_label(y));
            assert_eq!(x.left_weight(), y.left_weight());
            assert_eq!(x.right_distance(), y.right_distance());
        }
    }
}
