//! Exact combinatorial counts used by the unique-item distribution.
//!
//! All values are `BigUint`: S(x, j) and n^m outgrow `u64` for modest inputs.

use num::{BigUint, One, Zero};

use crate::error::{Result, SummonError};

/// P(x, y) = x(x-1)...(x-y+1), the number of ordered picks of y distinct items out of x.
/// The empty product P(x, 0) is 1.
pub fn falling_factorial(x: u32, y: u32) -> Result<BigUint> {
    if x == 0 {
        return Err(SummonError::InvalidArgument(
            "falling factorial needs a population of at least 1".to_string(),
        ));
    }
    if y > x {
        return Err(SummonError::InvalidArgument(format!(
            "cannot pick {y} distinct items out of {x}"
        )));
    }

    Ok((0..y).fold(BigUint::one(), |acc, i| acc * (x - i)))
}

/// Row x of the Stirling triangle of the second kind: `row[j] = S(x, j)` for 0 <= j <= x.
///
/// S(0, 0) = 1, so `stirling_row(0)` is `[1]`.
pub fn stirling_row(x: u32) -> Vec<BigUint> {
    let len = x as usize + 1;
    let mut row = vec![BigUint::zero(); len];
    row[0] = BigUint::one();

    // Rolling row: walking j downwards keeps row[j - 1] at its previous-row value.
    for i in 1..len {
        for j in (1..=i).rev() {
            let joined = &row[j] * j as u32;
            row[j] = &row[j - 1] + joined;
        }
        row[0] = BigUint::zero();
    }

    row
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(v: u64) -> BigUint {
        BigUint::from(v)
    }

    #[test]
    fn test_falling_factorial_known_values() {
        assert_eq!(falling_factorial(5, 3).unwrap(), big(60));
        assert_eq!(falling_factorial(5, 1).unwrap(), big(5));
        assert_eq!(falling_factorial(5, 5).unwrap(), big(120));
    }

    #[test]
    fn test_falling_factorial_empty_product() {
        assert_eq!(falling_factorial(1, 0).unwrap(), big(1));
        assert_eq!(falling_factorial(40, 0).unwrap(), big(1));
    }

    #[test]
    fn test_falling_factorial_rejects_bad_arguments() {
        assert!(matches!(
            falling_factorial(3, 4),
            Err(SummonError::InvalidArgument(_))
        ));
        assert!(matches!(
            falling_factorial(0, 0),
            Err(SummonError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_falling_factorial_beyond_u64() {
        // 30! > u64::MAX
        let f = falling_factorial(30, 30).unwrap();
        let expected: BigUint = "265252859812191058636308480000000".parse().unwrap();
        assert_eq!(f, expected);
    }

    #[test]
    fn test_stirling_zero() {
        assert_eq!(stirling_row(0), vec![big(1)]);
    }

    #[test]
    fn test_stirling_one() {
        assert_eq!(stirling_row(1), vec![big(0), big(1)]);
    }

    #[test]
    fn test_stirling_four() {
        let row = stirling_row(4);
        assert_eq!(row, vec![big(0), big(1), big(7), big(6), big(1)]);
        assert_eq!(row[2], big(7));
    }

    #[test]
    fn test_stirling_row_sums_are_bell_numbers() {
        let bell = [1u64, 1, 2, 5, 15, 52, 203, 877, 4140, 21147];
        for (x, &expected) in bell.iter().enumerate() {
            let sum: BigUint = stirling_row(x as u32).iter().sum();
            assert_eq!(sum, big(expected), "B({x})");
        }
    }

    #[test]
    fn test_stirling_edges() {
        for x in 1..=30u32 {
            let row = stirling_row(x);
            assert_eq!(row.len(), x as usize + 1);
            assert!(row[0].is_zero());
            assert_eq!(row[1], big(1), "S({x}, 1)");
            assert_eq!(row[x as usize], big(1), "S({x}, {x})");
        }
    }

    #[test]
    fn test_stirling_two_closed_form() {
        // S(x, 2) = 2^(x-1) - 1
        let row = stirling_row(70);
        let expected = (BigUint::one() << 69usize) - BigUint::one();
        assert_eq!(row[2], expected);
    }
}
