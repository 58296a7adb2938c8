//! Compute the encoded length of varints.
//!
//! A varint stores 7 bits of its value in each byte, so the encoded length
//! of a value `x` is `ceil(bits(x) / 7)`, with a minimum of one byte. The
//! `MAX_VAL_*` constants are the largest values which fit in a given number
//! of bytes.

/// Maximum number of bytes in an encoded varint with a 64-bit value.
///
/// Nine "full" bytes provide 63 value bits, plus one bit from the 10th byte.
pub const MAX_LEN_64: usize = 10;

/// Largest value that encodes to 1 byte.
pub const MAX_VAL_1: u64 = (1 << 7) - 1;
/// Largest value that encodes to 2 bytes.
pub const MAX_VAL_2: u64 = (1 << 14) - 1;
/// Largest value that encodes to 3 bytes.
pub const MAX_VAL_3: u64 = (1 << 21) - 1;
/// Largest value that encodes to 4 bytes.
pub const MAX_VAL_4: u64 = (1 << 28) - 1;
/// Largest value that encodes to 5 bytes.
pub const MAX_VAL_5: u64 = (1 << 35) - 1;
/// Largest value that encodes to 6 bytes.
pub const MAX_VAL_6: u64 = (1 << 42) - 1;
/// Largest value that encodes to 7 bytes.
pub const MAX_VAL_7: u64 = (1 << 49) - 1;
/// Largest value that encodes to 8 bytes.
pub const MAX_VAL_8: u64 = (1 << 56) - 1;
/// Largest value that encodes to 9 bytes.
pub const MAX_VAL_9: u64 = (1 << 63) - 1;

/// Return the number of bytes that the varint encoding of `x` occupies.
///
/// The result is in the range `1..=10`.
///
/// This is implemented as a chain of comparisons against the size class
/// boundaries. Small values, which are the most common in practice, exit
/// after the first comparison.
#[inline]
pub fn varint_size(x: u64) -> i32 {
    if x <= MAX_VAL_1 {
        1
    } else if x <= MAX_VAL_2 {
        2
    } else if x <= MAX_VAL_3 {
        3
    } else if x <= MAX_VAL_4 {
        4
    } else if x <= MAX_VAL_5 {
        5
    } else if x <= MAX_VAL_6 {
        6
    } else if x <= MAX_VAL_7 {
        7
    } else if x <= MAX_VAL_8 {
        8
    } else if x <= MAX_VAL_9 {
        9
    } else {
        MAX_LEN_64 as i32
    }
}

/// Variant of [`varint_size`] which shifts out 7 bits at a time until the
/// value is exhausted.
///
/// This must return the same result as `varint_size` for every input. It is
/// kept to compare the two approaches in benchmarks.
#[cfg(test)]
pub(crate) fn varint_size_loop(mut x: u64) -> i32 {
    let mut n = 0;
    loop {
        n += 1;
        x >>= 7;
        if x == 0 {
            break n;
        }
    }
}

/// Largest value in each size class, indexed by `size - 1`.
#[cfg(test)]
pub(crate) const SIZE_CLASS_MAX: [u64; 10] = [
    MAX_VAL_1,
    MAX_VAL_2,
    MAX_VAL_3,
    MAX_VAL_4,
    MAX_VAL_5,
    MAX_VAL_6,
    MAX_VAL_7,
    MAX_VAL_8,
    MAX_VAL_9,
    u64::MAX,
];

#[cfg(test)]
mod tests {
    use pbvarint_bench::run_bench;
    use pbvarint_testing::TestCases;

    use super::{varint_size, varint_size_loop, SIZE_CLASS_MAX};
    use crate::varint::encode_varint;

    #[test]
    fn test_varint_size() {
        #[derive(Debug)]
        struct Case {
            value: u64,
            expected: i32,
        }

        let cases = [
            Case {
                value: 0,
                expected: 1,
            },
            Case {
                value: 127,
                expected: 1,
            },
            Case {
                value: 128,
                expected: 2,
            },
            Case {
                value: 300,
                expected: 2,
            },
            Case {
                value: 16384,
                expected: 3,
            },
            Case {
                value: 1 << 63,
                expected: 10,
            },
            Case {
                value: u64::MAX,
                expected: 10,
            },
        ];

        cases.test_each(|&Case { value, expected }| {
            assert_eq!(varint_size(value), expected);
            assert_eq!(varint_size_loop(value), expected);
        });
    }

    #[test]
    fn test_varint_size_boundaries() {
        for (i, max_val) in SIZE_CLASS_MAX.into_iter().enumerate() {
            let size = i as i32 + 1;

            // Largest and second largest values in this class.
            assert_eq!(varint_size(max_val), size, "max value {}", max_val);
            assert_eq!(varint_size(max_val - 1), size, "max value - 1 {}", max_val);

            // Smallest value in the next class.
            if size < 10 {
                assert_eq!(varint_size(max_val + 1), size + 1);
            }
        }
    }

    #[test]
    fn test_size_strategies_agree() {
        let values = SIZE_CLASS_MAX
            .into_iter()
            .flat_map(|v| [v - 1, v, v.wrapping_add(1)])
            .chain([0, 1, 2]);

        for value in values {
            assert_eq!(
                varint_size(value),
                varint_size_loop(value),
                "value {}",
                value
            );
        }
    }

    #[test]
    fn test_varint_size_matches_encoded_len() {
        for max_val in SIZE_CLASS_MAX {
            for value in [max_val - 1, max_val] {
                assert_eq!(varint_size(value) as usize, encode_varint(value).len());
            }
        }
    }

    // Run with `cargo test --release bench_varint_size -- --nocapture --ignored`
    #[test]
    #[ignore]
    fn bench_varint_size() {
        let trials = pbvarint_bench::trials(100);
        let iters = 100_000;

        for (i, max_val) in SIZE_CLASS_MAX.into_iter().enumerate() {
            let size = i + 1;
            let mut total = 0i64;

            run_bench(trials, format!("flat size {}", size), || {
                for _ in 0..iters {
                    total += varint_size(std::hint::black_box(max_val)) as i64;
                }
            });
            run_bench(trials, format!("loop size {}", size), || {
                for _ in 0..iters {
                    total += varint_size_loop(std::hint::black_box(max_val)) as i64;
                }
            });

            assert!(total > 0);
        }
    }
}
