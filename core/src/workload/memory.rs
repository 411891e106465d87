use std::hint::black_box;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryOutcome {
    pub elements: u64,
    pub sum: u64,
}

/// Allocates `count` integers, writes `i` into slot `i`, then sums them back
/// in order. The sum wraps on overflow.
pub fn run(count: u64) -> MemoryOutcome {
    let mut buffer = vec![0u64; count as usize];
    for (i, slot) in buffer.iter_mut().enumerate() {
        *slot = i as u64;
    }
    let buffer = black_box(buffer);

    let mut sum = 0u64;
    let mut elements = 0u64;
    for &value in &buffer {
        sum = sum.wrapping_add(value);
        elements += 1;
    }
    MemoryOutcome {
        elements,
        sum: black_box(sum),
    }
}

/// Closed form of the sum produced by [`run`].
pub fn expected_sum(count: u64) -> u64 {
    if count == 0 {
        return 0;
    }
    let count = u128::from(count);
    (count * (count - 1) / 2) as u64
}
