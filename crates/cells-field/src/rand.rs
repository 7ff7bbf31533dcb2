//! Lightweight xorshift32 PRNG — no external crate needed

pub struct FieldRng {
    state: u32,
}

impl FieldRng {
    pub fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    /// Returns an integer in [min, max], inclusive on both ends
    pub fn range_i32(&mut self, min: i32, max: i32) -> i32 {
        debug_assert!(min <= max);
        let span = (max as i64 - min as i64 + 1) as u32;
        min.wrapping_add((self.next_u32() % span) as i32)
    }
}
