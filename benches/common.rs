// to be included by benches
use bigint::BigInt;

/// Deterministic set of pseudo-random values of the given bit width
pub fn make_bigints(bits: usize, count: usize, seed: u64) -> Vec<BigInt> {
    let mut rng = oorandom::Rand32::new(seed);
    (0..count)
        .map(|_| {
            let mut value = BigInt::zero();
            for _ in 0..(bits / 32) {
                value = (value << 32) + BigInt::from(rng.rand_u32());
            }
            value
        })
        .collect()
}

/// Iterate over vector in random order
pub struct RandomIterator<'a, T> {
    v: &'a Vec<T>,
    rng: oorandom::Rand32,
}

impl<'a, T> RandomIterator<'a, T> {
    pub fn new(v: &'a Vec<T>) -> Self {
        let seed = v.as_ptr() as u64;
        Self {
            v: v,
            rng: oorandom::Rand32::new(seed),
        }
    }

    pub fn next(&mut self) -> &'a T {
        let idx = self.rng.rand_u32() as usize % self.v.len();
        &self.v[idx]
    }
}
