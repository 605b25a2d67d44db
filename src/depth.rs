use std::fmt;

// depth of a leaf in a red-black tree is bounded by 2*log2(n+1),
// anything deeper lands in the last bucket.
const MAX_DEPTH: usize = 256;

/// Depth calculates minimum, maximum, average and percentile of leaf
/// depths in a [`TreeSet`](crate::TreeSet). Every absent child counts as
/// one leaf.
#[derive(Clone)]
pub struct Depth {
    samples: usize,
    min: usize,
    max: usize,
    total: usize,
    depths: [u64; MAX_DEPTH],
}

impl Depth {
    pub(crate) fn new() -> Depth {
        Default::default()
    }

    pub(crate) fn sample(&mut self, depth: usize) {
        if self.samples == 0 || depth < self.min {
            self.min = depth
        }
        if depth > self.max {
            self.max = depth
        }
        self.samples += 1;
        self.total += depth;
        self.depths[depth.min(MAX_DEPTH - 1)] += 1;
    }

    /// Return number of leaves sampled.
    pub fn samples(&self) -> usize {
        self.samples
    }

    /// Return minimum leaf depth.
    pub fn min(&self) -> usize {
        self.min
    }

    /// Return maximum leaf depth.
    pub fn max(&self) -> usize {
        self.max
    }

    /// Return the average leaf depth.
    pub fn mean(&self) -> usize {
        match self.samples {
            0 => 0,
            n => self.total / n,
        }
    }

    /// Return depth as tuple of percentiles, each tuple provides
    /// (percentile, depth). Returned percentiles from 90, 91 .. 99
    pub fn percentiles(&self) -> Vec<(u8, usize)> {
        let mut percentiles: Vec<(u8, usize)> = vec![];
        if self.samples == 0 {
            return percentiles;
        }
        let (mut acc, mut prev_perc) = (0_u64, 90_u8);
        let iter = self.depths.iter().enumerate().filter(|(_, &item)| item > 0);
        for (depth, samples) in iter {
            acc += *samples;
            let perc = ((acc as f64 / self.samples as f64) * 100_f64) as u8;
            if perc >= prev_perc {
                percentiles.push((perc, depth));
                prev_perc = perc;
            }
        }
        percentiles
    }
}

impl Default for Depth {
    fn default() -> Self {
        Depth {
            samples: 0,
            min: 0,
            max: 0,
            total: 0,
            depths: [0; MAX_DEPTH],
        }
    }
}

impl fmt::Debug for Depth {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Depth")
            .field("samples", &self.samples)
            .field("min", &self.min)
            .field("max", &self.max)
            .field("mean", &self.mean())
            .finish()
    }
}

/// Single line summary, useful in logs.
impl fmt::Display for Depth {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "(min, avg, max): {:?}", (self.min, self.mean(), self.max))?;
        for (perc, depth) in self.percentiles().into_iter() {
            write!(f, " p{}={}", perc, depth)?;
        }
        Ok(())
    }
}
