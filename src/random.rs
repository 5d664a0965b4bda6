use chacha20::ChaCha20;
use chacha20::cipher::{KeyIvInit, StreamCipher};
use rand::Rng;
use zeroize::Zeroizing;

const BUFFER_LEN: usize = 512;

/// Source of uniform choices consumed by the engine.
pub trait RandomSource {
    /// Uniform integer in `0..bound`. Returns 0 when `bound` is 0.
    fn below(&mut self, bound: usize) -> usize;

    fn coin(&mut self) -> bool {
        self.below(2) == 1
    }

    /// Uniform integer in `lo..=hi`.
    fn range_inclusive(&mut self, lo: usize, hi: usize) -> usize {
        if hi <= lo {
            return lo;
        }
        lo + self.below(hi - lo + 1)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn below(&mut self, bound: usize) -> usize {
        (**self).below(bound)
    }
}

/// Operating-system seeded, thread-local generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn below(&mut self, bound: usize) -> usize {
        if bound == 0 {
            return 0;
        }
        rand::thread_rng().gen_range(0..bound)
    }
}

/// Deterministic source over a ChaCha20 keystream.
pub struct KeystreamRandom {
    cipher: ChaCha20,
    buffer: Zeroizing<Vec<u8>>,
    pos: usize,
}

impl KeystreamRandom {
    pub fn new(key: &[u8; 32]) -> Self {
        let mut cipher = ChaCha20::new(key.into(), &[0u8; 12].into());
        let mut buffer = Zeroizing::new(vec![0u8; BUFFER_LEN]);
        cipher.apply_keystream(&mut buffer);
        Self {
            cipher,
            buffer,
            pos: 0,
        }
    }

    fn next_u64(&mut self) -> u64 {
        if self.pos + 8 > self.buffer.len() {
            self.buffer.iter_mut().for_each(|b| *b = 0);
            self.cipher.apply_keystream(&mut self.buffer);
            self.pos = 0;
        }

        let mut word = [0u8; 8];
        word.copy_from_slice(&self.buffer[self.pos..self.pos + 8]);
        self.pos += 8;
        u64::from_le_bytes(word)
    }
}

impl RandomSource for KeystreamRandom {
    fn below(&mut self, bound: usize) -> usize {
        if bound == 0 {
            return 0;
        }

        let bound = bound as u64;
        let span = 1u128 << 64;
        let rejection_threshold = span - (span % bound as u128);

        loop {
            let value = self.next_u64();
            if (value as u128) < rejection_threshold {
                return (value % bound) as usize;
            }
        }
    }
}

impl std::fmt::Debug for KeystreamRandom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeystreamRandom")
            .field("pos", &self.pos)
            .finish_non_exhaustive()
    }
}

/// Replays a fixed script of draws, each reduced modulo the requested bound.
#[cfg(test)]
pub(crate) struct ScriptedRandom {
    script: Vec<usize>,
    next: usize,
}

#[cfg(test)]
impl ScriptedRandom {
    pub(crate) fn new(script: Vec<usize>) -> Self {
        Self { script, next: 0 }
    }
}

#[cfg(test)]
impl RandomSource for ScriptedRandom {
    fn below(&mut self, bound: usize) -> usize {
        if bound == 0 {
            return 0;
        }
        let value = self.script[self.next % self.script.len()];
        self.next += 1;
        value % bound
    }
}
