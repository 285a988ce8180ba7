/// Size of the Keccak-f[1600] state in bytes.
pub const STATE_BYTES: usize = 200;

/// Number of 64-bit lanes in the state.
pub const LANES: usize = 25;

/// The 1600-bit permutation state, viewed as a 5x5 grid of little-endian
/// 64-bit lanes. Lane (x, y) lives at byte offset `(x + 5y) * 8`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State([u8; STATE_BYTES]);

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

#[inline]
fn lane_offset(x: usize, y: usize) -> usize {
    debug_assert!(x < 5 && y < 5, "lane ({x}, {y}) outside the 5x5 grid");
    (x + 5 * y) << 3
}

impl State {
    pub const fn new() -> Self {
        State([0; STATE_BYTES])
    }

    pub fn clear(&mut self) {
        self.0.fill(0);
    }

    #[inline]
    pub fn load_lane(&self, x: usize, y: usize) -> u64 {
        let start = lane_offset(x, y);
        let mut lane = [0u8; 8];
        lane.copy_from_slice(&self.0[start..start + 8]);
        u64::from_le_bytes(lane)
    }

    #[inline]
    pub fn save_lane(&mut self, x: usize, y: usize, lane: u64) {
        let start = lane_offset(x, y);
        self.0[start..start + 8].copy_from_slice(&lane.to_le_bytes());
    }

    #[inline]
    pub fn xor_lane(&mut self, x: usize, y: usize, lane: u64) {
        let start = lane_offset(x, y);
        for (d, s) in self.0[start..start + 8].iter_mut().zip(lane.to_le_bytes()) {
            *d ^= s;
        }
    }

    #[inline]
    pub(crate) fn xor_byte(&mut self, i: usize, b: u8) {
        self.0[i] ^= b;
    }

    #[inline]
    pub(crate) fn xor_bytes(&mut self, offset: usize, p: &[u8]) {
        for (d, s) in self.0[offset..offset + p.len()].iter_mut().zip(p) {
            *d ^= *s;
        }
    }

    pub fn as_bytes(&self) -> &[u8; STATE_BYTES] {
        &self.0
    }

    /// Builds a state from lanes in `x + 5y` order.
    pub fn from_lanes(lanes: &[u64; LANES]) -> Self {
        let mut s = State::new();
        for (i, lane) in lanes.iter().enumerate() {
            s.save_lane(i % 5, i / 5, *lane);
        }
        s
    }

    pub fn to_lanes(&self) -> [u64; LANES] {
        let mut lanes = [0u64; LANES];
        for (i, lane) in lanes.iter_mut().enumerate() {
            *lane = self.load_lane(i % 5, i / 5);
        }
        lanes
    }
}
