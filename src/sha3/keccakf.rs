use super::state::State;

/// Rounds per Keccak-f[1600] invocation.
pub const ROUNDS: usize = 24;

/// Advances the round-constant LFSR (x^8 + x^6 + x^5 + x^4 + 1 over GF(2)).
///
/// Returns the output bit taken before the shift and the next register value.
#[inline]
pub(crate) const fn lfsr86540(reg: u8) -> (bool, u8) {
    let bit = reg & 0x01 != 0;
    let next = if reg & 0x80 != 0 {
        (reg << 1) ^ 0x71
    } else {
        reg << 1
    };
    (bit, next)
}

/// The iota constants for all 24 rounds, as produced by the LFSR.
pub const fn round_constants() -> [u64; ROUNDS] {
    let mut out = [0u64; ROUNDS];
    let mut reg = 0x01;
    let mut i = 0;
    while i < ROUNDS {
        let mut j = 0;
        while j < 7 {
            let (bit, next) = lfsr86540(reg);
            reg = next;
            if bit {
                out[i] |= 1u64 << ((1 << j) - 1);
            }
            j += 1;
        }
        i += 1;
    }
    out
}

/// Applies one round (theta, rho/pi, chi, iota) in place.
///
/// `lfsr` is the round-constant register on entry; the advanced register is
/// returned for the next round.
pub(crate) fn round(a: &mut State, mut lfsr: u8) -> u8 {
    // theta
    let mut c = [0u64; 5];
    for (x, cx) in c.iter_mut().enumerate() {
        *cx = a.load_lane(x, 0)
            ^ a.load_lane(x, 1)
            ^ a.load_lane(x, 2)
            ^ a.load_lane(x, 3)
            ^ a.load_lane(x, 4);
    }
    for x in 0..5 {
        let d = c[(x + 4) % 5] ^ c[(x + 1) % 5].rotate_left(1);
        for y in 0..5 {
            a.xor_lane(x, y, d);
        }
    }

    // rho and pi: one walk over the 24 lanes other than (0, 0)
    let (mut x, mut y) = (1usize, 0usize);
    let mut current = a.load_lane(x, y);
    for t in 0..24u32 {
        let r = ((t + 1) * (t + 2) / 2) % 64;
        (x, y) = (y, (2 * x + 3 * y) % 5);
        let temp = a.load_lane(x, y);
        a.save_lane(x, y, current.rotate_left(r));
        current = temp;
    }

    // chi, row by row from a snapshot
    for y in 0..5 {
        let mut row = [0u64; 5];
        for (x, lane) in row.iter_mut().enumerate() {
            *lane = a.load_lane(x, y);
        }
        for x in 0..5 {
            a.save_lane(x, y, row[x] ^ (!row[(x + 1) % 5] & row[(x + 2) % 5]));
        }
    }

    // iota
    for j in 0..7 {
        let (bit, next) = lfsr86540(lfsr);
        lfsr = next;
        if bit {
            a.xor_lane(0, 0, 1u64 << ((1 << j) - 1));
        }
    }
    lfsr
}

/// Keccak-f[1600]: 24 rounds over the full state.
pub fn keccak_f1600(a: &mut State) {
    let mut lfsr = 0x01;
    for _ in 0..ROUNDS {
        lfsr = round(a, lfsr);
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    // The round constants as published in FIPS 202.
    #[rustfmt::skip]
    const RC: [u64; 24] = [
        0x0000000000000001, 0x0000000000008082, 0x800000000000808A, 0x8000000080008000,
        0x000000000000808B, 0x0000000080000001, 0x8000000080008081, 0x8000000000008009,
        0x000000000000008A, 0x0000000000000088, 0x0000000080008009, 0x000000008000000A,
        0x000000008000808B, 0x800000000000008B, 0x8000000000008089, 0x8000000000008003,
        0x8000000000008002, 0x8000000000000080, 0x000000000000800A, 0x800000008000000A,
        0x8000000080008081, 0x8000000000008080, 0x0000000080000001, 0x8000000080008008,
    ];

    #[test]
    fn test_lfsr_step() {
        assert_eq!(lfsr86540(0x01), (true, 0x02));
        assert_eq!(lfsr86540(0x02), (false, 0x04));
        assert_eq!(lfsr86540(0x80), (false, 0x71));
        assert_eq!(lfsr86540(0x81), (true, 0x73));
    }

    #[test]
    fn test_round_constants() {
        assert_eq!(round_constants(), RC);
    }

    #[test]
    fn test_single_round_zero_state() {
        // theta, rho/pi and chi keep zero at zero; only iota flips lane (0, 0).
        let mut a = State::new();
        let lfsr = round(&mut a, 0x01);
        let mut expect = [0u64; 25];
        expect[0] = 1;
        assert_eq!(a.to_lanes(), expect);

        // second round constant picked up from the returned register
        let mut b = State::new();
        round(&mut b, lfsr);
        expect[0] = RC[1];
        assert_eq!(b.to_lanes(), expect);
    }

    #[test]
    fn test_f1600_zero_state() {
        #[rustfmt::skip]
        let expect = [
            0xF1258F7940E1DDE7, 0x84D5CCF933C0478A, 0xD598261EA65AA9EE, 0xBD1547306F80494D, 0x8B284E056253D057,
            0xFF97A42D7F8E6FD4, 0x90FEE5A0A44647C4, 0x8C5BDA0CD6192E76, 0xAD30A6F71B19059C, 0x30935AB7D08FFC64,
            0xEB5AA93F2317D635, 0xA9A6E6260D712103, 0x81A57C16DBCF555F, 0x43B831CD0347C826, 0x01F22F1A11A5569F,
            0x05E5635A21D9AE61, 0x64BEFEF28CC970F2, 0x613670957BC46611, 0xB87C5A554FD00ECB, 0x8C3EE88A1CCF32C8,
            0x940C7922AE3A2614, 0x1841F924A2C509E4, 0x16F53526E70465C2, 0x75F644E97F30A13B, 0xEAF1FF7B5CECA249];

        let mut a = State::new();
        keccak_f1600(&mut a);
        assert_eq!(a.to_lanes(), expect);
    }

    #[test]
    fn test_f1600() {
        #[rustfmt::skip]
        let a = [
            0xcd25c9aa9c22d1e6, 0x5d2815e979da73fa, 0x1e746c8cfd54a79a, 0xf849ba2f516492d3, 0x7b6ef1e35fffa9bf,
            0xff12997dbf1b6c66, 0xdb498a1113513789, 0x94689cca0c63613a, 0xa084aff53c74f579, 0x42996c6cf5f52f11,
            0x15d8acef879b9c81, 0x44a325fa72215e5f, 0x7bcdb855a6a2ef26, 0x9189e554c243651b, 0x38c6b646d0499345,
            0x5dd24b659828953a, 0x2a36e7979983d093, 0x6b8b06d64b50acb1, 0x0ca1c056f544b689, 0xb82360c9f02ccb50,
            0x2c2c187e8f8dbebc, 0x8f6ea3e166241d5f, 0xec2f5316c8e1e7f1, 0x04238fa15328bd6c, 0x540846b170a6caab];

        #[rustfmt::skip]
        let expect = [
            0xd1a01f52115bd04e, 0x1852aaa3595f4965, 0x6711075ed42c8d51, 0xe5179d1e6860aaed, 0x7289039971e84c20,
            0x1b1837777868cc6a, 0xed130bf6fad9cee6, 0xb294bb3610a842b7, 0x2c5ce0512f0b41b1, 0xb4c2c2bd74d2f083,
            0xdd705016436e7aa6, 0xbf56bd811bd7a163, 0xdf0a3f5951f76147, 0xdbe4447f6a0fde54, 0xcd633fe862fd91ad,
            0xb632d3bc4aba1f1f, 0x570cb1205d6ece1f, 0x4dfcbbb8e1365098, 0x0ac0bc60706647ff, 0x448ad600736fe26d,
            0x54dad331bd86439e, 0xd0adec8d1e445830, 0xa5ec13798e8ebefc, 0xdabe5557d7a810d6, 0x0bf35b673accb38b];

        let mut s = State::from_lanes(&a);
        keccak_f1600(&mut s);

        assert_eq!(s.to_lanes(), expect);
    }
}
