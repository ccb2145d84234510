#![doc = include_str!("../README.md")]
mod slot;
mod table;
pub mod ffi;
pub mod parser;
pub mod stream;

pub use slot::*;
pub use stream::Crc16Stream;
pub use table::{CRC16_TABLE, POLYNOMIAL};

/// Redis Cluster CRC16 Algorithm (XMODEM)
///
/// Uses 0x1021 polynomial, initial value 0, no final xor.
/// `crc16(b"123456789") == 0x31C3`
pub fn crc16(data: &[u8]) -> u16 {
    crc16_update(0, data)
}

/// Folds `data` into an existing `crc` register
pub fn crc16_update(crc: u16, data: &[u8]) -> u16 {
    data.iter().fold(crc, |crc, &byte| {
        let idx = ((crc >> 8) ^ byte as u16) as usize;
        CRC16_TABLE[idx] ^ (crc << 8)
    })
}

/// Same checksum as [`crc16`] computed by plain polynomial division, one bit at a time
pub fn crc16_bitwise(data: &[u8]) -> u16 {
    let mut crc: u16 = 0;
    for &byte in data {
        crc ^= (byte as u16) << 8;
        for _bit in 0..8 {
            let carry = crc & 0x8000;
            crc <<= 1;
            if carry != 0 {
                crc ^= POLYNOMIAL;
            }
        }
    }
    crc
}

/// Running CRC16 over data fed in pieces
///
/// ```
/// use redis_slot::{crc16, Crc16};
///
/// let mut digest = Crc16::new();
/// digest.update(b"1234");
/// digest.update(b"56789");
/// assert_eq!(digest.value(), crc16(b"123456789"));
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Crc16 {
    register: u16,
}

impl Crc16 {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, data: &[u8]) {
        self.register = crc16_update(self.register, data);
    }

    /// Checksum of everything fed so far
    pub fn value(&self) -> u16 {
        self.register
    }

    pub fn reset(&mut self) {
        self.register = 0;
    }
}

impl std::io::Write for Crc16 {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crc16() {
        assert_eq!(crc16(b""), 0);
        assert_eq!(crc16(b"123456789"), 0x31C3);
        assert_eq!(crc16_bitwise(b"123456789"), 0x31C3);
    }

    #[test]
    fn test_crc16_binary() {
        let input = hex::decode("00FF10217F80DEADBEEF").unwrap();
        assert_eq!(crc16(&input), crc16_bitwise(&input));
    }

    #[test]
    fn table_agrees_with_bitwise() {
        let mut corpus: Vec<Vec<u8>> = vec![
            b"".to_vec(),
            b"a".to_vec(),
            b"foo".to_vec(),
            b"user:{1001}:profile".to_vec(),
            vec![0xFF; 64],
        ];
        corpus.extend((0..=255u8).map(|b| vec![b]));
        corpus.push((0..=255u8).collect());
        corpus.push((0..=255u8).rev().collect());

        for input in &corpus {
            assert_eq!(crc16(input), crc16_bitwise(input), "input {:02x?}", input);
        }
    }

    #[test]
    fn order_sensitive() {
        let forward = b"abc";
        let reversed = b"cba";
        assert_ne!(crc16(forward), crc16(reversed));
    }

    #[test]
    fn incremental_matches_one_shot() {
        let data = b"The quick brown fox jumps over the lazy dog";
        let expected = crc16(data);
        for split in 0..=data.len() {
            let mut digest = Crc16::new();
            digest.update(&data[..split]);
            digest.update(&data[split..]);
            assert_eq!(digest.value(), expected);
        }
    }

    #[test]
    fn digest_as_writer() {
        use std::io::Write;

        let mut digest = Crc16::new();
        write!(digest, "{}{}", "12345", 6789).unwrap();
        assert_eq!(digest.value(), 0x31C3);

        digest.reset();
        assert_eq!(digest.value(), 0);
    }
}
