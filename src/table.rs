/// CCITT polynomial (x^16 + x^12 + x^5 + 1), normal MSB-first form
pub const POLYNOMIAL: u16 = 0x1021;

/// Partial remainders indexed by `(register >> 8) ^ byte`
///
/// Built at compile time, so there is no initialization to race on.
pub const CRC16_TABLE: [u16; 256] = generate_table();

const fn generate_table() -> [u16; 256] {
    let mut table = [0u16; 256];
    let mut i = 0usize;

    while i < 256 {
        // Byte aligned into the top half of the register
        let mut crc = (i as u16) << 8;
        let mut bit = 0;
        while bit < 8 {
            if crc & 0x8000 != 0 {
                crc = (crc << 1) ^ POLYNOMIAL;
            } else {
                crc <<= 1;
            }
            bit += 1;
        }
        table[i] = crc;
        i += 1;
    }

    table
}
