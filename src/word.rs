use std::io::Write;

pub const WORD_SIZE: usize = 4;

/// 入力順の 4 バイト。
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Word(pub [u8; WORD_SIZE]);

impl Word {
    /// 出力順 (上位バイトが先)。
    pub fn reversed(&self) -> [u8; WORD_SIZE] {
        let mut bytes = self.0;
        bytes.reverse();
        bytes
    }

    pub fn to_u32(&self) -> u32 {
        u32::from_le_bytes(self.0)
    }

    pub fn write_hex(&self, mut out: impl Write) -> std::io::Result<()> {
        let [b0, b1, b2, b3] = self.reversed();
        writeln!(out, "{:02x}{:02x}{:02x}{:02x}", b0, b1, b2, b3)
    }

    /// 2 進 32 桁。各バイトは MSB から。
    pub fn write_binary(&self, mut out: impl Write) -> std::io::Result<()> {
        let mut line = [b'0'; 8 * WORD_SIZE + 1];
        for (i, byte) in self.reversed().iter().enumerate() {
            for bit in 0..8 {
                if byte & (0x80 >> bit) != 0 {
                    line[8 * i + bit] = b'1';
                }
            }
        }
        line[8 * WORD_SIZE] = b'\n';
        out.write_all(&line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex(word: Word) -> String {
        let mut out = Vec::new();
        word.write_hex(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn binary(word: Word) -> String {
        let mut out = Vec::new();
        word.write_binary(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn hex_reverses_bytes() {
        assert_eq!(hex(Word([0x12, 0x34, 0x56, 0x78])), "78563412\n");
        assert_eq!(hex(Word([0xAB, 0x00, 0x0C, 0xFF])), "ff0c00ab\n");
    }

    #[test]
    fn binary_is_msb_first() {
        assert_eq!(
            binary(Word([0x01, 0x00, 0x00, 0x00])),
            "00000000000000000000000000000001\n"
        );
        assert_eq!(
            binary(Word([0x00, 0x00, 0x00, 0x80])),
            "10000000000000000000000000000000\n"
        );
        assert_eq!(
            binary(Word([0x12, 0x34, 0x56, 0x78])),
            "01111000010101100011010000010010\n"
        );
    }

    #[test]
    fn value_is_little_endian() {
        assert_eq!(Word([0x02, 0x00, 0x00, 0x00]).to_u32(), 2);
        assert_eq!(Word([0x12, 0x34, 0x56, 0x78]).to_u32(), 0x7856_3412);
    }
}
