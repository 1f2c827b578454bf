use std::io::{self, Read, Write};
use std::str::FromStr;

use eyre::WrapErr as _;
use log::trace;

use crate::{Word, COE_HEADER, WORD_SIZE};

/// 1 行 1 語の文字表現。
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Encoding {
    /// 小文字 16 進 8 桁 (COE)
    Hex,
    /// 2 進 32 桁 (MIF)
    Binary,
}

impl Encoding {
    fn write_word(self, word: &Word, out: impl Write) -> io::Result<()> {
        match self {
            Self::Hex => word.write_hex(out),
            Self::Binary => word.write_binary(out),
        }
    }
}

impl FromStr for Encoding {
    type Err = eyre::Report;

    fn from_str(s: &str) -> eyre::Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "hex" | "coe" => Ok(Self::Hex),
            "binary" | "bin" | "mif" => Ok(Self::Binary),
            _ => eyre::bail!("unknown encoding: {}", s),
        }
    }
}

impl std::fmt::Display for Encoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Hex => "hex",
            Self::Binary => "binary",
        })
    }
}

/// 末尾の部分語で足りないバイトの埋め方。
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Padding {
    /// 読み込みごとにバッファをこの値で埋める。
    Fill(u8),
    /// 直前の語の残りをそのまま使う。
    Stale,
}

impl Default for Padding {
    fn default() -> Self {
        Self::Fill(0x00)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct EncodeOptions {
    /// 16 進出力の先頭に COE ヘッダを書く。2 進出力では無視。
    pub with_header: bool,
    pub padding: Padding,
    /// 読み込みが 4 バイトに満たなければ (0 バイトでも) 最終行を出す。
    ///
    /// 旧ツールと同じ出力になるのは `Padding::Stale` と組み合わせたときのみ。
    /// `Padding::Fill` と組み合わせると、4 バイト境界で終わる入力の末尾に
    /// 埋め草だけの 1 語が付く。
    pub legacy_eof: bool,
}

impl EncodeOptions {
    /// 旧変換ツールと完全に同じ出力。
    pub fn legacy() -> Self {
        Self {
            with_header: true,
            padding: Padding::Stale,
            legacy_eof: true,
        }
    }
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            with_header: true,
            padding: Padding::default(),
            legacy_eof: false,
        }
    }
}

/// `reader` を 4 バイトずつ語として読み、1 語 1 行で `writer` に書く。
///
/// 書いたデータ行数を返す (ヘッダは含まない)。
/// 空入力でも埋め草のみの 1 語を出力する。
pub fn encode(
    mut reader: impl Read,
    mut writer: impl Write,
    encoding: Encoding,
    options: &EncodeOptions,
) -> eyre::Result<usize> {
    if encoding == Encoding::Hex && options.with_header {
        for line in COE_HEADER.iter() {
            writeln!(writer, "{}", line).wrap_err("failed to write header")?;
        }
    }

    let mut word = Word::default();
    let mut lines = 0;
    loop {
        if let Padding::Fill(b) = options.padding {
            word = Word([b; WORD_SIZE]);
        }

        let len = read_word(&mut reader, &mut word.0)
            .wrap_err_with(|| format!("failed to read word {}", lines))?;

        if len == WORD_SIZE {
            encoding
                .write_word(&word, &mut writer)
                .wrap_err_with(|| format!("failed to write word {}", lines))?;
            lines += 1;
            continue;
        }

        // 終端。部分語か空入力のとき (レガシーでは常に) 最終行を出す。
        if len > 0 || lines == 0 || options.legacy_eof {
            trace!("trailing word: {} byte(s) read, {:#010x}", len, word.to_u32());
            encoding
                .write_word(&word, &mut writer)
                .wrap_err_with(|| format!("failed to write word {}", lines))?;
            lines += 1;
        }
        break;
    }

    Ok(lines)
}

/// [`encode`] のメモリ上版。
pub fn encode_to_vec(
    buf: impl AsRef<[u8]>,
    encoding: Encoding,
    options: &EncodeOptions,
) -> eyre::Result<Vec<u8>> {
    let buf = buf.as_ref();

    let mut encoded = Vec::with_capacity(buf.len() * 9);
    encode(buf, &mut encoded, encoding, options)?;

    Ok(encoded)
}

/// `buf` を埋める。途中で止まるのはストリーム終端のみ。
fn read_word(reader: &mut impl Read, buf: &mut [u8; WORD_SIZE]) -> io::Result<usize> {
    let mut len = 0;
    while len < WORD_SIZE {
        match reader.read(&mut buf[len..]) {
            Ok(0) => break,
            Ok(n) => len += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(len)
}
