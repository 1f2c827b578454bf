use crate::WORD_SIZE;

/// COE 文書を入力バイト列に戻す。
///
/// ヘッダ必須 (radix は 16 のみ)。値の区切りとして `,` `;` 空白を受け付ける。
pub fn decode_coe(text: impl AsRef<str>) -> eyre::Result<Vec<u8>> {
    let mut lines = text
        .as_ref()
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let (lineno, line) = lines
        .next()
        .ok_or_else(|| eyre::eyre!("missing radix declaration"))?;
    let radix = read_assignment(line, "memory_initialization_radix", lineno)?;
    eyre::ensure!(
        radix.trim_end_matches(';').trim() == "16",
        "line {}: unsupported radix: {}",
        lineno,
        radix
    );

    let (lineno, line) = lines
        .next()
        .ok_or_else(|| eyre::eyre!("missing vector declaration"))?;
    let rest = read_assignment(line, "memory_initialization_vector", lineno)?;

    let mut decoded = Vec::new();
    decode_tokens(rest, lineno, 16, &mut decoded)?;
    for (lineno, line) in lines {
        decode_tokens(line, lineno, 16, &mut decoded)?;
    }

    Ok(decoded)
}

/// MIF (2 進数字列) 文書を入力バイト列に戻す。
pub fn decode_mif(text: impl AsRef<str>) -> eyre::Result<Vec<u8>> {
    let mut decoded = Vec::new();

    for (i, line) in text.as_ref().lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        decoded.extend_from_slice(&parse_word(line, 2, i + 1)?);
    }

    Ok(decoded)
}

/// `key = value` の value 部分を返す。
fn read_assignment<'line>(line: &'line str, key: &str, lineno: usize) -> eyre::Result<&'line str> {
    match line.split_once('=') {
        Some((lhs, rhs)) if lhs.trim() == key => Ok(rhs.trim()),
        _ => eyre::bail!("line {}: expected `{} =`, found: {}", lineno, key, line),
    }
}

fn decode_tokens(line: &str, lineno: usize, radix: u32, decoded: &mut Vec<u8>) -> eyre::Result<()> {
    let tokens = line
        .split(|c: char| c == ',' || c == ';' || c.is_whitespace())
        .filter(|token| !token.is_empty());
    for token in tokens {
        decoded.extend_from_slice(&parse_word(token, radix, lineno)?);
    }
    Ok(())
}

/// 1 語ぶんの数字列を入力順のバイト列に戻す。
fn parse_word(token: &str, radix: u32, lineno: usize) -> eyre::Result<[u8; WORD_SIZE]> {
    let digits = match radix {
        2 => 8 * WORD_SIZE,
        16 => 2 * WORD_SIZE,
        _ => unreachable!(),
    };
    eyre::ensure!(
        token.len() == digits && token.chars().all(|c| c.is_digit(radix)),
        "line {}: expected {} base-{} digits, found: {}",
        lineno,
        digits,
        radix,
        token
    );

    // 出力は上位バイトから並ぶので、リトルエンディアンで戻すと入力順になる。
    let value = u32::from_str_radix(token, radix)?;
    Ok(value.to_le_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coe_restores_stream_order() {
        let text = "memory_initialization_radix = 16;\nmemory_initialization_vector =\n78563412\n00000002\n";
        assert_eq!(
            decode_coe(text).unwrap(),
            [0x12, 0x34, 0x56, 0x78, 0x02, 0x00, 0x00, 0x00]
        );
    }

    #[test]
    fn coe_accepts_terminators() {
        let text = "memory_initialization_radix=16;\nmemory_initialization_vector = 000000ff,\nDEADBEEF;\n\n";
        assert_eq!(
            decode_coe(text).unwrap(),
            [0xFF, 0x00, 0x00, 0x00, 0xEF, 0xBE, 0xAD, 0xDE]
        );
    }

    #[test]
    fn coe_rejects_bad_header() {
        assert!(decode_coe("").is_err());
        assert!(decode_coe("memory_initialization_radix = 2;\nmemory_initialization_vector =\n").is_err());
        assert!(decode_coe("78563412\n").is_err());
    }

    #[test]
    fn coe_reports_line_number() {
        let text = "memory_initialization_radix = 16;\nmemory_initialization_vector =\n00000000\n1234\n";
        let err = decode_coe(text).unwrap_err();
        assert!(err.to_string().starts_with("line 4:"), "{}", err);
    }

    #[test]
    fn mif_restores_stream_order() {
        let text = "00000000000000000000000000000001\n00000000000000000000000000000010\n";
        assert_eq!(decode_mif(text).unwrap(), [1, 0, 0, 0, 2, 0, 0, 0]);
    }

    #[test]
    fn mif_rejects_malformed_lines() {
        assert!(decode_mif("0101\n").is_err());
        assert!(decode_mif("0000000000000000000000000000000x\n").is_err());
    }
}
