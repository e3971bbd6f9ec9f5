pub mod nanoid;

/// 文字列の先頭から10進整数を読み取る
///
/// 先頭の空白を読み飛ばし、符号と連続する数字だけを解釈する。
/// 数字が1つもない場合や`i64`に収まらない場合は`None`。
///
/// # 例
/// * `"42"` → `Some(42)`
/// * `" 12abc"` → `Some(12)`
/// * `"3.7"` → `Some(3)`
/// * `"abc"` → `None`
pub fn parse_int_prefix(input: &str) -> Option<i64> {
    let trimmed = input.trim_start();
    let (sign, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => ("-", &trimmed[1..]),
        Some(b'+') => ("", &trimmed[1..]),
        _ => ("", trimmed),
    };

    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }

    format!("{sign}{digits}").parse().ok()
}

/// パス文字列から最後のセグメント（ファイル名）を取得する
///
/// ブラウザが`C:\fakepath\receipt.png`のような絶対パスを返す場合に備え、
/// `\`と`/`の両方で分割する
pub fn last_path_segment(path: &str) -> &str {
    path.rsplit(['\\', '/']).next().unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_int_prefix() {
        assert_eq!(parse_int_prefix("42"), Some(42));
        assert_eq!(parse_int_prefix("  7"), Some(7));
        assert_eq!(parse_int_prefix("12abc"), Some(12));
        assert_eq!(parse_int_prefix("3.7"), Some(3));
        assert_eq!(parse_int_prefix("-15"), Some(-15));
        assert_eq!(parse_int_prefix("+8"), Some(8));
        assert_eq!(parse_int_prefix("0"), Some(0));
    }

    #[test]
    fn test_parse_int_prefix_invalid() {
        assert_eq!(parse_int_prefix(""), None);
        assert_eq!(parse_int_prefix("abc"), None);
        assert_eq!(parse_int_prefix("-"), None);
        assert_eq!(parse_int_prefix(".5"), None);
        assert_eq!(parse_int_prefix("99999999999999999999999"), None);
    }

    #[test]
    fn test_last_path_segment() {
        assert_eq!(last_path_segment("C:\\fakepath\\receipt.png"), "receipt.png");
        assert_eq!(last_path_segment("/home/user/receipt.jpg"), "receipt.jpg");
        assert_eq!(last_path_segment("receipt.jpeg"), "receipt.jpeg");
        assert_eq!(last_path_segment(""), "");
    }

    #[quickcheck_macros::quickcheck]
    fn prop_parse_int_prefix_matches_display(value: i64) -> bool {
        parse_int_prefix(&value.to_string()) == Some(value)
    }
}
