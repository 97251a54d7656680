pub mod url_validator;

/// 短链 ID 长度
pub const SHORT_ID_LENGTH: usize = 6;

/// 短链 ID 字母表：52 个字母 + 10 个数字
pub const SHORT_ID_ALPHABET: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Draws `length` symbols uniformly and independently from
/// [`SHORT_ID_ALPHABET`]. Uniqueness is not checked here.
pub fn generate_random_code(length: usize) -> String {
    use std::iter;

    iter::repeat_with(|| {
        SHORT_ID_ALPHABET[rand::random_range(0..SHORT_ID_ALPHABET.len())] as char
    })
    .take(length)
    .collect()
}

/// 检查是否为生成器可能产出的短链 ID
pub fn is_valid_short_id(code: &str) -> bool {
    code.len() == SHORT_ID_LENGTH && code.bytes().all(|b| b.is_ascii_alphanumeric())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_alphabet_has_62_distinct_symbols() {
        let distinct: HashSet<u8> = SHORT_ID_ALPHABET.iter().copied().collect();
        assert_eq!(distinct.len(), 62);
        assert!(SHORT_ID_ALPHABET.iter().all(u8::is_ascii_alphanumeric));
    }

    #[test]
    fn test_generated_ids_have_fixed_length_and_alphabet() {
        for _ in 0..1000 {
            let id = generate_random_code(SHORT_ID_LENGTH);
            assert!(is_valid_short_id(&id), "unexpected id: {}", id);
        }
    }

    #[test]
    fn test_generate_respects_length() {
        assert_eq!(generate_random_code(0), "");
        assert_eq!(generate_random_code(12).len(), 12);
    }

    #[test]
    fn test_generated_ids_vary() {
        let ids: HashSet<String> = (0..200)
            .map(|_| generate_random_code(SHORT_ID_LENGTH))
            .collect();
        // 62^6 的空间下 200 次几乎不会重复
        assert!(ids.len() > 190);
    }

    #[test]
    fn test_is_valid_short_id() {
        assert!(is_valid_short_id("Ab3dE9"));
        assert!(!is_valid_short_id("Ab3dE"));
        assert!(!is_valid_short_id("Ab3dE9x"));
        assert!(!is_valid_short_id("Ab-dE9"));
    }
}
