use rand::distributions::Uniform;
use rand::Rng;

const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const SUFFIX_LEN: usize = 9;

/// `err_<millis>_<9 base36 chars>`.
pub fn generate_error_id(now_ms: i64) -> String {
    let mut rng = rand::thread_rng();
    let suffix: String = (&mut rng)
        .sample_iter(Uniform::from(0..BASE36.len()))
        .take(SUFFIX_LEN)
        .map(|i| BASE36[i] as char)
        .collect();
    format!("err_{now_ms}_{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_id_has_expected_shape() {
        let id = generate_error_id(1_704_067_200_000);
        let parts: Vec<&str> = id.split('_').collect();

        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "err");
        assert_eq!(parts[1], "1704067200000");
        assert_eq!(parts[2].len(), 9);
        assert!(parts[2]
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }

    #[test]
    fn error_ids_differ_within_the_same_millisecond() {
        assert_ne!(generate_error_id(1), generate_error_id(1));
    }
}
