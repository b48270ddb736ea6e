//! Message scrambling around a key position

/// Reverse both halves of `message` split at `key` and join them with `_`
///
/// With an odd key the left half comes first, with an even key the right
/// half does. A key outside `1..len` reverses the whole message.
pub fn encrypt_message(message: &str, key: usize) -> String {
    let chars: Vec<char> = message.chars().collect();
    if key == 0 || key >= chars.len() {
        return chars.iter().rev().collect();
    }

    let left: String = chars[..key].iter().rev().collect();
    let right: String = chars[key..].iter().rev().collect();

    if key % 2 == 1 {
        format!("{}_{}", left, right)
    } else {
        format!("{}_{}", right, left)
    }
}
