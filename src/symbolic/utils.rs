// the collection of utility functions for bracket parsing and proceeding
// all functions expect ASCII input, the parser rejects anything else beforehand

/// true if every '(' has a matching ')' and no ')' closes an unopened bracket
pub fn brackets_balanced(s: &str) -> bool {
    let mut depth: i64 = 0;
    for c in s.bytes() {
        match c {
            b'(' => depth += 1,
            b')' => {
                depth -= 1;
                if depth < 0 {
                    return false;
                }
            }
            _ => {}
        }
    }
    depth == 0
}

/// position of the bracket closing the one opened at `start`
pub fn find_pair_to_this_bracket(input: &str, start: usize) -> Option<usize> {
    let bytes = input.as_bytes();
    if bytes.get(start) != Some(&b'(') {
        return None;
    }
    let mut depth = 0;
    for (i, c) in bytes.iter().enumerate().skip(start) {
        match c {
            b'(' => depth += 1,
            b')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}

/// "(x+1)" -> true, "(x+1)*(x-1)" -> false
pub fn is_wrapped_in_brackets(input: &str) -> bool {
    input.starts_with('(') && find_pair_to_this_bracket(input, 0) == Some(input.len() - 1)
}

// '+' or '-' at `pos` belongs to a literal like 1e-5 or 2.5E+3
fn is_exponent_sign(bytes: &[u8], pos: usize) -> bool {
    if pos < 2 || !matches!(bytes[pos - 1], b'e' | b'E') {
        return false;
    }
    let mut start = pos - 1;
    while start > 0 && (bytes[start - 1].is_ascii_digit() || bytes[start - 1] == b'.') {
        start -= 1;
    }
    let mantissa = &bytes[start..pos - 1];
    let has_digit = mantissa.iter().any(u8::is_ascii_digit);
    let token_start = start == 0 || !(bytes[start - 1].is_ascii_alphanumeric() || bytes[start - 1] == b'_');
    has_digit && token_start
}

// operator at `pos` has an operand on its left, i.e. it is binary and not a sign
fn has_left_operand(bytes: &[u8], pos: usize) -> bool {
    bytes[..pos]
        .iter()
        .rev()
        .find(|c| !c.is_ascii_whitespace())
        .is_some_and(|c| c.is_ascii_alphanumeric() || *c == b'.' || *c == b')' || *c == b'_')
}

/// Finds a binary operator from `operators` lying outside of brackets.
/// With `rightmost == true` the last match is returned (left associative operators),
/// otherwise the first one (right associative `^`).
/// Signs (unary minus/plus) and exponent signs of numeric literals are skipped.
pub fn find_operator_outside_brackets(
    input: &str,
    operators: &[u8],
    rightmost: bool,
) -> Option<(usize, char)> {
    let bytes = input.as_bytes();
    let mut depth = 0;
    let mut found = None;
    for (i, c) in bytes.iter().enumerate() {
        match c {
            b'(' => depth += 1,
            b')' => depth -= 1,
            _ if depth == 0 && operators.contains(c) => {
                let is_sign = matches!(c, b'+' | b'-')
                    && (!has_left_operand(bytes, i) || is_exponent_sign(bytes, i));
                if is_sign {
                    continue;
                }
                found = Some((i, *c as char));
                if !rightmost {
                    return found;
                }
            }
            _ => {}
        }
    }
    found
}
