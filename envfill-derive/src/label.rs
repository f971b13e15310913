//! Human-readable rendering of field types.

use quote::ToTokens;
use syn::Type;

/// Render a type compactly, e.g. `Vec < i32 >` becomes `Vec<i32>`.
///
/// Whitespace survives only between two word characters.
pub fn type_label(ty: &Type) -> String {
    let raw = ty.to_token_stream().to_string();
    let chars: Vec<char> = raw.chars().collect();
    let is_word = |c: char| c.is_alphanumeric() || c == '_' || c == '\'';

    let mut label = String::with_capacity(raw.len());
    for (i, &c) in chars.iter().enumerate() {
        if c == ' ' {
            let prev = label.chars().last();
            let next = chars.get(i + 1).copied();
            match (prev, next) {
                (Some(p), Some(n)) if is_word(p) && is_word(n) => label.push(' '),
                _ => {}
            }
            continue;
        }
        label.push(c);
    }
    label
}
