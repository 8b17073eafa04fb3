//! Signature extraction for term comparison

use std::collections::BTreeSet;

/// Characters excluded from comparison because they appear in too many
/// unrelated terms: particles (的 了 是), pronouns (我 你 他), sentence
/// finals (啊 吧 呀), negation (不), and generic qualifiers (版 式 第 大 小).
pub const STOP_CHARS: [char; 15] = [
    '的', '了', '是', '我', '你', '他', '啊', '吧', '呀', '不', '版', '式', '第', '大', '小',
];

/// CJK unified ideographs, the only characters eligible for comparison.
fn is_ideograph(c: char) -> bool {
    ('\u{4e00}'..='\u{9fa5}').contains(&c)
}

/// The set of distinct eligible characters in a term, stop characters
/// removed. No ordering beyond code point, no multiplicity.
pub fn signature(term: &str) -> BTreeSet<char> {
    term.chars()
        .filter(|c| is_ideograph(*c) && !STOP_CHARS.contains(c))
        .collect()
}
