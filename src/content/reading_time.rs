//! Estimated reading time

use super::model::Section;

/// Fixed reading speed the estimate is based on
pub const WORDS_PER_MINUTE: usize = 200;

/// Estimate the reading time of a post in whole minutes.
///
/// Every section heading and every body block is tokenized by splitting
/// on single space characters; consecutive separators produce empty
/// tokens that still count towards the total. The result is
/// `ceil(W / 200)` over the total token count `W`, and `0` for an empty
/// section sequence.
pub fn estimate_minutes(sections: &[Section]) -> usize {
    let words: usize = sections
        .iter()
        .map(|section| {
            let heading_words = section.heading.split(' ').count();
            let body_words: usize = section
                .body
                .iter()
                .map(|block| block.text.split(' ').count())
                .sum();
            heading_words + body_words
        })
        .sum();

    words.div_ceil(WORDS_PER_MINUTE)
}
