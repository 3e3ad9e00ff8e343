/// Words replaced in every chirp body, compared case-insensitively.
pub const BANNED_WORDS: [&str; 3] = ["kerfuffle", "sharbert", "fornax"];

/// Replacement for a banned word.
pub const MASK: &str = "****";

/// Mask banned words in `text`.
///
/// Words are split on single spaces only, so a banned word followed by
/// punctuation (`"fornax!"`) is left as is.
pub fn clean(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            if BANNED_WORDS.contains(&word.to_lowercase().as_str()) {
                MASK
            } else {
                word
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
