use super::classify::{classify, CharClass};

/// Split an identifier into words.
///
/// Runs of characters sharing a [`CharClass`] form the initial tokens. A
/// single left-to-right sweep then moves the last capital of an upper-case
/// run onto a following lower-case run, so `PDFLoader` becomes
/// `["PDF", "Loader"]`. The sweep works on the already mutated tokens, and
/// tokens emptied by it are dropped.
///
/// Concatenating the result always gives back the input.
pub fn split(src: &str) -> Vec<String> {
    let mut runs: Vec<Vec<char>> = Vec::new();
    let mut last_class = None;

    for ch in src.chars() {
        let class = classify(ch);
        match runs.last_mut() {
            Some(run) if last_class == Some(class) => run.push(ch),
            _ => runs.push(vec![ch]),
        }
        last_class = Some(class);
    }

    // "PDFL", "oader" -> "PDF", "Loader"
    for i in 0..runs.len().saturating_sub(1) {
        if first_class(&runs[i]) == Some(CharClass::Upper)
            && first_class(&runs[i + 1]) == Some(CharClass::Lower)
        {
            if let Some(moved) = runs[i].pop() {
                runs[i + 1].insert(0, moved);
            }
        }
    }

    runs.into_iter()
        .filter(|run| !run.is_empty())
        .map(|run| run.into_iter().collect())
        .collect()
}

/// Like [`split`], for input whose encoding is unknown. Bytes that are not
/// valid UTF-8 come back untouched as a single token.
pub fn split_bytes(src: &[u8]) -> Vec<Vec<u8>> {
    match std::str::from_utf8(src) {
        Ok(text) => split(text).into_iter().map(String::into_bytes).collect(),
        Err(_) => vec![src.to_vec()],
    }
}

fn first_class(run: &[char]) -> Option<CharClass> {
    run.first().copied().map(classify)
}
