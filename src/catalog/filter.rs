use super::record::ProblemRecord;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterQuery {
    pub text: String,
    pub min_rating: Option<i64>,
    pub max_rating: Option<i64>,
}

impl FilterQuery {
    pub fn new(text: &str, min_input: &str, max_input: &str) -> Self {
        Self {
            text: text.to_owned(),
            min_rating: parse_rating_bound(min_input),
            max_rating: parse_rating_bound(max_input),
        }
    }

    pub fn has_rating_bound(&self) -> bool {
        self.min_rating.is_some() || self.max_rating.is_some()
    }

    fn matches_text(&self, record: &ProblemRecord, needle: &str) -> bool {
        needle.is_empty()
            || record.code.to_lowercase().contains(needle)
            || record.name.to_lowercase().contains(needle)
    }

    fn matches_rating(&self, record: &ProblemRecord) -> bool {
        let lower_ok = self.min_rating.is_none_or(|min| record.rating >= min);
        let upper_ok = self.max_rating.is_none_or(|max| record.rating <= max);
        lower_ok && upper_ok
    }
}

/// Reads the leading integer of `input`, ignoring whatever follows it, so `"1500.5"` is
/// 1500 and `"2abc"` is 2. `None` when no digits lead the text.
pub fn parse_leading_int(input: &str) -> Option<i64> {
    let trimmed = input.trim_start();
    let digits_start = usize::from(trimmed.starts_with(['+', '-']));
    let digits_len = trimmed[digits_start..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits_len == 0 {
        return None;
    }

    trimmed[..digits_start + digits_len].parse::<i64>().ok()
}

/// Input without a leading integer means the bound is not set.
pub fn parse_rating_bound(input: &str) -> Option<i64> {
    parse_leading_int(input)
}

/// Returns the positions in `all` that pass the query, in catalog order.
pub fn filter_indices(all: &[ProblemRecord], query: &FilterQuery) -> Vec<usize> {
    let needle = query.text.trim().to_lowercase();
    let check_rating = query.has_rating_bound();

    all.iter()
        .enumerate()
        .filter(|(_, record)| {
            query.matches_text(record, &needle) && (!check_rating || query.matches_rating(record))
        })
        .map(|(index, _)| index)
        .collect()
}
