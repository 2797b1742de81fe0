use crate::catalog::parse_leading_int;

/// Maps the raw `id` parameter to a catalog position. Anything unusable lands on 0.
pub(super) fn resolve_index(raw: Option<&str>, len: usize) -> usize {
    raw.and_then(parse_leading_int)
        .and_then(|index| usize::try_from(index).ok())
        .filter(|&index| index < len)
        .unwrap_or(0)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) struct NavState {
    pub(super) index: usize,
    pub(super) len: usize,
}

impl NavState {
    pub(super) fn new(index: usize, len: usize) -> Self {
        let index = if index < len { index } else { 0 };
        Self { index, len }
    }

    pub(super) fn can_go_previous(&self) -> bool {
        self.index > 0 && self.index < self.len
    }

    pub(super) fn can_go_next(&self) -> bool {
        self.index + 1 < self.len
    }

    pub(super) fn previous(&self) -> Option<usize> {
        self.can_go_previous().then(|| self.index - 1)
    }

    pub(super) fn next(&self) -> Option<usize> {
        self.can_go_next().then(|| self.index + 1)
    }
}
