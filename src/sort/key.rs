use std::cmp::Ordering;

/// One piece of a [`SortKey`].
///
/// The derived ordering relies on variant order: at the same position a text
/// segment always sorts before a number.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Segment {
    Text(String),
    Number(u64),
}

/// Natural-order key of a name: the lowercased name split into maximal runs of
/// ASCII digits (parsed as numbers) and runs of everything else.
///
/// Keys compare segment by segment; when one key is a prefix of the other the
/// shorter one sorts first, so the empty key sorts before everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SortKey(Vec<Segment>);

impl SortKey {
    pub fn new(name: &str) -> Self {
        let mut segments = Vec::new();
        let mut text = String::new();
        let mut number: Option<u64> = None;

        for c in name.to_lowercase().chars() {
            if c.is_ascii_digit() {
                if !text.is_empty() {
                    segments.push(Segment::Text(std::mem::take(&mut text)));
                }
                let digit = u64::from(c as u8 - b'0');
                // Runs too long for u64 saturate instead of wrapping.
                let value = number
                    .unwrap_or(0)
                    .checked_mul(10)
                    .and_then(|v| v.checked_add(digit))
                    .unwrap_or(u64::MAX);
                number = Some(value);
            } else {
                if let Some(n) = number.take() {
                    segments.push(Segment::Number(n));
                }
                text.push(c);
            }
        }

        if let Some(n) = number {
            segments.push(Segment::Number(n));
        } else if !text.is_empty() {
            segments.push(Segment::Text(text));
        }

        Self(segments)
    }

    pub fn segments(&self) -> &[Segment] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for SortKey {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// Compare two names in natural order.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    SortKey::new(a).cmp(&SortKey::new(b))
}
