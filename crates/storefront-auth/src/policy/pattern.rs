//! Route pattern matching.
//!
//! Patterns are segment-based: `*` matches exactly one segment, a trailing
//! `**` matches any remainder (including none). `/api/cart/**` therefore
//! matches `/api/cart`, `/api/cart/items`, and `/api/cart/items/42`.

/// One segment of a parsed pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    /// Matches this literal segment exactly.
    Literal(String),
    /// Matches any single segment.
    AnyOne,
    /// Matches the entire remainder of the path.
    AnyTail,
}

/// A parsed route pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePattern {
    segments: Vec<Segment>,
}

impl RoutePattern {
    /// Parses a pattern string. A `**` segment must be last; anything after
    /// it is unreachable and ignored.
    pub fn parse(pattern: &str) -> Self {
        let mut segments = Vec::new();
        for part in pattern.split('/').filter(|s| !s.is_empty()) {
            match part {
                "**" => {
                    segments.push(Segment::AnyTail);
                    break;
                }
                "*" => segments.push(Segment::AnyOne),
                literal => segments.push(Segment::Literal(literal.to_string())),
            }
        }
        Self { segments }
    }

    /// Whether the pattern matches the given request path.
    pub fn matches(&self, path: &str) -> bool {
        let parts: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        let mut i = 0;

        for segment in &self.segments {
            match segment {
                Segment::AnyTail => return true,
                Segment::AnyOne => {
                    if i >= parts.len() {
                        return false;
                    }
                    i += 1;
                }
                Segment::Literal(literal) => {
                    if parts.get(i).map(|p| *p) != Some(literal.as_str()) {
                        return false;
                    }
                    i += 1;
                }
            }
        }

        i == parts.len()
    }

    /// Specificity for precedence ordering: more literal segments first,
    /// and at equal literal counts a pattern without a tail wildcard beats
    /// one with it.
    pub fn specificity(&self) -> (usize, bool) {
        let literals = self
            .segments
            .iter()
            .filter(|s| matches!(s, Segment::Literal(_)))
            .count();
        let exact = !self.segments.iter().any(|s| matches!(s, Segment::AnyTail));
        (literals, exact)
    }
}
