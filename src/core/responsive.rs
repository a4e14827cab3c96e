//! Responsive switch logic.
//!
//! Before the app has mounted there is no measured viewport, so both
//! branches of a switch are rendered and a generated stylesheet hides the
//! one that does not apply. After mount, only the matching branch is
//! rendered at all.

use super::error::MediaQueryError;

// =============================================================================
// Media queries
// =============================================================================

/// Width constraint of a media query.
#[derive(Clone, Copy, Debug, PartialEq)]
enum Constraint {
    MinWidth(f64),
    MaxWidth(f64),
}

/// Parsed width-only media query, e.g. `(min-width: 769px) and (max-width: 1200px)`.
#[derive(Clone, Debug, PartialEq)]
pub struct MediaQuery {
    source: String,
    constraints: Vec<Constraint>,
}

impl MediaQuery {
    /// Parse `(min-width: Npx)` / `(max-width: Npx)` clauses joined by `and`.
    pub fn parse(query: &str) -> Result<Self, MediaQueryError> {
        let invalid = || MediaQueryError::InvalidQuery(query.to_string());
        let mut constraints = Vec::new();

        for clause in query.split(" and ") {
            let inner = clause
                .trim()
                .strip_prefix('(')
                .and_then(|c| c.strip_suffix(')'))
                .ok_or_else(invalid)?;
            let (feature, value) = inner.split_once(':').ok_or_else(invalid)?;
            let px: f64 = value
                .trim()
                .strip_suffix("px")
                .ok_or_else(invalid)?
                .trim()
                .parse()
                .map_err(|_| invalid())?;
            let constraint = match feature.trim() {
                "min-width" => Constraint::MinWidth(px),
                "max-width" => Constraint::MaxWidth(px),
                _ => return Err(invalid()),
            };
            constraints.push(constraint);
        }

        Ok(Self {
            source: query.trim().to_string(),
            constraints,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Whether a viewport of `width` CSS pixels matches.
    pub fn matches(&self, width: f64) -> bool {
        self.constraints.iter().all(|c| match *c {
            Constraint::MinWidth(min) => width >= min,
            Constraint::MaxWidth(max) => width <= max,
        })
    }
}

// =============================================================================
// Nested scopes
// =============================================================================

/// Chain of media queries registered by enclosing switches.
///
/// `S` is whatever the caller uses to observe a query (a reactive signal in
/// the UI, a plain `bool` in tests). Descendants look up an ancestor's entry
/// instead of registering the same query again.
#[derive(Clone, Debug)]
pub struct MatchStack<S> {
    entries: Vec<(String, S)>,
}

impl<S> Default for MatchStack<S> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<S: Clone> MatchStack<S> {
    pub fn new() -> Self {
        Self::default()
    }

    /// A new stack with `query` pushed on top. `self` is left unchanged.
    pub fn push(&self, query: &str, handle: S) -> Self {
        let mut entries = self.entries.clone();
        entries.push((normalize(query), handle));
        Self { entries }
    }

    /// Nearest ancestor registration of `query`.
    pub fn find(&self, query: &str) -> Option<&S> {
        let key = normalize(query);
        self.entries
            .iter()
            .rev()
            .find(|(q, _)| *q == key)
            .map(|(_, s)| s)
    }

    /// Queries registered by ancestors, outermost first.
    pub fn queries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(q, _)| q.as_str())
    }

    pub fn depth(&self) -> usize {
        self.entries.len()
    }

    /// Same chain with every handle converted, e.g. signals read into bools.
    pub fn map<T>(&self, mut f: impl FnMut(&S) -> T) -> MatchStack<T> {
        MatchStack {
            entries: self
                .entries
                .iter()
                .map(|(q, s)| (q.clone(), f(s)))
                .collect(),
        }
    }
}

impl MatchStack<bool> {
    /// Ancestor queries that currently match.
    pub fn matching(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|(_, matched)| *matched)
            .map(|(q, _)| q.as_str())
            .collect()
    }
}

fn normalize(query: &str) -> String {
    query.split_whitespace().collect::<Vec<_>>().join(" ")
}

// =============================================================================
// Render plan
// =============================================================================

/// Which branch of a switch to put in the DOM.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Branch {
    /// Branch for viewports matching the query
    Matched,
    /// Branch for everything else
    Fallback,
}

/// Render decision for a switch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderPlan {
    /// Not mounted yet: render both, hide one with CSS.
    Both,
    /// Mounted: render exactly this branch.
    Only(Branch),
}

impl RenderPlan {
    pub fn for_state(mounted: bool, matches: bool) -> Self {
        match (mounted, matches) {
            (false, _) => Self::Both,
            (true, true) => Self::Only(Branch::Matched),
            (true, false) => Self::Only(Branch::Fallback),
        }
    }

    pub fn renders(self, branch: Branch) -> bool {
        match self {
            Self::Both => true,
            Self::Only(only) => only == branch,
        }
    }
}

/// CSS class wrapping a branch of switch `id` before mount.
pub fn branch_class(id: usize, branch: Branch) -> String {
    match branch {
        Branch::Matched => format!("media-{}-match", id),
        Branch::Fallback => format!("media-{}-fallback", id),
    }
}

/// Stylesheet hiding the non-applicable branch of switch `id`.
pub fn fallback_stylesheet(id: usize, query: &MediaQuery) -> String {
    format!(
        "@media not all and {q} {{ .{m} {{ display: none !important; }} }}\n\
         @media {q} {{ .{f} {{ display: none !important; }} }}",
        q = query.as_str(),
        m = branch_class(id, Branch::Matched),
        f = branch_class(id, Branch::Fallback),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_match() {
        let desktop = MediaQuery::parse("(min-width: 769px)").unwrap();
        assert!(desktop.matches(1024.0));
        assert!(desktop.matches(769.0));
        assert!(!desktop.matches(768.0));

        let tablet = MediaQuery::parse("(min-width: 480px) and (max-width: 768px)").unwrap();
        assert!(tablet.matches(600.0));
        assert!(!tablet.matches(400.0));
        assert!(!tablet.matches(900.0));
    }

    #[test]
    fn test_parse_rejects_unsupported() {
        for bad in ["min-width: 10px", "(orientation: portrait)", "(min-width: 10em)", ""] {
            assert_eq!(
                MediaQuery::parse(bad),
                Err(MediaQueryError::InvalidQuery(bad.to_string()))
            );
        }
    }

    #[test]
    fn test_render_plan_before_and_after_mount() {
        for matches in [false, true] {
            let plan = RenderPlan::for_state(false, matches);
            assert!(plan.renders(Branch::Matched));
            assert!(plan.renders(Branch::Fallback));

            let plan = RenderPlan::for_state(true, matches);
            let rendered = [Branch::Matched, Branch::Fallback]
                .iter()
                .filter(|b| plan.renders(**b))
                .count();
            assert_eq!(rendered, 1);
            assert_eq!(plan.renders(Branch::Matched), matches);
        }
    }

    #[test]
    fn test_stylesheet_hides_exactly_one_branch_per_media() {
        let query = MediaQuery::parse("(min-width: 769px)").unwrap();
        let css = fallback_stylesheet(3, &query);
        assert!(css.contains("@media not all and (min-width: 769px) { .media-3-match"));
        assert!(css.contains("@media (min-width: 769px) { .media-3-fallback"));
    }

    #[test]
    fn test_match_stack_lookup() {
        let root: MatchStack<bool> = MatchStack::new();
        let outer = root.push("(min-width: 769px)", true);
        let inner = outer.push("(max-width:  1200px)", false);

        assert_eq!(root.depth(), 0);
        assert_eq!(inner.depth(), 2);
        assert_eq!(inner.find("(min-width: 769px)"), Some(&true));
        assert_eq!(inner.find("(max-width: 1200px)"), Some(&false));
        assert_eq!(outer.find("(max-width: 1200px)"), None);
        assert_eq!(inner.matching(), vec!["(min-width: 769px)"]);
        assert_eq!(inner.queries().count(), 2);
    }

    #[test]
    fn test_match_stack_prefers_nearest() {
        let stack = MatchStack::new()
            .push("(min-width: 1px)", 1)
            .push("(min-width: 1px)", 2);
        assert_eq!(stack.find("(min-width: 1px)"), Some(&2));
    }

    #[test]
    fn test_match_stack_map() {
        let widths = MatchStack::new()
            .push("(min-width: 769px)", 769.0)
            .push("(min-width: 1400px)", 1400.0);
        let matched = widths.map(|min| 1024.0 >= *min);
        assert_eq!(matched.matching(), vec!["(min-width: 769px)"]);
    }
}
