//! Collinearity facts known from the construction.

use geoprove_core::LabelId;

/// Lines known to pass through sets of points.
#[derive(Clone, Debug, Default)]
pub struct CollinearityFacts {
    lines: Vec<Vec<LabelId>>,
}

impl CollinearityFacts {
    /// Creates an empty fact base.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that `p` lies on the line through `a` and `b`.
    pub fn add_to_line(&mut self, a: LabelId, b: LabelId, p: LabelId) {
        if a == b {
            return;
        }
        let existing = self
            .lines
            .iter_mut()
            .find(|line| line.contains(&a) && line.contains(&b));
        match existing {
            Some(line) => {
                if !line.contains(&p) {
                    line.push(p);
                }
            }
            None => {
                let mut line = vec![a, b];
                if p != a && p != b {
                    line.push(p);
                }
                self.lines.push(line);
            }
        }
    }

    /// Returns true if the three points are known to be collinear.
    ///
    /// Two equal points always make a collinear triple.
    #[must_use]
    pub fn collinear(&self, a: LabelId, b: LabelId, c: LabelId) -> bool {
        if a == b || b == c || a == c {
            return true;
        }
        self.lines
            .iter()
            .any(|line| line.contains(&a) && line.contains(&b) && line.contains(&c))
    }

    /// Returns true if `p` is known to lie on line `ab`.
    #[must_use]
    pub fn on_line(&self, p: LabelId, a: LabelId, b: LabelId) -> bool {
        self.collinear(p, a, b)
    }

    /// Number of recorded lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns true if nothing is recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
