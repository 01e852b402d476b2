use std::fmt::{Display, Formatter};

/// Renders a slice as a bracketed, comma-separated list, e.g. `[55606, 55617]`.
pub struct DisplaySlice<'a, D>(&'a [D]);

impl<D: Display> Display for DisplaySlice<'_, D> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("[")?;
        let mut items = self.0.iter();
        if let Some(first) = items.next() {
            write!(f, "{first}")?;
            for item in items {
                write!(f, ", {item}")?;
            }
        }
        f.write_str("]")
    }
}

impl<'a, D> From<&'a [D]> for DisplaySlice<'a, D> {
    fn from(items: &'a [D]) -> Self {
        Self(items)
    }
}

/// Renders a count alongside a singular/plural noun, e.g. `1 pair`, `3 pairs`.
pub struct Counted<'a> {
    count: usize,
    noun: &'a str,
}
impl<'a> Counted<'a> {
    pub fn new(count: usize, noun: &'a str) -> Self {
        Self { count, noun }
    }
}

impl Display for Counted<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.count {
            1 => write!(f, "1 {}", self.noun),
            count => write!(f, "{count} {}s", self.noun),
        }
    }
}
