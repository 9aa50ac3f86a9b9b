//! Tuning-parameter declaration, live ranges and enumeration.
//!
//! Each algorithm plug-in declares an ordered schema of named integer
//! parameters with closed `[min, max]` boxes. Users may narrow a box or
//! freeze a parameter to a single value; the search loop then enumerates
//! the Cartesian product of the remaining joint boxes in row-major order
//! with the first-declared parameter varying fastest.

use crate::error::{ConfigError, Result};

/// How a tuning parameter participates in the optimisation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    /// Computed analytically from the problem before the search starts.
    Independent,
    /// Co-optimised with the other joint parameters by the search.
    Joint,
}

/// One declared tuning parameter.
#[derive(Debug, Clone)]
pub struct ParamSpec {
    pub name: &'static str,
    pub min: i64,
    pub max: i64,
    pub kind: ParamKind,
}

/// The ordered parameter schema of one algorithm, independents first.
#[derive(Debug, Clone, Default)]
pub struct TuningSchema {
    specs: Vec<ParamSpec>,
}

impl TuningSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// One-time registration; duplicate names and empty boxes are
    /// programmer errors.
    pub fn declare(mut self, name: &'static str, min: i64, max: i64, kind: ParamKind) -> Self {
        assert!(min <= max, "empty declared range for `{name}`");
        assert!(
            self.index_of(name).is_none(),
            "tuning parameter `{name}` declared twice"
        );
        self.specs.push(ParamSpec {
            name,
            min,
            max,
            kind,
        });
        self
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ParamSpec> {
        self.specs.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.specs.iter().map(|s| s.name)
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.specs.iter().position(|s| s.name == name)
    }

    pub fn spec(&self, idx: usize) -> &ParamSpec {
        &self.specs[idx]
    }
}

#[derive(Debug, Clone)]
struct LiveRange {
    min: i64,
    max: i64,
    fixed: Option<i64>,
}

/// Live state of one algorithm's parameter boxes: declared ranges plus any
/// user narrowing or freezing.
#[derive(Debug, Clone)]
pub struct ParamRanges {
    schema: TuningSchema,
    live: Vec<LiveRange>,
}

impl ParamRanges {
    pub fn new(schema: TuningSchema) -> Self {
        let live = schema
            .iter()
            .map(|s| LiveRange {
                min: s.min,
                max: s.max,
                fixed: None,
            })
            .collect();
        Self { schema, live }
    }

    pub fn schema(&self) -> &TuningSchema {
        &self.schema
    }

    /// Replaces the live box of `name` with `[min, max]`.
    pub fn set_range(&mut self, name: &str, min: i64, max: i64) -> Result<()> {
        let idx = self
            .schema
            .index_of(name)
            .ok_or_else(|| ConfigError::UnknownParameter(name.to_string()))?;
        if min > max {
            return Err(ConfigError::EmptyRange {
                name: name.to_string(),
                min,
                max,
            });
        }
        self.live[idx].min = min;
        self.live[idx].max = max;
        Ok(())
    }

    /// Freezes `name` to `value`; the live box widens to include it if
    /// needed, and the search stops enumerating this parameter.
    pub fn set_value(&mut self, name: &str, value: i64) -> Result<()> {
        let idx = self
            .schema
            .index_of(name)
            .ok_or_else(|| ConfigError::UnknownParameter(name.to_string()))?;
        let live = &mut self.live[idx];
        live.min = live.min.min(value);
        live.max = live.max.max(value);
        live.fixed = Some(value);
        Ok(())
    }

    /// Clears all user fixes; any `set_range` narrowing stays in effect.
    pub fn clear_fixed(&mut self) {
        for live in &mut self.live {
            live.fixed = None;
        }
    }

    pub fn fixed(&self, idx: usize) -> Option<i64> {
        self.live[idx].fixed
    }

    /// The effective box of parameter `idx`: `[v, v]` when frozen.
    pub fn range(&self, idx: usize) -> (i64, i64) {
        match self.live[idx].fixed {
            Some(v) => (v, v),
            None => (self.live[idx].min, self.live[idx].max),
        }
    }

    /// Whether every joint parameter has been frozen by the user.
    pub fn all_joints_fixed(&self) -> bool {
        self.schema
            .iter()
            .enumerate()
            .filter(|(_, s)| s.kind == ParamKind::Joint)
            .all(|(i, _)| self.live[i].fixed.is_some())
    }
}

/// The materialised per-search boxes handed to enumerators: every
/// parameter present, independents and user fixes degenerated to `[v, v]`.
pub struct SearchRanges<'a> {
    schema: &'a TuningSchema,
    ranges: Vec<(i64, i64)>,
}

impl<'a> SearchRanges<'a> {
    pub fn new(schema: &'a TuningSchema, ranges: Vec<(i64, i64)>) -> Self {
        debug_assert_eq!(schema.len(), ranges.len());
        Self { schema, ranges }
    }

    pub fn get(&self, name: &str) -> (i64, i64) {
        let idx = self
            .schema
            .index_of(name)
            .unwrap_or_else(|| panic!("`{name}` is not in the schema"));
        self.ranges[idx]
    }

    pub fn all(&self) -> &[(i64, i64)] {
        &self.ranges
    }

    pub fn schema(&self) -> &TuningSchema {
        self.schema
    }
}

/// Row-major Cartesian product over the boxes; the first parameter varies
/// fastest. Yields full value vectors in schema order.
pub struct CartesianChoices {
    ranges: Vec<(i64, i64)>,
    current: Vec<i64>,
    done: bool,
}

impl CartesianChoices {
    pub fn new(ranges: &[(i64, i64)]) -> Self {
        let current = ranges.iter().map(|&(min, _)| min).collect();
        Self {
            ranges: ranges.to_vec(),
            current,
            done: ranges.is_empty(),
        }
    }
}

impl Iterator for CartesianChoices {
    type Item = Vec<i64>;

    fn next(&mut self) -> Option<Vec<i64>> {
        if self.done {
            return None;
        }
        let out = self.current.clone();
        let mut idx = 0;
        loop {
            self.current[idx] += 1;
            if self.current[idx] <= self.ranges[idx].1 {
                break;
            }
            self.current[idx] = self.ranges[idx].0;
            idx += 1;
            if idx == self.ranges.len() {
                self.done = true;
                break;
            }
        }
        Some(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema() -> TuningSchema {
        TuningSchema::new()
            .declare("r", 0, 50, ParamKind::Independent)
            .declare("p", 0, 2, ParamKind::Joint)
            .declare("l", 0, 1, ParamKind::Joint)
    }

    #[test]
    fn test_set_range_rejects_empty() {
        let mut ranges = ParamRanges::new(schema());
        assert!(matches!(
            ranges.set_range("p", 5, 3),
            Err(ConfigError::EmptyRange { .. })
        ));
        assert!(matches!(
            ranges.set_range("nope", 0, 1),
            Err(ConfigError::UnknownParameter(_))
        ));
        ranges.set_range("p", 1, 2).unwrap();
        assert_eq!(ranges.range(1), (1, 2));
    }

    #[test]
    fn test_set_value_freezes_and_widens() {
        let mut ranges = ParamRanges::new(schema());
        ranges.set_value("l", 7).unwrap();
        assert_eq!(ranges.range(2), (7, 7));
        assert_eq!(ranges.fixed(2), Some(7));
        ranges.clear_fixed();
        // The box was widened to include the fix, and the fix is gone.
        assert_eq!(ranges.range(2), (0, 7));
        assert_eq!(ranges.fixed(2), None);
    }

    #[test]
    fn test_cartesian_first_parameter_fastest() {
        let choices: Vec<_> = CartesianChoices::new(&[(0, 1), (3, 4)]).collect();
        assert_eq!(
            choices,
            vec![vec![0, 3], vec![1, 3], vec![0, 4], vec![1, 4]]
        );
    }

    #[test]
    fn test_cartesian_degenerate_boxes_carry() {
        let choices: Vec<_> = CartesianChoices::new(&[(4, 4), (0, 2)]).collect();
        assert_eq!(choices, vec![vec![4, 0], vec![4, 1], vec![4, 2]]);
    }
}
