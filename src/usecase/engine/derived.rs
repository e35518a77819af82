/// Cached output of one stage, valid while its inputs compare equal.
///
/// `generation` moves only when a recompute yields a different output, so a
/// downstream stage can key on it instead of cloning the upstream rows.
#[derive(Debug, Clone)]
pub(crate) struct Derived<K, V> {
    inputs: K,
    output: V,
    generation: u64,
    runs: usize,
}

impl<K: PartialEq, V: PartialEq> Derived<K, V> {
    pub(crate) fn new(inputs: K, compute: impl FnOnce(&K) -> V) -> Self {
        let output = compute(&inputs);
        Self {
            inputs,
            output,
            generation: 0,
            runs: 1,
        }
    }

    /// Recomputes when `inputs` differ from the last-seen inputs. Returns
    /// whether the stage ran.
    pub(crate) fn refresh(&mut self, inputs: K, compute: impl FnOnce(&K) -> V) -> bool {
        if self.inputs == inputs {
            return false;
        }
        let output = compute(&inputs);
        if output != self.output {
            self.output = output;
            self.generation += 1;
        }
        self.inputs = inputs;
        self.runs += 1;
        true
    }

    pub(crate) fn output(&self) -> &V {
        &self.output
    }

    pub(crate) fn generation(&self) -> u64 {
        self.generation
    }

    pub(crate) fn runs(&self) -> usize {
        self.runs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unchanged_inputs_are_served_from_cache() {
        let mut stage = Derived::new(2_u32, |n| n * 10);
        assert!(!stage.refresh(2, |n| n * 10));
        assert_eq!(stage.runs(), 1);
        assert_eq!(*stage.output(), 20);
    }

    #[test]
    fn generation_moves_only_when_output_changes() {
        let mut stage = Derived::new(3_i32, |n| n.abs());
        assert!(stage.refresh(-3, |n| n.abs()));
        assert_eq!(stage.generation(), 0, "same output keeps generation");
        assert!(stage.refresh(4, |n| n.abs()));
        assert_eq!(stage.generation(), 1);
        assert_eq!(stage.runs(), 3);
    }
}
