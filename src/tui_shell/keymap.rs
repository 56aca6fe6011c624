use std::collections::HashMap;
use std::hash::Hash;

use crossterm::event::KeyCode;

/// One row of a screen's static key table. `None` focus applies everywhere on
/// the screen unless a focus-specific row for the same key exists.
pub(in crate::tui_shell) type Binding<F, A> = (Option<F>, KeyCode, A);

#[derive(Debug)]
pub(in crate::tui_shell) struct KeyTable<F, A> {
    map: HashMap<(Option<F>, KeyCode), A>,
}

impl<F, A> KeyTable<F, A>
where
    F: Copy + Eq + Hash,
    A: Copy,
{
    pub(in crate::tui_shell) fn from_bindings(bindings: &[Binding<F, A>]) -> Self {
        let mut map = HashMap::with_capacity(bindings.len());
        for (focus, key, action) in bindings {
            map.insert((*focus, *key), *action);
        }
        Self { map }
    }

    pub(in crate::tui_shell) fn lookup(&self, focus: F, key: KeyCode) -> Option<A> {
        self.map
            .get(&(Some(focus), key))
            .or_else(|| self.map.get(&(None, key)))
            .copied()
    }

    pub(in crate::tui_shell) fn len(&self) -> usize {
        self.map.len()
    }
}

#[cfg(test)]
#[path = "../tests/tui_shell/keymap_tests.rs"]
mod tests;
