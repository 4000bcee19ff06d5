//! Host-owned interaction state.
//!
//! Templates are shared and immutable. Anything that varies per row, such
//! as which rating star the pointer is over, lives here and is keyed by
//! the host's row key plus the template id.

use std::collections::HashMap;
use std::hash::Hash;

use cellsense_core::{Interaction, Node};
use serde::Serialize;

use crate::id::TemplateId;
use crate::rating::RatingTemplate;

/// Hover position for one rating on one row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct HoverState {
    position: Option<u32>,
}

impl HoverState {
    pub fn get(&self) -> Option<u32> {
        self.position
    }

    pub fn set(&mut self, position: u32) {
        self.position = Some(position);
    }

    pub fn clear(&mut self) {
        self.position = None;
    }

    pub fn is_idle(&self) -> bool {
        self.position.is_none()
    }
}

/// Hover state for every (row, template) pair the host has seen.
///
/// One instance per grid. Rows without an active hover are not stored.
#[derive(Debug)]
pub struct InteractionState<K> {
    rows: HashMap<K, HashMap<TemplateId, HoverState>>,
}

impl<K> Default for InteractionState<K> {
    fn default() -> Self {
        Self {
            rows: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash + Clone> InteractionState<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hover(&self, row: &K, template: TemplateId) -> Option<u32> {
        self.rows
            .get(row)
            .and_then(|states| states.get(&template))
            .and_then(HoverState::get)
    }

    /// Feed an interaction reported by the host to `template` for the row
    /// `row`. Returns the picked value on `Select`.
    pub fn dispatch<T>(
        &mut self,
        row: &K,
        template: &RatingTemplate<T>,
        item: &T,
        interaction: Interaction,
    ) -> Option<u32> {
        let mut state = self
            .rows
            .get(row)
            .and_then(|states| states.get(&template.id()))
            .copied()
            .unwrap_or_default();

        let picked = template.handle(item, interaction, &mut state);
        self.store(row, template.id(), state);
        picked
    }

    /// Render `template` for `item` with this row's hover position.
    pub fn render<T>(&self, row: &K, template: &RatingTemplate<T>, item: &T) -> Node {
        template.render_with_hover(item, self.hover(row, template.id()))
    }

    /// Drop everything held for `row`, e.g. when it scrolls out of view.
    pub fn forget(&mut self, row: &K) {
        self.rows.remove(row);
    }

    pub fn clear(&mut self) {
        self.rows.clear();
    }

    /// Number of rows with an active hover.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn store(&mut self, row: &K, template: TemplateId, state: HoverState) {
        if state.is_idle() {
            if let Some(states) = self.rows.get_mut(row) {
                states.remove(&template);
                if states.is_empty() {
                    self.rows.remove(row);
                }
            }
        } else {
            self.rows
                .entry(row.clone())
                .or_default()
                .insert(template, state);
        }
    }
}
