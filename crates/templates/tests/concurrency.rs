//! Shared templates rendered from many threads with host-owned hover state.

use std::sync::{Arc, Mutex};
use std::thread;

use cellsense_core::{Interaction, TemplateConfig};
use cellsense_templates::{InteractionState, RatingTemplate, TemplateDefinition};

#[derive(Debug, Clone)]
struct Row {
    id: usize,
    score: f64,
}

fn rows() -> Vec<Row> {
    (0..64)
        .map(|id| Row {
            id,
            score: (id % 6) as f64,
        })
        .collect()
}

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn templates_are_send_and_sync() {
    assert_send_sync::<RatingTemplate<Row>>();
    assert_send_sync::<TemplateDefinition<Row>>();
}

#[test]
fn parallel_renders_match_sequential_ones() {
    let config = TemplateConfig::default();
    let template = RatingTemplate::new(&config, |r: &Row| r.score).interactive(true);
    let rows = rows();
    let expected: Vec<_> = rows.iter().map(|r| template.render(r)).collect();

    let rendered: Vec<_> = thread::scope(|s| {
        let template = &template;
        let handles: Vec<_> = rows
            .chunks(16)
            .map(|chunk| {
                s.spawn(move || chunk.iter().map(|r| template.render(r)).collect::<Vec<_>>())
            })
            .collect();
        handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect()
    });

    assert_eq!(rendered, expected);
}

#[test]
fn hover_on_one_row_does_not_leak_into_others() {
    let config = TemplateConfig::default();
    let picked = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&picked);
    let template = RatingTemplate::new(&config, |r: &Row| r.score)
        .interactive(true)
        .on_change(move |r: &Row, v| sink.lock().unwrap().push((r.id, v)));
    let rows = rows();

    // Each worker owns the interaction state for its own rows.
    let states: Vec<InteractionState<usize>> = thread::scope(|s| {
        let handles: Vec<_> = rows
            .chunks(16)
            .map(|chunk| {
                let template = &template;
                s.spawn(move || {
                    let mut state = InteractionState::new();
                    for row in chunk.iter().filter(|r| r.id % 2 == 0) {
                        state.dispatch(&row.id, template, row, Interaction::Hover(5));
                    }
                    state
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for (state, chunk) in states.iter().zip(rows.chunks(16)) {
        for row in chunk {
            let node = state.render(&row.id, &template, row);
            let hovered = node.find_by_class("cs-rating-hover").len();
            if row.id % 2 == 0 {
                assert_eq!(hovered, 5, "row {}", row.id);
            } else {
                assert_eq!(hovered, 0, "row {}", row.id);
                assert_eq!(node, template.render(row));
            }
        }
    }

    let mut state = InteractionState::new();
    state.dispatch(&3, &template, &rows[3], Interaction::Select(4));
    assert_eq!(*picked.lock().unwrap(), [(3, 4)]);
}
