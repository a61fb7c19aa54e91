//! Human-readable order text.

use crate::cart::{CartState, LineItem};

fn summary_line(item: &LineItem) -> String {
    match item.size {
        Some(size) => format!(
            "{}x {} ({}) - {}",
            item.quantity,
            item.name,
            size,
            item.line_total().display()
        ),
        None => format!("{}x {} - {}", item.quantity, item.name, item.line_total().display()),
    }
}

/// One line per item in cart order, a blank line, then `Total: $<total>`.
///
/// Returns `None` for an empty cart.
pub fn order_summary(state: &CartState) -> Option<String> {
    if state.is_empty() {
        return None;
    }

    let lines: Vec<String> = state.items.iter().map(summary_line).collect();
    Some(format!("{}\n\nTotal: {}", lines.join("\n"), state.total.display()))
}

/// The full message sent through the hand-off link: greeting, blank line, summary.
pub fn order_message(greeting: &str, state: &CartState) -> Option<String> {
    order_summary(state).map(|summary| format!("{}\n\n{}", greeting, summary))
}
