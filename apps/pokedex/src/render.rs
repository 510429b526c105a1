//! Text rendering of the listing state. Pure functions of `ListingState`.

use shared::domain::{CreatureRecord, ListingState};

pub const LOADING_TEXT: &str = "Loading Pokémon...";
pub const EMPTY_TEXT: &str = "No Pokémon found.";

pub fn render_listing(state: &ListingState) -> String {
    if state.is_loading {
        return LOADING_TEXT.to_string();
    }
    if state.records.is_empty() {
        return EMPTY_TEXT.to_string();
    }

    state
        .records
        .iter()
        .map(render_card)
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_card(record: &CreatureRecord) -> String {
    let badges: Vec<String> = record
        .types
        .iter()
        .map(|kind| format!("[{kind}:{}]", type_badge_color(kind)))
        .collect();
    format!(
        "#{} {}\n  artwork: {}\n  types: {}\n",
        record.id.0,
        capitalize(&record.name),
        record.image_url.as_deref().unwrap_or("(no artwork)"),
        badges.join(" ")
    )
}

pub fn type_badge_color(kind: &str) -> &'static str {
    match kind {
        "grass" => "green",
        "fire" => "red",
        "water" => "blue",
        _ => "gray",
    }
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
