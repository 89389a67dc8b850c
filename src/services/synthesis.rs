//! Deterministic response synthesis.
//!
//! Builds the conversational summary from the user's message and the raw
//! events that were retrieved. Pure text generation: no state, no I/O, and
//! the same inputs always produce the same string.

use crate::models::RawEvent;
use crate::services::lexicon;

const EARTHQUAKE_NOTICE: &str = "I understand you're asking about earthquakes, but unfortunately the EONET (Earth Observatory Natural Event Tracker) API doesn't currently provide earthquake data.

EONET focuses on events that can be observed from space, such as:
• Wildfires
• Volcanic eruptions
• Severe storms
• Floods
• Icebergs
• Dust storms

For earthquake information, I'd recommend checking:
• USGS Earthquake Hazards Program (earthquake.usgs.gov)
• EMSC (European-Mediterranean Seismological Centre)
• Local geological survey websites

Would you like to explore other natural events that are available, such as recent wildfires or volcanic activity?";

const NO_EVENTS: &str = "I couldn't find any recent natural events matching your query. Try asking about wildfires, volcanoes, floods, storms, or other natural phenomena.";

/// Synthesize the summary for `message` given the retrieved `events`.
/// Always returns a non-empty string.
pub fn synthesize(message: &str, events: &[RawEvent]) -> String {
    // Seismic data is simply not in the catalog; say so up front no matter
    // what was retrieved.
    if message.to_lowercase().contains("earthquake") {
        return EARTHQUAKE_NOTICE.to_string();
    }

    if events.is_empty() {
        return NO_EVENTS.to_string();
    }

    let counts = tally_by_category(events);
    let requested = lexicon::detect_category(message);

    if let Some(category) = requested {
        if let Some(count) = counts
            .iter()
            .find(|(title, _)| title.as_str() == category.as_str())
            .map(|(_, count)| *count)
        {
            if count == 0 {
                return format!(
                    "I searched for recent {category} but didn't find any active events in the past week. This could mean there are no current {category} being tracked by NASA's EONET system, or they may have been resolved recently.",
                    category = category.as_str()
                );
            }
            return format!(
                "I found {} recent {} event{} for you. Check out the event cards below for detailed information about each one.",
                count,
                category.as_str(),
                if count > 1 { "s" } else { "" }
            );
        }
    }

    // General or mixed query.
    let total = events.len();
    let titles: Vec<&str> = counts
        .iter()
        .filter(|(_, count)| *count > 0)
        .map(|(title, _)| title.as_str())
        .collect();

    if titles.len() == 1 {
        format!(
            "I found {} recent {} event{} for you. Check out the event cards below for more details.",
            total,
            titles[0],
            if total > 1 { "s" } else { "" }
        )
    } else {
        format!(
            "I found {} recent natural events across {} categories: {}. Check out the event cards below for more details.",
            total,
            titles.len(),
            titles.join(", ")
        )
    }
}

/// Count events per lower-cased category title. An event tagged with N
/// categories increments N counters. First-seen order is preserved so the
/// joined category list is stable.
fn tally_by_category(events: &[RawEvent]) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for event in events {
        for category in &event.categories {
            let title = category.title.clone().unwrap_or_default().to_lowercase();
            match counts.iter_mut().find(|(existing, _)| *existing == title) {
                Some((_, count)) => *count += 1,
                None => counts.push((title, 1)),
            }
        }
    }
    counts
}
