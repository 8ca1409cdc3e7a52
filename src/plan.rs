//! Assembling the descriptive layout plan handed to the rendering layer.
//!
//! The core never touches a DOM or a clipboard. Its output is a
//! [`DeckPlan`]: the deck header, one or two columns of rendered sections,
//! and the canonical export text. The host environment materializes the
//! plan however it likes (the reference embedding builds styled HTML and
//! wires the export text to a copy button).
//!
//! A plan is built once per host element: the element's text content is the
//! decklist, and the optional title/href attributes flow through unchanged.

use serde::{Deserialize, Serialize};

use crate::deck::{CardEntry, Deck, export_deck, parse_deck};
use crate::influence::Influence;
use crate::layout::{Sections, categorize, column_split_index, resolve_influence, sort_section};
use crate::library::Library;

/// One render invocation: the raw decklist plus the host element's optional
/// display attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlanRequest {
    /// Raw decklist text (the host element's text content).
    pub decklist: String,
    /// Optional deck title to display in the header.
    pub title: Option<String>,
    /// Optional link target for the title.
    pub href: Option<String>,
}

/// Header block of the plan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanHeader {
    pub title: Option<String>,
    pub href: Option<String>,
}

/// Cost display for one card: the power value (when positive) and the icon
/// count per faction, listed in display order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostDisplay {
    /// Shown only when greater than zero.
    pub power: Option<u32>,
    pub fire: u32,
    pub time: u32,
    pub justice: u32,
    pub primal: u32,
    pub shadow: u32,
}

impl From<Influence> for CostDisplay {
    fn from(influence: Influence) -> Self {
        Self {
            power: (influence.power > 0).then_some(influence.power),
            fire: influence.fire,
            time: influence.time,
            justice: influence.justice,
            primal: influence.primal,
            shadow: influence.shadow,
        }
    }
}

/// One card line within a section, enriched from the library when possible.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardLine {
    pub count: String,
    pub name: String,
    pub id: String,
    /// Rarity class; empty when the library has no entry or no rarity.
    pub rarity: String,
    /// Details-page link; present only when the library resolves the id.
    pub link: Option<String>,
    /// Hover-preview image; present only when the library resolves the id.
    pub image: Option<String>,
    /// Cost display; absent for unknown ids and malformed cost strings.
    pub cost: Option<CostDisplay>,
}

/// A section header plus its ordered card lines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionBlock {
    /// Section name (Units, Spells, Attachments, Other, Power, Market).
    pub name: String,
    /// Sum of the card counts in this section, for the header.
    pub count: u64,
    pub cards: Vec<CardLine>,
}

/// One display column of section blocks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnPlan {
    pub sections: Vec<SectionBlock>,
}

/// The complete descriptive layout plan for one decklist.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckPlan {
    pub header: PlanHeader,
    /// One or two columns, in display order.
    pub columns: Vec<ColumnPlan>,
    /// Canonical export text for the clipboard collaborator.
    pub export: String,
}

/// Builds the layout plan for one render request.
///
/// Runs parse, categorize, per-section sort, and the column balance, then
/// flattens everything into plain data. Synchronous and free of I/O; the
/// library must already be loaded.
#[must_use]
pub fn build_plan(request: &PlanRequest, library: &Library) -> DeckPlan {
    let deck = parse_deck(&request.decklist);
    build_plan_for_deck(&deck, request, library)
}

fn build_plan_for_deck(deck: &Deck, request: &PlanRequest, library: &Library) -> DeckPlan {
    let sections: Sections = categorize(deck, library);
    let ordered = sections.in_display_order();

    let sizes: Vec<usize> = ordered.iter().map(|(_, cards)| cards.len()).collect();
    let split = column_split_index(&sizes);

    let mut columns = vec![ColumnPlan::default()];
    for (index, (name, cards)) in ordered.iter().enumerate() {
        if split == Some(index) {
            columns.push(ColumnPlan::default());
        }

        if cards.is_empty() {
            continue;
        }

        let block = build_section_block(name, cards, library);
        if let Some(column) = columns.last_mut() {
            column.sections.push(block);
        }
    }

    DeckPlan {
        header: PlanHeader {
            title: request.title.clone(),
            href: request.href.clone(),
        },
        columns,
        export: export_deck(deck),
    }
}

fn build_section_block(name: &str, cards: &[CardEntry], library: &Library) -> SectionBlock {
    let sorted = sort_section(cards, library);
    let count = sorted.iter().map(CardEntry::quantity).sum();

    let lines = sorted
        .iter()
        .map(|card| {
            let info = library.get(&card.id);
            CardLine {
                count: card.count.clone(),
                name: card.name.clone(),
                id: card.id.clone(),
                rarity: info.map(|i| i.rarity.clone()).unwrap_or_default(),
                link: info.map(|i| i.link.clone()),
                image: info.map(|i| i.image.clone()),
                cost: resolve_influence(card, library).map(CostDisplay::from),
            }
        })
        .collect();

    SectionBlock {
        name: name.to_string(),
        count,
        cards: lines,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::library::CardInfo;

    fn library_fixture() -> Library {
        let mut library = Library::new();
        library.insert(
            "Set1 #8",
            CardInfo {
                name: "Torch".to_string(),
                cost: "1F".to_string(),
                rarity: "common".to_string(),
                kind: "spell".to_string(),
                image: "https://cards.example/torch.png".to_string(),
                link: "https://cards.example/details/1-8/".to_string(),
            },
        );
        library.insert(
            "Set1 #1",
            CardInfo {
                name: "Fire Sigil".to_string(),
                kind: "power".to_string(),
                ..CardInfo::default()
            },
        );
        library.insert(
            "Set1 #2",
            CardInfo {
                name: "Grenadin Drone".to_string(),
                cost: "1F".to_string(),
                kind: "unit".to_string(),
                ..CardInfo::default()
            },
        );
        library
    }

    #[test]
    fn test_build_plan_sections_and_header() {
        let request = PlanRequest {
            decklist: "2 Torch (Set1 #8)\n3 Grenadin Drone (Set1 #2)\n12 Fire Sigil (Set1 #1)\n"
                .to_string(),
            title: Some("Burn Queen".to_string()),
            href: Some("https://example.com/decks/1".to_string()),
        };

        let plan = build_plan(&request, &library_fixture());

        assert_eq!(plan.header.title.as_deref(), Some("Burn Queen"));
        assert_eq!(plan.header.href.as_deref(), Some("https://example.com/decks/1"));

        let names: Vec<_> = plan
            .columns
            .iter()
            .flat_map(|c| c.sections.iter().map(|s| s.name.as_str()))
            .collect();
        assert_eq!(names, vec!["Units", "Spells", "Power"]);
    }

    #[test]
    fn test_build_plan_section_counts_sum_quantities() {
        let request = PlanRequest {
            decklist: "2 Torch (Set1 #8)\n12 Fire Sigil (Set1 #1)\n".to_string(),
            ..PlanRequest::default()
        };

        let plan = build_plan(&request, &library_fixture());
        let all_sections: Vec<_> = plan.columns.iter().flat_map(|c| &c.sections).collect();

        let spells = all_sections.iter().find(|s| s.name == "Spells").unwrap();
        assert_eq!(spells.count, 2);
        let power = all_sections.iter().find(|s| s.name == "Power").unwrap();
        assert_eq!(power.count, 12);
    }

    #[test]
    fn test_build_plan_enriches_known_cards() {
        let request = PlanRequest {
            decklist: "2 Torch (Set1 #8)\n".to_string(),
            ..PlanRequest::default()
        };

        let plan = build_plan(&request, &library_fixture());
        let line = &plan.columns[0].sections[0].cards[0];

        assert_eq!(line.rarity, "common");
        assert_eq!(line.link.as_deref(), Some("https://cards.example/details/1-8/"));
        let cost = line.cost.unwrap();
        assert_eq!(cost.power, Some(1));
        assert_eq!(cost.fire, 1);
    }

    #[test]
    fn test_build_plan_degrades_unknown_cards() {
        let request = PlanRequest {
            decklist: "1 Mystery Card (Set9 #999)\n".to_string(),
            ..PlanRequest::default()
        };

        let plan = build_plan(&request, &library_fixture());
        let all_sections: Vec<_> = plan.columns.iter().flat_map(|c| &c.sections).collect();
        let other = all_sections.iter().find(|s| s.name == "Other").unwrap();
        let line = &other.cards[0];

        assert_eq!(line.rarity, "");
        assert!(line.link.is_none());
        assert!(line.cost.is_none());
    }

    #[test]
    fn test_build_plan_zero_cost_power_hidden() {
        let request = PlanRequest {
            decklist: "12 Fire Sigil (Set1 #1)\n".to_string(),
            ..PlanRequest::default()
        };

        let plan = build_plan(&request, &library_fixture());
        let all_sections: Vec<_> = plan.columns.iter().flat_map(|c| &c.sections).collect();
        let power = all_sections.iter().find(|s| s.name == "Power").unwrap();

        // Free cards still get a cost display, with no power number shown.
        let cost = power.cards[0].cost.unwrap();
        assert_eq!(cost.power, None);
    }

    #[test]
    fn test_build_plan_empty_input_two_empty_columns() {
        let plan = build_plan(&PlanRequest::default(), &Library::new());

        assert_eq!(plan.columns.len(), 2);
        assert!(plan.columns.iter().all(|c| c.sections.is_empty()));
        assert_eq!(plan.export, "");
    }

    #[test]
    fn test_build_plan_never_more_than_two_columns() {
        let decklist = "4 Grenadin Drone (Set1 #2)\n\
                        2 Torch (Set1 #8)\n\
                        12 Fire Sigil (Set1 #1)\n\
                        ---MARKET---\n\
                        1 Torch (Set1 #8)\n";
        let request = PlanRequest {
            decklist: decklist.to_string(),
            ..PlanRequest::default()
        };

        let plan = build_plan(&request, &library_fixture());
        assert!(plan.columns.len() <= 2);
    }

    #[test]
    fn test_build_plan_market_section_lands_in_plan() {
        let request = PlanRequest {
            decklist: "2 Torch (Set1 #8)\n---MARKET---\n1 Torch (Set1 #8)\n".to_string(),
            ..PlanRequest::default()
        };

        let plan = build_plan(&request, &library_fixture());
        let names: Vec<_> = plan
            .columns
            .iter()
            .flat_map(|c| c.sections.iter().map(|s| s.name.as_str()))
            .collect();
        assert!(names.contains(&"Market"));
    }

    #[test]
    fn test_build_plan_export_round_trips() {
        let decklist = "2 Torch (Set1 #8)\n\
                        --------------MARKET---------------\n\
                        1 Torch (Set1 #8)\n";
        let request = PlanRequest {
            decklist: decklist.to_string(),
            ..PlanRequest::default()
        };

        let plan = build_plan(&request, &library_fixture());
        assert_eq!(plan.export, decklist);
    }

    #[test]
    fn test_deck_plan_serde_round_trip() {
        let request = PlanRequest {
            decklist: "2 Torch (Set1 #8)\n12 Fire Sigil (Set1 #1)\n".to_string(),
            title: Some("Mono Fire".to_string()),
            href: None,
        };

        let plan = build_plan(&request, &library_fixture());
        let json = serde_json::to_string(&plan).unwrap();
        let reparsed: DeckPlan = serde_json::from_str(&json).unwrap();
        assert_eq!(plan, reparsed);
    }
}
