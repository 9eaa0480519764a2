//! Static content catalog for the pitch deck.
//!
//! Everything here mirrors the data tables of the SportPass partner
//! landing page. The catalog is fixed at build time and treated as
//! already validated; a broken `image_ref` is a content bug to fix in
//! the repo, not a runtime condition to handle.

use serde::Serialize;

use crate::state::rotator::DisplayItem;
use crate::state::Keyed;

/// One entry of the interface gallery: a screen plus its pitch copy.
#[derive(Debug, Clone, Serialize)]
pub struct InterfacePanel {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub image_ref: String,
    pub points: Vec<String>,
}

impl Keyed for InterfacePanel {
    fn key(&self) -> &str {
        &self.id
    }
}

/// A partner club as shown in the catalog section.
#[derive(Debug, Clone, Serialize)]
pub struct Club {
    pub slug: String,
    pub name: String,
    pub branch: String,
    pub city: String,
    pub address: String,
    pub entry_price: u32,
    pub open_hours: String,
    pub highlights: Vec<String>,
}

/// A numbered how-it-works step for club owners.
#[derive(Debug, Clone)]
pub struct Step {
    pub number: &'static str,
    pub title: &'static str,
    pub text: &'static str,
}

#[derive(Debug, Clone)]
pub struct BenefitCard {
    pub title: &'static str,
    pub text: &'static str,
}

/// A label/value pair on the owner dashboard preview.
#[derive(Debug, Clone)]
pub struct Metric {
    pub label: &'static str,
    pub value: &'static str,
}

/// A sample check-in row on the owner dashboard preview.
#[derive(Debug, Clone)]
pub struct EntryRow {
    pub member: &'static str,
    pub branch: &'static str,
    pub time: &'static str,
    pub amount: &'static str,
}

/// The rotating hero screens, in display order.
pub fn hero_screens() -> Vec<DisplayItem> {
    vec![
        DisplayItem::new(
            "home",
            "Home",
            "screenshots/shot_current.png",
            "A fast home screen that puts payment, QR and the map right in front of the member.",
        ),
        DisplayItem::new(
            "checkin",
            "QR",
            "screenshots/checkin.png",
            "Instant entry by scanning, no friction, tracked the moment it happens.",
        ),
        DisplayItem::new(
            "wallet",
            "Wallet",
            "screenshots/shot_wallet_try1.png",
            "A clear balance and history build trust and cut collection disputes.",
        ),
        DisplayItem::new(
            "map",
            "Map",
            "screenshots/shot_map_try1.png",
            "Showing up on the map brings in new members who train nearby.",
        ),
    ]
}

/// The interface gallery catalog.
pub fn interface_panels() -> Vec<InterfacePanel> {
    let panel = |id: &str, title: &str, subtitle: &str, image_ref: &str, points: [&str; 3]| {
        InterfacePanel {
            id: id.to_string(),
            title: title.to_string(),
            subtitle: subtitle.to_string(),
            image_ref: image_ref.to_string(),
            points: points.iter().map(|p| p.to_string()).collect(),
        }
    };

    vec![
        panel(
            "home",
            "Quick home screen",
            "Balance and direct actions on the first screen",
            "screenshots/shot_current.png",
            [
                "Prominent check-in button",
                "One tap to the club map",
                "Clean layout for daily use",
            ],
        ),
        panel(
            "qr",
            "QR check-in screen",
            "Instant scan with a manual-entry fallback",
            "screenshots/checkin.png",
            [
                "Guides the member straight through",
                "Distraction-free focus view",
                "Ready to run at the door",
            ],
        ),
        panel(
            "wallet",
            "Wallet and balance history",
            "Full transparency for every transaction",
            "screenshots/shot_wallet_try1.png",
            [
                "Current balance up front",
                "Top-up and spend history",
                "Easy payment tracking",
            ],
        ),
        panel(
            "scan",
            "Full home overview",
            "Balance and actions together on one screen",
            "screenshots/home.png",
            [
                "Balance state at a glance",
                "Quick actions within reach",
                "Direct navigation to key tasks",
            ],
        ),
    ]
}

/// Partner clubs shown in the catalog section and the `--clubs` output.
pub fn clubs() -> Vec<Club> {
    let club = |slug: &str,
                name: &str,
                branch: &str,
                city: &str,
                address: &str,
                entry_price: u32,
                open_hours: &str,
                highlights: [&str; 3]| Club {
        slug: slug.to_string(),
        name: name.to_string(),
        branch: branch.to_string(),
        city: city.to_string(),
        address: address.to_string(),
        entry_price,
        open_hours: open_hours.to_string(),
        highlights: highlights.iter().map(|h| h.to_string()).collect(),
    };

    vec![
        club(
            "olympia-mazzeh",
            "Olympia Gym",
            "Mazzeh branch",
            "Damascus",
            "Mazzeh, near the governorate square",
            8000,
            "8:00 – 23:00",
            ["Weights and cardio", "Air-conditioned hall", "Fast QR entry"],
        ),
        club(
            "golden-abu-rummaneh",
            "Golden Gym",
            "Abu Rummaneh branch",
            "Damascus",
            "Abu Rummaneh, Baghdad street",
            12000,
            "7:00 – 24:00",
            ["Weights and pool", "Cardio area", "Sauna"],
        ),
        club(
            "peak-mezzeh-villas",
            "Peak Fitness",
            "Western Villas branch",
            "Damascus",
            "Mazzeh Western Villas, near the schools",
            10000,
            "9:00 – 22:30",
            ["Personal training", "CrossFit", "Flexible day passes"],
        ),
    ]
}

pub fn find_club_by_slug(slug: &str) -> Option<Club> {
    clubs().into_iter().find(|club| club.slug == slug)
}

/// Owner-facing selling points listed under the hero headline.
pub fn owner_points() -> Vec<&'static str> {
    vec![
        "Extra members with zero risk",
        "Keep your monthly subscriptions as they are",
        "You receive 80% of every visit",
        "No monthly fees",
        "A clear dashboard for your numbers",
    ]
}

pub fn steps() -> Vec<Step> {
    vec![
        Step {
            number: "01",
            title: "Register your club",
            text: "Send the basic club details; the team reviews quickly and sets up the account.",
        },
        Step {
            number: "02",
            title: "Add branches and set the base price",
            text: "Pick the branches and the entry price per branch from a simple admin panel.",
        },
        Step {
            number: "03",
            title: "Print the QR at the door",
            text: "Every SportPass visit is recorded automatically and the club share shows up instantly.",
        },
    ]
}

pub fn benefits() -> Vec<BenefitCard> {
    vec![
        BenefitCard {
            title: "No monthly subscription",
            text: "Start with zero fixed cost; the platform takes its share only on real visits.",
        },
        BenefitCard {
            title: "Additional entries only",
            text: "SportPass does not replace your system; it adds a new member segment on top.",
        },
        BenefitCard {
            title: "Fast QR at the door",
            text: "Each branch gets a clear QR code for quick entry without queues.",
        },
        BenefitCard {
            title: "Full financial transparency",
            text: "Every entry is recorded; you see visit counts and your share in real time.",
        },
        BenefitCard {
            title: "A clear earnings dashboard",
            text: "Simple reports show your busiest branches and daily peak hours.",
        },
        BenefitCard {
            title: "Built for the local market",
            text: "Pricing and UX designed around how local sports clubs actually operate.",
        },
    ]
}

/// Early-partner program points for the pilot-trust section.
pub fn trust_points() -> Vec<&'static str> {
    vec![
        "A three-month founding-partner program",
        "A limited number of clubs at launch",
        "Manual review and approval for quality",
        "A direct operations support team during the pilot",
        "Built specifically for the local market",
    ]
}

/// The three-month pilot timeline, month by month.
pub fn pilot_timeline() -> Vec<Metric> {
    vec![
        Metric {
            label: "Month 1",
            value: "Set up accounts and branches",
        },
        Metric {
            label: "Month 2",
            value: "Live operation and performance tracking",
        },
        Metric {
            label: "Month 3",
            value: "Review results and plan the expansion",
        },
    ]
}

/// Member-facing selling points for the for-users section.
pub fn user_points() -> Vec<&'static str> {
    vec![
        "Pay only when you train",
        "A clear digital wallet",
        "Discover clubs on the map",
        "Scan the QR and walk in",
    ]
}

pub fn owner_metrics() -> Vec<Metric> {
    vec![
        Metric {
            label: "Visits today",
            value: "23",
        },
        Metric {
            label: "Gross income today",
            value: "212,000 SYP",
        },
        Metric {
            label: "Club share (80%)",
            value: "169,600 SYP",
        },
    ]
}

pub fn entries_today() -> Vec<EntryRow> {
    vec![
        EntryRow {
            member: "Member #A12",
            branch: "Mazzeh",
            time: "10:14",
            amount: "8,000 SYP",
        },
        EntryRow {
            member: "Member #B39",
            branch: "Mazzeh",
            time: "12:32",
            amount: "8,000 SYP",
        },
        EntryRow {
            member: "Member #C01",
            branch: "Abu Rummaneh",
            time: "17:05",
            amount: "12,000 SYP",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hero_screens_have_unique_ids() {
        let screens = hero_screens();
        assert_eq!(screens.len(), 4);
        for (i, a) in screens.iter().enumerate() {
            for b in &screens[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn club_lookup_by_slug() {
        let club = find_club_by_slug("golden-abu-rummaneh").unwrap();
        assert_eq!(club.name, "Golden Gym");
        assert!(find_club_by_slug("no-such-club").is_none());
    }

    #[test]
    fn catalogs_are_non_empty() {
        assert!(!interface_panels().is_empty());
        assert!(!clubs().is_empty());
        assert!(!steps().is_empty());
        assert!(!benefits().is_empty());
        assert!(!trust_points().is_empty());
        assert!(!user_points().is_empty());
        assert_eq!(pilot_timeline().len(), 3);
    }
}
