//! Static track catalogue and hover-driven layout for the tracks page.

#[cfg(test)]
#[path = "tracks_test.rs"]
mod tracks_test;

/// Delay before the track panels drop in.
pub const REVEAL_DELAY_MS: u32 = 500;

/// Per-panel stagger for the drop-in animation.
pub const DROP_STAGGER_MS: u32 = 100;

/// Text shown in the content column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TrackContent {
    pub heading: &'static str,
    pub description: &'static str,
    pub detail: &'static str,
    /// Highlighted trailing sentence appended to `detail`.
    pub emphasis: Option<&'static str>,
}

/// One competition track.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Track {
    pub id: u8,
    pub title: &'static str,
    pub image: &'static str,
    pub content: TrackContent,
}

pub const TRACKS: [Track; 4] = [
    Track {
        id: 1,
        title: "code red",
        image: "/assets/tracks/red.jpeg",
        content: TrackContent {
            heading: "genetic espionage and bio-security",
            description: "discover the power of genes to shape the future",
            detail: "step into the shadowy world of genetic espionage, where DNA is both the weapon and the code to crack. from designer pathogens to bio-surveillance, students must decode threats and defend the future of humanity, one gene at a time.",
            emphasis: None,
        },
    },
    Track {
        id: 2,
        title: "catalyst",
        image: "/assets/tracks/blue.jpeg",
        content: TrackContent {
            heading: "designing health for a world on edge",
            description: "from idea to impact: design the future of preventive health",
            detail: "in a world racing to prevent the next crisis, students will prototype bold biotech and ai-driven solutions that keep people healthy before they fall sick. from gene-based diagnostics to predictive wearables, they'll turn cutting-edge science into startup ideas that reimagine public health from the ground up.",
            emphasis: None,
        },
    },
    Track {
        id: 3,
        title: "UNwell",
        image: "/assets/tracks/yellow.jpeg",
        content: TrackContent {
            heading: "MUN-style simulation",
            description: "who controls the crisis: the people, or the profits?",
            detail: "from ultra-processed foods to addictive additives, delegates navigate a world where public health policy is quietly shaped by industry influence. students will debate regulations, confront lobbying, and rethink the balance between national welfare and global market power.",
            emphasis: None,
        },
    },
    Track {
        id: 4,
        title: "grey matter",
        image: "/assets/tracks/green.jpeg",
        content: TrackContent {
            heading: "ethics in a post-pandemic world",
            description: "the ethics of mandatory genomic surveillance in a post-pandemic world",
            detail: "in the aftermath of a global pandemic, the world turns to biotech to prevent the next one, but at what cost? students will debate sweeping policies like mandatory DNA screening, grappling with the ethical trade-offs between collective safety and personal freedom.",
            emphasis: None,
        },
    },
];

pub const DEFAULT_CONTENT: TrackContent = TrackContent {
    heading: "choose the track that excites you.",
    description: "maybe you wanna build an app.",
    detail: "no idea is too big, or too small. we don't care if you're growing organs in the dish, or engineering glow in the dark bananas.",
    emphasis: Some("pursue your passions."),
};

/// Content for the hovered track, or the default block.
#[must_use]
pub fn content_for(hovered: Option<u8>) -> TrackContent {
    hovered
        .and_then(|id| TRACKS.iter().find(|t| t.id == id))
        .map_or(DEFAULT_CONTENT, |t| t.content)
}

/// CSS `flex-basis` for a panel given the current hover.
#[must_use]
pub fn flex_basis(track_id: u8, hovered: Option<u8>) -> &'static str {
    match hovered {
        None => "25%",
        Some(id) if id == track_id => "60%",
        Some(_) => "13.33%",
    }
}

/// Animation delay for the panel at `index`.
#[must_use]
pub fn drop_delay_ms(index: usize) -> u32 {
    u32::try_from(index).unwrap_or(u32::MAX).saturating_mul(DROP_STAGGER_MS)
}
