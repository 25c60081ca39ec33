use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppreciationItem {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

pub const APPRECIATION_ITEMS: [AppreciationItem; 6] = [
    AppreciationItem {
        id: "eyes",
        label: "Your Eyes",
        description: "They feel honest. Like they see right through me, but never in a way that scares me. More like... you understand before I even explain.",
    },
    AppreciationItem {
        id: "smile",
        label: "Your Smile",
        description: "It sneaks up on me. One second I'm fine, the next I'm melting. It makes hard days feel lighter without even trying.",
    },
    AppreciationItem {
        id: "voice",
        label: "Your Voice",
        description: "It calms me. Even when you're not saying anything important, I just like hearing you exist on the other side.",
    },
    AppreciationItem {
        id: "mind",
        label: "Your Mind",
        description: "It's beautiful. The way you think, the way you care, the way you see the world deeper than most people do. I get lost there sometimes, in a good way.",
    },
    AppreciationItem {
        id: "hands",
        label: "Your Hands",
        description: "They feel safe. Whether you're holding mine or just resting them near me, they make me feel like everything's gonna be okay.",
    },
    AppreciationItem {
        id: "cheeks",
        label: "Your Cheeks",
        description: "They're my weakness. Especially when you smile. I catch myself wanting to touch them, just to make sure that moment is real.",
    },
];

/// Which appreciation items have been opened, and whether the final reveal ran.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppreciationProgress {
    expanded: Option<&'static str>,
    viewed: HashSet<&'static str>,
    revealed: bool,
}

impl AppreciationProgress {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn expanded(&self) -> Option<&'static str> {
        self.expanded
    }

    #[must_use]
    pub fn is_viewed(&self, id: &str) -> bool {
        self.viewed.contains(id)
    }

    #[must_use]
    pub fn viewed_count(&self) -> usize {
        self.viewed.len()
    }

    #[must_use]
    pub fn all_viewed(&self) -> bool {
        APPRECIATION_ITEMS
            .iter()
            .all(|item| self.viewed.contains(item.id))
    }

    #[must_use]
    pub fn revealed(&self) -> bool {
        self.revealed
    }

    #[must_use]
    pub fn is_satisfied(&self) -> bool {
        self.revealed
    }

    /// Expand `id` (or collapse it if it is the open one) and mark it viewed.
    ///
    /// Unknown ids are ignored.
    pub fn toggle(&mut self, id: &str) -> bool {
        let Some(item) = APPRECIATION_ITEMS.iter().find(|item| item.id == id) else {
            return false;
        };
        self.expanded = if self.expanded == Some(item.id) {
            None
        } else {
            Some(item.id)
        };
        self.viewed.insert(item.id);
        true
    }

    pub fn reveal(&mut self) -> bool {
        if !self.all_viewed() || self.revealed {
            return false;
        }
        self.revealed = true;
        true
    }
}
