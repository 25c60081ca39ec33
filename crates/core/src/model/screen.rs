use serde::{Deserialize, Serialize};

/// One mutually exclusive view of the card.
///
/// The order is linear; `successor` and `predecessor` form the transition
/// table the session walks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Screen {
    Login,
    Card,
    Note,
    Appreciation,
    Quiz,
    Gallery,
    Closing,
}

impl Screen {
    pub const ALL: [Screen; 7] = [
        Screen::Login,
        Screen::Card,
        Screen::Note,
        Screen::Appreciation,
        Screen::Quiz,
        Screen::Gallery,
        Screen::Closing,
    ];

    /// Next screen in the forward order. `Closing` has none.
    #[must_use]
    pub const fn successor(self) -> Option<Screen> {
        match self {
            Screen::Login => Some(Screen::Card),
            Screen::Card => Some(Screen::Note),
            Screen::Note => Some(Screen::Appreciation),
            Screen::Appreciation => Some(Screen::Quiz),
            Screen::Quiz => Some(Screen::Gallery),
            Screen::Gallery => Some(Screen::Closing),
            Screen::Closing => None,
        }
    }

    /// Screen reached by going back.
    ///
    /// `Login` is never a predecessor: once past the gate, `Card` is the floor.
    #[must_use]
    pub const fn predecessor(self) -> Option<Screen> {
        match self {
            Screen::Login | Screen::Card => None,
            Screen::Note => Some(Screen::Card),
            Screen::Appreciation => Some(Screen::Note),
            Screen::Quiz => Some(Screen::Appreciation),
            Screen::Gallery => Some(Screen::Quiz),
            Screen::Closing => Some(Screen::Gallery),
        }
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub const fn is_terminal(self) -> bool {
        self.successor().is_none()
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Screen::Login => "Welcome Back",
            Screen::Card => "Let's Celebrate!",
            Screen::Note => "A Letter For You",
            Screen::Appreciation => "What I Adore",
            Screen::Quiz => "Pop Quiz",
            Screen::Gallery => "Memories",
            Screen::Closing => "In Case You Ever Doubt",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_is_in_declaration_order() {
        for (idx, screen) in Screen::ALL.iter().enumerate() {
            assert_eq!(screen.index(), idx);
        }
    }

    #[test]
    fn successor_walk_visits_every_screen_once() {
        let mut seen = vec![Screen::Login];
        let mut current = Screen::Login;
        while let Some(next) = current.successor() {
            assert!(!seen.contains(&next));
            seen.push(next);
            current = next;
        }
        assert_eq!(seen, Screen::ALL.to_vec());
        assert!(current.is_terminal());
    }

    #[test]
    fn predecessor_inverts_successor_above_the_floor() {
        for screen in Screen::ALL {
            if let Some(next) = screen.successor() {
                if screen == Screen::Login {
                    assert_eq!(next.predecessor(), None);
                } else {
                    assert_eq!(next.predecessor(), Some(screen));
                }
            }
        }
    }

    #[test]
    fn backward_walk_stops_at_card() {
        let mut current = Screen::Closing;
        while let Some(prev) = current.predecessor() {
            current = prev;
        }
        assert_eq!(current, Screen::Card);
    }

    #[test]
    fn serializes_as_variant_name() {
        let json = serde_json::to_string(&Screen::Appreciation).unwrap();
        assert_eq!(json, "\"Appreciation\"");
        let back: Screen = serde_json::from_str("\"Quiz\"").unwrap();
        assert_eq!(back, Screen::Quiz);
    }
}
