/// The birthday letter shown in the note's first phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Letter {
    pub heading: &'static str,
    pub paragraphs: &'static [&'static str],
    pub quote: &'static str,
    pub sign_off: &'static [&'static str],
}

/// The poem pane and the message printed on the back of the flipped card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Poem {
    pub title: &'static str,
    pub stanzas: &'static [&'static [&'static str]],
    pub back_message: &'static [&'static str],
    pub acknowledgment: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClosingCopy {
    pub heading: &'static str,
    pub kicker: &'static str,
    pub sections: &'static [&'static [&'static str]],
    pub reveal_label: &'static str,
    pub ending: &'static str,
}

pub const LETTER: Letter = Letter {
    heading: "Happy birthday to my most beautiful girl \u{1f90d}",
    paragraphs: &[
        "And I don't just mean beautiful like \"pretty\" (though yeah... you absolutely are). I mean the kind of beautiful that shows up in the way you think, the way you care, the way you keep going even when things feel heavy.",
        "You're the prettiest, the smartest, and honestly... one of the closest people I know to \"almost perfect.\" And I know nobody's actually perfect, but you're dangerously close, and it still surprises me sometimes.",
        "Good luck on your journey, love. I know it's not simple. I know there are days you doubt yourself (even if you don't always say it out loud). But I believe in you. Fully. One day, you're going to be an eye doctor, and not just any doctor. You're going to be that one. The kind people remember.",
        "I wish you health, real health, not just \"not being sick,\" but feeling strong, calm, and at peace in your own body. I wish you rest when you're tired, confidence when you're unsure, and courage when things get scary. I wish you laughter that makes your stomach hurt and quiet moments that make you feel safe.",
        "And... I wish you know this, always: you're not alone. I'm here. Cheering for you. Choosing you. Every step.",
    ],
    quote: "I hope the things you want don't always have to be so hard. I hope what you work for feels lighter.",
    sign_off: &["Happy birthday, my girl.", "I'm so grateful you exist."],
};

pub const POEM: Poem = Poem {
    title: "I Carry You Everywhere",
    stanzas: &[
        &[
            "I like the way your kindness feels",
            "quiet but heavy",
            "like it stays with me after you leave the room",
        ],
        &[
            "You don't even try to be great",
            "you just are",
            "and somehow that makes me want to be near you",
            "all the time",
            "everywhere",
            "even when everywhere is far away",
        ],
        &[
            "We don't meet every day",
            "and yeah, sometimes that hurts",
            "but I carry you anyway",
            "in my heart first",
            "then my watch when I check the time",
            "my phone when I scroll too long",
            "my laptop when I'm pretending to work but really just thinking about you",
        ],
        &["You're always there", "low volume", "steady", "like a song I don't skip"],
        &[
            "So thank you",
            "for being patient with me",
            "for sticking by me when I'm still figuring myself out",
            "for loving me while I'm under construction",
        ],
        &[
            "I'm trying to be better",
            "for real",
            "not overnight",
            "not perfect",
            "but honest",
            "step by step",
        ],
        &[
            "Thank you for existing in my life",
            "for changing the center of it",
            "for being the place my thoughts keep circling back to",
            "like home \u{1f3e0}",
        ],
        &[
            "You're not just someone I love",
            "you're the rhythm of my days",
            "and I'm grateful",
            "always",
            "that you're mine \u{1f90d}",
        ],
    ],
    back_message: &[
        "These past seven months have been a roller coaster, yeah. Up high some days, shaky on others. But honestly? I've loved the ride.",
        "Thank you for this time. For the kindness you give so freely. You're the purest kind of girl I've ever known, and I love you just for being exactly who you are.",
        "You took my world when it was grey and slowly colored it into something lighter, warmer, softer. And for that, for you, for us... thank you. Always.",
    ],
    acknowledgment: "I've read every single word. \u{1f90d}",
};

pub const CLOSING: ClosingCopy = ClosingCopy {
    heading: "In Case You Ever Doubt",
    kicker: "The Truth",
    sections: &[
        &["You've read the words. You've seen the memories.", "So here's the truth."],
        &[
            "I don't love you because you're perfect.",
            "I love you because being with you feels like home, even on the hard days.",
        ],
        &[
            "On days you feel unsure, tired, or not enough,",
            "I hope you remember that someone chose you,",
            "and keeps choosing you.",
        ],
        &["Right now, today, I'm here.", "And I'm happy it's you."],
    ],
    reveal_label: "Is this the end?",
    ending: "There is no end. I'm still here.",
};
