//! Cue pattern tables for the rule-based extractor.
//!
//! Patterns live here as tagged data rather than inline literals so each cue
//! can be unit-tested on its own and swapped per locale later. All patterns
//! are case-insensitive.

/// A named regex cue. `label` identifies the cue in tests and logs.
pub struct CuePattern {
    pub label: &'static str,
    pub pattern: &'static str,
}

/// A named regex cue whose capture group `group` holds the extracted text.
pub struct CapturePattern {
    pub label: &'static str,
    pub pattern: &'static str,
    pub group: usize,
}

/// A sentence containing any of these is recorded as a decision.
pub const DECISION_CUES: &[CuePattern] = &[
    CuePattern { label: "we-decided", pattern: r"(?i)\bwe(?:'ve| have)? decided\b" },
    CuePattern { label: "it-was-decided", pattern: r"(?i)\bit was decided\b" },
    CuePattern { label: "decision-made", pattern: r"(?i)\bdecision (?:was|has been) made\b" },
    CuePattern { label: "agreed", pattern: r"(?i)\b(?:we|everyone|all) agreed\b" },
    CuePattern { label: "approved", pattern: r"(?i)\bapproved\b" },
    CuePattern { label: "go-with", pattern: r"(?i)\bgo(?:ing)? with\b" },
    CuePattern { label: "settled-on", pattern: r"(?i)\bsettled on\b" },
    CuePattern { label: "concluded", pattern: r"(?i)\bconcluded that\b" },
    CuePattern { label: "resolved-to", pattern: r"(?i)\bresolved to\b" },
    CuePattern { label: "final-call", pattern: r"(?i)\bfinal (?:decision|call)\b" },
    CuePattern { label: "signed-off", pattern: r"(?i)\bsign(?:ed)? off\b" },
];

/// Obligation clauses that read as action items. The first matching pattern
/// wins for a sentence; the capture group holds the task text.
pub const ACTION_CUES: &[CapturePattern] = &[
    CapturePattern {
        label: "pronoun-will",
        pattern: r"(?i)\b(?:i|we|he|she|they|you)\s+will\s+(.+)",
        group: 1,
    },
    CapturePattern {
        label: "subject-will",
        pattern: r"(?i)^\s*[a-z]+\s+will\s+(.+)",
        group: 1,
    },
    CapturePattern {
        label: "need-to",
        pattern: r"(?i)\bneeds?\s+to\s+(.+)",
        group: 1,
    },
    CapturePattern {
        label: "should",
        pattern: r"(?i)\bshould\s+(.+)",
        group: 1,
    },
    CapturePattern {
        label: "please",
        pattern: r"(?i)\bplease\s+(.+)",
        group: 1,
    },
    CapturePattern {
        label: "must",
        pattern: r"(?i)\bmust\s+(.+)",
        group: 1,
    },
    CapturePattern {
        label: "has-to",
        pattern: r"(?i)\b(?:has|have)\s+to\s+(.+)",
        group: 1,
    },
    CapturePattern {
        label: "action-item",
        pattern: r"(?i)\baction item[:\s]\s*(.+)",
        group: 1,
    },
];

/// Due-date cues, checked anywhere in the sentence; the capture group is the
/// due text returned verbatim.
pub const DUE_CUES: &[CapturePattern] = &[
    CapturePattern {
        label: "weekday",
        pattern: r"(?i)\b(monday|tuesday|wednesday|thursday|friday|saturday|sunday)\b",
        group: 1,
    },
    CapturePattern {
        label: "tomorrow",
        pattern: r"(?i)\b(tomorrow)\b",
        group: 1,
    },
    CapturePattern {
        label: "next-week",
        pattern: r"(?i)\b(next week)\b",
        group: 1,
    },
    CapturePattern {
        label: "end-of",
        pattern: r"(?i)\b(end of (?:the )?(?:day|week|month))\b",
        group: 1,
    },
    CapturePattern {
        label: "date",
        pattern: r"\b(\d{1,2}/\d{1,2}(?:/\d{2,4})?)\b",
        group: 1,
    },
];

/// An explicit subject at the head of a sentence that takes ownership of the
/// action item ("Alice will…", "Ops needs to…").
pub const OWNER_PATTERN: &str = r"(?i)^\s*([a-z]+)\s+(?:will|needs?\s+to|should)\b";

/// Question starters for follow-up generation; cycled deterministically by
/// topic index.
pub const FOLLOW_UP_STARTERS: &[&str; 8] = &[
    "Who is responsible for",
    "What is the timeline for",
    "What are the next steps for",
    "What risks are associated with",
    "How will success be measured for",
    "What resources are needed for",
    "Who else should be involved in",
    "What is the current status of",
];
