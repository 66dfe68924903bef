//! Interruption messages that arrive while the player is working.

/// A workplace message shown to the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub sender: &'static str,
    pub body: &'static str,
    pub urgent: bool,
}

/// Routine interruptions. Ignoring these carries no penalty.
pub const ROUTINE_MESSAGES: [Message; 5] = [
    Message {
        sender: "Boss",
        body: "Are you done with sprint 1?",
        urgent: false,
    },
    Message {
        sender: "Family",
        body: "Can you pick up the kids after work?",
        urgent: false,
    },
    Message {
        sender: "Teammate",
        body: "Hey, push your latest code please.",
        urgent: false,
    },
    Message {
        sender: "HR",
        body: "Reminder: Submit your timesheet today.",
        urgent: false,
    },
    Message {
        sender: "Colleague",
        body: "Coffee break in 5 minutes?",
        urgent: false,
    },
];

/// The urgent accessibility complaint. Ignoring it twice ends the run in
/// the courtroom.
pub const URGENT_MESSAGE: Message = Message {
    sender: "Accessibility Officer",
    body: "URGENT: Fix alt attribute in img1 immediately!",
    urgent: true,
};
