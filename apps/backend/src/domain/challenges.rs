//! The fixed ladder of Python debugging challenges.
//!
//! Answers are compared after whitespace normalization so formatting
//! differences (extra spaces, newlines) never fail a correct fix.

/// One debugging challenge shown to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Challenge {
    pub prompt: &'static str,
    pub code: &'static str,
    pub answer: &'static str,
    pub hint: &'static str,
}

pub const CHALLENGES: [Challenge; 5] = [
    Challenge {
        prompt: "Fix the syntax error in this Python code:",
        code: "def greet(name):\n    print(\"Hello \" + name",
        answer: "def greet(name):\n    print(\"Hello \" + name)",
        hint: "Missing closing parenthesis",
    },
    Challenge {
        prompt: "Fix the indentation error:",
        code: "def calculate():\nreturn 5 + 3",
        answer: "def calculate():\n    return 5 + 3",
        hint: "Python requires proper indentation",
    },
    Challenge {
        prompt: "Fix the list index error:",
        code: "numbers = [1, 2, 3]\nprint(numbers[3])",
        answer: "numbers = [1, 2, 3]\nprint(numbers[2])",
        hint: "List indices start at 0",
    },
    Challenge {
        prompt: "Fix the variable name error:",
        code: "user-name = \"John\"\nprint(user-name)",
        answer: "user_name = \"John\"\nprint(user_name)",
        hint: "Variable names cannot contain hyphens",
    },
    Challenge {
        prompt: "Fix the string concatenation error:",
        code: "age = 25\nprint(\"Age: \" + age)",
        answer: "age = 25\nprint(\"Age: \" + str(age))",
        hint: "Convert integer to string",
    },
];

/// Collapse all runs of whitespace (spaces, tabs, newlines) to single
/// spaces and trim the ends.
pub fn normalize_code(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
