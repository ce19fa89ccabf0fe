//! Ordered keyword rules that map a normalized message to an [`Intent`].
//!
//! The table is plain data: a list of [`Rule`]s evaluated top to bottom.
//! The first rule whose predicate fires decides the intent. Nothing is
//! scored, and no later rule is looked at once one has matched.

use regex::Regex;
use serde::Serialize;

/// Category of request the assistant recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// Finding, joining or creating study groups.
    StudyGroups,
    /// Teacher office hours and consultation times.
    TeacherAvailability,
    /// Teacher office locations.
    TeacherSeating,
    /// Teacher question without a more specific sub-topic.
    TeacherInfo,
    /// College clubs and activities.
    Clubs,
    /// Buses, shuttles and commuting.
    Transport,
    /// Alumni and mentoring.
    Alumni,
    /// Phone numbers and emails.
    Contacts,
    /// Notes, books and study material.
    Resources,
    /// First-year information.
    FirstYear,
    /// Second-year information.
    SecondYear,
    /// Branches, majors and departments.
    Specializations,
    /// Salutation at the start of the message.
    Greeting,
    /// Asking what the assistant can do.
    Help,
    /// Gratitude.
    Thanks,
    /// Nothing recognized.
    Fallback,
}

impl Intent {
    /// Stable snake_case name, matching the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::StudyGroups => "study_groups",
            Self::TeacherAvailability => "teacher_availability",
            Self::TeacherSeating => "teacher_seating",
            Self::TeacherInfo => "teacher_info",
            Self::Clubs => "clubs",
            Self::Transport => "transport",
            Self::Alumni => "alumni",
            Self::Contacts => "contacts",
            Self::Resources => "resources",
            Self::FirstYear => "first_year",
            Self::SecondYear => "second_year",
            Self::Specializations => "specializations",
            Self::Greeting => "greeting",
            Self::Help => "help",
            Self::Thanks => "thanks",
            Self::Fallback => "fallback",
        }
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Keyword lists
// ---------------------------------------------------------------------------

const STUDY_GROUP_KEYWORDS: &[&str] = &["study group", "group study", "peer study"];
const TEACHER_KEYWORDS: &[&str] = &["teacher", "professor", "faculty", "instructor"];
const TEACHER_AVAILABILITY_KEYWORDS: &[&str] = &["available", "schedule", "when"];
const TEACHER_SEATING_KEYWORDS: &[&str] = &["seat", "office", "where", "location"];
const CLUB_KEYWORDS: &[&str] = &["club", "activity", "activities", "extracurricular"];
const TRANSPORT_KEYWORDS: &[&str] = &["transport", "bus", "shuttle", "commute"];
const ALUMNI_KEYWORDS: &[&str] = &["alumni", "graduate", "network", "mentor"];
const CONTACT_KEYWORDS: &[&str] = &["contact", "phone", "email", "call", "reach"];
const RESOURCE_KEYWORDS: &[&str] = &["resource", "material", "note", "book"];
const FIRST_YEAR_KEYWORDS: &[&str] = &["first year", "freshman", "fy"];
const SECOND_YEAR_KEYWORDS: &[&str] = &["second year", "sophomore", "sy"];
const SPECIALIZATION_KEYWORDS: &[&str] = &["specialization", "branch", "major", "department"];
const HELP_KEYWORDS: &[&str] = &["help", "what can you", "how can you", "assist"];
const THANKS_KEYWORDS: &[&str] = &["thank", "thanks"];

/// Salutations that only count at the very start of a message.
pub const GREETING_WORDS: &[&str] = &[
    "hello",
    "hi",
    "hey",
    "greetings",
    "good morning",
    "good afternoon",
    "good evening",
];

// ---------------------------------------------------------------------------
// Predicates and rules
// ---------------------------------------------------------------------------

/// Boolean test over a normalized (lower-cased) message.
#[derive(Debug, Clone)]
pub enum Predicate {
    /// Fires when any keyword occurs anywhere in the message.
    ContainsAny(&'static [&'static str]),
    /// Fires when the regex matches; the pattern carries its own anchor.
    Anchored(Regex),
}

impl Predicate {
    /// Build a predicate matching any of `words` at position 0.
    ///
    /// # Errors
    ///
    /// Returns the regex error if the alternation cannot be compiled.
    pub fn starts_with_any(words: &[&str]) -> Result<Self, regex::Error> {
        let alternation = words
            .iter()
            .map(|w| regex::escape(w))
            .collect::<Vec<_>>()
            .join("|");
        let regex = Regex::new(&format!("^(?:{alternation})"))?;
        Ok(Self::Anchored(regex))
    }

    /// Evaluate against an already-normalized message.
    pub fn matches(&self, normalized: &str) -> bool {
        match self {
            Self::ContainsAny(keywords) => keywords.iter().any(|kw| normalized.contains(kw)),
            Self::Anchored(regex) => regex.is_match(normalized),
        }
    }
}

/// What a rule resolves to once its predicate has fired.
#[derive(Debug, Clone)]
pub enum Outcome {
    /// A single intent.
    Intent(Intent),
    /// A nested first-match list, with a default when no sub-rule fires.
    Refine {
        /// Sub-rules checked in order.
        rules: Vec<Rule>,
        /// Intent used when none of the sub-rules fire.
        otherwise: Intent,
    },
}

/// One entry of the rule table.
#[derive(Debug, Clone)]
pub struct Rule {
    /// Trigger test.
    pub predicate: Predicate,
    /// Result when the trigger fires.
    pub outcome: Outcome,
}

impl Rule {
    /// Rule that maps straight to `intent` when any keyword is present.
    pub fn keywords(keywords: &'static [&'static str], intent: Intent) -> Self {
        Self {
            predicate: Predicate::ContainsAny(keywords),
            outcome: Outcome::Intent(intent),
        }
    }

    /// Return the intent this rule yields for `normalized`, or `None` when
    /// the predicate does not fire.
    pub fn resolve(&self, normalized: &str) -> Option<Intent> {
        if !self.predicate.matches(normalized) {
            return None;
        }
        match &self.outcome {
            Outcome::Intent(intent) => Some(*intent),
            Outcome::Refine { rules, otherwise } => Some(
                rules
                    .iter()
                    .find_map(|rule| rule.resolve(normalized))
                    .unwrap_or(*otherwise),
            ),
        }
    }
}

/// Immutable, ordered list of rules.
#[derive(Debug, Clone)]
pub struct RuleTable {
    rules: Vec<Rule>,
}

impl RuleTable {
    /// Wrap an explicit rule list. Order is priority.
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// The campus assistant's rule table.
    ///
    /// # Errors
    ///
    /// Returns the regex error if the greeting pattern fails to compile.
    pub fn standard() -> Result<Self, regex::Error> {
        let teacher = Rule {
            predicate: Predicate::ContainsAny(TEACHER_KEYWORDS),
            outcome: Outcome::Refine {
                rules: vec![
                    Rule::keywords(TEACHER_AVAILABILITY_KEYWORDS, Intent::TeacherAvailability),
                    Rule::keywords(TEACHER_SEATING_KEYWORDS, Intent::TeacherSeating),
                ],
                otherwise: Intent::TeacherInfo,
            },
        };
        let greeting = Rule {
            predicate: Predicate::starts_with_any(GREETING_WORDS)?,
            outcome: Outcome::Intent(Intent::Greeting),
        };

        Ok(Self::new(vec![
            Rule::keywords(STUDY_GROUP_KEYWORDS, Intent::StudyGroups),
            teacher,
            Rule::keywords(CLUB_KEYWORDS, Intent::Clubs),
            Rule::keywords(TRANSPORT_KEYWORDS, Intent::Transport),
            Rule::keywords(ALUMNI_KEYWORDS, Intent::Alumni),
            Rule::keywords(CONTACT_KEYWORDS, Intent::Contacts),
            Rule::keywords(RESOURCE_KEYWORDS, Intent::Resources),
            Rule::keywords(FIRST_YEAR_KEYWORDS, Intent::FirstYear),
            Rule::keywords(SECOND_YEAR_KEYWORDS, Intent::SecondYear),
            Rule::keywords(SPECIALIZATION_KEYWORDS, Intent::Specializations),
            greeting,
            Rule::keywords(HELP_KEYWORDS, Intent::Help),
            Rule::keywords(THANKS_KEYWORDS, Intent::Thanks),
        ]))
    }

    /// First matching intent, or `None` if no rule fires.
    pub fn first_match(&self, normalized: &str) -> Option<Intent> {
        self.rules.iter().find_map(|rule| rule.resolve(normalized))
    }

    /// Matching intent, with [`Intent::Fallback`] when no rule fires.
    pub fn classify(&self, normalized: &str) -> Intent {
        self.first_match(normalized).unwrap_or(Intent::Fallback)
    }

    /// Every intent the table can produce, in evaluation order.
    ///
    /// Sub-rules are listed before their parent's default.
    pub fn intents_in_order(&self) -> Vec<Intent> {
        fn walk(rules: &[Rule], out: &mut Vec<Intent>) {
            for rule in rules {
                match &rule.outcome {
                    Outcome::Intent(intent) => out.push(*intent),
                    Outcome::Refine { rules, otherwise } => {
                        walk(rules, out);
                        out.push(*otherwise);
                    }
                }
            }
        }

        let mut out = Vec::new();
        walk(&self.rules, &mut out);
        out
    }

    /// Number of top-level rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the table has no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
