use crate::domain::model::{UserProfile, ANY_LOCATION};
use crate::utils::error::{GuideError, Result};
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const CONFIRM_YES: &str = "confirm_yes";
pub const CONFIRM_NO: &str = "confirm_no";
pub const MIN_ENGLISH_PROFICIENCY: u8 = 1;
pub const MAX_ENGLISH_PROFICIENCY: u8 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConversationState {
    Location,
    Budget,
    MajorField,
    CareerGoal,
    EnglishProficiency,
    Confirm,
    Completed,
    Cancelled,
}

impl ConversationState {
    pub fn is_terminal(self) -> bool {
        matches!(self, ConversationState::Completed | ConversationState::Cancelled)
    }
}

impl fmt::Display for ConversationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ConversationState::Location => "location",
            ConversationState::Budget => "budget",
            ConversationState::MajorField => "major_field",
            ConversationState::CareerGoal => "career_goal",
            ConversationState::EnglishProficiency => "english_proficiency",
            ConversationState::Confirm => "confirm",
            ConversationState::Completed => "completed",
            ConversationState::Cancelled => "cancelled",
        };
        f.write_str(name)
    }
}

/// Accepted answers for the free-text questions. An empty list accepts any
/// non-blank answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnswerOptions {
    pub locations: Vec<String>,
    pub major_fields: Vec<String>,
    pub career_goals: Vec<String>,
}

impl Default for AnswerOptions {
    fn default() -> Self {
        let owned = |items: &[&str]| items.iter().map(|s| s.to_string()).collect();

        Self {
            locations: owned(&["Phnom Penh", "Siem Reap", "Battambang", ANY_LOCATION]),
            major_fields: owned(&[
                "វិស្វកម្ម",
                "បច្ចេកវិទ្យា",
                "វេជ្ជសាស្ត្រ",
                "សុខភាព",
                "ច្បាប់",
                "ធុរកិច្ច",
                "អប់រំ",
                "ភាសា",
                "កសិកម្ម",
                "សេដ្ឋកិច្ច",
                "ទេសចរណ៍",
                "សិល្បៈ",
                "វិទ្យាសាស្ត្រ",
                "សង្គមសាស្ត្រ",
                "ព័ត៌មានវិទ្យា",
            ]),
            career_goals: owned(&[
                "វិស្វករ",
                "អ្នកគ្រប់គ្រង",
                "វេជ្ជបណ្ឌិត",
                "គ្រូបង្រៀន",
                "អ្នកច្បាប់",
            ]),
        }
    }
}

impl AnswerOptions {
    /// Accepts any non-blank answer.
    pub fn unrestricted() -> Self {
        Self {
            locations: Vec::new(),
            major_fields: Vec::new(),
            career_goals: Vec::new(),
        }
    }
}

/// Outcome of feeding one answer into a session.
#[derive(Debug, Clone, PartialEq)]
pub enum Transition {
    /// Answer accepted, now asking for the given field.
    Next(ConversationState),
    /// Profile confirmed.
    Completed(UserProfile),
    /// Profile rejected at confirmation, asking again from the start.
    Restarted,
    Cancelled,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileDraft {
    pub location: Option<String>,
    pub max_budget: Option<f64>,
    pub core_field: Option<String>,
    pub career_goal: Option<String>,
    pub english_proficiency: Option<u8>,
}

impl ProfileDraft {
    fn complete(&self) -> Result<UserProfile> {
        let missing = |field: &str| GuideError::ValidationError {
            message: format!("{} has not been answered", field),
        };

        let profile = UserProfile {
            location: self.location.clone(),
            max_budget: self.max_budget,
            core_field: self.core_field.clone().ok_or_else(|| missing("core_field"))?,
            career_goal: self.career_goal.clone().ok_or_else(|| missing("career_goal"))?,
            english_proficiency: self
                .english_proficiency
                .ok_or_else(|| missing("english_proficiency"))?,
        };
        profile.validate()?;
        Ok(profile)
    }
}

/// Per-user question flow: location → budget → field → goal → proficiency → confirm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    state: ConversationState,
    draft: ProfileDraft,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            state: ConversationState::Location,
            draft: ProfileDraft::default(),
        }
    }

    pub fn state(&self) -> ConversationState {
        self.state
    }

    pub fn draft(&self) -> &ProfileDraft {
        &self.draft
    }

    pub fn cancel(&mut self) -> Result<Transition> {
        self.ensure_open()?;
        self.state = ConversationState::Cancelled;
        Ok(Transition::Cancelled)
    }

    /// 無效的回答不改變狀態，呼叫端可重新提問
    pub fn answer(&mut self, input: &str, options: &AnswerOptions) -> Result<Transition> {
        let input = input.trim();

        let next = match self.state {
            ConversationState::Location => {
                self.draft.location = Some(one_of(input, &options.locations)?);
                ConversationState::Budget
            }
            ConversationState::Budget => {
                self.draft.max_budget = Some(parse_budget(input)?);
                ConversationState::MajorField
            }
            ConversationState::MajorField => {
                self.draft.core_field = Some(one_of(input, &options.major_fields)?);
                ConversationState::CareerGoal
            }
            ConversationState::CareerGoal => {
                self.draft.career_goal = Some(one_of(input, &options.career_goals)?);
                ConversationState::EnglishProficiency
            }
            ConversationState::EnglishProficiency => {
                self.draft.english_proficiency = Some(parse_proficiency(input)?);
                ConversationState::Confirm
            }
            ConversationState::Confirm => return self.confirm(input),
            ConversationState::Completed | ConversationState::Cancelled => {
                return Err(self.closed_error())
            }
        };

        tracing::debug!("Conversation advanced from {} to {}", self.state, next);
        self.state = next;
        Ok(Transition::Next(next))
    }

    fn confirm(&mut self, input: &str) -> Result<Transition> {
        match input {
            CONFIRM_YES | "yes" => {
                let profile = self.draft.complete()?;
                self.state = ConversationState::Completed;
                Ok(Transition::Completed(profile))
            }
            CONFIRM_NO | "no" => {
                *self = Self::new();
                Ok(Transition::Restarted)
            }
            other => Err(GuideError::InvalidAnswer {
                input: other.to_string(),
                reason: format!("expected '{}' or '{}'", CONFIRM_YES, CONFIRM_NO),
            }),
        }
    }

    fn ensure_open(&self) -> Result<()> {
        if self.state.is_terminal() {
            return Err(self.closed_error());
        }
        Ok(())
    }

    fn closed_error(&self) -> GuideError {
        GuideError::SessionClosed {
            state: self.state.to_string(),
        }
    }
}

fn one_of(input: &str, allowed: &[String]) -> Result<String> {
    if input.is_empty() {
        return Err(GuideError::InvalidAnswer {
            input: input.to_string(),
            reason: "answer cannot be empty".to_string(),
        });
    }

    if !allowed.is_empty() && !allowed.iter().any(|option| option == input) {
        return Err(GuideError::InvalidAnswer {
            input: input.to_string(),
            reason: format!("expected one of: {}", allowed.join(", ")),
        });
    }
    Ok(input.to_string())
}

fn parse_budget(input: &str) -> Result<f64> {
    match input.parse::<u64>() {
        Ok(budget) if budget > 0 => Ok(budget as f64),
        _ => Err(GuideError::InvalidAnswer {
            input: input.to_string(),
            reason: "budget must be a positive whole number".to_string(),
        }),
    }
}

fn parse_proficiency(input: &str) -> Result<u8> {
    match input.parse::<u8>() {
        Ok(level) if (MIN_ENGLISH_PROFICIENCY..=MAX_ENGLISH_PROFICIENCY).contains(&level) => {
            Ok(level)
        }
        _ => Err(GuideError::InvalidAnswer {
            input: input.to_string(),
            reason: format!(
                "proficiency must be a whole number from {} to {}",
                MIN_ENGLISH_PROFICIENCY, MAX_ENGLISH_PROFICIENCY
            ),
        }),
    }
}
