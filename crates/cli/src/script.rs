// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Command scripts.
//!
//! A script drives one timecard through a sequence of steps. Lines are
//! referred to by the position they were recorded at, so scripts never need
//! to know generated identifiers.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use timecard_api::{
    ApiError, ApprovalRequest, CancellationRequest, CreateTimecardRequest, DeletionRequest,
    LineResponse, RejectionRequest, SubmittalRequest, TimecardLineRequest, TimecardResponse,
    approve_timecard, cancel_timecard, create_timecard, delete_timecard, get_submittal,
    get_timecard, list_lines, list_transitions, record_line, reject_timecard, replace_line,
    submit_timecard, update_line,
};
use timecard_persistence::TimecardStore;
use tracing::{debug, warn};

/// A parsed command script.
#[derive(Debug, Clone, Deserialize)]
pub struct Script {
    pub steps: Vec<Step>,
}

/// One step of a script.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "command", rename_all = "camelCase")]
pub enum Step {
    RecordLine {
        line: TimecardLineRequest,
    },
    ReplaceLine {
        index: usize,
        line: TimecardLineRequest,
    },
    UpdateLine {
        index: usize,
        line: TimecardLineRequest,
    },
    Submit,
    Reject {
        reviewer: Option<i64>,
        #[serde(default)]
        reason: String,
    },
    Approve {
        reviewer: Option<i64>,
    },
    Cancel {
        #[serde(default)]
        reason: String,
    },
    Delete,
    Show,
    Lines,
    Transitions,
    Submittal,
}

impl Step {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::RecordLine { .. } => "recordLine",
            Self::ReplaceLine { .. } => "replaceLine",
            Self::UpdateLine { .. } => "updateLine",
            Self::Submit => "submit",
            Self::Reject { .. } => "reject",
            Self::Approve { .. } => "approve",
            Self::Cancel { .. } => "cancel",
            Self::Delete => "delete",
            Self::Show => "show",
            Self::Lines => "lines",
            Self::Transitions => "transitions",
            Self::Submittal => "submittal",
        }
    }
}

/// The outcome of a single step.
#[derive(Debug, Clone, Serialize)]
pub struct StepOutcome {
    pub step: usize,
    pub command: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Everything a script run produced.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub created: TimecardResponse,
    pub steps: Vec<StepOutcome>,
    /// The timecard after the last step, absent if it was deleted.
    #[serde(rename = "final", skip_serializing_if = "Option::is_none")]
    pub final_timecard: Option<TimecardResponse>,
}

/// Runs script steps against one timecard.
pub struct ScriptRunner<S: TimecardStore> {
    store: S,
    resource: i64,
    timecard_id: String,
    line_ids: Vec<String>,
}

impl<S: TimecardStore> ScriptRunner<S> {
    /// Opens a timecard for `resource` and prepares to run steps on it.
    ///
    /// # Errors
    ///
    /// Returns an error if the timecard cannot be created.
    pub fn start(mut store: S, resource: i64) -> Result<(Self, TimecardResponse), ApiError> {
        let created: TimecardResponse =
            create_timecard(&mut store, &CreateTimecardRequest { resource })?;
        let runner: Self = Self {
            store,
            resource,
            timecard_id: created.id.clone(),
            line_ids: Vec::new(),
        };
        Ok((runner, created))
    }

    /// Runs every step of `script`, continuing past refused steps.
    pub fn run(mut self, created: TimecardResponse, script: &Script) -> Report {
        let steps: Vec<StepOutcome> = script
            .steps
            .iter()
            .enumerate()
            .map(|(index, step)| {
                let outcome: Result<Value, ApiError> = self.run_step(step);
                match outcome {
                    Ok(result) => StepOutcome {
                        step: index,
                        command: step.name(),
                        result: Some(result),
                        error: None,
                    },
                    Err(err) => {
                        warn!(step = index, command = step.name(), error = %err, "Step failed");
                        StepOutcome {
                            step: index,
                            command: step.name(),
                            result: None,
                            error: Some(err.to_string()),
                        }
                    }
                }
            })
            .collect();

        Report {
            created,
            steps,
            final_timecard: get_timecard(&self.store, &self.timecard_id).ok(),
        }
    }

    /// Runs one step and returns its response as JSON.
    ///
    /// # Errors
    ///
    /// Returns the API error the step produced, or `InvalidInput` if the
    /// step names a line position that was never recorded.
    pub fn run_step(&mut self, step: &Step) -> Result<Value, ApiError> {
        debug!(command = step.name(), timecard_id = %self.timecard_id, "Running step");
        let id: &str = &self.timecard_id;
        match step {
            Step::RecordLine { line } => {
                let recorded: LineResponse = record_line(&mut self.store, id, line)?;
                self.line_ids.push(recorded.unique_identifier.clone());
                to_value(&recorded)
            }
            Step::ReplaceLine { index, line } => {
                let line_id: String = self.line_id(*index)?;
                let replaced: LineResponse = replace_line(&mut self.store, id, &line_id, line)?;
                self.line_ids[*index] = replaced.unique_identifier.clone();
                to_value(&replaced)
            }
            Step::UpdateLine { index, line } => {
                let line_id: String = self.line_id(*index)?;
                to_value(&update_line(&mut self.store, id, &line_id, line)?)
            }
            Step::Submit => to_value(&submit_timecard(
                &mut self.store,
                id,
                &SubmittalRequest {
                    resource: self.resource,
                },
            )?),
            Step::Reject { reviewer, reason } => to_value(&reject_timecard(
                &mut self.store,
                id,
                &RejectionRequest {
                    resource: reviewer.unwrap_or(self.resource),
                    reason: reason.clone(),
                },
            )?),
            Step::Approve { reviewer } => to_value(&approve_timecard(
                &mut self.store,
                id,
                &ApprovalRequest {
                    resource: reviewer.unwrap_or(self.resource),
                },
            )?),
            Step::Cancel { reason } => to_value(&cancel_timecard(
                &mut self.store,
                id,
                &CancellationRequest {
                    resource: self.resource,
                    reason: reason.clone(),
                },
            )?),
            Step::Delete => {
                delete_timecard(
                    &mut self.store,
                    id,
                    &DeletionRequest {
                        resource: self.resource,
                    },
                )?;
                Ok(Value::Null)
            }
            Step::Show => to_value(&get_timecard(&self.store, id)?),
            Step::Lines => to_value(&list_lines(&self.store, id)?),
            Step::Transitions => to_value(&list_transitions(&self.store, id)?),
            Step::Submittal => to_value(&get_submittal(&self.store, id)?),
        }
    }

    fn line_id(&self, index: usize) -> Result<String, ApiError> {
        self.line_ids
            .get(index)
            .cloned()
            .ok_or_else(|| ApiError::InvalidInput {
                field: String::from("index"),
                message: format!(
                    "No line at position {index}; {} line(s) recorded",
                    self.line_ids.len()
                ),
            })
    }
}

fn to_value<T: Serialize>(response: &T) -> Result<Value, ApiError> {
    serde_json::to_value(response).map_err(|e| ApiError::Internal {
        message: format!("Failed to serialize response: {e}"),
    })
}
